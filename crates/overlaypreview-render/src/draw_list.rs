//! Recording painter.

use crate::renderer::{PreviewPainter, RenderContext, Renderer, draw_preview};
use kurbo::{Affine, Rect};
use peniko::Color;

/// One recorded draw call. Colors are kept as 8-bit RGBA.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, rgba: [u8; 4] },
    StrokeRect { rect: Rect, width: f64, rgba: [u8; 4] },
}

impl DrawCommand {
    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::FillRect { rect, .. } | DrawCommand::StrokeRect { rect, .. } => *rect,
        }
    }

    pub fn rgba(&self) -> [u8; 4] {
        match self {
            DrawCommand::FillRect { rgba, .. } | DrawCommand::StrokeRect { rgba, .. } => *rgba,
        }
    }
}

fn rgba8(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

/// Painter that records draw calls instead of rasterizing them.
///
/// Used headless, and as a [`Renderer`] whose output can be inspected.
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    transform: Affine,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform: Affine::IDENTITY,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl PreviewPainter for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect: self.transform.transform_rect_bbox(rect),
            rgba: rgba8(color),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect: self.transform.transform_rect_bbox(rect),
            width,
            rgba: rgba8(color),
        });
    }
}

impl Renderer for DrawList {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.clear();
        self.transform = ctx.transform();
        draw_preview(self, ctx.state, ctx.palette);
    }
}
