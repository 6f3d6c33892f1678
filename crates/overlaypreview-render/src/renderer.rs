//! Renderer trait abstraction and the shared draw routine.

use kurbo::{Affine, Point, Rect};
use overlaypreview_core::config::{Palette, Rgba};
use overlaypreview_core::preview::{OverlayVisual, RenderState};
use peniko::Color;

/// Outline width for the display and overlay borders.
const OUTLINE_WIDTH: f64 = 1.0;

/// Convert a configured color to a peniko color.
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Overlay fill alpha for a visual state.
pub fn overlay_alpha(visual: OverlayVisual, palette: &Palette) -> u8 {
    match visual {
        OverlayVisual::Resting => palette.resting_alpha,
        OverlayVisual::Hovered => palette.hover_alpha,
        OverlayVisual::Dragging => palette.drag_alpha,
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Snapshot of the preview to draw.
    pub state: &'a RenderState,
    /// Colors.
    pub palette: &'a Palette,
    /// Widget top-left in target coordinates.
    pub origin: Point,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context drawing at the target origin.
    pub fn new(state: &'a RenderState, palette: &'a Palette) -> Self {
        Self {
            state,
            palette,
            origin: Point::ZERO,
            scale_factor: 1.0,
        }
    }

    /// Set where the widget's top-left lands in the target.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Widget-local to target transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::scale(self.scale_factor)
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        to_color(ctx.palette.background)
    }
}

/// Minimal drawing surface the preview needs. Coordinates are widget-local.
pub trait PreviewPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color);
}

/// Stroke path for a 1px outline lying on the rect's own pixels.
fn outline(rect: Rect) -> Rect {
    rect.inset(-OUTLINE_WIDTH / 2.0)
}

/// Issue the draw calls for one frame of the preview.
///
/// Order: background, display area with border, overlay fill and outline,
/// then the corner handles on top. Without a frame only the background is
/// drawn.
pub fn draw_preview<P: PreviewPainter + ?Sized>(
    painter: &mut P,
    state: &RenderState,
    palette: &Palette,
) {
    painter.fill_rect(state.widget_rect.into(), to_color(palette.background));
    if state.frame.is_empty() {
        return;
    }

    let display: Rect = state.frame.display_rect.into();
    painter.fill_rect(display, to_color(palette.display_fill));
    painter.stroke_rect(outline(display), OUTLINE_WIDTH, to_color(palette.display_border));

    let overlay: Rect = state.frame.overlay_rect.into();
    let fill = palette.overlay_fill.with_alpha(overlay_alpha(state.visual, palette));
    painter.fill_rect(overlay, to_color(fill));
    painter.stroke_rect(outline(overlay), OUTLINE_WIDTH, to_color(palette.overlay_stroke));

    let handle_color = to_color(palette.handle);
    for handle in &state.handles {
        painter.fill_rect(handle.rect.into(), handle_color);
    }
}
