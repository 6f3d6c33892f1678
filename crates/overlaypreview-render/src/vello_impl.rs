//! Preview painter backed by a Vello scene.

use crate::renderer::{PreviewPainter, RenderContext, Renderer, draw_preview};
use kurbo::{Affine, Rect, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Paints the preview into a [`Scene`] the host composites into its frame.
pub struct VelloRenderer {
    /// Scene for the current frame, rebuilt by every `build_scene`.
    scene: Scene,
    /// Widget-local to scene transform for the current frame.
    transform: Affine,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Renderer with an empty scene.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Get a reference to the built scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the built scene, leaving an empty one.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl PreviewPainter for VelloRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, &rect);
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color) {
        self.scene.stroke(&Stroke::new(width), self.transform, color, None, &rect);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        self.transform = ctx.transform();
        draw_preview(self, ctx.state, ctx.palette);
    }
}
