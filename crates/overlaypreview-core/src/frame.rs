//! Canvas-space rectangles derived from the canonical specs.

use crate::config::PreviewConfig;
use crate::geometry::{DisplaySpec, OverlaySpec, PixelRect, PixelSize, round_px};
use crate::mapper::CoordinateMapper;

/// Where the display and the overlay are drawn inside the widget.
///
/// Fully derived: rebuilt from the widget size and the two specs whenever
/// any of them changes, never edited incrementally except by an active drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasFrame {
    /// Letterboxed display area.
    pub display_rect: PixelRect,
    /// Overlay preview, always inside `display_rect`.
    pub overlay_rect: PixelRect,
}

impl CanvasFrame {
    /// Mapper for this frame's display rect.
    pub fn mapper(&self, display: DisplaySpec) -> CoordinateMapper {
        CoordinateMapper::new(self.display_rect, display)
    }

    /// True until a recompute has succeeded at least once.
    pub fn is_empty(&self) -> bool {
        self.display_rect.is_empty()
    }
}

/// Largest rect with the given aspect ratio that fits centered in `area`.
///
/// Returns `None` when the area or the aspect ratio is degenerate.
pub fn contain_fit(area: PixelRect, aspect_ratio: f64) -> Option<PixelRect> {
    if area.is_empty() || !(aspect_ratio > 0.0) || !aspect_ratio.is_finite() {
        return None;
    }

    let area_aspect = area.width as f64 / area.height as f64;
    let fitted = if area_aspect > aspect_ratio {
        // Area is wider than the display: full height, pillarboxed.
        let height = area.height;
        let width = round_px(height as f64 * aspect_ratio).min(area.width);
        PixelRect::new(area.x + (area.width - width) / 2, area.y, width, height)
    } else {
        // Area is taller (or equal): full width, letterboxed.
        let width = area.width;
        let height = round_px(width as f64 / aspect_ratio).min(area.height);
        PixelRect::new(area.x, area.y + (area.height - height) / 2, width, height)
    };

    (!fitted.is_empty()).then_some(fitted)
}

/// Overlay preview rect for a known display rect.
///
/// Each dimension is floored at the handle-derived minimum and capped at the
/// display rect, then the position (never the size) is clamped inside.
pub fn overlay_preview_rect(
    display_rect: PixelRect,
    display: &DisplaySpec,
    overlay: &OverlaySpec,
    min_size: i32,
) -> PixelRect {
    let mapper = CoordinateMapper::new(display_rect, *display);
    let scaled = mapper.to_canvas_size(overlay.size());
    let size = PixelSize::new(
        scaled.width.max(min_size).min(display_rect.width),
        scaled.height.max(min_size).min(display_rect.height),
    );
    let origin = mapper.to_canvas(overlay.position());
    PixelRect::from_origin_size(origin, size).clamp_position_within(&display_rect)
}

/// Recompute the canvas frame.
///
/// Returns `None` when the widget's drawable area or the display is
/// zero-sized; callers keep their previous frame in that case.
pub fn recompute_frame(
    widget_size: PixelSize,
    display: &DisplaySpec,
    overlay: &OverlaySpec,
    config: &PreviewConfig,
) -> Option<CanvasFrame> {
    if !display.is_valid() {
        return None;
    }
    let drawable = PixelRect::new(0, 0, widget_size.width, widget_size.height).inset(config.border);
    let display_rect = contain_fit(drawable, display.aspect_ratio())?;
    let min_size = config.min_preview_size();
    let overlay_rect = overlay_preview_rect(display_rect, display, overlay, min_size);
    Some(CanvasFrame { display_rect, overlay_rect })
}
