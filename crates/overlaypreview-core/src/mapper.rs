//! Conversion between real display pixels and preview canvas pixels.

use crate::geometry::{DisplaySpec, PixelPoint, PixelRect, PixelSize, round_px};

/// Maps between the real display and its letterboxed preview.
///
/// The mapper is a plain value built from the current `display_rect` and
/// `DisplaySpec`; it holds no state of its own and can be rebuilt whenever
/// either input changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    /// Where the display is drawn inside the widget.
    pub display_rect: PixelRect,
    /// Real resolution of the display.
    pub display: DisplaySpec,
}

impl CoordinateMapper {
    pub fn new(display_rect: PixelRect, display: DisplaySpec) -> Self {
        Self { display_rect, display }
    }

    /// Convert a real display point to canvas coordinates.
    ///
    /// The point is first clamped onto the display, so a real offset past
    /// the display edge lands on the display rect's far edge. Returns the
    /// display rect's origin when the display is degenerate.
    pub fn to_canvas(&self, real: PixelPoint) -> PixelPoint {
        if !self.display.is_valid() {
            return self.display_rect.origin();
        }
        let x = real.x.clamp(0, self.display.width_px);
        let y = real.y.clamp(0, self.display.height_px);
        PixelPoint::new(
            self.display_rect.x.saturating_add(self.to_canvas_len_x(x)),
            self.display_rect.y.saturating_add(self.to_canvas_len_y(y)),
        )
    }

    /// Convert a canvas point to real display coordinates, clamped to >= 0.
    pub fn to_real(&self, canvas: PixelPoint) -> PixelPoint {
        if self.display_rect.is_empty() || !self.display.is_valid() {
            return PixelPoint::ZERO;
        }
        let dx = canvas.x.saturating_sub(self.display_rect.x);
        let dy = canvas.y.saturating_sub(self.display_rect.y);
        let x = scale(dx, self.display.width_px, self.display_rect.width);
        let y = scale(dy, self.display.height_px, self.display_rect.height);
        PixelPoint::new(x.max(0), y.max(0))
    }

    /// Scale a real horizontal extent into canvas pixels.
    pub fn to_canvas_len_x(&self, real: i32) -> i32 {
        scale(real, self.display_rect.width, self.display.width_px)
    }

    /// Scale a real vertical extent into canvas pixels.
    pub fn to_canvas_len_y(&self, real: i32) -> i32 {
        scale(real, self.display_rect.height, self.display.height_px)
    }

    /// Scale a real size into canvas pixels (no minimum applied).
    pub fn to_canvas_size(&self, real: PixelSize) -> PixelSize {
        if !self.display.is_valid() {
            return PixelSize::default();
        }
        PixelSize::new(self.to_canvas_len_x(real.width), self.to_canvas_len_y(real.height))
    }

    /// Scale a canvas size into real pixels, each dimension at least 1.
    pub fn to_real_size(&self, canvas: PixelSize) -> PixelSize {
        if self.display_rect.is_empty() {
            return PixelSize::new(1, 1);
        }
        PixelSize::new(
            scale(canvas.width, self.display.width_px, self.display_rect.width).max(1),
            scale(canvas.height, self.display.height_px, self.display_rect.height).max(1),
        )
    }

    /// Real pixels covered by one canvas pixel, horizontally.
    pub fn real_per_canvas_x(&self) -> f64 {
        if self.display_rect.width <= 0 {
            return 0.0;
        }
        self.display.width_px as f64 / self.display_rect.width as f64
    }
}

/// `value * numerator / denominator`, rounded; 0 for a zero denominator.
fn scale(value: i32, numerator: i32, denominator: i32) -> i32 {
    if denominator == 0 {
        return 0;
    }
    round_px(value as f64 * numerator as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> CoordinateMapper {
        // 400x225 preview of a 1920x1080 display, offset by the widget border.
        CoordinateMapper::new(PixelRect::new(1, 1, 400, 225), DisplaySpec::default())
    }

    #[test]
    fn test_to_canvas_origin() {
        let m = mapper();
        assert_eq!(m.to_canvas(PixelPoint::ZERO), PixelPoint::new(1, 1));
        assert_eq!(m.to_canvas(PixelPoint::new(1920, 1080)), PixelPoint::new(401, 226));
    }

    #[test]
    fn test_to_canvas_rounds() {
        let m = mapper();
        // 100 * 400 / 1920 = 20.83
        assert_eq!(m.to_canvas(PixelPoint::new(100, 100)), PixelPoint::new(22, 22));
    }

    #[test]
    fn test_to_real_clamps_negative() {
        let m = mapper();
        assert_eq!(m.to_real(PixelPoint::new(-20, -3)), PixelPoint::ZERO);
    }

    #[test]
    fn test_to_canvas_clamps_offset_past_display() {
        let m = mapper();
        let far = PixelPoint::new(i32::MAX, 1_000_000_000);
        assert_eq!(m.to_canvas(far), PixelPoint::new(401, 226));
        assert_eq!(m.to_canvas(PixelPoint::new(-50, 540)), PixelPoint::new(1, 114));
    }

    #[test]
    fn test_degenerate_display_returns_origin() {
        let m = CoordinateMapper::new(
            PixelRect::new(7, 9, 100, 50),
            DisplaySpec { width_px: 0, height_px: 1080 },
        );
        assert_eq!(m.to_canvas(PixelPoint::new(500, 500)), PixelPoint::new(7, 9));
        assert_eq!(m.to_real(PixelPoint::new(50, 20)), PixelPoint::ZERO);
    }

    #[test]
    fn test_canvas_roundtrip_within_one_pixel() {
        let m = mapper();
        let r = m.display_rect;
        for cx in (r.x..r.right()).step_by(7) {
            for cy in (r.y..r.bottom()).step_by(5) {
                let canvas = PixelPoint::new(cx, cy);
                let back = m.to_canvas(m.to_real(canvas));
                assert!((back.x - canvas.x).abs() <= 1, "x drift at {canvas:?}");
                assert!((back.y - canvas.y).abs() <= 1, "y drift at {canvas:?}");
            }
        }
    }

    #[test]
    fn test_real_roundtrip_within_one_canvas_pixel() {
        let m = mapper();
        let tolerance = m.real_per_canvas_x().ceil() as i32;
        for &p in &[
            PixelPoint::new(100, 100),
            PixelPoint::new(500, 300),
            PixelPoint::new(1919, 1079),
        ] {
            let back = m.to_real(m.to_canvas(p));
            assert!((back.x - p.x).abs() <= tolerance);
            assert!((back.y - p.y).abs() <= tolerance);
        }
    }

    #[test]
    fn test_size_conversion_floors_at_one() {
        let m = mapper();
        assert_eq!(m.to_real_size(PixelSize::new(0, 0)), PixelSize::new(1, 1));
        assert_eq!(m.to_canvas_size(PixelSize::new(192, 108)), PixelSize::new(40, 23));
    }
}
