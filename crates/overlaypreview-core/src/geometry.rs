//! Integer pixel geometry and the canonical display/overlay specs.
//!
//! Rectangles are half-open: a rect covers `x..x + width` horizontally and
//! `y..y + height` vertically. `right()` and `bottom()` return the first
//! coordinate past the rect, and every clamp in this crate compares against
//! those exclusive edges.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geometry errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Display dimensions must be positive, got {width}x{height}")]
    InvalidDisplay { width: i32, height: i32 },
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Round to the nearest integer, halves away from zero.
///
/// Every conversion between real and canvas pixels goes through this.
#[inline]
pub fn round_px(value: f64) -> i32 {
    value.round() as i32
}

/// A point in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const ZERO: PixelPoint = PixelPoint { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a floating-point position to the pixel grid.
    pub fn from_point(point: Point) -> Self {
        Self::new(round_px(point.x), round_px(point.y))
    }

    /// Offset by `delta`, saturating.
    pub fn translate(self, delta: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x.saturating_add(delta.x), self.y.saturating_add(delta.y))
    }

    /// Component-wise difference `self - other`, saturating.
    pub fn delta_from(self, other: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

impl From<PixelPoint> for Point {
    fn from(p: PixelPoint) -> Self {
        Point::new(p.x as f64, p.y as f64)
    }
}

/// A size in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// An axis-aligned rectangle in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const ZERO: PixelRect = PixelRect { x: 0, y: 0, width: 0, height: 0 };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rect from an origin and a size.
    pub const fn from_origin_size(origin: PixelPoint, size: PixelSize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check whether a point lies inside the rect.
    pub fn contains(&self, point: PixelPoint) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Check whether `other` lies completely inside this rect.
    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Offset the rect by a delta.
    pub fn translate(&self, delta: PixelPoint) -> PixelRect {
        PixelRect::from_origin_size(self.origin().translate(delta), self.size())
    }

    /// Shrink the rect by `amount` on every side. Saturates instead of
    /// overflowing; an over-large inset yields an empty rect.
    pub fn inset(&self, amount: i32) -> PixelRect {
        let twice = amount.saturating_mul(2);
        PixelRect::new(
            self.x.saturating_add(amount),
            self.y.saturating_add(amount),
            self.width.saturating_sub(twice),
            self.height.saturating_sub(twice),
        )
    }

    /// Square of side `size` centered on `center`.
    pub fn centered_square(center: PixelPoint, size: i32) -> PixelRect {
        let half = size / 2;
        PixelRect::new(center.x - half, center.y - half, size, size)
    }

    /// Move the rect so it lies inside `bounds` without changing its size.
    ///
    /// When the rect is larger than `bounds` on an axis it is aligned to the
    /// bounds' leading edge on that axis.
    pub fn clamp_position_within(&self, bounds: &PixelRect) -> PixelRect {
        let max_x = bounds.right().saturating_sub(self.width);
        let max_y = bounds.bottom().saturating_sub(self.height);
        let x = self.x.min(max_x).max(bounds.x);
        let y = self.y.min(max_y).max(bounds.y);
        PixelRect::new(x, y, self.width, self.height)
    }
}

impl From<PixelRect> for Rect {
    fn from(r: PixelRect) -> Self {
        Rect::new(r.x as f64, r.y as f64, r.right() as f64, r.bottom() as f64)
    }
}

/// Real resolution of the target display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySpec {
    pub width_px: i32,
    pub height_px: i32,
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self { width_px: 1920, height_px: 1080 }
    }
}

impl DisplaySpec {
    /// Create a display spec, rejecting non-positive dimensions.
    pub fn try_new(width_px: i32, height_px: i32) -> GeometryResult<Self> {
        if width_px <= 0 || height_px <= 0 {
            return Err(GeometryError::InvalidDisplay { width: width_px, height: height_px });
        }
        Ok(Self { width_px, height_px })
    }

    /// Width divided by height, 0.0 for a degenerate display.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height_px <= 0 {
            return 0.0;
        }
        self.width_px as f64 / self.height_px as f64
    }

    pub fn is_valid(&self) -> bool {
        self.width_px > 0 && self.height_px > 0
    }
}

/// Overlay placement relative to the display's top-left corner, in real pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySpec {
    pub relative_x: i32,
    pub relative_y: i32,
    pub width_px: i32,
    pub height_px: i32,
}

impl Default for OverlaySpec {
    fn default() -> Self {
        Self { relative_x: 0, relative_y: 0, width_px: 50, height_px: 50 }
    }
}

impl OverlaySpec {
    /// Create an overlay spec with offsets coerced to >= 0 and sizes to >= 1.
    pub fn coerced(relative_x: i32, relative_y: i32, width_px: i32, height_px: i32) -> Self {
        Self {
            relative_x: relative_x.max(0),
            relative_y: relative_y.max(0),
            width_px: width_px.max(1),
            height_px: height_px.max(1),
        }
    }

    /// Width divided by height, 1.0 when the height is zero.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height_px == 0 {
            return 1.0;
        }
        self.width_px as f64 / self.height_px as f64
    }

    pub fn position(&self) -> PixelPoint {
        PixelPoint::new(self.relative_x, self.relative_y)
    }

    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width_px, self.height_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_are_exclusive() {
        let r = PixelRect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert!(r.contains(PixelPoint::new(10, 20)));
        assert!(r.contains(PixelPoint::new(39, 59)));
        assert!(!r.contains(PixelPoint::new(40, 30)));
        assert!(!r.contains(PixelPoint::new(20, 60)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        assert!(!PixelRect::ZERO.contains(PixelPoint::ZERO));
    }

    #[test]
    fn test_clamp_position_within() {
        let bounds = PixelRect::new(0, 0, 100, 50);
        let r = PixelRect::new(90, -5, 20, 20).clamp_position_within(&bounds);
        assert_eq!(r, PixelRect::new(80, 0, 20, 20));
        assert!(bounds.contains_rect(&r));
    }

    #[test]
    fn test_clamp_oversized_rect_aligns_to_leading_edge() {
        let bounds = PixelRect::new(5, 5, 10, 10);
        let r = PixelRect::new(0, 0, 20, 4).clamp_position_within(&bounds);
        assert_eq!(r.x, 5);
        assert_eq!(r.y, 5);
    }

    #[test]
    fn test_huge_inset_is_empty_not_overflow() {
        let r = PixelRect::new(0, 0, 402, 227).inset(1_500_000_000);
        assert!(r.is_empty());
        assert_eq!(r.x, 1_500_000_000);
    }

    #[test]
    fn test_translate_saturates() {
        let r = PixelRect::new(10, 10, 5, 5).translate(PixelPoint::new(i32::MAX, i32::MIN));
        assert_eq!(r.origin(), PixelPoint::new(i32::MAX, i32::MIN + 10));
        assert_eq!(r.right(), i32::MAX);
    }

    #[test]
    fn test_display_try_new() {
        assert!(DisplaySpec::try_new(1920, 1080).is_ok());
        assert_eq!(
            DisplaySpec::try_new(0, 1080),
            Err(GeometryError::InvalidDisplay { width: 0, height: 1080 })
        );
    }

    #[test]
    fn test_overlay_aspect_ratio_guard() {
        let spec = OverlaySpec { relative_x: 0, relative_y: 0, width_px: 40, height_px: 0 };
        assert!((spec.aspect_ratio() - 1.0).abs() < f64::EPSILON);

        let spec = OverlaySpec::coerced(-3, 7, 0, -10);
        assert_eq!(spec, OverlaySpec { relative_x: 0, relative_y: 7, width_px: 1, height_px: 1 });
    }

    #[test]
    fn test_round_px_halves_away_from_zero() {
        assert_eq!(round_px(2.5), 3);
        assert_eq!(round_px(-2.5), -3);
        assert_eq!(round_px(2.49), 2);
    }
}
