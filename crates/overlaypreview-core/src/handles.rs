//! Resize handles and hit testing on the overlay preview.

use crate::geometry::{PixelPoint, PixelRect};

/// Corner positions, listed in hit-test priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in priority order. When handles overlap on a tiny
    /// overlay, the first one listed wins.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The corner diagonally across, which stays pinned during a resize.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Position of this corner on `rect`, using exclusive right/bottom edges.
    pub fn point_on(self, rect: &PixelRect) -> PixelPoint {
        match self {
            Corner::TopLeft => PixelPoint::new(rect.x, rect.y),
            Corner::TopRight => PixelPoint::new(rect.right(), rect.y),
            Corner::BottomLeft => PixelPoint::new(rect.x, rect.bottom()),
            Corner::BottomRight => PixelPoint::new(rect.right(), rect.bottom()),
        }
    }

    /// Whether this corner sits on the right edge.
    pub fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    /// Whether this corner sits on the bottom edge.
    pub fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }
}

/// What lies under a canvas point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandleKind {
    /// Outside the overlay.
    #[default]
    None,
    /// Overlay body (drag to move).
    Move,
    /// Corner handle (drag to resize).
    Resize(Corner),
}

impl HandleKind {
    pub fn is_none(&self) -> bool {
        matches!(self, HandleKind::None)
    }

    /// Pointer affordance for this handle.
    pub fn cursor(&self) -> CursorIcon {
        match self {
            HandleKind::None => CursorIcon::Default,
            HandleKind::Move => CursorIcon::Move,
            HandleKind::Resize(Corner::TopLeft | Corner::BottomRight) => CursorIcon::ResizeNwSe,
            HandleKind::Resize(Corner::TopRight | Corner::BottomLeft) => CursorIcon::ResizeNeSw,
        }
    }
}

/// Pointer shape the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    Move,
    /// Diagonal resize, top-left to bottom-right.
    ResizeNwSe,
    /// Diagonal resize, top-right to bottom-left.
    ResizeNeSw,
}

/// A resize handle with its canvas-space square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    pub corner: Corner,
    pub rect: PixelRect,
}

impl Handle {
    /// Check if a canvas point hits this handle.
    pub fn hit_test(&self, point: PixelPoint) -> bool {
        self.rect.contains(point)
    }
}

/// The four corner handles of `overlay`, in priority order.
///
/// Empty when the overlay has no area.
pub fn corner_handles(overlay: &PixelRect, handle_size: i32) -> Vec<Handle> {
    if overlay.is_empty() {
        return Vec::new();
    }
    Corner::ALL
        .iter()
        .map(|&corner| Handle {
            corner,
            rect: PixelRect::centered_square(corner.point_on(overlay), handle_size),
        })
        .collect()
}

/// Find what lies under `point`: a corner handle first, then the body.
pub fn handle_at(overlay: &PixelRect, handle_size: i32, point: PixelPoint) -> HandleKind {
    if let Some(handle) = corner_handles(overlay, handle_size)
        .into_iter()
        .find(|h| h.hit_test(point))
    {
        return HandleKind::Resize(handle.corner);
    }
    if overlay.contains(point) {
        return HandleKind::Move;
    }
    HandleKind::None
}
