//! Pointer events fed to the preview by its host.

use crate::geometry::PixelPoint;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in two coordinate spaces.
///
/// `position` is local to the widget (origin at its top-left).
/// `screen_position` is in a space that does not move with the widget,
/// such as screen or window coordinates; drag deltas are measured there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        screen_position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        screen_position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
        screen_position: Point,
        /// Whether the left button is currently held.
        primary_pressed: bool,
    },
    /// Pointer left the widget.
    Leave,
}

impl PointerEvent {
    /// Widget-local position snapped to pixels, if the event carries one.
    pub fn local(&self) -> Option<PixelPoint> {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position, .. } => Some(PixelPoint::from_point(*position)),
            PointerEvent::Leave => None,
        }
    }

    /// Stable-space position snapped to pixels, if the event carries one.
    pub fn screen(&self) -> Option<PixelPoint> {
        match self {
            PointerEvent::Down { screen_position, .. }
            | PointerEvent::Up { screen_position, .. }
            | PointerEvent::Move { screen_position, .. } => {
                Some(PixelPoint::from_point(*screen_position))
            }
            PointerEvent::Leave => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_snap_to_pixels() {
        let event = PointerEvent::Move {
            position: Point::new(10.4, 19.6),
            screen_position: Point::new(110.5, 219.5),
            primary_pressed: false,
        };
        assert_eq!(event.local(), Some(PixelPoint::new(10, 20)));
        assert_eq!(event.screen(), Some(PixelPoint::new(111, 220)));
        assert_eq!(PointerEvent::Leave.local(), None);
    }
}
