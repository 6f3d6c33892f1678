//! Translation of winit pointer input into preview events.

use kurbo::Point;
use overlaypreview_core::{MouseButton, PointerEvent};
use winit::event::{ElementState, MouseButton as WinitButton};

/// Map a winit button to the preview's button, if it has one.
pub fn map_button(button: WinitButton) -> Option<MouseButton> {
    match button {
        WinitButton::Left => Some(MouseButton::Left),
        WinitButton::Right => Some(MouseButton::Right),
        WinitButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Pointer state carried between winit events.
///
/// winit reports button presses without a position, so the last cursor
/// position is remembered here. All coordinates are logical pixels.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Last cursor position in window coordinates.
    position: Option<Point>,
    /// Whether the left button is held.
    primary: bool,
    /// Preview top-left in window coordinates.
    preview_origin: Point,
    /// Window client-area top-left on screen.
    window_origin: Point,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_preview_origin(&mut self, origin: Point) {
        self.preview_origin = origin;
    }

    pub fn set_window_origin(&mut self, origin: Point) {
        self.window_origin = origin;
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn primary_pressed(&self) -> bool {
        self.primary
    }

    fn local(&self, window: Point) -> Point {
        window - self.preview_origin.to_vec2()
    }

    fn screen(&self, window: Point) -> Point {
        window + self.window_origin.to_vec2()
    }

    /// Cursor moved to `position` (window coordinates).
    pub fn cursor_moved(&mut self, position: Point) -> PointerEvent {
        self.position = Some(position);
        PointerEvent::Move {
            position: self.local(position),
            screen_position: self.screen(position),
            primary_pressed: self.primary,
        }
    }

    /// Button state changed. `None` for unmapped buttons or before the
    /// cursor position is known.
    pub fn mouse_input(
        &mut self,
        state: ElementState,
        button: WinitButton,
    ) -> Option<PointerEvent> {
        let button = map_button(button)?;
        let pressed = state.is_pressed();
        if button == MouseButton::Left {
            self.primary = pressed;
        }
        let window = self.position?;
        let position = self.local(window);
        let screen_position = self.screen(window);
        Some(if pressed {
            PointerEvent::Down { position, screen_position, button }
        } else {
            PointerEvent::Up { position, screen_position, button }
        })
    }

    /// Cursor left the window.
    pub fn cursor_left(&mut self) -> PointerEvent {
        self.position = None;
        PointerEvent::Leave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PointerTracker {
        let mut t = PointerTracker::new();
        t.set_preview_origin(Point::new(236.0, 16.0));
        t.set_window_origin(Point::new(100.0, 50.0));
        t
    }

    #[test]
    fn test_move_in_both_spaces() {
        let mut t = tracker();
        let event = t.cursor_moved(Point::new(300.0, 100.0));
        assert_eq!(
            event,
            PointerEvent::Move {
                position: Point::new(64.0, 84.0),
                screen_position: Point::new(400.0, 150.0),
                primary_pressed: false,
            }
        );
    }

    #[test]
    fn test_press_uses_last_position() {
        let mut t = tracker();
        assert!(t.mouse_input(ElementState::Pressed, WinitButton::Left).is_none());
        assert!(t.primary_pressed());

        t.cursor_moved(Point::new(300.0, 100.0));
        let down = t.mouse_input(ElementState::Pressed, WinitButton::Left);
        assert!(matches!(down, Some(PointerEvent::Down { button: MouseButton::Left, .. })));

        let moved = t.cursor_moved(Point::new(310.0, 100.0));
        assert!(matches!(moved, PointerEvent::Move { primary_pressed: true, .. }));

        let up = t.mouse_input(ElementState::Released, WinitButton::Left);
        assert!(matches!(up, Some(PointerEvent::Up { .. })));
        assert!(!t.primary_pressed());
    }

    #[test]
    fn test_unmapped_button_ignored() {
        let mut t = tracker();
        t.cursor_moved(Point::new(300.0, 100.0));
        assert!(t.mouse_input(ElementState::Pressed, WinitButton::Back).is_none());
        assert!(!t.primary_pressed());
    }

    #[test]
    fn test_cursor_left_forgets_position() {
        let mut t = tracker();
        t.cursor_moved(Point::new(300.0, 100.0));
        assert_eq!(t.cursor_left(), PointerEvent::Leave);
        assert!(t.position().is_none());
    }
}
