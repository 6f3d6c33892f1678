//! The position preview: canonical state, frame, drag and notification
//! composed behind the host-facing API.

use crate::config::PreviewConfig;
use crate::drag::DragController;
use crate::frame::{CanvasFrame, recompute_frame};
use crate::geometry::{DisplaySpec, OverlaySpec, PixelPoint, PixelRect, PixelSize, round_px};
use crate::handles::{CursorIcon, Handle, HandleKind, corner_handles, handle_at};
use crate::input::PointerEvent;
use crate::notify::{GeometryObservers, ObserverId};

/// How the overlay body is tinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayVisual {
    #[default]
    Resting,
    /// Pointer is over the movable body.
    Hovered,
    /// A move or resize is in progress.
    Dragging,
}

/// Snapshot of everything the renderer needs for one paint.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Whole widget area, origin at (0, 0).
    pub widget_rect: PixelRect,
    pub frame: CanvasFrame,
    pub visual: OverlayVisual,
    /// Corner handles to draw; empty when disabled or without an overlay.
    pub handles: Vec<Handle>,
}

/// Interactive preview of an overlay placed on a display.
///
/// The host owns the real geometry and pushes it in with [`set_display`]
/// and [`set_overlay`]. Pointer events move and resize the overlay on the
/// scaled preview; every resulting change of the real geometry fires the
/// `on_geometry_changed` observers exactly once. Setter calls never fire
/// observers, so a host that mirrors the getters back into the setters
/// does not loop.
///
/// [`set_display`]: PositionPreview::set_display
/// [`set_overlay`]: PositionPreview::set_overlay
#[derive(Debug)]
pub struct PositionPreview {
    config: PreviewConfig,
    display: DisplaySpec,
    overlay: OverlaySpec,
    widget_size: PixelSize,
    frame: CanvasFrame,
    drag: DragController,
    hover: HandleKind,
    cursor: CursorIcon,
    enabled: bool,
    needs_redraw: bool,
    observers: GeometryObservers,
}

impl Default for PositionPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionPreview {
    /// Create a preview with default configuration.
    pub fn new() -> Self {
        Self::with_config(PreviewConfig::default())
    }

    /// Create a preview with custom configuration.
    pub fn with_config(config: PreviewConfig) -> Self {
        Self {
            config,
            display: DisplaySpec::default(),
            overlay: OverlaySpec::default(),
            widget_size: PixelSize::default(),
            frame: CanvasFrame::default(),
            drag: DragController::new(),
            hover: HandleKind::None,
            cursor: CursorIcon::Default,
            enabled: true,
            needs_redraw: true,
            observers: GeometryObservers::new(),
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn display(&self) -> DisplaySpec {
        self.display
    }

    pub fn overlay(&self) -> OverlaySpec {
        self.overlay
    }

    pub fn frame(&self) -> &CanvasFrame {
        &self.frame
    }

    pub fn widget_size(&self) -> PixelSize {
        self.widget_size
    }

    /// Overlay offset from the display's top-left, in real pixels.
    pub fn relative_position(&self) -> (i32, i32) {
        (self.overlay.relative_x, self.overlay.relative_y)
    }

    /// Overlay size in real pixels.
    pub fn actual_size(&self) -> (i32, i32) {
        (self.overlay.width_px, self.overlay.height_px)
    }

    /// Set the real display resolution.
    ///
    /// Ignored when a dimension is not positive. Returns whether anything
    /// changed.
    pub fn set_display(&mut self, width_px: i32, height_px: i32) -> bool {
        let display = match DisplaySpec::try_new(width_px, height_px) {
            Ok(display) => display,
            Err(e) => {
                log::warn!("Ignoring display update: {}", e);
                return false;
            }
        };
        if display == self.display {
            return false;
        }
        self.display = display;
        self.recompute();
        true
    }

    /// Set the overlay placement in real pixels.
    ///
    /// Offsets are coerced to >= 0 and sizes to >= 1. A no-op when the
    /// coerced values equal the current ones. Never notifies observers.
    pub fn set_overlay(
        &mut self,
        relative_x: i32,
        relative_y: i32,
        width_px: i32,
        height_px: i32,
    ) -> bool {
        let overlay = OverlaySpec::coerced(relative_x, relative_y, width_px, height_px);
        if overlay == self.overlay {
            return false;
        }
        self.overlay = overlay;
        self.recompute();
        true
    }

    /// The widget's drawing area changed size.
    pub fn resize(&mut self, width: i32, height: i32) {
        let size = PixelSize::new(width, height);
        if size == self.widget_size {
            return;
        }
        self.widget_size = size;
        self.recompute();
    }

    /// Register a geometry-change observer.
    pub fn on_geometry_changed(&mut self, callback: impl FnMut() + 'static) -> ObserverId {
        self.observers.subscribe(callback)
    }

    /// Remove a geometry-change observer.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable pointer interaction. Disabling ends any drag.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.drag.cancel();
            self.hover = HandleKind::None;
            self.cursor = CursorIcon::Default;
        }
        self.request_redraw();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current drag mode, `HandleKind::None` when idle.
    pub fn drag_mode(&self) -> HandleKind {
        self.drag.mode()
    }

    /// Handle under the last pointer position seen while idle.
    pub fn hovered(&self) -> HandleKind {
        self.hover
    }

    /// Pointer shape the host should show over the widget.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// What lies under a widget-local point.
    pub fn handle_at(&self, point: PixelPoint) -> HandleKind {
        handle_at(&self.frame.overlay_rect, self.config.handle_size, point)
    }

    /// Ask for a repaint. Repeated requests before the next paint coalesce.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consume the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Feed a pointer event. Returns true when the preview used it.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { button, .. } => {
                if !self.enabled {
                    return false;
                }
                let (Some(local), Some(screen)) = (event.local(), event.screen()) else {
                    return false;
                };
                let mode = self.drag.press(
                    button,
                    local,
                    screen,
                    &self.frame.display_rect,
                    &self.frame.overlay_rect,
                    self.config.handle_size,
                    self.overlay.aspect_ratio(),
                );
                if mode.is_none() {
                    return false;
                }
                self.cursor = mode.cursor();
                self.request_redraw();
                true
            }
            PointerEvent::Move { primary_pressed, .. } => {
                let (Some(local), Some(screen)) = (event.local(), event.screen()) else {
                    return false;
                };
                if self.drag.is_dragging() {
                    if primary_pressed {
                        self.drag_to(screen);
                    } else {
                        // Release happened somewhere we did not see it.
                        self.drag.cancel();
                        self.update_hover(local);
                        self.request_redraw();
                    }
                    return true;
                }
                if self.enabled {
                    self.update_hover(local);
                }
                false
            }
            PointerEvent::Up { button, .. } => {
                if self.drag.release(button).is_none() {
                    return false;
                }
                if let Some(local) = event.local() {
                    self.update_hover(local);
                }
                self.request_redraw();
                true
            }
            PointerEvent::Leave => {
                if !self.drag.is_dragging() && !self.hover.is_none() {
                    self.hover = HandleKind::None;
                    self.cursor = CursorIcon::Default;
                    self.request_redraw();
                }
                false
            }
        }
    }

    /// Snapshot for the renderer.
    pub fn render_state(&self) -> RenderState {
        let visual = if self.drag.is_dragging() {
            OverlayVisual::Dragging
        } else if self.enabled && self.hover == HandleKind::Move {
            OverlayVisual::Hovered
        } else {
            OverlayVisual::Resting
        };
        let handles = if self.enabled {
            corner_handles(&self.frame.overlay_rect, self.config.handle_size)
        } else {
            Vec::new()
        };
        RenderState {
            widget_rect: PixelRect::new(0, 0, self.widget_size.width, self.widget_size.height),
            frame: self.frame,
            visual,
            handles,
        }
    }

    /// Rebuild the frame from the canonical state.
    fn recompute(&mut self) {
        let frame = recompute_frame(self.widget_size, &self.display, &self.overlay, &self.config);
        let Some(frame) = frame else {
            log::trace!("Frame recompute skipped for widget {:?}", self.widget_size);
            return;
        };
        if frame.display_rect != self.frame.display_rect && self.drag.cancel().is_some() {
            log::debug!("Display area moved under an active drag; drag cancelled");
        }
        self.frame = frame;
        self.request_redraw();
    }

    fn update_hover(&mut self, local: PixelPoint) {
        let hover = self.handle_at(local);
        if hover != self.hover {
            self.hover = hover;
            self.request_redraw();
        }
        self.cursor = hover.cursor();
    }

    /// Apply the drag candidate for the pointer at `screen`.
    fn drag_to(&mut self, screen: PixelPoint) {
        let Some(session) = self.drag.session().copied() else {
            return;
        };
        let bounds = self.frame.display_rect;
        let min_size = self.config.min_preview_size();
        let Some(candidate) = session.candidate(screen, &bounds, min_size) else {
            return;
        };
        log::trace!("Drag candidate {:?}", candidate);

        if candidate != self.frame.overlay_rect {
            let updated =
                self.overlay_for_candidate(&candidate, session.mode, session.aspect_ratio);
            self.frame.overlay_rect = candidate;
            if updated != self.overlay {
                log::debug!("Overlay geometry changed: {:?} -> {:?}", self.overlay, updated);
                self.overlay = updated;
                self.observers.emit();
            }
        }
        self.request_redraw();
    }

    /// Real-space overlay for a canvas candidate rect.
    ///
    /// An axis whose canvas coordinate did not move keeps its real value,
    /// so rounding never nudges the untouched axis. A move keeps the real
    /// size, so a preview inflated to the handle minimum never leaks into
    /// it. A resize derives the minor axis from the major one through the
    /// drag's aspect ratio.
    fn overlay_for_candidate(
        &self,
        candidate: &PixelRect,
        mode: HandleKind,
        aspect_ratio: f64,
    ) -> OverlaySpec {
        let mapper = self.frame.mapper(self.display);
        let current = self.frame.overlay_rect;
        let position = mapper.to_real(candidate.origin());
        let x = keep_or(candidate.x == current.x, self.overlay.relative_x, position.x);
        let y = keep_or(candidate.y == current.y, self.overlay.relative_y, position.y);

        let (width, height) = match mode {
            HandleKind::Resize(_) if candidate.size() == current.size() => {
                (self.overlay.width_px, self.overlay.height_px)
            }
            HandleKind::Resize(_) => {
                let size = mapper.to_real_size(candidate.size());
                if !(aspect_ratio > 0.0) {
                    (size.width, size.height)
                } else if aspect_ratio >= 1.0 {
                    (size.width, round_px(size.width as f64 / aspect_ratio))
                } else {
                    (round_px(size.height as f64 * aspect_ratio), size.height)
                }
            }
            HandleKind::Move | HandleKind::None => (self.overlay.width_px, self.overlay.height_px),
        };
        OverlaySpec::coerced(x, y, width, height)
    }
}

/// `current` when `unchanged`, else `updated`.
fn keep_or(unchanged: bool, current: i32, updated: i32) -> i32 {
    if unchanged { current } else { updated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::Corner;
    use crate::input::MouseButton;
    use kurbo::Point;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Widget offset on screen, so local and screen coordinates differ.
    const SCREEN_OFFSET: f64 = 500.0;

    fn preview() -> PositionPreview {
        let mut p = PositionPreview::new();
        p.resize(402, 227);
        p.set_display(1920, 1080);
        p.set_overlay(100, 100, 400, 300);
        p
    }

    fn counter(p: &mut PositionPreview) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        p.on_geometry_changed(move || c.set(c.get() + 1));
        count
    }

    fn at(x: i32, y: i32) -> (Point, Point) {
        let local = Point::new(x as f64, y as f64);
        (local, Point::new(local.x + SCREEN_OFFSET, local.y + SCREEN_OFFSET))
    }

    fn down(p: &mut PositionPreview, point: PixelPoint) -> bool {
        let (position, screen_position) = at(point.x, point.y);
        p.handle_pointer_event(PointerEvent::Down {
            position,
            screen_position,
            button: MouseButton::Left,
        })
    }

    fn drag(p: &mut PositionPreview, point: PixelPoint) {
        let (position, screen_position) = at(point.x, point.y);
        p.handle_pointer_event(PointerEvent::Move {
            position,
            screen_position,
            primary_pressed: true,
        });
    }

    fn up(p: &mut PositionPreview, point: PixelPoint) {
        let (position, screen_position) = at(point.x, point.y);
        p.handle_pointer_event(PointerEvent::Up {
            position,
            screen_position,
            button: MouseButton::Left,
        });
    }

    fn body_center(p: &PositionPreview) -> PixelPoint {
        let r = p.frame().overlay_rect;
        PixelPoint::new(r.x + r.width / 2, r.y + r.height / 2)
    }

    #[test]
    fn test_initial_frame() {
        let p = preview();
        assert_eq!(p.frame().display_rect, PixelRect::new(1, 1, 400, 225));
        assert_eq!(p.frame().overlay_rect, PixelRect::new(22, 22, 83, 63));
        assert_eq!(p.relative_position(), (100, 100));
        assert_eq!(p.actual_size(), (400, 300));
    }

    #[test]
    fn test_identical_set_overlay_is_silent_noop() {
        let mut p = preview();
        let count = counter(&mut p);
        p.take_redraw_request();

        assert!(!p.set_overlay(100, 100, 400, 300));
        assert!(!p.needs_redraw());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_changed_set_overlay_does_not_notify() {
        let mut p = preview();
        let count = counter(&mut p);
        p.take_redraw_request();

        assert!(p.set_overlay(0, 0, 192, 108));
        assert!(p.needs_redraw());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_set_overlay_coerces_invalid_values() {
        let mut p = preview();
        p.set_overlay(-10, 5, 0, -4);
        assert_eq!(p.relative_position(), (0, 5));
        assert_eq!(p.actual_size(), (1, 1));
        // Same values after coercion: no-op.
        assert!(!p.set_overlay(-99, 5, -1, 0));
    }

    #[test]
    fn test_invalid_display_ignored() {
        let mut p = preview();
        let before = *p.frame();
        assert!(!p.set_display(0, 1080));
        assert_eq!(p.display(), DisplaySpec::default());
        assert_eq!(*p.frame(), before);
    }

    #[test]
    fn test_zero_widget_keeps_prior_frame() {
        let mut p = preview();
        let before = *p.frame();
        p.resize(0, 0);
        assert_eq!(*p.frame(), before);
    }

    #[test]
    fn test_identical_set_display_is_silent_noop() {
        let mut p = preview();
        p.take_redraw_request();
        assert!(!p.set_display(1920, 1080));
        assert!(!p.needs_redraw());
    }

    #[test]
    fn test_huge_offset_on_small_display_lands_at_far_edge() {
        let mut p = PositionPreview::new();
        p.resize(402, 227);
        p.set_display(100, 100);
        p.set_overlay(1_000_000_000, 0, 10, 10);

        let frame = *p.frame();
        assert_eq!(frame.display_rect, PixelRect::new(88, 1, 225, 225));
        assert_eq!(frame.overlay_rect, PixelRect::new(290, 1, 23, 23));
        assert_eq!(frame.overlay_rect.right(), frame.display_rect.right());
        assert_eq!(p.relative_position(), (1_000_000_000, 0));
    }

    #[test]
    fn test_oversized_insets_leave_frame_empty() {
        let config = PreviewConfig {
            handle_size: 1_500_000_000,
            border: 1_500_000_000,
            ..Default::default()
        };
        let mut p = PositionPreview::with_config(config);
        p.resize(402, 227);
        assert!(p.frame().is_empty());
        assert!(!down(&mut p, PixelPoint::new(200, 100)));
    }

    #[test]
    fn test_drag_step_without_real_change_still_redraws() {
        let mut p = preview();
        let count = counter(&mut p);
        let start = body_center(&p);
        down(&mut p, start);
        p.take_redraw_request();

        drag(&mut p, start);
        assert!(p.needs_redraw());
        assert_eq!(count.get(), 0);
        assert_eq!(p.relative_position(), (100, 100));
    }

    #[test]
    fn test_redraw_requests_coalesce() {
        let mut p = preview();
        p.set_overlay(1, 1, 400, 300);
        p.set_overlay(2, 2, 400, 300);
        assert!(p.take_redraw_request());
        assert!(!p.take_redraw_request());
    }

    #[test]
    fn test_move_past_left_edge_clamps_to_zero() {
        let mut p = preview();
        let count = counter(&mut p);
        let start = body_center(&p);

        assert!(down(&mut p, start));
        assert_eq!(p.drag_mode(), HandleKind::Move);
        drag(&mut p, PixelPoint::new(start.x - 1000, start.y));
        up(&mut p, PixelPoint::new(start.x - 1000, start.y));

        assert_eq!(p.relative_position().0, 0);
        assert_eq!(p.relative_position().1, 100);
        assert_eq!(p.actual_size(), (400, 300));
        assert_eq!(p.frame().overlay_rect.x, p.frame().display_rect.x);
        assert_eq!(count.get(), 1);
        assert!(!p.is_dragging());
    }

    #[test]
    fn test_one_event_per_change_and_none_for_no_op_moves() {
        let mut p = preview();
        let count = counter(&mut p);
        let start = body_center(&p);

        down(&mut p, start);
        drag(&mut p, PixelPoint::new(start.x + 10, start.y));
        assert_eq!(count.get(), 1);
        // Same pointer position again: candidate unchanged.
        drag(&mut p, PixelPoint::new(start.x + 10, start.y));
        assert_eq!(count.get(), 1);
        drag(&mut p, PixelPoint::new(start.x + 20, start.y + 5));
        assert_eq!(count.get(), 2);
        up(&mut p, PixelPoint::new(start.x + 20, start.y + 5));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_drag_delta_measured_in_screen_space() {
        let mut p = preview();
        let start = body_center(&p);
        down(&mut p, start);
        // Widget-local position unchanged, but the screen position moved:
        // the delta follows the screen.
        let (position, _) = at(start.x, start.y);
        let screen_position = Point::new(
            start.x as f64 + SCREEN_OFFSET + 10.0,
            start.y as f64 + SCREEN_OFFSET,
        );
        p.handle_pointer_event(PointerEvent::Move {
            position,
            screen_position,
            primary_pressed: true,
        });
        assert_eq!(p.frame().overlay_rect.x, 32);
    }

    #[test]
    fn test_bottom_right_resize_past_right_edge() {
        let mut p = preview();
        let count = counter(&mut p);
        let before = p.frame().overlay_rect;
        let corner = Corner::BottomRight.point_on(&before);

        assert!(down(&mut p, corner));
        assert_eq!(p.drag_mode(), HandleKind::Resize(Corner::BottomRight));
        drag(&mut p, PixelPoint::new(corner.x + 1000, corner.y + 20));
        up(&mut p, PixelPoint::new(corner.x + 1000, corner.y + 20));

        let after = p.frame().overlay_rect;
        let display = p.frame().display_rect;
        assert!(after.right() <= display.right());
        assert!(display.contains_rect(&after));
        assert_eq!(after.origin(), before.origin());
        assert!(count.get() >= 1);
        assert_eq!(p.relative_position(), (100, 100));
    }

    #[test]
    fn test_resize_keeps_real_aspect_ratio() {
        let mut p = preview();
        let before = p.frame().overlay_rect;
        let corner = Corner::TopLeft.point_on(&before);

        down(&mut p, corner);
        for step in 1..=10 {
            drag(&mut p, PixelPoint::new(corner.x - step * 3, corner.y - step));
            let (w, h) = p.actual_size();
            assert!((w as f64 - h as f64 * 4.0 / 3.0).abs() <= 1.0, "{w}x{h} at step {step}");
            let r = p.frame().overlay_rect;
            assert!((r.width as f64 - r.height as f64 * 4.0 / 3.0).abs() <= 1.0);
        }
        up(&mut p, corner);
        assert_eq!(p.frame().overlay_rect.right(), before.right());
        assert_eq!(p.frame().overlay_rect.bottom(), before.bottom());
    }

    #[test]
    fn test_corner_hit_wins_over_body() {
        let p = preview();
        let r = p.frame().overlay_rect;
        let inside_corner = PixelPoint::new(r.x + 1, r.y + 1);
        assert!(r.contains(inside_corner));
        assert_eq!(p.handle_at(inside_corner), HandleKind::Resize(Corner::TopLeft));
    }

    #[test]
    fn test_press_outside_display_ignored() {
        let mut p = preview();
        assert!(!down(&mut p, PixelPoint::new(0, 0)));
        assert!(!p.is_dragging());
    }

    #[test]
    fn test_hover_and_cursor() {
        let mut p = preview();
        let center = body_center(&p);
        let (position, screen_position) = at(center.x, center.y);
        p.handle_pointer_event(PointerEvent::Move {
            position,
            screen_position,
            primary_pressed: false,
        });
        assert_eq!(p.hovered(), HandleKind::Move);
        assert_eq!(p.cursor(), CursorIcon::Move);
        assert_eq!(p.render_state().visual, OverlayVisual::Hovered);

        p.handle_pointer_event(PointerEvent::Leave);
        assert_eq!(p.hovered(), HandleKind::None);
        assert_eq!(p.cursor(), CursorIcon::Default);
        assert_eq!(p.render_state().visual, OverlayVisual::Resting);
    }

    #[test]
    fn test_release_restores_hover_cursor() {
        let mut p = preview();
        let corner = Corner::TopRight.point_on(&p.frame().overlay_rect);
        down(&mut p, corner);
        assert_eq!(p.cursor(), CursorIcon::ResizeNeSw);
        assert_eq!(p.render_state().visual, OverlayVisual::Dragging);
        up(&mut p, PixelPoint::new(395, 220));
        assert_eq!(p.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_move_without_button_ends_drag() {
        let mut p = preview();
        let start = body_center(&p);
        down(&mut p, start);
        let (position, screen_position) = at(start.x + 30, start.y);
        p.handle_pointer_event(PointerEvent::Move {
            position,
            screen_position,
            primary_pressed: false,
        });
        assert!(!p.is_dragging());
        assert_eq!(p.relative_position(), (100, 100));
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut p = preview();
        let start = body_center(&p);
        down(&mut p, start);
        p.set_enabled(false);
        assert!(!p.is_dragging());
        assert!(!down(&mut p, start));
        assert!(p.render_state().handles.is_empty());
        p.set_enabled(true);
        assert_eq!(p.render_state().handles.len(), 4);
    }

    #[test]
    fn test_display_change_cancels_drag() {
        let mut p = preview();
        let start = body_center(&p);
        down(&mut p, start);
        p.set_display(1280, 1024);
        assert!(!p.is_dragging());
    }

    #[test]
    fn test_host_echo_does_not_loop() {
        // Host mirrors every change back through the setter, as a slider
        // panel would; the echo must not fire again.
        let mut p = preview();
        let count = counter(&mut p);
        let start = body_center(&p);
        down(&mut p, start);
        drag(&mut p, PixelPoint::new(start.x + 15, start.y + 15));
        let (x, y) = p.relative_position();
        let (w, h) = p.actual_size();
        assert!(!p.set_overlay(x, y, w, h));
        assert_eq!(count.get(), 1);
    }
}
