//! Drag state machine and the move/resize math behind it.
//!
//! Everything here works in canvas pixels. Converting a candidate rect back
//! to real display pixels is the caller's job (see `PositionPreview`).

use crate::geometry::{PixelPoint, PixelRect, PixelSize, round_px};
use crate::handles::{Corner, HandleKind, handle_at};
use crate::input::MouseButton;

/// An active drag, created on pointer-down and dropped on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// What is being dragged. Never `HandleKind::None`.
    pub mode: HandleKind,
    /// Pointer position at pointer-down, in stable (screen) space.
    pub anchor: PixelPoint,
    /// Overlay preview rect at pointer-down.
    pub start_rect: PixelRect,
    /// Overlay aspect ratio at pointer-down, held for the whole drag.
    pub aspect_ratio: f64,
}

impl DragSession {
    /// Pointer travel since pointer-down.
    pub fn delta(&self, current: PixelPoint) -> PixelPoint {
        current.delta_from(self.anchor)
    }

    /// Candidate overlay rect for the pointer at `current`.
    pub fn candidate(
        &self,
        current: PixelPoint,
        bounds: &PixelRect,
        min_size: i32,
    ) -> Option<PixelRect> {
        let delta = self.delta(current);
        match self.mode {
            HandleKind::None => None,
            HandleKind::Move => Some(move_rect(&self.start_rect, delta, bounds)),
            HandleKind::Resize(corner) => Some(resize_rect(
                &self.start_rect,
                corner,
                delta,
                bounds,
                self.aspect_ratio,
                min_size,
            )),
        }
    }
}

/// Drag controller state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Drives pointer down/move/up into candidate overlay rects.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Current drag mode, `HandleKind::None` when idle.
    pub fn mode(&self) -> HandleKind {
        self.session().map(|s| s.mode).unwrap_or_default()
    }

    /// Try to start a drag.
    ///
    /// Starts only for the left button, inside the display rect, over a
    /// handle or the overlay body. Returns the started mode, or
    /// `HandleKind::None` when nothing started.
    #[allow(clippy::too_many_arguments)]
    pub fn press(
        &mut self,
        button: MouseButton,
        local: PixelPoint,
        screen: PixelPoint,
        display_rect: &PixelRect,
        overlay_rect: &PixelRect,
        handle_size: i32,
        aspect_ratio: f64,
    ) -> HandleKind {
        if self.is_dragging() || button != MouseButton::Left || !display_rect.contains(local) {
            return HandleKind::None;
        }
        let mode = handle_at(overlay_rect, handle_size, local);
        if mode.is_none() {
            return HandleKind::None;
        }

        log::debug!("Drag started: {:?} at {:?}, overlay {:?}", mode, local, overlay_rect);
        self.state = DragState::Dragging(DragSession {
            mode,
            anchor: screen,
            start_rect: *overlay_rect,
            aspect_ratio,
        });
        mode
    }

    /// Candidate rect for the pointer at `screen`, or `None` when idle.
    pub fn candidate(
        &self,
        screen: PixelPoint,
        display_rect: &PixelRect,
        min_size: i32,
    ) -> Option<PixelRect> {
        self.session()?.candidate(screen, display_rect, min_size)
    }

    /// End the drag if `button` is the one that started it.
    pub fn release(&mut self, button: MouseButton) -> Option<DragSession> {
        if button != MouseButton::Left {
            return None;
        }
        self.cancel()
    }

    /// End any drag unconditionally.
    pub fn cancel(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                log::debug!("Drag ended: {:?}", session.mode);
                Some(session)
            }
            DragState::Idle => None,
        }
    }
}

/// Translate `start` by `delta`, keeping it inside `bounds`.
pub fn move_rect(start: &PixelRect, delta: PixelPoint, bounds: &PixelRect) -> PixelRect {
    start.translate(delta).clamp_position_within(bounds)
}

/// Shrink one side of `width x height` so that `width = height * aspect_ratio`.
///
/// The overshooting axis is shrunk; the other axis is never grown.
pub fn fit_aspect(width: i32, height: i32, aspect_ratio: f64) -> (i32, i32) {
    let width = width.max(0);
    let height = height.max(0);
    if !(aspect_ratio > 0.0) {
        return (width, height);
    }
    if width as f64 <= height as f64 * aspect_ratio {
        (width, round_px(width as f64 / aspect_ratio).min(height))
    } else {
        (round_px(height as f64 * aspect_ratio).min(width), height)
    }
}

/// Smallest aspect-correct preview size whose short side is `min_size`.
pub fn min_size_for_aspect(min_size: i32, aspect_ratio: f64) -> PixelSize {
    if !(aspect_ratio > 0.0) {
        return PixelSize::new(min_size, min_size);
    }
    if aspect_ratio >= 1.0 {
        PixelSize::new(round_px(min_size as f64 * aspect_ratio), min_size)
    } else {
        PixelSize::new(min_size, round_px(min_size as f64 / aspect_ratio))
    }
}

/// Resize `start` by dragging `corner` by `delta`.
///
/// The opposite corner stays where it was. The dragged corner may not pass
/// the `bounds` edge on its side; the result keeps `aspect_ratio` and is at
/// least the aspect-correct minimum unless `bounds` leaves less room than that.
pub fn resize_rect(
    start: &PixelRect,
    corner: Corner,
    delta: PixelPoint,
    bounds: &PixelRect,
    aspect_ratio: f64,
    min_size: i32,
) -> PixelRect {
    let pinned = corner.opposite().point_on(start);
    let dragged = corner.point_on(start).translate(delta);
    let right = corner.is_right();
    let bottom = corner.is_bottom();

    let raw_w = reach(right, pinned.x, dragged.x);
    let raw_h = reach(bottom, pinned.y, dragged.y);

    // Room between the pinned corner and the bounds edge the dragged corner heads for.
    let edge_x = if right { bounds.right() } else { bounds.x };
    let edge_y = if bottom { bounds.bottom() } else { bounds.y };
    let room_w = reach(right, pinned.x, edge_x);
    let room_h = reach(bottom, pinned.y, edge_y);
    let (room_w, room_h) = (room_w.max(0), room_h.max(0));

    let (mut width, mut height) = fit_aspect(raw_w.min(room_w), raw_h.min(room_h), aspect_ratio);

    let min = min_size_for_aspect(min_size, aspect_ratio);
    if width < min.width || height < min.height {
        width = min.width;
        height = min.height;
    }
    if width > room_w || height > room_h {
        (width, height) = fit_aspect(room_w, room_h, aspect_ratio);
    }

    let x = if right { pinned.x } else { pinned.x - width };
    let y = if bottom { pinned.y } else { pinned.y - height };
    PixelRect::new(x, y, width, height)
}

/// Saturating distance from `pinned` to `to`, positive in the growth
/// direction (`forward` is towards +x/+y).
fn reach(forward: bool, pinned: i32, to: i32) -> i32 {
    if forward {
        to.saturating_sub(pinned)
    } else {
        pinned.saturating_sub(to)
    }
}
