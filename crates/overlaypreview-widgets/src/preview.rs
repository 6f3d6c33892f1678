//! egui adapter for [`PositionPreview`].

use egui::{Color32, Pos2, Response, Sense, Stroke, StrokeKind, Ui, Widget, vec2};
use kurbo::Point;
use overlaypreview_core::{CursorIcon, MouseButton, PointerEvent, PositionPreview};
use overlaypreview_render::{PreviewPainter, draw_preview};
use peniko::Color;

/// Map the preview's cursor to egui's.
pub fn to_egui_cursor(cursor: CursorIcon) -> egui::CursorIcon {
    match cursor {
        CursorIcon::Default => egui::CursorIcon::Default,
        CursorIcon::Move => egui::CursorIcon::Move,
        CursorIcon::ResizeNwSe => egui::CursorIcon::ResizeNwSe,
        CursorIcon::ResizeNeSw => egui::CursorIcon::ResizeNeSw,
    }
}

fn to_mouse_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        egui::PointerButton::Extra1 | egui::PointerButton::Extra2 => None,
    }
}

fn to_color32(color: Color) -> Color32 {
    let c = color.to_rgba8();
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Translate one egui input event for a widget occupying `rect`.
///
/// Local positions are relative to `rect.min`; window positions serve as the
/// stable space for drag deltas. `primary` tracks the left button across the
/// events of a frame.
fn pointer_event(
    event: &egui::Event,
    rect: egui::Rect,
    primary: &mut bool,
    dragging: bool,
) -> Option<PointerEvent> {
    let local = |pos: Pos2| Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
    let window = |pos: Pos2| Point::new(pos.x as f64, pos.y as f64);

    match event {
        egui::Event::PointerMoved(pos) => {
            if !dragging && !rect.contains(*pos) {
                return Some(PointerEvent::Leave);
            }
            Some(PointerEvent::Move {
                position: local(*pos),
                screen_position: window(*pos),
                primary_pressed: *primary,
            })
        }
        egui::Event::PointerButton { pos, button, pressed, .. } => {
            let button = to_mouse_button(*button)?;
            if button == MouseButton::Left {
                *primary = *pressed;
            }
            if *pressed {
                rect.contains(*pos).then(|| PointerEvent::Down {
                    position: local(*pos),
                    screen_position: window(*pos),
                    button,
                })
            } else {
                Some(PointerEvent::Up {
                    position: local(*pos),
                    screen_position: window(*pos),
                    button,
                })
            }
        }
        egui::Event::PointerGone => Some(PointerEvent::Leave),
        _ => None,
    }
}

/// Paints through an egui painter, offset to the widget's position.
struct EguiPainter {
    painter: egui::Painter,
    origin: Pos2,
}

impl EguiPainter {
    fn to_egui_rect(&self, rect: kurbo::Rect) -> egui::Rect {
        egui::Rect::from_min_max(
            self.origin + vec2(rect.x0 as f32, rect.y0 as f32),
            self.origin + vec2(rect.x1 as f32, rect.y1 as f32),
        )
    }
}

impl PreviewPainter for EguiPainter {
    fn fill_rect(&mut self, rect: kurbo::Rect, color: Color) {
        self.painter.rect_filled(self.to_egui_rect(rect), 0.0, to_color32(color));
    }

    fn stroke_rect(&mut self, rect: kurbo::Rect, width: f64, color: Color) {
        self.painter.rect_stroke(
            self.to_egui_rect(rect),
            0.0,
            Stroke::new(width as f32, to_color32(color)),
            StrokeKind::Middle,
        );
    }
}

/// The interactive preview as an egui widget.
///
/// Fills the available space, but never less than the configured minimum
/// widget size. The response is marked changed when a drag altered the
/// overlay geometry this frame.
pub struct PreviewWidget<'a> {
    preview: &'a mut PositionPreview,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(preview: &'a mut PositionPreview) -> Self {
        Self { preview }
    }
}

impl Widget for PreviewWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let min = self.preview.config().min_widget_size;
        let desired = ui.available_size().max(vec2(min.width as f32, min.height as f32));
        let (rect, mut response) = ui.allocate_exact_size(desired, Sense::click_and_drag());
        self.preview.resize(rect.width().round() as i32, rect.height().round() as i32);

        let before = self.preview.overlay();
        let events = ui.input(|i| i.events.clone());
        let mut primary = self.preview.is_dragging();
        for event in &events {
            let dragging = self.preview.is_dragging();
            if let Some(pointer) = pointer_event(event, rect, &mut primary, dragging) {
                self.preview.handle_pointer_event(pointer);
            }
        }
        if self.preview.overlay() != before {
            response.mark_changed();
        }

        let cursor = self.preview.cursor();
        if cursor != CursorIcon::Default {
            ui.ctx().set_cursor_icon(to_egui_cursor(cursor));
        }

        if ui.is_rect_visible(rect) {
            let state = self.preview.render_state();
            let mut painter = EguiPainter {
                painter: ui.painter_at(rect),
                origin: rect.min,
            };
            draw_preview(&mut painter, &state, &self.preview.config().palette);
        }
        self.preview.take_redraw_request();

        response
    }
}
