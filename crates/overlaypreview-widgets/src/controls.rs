//! Host-side controls: display picker and numeric overlay fields.

use egui::{DragValue, Ui};
use overlaypreview_core::PositionPreview;

use crate::{layout, sizing};

/// A selectable display resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPreset {
    pub name: &'static str,
    pub width: i32,
    pub height: i32,
}

impl DisplayPreset {
    pub fn label(&self) -> String {
        format!("{} ({}x{})", self.name, self.width, self.height)
    }
}

/// Displays offered by the picker. The first one is the default.
pub const DISPLAY_PRESETS: &[DisplayPreset] = &[
    DisplayPreset { name: "Full HD", width: 1920, height: 1080 },
    DisplayPreset { name: "QHD", width: 2560, height: 1440 },
    DisplayPreset { name: "4K UHD", width: 3840, height: 2160 },
    DisplayPreset { name: "HD", width: 1280, height: 720 },
    DisplayPreset { name: "Ultrawide", width: 3440, height: 1440 },
    DisplayPreset { name: "Portrait", width: 1080, height: 1920 },
];

/// State of the host panel, mirroring the preview's geometry.
///
/// Edits made here are pushed into the preview with [`HostPanel::apply`].
/// After a drag the host re-reads the preview with [`HostPanel::sync_from`];
/// pushing those values back is a no-op, so the two never ping-pong.
#[derive(Debug, Clone, PartialEq)]
pub struct HostPanel {
    pub display_index: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub enabled: bool,
}

impl HostPanel {
    /// Panel state matching `preview`.
    pub fn from_preview(preview: &PositionPreview) -> Self {
        let mut panel = Self {
            display_index: 0,
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            enabled: true,
        };
        panel.sync_from(preview);
        panel
    }

    pub fn display(&self) -> DisplayPreset {
        DISPLAY_PRESETS.get(self.display_index).copied().unwrap_or(DISPLAY_PRESETS[0])
    }

    /// Re-read geometry from the preview.
    pub fn sync_from(&mut self, preview: &PositionPreview) {
        let display = preview.display();
        if let Some(index) = DISPLAY_PRESETS
            .iter()
            .position(|p| p.width == display.width_px && p.height == display.height_px)
        {
            self.display_index = index;
        }
        (self.x, self.y) = preview.relative_position();
        (self.width, self.height) = preview.actual_size();
        self.enabled = preview.is_enabled();
    }

    /// Push the panel's values into the preview. Returns whether the
    /// preview changed.
    pub fn apply(&self, preview: &mut PositionPreview) -> bool {
        let display = self.display();
        let mut changed = preview.set_display(display.width, display.height);
        changed |= preview.set_overlay(self.x, self.y, self.width, self.height);
        if preview.is_enabled() != self.enabled {
            preview.set_enabled(self.enabled);
            changed = true;
        }
        changed
    }

    /// Show the controls and apply any edits. Returns whether the preview
    /// changed.
    pub fn show(&mut self, ui: &mut Ui, preview: &mut PositionPreview) -> bool {
        let mut edited = false;

        layout::section_label(ui, "Display");
        egui::ComboBox::from_id_salt("display_preset")
            .width(sizing::PANEL_WIDTH - 20.0)
            .selected_text(self.display().label())
            .show_ui(ui, |ui| {
                for (index, preset) in DISPLAY_PRESETS.iter().enumerate() {
                    edited |= ui
                        .selectable_value(&mut self.display_index, index, preset.label())
                        .changed();
                }
            });
        layout::separator(ui);

        let display = self.display();
        layout::section_label(ui, "Position");
        ui.horizontal(|ui| {
            edited |= field(ui, "X", &mut self.x, 0, display.width - 1);
            edited |= field(ui, "Y", &mut self.y, 0, display.height - 1);
        });
        layout::section_label(ui, "Size");
        ui.horizontal(|ui| {
            edited |= field(ui, "W", &mut self.width, 1, display.width);
            edited |= field(ui, "H", &mut self.height, 1, display.height);
        });
        layout::separator(ui);

        edited |= ui.checkbox(&mut self.enabled, "Overlay enabled").changed();

        if let Some(scale) = preview_scale(preview) {
            layout::separator(ui);
            layout::value_row(ui, "Scale", format!("1 : {:.2}", scale));
        }

        if !edited {
            return false;
        }
        log::debug!("Host panel edited: {:?}", self);
        self.apply(preview)
    }
}

/// Real pixels per preview pixel, once the preview has been laid out.
fn preview_scale(preview: &PositionPreview) -> Option<f64> {
    let frame = preview.frame();
    (!frame.is_empty()).then(|| frame.mapper(preview.display()).real_per_canvas_x())
}

fn field(ui: &mut Ui, label: &str, value: &mut i32, min: i32, max: i32) -> bool {
    ui.label(label);
    ui.add_sized(
        [sizing::FIELD_WIDTH, 18.0],
        DragValue::new(value).range(min..=max.max(min)),
    )
    .changed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preview_mirrors_state() {
        let mut preview = PositionPreview::new();
        preview.set_display(2560, 1440);
        preview.set_overlay(10, 20, 300, 200);
        let panel = HostPanel::from_preview(&preview);
        assert_eq!(panel.display(), DISPLAY_PRESETS[1]);
        assert_eq!((panel.x, panel.y, panel.width, panel.height), (10, 20, 300, 200));
        assert!(panel.enabled);
    }

    #[test]
    fn test_apply_pushes_once() {
        let mut preview = PositionPreview::new();
        let mut panel = HostPanel::from_preview(&preview);
        panel.display_index = 3;
        panel.x = 40;
        panel.width = 640;
        panel.height = 360;

        assert!(panel.apply(&mut preview));
        assert_eq!(preview.display().width_px, 1280);
        assert_eq!(preview.relative_position(), (40, 0));
        assert_eq!(preview.actual_size(), (640, 360));
        // Same values again: nothing to do.
        assert!(!panel.apply(&mut preview));
    }

    #[test]
    fn test_apply_toggles_enabled() {
        let mut preview = PositionPreview::new();
        let mut panel = HostPanel::from_preview(&preview);
        panel.enabled = false;
        assert!(panel.apply(&mut preview));
        assert!(!preview.is_enabled());
    }

    #[test]
    fn test_unknown_display_keeps_selection() {
        let mut preview = PositionPreview::new();
        let mut panel = HostPanel::from_preview(&preview);
        panel.display_index = 2;
        preview.set_display(1366, 768);
        panel.sync_from(&preview);
        assert_eq!(panel.display_index, 2);
    }

    #[test]
    fn test_preview_scale() {
        let mut preview = PositionPreview::new();
        assert_eq!(preview_scale(&preview), None);
        preview.resize(402, 227);
        let scale = preview_scale(&preview).unwrap();
        assert!((scale - 4.8).abs() < 1e-9);
    }

    #[test]
    fn test_show_headless_without_edits() {
        let ctx = egui::Context::default();
        let mut preview = PositionPreview::new();
        let mut panel = HostPanel::from_preview(&preview);
        let mut changed = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = panel.show(ui, &mut preview);
            });
        });
        assert!(!changed);
    }
}
