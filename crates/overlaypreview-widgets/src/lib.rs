//! egui widgets for the overlay position preview.
//!
//! - **Preview**: [`PreviewWidget`], the interactive letterboxed preview
//! - **Controls**: [`HostPanel`], display picker and numeric overlay fields
//! - **Layout**: Section labels, separators, value rows, panel frames

pub mod controls;
pub mod layout;
pub mod preview;

pub use controls::{DISPLAY_PRESETS, DisplayPreset, HostPanel};
pub use layout::{panel_frame, section_label, separator, value_row};
pub use preview::{PreviewWidget, to_egui_cursor};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Width of the host controls side panel
    pub const PANEL_WIDTH: f32 = 220.0;
    /// Width of the numeric fields
    pub const FIELD_WIDTH: f32 = 72.0;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Separator lines
    pub const DIVIDER: Color32 = Color32::from_gray(230);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
