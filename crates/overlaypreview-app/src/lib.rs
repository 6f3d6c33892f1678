//! Overlay Preview Application
//!
//! Demo host window: a side panel with the host's display and overlay
//! controls next to the interactive position preview.

mod app;
mod event_handler;

pub use app::{App, AppConfig, AppError, AppResult, PreviewBackend};
pub use event_handler::{PointerTracker, map_button};
