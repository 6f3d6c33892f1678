//! Overlay Preview Core Library
//!
//! Platform-agnostic geometry, hit testing and drag logic for a scaled
//! preview of an overlay placed on a display.

pub mod config;
pub mod drag;
pub mod frame;
pub mod geometry;
pub mod handles;
pub mod input;
pub mod mapper;
pub mod notify;
pub mod preview;

pub use config::{ConfigError, ConfigResult, Palette, PreviewConfig, Rgba};
pub use drag::{DragController, DragSession, DragState};
pub use frame::{CanvasFrame, contain_fit, recompute_frame};
pub use geometry::{
    DisplaySpec, GeometryError, GeometryResult, OverlaySpec, PixelPoint, PixelRect, PixelSize,
    round_px,
};
pub use handles::{Corner, CursorIcon, Handle, HandleKind, corner_handles, handle_at};
pub use input::{MouseButton, PointerEvent};
pub use mapper::CoordinateMapper;
pub use notify::{GeometryObservers, ObserverId};
pub use preview::{OverlayVisual, PositionPreview, RenderState};
