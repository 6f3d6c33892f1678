//! Overlay Preview Render Library
//!
//! Renderer abstraction and implementations for the position preview.
//! Drawing is expressed once in [`draw_preview`] against a [`PreviewPainter`];
//! the default backend records into a Vello scene.

mod draw_list;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use draw_list::{DrawCommand, DrawList};
pub use renderer::{PreviewPainter, RenderContext, Renderer, draw_preview, overlay_alpha, to_color};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
