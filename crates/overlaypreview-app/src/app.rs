//! Application state and lifecycle.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use kurbo::Point;
use overlaypreview_core::{ConfigError, CursorIcon, PointerEvent, PositionPreview, PreviewConfig};
use overlaypreview_render::{RenderContext, Renderer, VelloRenderer};
use overlaypreview_widgets::{HostPanel, PreviewWidget, panel_frame, sizing, to_egui_cursor};
use peniko::Color;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::event_handler::PointerTracker;

/// Space between the side panel, the window edges and the preview.
const PREVIEW_MARGIN: f32 = 16.0;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Usage error: {0}")]
    Usage(String),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// How the preview is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewBackend {
    /// Vello scene under the egui layer, input fed from winit.
    #[default]
    Vello,
    /// egui `PreviewWidget` in the central panel.
    Egui,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub backend: PreviewBackend,
    pub preview: PreviewConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Overlay Position".to_string(),
            width: 960,
            height: 600,
            background_color: Color::from_rgba8(245, 245, 245, 255),
            backend: PreviewBackend::Vello,
            preview: PreviewConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build from command-line arguments, program name excluded:
    /// `[--egui | --vello] [CONFIG.json]`.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> AppResult<Self> {
        let mut config = Self::default();
        let mut path: Option<PathBuf> = None;
        for arg in args {
            match arg.as_str() {
                "--egui" => config.backend = PreviewBackend::Egui,
                "--vello" => config.backend = PreviewBackend::Vello,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown flag {}", flag)));
                }
                _ if path.is_some() => {
                    return Err(AppError::Usage("only one config path may be given".to_string()));
                }
                _ => path = Some(PathBuf::from(&arg)),
            }
        }
        if let Some(path) = path {
            config.preview = PreviewConfig::load(&path)?;
        }
        Ok(config)
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    preview_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    // State
    preview: PositionPreview,
    host_panel: HostPanel,
    /// Set by the geometry observer, cleared when the panel re-reads.
    geometry_changed: Rc<Cell<bool>>,
    pointer: PointerTracker,
    /// Where the Vello-drawn preview sits, logical window coordinates.
    preview_rect: egui::Rect,
    config: AppConfig,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application until the window closes.
    pub async fn run(mut self) -> AppResult<()> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) {
        let render_cx = self.render_cx.as_ref().expect("RenderContext not initialized");
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .expect("Failed to create Vello renderer");

        // Vello renders to Rgba8Unorm; the surface may be Bgra8Unorm.
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let mut preview = PositionPreview::with_config(self.config.preview.clone());
        let geometry_changed = Rc::new(Cell::new(false));
        let flag = geometry_changed.clone();
        preview.on_geometry_changed(move || flag.set(true));
        let host_panel = HostPanel::from_preview(&preview);

        let mut pointer = PointerTracker::new();
        pointer.set_window_origin(window_origin(&window));

        log::info!(
            "Preview initialized - {}x{}, {:?} backend",
            surface.config.width,
            surface.config.height,
            self.config.backend
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            preview_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            preview,
            host_panel,
            geometry_changed,
            pointer,
            preview_rect: egui::Rect::NOTHING,
            config: self.config.clone(),
        });

        window.request_redraw();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-area origin on screen in logical pixels, or zero where the
/// platform does not report it.
fn window_origin(window: &Window) -> Point {
    window
        .inner_position()
        .map(|p| {
            let p = p.to_logical::<f64>(window.scale_factor());
            Point::new(p.x, p.y)
        })
        .unwrap_or(Point::ZERO)
}

impl AppState {
    fn handle_pointer(&mut self, event: PointerEvent) {
        if self.preview.handle_pointer_event(event) {
            log::trace!("Preview consumed {:?}", event);
        }
    }

    fn redraw(&mut self, render_cx: &vello::util::RenderContext) {
        if self.geometry_changed.take() {
            self.host_panel.sync_from(&self.preview);
            log::info!(
                "Overlay at {:?}, size {:?}",
                self.preview.relative_position(),
                self.preview.actual_size()
            );
        }

        // Run egui
        let backend = self.config.backend;
        let mut preview_rect = self.preview_rect;
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            egui::SidePanel::left("host_panel")
                .exact_width(sizing::PANEL_WIDTH)
                .resizable(false)
                .frame(panel_frame())
                .show(ctx, |ui| {
                    ui.heading("Overlay");
                    ui.add_space(6.0);
                    self.host_panel.show(ui, &mut self.preview);
                });

            match backend {
                PreviewBackend::Egui => {
                    egui::CentralPanel::default().show(ctx, |ui| {
                        ui.add(PreviewWidget::new(&mut self.preview));
                    });
                }
                PreviewBackend::Vello => {
                    preview_rect = ctx.available_rect().shrink(PREVIEW_MARGIN);
                    let cursor = self.preview.cursor();
                    let over_preview = self.preview.is_dragging() || !ctx.is_pointer_over_area();
                    if cursor != CursorIcon::Default && over_preview {
                        ctx.set_cursor_icon(to_egui_cursor(cursor));
                    }
                }
            }
        });

        self.preview_rect = preview_rect;
        self.pointer
            .set_preview_origin(Point::new(preview_rect.min.x as f64, preview_rect.min.y as f64));
        self.egui_state.handle_platform_output(&self.window, egui_output.platform_output);
        let egui_repaint = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        // Build the preview scene
        let scale = self.window.scale_factor();
        if backend == PreviewBackend::Vello {
            self.preview.resize(
                preview_rect.width().round() as i32,
                preview_rect.height().round() as i32,
            );
            let render_state = self.preview.render_state();
            let ctx = RenderContext::new(&render_state, &self.preview.config().palette)
                .with_origin(Point::new(
                    preview_rect.min.x as f64 * scale,
                    preview_rect.min.y as f64 * scale,
                ))
                .with_scale_factor(scale);
            self.preview_renderer.build_scene(&ctx);
        }
        self.preview.take_redraw_request();

        // Render
        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match self.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let params = RenderParams {
            base_color: self.config.background_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a StorageBinding Rgba8Unorm target;
        // it is blitted to the surface afterwards.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        if let Err(e) = self.vello_renderer.render_to_texture(
            device,
            queue,
            self.preview_renderer.scene(),
            &render_texture_view,
            &params,
        ) {
            log::error!("Failed to render: {:?}", e);
            return;
        }

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        // Render egui on top
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load, // Keep Vello content
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        if egui_repaint || self.preview.needs_redraw() {
            self.window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self.render_cx.get_or_insert_with(vello::util::RenderContext::new);
        let surface: RenderSurface<'static> = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .expect("Failed to create surface");

        self.finish_init(window, surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }
        let egui_wants_pointer = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();
        // The egui backend routes pointer input through the widget itself.
        let feed_preview = state.config.backend == PreviewBackend::Vello;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::Moved(_) | WindowEvent::ScaleFactorChanged { .. } => {
                state.pointer.set_window_origin(window_origin(&state.window));
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Some(render_cx) = self.render_cx.as_ref() {
                    state.redraw(render_cx);
                }
            }

            WindowEvent::CursorMoved { position, .. } if feed_preview => {
                let logical = position.to_logical::<f64>(state.window.scale_factor());
                let event = state.pointer.cursor_moved(Point::new(logical.x, logical.y));
                if egui_wants_pointer && !state.preview.is_dragging() {
                    state.handle_pointer(PointerEvent::Leave);
                } else {
                    state.handle_pointer(event);
                }
            }

            WindowEvent::MouseInput { state: button_state, button, .. } if feed_preview => {
                let Some(event) = state.pointer.mouse_input(button_state, button) else {
                    return;
                };
                // Releases always go through so a drag can never get stuck.
                if matches!(event, PointerEvent::Down { .. }) && egui_wants_pointer {
                    return;
                }
                state.handle_pointer(event);
            }

            WindowEvent::CursorLeft { .. } if feed_preview => {
                let event = state.pointer.cursor_left();
                state.handle_pointer(event);
            }

            _ => {}
        }

        if state.preview.needs_redraw() {
            state.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            if state.preview.needs_redraw() {
                state.window.request_redraw();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_args() {
        let config = AppConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config.backend, PreviewBackend::Vello);
        assert_eq!(config.preview, PreviewConfig::default());
    }

    #[test]
    fn test_egui_flag() {
        let config = AppConfig::from_args(args(&["--egui"])).unwrap();
        assert_eq!(config.backend, PreviewBackend::Egui);
    }

    #[test]
    fn test_unknown_flag() {
        let result = AppConfig::from_args(args(&["--bogus"]));
        assert!(matches!(result, Err(AppError::Usage(_))));
    }

    #[test]
    fn test_config_path_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"handle_size": 10}}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = AppConfig::from_args(args(&["--egui", &path])).unwrap();
        assert_eq!(config.preview.handle_size, 10);
        assert_eq!(config.preview.border, 1);
    }

    #[test]
    fn test_missing_config_is_error() {
        let result = AppConfig::from_args(args(&["/nonexistent/preview.json"]));
        assert!(matches!(result, Err(AppError::Config(ConfigError::Io(_)))));
    }

    #[test]
    fn test_two_paths_rejected() {
        let result = AppConfig::from_args(args(&["a.json", "b.json"]));
        assert!(matches!(result, Err(AppError::Usage(_))));
    }
}
