use std::sync::Arc;

use anyhow::Context as _;
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::error::Error;

use super::GpuInit;

/// Owns the wgpu core objects and the surface configuration.
///
/// Exactly one `Gpu` exists per context. The surface holds an `Arc` to the
/// window, so the window outlives every GPU object by construction; all
/// handles are released by drop, in every control-flow path.
pub struct Gpu {
    surface: wgpu::Surface<'static>,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels. Mirrors the last size the
    /// windowing backend reported.
    size: PhysicalSize<u32>,
}

/// One acquired frame: surface texture, its view, and a command encoder.
///
/// Short-lived. Holding the surface texture blocks acquisition of the next
/// frame, so a `Frame` must be presented (or dropped) promptly.
pub struct Frame {
    pub(crate) surface_texture: wgpu::SurfaceTexture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) encoder: wgpu::CommandEncoder,
}

impl Frame {
    /// Begins the frame's render pass, clearing the color target.
    ///
    /// The returned pass borrows the frame; drop it before presenting.
    pub fn begin_pass(&mut self, clear_color: wgpu::Color) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("glint frame pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}

/// Response to a surface acquisition error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; acquisition may succeed next iteration.
    Reconfigured,
    /// Transient error; skip this frame.
    SkipFrame,
    /// Out of memory; terminate.
    Fatal,
}

impl Gpu {
    /// Acquires adapter, device, and queue, then configures the surface.
    ///
    /// Error mapping follows the startup contract: a surface that cannot be
    /// created is a [`Error::WindowCreation`]; a missing adapter or device
    /// is a [`Error::FunctionLoad`].
    pub(crate) async fn new(window: Arc<Window>, init: &GpuInit) -> Result<Self, Error> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });

        let surface = instance.create_surface(Arc::clone(&window)).map_err(|e| {
            Error::WindowCreation {
                reason: format!("failed to create rendering surface: {e}"),
            }
        })?;

        let (adapter, device, queue) = acquire_device(&instance, &surface, init)
            .await
            .map_err(|e| Error::FunctionLoad {
                reason: format!("{e:#}"),
            })?;

        let info = adapter.get_info();
        log::info!("gpu adapter: {} ({:?})", info.name, info.backend);

        let caps = surface.get_capabilities(&adapter);
        let format =
            choose_surface_format(&caps, init.prefer_srgb).ok_or_else(|| Error::FunctionLoad {
                reason: "surface reports no supported formats".to_string(),
            })?;

        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);

        Ok(Self {
            surface,
            adapter,
            device,
            queue,
            config,
            size,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Last reported drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    /// Reconfigures the surface for a new size.
    ///
    /// wgpu cannot configure a zero-area surface; in that case only the
    /// tracked size is updated and configuration is deferred until a
    /// non-zero size arrives.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquires the next surface texture and a command encoder for it.
    pub fn begin_frame(&self) -> Result<Frame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("glint frame encoder"),
            });

        Ok(Frame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the frame's commands and presents the completed image.
    ///
    /// This is the single presentation point: call it exactly once per
    /// drawn frame, after all draw calls.
    pub fn present(&self, frame: Frame) {
        let Frame {
            surface_texture,
            view,
            encoder,
        } = frame;

        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    /// Classifies a surface error into a recovery action.
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
                SurfaceErrorAction::Reconfigured
            }
            SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

/// Adapter + device acquisition, composed so the whole chain reports one
/// reason string at the typed-error boundary.
async fn acquire_device(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
    init: &GpuInit,
) -> anyhow::Result<(wgpu::Adapter, wgpu::Device, wgpu::Queue)> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: init.power_preference,
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await
        .context("no suitable GPU adapter")?;

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("glint device"),
            required_features: init.required_features,
            required_limits: init.required_limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("failed to create GPU device and queue")?;

    Ok((adapter, device, queue))
}

fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let srgb = caps.formats.iter().copied().find(|f| f.is_srgb());
        if srgb.is_some() {
            return srgb;
        }
    }

    caps.formats.first().copied()
}
