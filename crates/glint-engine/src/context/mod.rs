//! Graphics context: window + event pump + GPU, one per process.
//!
//! Owns the winit event loop and window and the wgpu device layer, and
//! exposes the frame-loop surface: non-blocking event polling, the close
//! latch, frame acquisition and presentation. Every native resource is
//! released by drop on every exit path, including partial-initialization
//! failures inside [`GraphicsContext::create`].

mod events;

use std::time::Duration;

use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::coords::Viewport;
use crate::device::{Frame, Gpu, GpuInit, SurfaceErrorAction};
use crate::error::Error;
use crate::input::{Key, KeyEvent};

use events::EventState;

/// Startup pumps allowed before the backend must have delivered the
/// window. Desktop backends create it on the first pump.
const STARTUP_PUMP_ATTEMPTS: usize = 8;

/// Caller-supplied context configuration.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Initial window size in logical pixels.
    pub width: u32,
    pub height: u32,
    pub title: String,

    /// The single key that requests a window close. Escape-equivalent by
    /// default; no other input is interpreted by the engine.
    pub close_key: Key,

    pub gpu: GpuInit,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "glint".to_string(),
            close_key: Key::Escape,
            gpu: GpuInit::default(),
        }
    }
}

/// The native window, its event pump, and the GPU bound to it.
///
/// All operations must happen on the thread that created the context (the
/// event loop is thread-bound); nothing here is shared across threads.
pub struct GraphicsContext {
    event_loop: EventLoop<()>,
    events: EventState,
    gpu: Gpu,
    close_key: Key,
}

impl GraphicsContext {
    /// Creates the window and the GPU device layer.
    ///
    /// Failure mapping: event-loop startup → [`Error::Init`]; window or
    /// surface creation → [`Error::WindowCreation`]; adapter/device
    /// acquisition → [`Error::FunctionLoad`]. On every failure path the
    /// already-acquired pieces (event loop, window) are torn down by drop
    /// before the error is returned.
    ///
    /// Must be called on the main thread.
    pub fn create(config: ContextConfig) -> Result<Self, Error> {
        let mut event_loop = EventLoop::new().map_err(|e| Error::Init {
            reason: e.to_string(),
        })?;

        let initial_size = LogicalSize::new(f64::from(config.width), f64::from(config.height));
        let mut events = EventState::new(&config.title, initial_size);

        // The window materializes inside `resumed` on the first pump.
        for _ in 0..STARTUP_PUMP_ATTEMPTS {
            event_loop.pump_app_events(Some(Duration::ZERO), &mut events);
            if events.window().is_some() || events.create_failed() {
                break;
            }
        }

        let Some(window) = events.window().cloned() else {
            let reason = events
                .take_create_error()
                .unwrap_or_else(|| "windowing backend delivered no window".to_string());
            return Err(Error::WindowCreation { reason });
        };

        let gpu = pollster::block_on(Gpu::new(window, &config.gpu))?;

        log::info!(
            "graphics context ready: {}x{} \"{}\"",
            config.width,
            config.height,
            config.title
        );

        Ok(Self {
            event_loop,
            events,
            gpu,
            close_key: config.close_key,
        })
    }

    /// Non-blocking poll: drains queued OS events, then applies the newest
    /// pending resize so the viewport mirrors the window before the next
    /// frame, then latches close if the configured close key was pressed.
    ///
    /// Call once per frame, before reading key or close state.
    pub fn poll_events(&mut self) {
        self.events.begin_poll();

        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.events);
        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited (status {code}); latching close");
            self.events.note_close_requested();
        }

        if let Some(size) = self.events.take_pending_resize() {
            log::debug!("viewport -> {}x{}", size.width, size.height);
            self.gpu.resize(size);
        }

        let close_key = self.close_key;
        if self
            .events
            .key_events()
            .iter()
            .any(|e| e.pressed && e.key == close_key)
        {
            self.events.note_close_requested();
        }
    }

    /// True once a close was requested by the user, the close key, or
    /// [`GraphicsContext::request_close`]. Monotonic: never reverts.
    pub fn should_close(&self) -> bool {
        self.events.should_close()
    }

    /// Programmatic close request; observed by the next `should_close`.
    pub fn request_close(&mut self) {
        self.events.note_close_requested();
    }

    /// Key transitions observed by the most recent poll.
    pub fn key_events(&self) -> &[KeyEvent] {
        self.events.key_events()
    }

    /// Current drawable size; equals the last reported window size.
    pub fn viewport(&self) -> Viewport {
        Viewport::from(self.gpu.size())
    }

    /// Acquires the next frame for drawing.
    pub fn begin_frame(&self) -> Result<Frame, wgpu::SurfaceError> {
        self.gpu.begin_frame()
    }

    /// Submits and presents a completed frame. Exactly once per drawn
    /// frame, after all draw calls.
    pub fn present(&self, frame: Frame) {
        self.gpu.present(frame);
    }

    /// Applies the device recovery policy to a surface error.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        self.gpu.handle_surface_error(err)
    }

    pub fn device(&self) -> &wgpu::Device {
        self.gpu.device()
    }

    pub fn queue(&self) -> &wgpu::Queue {
        self.gpu.queue()
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.gpu.surface_format()
    }
}
