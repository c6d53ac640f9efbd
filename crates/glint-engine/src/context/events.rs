use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::input::{KeyEvent, map_physical_key};

/// Per-context window/event state, fed by the winit `ApplicationHandler`
/// callbacks during a pump.
///
/// The handler only translates; all state transitions go through the
/// `note_*` methods so they stay observable without a live event loop.
/// The close flag is a monotonic latch: once set it is never cleared.
pub(crate) struct EventState {
    title: String,
    initial_size: LogicalSize<f64>,

    window: Option<Arc<Window>>,
    create_error: Option<String>,

    close_requested: bool,
    pending_resize: Option<PhysicalSize<u32>>,
    keys: Vec<KeyEvent>,
}

impl EventState {
    pub(crate) fn new(title: &str, initial_size: LogicalSize<f64>) -> Self {
        Self {
            title: title.to_string(),
            initial_size,
            window: None,
            create_error: None,
            close_requested: false,
            pending_resize: None,
            keys: Vec::new(),
        }
    }

    pub(crate) fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }

    pub(crate) fn create_failed(&self) -> bool {
        self.create_error.is_some()
    }

    pub(crate) fn take_create_error(&mut self) -> Option<String> {
        self.create_error.take()
    }

    /// Clears per-poll state (key transitions). Resize and close survive
    /// across polls: close is a latch, resize until consumed.
    pub(crate) fn begin_poll(&mut self) {
        self.keys.clear();
    }

    pub(crate) fn note_close_requested(&mut self) {
        self.close_requested = true;
    }

    pub(crate) fn should_close(&self) -> bool {
        self.close_requested
    }

    /// Records the newest reported size. Repeated resizes within one poll
    /// overwrite each other: the last one wins.
    pub(crate) fn note_resized(&mut self, size: PhysicalSize<u32>) {
        self.pending_resize = Some(size);
    }

    pub(crate) fn take_pending_resize(&mut self) -> Option<PhysicalSize<u32>> {
        self.pending_resize.take()
    }

    pub(crate) fn note_key(&mut self, event: KeyEvent) {
        self.keys.push(event);
    }

    pub(crate) fn key_events(&self) -> &[KeyEvent] {
        &self.keys
    }
}

impl ApplicationHandler for EventState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.initial_size);

        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => self.create_error = Some(e.to_string()),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.note_close_requested(),

            WindowEvent::Resized(new_size) => self.note_resized(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.note_resized(size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.note_key(KeyEvent {
                    key: map_physical_key(event.physical_key),
                    pressed: event.state.is_pressed(),
                    repeat: event.repeat,
                });
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use winit::dpi::PhysicalSize;

    fn state() -> EventState {
        EventState::new("test", LogicalSize::new(800.0, 600.0))
    }

    // ── close latch ───────────────────────────────────────────────────────

    #[test]
    fn close_is_monotonic_across_polls() {
        let mut s = state();
        assert!(!s.should_close());

        s.note_close_requested();
        assert!(s.should_close());

        s.begin_poll();
        assert!(s.should_close());
        s.begin_poll();
        assert!(s.should_close());
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn last_resize_in_a_poll_wins() {
        let mut s = state();
        s.note_resized(PhysicalSize::new(100, 100));
        s.note_resized(PhysicalSize::new(640, 480));
        s.note_resized(PhysicalSize::new(1024, 768));

        assert_eq!(s.take_pending_resize(), Some(PhysicalSize::new(1024, 768)));
        assert_eq!(s.take_pending_resize(), None);
    }

    #[test]
    fn resize_survives_poll_boundary_until_consumed() {
        let mut s = state();
        s.note_resized(PhysicalSize::new(640, 480));
        s.begin_poll();
        assert_eq!(s.take_pending_resize(), Some(PhysicalSize::new(640, 480)));
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn key_events_are_per_poll() {
        let mut s = state();
        s.note_key(KeyEvent { key: Key::Space, pressed: true, repeat: false });
        assert_eq!(s.key_events().len(), 1);

        s.begin_poll();
        assert!(s.key_events().is_empty());
    }
}
