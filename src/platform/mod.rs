//=========================================================================
// Platform Subsystem
//
// Hosts a session in a winit window.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                    │
//  │   ↓                                                  │
//  │  InputProcessor  (winit → HostEvent, cached state)   │
//  │   ↓                                                  │
//  │  Sender<PlatformEvent> ───> Session channel          │
//  │   ↓                                                  │
//  │  RedrawRequested                                     │
//  │   ├─ session.pump()          translate queued input  │
//  │   ├─ session.step_engine()   engine's own work       │
//  │   └─ session.present_frame() ARGB → RGBA → window    │
//  └──────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input queued since the last
//   redraw is delivered to the engine before it steps and draws
// - **Sticky modifiers**: modifier state persists across events until
//   winit reports a change
// - **Full channel**: the adapter drains the channel into the engine
//   and retries rather than dropping input
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `run_windowed()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod window_presenter;

//=== External Crates =====================================================

use std::rc::Rc;

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::HostEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::{EngineBoundary, FrameStatus};
use crate::session::Session;
use input_processor::InputProcessor;

pub use window_presenter::WindowPresenter;

//=== Platform ============================================================

/// Window host for one session.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(session, engine)`
/// 2. **Execution**: `platform.run()` blocks in the winit event loop
/// 3. **Resume**: window created, surface bound, engine attached
/// 4. **Shutdown**: close request or a stopped engine exits the loop
///    and tears the session down
///
/// # Thread Safety
///
/// Not Send/Sync (holds the window); stays on the main thread.
pub(crate) struct Platform<E: EngineBoundary> {
    session: Session<E, WindowPresenter>,

    /// Engine waiting for the surface to exist before it is attached.
    pending: Option<E>,

    /// OS window (None until `resumed()`).
    window: Option<Rc<Window>>,

    events: Sender<PlatformEvent>,
    input_processor: InputProcessor,
}

impl<E: EngineBoundary> Platform<E> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(session: Session<E, WindowPresenter>, engine: E) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        let events = session.sender();
        Self {
            session,
            pending: Some(engine),
            window: None,
            events,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes or the engine
    /// stops.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        let result = event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()));

        self.shutdown();
        result
    }

    //--- Internal Helpers -------------------------------------------------

    /// Queues a platform event, draining into the engine if the channel
    /// is full.
    ///
    /// Returns `false` once the session should stop: a close request was
    /// drained to make room, or the channel is gone.
    fn forward(&mut self, event: PlatformEvent) -> bool {
        let event = match self.events.try_send(event) {
            Ok(()) => return true,
            Err(TrySendError::Full(event)) => {
                trace!(target: "platform::input", "Channel full, draining before send");
                if !self.session.pump() {
                    info!(target: "platform", "Close drained while making room for input");
                    return false;
                }
                event
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform::input", "Channel disconnected, dropping event");
                return false;
            }
        };

        if self.events.try_send(event).is_err() {
            warn!(target: "platform::input", "Channel still full, dropping event");
        }
        true
    }

    fn forward_input(&mut self, event_loop: &ActiveEventLoop, event: HostEvent) {
        if !self.forward(PlatformEvent::Input(event)) {
            event_loop.exit();
        }
    }

    /// Runs one frame. Returns `false` once the session should stop.
    fn frame(&mut self) -> bool {
        if !self.session.pump() || !self.session.step_engine() {
            return false;
        }

        if let FrameStatus::Skipped(reason) = self.session.present_frame() {
            trace!(target: "platform", "Frame skipped: {}", reason);
        }
        true
    }

    /// Tears the session down and releases the window. Idempotent.
    fn shutdown(&mut self) {
        self.session.bridge_mut().presenter_mut().detach();
        if self.session.teardown().is_some() {
            debug!(target: "platform", "Engine released");
        }
        self.window = None;
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Rc<Window>, String> {
        let (width, height) = self.session.size();
        let attrs = WindowAttributes::default()
            .with_title(self.session.title())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);

        let window = Rc::new(event_loop.create_window(attrs).map_err(|e| e.to_string())?);
        self.session
            .bridge_mut()
            .presenter_mut()
            .attach(window.clone())
            .map_err(|e| e.to_string())?;
        self.session.initialize_surface().map_err(|e| e.to_string())?;
        Ok(window)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl<E: EngineBoundary> ApplicationHandler for Platform<E> {
    /// Creates the window and binds the surface on first resume, then
    /// signals engine readiness.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match self.create_window(event_loop) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                if let Some(engine) = self.pending.take() {
                    self.session.engine_ready(engine);
                }
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.forward(PlatformEvent::CloseRequested);
                self.session.pump();
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_cursor_moved(position.x, position.y);
                self.forward_input(event_loop, event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                match self.input_processor.process_mouse_button(*button, *state) {
                    Some(event) => self.forward_input(event_loop, event),
                    None => trace!(target: "platform::input", "Unmapped button ignored"),
                }
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(key_event) {
                    Some(event) => self.forward_input(event_loop, event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::RedrawRequested => {
                if !self.frame() {
                    info!(target: "platform", "Engine stopped, exiting");
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
