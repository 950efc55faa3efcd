//=========================================================================
// Session
//
// Explicit context object that owns one bridge instance: the engine
// link, the framebuffer bridge, the input translator and the host event
// channel.
//
// Architecture:
// ```text
//     SessionBuilder  ──build(presenter)──>  Session
//         │                                    │
//         ├─ with_surface_id()                 ├─ engine_ready()   NotReady → Ready
//         ├─ with_size()                       ├─ pump()           drain host events
//         ├─ with_channel_capacity()           ├─ step_engine()    engine's own work
//         ├─ with_title()                      ├─ present_frame()  draw
//         └─ run_windowed(engine)              │
//                                              └─ teardown()
// ```
//
// Several sessions can coexist; nothing here is global.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Sender};
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::input::{Disposition, HostEvent, InputTranslator};
use crate::core::platform_bridge::{EventCollector, PlatformError, PlatformEvent, TickControl};
use crate::core::{
    BridgeError, EngineBoundary, EngineLink, FrameStatus, FramebufferBridge, Presenter, SurfaceId,
};
use crate::platform::{Platform, WindowPresenter};

//=== SessionBuilder ======================================================

/// Builder for configuring and constructing a [`Session`].
///
/// # Default Values
///
/// - **Surface id**: `"canvas"`
/// - **Size**: 640x480
/// - **Channel capacity**: 128 events
/// - **Title**: `"canvas-bridge"`
///
/// # Examples
///
/// ```
/// use canvas_bridge::core::{MemorySurface, SurfaceId};
/// use canvas_bridge::SessionBuilder;
///
/// # use canvas_bridge::core::input::{EngineButton, EngineButtons, EngineKey};
/// # struct NoEngine;
/// # impl canvas_bridge::core::EngineBoundary for NoEngine {
/// #     fn framebuffer(&self) -> canvas_bridge::core::FramebufferHandle { Default::default() }
/// #     fn width(&self) -> u32 { 0 }
/// #     fn height(&self) -> u32 { 0 }
/// #     fn memory(&self) -> &dyn canvas_bridge::core::LinearMemory { unimplemented!() }
/// #     fn mouse_motion(&mut self, _: i32, _: i32, _: EngineButtons) {}
/// #     fn mouse_button(&mut self, _: i32, _: i32, _: EngineButton, _: bool) {}
/// #     fn key(&mut self, _: EngineKey, _: bool) {}
/// # }
/// let session = SessionBuilder::new()
///     .with_size(320, 240)
///     .build::<NoEngine, _>(MemorySurface::new(SurfaceId::new("canvas")));
///
/// assert_eq!(session.size(), (320, 240));
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    surface_id: SurfaceId,
    width: u32,
    height: u32,
    channel_capacity: usize,
    title: String,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            surface_id: SurfaceId::new("canvas"),
            width: 640,
            height: 480,
            channel_capacity: 128,
            title: "canvas-bridge".to_string(),
        }
    }

    /// Sets the logical id of the drawing target to bind.
    pub fn with_surface_id(mut self, id: impl Into<String>) -> Self {
        self.surface_id = SurfaceId::new(id);
        self
    }

    /// Sets the initial surface size in pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Surface size must be non-zero, got {}x{}", width, height);
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the capacity of the host → session event channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window title used by windowed hosts.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds a session around `presenter`. The engine is attached later
    /// with [`Session::engine_ready`].
    pub fn build<E, P>(self, presenter: P) -> Session<E, P>
    where
        E: EngineBoundary,
        P: Presenter,
    {
        info!(
            target: "bridge::session",
            "Building session (surface: '{}', {}x{}, channel: {})",
            self.surface_id, self.width, self.height, self.channel_capacity
        );

        let (sender, receiver) = bounded(self.channel_capacity);

        Session {
            link: EngineLink::default(),
            bridge: FramebufferBridge::new(presenter, self.surface_id),
            translator: InputTranslator::new(),
            collector: EventCollector::new(receiver),
            sender,
            size: (self.width, self.height),
            title: self.title,
        }
    }

    /// Opens a window sized to the surface and runs `engine` in it until
    /// the window closes or the engine stops.
    ///
    /// Blocks the calling thread, which must be the main thread on
    /// macOS/iOS.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the winit event loop fails.
    pub fn run_windowed<E: EngineBoundary>(self, engine: E) -> Result<(), PlatformError> {
        let presenter = WindowPresenter::new(self.surface_id.clone());
        Platform::new(self.build(presenter), engine).run()
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Session =============================================================

/// One engine ↔ host bridge instance.
pub struct Session<E: EngineBoundary, P: Presenter> {
    link: EngineLink<E>,
    bridge: FramebufferBridge<P>,
    translator: InputTranslator,
    collector: EventCollector,
    sender: Sender<PlatformEvent>,
    size: (u32, u32),
    title: String,
}

impl<E: EngineBoundary, P: Presenter> Session<E, P> {
    //--- Lifecycle --------------------------------------------------------

    /// Binds the drawing target at the configured size.
    pub fn initialize_surface(&mut self) -> Result<(), BridgeError> {
        let (width, height) = self.size;
        self.bridge.initialize_surface(width, height)
    }

    /// Engine readiness signal: accessors become valid and input starts
    /// flowing to the engine.
    pub fn engine_ready(&mut self, engine: E) {
        self.link.attach(engine);
        self.bridge.invalidate_cache();
    }

    /// Releases the surface and detaches the engine. Safe to call more
    /// than once; only the first call returns the engine.
    pub fn teardown(&mut self) -> Option<E> {
        self.bridge.teardown();
        let engine = self.link.detach();
        if engine.is_some() {
            info!(target: "bridge::session", "Session torn down");
        }
        engine
    }

    //--- Input ------------------------------------------------------------

    /// Sender half for host adapters.
    pub fn sender(&self) -> Sender<PlatformEvent> {
        self.sender.clone()
    }

    /// Translates one host event synchronously.
    ///
    /// Before readiness there is no subscription, so the event is
    /// dropped and the host keeps its default behaviour.
    pub fn handle_event(&mut self, event: &HostEvent) -> Disposition {
        match self.link.engine_mut() {
            Ok(engine) => self.translator.handle(event, engine),
            Err(_) => {
                trace!(target: "bridge::input", "Engine not ready, dropping {:?}", event);
                Disposition::Default
            }
        }
    }

    /// Drains queued host events in arrival order.
    ///
    /// Returns `false` once the host asked to close or every sender is
    /// gone.
    pub fn pump(&mut self) -> bool {
        let control = self.collector.collect_frame();

        for event in self.collector.take_events() {
            match event {
                PlatformEvent::Input(input) => {
                    self.handle_event(&input);
                }
                PlatformEvent::InvalidateFramebuffer => self.invalidate_cache(),
                PlatformEvent::CloseRequested => {
                    info!(target: "bridge::session", "Close requested");
                    if let Ok(engine) = self.link.engine_mut() {
                        engine.shutdown();
                    }
                }
            }
        }

        control == TickControl::Continue
    }

    //--- Rendering --------------------------------------------------------

    /// Lets the engine run its own per-frame work.
    ///
    /// Returns `false` once the engine has stopped. An engine that is not
    /// ready yet counts as running.
    pub fn step_engine(&mut self) -> bool {
        match self.link.engine_mut() {
            Ok(engine) => {
                let running = engine.step();
                if !running {
                    debug!(target: "bridge::session", "Engine reported stopped");
                }
                running
            }
            Err(_) => true,
        }
    }

    /// Draws the engine's framebuffer onto the surface.
    pub fn present_frame(&mut self) -> FrameStatus {
        self.bridge.present_frame(self.link.engine().ok())
    }

    /// Forces the next frame to re-acquire the framebuffer.
    pub fn invalidate_cache(&mut self) {
        self.bridge.invalidate_cache();
    }

    //--- Accessors --------------------------------------------------------

    pub fn is_ready(&self) -> bool {
        self.link.is_ready()
    }

    pub fn engine(&self) -> Option<&E> {
        self.link.engine().ok()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.link.engine_mut().ok()
    }

    pub fn bridge(&self) -> &FramebufferBridge<P> {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut FramebufferBridge<P> {
        &mut self.bridge
    }

    /// Configured surface size.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
