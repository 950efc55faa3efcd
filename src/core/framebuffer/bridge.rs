//=========================================================================
// Framebuffer Bridge
//=========================================================================
//
// Copies the engine's ARGB32 framebuffer onto the host surface once per
// frame.
//
// Per frame:
// ```text
//   engine ready? ──no──> skip (BindingUnavailable)
//        │
//   cached view current? ──no──> drop it
//        │
//   no view? ──> acquire (InvalidHandle / MemoryUnavailable → skip)
//        │
//   surface bound at view size? ──no──> (re)bind (ResourceNotFound → skip)
//        │
//   convert every pixel → present
// ```
//
// Acquisition is lazy: the engine may not have created its framebuffer
// when the render loop starts, so the first frames may skip until it
// does. A skipped frame leaves the previous frame on screen.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, trace, warn};

//=== Internal Dependencies ===============================================

use super::presenter::{Presenter, SurfaceId};
use super::view::FramebufferView;
use crate::core::engine_boundary::EngineBoundary;
use crate::core::pixel::convert_frame;
use crate::core::BridgeError;

//=== FrameStatus =========================================================

/// Outcome of one `present_frame` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameStatus {
    /// The surface now shows the engine's current framebuffer.
    Presented,

    /// Nothing was drawn; the surface keeps its previous contents.
    Skipped(BridgeError),
}

impl FrameStatus {
    pub fn is_presented(&self) -> bool {
        matches!(self, Self::Presented)
    }
}

//=== FramebufferBridge ===================================================

/// Per-instance bridge state: the presenter binding and the cached view.
pub struct FramebufferBridge<P: Presenter> {
    presenter: P,
    surface_id: SurfaceId,

    /// Size the host asked for; kept across failed binds so later frames
    /// retry. Cleared only by `teardown`.
    wanted: Option<(u32, u32)>,
    bound: Option<(u32, u32)>,
    view: Option<FramebufferView>,
    last_skip: Option<&'static str>,
}

impl<P: Presenter> FramebufferBridge<P> {
    //--- Construction -----------------------------------------------------

    pub fn new(presenter: P, surface_id: SurfaceId) -> Self {
        Self {
            presenter,
            surface_id,
            wanted: None,
            bound: None,
            view: None,
            last_skip: None,
        }
    }

    //--- Surface Binding --------------------------------------------------

    /// Binds the drawing target at `width`x`height`.
    ///
    /// Calling again re-binds at the new size. On failure the bridge is
    /// left unbound and the error is logged and returned; later frames
    /// retry the bind.
    pub fn initialize_surface(&mut self, width: u32, height: u32) -> Result<(), BridgeError> {
        self.wanted = Some((width, height));
        self.bind(width, height).map_err(|e| {
            error!(target: "bridge::framebuffer", "Surface bind failed: {}", e);
            e
        })
    }

    /// Binds the presenter without touching the requested size. Frame-time
    /// failures are reported through the skip log instead.
    fn bind(&mut self, width: u32, height: u32) -> Result<(), BridgeError> {
        self.bound = None;
        self.presenter.bind(&self.surface_id, width, height)?;
        self.bound = Some((width, height));
        Ok(())
    }

    //--- Per-Frame --------------------------------------------------------

    /// Draws the engine's current framebuffer onto the surface.
    ///
    /// `engine` is `None` while the engine has not signalled readiness.
    /// Never panics; every failure is logged and reported as
    /// [`FrameStatus::Skipped`].
    pub fn present_frame<E>(&mut self, engine: Option<&E>) -> FrameStatus
    where
        E: EngineBoundary + ?Sized,
    {
        let result = engine
            .ok_or(BridgeError::BindingUnavailable)
            .and_then(|engine| self.try_present(engine));

        match result {
            Ok(()) => {
                if self.last_skip.take().is_some() {
                    debug!(target: "bridge::framebuffer", "Presenting again after skipped frames");
                }
                FrameStatus::Presented
            }
            Err(e) => {
                self.report_skip(&e);
                FrameStatus::Skipped(e)
            }
        }
    }

    /// Drops the cached view so the next frame re-reads handle and
    /// dimensions from the engine.
    pub fn invalidate_cache(&mut self) {
        if self.view.take().is_some() {
            debug!(target: "bridge::framebuffer", "Framebuffer cache invalidated");
        }
    }

    /// Releases the surface and the cached view. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.view = None;
        self.wanted = None;
        if self.bound.take().is_some() {
            self.presenter.release();
            debug!(target: "bridge::framebuffer", "Surface '{}' released", self.surface_id);
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn cached_view(&self) -> Option<&FramebufferView> {
        self.view.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    //--- Internal Helpers -------------------------------------------------

    fn try_present<E>(&mut self, engine: &E) -> Result<(), BridgeError>
    where
        E: EngineBoundary + ?Sized,
    {
        let memory = engine.memory();

        if let Some(view) = self.view {
            if !view.is_current(memory) {
                debug!(
                    target: "bridge::framebuffer",
                    "Linear memory relocated, re-acquiring framebuffer"
                );
                self.view = None;
            }
        }

        let view = match self.view {
            Some(view) => view,
            None => {
                let view = FramebufferView::acquire(engine)?;
                debug!(
                    target: "bridge::framebuffer",
                    "Framebuffer cached: {:#x} ({}x{})",
                    view.handle().byte_offset(),
                    view.width(),
                    view.height()
                );
                self.view = Some(view);
                view
            }
        };

        if self.wanted.is_none() {
            return Err(BridgeError::ResourceNotFound(self.surface_id.clone()));
        }
        if self.bound != Some((view.width(), view.height())) {
            self.bind(view.width(), view.height())?;
        }

        let pixels = view.pixels(memory)?;
        let target = self
            .presenter
            .pixels_mut()
            .ok_or_else(|| BridgeError::ResourceNotFound(self.surface_id.clone()))?;
        convert_frame(pixels, target);

        self.presenter.present()
    }

    /// Logs the first skip of each kind loudly, repeats quietly.
    fn report_skip(&mut self, e: &BridgeError) {
        if self.last_skip == Some(e.kind()) {
            trace!(target: "bridge::framebuffer", "Frame skipped: {}", e);
        } else {
            warn!(target: "bridge::framebuffer", "Frame skipped: {}", e);
            self.last_skip = Some(e.kind());
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine_boundary::test_support::FakeEngine;
    use crate::core::framebuffer::MemorySurface;

    fn canvas() -> SurfaceId {
        SurfaceId::new("canvas")
    }

    fn bound_bridge(width: u32, height: u32) -> FramebufferBridge<MemorySurface> {
        let mut bridge = FramebufferBridge::new(MemorySurface::new(canvas()), canvas());
        bridge.initialize_surface(width, height).unwrap();
        bridge
    }

    /// Memory surface whose next `bind`/`present` calls can be made to fail.
    struct FlakySurface {
        inner: MemorySurface,
        failing_binds: usize,
        failing_presents: usize,
    }

    impl FlakySurface {
        fn new() -> Self {
            Self { inner: MemorySurface::new(canvas()), failing_binds: 0, failing_presents: 0 }
        }
    }

    impl Presenter for FlakySurface {
        fn bind(&mut self, id: &SurfaceId, width: u32, height: u32) -> Result<(), BridgeError> {
            if self.failing_binds > 0 {
                self.failing_binds -= 1;
                return Err(BridgeError::ResourceNotFound(id.clone()));
            }
            self.inner.bind(id, width, height)
        }

        fn pixels_mut(&mut self) -> Option<&mut [u8]> {
            self.inner.pixels_mut()
        }

        fn present(&mut self) -> Result<(), BridgeError> {
            if self.failing_presents > 0 {
                self.failing_presents -= 1;
                return Err(BridgeError::PresentFailed("device lost".into()));
            }
            self.inner.present()
        }

        fn release(&mut self) {
            self.inner.release();
        }
    }

    //=====================================================================
    // Surface Binding Tests
    //=====================================================================

    #[test]
    fn initialize_surface_reports_missing_target() {
        let mut bridge =
            FramebufferBridge::new(MemorySurface::new(canvas()), SurfaceId::new("nope"));

        assert!(matches!(
            bridge.initialize_surface(2, 2),
            Err(BridgeError::ResourceNotFound(_))
        ));
        assert!(!bridge.is_bound());
    }

    #[test]
    fn initialize_surface_rebinds_with_new_size() {
        let mut bridge = bound_bridge(1, 1);
        bridge.initialize_surface(3, 3).unwrap();

        assert_eq!(bridge.presenter().size(), Some((3, 3)));
    }

    //=====================================================================
    // Frame Tests
    //=====================================================================

    #[test]
    fn presents_two_by_two_frame() {
        let engine = FakeEngine::with_framebuffer(
            2,
            2,
            &[0xFF_FF_00_00, 0xFF_00_FF_00, 0xFF_00_00_FF, 0x80_11_22_33],
        );
        let mut bridge = bound_bridge(2, 2);

        assert_eq!(bridge.present_frame(Some(&engine)), FrameStatus::Presented);
        assert_eq!(
            bridge.presenter().front(),
            &[
                0xFF, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, //
                0x00, 0x00, 0xFF, 0xFF, 0x11, 0x22, 0x33, 0x80,
            ]
        );
    }

    #[test]
    fn skips_before_readiness() {
        let mut bridge = bound_bridge(1, 1);

        let status = bridge.present_frame::<FakeEngine>(None);

        assert_eq!(status, FrameStatus::Skipped(BridgeError::BindingUnavailable));
        assert_eq!(bridge.presenter().frames_presented(), 0);
    }

    #[test]
    fn null_framebuffer_skips_then_recovers() {
        let mut engine = FakeEngine::not_started();
        let mut bridge = bound_bridge(1, 1);

        assert_eq!(
            bridge.present_frame(Some(&engine)),
            FrameStatus::Skipped(BridgeError::InvalidHandle)
        );
        assert!(bridge.cached_view().is_none());
        assert_eq!(bridge.presenter().frames_presented(), 0);

        engine.start(1, 1, &[0xFF_01_02_03]);

        assert!(bridge.present_frame(Some(&engine)).is_presented());
        assert_eq!(bridge.presenter().front(), &[1, 2, 3, 0xFF]);
    }

    #[test]
    fn unbound_surface_skips_without_drawing() {
        let engine = FakeEngine::with_framebuffer(1, 1, &[0]);
        let mut bridge = FramebufferBridge::new(MemorySurface::new(canvas()), canvas());

        assert!(matches!(
            bridge.present_frame(Some(&engine)),
            FrameStatus::Skipped(BridgeError::ResourceNotFound(_))
        ));
        assert_eq!(bridge.presenter().frames_presented(), 0);
    }

    #[test]
    fn cached_view_is_reused_between_frames() {
        let engine = FakeEngine::with_framebuffer(1, 1, &[0]);
        let mut bridge = bound_bridge(1, 1);

        bridge.present_frame(Some(&engine));
        bridge.present_frame(Some(&engine));

        assert_eq!(engine.accessor_reads(), 1);
        assert_eq!(bridge.presenter().frames_presented(), 2);
    }

    #[test]
    fn invalidate_forces_reread_of_engine_accessors() {
        let mut engine = FakeEngine::with_framebuffer(1, 1, &[0xFF_00_00_00]);
        let mut bridge = bound_bridge(1, 1);
        bridge.present_frame(Some(&engine));

        // Engine moves to a bigger framebuffer elsewhere.
        engine.start(2, 1, &[0xFF_0A_0B_0C, 0xFF_0D_0E_0F]);
        bridge.invalidate_cache();
        let status = bridge.present_frame(Some(&engine));

        assert_eq!(status, FrameStatus::Presented);
        assert_eq!(engine.accessor_reads(), 2);
        assert_eq!(bridge.cached_view().map(|v| v.width()), Some(2));
        assert_eq!(bridge.presenter().size(), Some((2, 1)));
        assert_eq!(bridge.presenter().front(), &[0x0A, 0x0B, 0x0C, 0xFF, 0x0D, 0x0E, 0x0F, 0xFF]);
    }

    #[test]
    fn relocation_is_detected_and_reacquired_in_same_frame() {
        let mut engine = FakeEngine::with_framebuffer(1, 1, &[0]);
        let mut bridge = bound_bridge(1, 1);
        bridge.present_frame(Some(&engine));

        engine.relocate();
        engine.paint(&[0xFF_AA_BB_CC]);

        assert!(bridge.present_frame(Some(&engine)).is_presented());
        assert_eq!(engine.accessor_reads(), 2);
        assert_eq!(bridge.presenter().front(), &[0xAA, 0xBB, 0xCC, 0xFF]);
    }

    #[test]
    fn failed_frame_keeps_previous_contents() {
        let mut engine = FakeEngine::with_framebuffer(1, 1, &[0xFF_01_01_01]);
        let mut bridge = bound_bridge(1, 1);
        bridge.present_frame(Some(&engine));

        engine.handle = crate::core::engine_boundary::FramebufferHandle::NULL;
        bridge.invalidate_cache();

        assert!(!bridge.present_frame(Some(&engine)).is_presented());
        assert_eq!(bridge.presenter().front(), &[1, 1, 1, 0xFF]);
    }

    //=====================================================================
    // Recovery Tests
    //=====================================================================

    #[test]
    fn failed_rebind_is_retried_next_frame() {
        let engine = FakeEngine::with_framebuffer(2, 1, &[0xFF_01_02_03, 0xFF_04_05_06]);
        let mut bridge = FramebufferBridge::new(FlakySurface::new(), canvas());
        bridge.initialize_surface(1, 1).unwrap();
        bridge.presenter_mut().failing_binds = 1;

        assert!(matches!(
            bridge.present_frame(Some(&engine)),
            FrameStatus::Skipped(BridgeError::ResourceNotFound(_))
        ));
        assert!(!bridge.is_bound());

        assert_eq!(bridge.present_frame(Some(&engine)), FrameStatus::Presented);
        assert_eq!(bridge.presenter().inner.size(), Some((2, 1)));
        assert_eq!(bridge.presenter().inner.front(), &[1, 2, 3, 0xFF, 4, 5, 6, 0xFF]);
    }

    #[test]
    fn failed_initial_bind_is_retried_next_frame() {
        let engine = FakeEngine::with_framebuffer(1, 1, &[0xFF_0A_0B_0C]);
        let mut bridge = FramebufferBridge::new(FlakySurface::new(), canvas());
        bridge.presenter_mut().failing_binds = 1;

        assert!(bridge.initialize_surface(1, 1).is_err());

        assert_eq!(bridge.present_frame(Some(&engine)), FrameStatus::Presented);
        assert_eq!(bridge.presenter().inner.front(), &[0x0A, 0x0B, 0x0C, 0xFF]);
    }

    #[test]
    fn present_failure_skips_and_keeps_previous_frame() {
        let mut engine = FakeEngine::with_framebuffer(1, 1, &[0xFF_01_01_01]);
        let mut bridge = FramebufferBridge::new(FlakySurface::new(), canvas());
        bridge.initialize_surface(1, 1).unwrap();
        assert!(bridge.present_frame(Some(&engine)).is_presented());

        engine.paint(&[0xFF_02_02_02]);
        bridge.presenter_mut().failing_presents = 1;

        assert!(matches!(
            bridge.present_frame(Some(&engine)),
            FrameStatus::Skipped(BridgeError::PresentFailed(_))
        ));
        assert_eq!(bridge.presenter().inner.front(), &[1, 1, 1, 0xFF]);

        assert!(bridge.present_frame(Some(&engine)).is_presented());
        assert_eq!(bridge.presenter().inner.front(), &[2, 2, 2, 0xFF]);
    }

    //=====================================================================
    // Teardown Tests
    //=====================================================================

    #[test]
    fn teardown_is_idempotent() {
        let engine = FakeEngine::with_framebuffer(1, 1, &[0]);
        let mut bridge = bound_bridge(1, 1);
        bridge.present_frame(Some(&engine));

        bridge.teardown();
        bridge.teardown();

        assert!(!bridge.is_bound());
        assert!(bridge.cached_view().is_none());
        assert!(bridge.presenter().size().is_none());
    }

    #[test]
    fn frames_after_teardown_skip() {
        let engine = FakeEngine::with_framebuffer(1, 1, &[0]);
        let mut bridge = bound_bridge(1, 1);
        bridge.teardown();

        assert!(!bridge.present_frame(Some(&engine)).is_presented());
    }
}
