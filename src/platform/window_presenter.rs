//=========================================================================
// Window Presenter
//=========================================================================
//
// Presents the bridge's RGBA buffer in a winit window through a
// softbuffer surface.
//
// The window only exists after the event loop resumes, so the presenter
// starts detached and reports the drawing target as missing until
// `attach` is called.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::num::NonZeroU32;
use std::rc::Rc;

use log::{debug, info};
use softbuffer::{Context, Surface};
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::core::pixel::BYTES_PER_PIXEL;
use crate::core::{BridgeError, Presenter, SurfaceId};

//=== Target ==============================================================

/// Live window + softbuffer surface.
///
/// Fields drop in declaration order: the surface goes before the context
/// it was created from, and both before the window.
struct Target {
    surface: Surface<Rc<Window>, Rc<Window>>,
    _context: Context<Rc<Window>>,
    window: Rc<Window>,
}

//=== WindowPresenter =====================================================

pub struct WindowPresenter {
    id: SurfaceId,
    target: Option<Target>,
    size: Option<(u32, u32)>,
    rgba: Vec<u8>,
}

impl WindowPresenter {
    /// A detached presenter answering to `id`.
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            target: None,
            size: None,
            rgba: Vec::new(),
        }
    }

    /// Creates the softbuffer surface for `window`.
    pub fn attach(&mut self, window: Rc<Window>) -> Result<(), BridgeError> {
        let context = Context::new(window.clone()).map_err(present_failed)?;
        let surface = Surface::new(&context, window.clone()).map_err(present_failed)?;

        debug!(target: "platform", "Presenter attached to window {:?}", window.id());
        self.target = Some(Target { surface, _context: context, window });
        Ok(())
    }

    /// Drops the softbuffer surface; the binding goes with it.
    pub fn detach(&mut self) {
        self.release();
        self.target = None;
    }

    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }
}

impl Presenter for WindowPresenter {
    fn bind(&mut self, id: &SurfaceId, width: u32, height: u32) -> Result<(), BridgeError> {
        if *id != self.id {
            return Err(BridgeError::ResourceNotFound(id.clone()));
        }
        let target = self
            .target
            .as_mut()
            .ok_or_else(|| BridgeError::ResourceNotFound(id.clone()))?;

        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Err(BridgeError::PresentFailed(format!(
                "zero-sized surface {}x{}",
                width, height
            )));
        };
        target.surface.resize(w, h).map_err(present_failed)?;

        self.rgba = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
        self.size = Some((width, height));
        info!(target: "platform", "Surface '{}' bound: {}x{}", id, width, height);
        Ok(())
    }

    fn pixels_mut(&mut self) -> Option<&mut [u8]> {
        self.size.map(|_| self.rgba.as_mut_slice())
    }

    fn present(&mut self) -> Result<(), BridgeError> {
        let target = match (self.target.as_mut(), self.size) {
            (Some(target), Some(_)) => target,
            _ => return Err(BridgeError::ResourceNotFound(self.id.clone())),
        };

        let mut buffer = target.surface.buffer_mut().map_err(present_failed)?;

        // softbuffer wants 0x00RRGGBB.
        for (dst, px) in buffer.iter_mut().zip(self.rgba.chunks_exact(BYTES_PER_PIXEL)) {
            *dst = u32::from_be_bytes([0, px[0], px[1], px[2]]);
        }

        target.window.pre_present_notify();
        buffer.present().map_err(present_failed)
    }

    fn release(&mut self) {
        self.size = None;
        self.rgba = Vec::new();
    }
}

fn present_failed(e: softbuffer::SoftBufferError) -> BridgeError {
    BridgeError::PresentFailed(e.to_string())
}

//=========================================================================
// Unit Tests
//=========================================================================
