//=========================================================================
// Presentation Layer
//=========================================================================
//
// Host-side drawing target the bridge fills every frame.
//
// The presenter owns the RGBA pixel buffer. The bridge binds it by
// dimensions, writes into it in place, and asks for it to be shown.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::pixel::BYTES_PER_PIXEL;
use crate::core::BridgeError;

//=== SurfaceId ===========================================================

/// Fixed logical id of a drawing target (an element id on the web, a
/// window role elsewhere).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//=== Presenter ===========================================================

/// A host-presentable RGBA drawing target.
pub trait Presenter {
    /// Binds the target named `id` at `width`x`height`, re-binding if it
    /// was already bound at another size.
    ///
    /// # Errors
    ///
    /// [`BridgeError::ResourceNotFound`] if no target with that id can be
    /// obtained right now.
    fn bind(&mut self, id: &SurfaceId, width: u32, height: u32) -> Result<(), BridgeError>;

    /// The bound RGBA buffer, `width * height * 4` bytes, or `None` while
    /// unbound.
    fn pixels_mut(&mut self) -> Option<&mut [u8]>;

    /// Shows the current buffer contents.
    fn present(&mut self) -> Result<(), BridgeError>;

    /// Drops the binding. Safe to call while unbound.
    fn release(&mut self);
}

//=== MemorySurface =======================================================

/// Presenter backed by plain memory.
///
/// Keeps a back buffer the bridge writes into and a front buffer that only
/// changes on `present`, so a skipped frame leaves the last good frame
/// visible. Used by headless hosts and tests.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    id: SurfaceId,
    size: Option<(u32, u32)>,
    back: Vec<u8>,
    front: Vec<u8>,
    frames: u64,
}

impl MemorySurface {
    /// A target that answers to `id` only.
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            size: None,
            back: Vec::new(),
            front: Vec::new(),
            frames: 0,
        }
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Contents of the most recently presented frame.
    pub fn front(&self) -> &[u8] {
        &self.front
    }

    /// Number of frames presented since creation.
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Presenter for MemorySurface {
    fn bind(&mut self, id: &SurfaceId, width: u32, height: u32) -> Result<(), BridgeError> {
        if *id != self.id {
            return Err(BridgeError::ResourceNotFound(id.clone()));
        }

        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        self.back = vec![0; len];
        self.front = vec![0; len];
        self.size = Some((width, height));
        info!(target: "bridge::framebuffer", "Surface '{}' bound: {}x{}", id, width, height);
        Ok(())
    }

    fn pixels_mut(&mut self) -> Option<&mut [u8]> {
        self.size.map(|_| self.back.as_mut_slice())
    }

    fn present(&mut self) -> Result<(), BridgeError> {
        if self.size.is_none() {
            return Err(BridgeError::ResourceNotFound(self.id.clone()));
        }
        self.front.copy_from_slice(&self.back);
        self.frames += 1;
        Ok(())
    }

    fn release(&mut self) {
        self.size = None;
        self.back = Vec::new();
        self.front = Vec::new();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> SurfaceId {
        SurfaceId::new("canvas")
    }

    #[test]
    fn bind_unknown_id_is_resource_not_found() {
        let mut surface = MemorySurface::new(canvas());
        let other = SurfaceId::new("missing");

        assert_eq!(surface.bind(&other, 2, 2), Err(BridgeError::ResourceNotFound(other)));
        assert!(surface.pixels_mut().is_none());
    }

    #[test]
    fn bind_allocates_rgba_buffer() {
        let mut surface = MemorySurface::new(canvas());
        surface.bind(&canvas(), 3, 2).unwrap();

        assert_eq!(surface.pixels_mut().map(|p| p.len()), Some(24));
        assert_eq!(surface.size(), Some((3, 2)));
    }

    #[test]
    fn rebind_resizes() {
        let mut surface = MemorySurface::new(canvas());
        surface.bind(&canvas(), 1, 1).unwrap();
        surface.bind(&canvas(), 4, 4).unwrap();

        assert_eq!(surface.pixels_mut().map(|p| p.len()), Some(64));
    }

    #[test]
    fn front_only_changes_on_present() {
        let mut surface = MemorySurface::new(canvas());
        surface.bind(&canvas(), 1, 1).unwrap();
        surface.pixels_mut().unwrap().copy_from_slice(&[1, 2, 3, 4]);

        assert_eq!(surface.front(), &[0, 0, 0, 0]);
        surface.present().unwrap();
        assert_eq!(surface.front(), &[1, 2, 3, 4]);
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test]
    fn release_is_idempotent() {
        let mut surface = MemorySurface::new(canvas());
        surface.bind(&canvas(), 1, 1).unwrap();

        surface.release();
        surface.release();

        assert!(surface.size().is_none());
        assert!(surface.present().is_err());
    }
}
