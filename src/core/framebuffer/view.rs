//=========================================================================
// Framebuffer View
//=========================================================================
//
// Cached, typed view over the engine's framebuffer memory.
//
// A view is a handle + dimensions + the memory generation it was formed
// under. It holds no borrow, so it survives between frames; each frame
// it is resolved back into a pixel slice only if the generation still
// matches.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::engine_boundary::{EngineBoundary, FramebufferHandle};
use crate::core::memory::LinearMemory;
use crate::core::pixel::Argb32;
use crate::core::BridgeError;

//=== FramebufferView =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramebufferView {
    handle: FramebufferHandle,
    width: u32,
    height: u32,
    generation: u64,
}

impl FramebufferView {
    /// Reads handle and dimensions from the engine and checks that the
    /// whole framebuffer lies inside its linear memory.
    pub fn acquire<E>(engine: &E) -> Result<Self, BridgeError>
    where
        E: EngineBoundary + ?Sized,
    {
        let handle = engine.framebuffer();
        if handle.is_null() {
            return Err(BridgeError::InvalidHandle);
        }

        let width = engine.width();
        let height = engine.height();
        let memory = engine.memory();

        let pixels = (width as usize).checked_mul(height as usize).ok_or(
            BridgeError::MemoryUnavailable {
                offset: handle.byte_offset(),
                pixels: usize::MAX,
            },
        )?;
        let unavailable = BridgeError::MemoryUnavailable { offset: handle.byte_offset(), pixels };

        if pixels == 0 || memory.words(handle.byte_offset(), pixels).is_none() {
            return Err(unavailable);
        }

        Ok(Self {
            handle,
            width,
            height,
            generation: memory.generation(),
        })
    }

    pub fn handle(&self) -> FramebufferHandle {
        self.handle
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`; cannot overflow once acquired.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// False once `memory` has been relocated since acquisition.
    pub fn is_current(&self, memory: &dyn LinearMemory) -> bool {
        memory.generation() == self.generation
    }

    /// Resolves the view into the framebuffer's pixels.
    pub fn pixels<'m>(&self, memory: &'m dyn LinearMemory) -> Result<&'m [Argb32], BridgeError> {
        let unavailable = BridgeError::MemoryUnavailable {
            offset: self.handle.byte_offset(),
            pixels: self.pixel_count(),
        };
        if !self.is_current(memory) {
            return Err(unavailable);
        }
        memory
            .words(self.handle.byte_offset(), self.pixel_count())
            .ok_or(unavailable)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
