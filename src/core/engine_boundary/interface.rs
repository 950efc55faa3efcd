//=========================================================================
// Engine Boundary Interface
//=========================================================================
//
// The accessor and event-injection contract the external engine exposes.
//
// The engine owns the framebuffer and interprets input; this crate only
// reads the framebuffer and calls the entry points. Calls are
// synchronous and never re-entered from this side.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{EngineButton, EngineButtons, EngineKey};
use crate::core::memory::LinearMemory;

//=== FramebufferHandle ===================================================

/// Byte offset of the framebuffer inside the engine's linear memory.
///
/// Zero is the null handle: the engine has no framebuffer yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FramebufferHandle(usize);

impl FramebufferHandle {
    pub const NULL: Self = Self(0);

    pub fn new(byte_offset: usize) -> Self {
        Self(byte_offset)
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    pub fn byte_offset(self) -> usize {
        self.0
    }
}

//=== EngineBoundary ======================================================

/// Accessors and entry points of the rendering engine.
///
/// Only valid once the engine has signalled readiness; see
/// [`EngineLink`](super::EngineLink).
pub trait EngineBoundary {
    /// Current framebuffer location ([`FramebufferHandle::NULL`] if none).
    fn framebuffer(&self) -> FramebufferHandle;

    /// Framebuffer width in pixels.
    fn width(&self) -> u32;

    /// Framebuffer height in pixels.
    fn height(&self) -> u32;

    /// The linear memory the framebuffer handle points into.
    fn memory(&self) -> &dyn LinearMemory;

    /// Pointer moved to surface-local `(x, y)` with `buttons` held.
    fn mouse_motion(&mut self, x: i32, y: i32, buttons: EngineButtons);

    /// `button` went down or up at surface-local `(x, y)`.
    fn mouse_button(&mut self, x: i32, y: i32, button: EngineButton, pressed: bool);

    /// Key transition.
    fn key(&mut self, key: EngineKey, pressed: bool);

    /// Runs one pass of the engine's own work (timeouts, queued redraws)
    /// ahead of the frame being drawn.
    ///
    /// Returns `false` once the engine has stopped running.
    fn step(&mut self) -> bool {
        true
    }

    /// Asks the engine to stop; later `step` calls report `false`.
    fn shutdown(&mut self) {}
}
