//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use canvas_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Session
pub use crate::{PlatformError, Session, SessionBuilder};

// Engine boundary
pub use crate::core::{EngineBoundary, FramebufferHandle, HeapMemory, LinearMemory};

// Framebuffer
pub use crate::core::{BridgeError, FrameStatus, MemorySurface, Presenter, SurfaceId};

// Input
pub use crate::core::input::{
    Disposition, EngineButton, EngineButtons, EngineKey, HostButtons, HostEvent, KeyCode,
    Modifiers, PointerInput,
};
pub use crate::core::PlatformEvent;
