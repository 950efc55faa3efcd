//=========================================================================
// Core
//
// Host-agnostic half of the bridge: everything here can be driven by
// feeding synthetic frames and events, with no window or browser.
//
// Responsibilities:
// - Convert engine ARGB32 pixels into host RGBA surfaces
// - Track the engine's framebuffer across memory relocations
// - Normalize host pointer/keyboard input into the engine's model
// - Carry host events to the session over a channel
//
//=========================================================================

//=== Module Declarations =================================================

pub mod engine_boundary;
pub mod error;
pub mod framebuffer;
pub mod input;
pub mod memory;
pub mod pixel;
pub(crate) mod platform_bridge;

//=== Public API ==========================================================

pub use engine_boundary::{EngineBoundary, EngineLink, FramebufferHandle};
pub use error::BridgeError;
pub use framebuffer::{FrameStatus, FramebufferBridge, MemorySurface, Presenter, SurfaceId};
pub use memory::{HeapMemory, LinearMemory};
pub use platform_bridge::PlatformEvent;
