//=========================================================================
// Framebuffer Bridging
//=========================================================================
//
// Engine framebuffer → host surface, once per frame.
//
// Components:
// - `view`: Cached typed view over engine memory, with staleness check
// - `presenter`: Host drawing target contract + in-memory target
// - `bridge`: Per-frame acquire → convert → present
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bridge;
pub mod presenter;
pub mod view;

//=== Public API ==========================================================

pub use bridge::{FrameStatus, FramebufferBridge};
pub use presenter::{MemorySurface, Presenter, SurfaceId};
pub use view::FramebufferView;
