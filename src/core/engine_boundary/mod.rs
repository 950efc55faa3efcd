//=========================================================================
// Engine Boundary
//=========================================================================
//
// Contract between this crate and the external rendering engine.
//
// Components:
// - `interface`: Accessors and event entry points (the contract)
// - `link`: NotReady → Ready state machine guarding the contract
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod interface;
pub(crate) mod link;

#[cfg(test)]
pub(crate) mod test_support;

//=== Public API ==========================================================

pub use interface::{EngineBoundary, FramebufferHandle};
pub use link::EngineLink;
