//=========================================================================
// Input Normalization
//=========================================================================
//
// Maps host pointer and keyboard events onto the engine's coordinate,
// button and key model.
//
// Components:
// - `event`: Host-side and engine-side event types
// - `buttons`: Ordinal and bitmask translation between conventions
// - `keymap`: Physical keys → engine keysyms
// - `translator`: Single `handle(event)` entry point
//
//=========================================================================

//=== Module Declarations =================================================

pub mod buttons;
pub mod event;
pub mod keymap;
pub mod translator;

//=== Public API ==========================================================

pub use buttons::{translate_mask, translate_ordinal, EngineButton, EngineButtons, HostButtons};
pub use event::{
    EngineEvent, HostEvent, KeyCode, KeyInput, Modifiers, PointerInput, SurfaceOrigin,
};
pub use keymap::{engine_key, EngineKey};
pub use translator::{Disposition, InputTranslator};
