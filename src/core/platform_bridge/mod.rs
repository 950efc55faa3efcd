//=========================================================================
// Platform Bridge
//=========================================================================
//
// Carries host events from an adapter to the session over a channel.
//
// The adapter only needs a `Sender<PlatformEvent>`; the session drains
// the other end between frames. Adapters (winit, browser, tests) can be
// swapped without touching translation code.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Session-side draining in arrival order
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub use interface::{PlatformError, PlatformEvent};
