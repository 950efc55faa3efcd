//=========================================================================
// Engine Link
//=========================================================================
//
// Readiness state machine for the engine boundary.
//
// ```text
//   NotReady ──engine_ready(engine)──> Ready(engine)
//       ^                                  │
//       └──────────── detach() ────────────┘
// ```
//
// Availability is negotiated once at the readiness boundary instead of
// being re-checked on every call.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::EngineBoundary;
use crate::core::BridgeError;

//=== EngineLink ==========================================================

/// Connection to the engine, valid only after readiness.
#[derive(Debug)]
pub enum EngineLink<E> {
    NotReady,
    Ready(E),
}

impl<E> Default for EngineLink<E> {
    fn default() -> Self {
        Self::NotReady
    }
}

impl<E: EngineBoundary> EngineLink<E> {
    /// Transitions to `Ready`, replacing any previously attached engine.
    pub fn attach(&mut self, engine: E) {
        if self.is_ready() {
            debug!(target: "bridge::session", "Engine re-signalled readiness, replacing binding");
        }
        info!(
            target: "bridge::session",
            "Engine ready ({}x{})",
            engine.width(),
            engine.height()
        );
        *self = Self::Ready(engine);
    }

    /// Transitions back to `NotReady`, handing the engine back.
    pub fn detach(&mut self) -> Option<E> {
        match std::mem::take(self) {
            Self::Ready(engine) => Some(engine),
            Self::NotReady => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn engine(&self) -> Result<&E, BridgeError> {
        match self {
            Self::Ready(engine) => Ok(engine),
            Self::NotReady => Err(BridgeError::BindingUnavailable),
        }
    }

    pub fn engine_mut(&mut self) -> Result<&mut E, BridgeError> {
        match self {
            Self::Ready(engine) => Ok(engine),
            Self::NotReady => Err(BridgeError::BindingUnavailable),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
