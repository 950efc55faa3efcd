//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Host-adapter-to-session interface types (events and errors).
//
// Defines the contract between whatever delivers host input (winit,
// a browser shim, a test) and the session that translates it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::HostEvent;

//=== PlatformEvent =======================================================

/// Messages a host adapter sends to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// One raw input event, in host delivery order.
    Input(HostEvent),

    /// The host knows or suspects the engine's memory moved.
    InvalidateFramebuffer,

    /// Window close requested.
    CloseRequested,
}

//=== PlatformError =======================================================

/// Host event loop errors.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_event_is_cloneable() {
        let event = PlatformEvent::Input(HostEvent::ContextMenu);
        assert_eq!(event.clone(), event);
    }

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::EventLoopCreation("no display".into());
        assert_eq!(err.to_string(), "Event loop creation failed: no display");
    }
}
