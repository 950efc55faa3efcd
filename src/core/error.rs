//=========================================================================
// Bridge Errors
//=========================================================================
//
// Failure taxonomy shared by the framebuffer bridge and the input path.
//
// Every variant is recoverable by retrying on a later frame or event;
// none of them is fatal. Callers log at the point of detection and turn
// the current operation into a no-op.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::framebuffer::SurfaceId;

//=== BridgeError =========================================================

/// Reasons a frame was skipped or an operation turned into a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The named drawing target does not exist or is not bound.
    ResourceNotFound(SurfaceId),

    /// The engine has not signalled readiness, so its accessors and
    /// event entry points cannot be used yet.
    BindingUnavailable,

    /// The engine reported a null framebuffer handle.
    InvalidHandle,

    /// A typed view over linear memory could not be formed (out of range,
    /// misaligned, zero-sized, or the pixel count overflowed).
    MemoryUnavailable {
        /// Byte offset the engine reported.
        offset: usize,

        /// Pixel count the view would have covered.
        pixels: usize,
    },

    /// The host presenter rejected the filled buffer.
    PresentFailed(String),
}

impl BridgeError {
    /// Short, stable label used to de-duplicate repeated log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ResourceNotFound(_) => "resource-not-found",
            Self::BindingUnavailable => "binding-unavailable",
            Self::InvalidHandle => "invalid-handle",
            Self::MemoryUnavailable { .. } => "memory-unavailable",
            Self::PresentFailed(_) => "present-failed",
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound(id) => write!(f, "Drawing target '{}' not found", id),
            Self::BindingUnavailable => write!(f, "Engine accessors are not available yet"),
            Self::InvalidHandle => write!(f, "Invalid framebuffer pointer"),
            Self::MemoryUnavailable { offset, pixels } => write!(
                f,
                "Linear memory cannot provide {} pixels at offset {:#x}",
                pixels, offset
            ),
            Self::PresentFailed(reason) => write!(f, "Present failed: {}", reason),
        }
    }
}

impl std::error::Error for BridgeError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<BridgeError>();
    }

    #[test]
    fn display_names_the_surface() {
        let err = BridgeError::ResourceNotFound(SurfaceId::new("canvas"));
        assert_eq!(err.to_string(), "Drawing target 'canvas' not found");
    }

    #[test]
    fn display_formats_offset_as_hex() {
        let err = BridgeError::MemoryUnavailable { offset: 0x400, pixels: 4 };
        assert!(err.to_string().contains("0x400"));
    }

    #[test]
    fn kind_is_stable_per_variant() {
        assert_eq!(BridgeError::InvalidHandle.kind(), "invalid-handle");
        assert_eq!(BridgeError::BindingUnavailable.kind(), "binding-unavailable");
        assert_eq!(
            BridgeError::PresentFailed("a".into()).kind(),
            BridgeError::PresentFailed("b".into()).kind()
        );
    }
}
