//=========================================================================
// Input Event Types
//
// Host-side and engine-side representations of pointer and keyboard
// input.
//
// This module abstracts away platform-specific input (e.g. winit, a
// browser canvas) into a host-neutral `HostEvent`, and defines the
// normalized `EngineEvent` that is forwarded to the engine.
//
// Event Flow:
// ```text
// Host Adapter (winit, DOM, tests)
//         ↓
//    HostEvent (screen coordinates, host button numbering)
//         ↓
//    InputTranslator
//         ↓
//    EngineEvent (surface-local integers, engine numbering)
//         ↓
//    EngineBoundary entry points
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::buttons::{EngineButton, EngineButtons, HostButtons};
use crate::core::input::keymap::EngineKey;

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyA` is always the same physical key regardless of keyboard layout
/// (QWERTY vs AZERTY), which is what makes it a stable input to the
/// engine key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Punctuation ------------------------------------------------------

    Minus, Equal, BracketLeft, BracketRight, Backslash,
    Semicolon, Quote, Backquote, Comma, Period, Slash,

    //--- Navigation -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    //--- Modifier Keys ----------------------------------------------------

    ShiftLeft, ShiftRight,
    ControlLeft, ControlRight,
    AltLeft, AltRight,
    MetaLeft, MetaRight,
    CapsLock,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Tab key
    Tab,

    /// Backspace key
    Backspace,

    /// Delete key
    Delete,

    /// Key the host reported but the adapter has no mapping for.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state at the time of a key event.
///
/// `meta` is the Command key on macOS and the Windows/Super key
/// elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false, meta: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ..Self::NONE };

    /// Ctrl only.
    pub const CTRL: Self = Self { ctrl: true, ..Self::NONE };

    /// Alt only.
    pub const ALT: Self = Self { alt: true, ..Self::NONE };

    /// Meta only.
    pub const META: Self = Self { meta: true, ..Self::NONE };

    /// True if any modifier that usually triggers a host shortcut is
    /// held (Shift alone never does).
    pub fn is_shortcut(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

//=== Host Events =========================================================

/// Screen-space position of the drawing target's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceOrigin {
    pub x: f64,
    pub y: f64,
}

impl SurfaceOrigin {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer event as the host delivered it.
///
/// The drawing target's origin is sampled by the host when the event is
/// dispatched, since the target may have moved since the last event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Screen-space position (fractional on hi-dpi hosts).
    pub screen_x: f64,
    pub screen_y: f64,

    /// Where the drawing target currently sits on screen.
    pub origin: SurfaceOrigin,

    /// Host ordinal of the button that changed (down/up only).
    pub button: i32,

    /// Buttons held, in the host's mask convention.
    pub buttons: HostButtons,
}

impl PointerInput {
    /// Pointer at a screen position with nothing pressed and the target
    /// at the screen origin.
    pub fn at(screen_x: f64, screen_y: f64) -> Self {
        Self {
            screen_x,
            screen_y,
            origin: SurfaceOrigin::ZERO,
            button: 0,
            buttons: HostButtons::NONE,
        }
    }

    pub fn with_origin(mut self, origin: SurfaceOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_button(mut self, button: i32) -> Self {
        self.button = button;
        self
    }

    pub fn with_buttons(mut self, buttons: HostButtons) -> Self {
        self.buttons = buttons;
        self
    }
}

/// Keyboard event as the host delivered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

/// Raw input event from a host adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerMove(PointerInput),
    PointerDown(PointerInput),
    PointerUp(PointerInput),

    /// Secondary-click context menu request over the drawing target.
    ContextMenu,

    KeyDown(KeyInput),
    KeyUp(KeyInput),
}

//=== Engine Events =======================================================

/// Normalized event, ready for an engine entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// Pointer moved (surface-local coordinates).
    Motion { x: i32, y: i32, buttons: EngineButtons },

    /// Discrete button transition.
    Button { x: i32, y: i32, button: EngineButton, pressed: bool },

    /// Key transition in the engine's keysym space.
    Key { key: EngineKey, pressed: bool },
}

//=========================================================================
// Unit Tests
//=========================================================================
