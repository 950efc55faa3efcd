//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit events into host-neutral `HostEvent`s.
//
// Architecture:
//   Winit Events → InputProcessor → HostEvent → channel → Session
//
// winit reports modifiers, held buttons and the cursor position on
// separate events, so this adapter caches them and stamps them onto
// each event the way a browser would. Buttons other than
// left/right/middle and unmapped keys are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{
    HostButtons, HostEvent, KeyCode, KeyInput, Modifiers, PointerInput, SurfaceOrigin,
};

//=== InputProcessor ======================================================

/// Converts winit events to host events with cached pointer/modifier
/// state.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
    held: HostButtons,
    cursor: (f64, f64),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
            held: HostButtons::NONE,
            cursor: (0.0, 0.0),
        }
    }

    //--- State Management -------------------------------------------------

    /// Updates cached modifier state (applied to subsequent key events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    //--- Event Processing -------------------------------------------------

    /// Cursor moved to window-relative physical `(x, y)`.
    pub(crate) fn process_cursor_moved(&mut self, x: f64, y: f64) -> HostEvent {
        self.cursor = (x, y);
        HostEvent::PointerMove(self.pointer().with_buttons(self.held))
    }

    /// Converts a winit button transition (filters extra buttons).
    pub(crate) fn process_mouse_button(
        &mut self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<HostEvent> {
        let (ordinal, bit) = host_button(button)?;

        match state {
            ElementState::Pressed => self.held.insert(bit),
            ElementState::Released => self.held.remove(bit),
        }

        let pointer = self.pointer().with_button(ordinal).with_buttons(self.held);
        Some(match state {
            ElementState::Pressed => HostEvent::PointerDown(pointer),
            ElementState::Released => HostEvent::PointerUp(pointer),
        })
    }

    /// Converts a winit key event (filters unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<HostEvent> {
        self.process_key(key_event.physical_key, key_event.state)
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_key(&self, physical_key: PhysicalKey, state: ElementState) -> Option<HostEvent> {
        let code = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(code, KeyCode::Unidentified) {
            return None;
        }

        let key = KeyInput { code, modifiers: self.current_modifiers };
        Some(match state {
            ElementState::Pressed => HostEvent::KeyDown(key),
            ElementState::Released => HostEvent::KeyUp(key),
        })
    }

    /// The surface fills the window, so its origin is the window origin.
    fn pointer(&self) -> PointerInput {
        PointerInput::at(self.cursor.0, self.cursor.1).with_origin(SurfaceOrigin::ZERO)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    #[cfg(test)]
    pub(crate) fn held_buttons(&self) -> HostButtons {
        self.held
    }
}

/// Host ordinal and mask bit for a winit button.
fn host_button(button: WinitMouseButton) -> Option<(i32, HostButtons)> {
    match button {
        WinitMouseButton::Left => Some((0, HostButtons::LEFT)),
        WinitMouseButton::Right => Some((1, HostButtons::RIGHT)),
        WinitMouseButton::Middle => Some((2, HostButtons::MIDDLE)),
        _ => None,
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts winit ModifiersState to host Modifiers.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        }
    }
}

/// Converts winit physical key codes to layout-independent key codes.
///
/// Unmapped keys (F13-F24, numpad, media keys) return
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Punctuation --------------------------------------------------
            Minus => KeyCode::Minus, Equal => KeyCode::Equal,
            BracketLeft => KeyCode::BracketLeft, BracketRight => KeyCode::BracketRight,
            Backslash => KeyCode::Backslash, Semicolon => KeyCode::Semicolon,
            Quote => KeyCode::Quote, Backquote => KeyCode::Backquote,
            Comma => KeyCode::Comma, Period => KeyCode::Period, Slash => KeyCode::Slash,

            //--- Navigation ---------------------------------------------------
            ArrowUp => KeyCode::ArrowUp, ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft, ArrowRight => KeyCode::ArrowRight,
            Home => KeyCode::Home, End => KeyCode::End,
            PageUp => KeyCode::PageUp, PageDown => KeyCode::PageDown,
            Insert => KeyCode::Insert,

            //--- Function -----------------------------------------------------
            F1 => KeyCode::F1, F2 => KeyCode::F2, F3 => KeyCode::F3, F4 => KeyCode::F4,
            F5 => KeyCode::F5, F6 => KeyCode::F6, F7 => KeyCode::F7, F8 => KeyCode::F8,
            F9 => KeyCode::F9, F10 => KeyCode::F10, F11 => KeyCode::F11, F12 => KeyCode::F12,

            //--- Modifiers ----------------------------------------------------
            ShiftLeft => KeyCode::ShiftLeft, ShiftRight => KeyCode::ShiftRight,
            ControlLeft => KeyCode::ControlLeft, ControlRight => KeyCode::ControlRight,
            AltLeft => KeyCode::AltLeft, AltRight => KeyCode::AltRight,
            SuperLeft => KeyCode::MetaLeft, SuperRight => KeyCode::MetaRight,
            CapsLock => KeyCode::CapsLock,

            //--- Special ------------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            //--- Unmapped (return Unidentified) -------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
