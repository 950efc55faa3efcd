//=========================================================================
// Engine Key Mapping
//=========================================================================
//
// Maps physical host keys onto the engine's 16-bit keysym space.
//
// Canonical space:
// - Keys with an unshifted ASCII character use that character
//   (letters lowercase, digits, punctuation, space).
// - Control keys use their ASCII control code.
// - Everything else uses the X11 keysym `0xFFxx` page, stored as the bit
//   pattern of an `i16`.
//
// Keys with no entry are not forwarded to the engine.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::KeyCode;

//=== EngineKey ===========================================================

/// Key symbol in the engine's keysym space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineKey(pub i16);

impl EngineKey {
    pub const BACKSPACE: Self = Self(0x08);
    pub const TAB: Self = Self(0x09);
    pub const RETURN: Self = Self(0x0d);
    pub const ESCAPE: Self = Self(0x1b);
    pub const DELETE: Self = Self(0x7f);

    pub const HOME: Self = Self::x11(0xFF50);
    pub const LEFT: Self = Self::x11(0xFF51);
    pub const UP: Self = Self::x11(0xFF52);
    pub const RIGHT: Self = Self::x11(0xFF53);
    pub const DOWN: Self = Self::x11(0xFF54);
    pub const PAGE_UP: Self = Self::x11(0xFF55);
    pub const PAGE_DOWN: Self = Self::x11(0xFF56);
    pub const END: Self = Self::x11(0xFF57);
    pub const INSERT: Self = Self::x11(0xFF63);

    /// F1; F2..F12 follow consecutively.
    pub const F1: Self = Self::x11(0xFFBE);

    pub const SHIFT_L: Self = Self::x11(0xFFE1);
    pub const SHIFT_R: Self = Self::x11(0xFFE2);
    pub const CONTROL_L: Self = Self::x11(0xFFE3);
    pub const CONTROL_R: Self = Self::x11(0xFFE4);
    pub const CAPS_LOCK: Self = Self::x11(0xFFE5);
    pub const ALT_L: Self = Self::x11(0xFFE9);
    pub const ALT_R: Self = Self::x11(0xFFEA);
    pub const SUPER_L: Self = Self::x11(0xFFEB);
    pub const SUPER_R: Self = Self::x11(0xFFEC);

    const fn x11(keysym: u16) -> Self {
        Self(keysym as i16)
    }

    const fn ascii(c: u8) -> Self {
        Self(c as i16)
    }

    /// The keysym as the engine's raw integer code.
    pub fn code(self) -> i32 {
        self.0 as i32
    }
}

//=== Mapping =============================================================

/// Maps a physical key to the engine keysym, if it has one.
pub fn engine_key(code: KeyCode) -> Option<EngineKey> {
    use KeyCode::*;

    let key = match code {
        //--- Digits -------------------------------------------------------
        Digit0 => EngineKey::ascii(b'0'),
        Digit1 => EngineKey::ascii(b'1'),
        Digit2 => EngineKey::ascii(b'2'),
        Digit3 => EngineKey::ascii(b'3'),
        Digit4 => EngineKey::ascii(b'4'),
        Digit5 => EngineKey::ascii(b'5'),
        Digit6 => EngineKey::ascii(b'6'),
        Digit7 => EngineKey::ascii(b'7'),
        Digit8 => EngineKey::ascii(b'8'),
        Digit9 => EngineKey::ascii(b'9'),

        //--- Letters ------------------------------------------------------
        KeyA => EngineKey::ascii(b'a'),
        KeyB => EngineKey::ascii(b'b'),
        KeyC => EngineKey::ascii(b'c'),
        KeyD => EngineKey::ascii(b'd'),
        KeyE => EngineKey::ascii(b'e'),
        KeyF => EngineKey::ascii(b'f'),
        KeyG => EngineKey::ascii(b'g'),
        KeyH => EngineKey::ascii(b'h'),
        KeyI => EngineKey::ascii(b'i'),
        KeyJ => EngineKey::ascii(b'j'),
        KeyK => EngineKey::ascii(b'k'),
        KeyL => EngineKey::ascii(b'l'),
        KeyM => EngineKey::ascii(b'm'),
        KeyN => EngineKey::ascii(b'n'),
        KeyO => EngineKey::ascii(b'o'),
        KeyP => EngineKey::ascii(b'p'),
        KeyQ => EngineKey::ascii(b'q'),
        KeyR => EngineKey::ascii(b'r'),
        KeyS => EngineKey::ascii(b's'),
        KeyT => EngineKey::ascii(b't'),
        KeyU => EngineKey::ascii(b'u'),
        KeyV => EngineKey::ascii(b'v'),
        KeyW => EngineKey::ascii(b'w'),
        KeyX => EngineKey::ascii(b'x'),
        KeyY => EngineKey::ascii(b'y'),
        KeyZ => EngineKey::ascii(b'z'),

        //--- Punctuation --------------------------------------------------
        Minus => EngineKey::ascii(b'-'),
        Equal => EngineKey::ascii(b'='),
        BracketLeft => EngineKey::ascii(b'['),
        BracketRight => EngineKey::ascii(b']'),
        Backslash => EngineKey::ascii(b'\\'),
        Semicolon => EngineKey::ascii(b';'),
        Quote => EngineKey::ascii(b'\''),
        Backquote => EngineKey::ascii(b'`'),
        Comma => EngineKey::ascii(b','),
        Period => EngineKey::ascii(b'.'),
        Slash => EngineKey::ascii(b'/'),
        Space => EngineKey::ascii(b' '),

        //--- Control ------------------------------------------------------
        Enter => EngineKey::RETURN,
        Escape => EngineKey::ESCAPE,
        Tab => EngineKey::TAB,
        Backspace => EngineKey::BACKSPACE,
        Delete => EngineKey::DELETE,

        //--- Navigation ---------------------------------------------------
        ArrowLeft => EngineKey::LEFT,
        ArrowUp => EngineKey::UP,
        ArrowRight => EngineKey::RIGHT,
        ArrowDown => EngineKey::DOWN,
        Home => EngineKey::HOME,
        End => EngineKey::END,
        PageUp => EngineKey::PAGE_UP,
        PageDown => EngineKey::PAGE_DOWN,
        Insert => EngineKey::INSERT,

        //--- Function -----------------------------------------------------
        F1 => function_key(1),
        F2 => function_key(2),
        F3 => function_key(3),
        F4 => function_key(4),
        F5 => function_key(5),
        F6 => function_key(6),
        F7 => function_key(7),
        F8 => function_key(8),
        F9 => function_key(9),
        F10 => function_key(10),
        F11 => function_key(11),
        F12 => function_key(12),

        //--- Modifiers ----------------------------------------------------
        ShiftLeft => EngineKey::SHIFT_L,
        ShiftRight => EngineKey::SHIFT_R,
        ControlLeft => EngineKey::CONTROL_L,
        ControlRight => EngineKey::CONTROL_R,
        AltLeft => EngineKey::ALT_L,
        AltRight => EngineKey::ALT_R,
        MetaLeft => EngineKey::SUPER_L,
        MetaRight => EngineKey::SUPER_R,
        CapsLock => EngineKey::CAPS_LOCK,

        Unidentified => return None,
    };
    Some(key)
}

fn function_key(n: u8) -> EngineKey {
    EngineKey(EngineKey::F1.0 + (n as i16 - 1))
}

//=========================================================================
// Unit Tests
//=========================================================================
