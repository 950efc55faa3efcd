//=========================================================================
// Button State Translation
//=========================================================================
//
// Host and engine number the three pointer buttons differently, both as
// ordinals and as held-button bitmasks.
//
// ```text
//              ordinal            bitmask
//   host:      0=L 1=R 2=M        bit0=L bit1=R bit2=M
//   engine:    0=L 1=M 2=R        bit0=L bit1=M bit2=R
// ```
//
// Bits 1 and 2 are swapped between the two masks. Both translations are
// total: unknown ordinals fall back to Left, unknown mask bits are
// dropped.
//
//=========================================================================

//=== EngineButton ========================================================

/// Pointer button in the engine's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EngineButton {
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl EngineButton {
    /// Engine ordinal value.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The single-bit engine mask for this button.
    pub fn mask(self) -> EngineButtons {
        EngineButtons(1 << self.ordinal())
    }
}

//=== Masks ===============================================================

/// Held-button bitmask in the host's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HostButtons(pub u32);

impl HostButtons {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const MIDDLE: Self = Self(1 << 2);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for HostButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Held-button bitmask in the engine's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EngineButtons(pub u32);

impl EngineButtons {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const MIDDLE: Self = Self(1 << 1);
    pub const RIGHT: Self = Self(1 << 2);

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl std::ops::BitOr for EngineButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

//=== Translation =========================================================

/// Host-to-engine bit correspondence.
const MASK_TABLE: [(HostButtons, EngineButtons); 3] = [
    (HostButtons::LEFT, EngineButtons::LEFT),
    (HostButtons::RIGHT, EngineButtons::RIGHT),
    (HostButtons::MIDDLE, EngineButtons::MIDDLE),
];

/// Maps a host button ordinal to the engine's button.
pub fn translate_ordinal(host: i32) -> EngineButton {
    match host {
        0 => EngineButton::Left,
        1 => EngineButton::Right,
        2 => EngineButton::Middle,
        _ => EngineButton::Left,
    }
}

/// Maps a host held-button mask to the engine's mask.
pub fn translate_mask(host: HostButtons) -> EngineButtons {
    MASK_TABLE
        .iter()
        .filter(|(h, _)| host.contains(*h))
        .fold(EngineButtons::NONE, |acc, (_, e)| acc | *e)
}

//=========================================================================
// Unit Tests
//=========================================================================
