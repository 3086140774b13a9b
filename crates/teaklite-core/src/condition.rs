//! Condition-code evaluation over the flag state.

use crate::fault::ConditionError;
use crate::state::RegisterState;

/// Condition codes in their 4-bit instruction encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum Condition {
    /// Always passes.
    True = 0x0,
    /// Zero set.
    Eq = 0x1,
    /// Zero clear.
    Neq = 0x2,
    /// Zero and minus clear.
    Gt = 0x3,
    /// Minus clear.
    Ge = 0x4,
    /// Minus set.
    Lt = 0x5,
    /// Minus or zero set.
    Le = 0x6,
    /// Normalized clear.
    Nn = 0x7,
    /// Carry set.
    C = 0x8,
    /// Overflow set.
    V = 0x9,
    /// Extension set.
    E = 0xA,
    /// Either limit flag set.
    L = 0xB,
    /// Rounding clear.
    Nr = 0xC,
    /// Input unit 0 clear.
    Niu0 = 0xD,
    /// Input unit 0 set.
    Iu0 = 0xE,
    /// Input unit 1 set.
    Iu1 = 0xF,
}

impl Condition {
    /// Every condition in encoding order.
    pub const ALL: [Self; 16] = [
        Self::True,
        Self::Eq,
        Self::Neq,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
        Self::Nn,
        Self::C,
        Self::V,
        Self::E,
        Self::L,
        Self::Nr,
        Self::Niu0,
        Self::Iu0,
        Self::Iu1,
    ];

    /// Returns the 4-bit encoding of this condition.
    #[must_use]
    pub const fn as_u4(self) -> u8 {
        self as u8
    }

    /// Decodes a 4-bit condition field.
    #[must_use]
    pub const fn from_u4(code: u8) -> Option<Self> {
        match code {
            0x0 => Some(Self::True),
            0x1 => Some(Self::Eq),
            0x2 => Some(Self::Neq),
            0x3 => Some(Self::Gt),
            0x4 => Some(Self::Ge),
            0x5 => Some(Self::Lt),
            0x6 => Some(Self::Le),
            0x7 => Some(Self::Nn),
            0x8 => Some(Self::C),
            0x9 => Some(Self::V),
            0xA => Some(Self::E),
            0xB => Some(Self::L),
            0xC => Some(Self::Nr),
            0xD => Some(Self::Niu0),
            0xE => Some(Self::Iu0),
            0xF => Some(Self::Iu1),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Condition {
    type Error = ConditionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_u4(code).ok_or(ConditionError::InvalidCode(code))
    }
}

const fn is_set(flag: u16) -> bool {
    flag != 0
}

impl RegisterState {
    /// Evaluates `cond` against the current flags.
    #[must_use]
    pub const fn condition_pass(&self, cond: Condition) -> bool {
        let z = is_set(self.fz);
        let m = is_set(self.fm);
        match cond {
            Condition::True => true,
            Condition::Eq => z,
            Condition::Neq => !z,
            Condition::Gt => !z && !m,
            Condition::Ge => !m,
            Condition::Lt => m,
            Condition::Le => m || z,
            Condition::Nn => !is_set(self.fn_),
            Condition::C => is_set(self.fc),
            Condition::V => is_set(self.fv),
            Condition::E => is_set(self.fe),
            Condition::L => is_set(self.fl[0]) || is_set(self.fl[1]),
            Condition::Nr => !is_set(self.fr),
            Condition::Niu0 => !is_set(self.iu[0]),
            Condition::Iu0 => is_set(self.iu[0]),
            Condition::Iu1 => is_set(self.iu[1]),
        }
    }

    /// Evaluates a raw 4-bit condition field.
    ///
    /// # Panics
    ///
    /// Panics when `code` is outside `0..=15`. Condition fields come from a
    /// fixed encoding space, so an unknown code means the decoder and this
    /// catalog disagree.
    #[must_use]
    pub fn condition_pass_encoded(&self, code: u8) -> bool {
        match Condition::try_from(code) {
            Ok(cond) => self.condition_pass(cond),
            Err(err) => panic!("{err}: decoder and condition table are out of sync"),
        }
    }
}
