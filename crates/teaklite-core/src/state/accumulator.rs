//! Wide accumulator and product containers.

/// Bit width of an architectural accumulator.
pub const ACCUMULATOR_BITS: u32 = 40;
/// Mask selecting the low 40 bits of an accumulator container.
pub const ACCUMULATOR_MASK: u64 = (1 << ACCUMULATOR_BITS) - 1;

/// 40-bit two's-complement accumulator stored sign-extended in 64 bits.
///
/// Bits 40..63 always equal bit 39. Every writer, including arithmetic code
/// outside this crate, must keep that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Accumulator {
    /// Sign-extended container.
    pub value: u64,
}

impl Accumulator {
    /// Builds an accumulator from a raw 40-bit value, sign-extending bit 39.
    #[must_use]
    pub const fn from_raw40(raw: u64) -> Self {
        Self {
            value: sign_extend_u64(raw & ACCUMULATOR_MASK, ACCUMULATOR_BITS),
        }
    }

    /// Returns the low 40 bits of the container.
    #[must_use]
    pub const fn raw40(self) -> u64 {
        self.value & ACCUMULATOR_MASK
    }

    /// Returns the 4-bit extension nibble (bits 32..35).
    #[must_use]
    pub const fn extension(self) -> u16 {
        ((self.value >> 32) & 0xF) as u16
    }

    /// Replaces the high word with a sign-extended copy of a 4-bit nibble.
    ///
    /// Bits 0..31 are left untouched.
    pub const fn set_extension(&mut self, nibble: u16) {
        let extended = sign_extend_u32(nibble as u32 & 0xF, 4);
        self.value &= 0xFFFF_FFFF;
        self.value |= (extended as u64) << 32;
    }

    /// Returns `true` when bits 40..63 replicate bit 39.
    #[must_use]
    pub const fn is_sign_extended(self) -> bool {
        self.value == sign_extend_u64(self.value & ACCUMULATOR_MASK, ACCUMULATOR_BITS)
    }
}

/// 32-bit multiplier product register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Product {
    /// Product bits.
    pub value: u32,
}

/// Sign-extends the low `bits` bits of `value` to the full 32-bit width.
///
/// A zero width yields zero; widths of 32 or more return `value` unchanged.
#[must_use]
pub(crate) const fn sign_extend_u32(value: u32, bits: u32) -> u32 {
    match bits {
        0 => 0,
        1..=31 => {
            let shift = 32 - bits;
            (((value << shift) as i32) >> shift) as u32
        }
        _ => value,
    }
}

const fn sign_extend_u64(value: u64, bits: u32) -> u64 {
    let shift = 64 - bits;
    (((value << shift) as i64) >> shift) as u64
}
