use thiserror::Error;

/// Configuration faults in a logical register binding table.
///
/// These describe programmer errors in a layout, never runtime input, and are
/// reported by [`crate::PseudoRegister::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LayoutError {
    /// A slot extends past bit 15.
    #[error("slot at bit {position} with width {length} exceeds 16 bits")]
    SlotOutOfRange {
        /// First bit of the slot.
        position: u8,
        /// Width of the slot in bits.
        length: u8,
    },
    /// Two slots claim the same bit position.
    #[error("slots {first} and {second} overlap")]
    OverlappingSlots {
        /// Index of the earlier slot in the table.
        first: usize,
        /// Index of the later slot in the table.
        second: usize,
    },
    /// Two writable slots in one register write the same physical location.
    #[error("slots {first} and {second} write the same physical location")]
    DuplicateTarget {
        /// Index of the earlier slot in the table.
        first: usize,
        /// Index of the later slot in the table.
        second: usize,
    },
}

/// Faults raised while decoding a raw condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConditionError {
    /// Code lies outside the 4-bit condition encoding space.
    #[error("invalid condition code {0:#04x}")]
    InvalidCode(u8),
}
