//! Composition of bit-field views into 16-bit logical registers.

use crate::fault::LayoutError;
use crate::proxy::{AccumulatorSlot, BitView, PhysicalField};
use crate::state::RegisterState;

/// Width of every logical register in bits.
pub const LOGICAL_REGISTER_BITS: u8 = 16;

/// One binding of a view at a bit range inside a logical register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProxySlot {
    /// View that supplies and receives the slot's bits.
    pub view: BitView,
    /// Lowest bit of the slot.
    pub position: u8,
    /// Width of the slot in bits.
    pub length: u8,
}

impl ProxySlot {
    /// Binds a read-write field.
    #[must_use]
    pub const fn plain(field: PhysicalField, position: u8, length: u8) -> Self {
        Self {
            view: BitView::Plain(field),
            position,
            length,
        }
    }

    /// Binds a field whose writes through this slot are discarded.
    #[must_use]
    pub const fn read_only(field: PhysicalField, position: u8, length: u8) -> Self {
        Self {
            view: BitView::ReadOnly(field),
            position,
            length,
        }
    }

    /// Binds two fields that are written together and read as their OR.
    #[must_use]
    pub const fn mirror(
        first: PhysicalField,
        second: PhysicalField,
        position: u8,
        length: u8,
    ) -> Self {
        Self {
            view: BitView::Mirror(first, second),
            position,
            length,
        }
    }

    /// Binds the 4-bit extension nibble of an accumulator.
    #[must_use]
    pub const fn acc_extension(acc: AccumulatorSlot, position: u8) -> Self {
        Self {
            view: BitView::AccExtension(acc),
            position,
            length: 4,
        }
    }

    /// Mask of the slot's bits within the logical register.
    ///
    /// Bits past bit 15 are dropped.
    #[must_use]
    pub fn mask(self) -> u16 {
        let width = 1_u32
            .checked_shl(u32::from(self.length))
            .map_or(u32::MAX, |bit| bit - 1);
        width
            .checked_shl(u32::from(self.position))
            .map_or(0, |mask| (mask & 0xFFFF) as u16)
    }

    fn field_value(self, value: u16) -> u16 {
        let width = 1_u32
            .checked_shl(u32::from(self.length))
            .map_or(u32::MAX, |bit| bit - 1);
        value
            .checked_shr(u32::from(self.position))
            .map_or(0, |shifted| shifted & (width & 0xFFFF) as u16)
    }
}

/// Ordered set of slots forming one 16-bit logical register.
///
/// Positions not covered by any slot are reserved: they read as zero and
/// writes to them are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PseudoRegister {
    slots: &'static [ProxySlot],
}

impl PseudoRegister {
    /// Creates a logical register from its binding table.
    #[must_use]
    pub const fn new(slots: &'static [ProxySlot]) -> Self {
        Self { slots }
    }

    /// Returns the binding table in declaration order.
    #[must_use]
    pub const fn slots(&self) -> &'static [ProxySlot] {
        self.slots
    }

    /// Assembles the register value from its views.
    ///
    /// View values are trusted to fit their slot; no masking is applied.
    #[must_use]
    pub fn get(&self, state: &RegisterState) -> u16 {
        self.slots.iter().fold(0, |word, slot| {
            word | slot
                .view
                .get(state)
                .checked_shl(u32::from(slot.position))
                .unwrap_or(0)
        })
    }

    /// Splits `value` into slot-width pieces and forwards each to its view.
    ///
    /// Every piece depends only on `value`, so the order in which slots are
    /// applied is not observable.
    pub fn set(&self, state: &mut RegisterState, value: u16) {
        for slot in self.slots {
            slot.view.set(state, slot.field_value(value));
        }
    }

    /// Bits covered by any slot.
    #[must_use]
    pub fn bound_mask(&self) -> u16 {
        self.slots.iter().fold(0, |mask, slot| mask | slot.mask())
    }

    /// Bits whose writes reach physical storage.
    #[must_use]
    pub fn writable_mask(&self) -> u16 {
        self.slots
            .iter()
            .filter(|slot| slot.view.is_writable())
            .fold(0, |mask, slot| mask | slot.mask())
    }

    /// Bits bound to read-only views.
    #[must_use]
    pub fn read_only_mask(&self) -> u16 {
        self.bound_mask() & !self.writable_mask()
    }

    /// Checks the binding table for configuration errors.
    ///
    /// # Errors
    ///
    /// Returns the first slot that extends past bit 15 or has zero width,
    /// the first pair of slots with overlapping bits, or the first pair of
    /// writable slots that store into the same physical location.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for slot in self.slots {
            if slot.length == 0
                || u16::from(slot.position) + u16::from(slot.length)
                    > u16::from(LOGICAL_REGISTER_BITS)
            {
                return Err(LayoutError::SlotOutOfRange {
                    position: slot.position,
                    length: slot.length,
                });
            }
        }

        for (first, lhs) in self.slots.iter().enumerate() {
            for (offset, rhs) in self.slots[first + 1..].iter().enumerate() {
                let second = first + 1 + offset;
                if lhs.mask() & rhs.mask() != 0 {
                    return Err(LayoutError::OverlappingSlots { first, second });
                }
                if lhs.view.shares_write_target(rhs.view) {
                    return Err(LayoutError::DuplicateTarget { first, second });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ProxySlot, PseudoRegister};
    use crate::fault::LayoutError;
    use crate::proxy::{AccumulatorSlot, PhysicalField};
    use crate::state::RegisterState;

    const MIXED_SLOTS: &[ProxySlot] = &[
        ProxySlot::plain(PhysicalField::Page, 0, 8),
        ProxySlot::read_only(PhysicalField::Iu0, 8, 1),
        ProxySlot::mirror(PhysicalField::Fl0, PhysicalField::Fl1, 9, 1),
        ProxySlot::plain(PhysicalField::Ps0, 10, 2),
        ProxySlot::acc_extension(AccumulatorSlot::B0, 12),
    ];
    const MIXED: PseudoRegister = PseudoRegister::new(MIXED_SLOTS);

    #[test]
    fn get_composes_each_slot_at_its_position() {
        let mut state = RegisterState::default();
        state.page = 0x5A;
        state.iu[0] = 1;
        state.fl = [0, 1];
        state.ps[0] = 0b10;
        state.b[0].set_extension(0xC);

        assert_eq!(MIXED.get(&state), 0xC000 | 0x0800 | 0x0200 | 0x0100 | 0x005A);
    }

    #[test]
    fn set_masks_each_piece_to_its_slot_width() {
        let mut state = RegisterState::default();
        MIXED.set(&mut state, 0xFFFF);

        assert_eq!(state.page, 0xFF);
        assert_eq!(state.iu[0], 0);
        assert_eq!(state.fl, [1, 1]);
        assert_eq!(state.ps[0], 0b11);
        assert_eq!(state.b[0].extension(), 0xF);
        assert_eq!(state.b[0].value, 0xFFFF_FFFF_0000_0000);
    }

    #[test]
    fn reserved_bits_read_zero_and_discard_writes() {
        const SLOTS: &[ProxySlot] = &[ProxySlot::plain(PhysicalField::S, 7, 1)];
        const SPARSE: PseudoRegister = PseudoRegister::new(SLOTS);
        let mut state = RegisterState::default();

        SPARSE.set(&mut state, 0xFF7F);
        assert_eq!(state.s, 0);
        assert_eq!(SPARSE.get(&state), 0);

        SPARSE.set(&mut state, 0x0080);
        assert_eq!(SPARSE.get(&state), 0x0080);
    }

    #[test]
    fn masks_split_writable_and_read_only_bits() {
        assert_eq!(MIXED.bound_mask(), 0xFFFF);
        assert_eq!(MIXED.read_only_mask(), 0x0100);
        assert_eq!(MIXED.writable_mask(), 0xFEFF);
    }

    #[test]
    fn slot_mask_covers_declared_range() {
        assert_eq!(ProxySlot::plain(PhysicalField::Modi, 7, 9).mask(), 0xFF80);
        assert_eq!(ProxySlot::plain(PhysicalField::Bcn, 12, 3).mask(), 0x7000);
        assert_eq!(ProxySlot::plain(PhysicalField::Page, 12, 8).mask(), 0xF000);
    }

    #[test]
    fn valid_layout_passes_validation() {
        assert_eq!(MIXED.validate(), Ok(()));
    }

    #[test]
    fn slot_past_bit_fifteen_is_rejected() {
        const WIDE_SLOTS: &[ProxySlot] = &[ProxySlot::plain(PhysicalField::Page, 12, 8)];
        const WIDE: PseudoRegister = PseudoRegister::new(WIDE_SLOTS);
        assert_eq!(
            WIDE.validate(),
            Err(LayoutError::SlotOutOfRange {
                position: 12,
                length: 8
            })
        );

        const EMPTY_SLOTS: &[ProxySlot] = &[ProxySlot::plain(PhysicalField::S, 3, 0)];
        const EMPTY: PseudoRegister = PseudoRegister::new(EMPTY_SLOTS);
        assert!(matches!(
            EMPTY.validate(),
            Err(LayoutError::SlotOutOfRange { .. })
        ));
    }

    #[test]
    fn overlapping_slots_are_rejected() {
        const SLOTS: &[ProxySlot] = &[
            ProxySlot::plain(PhysicalField::Page, 0, 8),
            ProxySlot::plain(PhysicalField::S, 3, 1),
            ProxySlot::plain(PhysicalField::Ps0, 7, 2),
        ];
        const OVERLAP: PseudoRegister = PseudoRegister::new(SLOTS);
        assert_eq!(
            OVERLAP.validate(),
            Err(LayoutError::OverlappingSlots {
                first: 0,
                second: 1
            })
        );
    }

    #[test]
    fn duplicate_writable_target_is_rejected() {
        const TWICE_SLOTS: &[ProxySlot] = &[
            ProxySlot::plain(PhysicalField::Ou0, 8, 1),
            ProxySlot::plain(PhysicalField::Ou0, 9, 1),
        ];
        const TWICE: PseudoRegister = PseudoRegister::new(TWICE_SLOTS);
        assert_eq!(
            TWICE.validate(),
            Err(LayoutError::DuplicateTarget {
                first: 0,
                second: 1
            })
        );

        const READ_SLOTS: &[ProxySlot] = &[
            ProxySlot::read_only(PhysicalField::Ip0, 0, 1),
            ProxySlot::read_only(PhysicalField::Ip0, 1, 1),
        ];
        const READ_TWICE: PseudoRegister = PseudoRegister::new(READ_SLOTS);
        assert_eq!(READ_TWICE.validate(), Ok(()));
    }
}
