//! Bit-field views over physical register storage.
//!
//! A [`BitView`] is a capability bound to one physical location, a pair of
//! mirrored locations, or an accumulator's extension nibble. Views never own
//! state; they address fields of a [`RegisterState`] by identity, which is what
//! makes aliasing across logical registers observable.

use crate::state::{Accumulator, RegisterState};

/// Identifies a 16-bit physical field that logical registers can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(missing_docs)]
pub enum PhysicalField {
    Stepi,
    Stepj,
    Modi,
    Modj,
    Fz,
    Fm,
    Fn,
    Fv,
    Fc,
    Fe,
    Fl0,
    Fl1,
    Fr,
    Fc1,
    Nimc,
    Ip0,
    Ip1,
    Ip2,
    Vip,
    Im0,
    Im1,
    Im2,
    Vim,
    Ic0,
    Ic1,
    Ic2,
    Vic,
    Ie,
    Movpd,
    Bcn,
    Lp,
    Sar0,
    Sar1,
    Ps0,
    Ps1,
    Psm0,
    Psm1,
    S,
    Ou0,
    Ou1,
    Iu0,
    Iu1,
    Page,
    M0,
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M7,
    Ms0,
    Ms1,
    Ms2,
    Ms3,
    Ms4,
    Ms5,
    Ms6,
    Ms7,
}

impl PhysicalField {
    /// Reads the field from `state`.
    #[must_use]
    pub const fn read(self, state: &RegisterState) -> u16 {
        match self {
            Self::Stepi => state.stepi,
            Self::Stepj => state.stepj,
            Self::Modi => state.modi,
            Self::Modj => state.modj,
            Self::Fz => state.fz,
            Self::Fm => state.fm,
            Self::Fn => state.fn_,
            Self::Fv => state.fv,
            Self::Fc => state.fc,
            Self::Fe => state.fe,
            Self::Fl0 => state.fl[0],
            Self::Fl1 => state.fl[1],
            Self::Fr => state.fr,
            Self::Fc1 => state.fc1,
            Self::Nimc => state.nimc,
            Self::Ip0 => state.ip[0],
            Self::Ip1 => state.ip[1],
            Self::Ip2 => state.ip[2],
            Self::Vip => state.vip,
            Self::Im0 => state.im[0],
            Self::Im1 => state.im[1],
            Self::Im2 => state.im[2],
            Self::Vim => state.vim,
            Self::Ic0 => state.ic[0],
            Self::Ic1 => state.ic[1],
            Self::Ic2 => state.ic[2],
            Self::Vic => state.vic,
            Self::Ie => state.ie,
            Self::Movpd => state.movpd,
            Self::Bcn => state.bcn,
            Self::Lp => state.lp,
            Self::Sar0 => state.sar[0],
            Self::Sar1 => state.sar[1],
            Self::Ps0 => state.ps[0],
            Self::Ps1 => state.ps[1],
            Self::Psm0 => state.psm[0],
            Self::Psm1 => state.psm[1],
            Self::S => state.s,
            Self::Ou0 => state.ou[0],
            Self::Ou1 => state.ou[1],
            Self::Iu0 => state.iu[0],
            Self::Iu1 => state.iu[1],
            Self::Page => state.page,
            Self::M0 => state.m[0],
            Self::M1 => state.m[1],
            Self::M2 => state.m[2],
            Self::M3 => state.m[3],
            Self::M4 => state.m[4],
            Self::M5 => state.m[5],
            Self::M6 => state.m[6],
            Self::M7 => state.m[7],
            Self::Ms0 => state.ms[0],
            Self::Ms1 => state.ms[1],
            Self::Ms2 => state.ms[2],
            Self::Ms3 => state.ms[3],
            Self::Ms4 => state.ms[4],
            Self::Ms5 => state.ms[5],
            Self::Ms6 => state.ms[6],
            Self::Ms7 => state.ms[7],
        }
    }

    /// Returns a mutable reference to the field inside `state`.
    pub const fn slot_mut(self, state: &mut RegisterState) -> &mut u16 {
        match self {
            Self::Stepi => &mut state.stepi,
            Self::Stepj => &mut state.stepj,
            Self::Modi => &mut state.modi,
            Self::Modj => &mut state.modj,
            Self::Fz => &mut state.fz,
            Self::Fm => &mut state.fm,
            Self::Fn => &mut state.fn_,
            Self::Fv => &mut state.fv,
            Self::Fc => &mut state.fc,
            Self::Fe => &mut state.fe,
            Self::Fl0 => &mut state.fl[0],
            Self::Fl1 => &mut state.fl[1],
            Self::Fr => &mut state.fr,
            Self::Fc1 => &mut state.fc1,
            Self::Nimc => &mut state.nimc,
            Self::Ip0 => &mut state.ip[0],
            Self::Ip1 => &mut state.ip[1],
            Self::Ip2 => &mut state.ip[2],
            Self::Vip => &mut state.vip,
            Self::Im0 => &mut state.im[0],
            Self::Im1 => &mut state.im[1],
            Self::Im2 => &mut state.im[2],
            Self::Vim => &mut state.vim,
            Self::Ic0 => &mut state.ic[0],
            Self::Ic1 => &mut state.ic[1],
            Self::Ic2 => &mut state.ic[2],
            Self::Vic => &mut state.vic,
            Self::Ie => &mut state.ie,
            Self::Movpd => &mut state.movpd,
            Self::Bcn => &mut state.bcn,
            Self::Lp => &mut state.lp,
            Self::Sar0 => &mut state.sar[0],
            Self::Sar1 => &mut state.sar[1],
            Self::Ps0 => &mut state.ps[0],
            Self::Ps1 => &mut state.ps[1],
            Self::Psm0 => &mut state.psm[0],
            Self::Psm1 => &mut state.psm[1],
            Self::S => &mut state.s,
            Self::Ou0 => &mut state.ou[0],
            Self::Ou1 => &mut state.ou[1],
            Self::Iu0 => &mut state.iu[0],
            Self::Iu1 => &mut state.iu[1],
            Self::Page => &mut state.page,
            Self::M0 => &mut state.m[0],
            Self::M1 => &mut state.m[1],
            Self::M2 => &mut state.m[2],
            Self::M3 => &mut state.m[3],
            Self::M4 => &mut state.m[4],
            Self::M5 => &mut state.m[5],
            Self::M6 => &mut state.m[6],
            Self::M7 => &mut state.m[7],
            Self::Ms0 => &mut state.ms[0],
            Self::Ms1 => &mut state.ms[1],
            Self::Ms2 => &mut state.ms[2],
            Self::Ms3 => &mut state.ms[3],
            Self::Ms4 => &mut state.ms[4],
            Self::Ms5 => &mut state.ms[5],
            Self::Ms6 => &mut state.ms[6],
            Self::Ms7 => &mut state.ms[7],
        }
    }

    /// Writes the field inside `state`.
    pub const fn write(self, state: &mut RegisterState, value: u16) {
        *self.slot_mut(state) = value;
    }
}

/// Identifies one of the four accumulator containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(missing_docs)]
pub enum AccumulatorSlot {
    A0,
    A1,
    B0,
    B1,
}

impl AccumulatorSlot {
    /// Borrows the accumulator container inside `state`.
    #[must_use]
    pub const fn get(self, state: &RegisterState) -> &Accumulator {
        match self {
            Self::A0 => &state.a[0],
            Self::A1 => &state.a[1],
            Self::B0 => &state.b[0],
            Self::B1 => &state.b[1],
        }
    }

    /// Mutably borrows the accumulator container inside `state`.
    pub const fn get_mut(self, state: &mut RegisterState) -> &mut Accumulator {
        match self {
            Self::A0 => &mut state.a[0],
            Self::A1 => &mut state.a[1],
            Self::B0 => &mut state.b[0],
            Self::B1 => &mut state.b[1],
        }
    }
}

/// Closed set of view behaviors a logical register slot can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitView {
    /// Read-write passthrough to one field.
    Plain(PhysicalField),
    /// Reads pass through; writes are discarded.
    ReadOnly(PhysicalField),
    /// Reads return the OR of both fields; writes store the value in both.
    Mirror(PhysicalField, PhysicalField),
    /// The 4-bit extension nibble (bits 32..35) of an accumulator.
    AccExtension(AccumulatorSlot),
}

impl BitView {
    /// Reads the bound quantity. The result is not masked to any slot width.
    #[must_use]
    pub const fn get(self, state: &RegisterState) -> u16 {
        match self {
            Self::Plain(field) | Self::ReadOnly(field) => field.read(state),
            Self::Mirror(first, second) => first.read(state) | second.read(state),
            Self::AccExtension(acc) => acc.get(state).extension(),
        }
    }

    /// Writes the bound quantity.
    pub const fn set(self, state: &mut RegisterState, value: u16) {
        match self {
            Self::Plain(field) => field.write(state, value),
            Self::ReadOnly(_) => {}
            Self::Mirror(first, second) => {
                first.write(state, value);
                second.write(state, value);
            }
            Self::AccExtension(acc) => acc.get_mut(state).set_extension(value),
        }
    }

    /// Returns `true` when [`BitView::set`] can change state.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::ReadOnly(_))
    }

    /// Returns `true` when both views write at least one common location.
    #[must_use]
    pub fn shares_write_target(self, other: Self) -> bool {
        match (self, other) {
            (Self::ReadOnly(_), _) | (_, Self::ReadOnly(_)) => false,
            (Self::AccExtension(lhs), Self::AccExtension(rhs)) => lhs == rhs,
            (Self::AccExtension(_), _) | (_, Self::AccExtension(_)) => false,
            (lhs, rhs) => lhs
                .written_fields()
                .iter()
                .flatten()
                .any(|field| rhs.written_fields().contains(&Some(*field))),
        }
    }

    const fn written_fields(self) -> [Option<PhysicalField>; 2] {
        match self {
            Self::Plain(field) => [Some(field), None],
            Self::Mirror(first, second) => [Some(first), Some(second)],
            Self::ReadOnly(_) | Self::AccExtension(_) => [None, None],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AccumulatorSlot, BitView, PhysicalField};
    use crate::state::RegisterState;

    #[test]
    fn plain_view_passes_reads_and_writes_through() {
        let mut state = RegisterState::default();
        let view = BitView::Plain(PhysicalField::Page);

        view.set(&mut state, 0x00A5);
        assert_eq!(state.page, 0x00A5);
        assert_eq!(view.get(&state), 0x00A5);
    }

    #[test]
    fn read_only_view_ignores_every_write() {
        let mut state = RegisterState::default();
        state.iu[1] = 1;
        let view = BitView::ReadOnly(PhysicalField::Iu1);

        for value in [0, 1, 0xFFFF] {
            view.set(&mut state, value);
            assert_eq!(state.iu[1], 1);
        }
        assert_eq!(view.get(&state), 1);
    }

    #[test]
    fn mirror_view_writes_both_fields_and_reads_their_or() {
        let mut state = RegisterState::default();
        let view = BitView::Mirror(PhysicalField::Fl0, PhysicalField::Fl1);

        view.set(&mut state, 1);
        assert_eq!(state.fl, [1, 1]);
        assert_eq!(view.get(&state), 1);

        state.fl[0] = 0;
        assert_eq!(view.get(&state), 1);

        state.fl[1] = 0;
        assert_eq!(view.get(&state), 0);
    }

    #[test]
    fn mirror_view_get_is_or_after_partial_corruption() {
        let mut state = RegisterState::default();
        let view = BitView::Mirror(PhysicalField::Fl0, PhysicalField::Fl1);

        view.set(&mut state, 0b01);
        state.fl[1] = 0b10;
        assert_eq!(view.get(&state), 0b11);
    }

    #[test]
    fn acc_extension_view_sign_extends_written_nibble() {
        let mut state = RegisterState::default();
        state.a[1].value = 0x0000_0000_1234_5678;
        let view = BitView::AccExtension(AccumulatorSlot::A1);

        view.set(&mut state, 0b1000);
        assert_eq!(view.get(&state), 0b1000);
        assert_eq!(state.a[1].value >> 32, 0xFFFF_FFF8);
        assert_eq!(state.a[1].value >> 36, 0x0FFF_FFFF);
        assert_eq!(state.a[1].value & 0xFFFF_FFFF, 0x1234_5678);
        assert!(state.a[1].is_sign_extended());
        assert_eq!(state.a[0].value, 0);
    }

    #[test]
    fn accumulator_slots_address_distinct_containers() {
        let mut state = RegisterState::default();
        for (nibble, slot) in (1_u16..).zip([
            AccumulatorSlot::A0,
            AccumulatorSlot::A1,
            AccumulatorSlot::B0,
            AccumulatorSlot::B1,
        ]) {
            BitView::AccExtension(slot).set(&mut state, nibble);
        }

        assert_eq!(state.a[0].extension(), 1);
        assert_eq!(state.a[1].extension(), 2);
        assert_eq!(state.b[0].extension(), 3);
        assert_eq!(state.b[1].extension(), 4);
    }

    #[test]
    fn write_target_sharing_ignores_read_only_views() {
        let plain = BitView::Plain(PhysicalField::Fl0);
        let mirror = BitView::Mirror(PhysicalField::Fl0, PhysicalField::Fl1);
        let read_only = BitView::ReadOnly(PhysicalField::Fl0);

        assert!(plain.shares_write_target(mirror));
        assert!(mirror.shares_write_target(BitView::Plain(PhysicalField::Fl1)));
        assert!(!plain.shares_write_target(read_only));
        assert!(!plain.shares_write_target(BitView::Plain(PhysicalField::Fe)));
        assert!(BitView::AccExtension(AccumulatorSlot::A0)
            .shares_write_target(BitView::AccExtension(AccumulatorSlot::A0)));
        assert!(!BitView::AccExtension(AccumulatorSlot::A0)
            .shares_write_target(BitView::AccExtension(AccumulatorSlot::A1)));
    }
}
