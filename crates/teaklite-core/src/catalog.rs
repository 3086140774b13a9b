//! Fixed catalog of logical control, status and mode registers.
//!
//! Each table below is the single source of truth for one logical register:
//! the ordered `(view, position, width)` bindings over [`RegisterState`].
//! Bits absent from a table are reserved.

use std::fmt;

use crate::fault::LayoutError;
use crate::proxy::{AccumulatorSlot, PhysicalField as F};
use crate::pseudo::{ProxySlot, PseudoRegister};
use crate::state::RegisterState;

const fn p(field: F, position: u8, length: u8) -> ProxySlot {
    ProxySlot::plain(field, position, length)
}

const fn ro(field: F, position: u8, length: u8) -> ProxySlot {
    ProxySlot::read_only(field, position, length)
}

/// Address generator I: step in bits 0..6, modulo in bits 7..15.
pub const CFGI_SLOTS: &[ProxySlot] = &[p(F::Stepi, 0, 7), p(F::Modi, 7, 9)];

/// Address generator J: step in bits 0..6, modulo in bits 7..15.
pub const CFGJ_SLOTS: &[ProxySlot] = &[p(F::Stepj, 0, 7), p(F::Modj, 7, 9)];

/// Status word 0 (flags).
pub const STT0_SLOTS: &[ProxySlot] = &[
    p(F::Fl0, 0, 1),
    p(F::Fl1, 1, 1),
    p(F::Fe, 2, 1),
    p(F::Fc, 3, 1),
    p(F::Fv, 4, 1),
    p(F::Fn, 5, 1),
    p(F::Fm, 6, 1),
    p(F::Fz, 7, 1),
    p(F::Fc1, 11, 1),
];

/// Status word 1 (rounding, product shift mode).
pub const STT1_SLOTS: &[ProxySlot] = &[p(F::Fr, 4, 1), p(F::Psm0, 14, 1), p(F::Psm1, 15, 1)];

/// Status word 2 (interrupt pending, block repeat, loop).
pub const STT2_SLOTS: &[ProxySlot] = &[
    ro(F::Ip0, 0, 1),
    ro(F::Ip1, 1, 1),
    ro(F::Ip2, 2, 1),
    ro(F::Vip, 3, 1),
    p(F::Movpd, 6, 2),
    ro(F::Bcn, 12, 3),
    ro(F::Lp, 15, 1),
];

/// Mode word 0 (saturation, output units, product shift).
pub const MOD0_SLOTS: &[ProxySlot] = &[
    p(F::Sar0, 0, 1),
    p(F::Sar1, 1, 1),
    p(F::S, 7, 1),
    p(F::Ou0, 8, 1),
    // ou1, not a second ou0 binding; see "mod0 bit 9" in DESIGN.md.
    p(F::Ou1, 9, 1),
    p(F::Ps0, 10, 2),
    p(F::Ps1, 13, 2),
];

/// Mode word 1 (page).
pub const MOD1_SLOTS: &[ProxySlot] = &[p(F::Page, 0, 8)];

/// Mode word 2 (per-unit modulo and alternate step enables).
pub const MOD2_SLOTS: &[ProxySlot] = &[
    p(F::M0, 0, 1),
    p(F::M1, 1, 1),
    p(F::M2, 2, 1),
    p(F::M3, 3, 1),
    p(F::M4, 4, 1),
    p(F::M5, 5, 1),
    p(F::M6, 6, 1),
    p(F::M7, 7, 1),
    p(F::Ms0, 8, 1),
    p(F::Ms1, 9, 1),
    p(F::Ms2, 10, 1),
    p(F::Ms3, 11, 1),
    p(F::Ms4, 12, 1),
    p(F::Ms5, 13, 1),
    p(F::Ms6, 14, 1),
    p(F::Ms7, 15, 1),
];

/// Mode word 3 (interrupt context and masks).
pub const MOD3_SLOTS: &[ProxySlot] = &[
    p(F::Nimc, 0, 1),
    p(F::Ic0, 1, 1),
    p(F::Ic1, 2, 1),
    p(F::Ic2, 3, 1),
    p(F::Vic, 4, 1),
    p(F::Ie, 7, 1),
    p(F::Im0, 8, 1),
    p(F::Im1, 9, 1),
    p(F::Im2, 10, 1),
    p(F::Vim, 11, 1),
];

/// Status copy 0. The extension nibble aliases `a1`, the same as `st1`.
pub const ST0_SLOTS: &[ProxySlot] = &[
    p(F::Sar0, 0, 1),
    p(F::Ie, 1, 1),
    p(F::Im0, 2, 1),
    p(F::Im1, 3, 1),
    p(F::Fr, 4, 1),
    ProxySlot::mirror(F::Fl0, F::Fl1, 5, 1),
    p(F::Fe, 6, 1),
    p(F::Fc, 7, 1),
    p(F::Fv, 8, 1),
    p(F::Fn, 9, 1),
    p(F::Fm, 10, 1),
    p(F::Fz, 11, 1),
    ProxySlot::acc_extension(AccumulatorSlot::A1, 12),
];

/// Status copy 1. Bits 8 and 9 are reserved.
pub const ST1_SLOTS: &[ProxySlot] = &[
    p(F::Page, 0, 8),
    p(F::Ps0, 10, 2),
    ProxySlot::acc_extension(AccumulatorSlot::A1, 12),
];

/// Status copy 2. Bit 12 is reserved.
pub const ST2_SLOTS: &[ProxySlot] = &[
    p(F::M0, 0, 1),
    p(F::M1, 1, 1),
    p(F::M2, 2, 1),
    p(F::M3, 3, 1),
    p(F::M4, 4, 1),
    p(F::M5, 5, 1),
    p(F::Im2, 6, 1),
    p(F::S, 7, 1),
    p(F::Ou0, 8, 1),
    p(F::Ou1, 9, 1),
    ro(F::Iu0, 10, 1),
    ro(F::Iu1, 11, 1),
    ro(F::Ip2, 13, 1),
    ro(F::Ip0, 14, 1),
    ro(F::Ip1, 15, 1),
];

/// Interrupt control register. Bits 8..15 are reserved.
pub const ICR_SLOTS: &[ProxySlot] = &[
    p(F::Nimc, 0, 1),
    p(F::Ic0, 1, 1),
    p(F::Ic1, 2, 1),
    p(F::Ic2, 3, 1),
    ro(F::Lp, 4, 1),
    ro(F::Bcn, 5, 3),
];

/// Named logical register addressable by instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(missing_docs)]
pub enum LogicalRegister {
    Cfgi,
    Cfgj,
    Stt0,
    Stt1,
    Stt2,
    Mod0,
    Mod1,
    Mod2,
    Mod3,
    St0,
    St1,
    St2,
    Icr,
}

impl LogicalRegister {
    /// Every logical register in catalog order.
    pub const ALL: [Self; 13] = [
        Self::Cfgi,
        Self::Cfgj,
        Self::Stt0,
        Self::Stt1,
        Self::Stt2,
        Self::Mod0,
        Self::Mod1,
        Self::Mod2,
        Self::Mod3,
        Self::St0,
        Self::St1,
        Self::St2,
        Self::Icr,
    ];

    /// Returns the binding table of this register.
    #[must_use]
    pub const fn layout(self) -> PseudoRegister {
        PseudoRegister::new(match self {
            Self::Cfgi => CFGI_SLOTS,
            Self::Cfgj => CFGJ_SLOTS,
            Self::Stt0 => STT0_SLOTS,
            Self::Stt1 => STT1_SLOTS,
            Self::Stt2 => STT2_SLOTS,
            Self::Mod0 => MOD0_SLOTS,
            Self::Mod1 => MOD1_SLOTS,
            Self::Mod2 => MOD2_SLOTS,
            Self::Mod3 => MOD3_SLOTS,
            Self::St0 => ST0_SLOTS,
            Self::St1 => ST1_SLOTS,
            Self::St2 => ST2_SLOTS,
            Self::Icr => ICR_SLOTS,
        })
    }

    /// Lowercase assembler mnemonic of this register.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cfgi => "cfgi",
            Self::Cfgj => "cfgj",
            Self::Stt0 => "stt0",
            Self::Stt1 => "stt1",
            Self::Stt2 => "stt2",
            Self::Mod0 => "mod0",
            Self::Mod1 => "mod1",
            Self::Mod2 => "mod2",
            Self::Mod3 => "mod3",
            Self::St0 => "st0",
            Self::St1 => "st1",
            Self::St2 => "st2",
            Self::Icr => "icr",
        }
    }

    /// Looks a register up by mnemonic, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|reg| reg.name().eq_ignore_ascii_case(name))
    }

    /// Validates every binding table in the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first register whose layout is misconfigured together with
    /// the fault found in it.
    pub fn validate_all() -> Result<(), (Self, LayoutError)> {
        Self::ALL
            .into_iter()
            .try_for_each(|reg| reg.layout().validate().map_err(|err| (reg, err)))
    }
}

impl fmt::Display for LogicalRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl RegisterState {
    /// Reads a logical register by composing its bound physical fields.
    #[must_use]
    pub fn read_logical(&self, reg: LogicalRegister) -> u16 {
        reg.layout().get(self)
    }

    /// Writes a logical register through its bindings.
    ///
    /// Bits on reserved or read-only positions are discarded.
    pub fn write_logical(&mut self, reg: LogicalRegister, value: u16) {
        let layout = reg.layout();
        let discarded = value & !layout.writable_mask();
        if discarded != 0 {
            log::trace!("{reg} <- {value:#06x} (discarded {discarded:#06x})");
        } else {
            log::trace!("{reg} <- {value:#06x}");
        }
        layout.set(self, value);
    }
}
