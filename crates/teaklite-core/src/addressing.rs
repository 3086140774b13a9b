//! Step-mode selection for the two address-step generators.
//!
//! Only the selection is modelled here: which step register and whether the
//! modulo applies. Computing the next address belongs to the execution engine.

use crate::state::{sign_extend_u32, GeneralRegister, RegisterState};

/// Width of the primary step field.
pub const STEP_BITS: u32 = 7;
/// Mask of the modulo field.
pub const MODULO_MASK: u16 = 0x01FF;

/// Step register that feeds an address update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepSource {
    /// `stepi` / `stepj`.
    Primary,
    /// `stepi0` / `stepj0`.
    Alternate,
}

/// Selected step source and modulo behavior for one address unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepMode {
    /// Step register to use.
    pub source: StepSource,
    /// Whether modulo wrapping applies.
    pub modulo: bool,
}

impl StepMode {
    /// Resolves the `m` (modulo enable) and `ms` (alternate step enable) bits.
    #[must_use]
    pub const fn select(modulo_enable: bool, alternate_enable: bool) -> Self {
        match (modulo_enable, alternate_enable) {
            (false, false) => Self {
                source: StepSource::Primary,
                modulo: false,
            },
            (true, false) => Self {
                source: StepSource::Primary,
                modulo: true,
            },
            (false, true) => Self {
                source: StepSource::Alternate,
                modulo: false,
            },
            // Unconfirmed on hardware.
            (true, true) => Self {
                source: StepSource::Primary,
                modulo: false,
            },
        }
    }
}

/// One of the two address-step generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressGenerator {
    /// Generator I, configured by `cfgi`; serves `r0..r3`.
    I,
    /// Generator J, configured by `cfgj`; serves `r4..r7`.
    J,
}

impl AddressGenerator {
    /// Returns the generator that steps `reg`.
    #[must_use]
    pub const fn for_register(reg: GeneralRegister) -> Self {
        if reg.index() < 4 {
            Self::I
        } else {
            Self::J
        }
    }
}

/// Step value and optional modulo selected for one address unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepConfig {
    /// Step to add, as a 16-bit two's-complement value.
    pub step: u16,
    /// Modulo to wrap against, when modulo addressing is active.
    pub modulo: Option<u16>,
}

impl RegisterState {
    /// Resolves the step mode of the address unit paired with `reg`.
    #[must_use]
    pub const fn step_mode(&self, reg: GeneralRegister) -> StepMode {
        StepMode::select(self.m[reg.index()] != 0, self.ms[reg.index()] != 0)
    }

    /// Primary step of `generator`, sign-extended from 7 bits.
    #[must_use]
    pub const fn primary_step(&self, generator: AddressGenerator) -> u16 {
        let raw = match generator {
            AddressGenerator::I => self.stepi,
            AddressGenerator::J => self.stepj,
        };
        (sign_extend_u32(raw as u32 & 0x7F, STEP_BITS) & 0xFFFF) as u16
    }

    /// Alternate step of `generator`, unmodified.
    #[must_use]
    pub const fn alternate_step(&self, generator: AddressGenerator) -> u16 {
        match generator {
            AddressGenerator::I => self.stepi0,
            AddressGenerator::J => self.stepj0,
        }
    }

    /// Modulo of `generator`, masked to 9 bits.
    #[must_use]
    pub const fn modulo(&self, generator: AddressGenerator) -> u16 {
        match generator {
            AddressGenerator::I => self.modi & MODULO_MASK,
            AddressGenerator::J => self.modj & MODULO_MASK,
        }
    }

    /// Resolves the step value and modulo for the address unit paired with `reg`.
    #[must_use]
    pub const fn step_config(&self, reg: GeneralRegister) -> StepConfig {
        let generator = AddressGenerator::for_register(reg);
        let mode = self.step_mode(reg);
        let step = match mode.source {
            StepSource::Primary => self.primary_step(generator),
            StepSource::Alternate => self.alternate_step(generator),
        };
        StepConfig {
            step,
            modulo: if mode.modulo {
                Some(self.modulo(generator))
            } else {
                None
            },
        }
    }
}
