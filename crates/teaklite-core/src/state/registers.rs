use crate::config::{RegisterConfig, ResetPolicy};
use crate::state::accumulator::{Accumulator, Product};

/// Number of general-purpose registers (`r0..r7`).
pub const GENERAL_REGISTER_COUNT: usize = 8;
/// Number of interrupt channels with pending/mask/context bits.
pub const INTERRUPT_CHANNEL_COUNT: usize = 3;
/// Number of address units indexed by the `m` / `ms` mode arrays.
pub const ADDRESS_UNIT_COUNT: usize = 8;

/// General-purpose register identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum GeneralRegister {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
}

impl GeneralRegister {
    /// Ordered list of all general-purpose registers.
    pub const ALL: [Self; GENERAL_REGISTER_COUNT] = [
        Self::R0,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
    ];

    /// Returns the array index for this register (`0..=7`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Physical register storage of one DSP core.
///
/// Every field is the single owner of its hardware state. Logical registers
/// (see [`crate::LogicalRegister`]) are views that address these fields by
/// identity, so a write through one alias is visible through all others.
/// One-bit flags live in `u16` storage and count as set when non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RegisterState {
    config: RegisterConfig,

    /// Program counter.
    pub pc: u32,

    /// Data value match register.
    pub dvm: u16,
    /// Repeat counter.
    pub repc: u16,
    /// Loop counter.
    pub lc: u16,
    /// Mix pointer.
    pub mixp: u16,
    /// Shift value.
    pub sv: u16,
    /// Stack pointer.
    pub sp: u16,

    /// General-purpose registers `r0..r7`.
    pub r: [u16; GENERAL_REGISTER_COUNT],

    /// Accumulators `a0`, `a1`.
    pub a: [Accumulator; 2],
    /// Accumulators `b0`, `b1`.
    pub b: [Accumulator; 2],

    /// Multiplier `x` input latches.
    pub x: [u16; 2],
    /// Multiplier `y` input latches.
    pub y: [u16; 2],
    /// Product registers `p0`, `p1`.
    pub p: [Product; 2],

    /// Opaque scratch storage; hardware role unknown.
    pub ar: [u16; 2],
    /// Opaque scratch storage; hardware role unknown.
    pub arp: [u16; 4],

    /// Primary step of generator I (7-bit two's complement).
    pub stepi: u16,
    /// Primary step of generator J (7-bit two's complement).
    pub stepj: u16,
    /// Modulo of generator I (9 bits).
    pub modi: u16,
    /// Modulo of generator J (9 bits).
    pub modj: u16,
    /// Alternate step of generator I.
    pub stepi0: u16,
    /// Alternate step of generator J.
    pub stepj0: u16,

    /// `fc` / `fc1` latching history.
    pub vtr: [u16; 2],

    /// Zero flag.
    pub fz: u16,
    /// Minus flag.
    pub fm: u16,
    /// Normalized flag.
    pub fn_: u16,
    /// Overflow flag.
    pub fv: u16,
    /// Carry flag.
    pub fc: u16,
    /// Extension flag.
    pub fe: u16,
    /// Limit flag pair.
    pub fl: [u16; 2],
    /// Rounding flag.
    pub fr: u16,
    /// Second carry latch.
    pub fc1: u16,

    /// Non-maskable interrupt context bit.
    pub nimc: u16,
    /// Interrupt pending bits per channel.
    pub ip: [u16; INTERRUPT_CHANNEL_COUNT],
    /// Vectored interrupt pending bit.
    pub vip: u16,
    /// Interrupt mask bits per channel.
    pub im: [u16; INTERRUPT_CHANNEL_COUNT],
    /// Vectored interrupt mask bit.
    pub vim: u16,
    /// Interrupt context bits per channel.
    pub ic: [u16; INTERRUPT_CHANNEL_COUNT],
    /// Vectored interrupt context bit.
    pub vic: u16,
    /// Global interrupt enable.
    pub ie: u16,

    /// Program/data move page (2 bits).
    pub movpd: u16,
    /// Block-repeat nesting count (3 bits).
    pub bcn: u16,
    /// Loop-in-progress flag.
    pub lp: u16,
    /// Saturation-disable pair.
    pub sar: [u16; 2],
    /// Product shift pair (2 bits each).
    pub ps: [u16; 2],
    /// Product shift mode pair.
    pub psm: [u16; 2],
    /// Generic `S` bit.
    pub s: u16,
    /// Output unit status pair.
    pub ou: [u16; 2],
    /// Input unit status pair.
    pub iu: [u16; 2],
    /// Page register (8 bits).
    pub page: u16,

    /// Per-unit modulo enable.
    pub m: [u16; ADDRESS_UNIT_COUNT],
    /// Per-unit alternate step enable.
    pub ms: [u16; ADDRESS_UNIT_COUNT],
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::with_config(&RegisterConfig::default())
    }
}

impl RegisterState {
    /// Creates a register file with every field at its power-on value.
    #[must_use]
    pub const fn with_config(config: &RegisterConfig) -> Self {
        Self {
            config: *config,
            pc: 0,
            dvm: 0,
            repc: 0,
            lc: 0,
            mixp: 0,
            sv: 0,
            sp: 0,
            r: [0; GENERAL_REGISTER_COUNT],
            a: [Accumulator { value: 0 }; 2],
            b: [Accumulator { value: 0 }; 2],
            x: [0; 2],
            y: [0; 2],
            p: [Product { value: 0 }; 2],
            ar: [0; 2],
            arp: [0; 4],
            stepi: 0,
            stepj: 0,
            modi: 0,
            modj: 0,
            stepi0: 0,
            stepj0: 0,
            vtr: [0; 2],
            fz: 0,
            fm: 0,
            fn_: 0,
            fv: 0,
            fc: 0,
            fe: 0,
            fl: [0; 2],
            fr: 0,
            fc1: 0,
            nimc: 0,
            ip: [0; INTERRUPT_CHANNEL_COUNT],
            vip: 0,
            im: [0; INTERRUPT_CHANNEL_COUNT],
            vim: 0,
            ic: [0; INTERRUPT_CHANNEL_COUNT],
            vic: 0,
            ie: 0,
            movpd: 0,
            bcn: 0,
            lp: 0,
            sar: [0; 2],
            ps: [0; 2],
            psm: [0; 2],
            s: 0,
            ou: [0; 2],
            iu: [0; 2],
            page: 0,
            m: [0; ADDRESS_UNIT_COUNT],
            ms: [0; ADDRESS_UNIT_COUNT],
        }
    }

    /// Returns the configuration this register file was built with.
    #[must_use]
    pub const fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Applies reset according to the configured [`ResetPolicy`].
    ///
    /// The default policy only clears the program counter.
    pub fn reset(&mut self) {
        match self.config.reset_policy {
            ResetPolicy::ProgramCounter => self.pc = 0,
            ResetPolicy::Full => *self = Self::with_config(&self.config),
        }
        log::debug!("register file reset ({:?})", self.config.reset_policy);
    }

    /// Reads the low half of the program counter.
    #[must_use]
    pub const fn pc_low(&self) -> u16 {
        (self.pc & 0xFFFF) as u16
    }

    /// Reads the high half of the program counter.
    #[must_use]
    pub const fn pc_high(&self) -> u16 {
        (self.pc >> 16) as u16
    }

    /// Combines two 16-bit halves into the program counter.
    ///
    /// The default configuration keeps all 32 bits.
    pub const fn set_pc(&mut self, low: u16, high: u16) {
        self.pc = (low as u32 | ((high as u32) << 16)) & self.config.pc_mask;
    }

    /// Reads a general-purpose register.
    #[must_use]
    pub const fn gpr(&self, reg: GeneralRegister) -> u16 {
        self.r[reg.index()]
    }

    /// Writes a general-purpose register.
    pub const fn set_gpr(&mut self, reg: GeneralRegister, value: u16) {
        self.r[reg.index()] = value;
    }
}
