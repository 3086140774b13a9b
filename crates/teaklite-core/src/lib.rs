//! Register file of the TeakLite fixed-point DSP core.

/// Physical register storage and accumulator containers.
pub mod state;
pub use state::{
    Accumulator, GeneralRegister, Product, RegisterState, ACCUMULATOR_BITS, ACCUMULATOR_MASK,
    ADDRESS_UNIT_COUNT, GENERAL_REGISTER_COUNT, INTERRUPT_CHANNEL_COUNT,
};

/// Host-facing register file configuration.
pub mod config;
pub use config::{RegisterConfig, ResetPolicy, PC_MASK_FULL};

/// Layout and condition-code fault taxonomy.
pub mod fault;
pub use fault::{ConditionError, LayoutError};

/// Bit-field views over physical storage.
pub mod proxy;
pub use proxy::{AccumulatorSlot, BitView, PhysicalField};

/// Composition of views into 16-bit logical registers.
pub mod pseudo;
pub use pseudo::{ProxySlot, PseudoRegister, LOGICAL_REGISTER_BITS};

/// Catalog of named logical registers and their binding tables.
pub mod catalog;
pub use catalog::LogicalRegister;

/// Condition-code evaluation.
pub mod condition;
pub use condition::Condition;

/// Address-step generator mode selection.
pub mod addressing;
pub use addressing::{AddressGenerator, StepConfig, StepMode, StepSource, MODULO_MASK, STEP_BITS};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
