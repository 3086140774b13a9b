//! Physical register storage of the DSP core.

/// Accumulator and product containers.
pub mod accumulator;
/// Physical register file and program-counter helpers.
pub mod registers;

pub(crate) use accumulator::sign_extend_u32;
pub use accumulator::{Accumulator, Product, ACCUMULATOR_BITS, ACCUMULATOR_MASK};
pub use registers::{
    GeneralRegister, RegisterState, ADDRESS_UNIT_COUNT, GENERAL_REGISTER_COUNT,
    INTERRUPT_CHANNEL_COUNT,
};
