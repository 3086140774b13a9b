//! Host-facing configuration for a register file instance.

/// Program-counter mask that keeps every bit of the combined halves.
pub const PC_MASK_FULL: u32 = u32::MAX;

/// Scope of [`crate::RegisterState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ResetPolicy {
    /// Only the program counter returns to zero; every other field keeps its value.
    #[default]
    ProgramCounter,
    /// Every physical field returns to its power-on value.
    Full,
}

/// Immutable configuration for a register file instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RegisterConfig {
    /// Behavior of [`crate::RegisterState::reset`].
    pub reset_policy: ResetPolicy,
    /// Mask applied when combining the two program-counter halves.
    pub pc_mask: u32,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            reset_policy: ResetPolicy::ProgramCounter,
            pc_mask: PC_MASK_FULL,
        }
    }
}

impl RegisterConfig {
    /// Returns a configuration whose program counter keeps only `bits` low bits.
    #[must_use]
    pub const fn with_pc_width(mut self, bits: u32) -> Self {
        self.pc_mask = if bits >= 32 {
            PC_MASK_FULL
        } else {
            (1 << bits) - 1
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{RegisterConfig, ResetPolicy, PC_MASK_FULL};

    #[test]
    fn default_config_resets_pc_only_and_keeps_full_pc() {
        let config = RegisterConfig::default();
        assert_eq!(config.reset_policy, ResetPolicy::ProgramCounter);
        assert_eq!(config.pc_mask, PC_MASK_FULL);
    }

    #[test]
    fn pc_width_builds_low_bit_mask() {
        assert_eq!(RegisterConfig::default().with_pc_width(18).pc_mask, 0x0003_FFFF);
        assert_eq!(RegisterConfig::default().with_pc_width(32).pc_mask, PC_MASK_FULL);
        assert_eq!(RegisterConfig::default().with_pc_width(40).pc_mask, PC_MASK_FULL);
    }
}
