//! Phase tables for full-step drive.

use heapless::Vec;

use crate::error::ConfigError;

use super::units::PhasePattern;

/// Maximum number of patterns in a phase table.
pub const MAX_PHASES: usize = 8;

/// Coil pattern sequence for the 2048 step geared stepper.
pub const SMALL_STEPPER_TABLE: [u8; 4] = [0b110000, 0b101000, 0b000110, 0b000101];

/// Coil pattern sequence for the 200 step bipolar stepper.
pub const LARGE_STEPPER_TABLE: [u8; 4] = [0b110000, 0b000110, 0b101000, 0b000101];

/// Cyclic table of coil patterns, walked one entry per full step.
///
/// Only the forward order is stored. Reverse traversal indexes the same
/// entries from the other end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTable {
    patterns: Vec<PhasePattern, MAX_PHASES>,
}

impl PhaseTable {
    /// Build a table from raw patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or longer than [`MAX_PHASES`].
    pub fn new(patterns: &[u8]) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Err(ConfigError::EmptyPhaseTable);
        }
        if patterns.len() > MAX_PHASES {
            return Err(ConfigError::PhaseTableTooLong(patterns.len()));
        }

        let mut table = Vec::new();
        for &bits in patterns {
            // Length checked above
            let _ = table.push(PhasePattern(bits));
        }
        Ok(Self { patterns: table })
    }

    /// Table of the small (2048 steps/rev) stepper.
    pub fn small_stepper() -> Self {
        Self::from_array(SMALL_STEPPER_TABLE)
    }

    /// Table of the large (200 steps/rev) stepper.
    pub fn large_stepper() -> Self {
        Self::from_array(LARGE_STEPPER_TABLE)
    }

    fn from_array<const N: usize>(patterns: [u8; N]) -> Self {
        let mut table = Vec::new();
        for bits in patterns.into_iter().take(MAX_PHASES) {
            let _ = table.push(PhasePattern(bits));
        }
        Self { patterns: table }
    }

    /// Number of patterns (N). Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false, a table holds at least one pattern.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern at `index` in forward order (wrapped modulo N).
    #[inline]
    pub fn forward(&self, index: usize) -> PhasePattern {
        self.patterns[index % self.len()]
    }

    /// Pattern at `index` in reverse order (wrapped modulo N).
    #[inline]
    pub fn reversed(&self, index: usize) -> PhasePattern {
        let n = self.len();
        self.patterns[n - 1 - index % n]
    }

    /// Iterate the patterns in forward order.
    pub fn iter(&self) -> impl Iterator<Item = PhasePattern> + '_ {
        self.patterns.iter().copied()
    }
}
