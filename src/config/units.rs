//! Unit types for the tray drive.
//!
//! Provides type-safe representations of phase patterns, tray quadrants and
//! step counts so raw integers are not mixed up across the API.

use core::fmt;

use serde::Deserialize;

use crate::error::MotorError;

/// Number of quadrants in one revolution of the tray.
pub const QUADRANTS_PER_REVOLUTION: u8 = 4;

/// Activation mask for the coil drive lines.
///
/// Bit `k` set means drive line `k` is energized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct PhasePattern(pub u8);

impl PhasePattern {
    /// Create a new pattern from raw bits.
    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether drive line `line` is energized.
    #[inline]
    pub const fn is_active(self, line: usize) -> bool {
        line < 8 && (self.0 >> line) & 1 == 1
    }

    /// Number of energized lines.
    #[inline]
    pub const fn active_lines(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Binary for PhasePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// One of the four tray positions, a quarter revolution apart.
///
/// Quadrant 0 is the homed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quadrant(u8);

impl Quadrant {
    /// The homed reference position.
    pub const HOME: Self = Self(0);

    /// Create a quadrant with validation.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidQuadrant` if `value` is not in `0..4`.
    pub fn new(value: u8) -> Result<Self, MotorError> {
        if value < QUADRANTS_PER_REVOLUTION {
            Ok(Self(value))
        } else {
            Err(MotorError::InvalidQuadrant(value))
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Quadrant reached after `count` quarter turns clockwise.
    #[inline]
    pub const fn forward(self, count: u8) -> Self {
        Self(((self.0 as u16 + count as u16) % QUADRANTS_PER_REVOLUTION as u16) as u8)
    }

    /// Quadrant reached after `count` quarter turns counter-clockwise.
    #[inline]
    pub const fn backward(self, count: u8) -> Self {
        let back = (count % QUADRANTS_PER_REVOLUTION) as u16;
        let n = QUADRANTS_PER_REVOLUTION as u16;
        Self(((self.0 as u16 + n - back) % n) as u8)
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = MotorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A count of physical motor steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub u32);

impl Steps {
    /// Create a new step count.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Steps needed for `quadrants` quarter turns.
    #[inline]
    pub const fn for_quadrants(quadrants: u8, steps_per_quarter: u32) -> Self {
        Self(quadrants as u32 * steps_per_quarter)
    }
}
