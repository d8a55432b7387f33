//! Hardware profile: phase table plus ramp constants.

use crate::error::Result;
use crate::motion::RampProfile;

use super::phase::PhaseTable;
use super::units::QUADRANTS_PER_REVOLUTION;
use super::validation::validate_profile;

/// Derived drive parameters for one motor variant.
///
/// Built once at startup and validated on construction, so the stepping
/// loop never has to re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorProfile {
    phase_table: PhaseTable,
    steps_per_revolution: u32,
    steps_per_quarter: u32,
    ramp_steps: u32,
    cruise_steps: u32,
    start_delay_ms: u32,
    end_delay_ms: u32,
}

impl MotorProfile {
    /// Build and validate a profile.
    ///
    /// `ramp_steps` is the length of the acceleration segment and
    /// `cruise_steps` the step (within one quadrant) at which the cruise
    /// segment ends.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the constants cannot produce a valid ramp.
    pub fn new(
        phase_table: PhaseTable,
        steps_per_revolution: u32,
        ramp_steps: u32,
        cruise_steps: u32,
        start_delay_ms: u32,
        end_delay_ms: u32,
    ) -> Result<Self> {
        validate_profile(
            &phase_table,
            steps_per_revolution,
            ramp_steps,
            cruise_steps,
            start_delay_ms,
            end_delay_ms,
        )?;

        Ok(Self {
            phase_table,
            steps_per_revolution,
            steps_per_quarter: steps_per_revolution / QUADRANTS_PER_REVOLUTION as u32,
            ramp_steps,
            cruise_steps,
            start_delay_ms,
            end_delay_ms,
        })
    }

    /// 2048 steps/rev geared stepper.
    ///
    /// The ramp covers a third of a quadrant and cruise a third; the delays
    /// mirror so acceleration and deceleration take the same time.
    pub fn small_stepper() -> Self {
        Self {
            phase_table: PhaseTable::small_stepper(),
            steps_per_revolution: 2048,
            steps_per_quarter: 512,
            ramp_steps: 170,
            cruise_steps: 340,
            start_delay_ms: 173,
            end_delay_ms: 3,
        }
    }

    /// 200 steps/rev bipolar stepper.
    pub fn large_stepper() -> Self {
        Self {
            phase_table: PhaseTable::large_stepper(),
            steps_per_revolution: 200,
            steps_per_quarter: 50,
            ramp_steps: 15,
            cruise_steps: 20,
            start_delay_ms: 20,
            end_delay_ms: 5,
        }
    }

    /// Phase table driven by this profile.
    #[inline]
    pub fn phase_table(&self) -> &PhaseTable {
        &self.phase_table
    }

    /// Full steps per revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Full steps per quarter revolution (one quadrant).
    #[inline]
    pub fn steps_per_quarter(&self) -> u32 {
        self.steps_per_quarter
    }

    /// Acceleration segment length, per quadrant.
    #[inline]
    pub fn ramp_steps(&self) -> u32 {
        self.ramp_steps
    }

    /// End of the cruise segment, per quadrant.
    #[inline]
    pub fn cruise_steps(&self) -> u32 {
        self.cruise_steps
    }

    /// Delay after the first step, and the homing cadence.
    #[inline]
    pub fn start_delay_ms(&self) -> u32 {
        self.start_delay_ms
    }

    /// Cruise delay.
    #[inline]
    pub fn end_delay_ms(&self) -> u32 {
        self.end_delay_ms
    }

    /// Ramp timing for a move of `quadrants` quarter turns.
    pub fn ramp(&self, quadrants: u8) -> RampProfile {
        RampProfile::new(self, quadrants)
    }
}
