//! Trapezoidal ramp timing.
//!
//! The ramp is defined over the normalized step `n = i / quadrants`, so a
//! longer move stretches every segment by the quadrant count instead of
//! lengthening the cruise only.

use crate::config::units::Steps;
use crate::config::MotorProfile;

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (walks the phase table forward).
    Clockwise,
    /// Counter-clockwise (walks the phase table backward).
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Current phase of motion execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Delay shrinking from the start delay toward cruise.
    Accelerating,
    /// Constant cruise delay.
    Cruising,
    /// Delay growing again toward the end of the move.
    Decelerating,
    /// Motion complete.
    Complete,
}

/// Per-step delay schedule for one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampProfile {
    /// Total steps to move.
    pub total_steps: u32,

    /// Quarter turns requested (zero for an empty move).
    pub quadrants: u8,

    /// First step of the cruise segment (`ramp_steps × quadrants`).
    pub cruise_start: u32,

    /// First step of the deceleration segment (`cruise_steps × quadrants`).
    pub decel_start: u32,

    /// Cruise bound in normalized steps.
    pub cruise_steps: u32,

    /// Delay of step 0 in milliseconds.
    pub start_delay_ms: u32,

    /// Cruise delay in milliseconds.
    pub end_delay_ms: u32,
}

impl RampProfile {
    /// Compute the schedule for `quadrants` quarter turns.
    pub fn new(profile: &MotorProfile, quadrants: u8) -> Self {
        if quadrants == 0 {
            return Self::zero();
        }

        let q = quadrants as u32;
        Self {
            total_steps: Steps::for_quadrants(quadrants, profile.steps_per_quarter()).value(),
            quadrants,
            cruise_start: profile.ramp_steps() * q,
            decel_start: profile.cruise_steps() * q,
            cruise_steps: profile.cruise_steps(),
            start_delay_ms: profile.start_delay_ms(),
            end_delay_ms: profile.end_delay_ms(),
        }
    }

    /// Create a zero-length schedule (no motion).
    pub fn zero() -> Self {
        Self {
            total_steps: 0,
            quadrants: 0,
            cruise_start: 0,
            decel_start: 0,
            cruise_steps: 0,
            start_delay_ms: 0,
            end_delay_ms: 0,
        }
    }

    /// Check if this is a zero-length schedule.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_steps == 0
    }

    /// Get the phase at a given step number.
    ///
    /// Bounds are exclusive and checked in order, so every step belongs to
    /// exactly one segment.
    pub fn phase_at(&self, step: u32) -> MotionPhase {
        if step >= self.total_steps {
            MotionPhase::Complete
        } else if step < self.cruise_start {
            MotionPhase::Accelerating
        } else if step < self.decel_start {
            MotionPhase::Cruising
        } else {
            MotionPhase::Decelerating
        }
    }

    /// Delay in milliseconds after the given step.
    ///
    /// Returns 0 past the end of the move.
    pub fn delay_at(&self, step: u32) -> u32 {
        match self.phase_at(step) {
            MotionPhase::Complete => 0,
            MotionPhase::Cruising => self.end_delay_ms,
            MotionPhase::Accelerating => {
                let n = step / self.quadrants as u32;
                self.start_delay_ms.saturating_sub(n)
            }
            MotionPhase::Decelerating => {
                // n >= cruise_steps here since step >= cruise_steps * quadrants
                let n = step / self.quadrants as u32;
                n - self.cruise_steps + self.end_delay_ms
            }
        }
    }

    /// Iterate the per-step delays of the whole move.
    pub fn delays(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.total_steps).map(move |step| self.delay_at(step))
    }

    /// Sum of all step delays in milliseconds.
    pub fn estimated_duration_ms(&self) -> u64 {
        self.delays().map(u64::from).sum()
    }
}
