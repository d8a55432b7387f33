//! Motion execution - walks a ramp one step at a time.

use super::profile::{MotionPhase, RampProfile};

/// One step of a move: its index, segment and the delay that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduledStep {
    /// Step index within the move.
    pub index: u32,
    /// Ramp segment the step belongs to.
    pub phase: MotionPhase,
    /// Delay after the phase write, in milliseconds.
    pub delay_ms: u32,
}

/// Runtime state during motion execution.
///
/// Yields every step of the schedule exactly once, in order.
#[derive(Debug, Clone)]
pub struct MotionExecutor {
    ramp: RampProfile,
    next: u32,
}

impl MotionExecutor {
    /// Start executing `ramp` from its first step.
    pub fn new(ramp: RampProfile) -> Self {
        Self { ramp, next: 0 }
    }

    /// Check if every step has been yielded.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.next >= self.ramp.total_steps
    }

    /// Get the total number of steps.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.ramp.total_steps
    }

    /// Steps not yet yielded.
    #[inline]
    pub fn steps_remaining(&self) -> u32 {
        self.ramp.total_steps.saturating_sub(self.next)
    }

    /// Get the ramp schedule.
    #[inline]
    pub fn ramp(&self) -> &RampProfile {
        &self.ramp
    }
}

impl Iterator for MotionExecutor {
    type Item = ScheduledStep;

    fn next(&mut self) -> Option<ScheduledStep> {
        if self.is_complete() {
            return None;
        }

        let index = self.next;
        self.next += 1;

        Some(ScheduledStep {
            index,
            phase: self.ramp.phase_at(index),
            delay_ms: self.ramp.delay_at(index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps_remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MotionExecutor {}
