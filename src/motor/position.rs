//! Tray position tracking.
//!
//! Tracks which quadrant faces the chute, relative to the homed reference.

use crate::config::units::{Quadrant, QUADRANTS_PER_REVOLUTION};
use crate::motion::Direction;

/// Tray position tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    quadrant: Quadrant,
}

impl Position {
    /// Position at the homed reference.
    #[inline]
    pub fn home() -> Self {
        Self {
            quadrant: Quadrant::HOME,
        }
    }

    /// Position at a specific quadrant.
    #[inline]
    pub fn at(quadrant: Quadrant) -> Self {
        Self { quadrant }
    }

    /// Current quadrant.
    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Record a completed rotation.
    #[inline]
    pub fn rotate(&mut self, direction: Direction, quadrants: u8) {
        self.quadrant = match direction {
            Direction::Clockwise => self.quadrant.forward(quadrants),
            Direction::CounterClockwise => self.quadrant.backward(quadrants),
        };
    }

    /// Shortest rotation reaching `target`.
    ///
    /// Half-turn ties go clockwise. Returns zero quadrants when already there.
    pub fn path_to(&self, target: Quadrant) -> (Direction, u8) {
        let forward = (target.value() + QUADRANTS_PER_REVOLUTION - self.quadrant.value())
            % QUADRANTS_PER_REVOLUTION;
        let backward = (QUADRANTS_PER_REVOLUTION - forward) % QUADRANTS_PER_REVOLUTION;

        if backward < forward {
            (Direction::CounterClockwise, backward)
        } else {
            (Direction::Clockwise, forward)
        }
    }
}
