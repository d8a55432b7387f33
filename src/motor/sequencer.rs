//! Step sequencing over a phase table.

use crate::config::units::PhasePattern;
use crate::config::PhaseTable;
use crate::error::ConfigError;
use crate::motion::Direction;

/// Index of the last energized pattern in the forward table.
///
/// Always in `[0, N)` for the table it was created against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepCursor(usize);

impl StepCursor {
    /// Create a cursor for a table of length `len`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CursorOutOfRange` if `value >= len`.
    pub fn new(value: usize, len: usize) -> Result<Self, ConfigError> {
        if value < len {
            Ok(Self(value))
        } else {
            Err(ConfigError::CursorOutOfRange { cursor: value, len })
        }
    }

    /// Cursor after `count` homing advances: `count mod len`.
    #[inline]
    pub fn after_homing(count: u64, len: usize) -> Self {
        Self((count % len as u64) as usize)
    }

    /// Get the raw index.
    #[inline]
    pub fn value(self) -> usize {
        self.0
    }

    /// Move one step in `direction` and return the pattern to energize.
    ///
    /// Clockwise reads the forward table at the incremented index.
    /// Counter-clockwise decrements with a `+ N - 1` bias so the index never
    /// underflows, and reads the reversed view at the mirrored index, which
    /// is the forward entry at the new cursor. A clockwise step followed by a
    /// counter-clockwise one therefore re-energizes the previous pattern.
    pub fn advance(self, direction: Direction, table: &PhaseTable) -> (Self, PhasePattern) {
        let n = table.len();
        match direction {
            Direction::Clockwise => {
                let next = (self.0 + 1) % n;
                (Self(next), table.forward(next))
            }
            Direction::CounterClockwise => {
                let next = (self.0 + n - 1) % n;
                (Self(next), table.reversed((n - 1 - next) % n))
            }
        }
    }
}
