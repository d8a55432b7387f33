//! Control states and the pending-state flag set.

use crate::error::DispatchError;

/// Control states of the sorter, with their flag bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SystemState {
    /// Power-up: home the tray.
    Init = 0b0000_0001,
    /// Waiting for an object.
    Idle = 0b0000_0010,
    /// An object arrived on the sensor.
    NewObject = 0b0000_0100,
    /// Turn the tray to the selected bin.
    PositionTray = 0b0010_0000,
    /// Classify the current object.
    Classify = 0b1000_0000,
}

impl SystemState {
    /// All states, lowest bit first (dispatch priority).
    pub const ALL: [SystemState; 5] = [
        SystemState::Init,
        SystemState::Idle,
        SystemState::NewObject,
        SystemState::PositionTray,
        SystemState::Classify,
    ];

    /// Flag bit of this state.
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Union of all known state bits.
    pub const MASK: u8 = 0b1010_0111;
}

/// Set of states waiting to be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateFlags(u8);

impl StateFlags {
    /// No pending states.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from a raw flag word.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownStateBits` if any bit maps to no state.
    pub fn from_bits(bits: u8) -> Result<Self, DispatchError> {
        let unknown = bits & !SystemState::MASK;
        if unknown != 0 {
            return Err(DispatchError::UnknownStateBits(unknown));
        }
        Ok(Self(bits))
    }

    /// Raw flag word.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Mark `state` pending.
    #[inline]
    pub fn trigger(&mut self, state: SystemState) {
        self.0 |= state.bit();
    }

    /// Clear `state`.
    #[inline]
    pub fn process(&mut self, state: SystemState) {
        self.0 &= !state.bit();
    }

    /// Check whether `state` is pending.
    #[inline]
    pub fn is_pending(self, state: SystemState) -> bool {
        self.0 & state.bit() != 0
    }

    /// Check whether nothing is pending.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Highest-priority pending state (lowest bit).
    pub fn next_pending(self) -> Option<SystemState> {
        SystemState::ALL
            .into_iter()
            .find(|&state| self.is_pending(state))
    }
}
