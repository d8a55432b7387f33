//! Motor reference type-state markers.
//!
//! Tray positioning needs a known reference, so it is only available once
//! the type says the motor has been homed.

/// Reference position unknown; only relative rotation is possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unhomed;

/// Homing completed; the tray quadrant is tracked.
#[derive(Debug, Clone, Copy)]
pub struct Homed;

/// Trait for motor reference states.
pub trait MotorState: private::Sealed {}

impl MotorState for Unhomed {}
impl MotorState for Homed {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Unhomed {}
    impl Sealed for super::Homed {}
}

/// State name for display/debugging.
pub trait StateName {
    /// Get the state name as a static string.
    fn name() -> &'static str;
}

impl StateName for Unhomed {
    fn name() -> &'static str {
        "Unhomed"
    }
}

impl StateName for Homed {
    fn name() -> &'static str {
        "Homed"
    }
}
