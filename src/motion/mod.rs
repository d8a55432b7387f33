//! Motion module for tray-stepper.
//!
//! Provides ramp timing calculation and step-by-step execution.

mod executor;
mod profile;

pub use executor::{MotionExecutor, ScheduledStep};
pub use profile::{Direction, MotionPhase, RampProfile};
