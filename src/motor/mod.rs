//! Motor module for tray-stepper.
//!
//! Provides phase sequencing, the ramped stepper driver with homing, and
//! the platform seams it drives.

mod builder;
mod driver;
pub mod io;
mod position;
mod sequencer;
pub mod state;

pub use builder::StepperMotorBuilder;
pub use driver::StepperMotor;
pub use io::{HomingSensor, PhaseOutput, PinPhaseOutput, PinSensor};
pub use position::Position;
pub use sequencer::StepCursor;
pub use state::{Homed, MotorState, StateName, Unhomed};
