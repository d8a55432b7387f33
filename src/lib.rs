//! # tray-stepper
//!
//! Full-step stepper drive for a quadrant-indexed sorting tray, with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Phase sequencing**: walks a cyclic coil pattern table in either
//!   direction without index drift
//! - **Trapezoidal ramp**: per-step millisecond delays that accelerate,
//!   cruise and decelerate, scaled by the number of quarter turns
//! - **Homing**: constant-cadence search for the reference sensor
//! - **Type-state safety**: tray positioning only on a homed motor
//! - **Configuration-driven**: hardware presets and overrides from TOML
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tray_stepper::{Direction, MotorProfile, PinPhaseOutput, PinSensor, Quadrant, StepperMotor};
//!
//! let mut motor = StepperMotor::builder()
//!     .output(PinPhaseOutput::new(coil_pins))
//!     .sensor(PinSensor::active_low(home_pin))
//!     .delay(delay)
//!     .profile(MotorProfile::large_stepper())
//!     .build()?;
//!
//! motor.rotate(Direction::Clockwise, 1)?;
//!
//! let mut tray = motor.home().map_err(|(_, e)| e)?;
//! tray.move_to(Quadrant::new(2)?)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables serde's `alloc` support for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod dispatch;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, MotorProfile, PhaseTable, Preset, SystemConfig};
pub use dispatch::{Dispatcher, StateFlags, StateHandler, SystemState};
pub use error::{Error, Result};
pub use motion::{Direction, MotionPhase, RampProfile};
pub use motor::{
    state, HomingSensor, PhaseOutput, PinPhaseOutput, PinSensor, StepCursor, StepperMotor,
    StepperMotorBuilder,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, load_profile, parse_config};

// Unit types
pub use config::units::{PhasePattern, Quadrant, Steps};
