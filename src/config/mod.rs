//! Configuration module for tray-stepper.
//!
//! Provides hardware profiles (phase table and ramp constants), their
//! validation, and loading from TOML files (with `std` feature).

mod motor;
mod phase;
mod profile;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{MotorConfig, Preset};
pub use phase::{PhaseTable, LARGE_STEPPER_TABLE, MAX_PHASES, SMALL_STEPPER_TABLE};
pub use profile::MotorProfile;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, load_profile, parse_config};

// Re-export unit types at config level
pub use units::{PhasePattern, Quadrant, Steps};
