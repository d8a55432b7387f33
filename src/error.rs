//! Error types for tray-stepper.
//!
//! Provides unified error handling across configuration, motor control, and state dispatch.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all tray-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
    /// State dispatcher error
    Dispatch(DispatchError),
}

/// Configuration-related errors.
///
/// All of these are raised while a profile is being built or a configuration
/// is being loaded, never while the motor is stepping.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// A required profile field is missing and no preset supplies it
    MissingField(&'static str),
    /// Phase table has no entries
    EmptyPhaseTable,
    /// Phase table has more entries than supported
    PhaseTableTooLong(usize),
    /// Steps per revolution is zero or not divisible into four quadrants
    InvalidStepsPerRevolution(u32),
    /// Acceleration ramp ends after the cruise segment
    RampExceedsCruise {
        /// Ramp length in steps per quadrant
        ramp: u32,
        /// Cruise end in steps per quadrant
        cruise: u32,
    },
    /// Cruise segment ends after the last step of a quadrant
    CruiseExceedsQuarter {
        /// Cruise end in steps per quadrant
        cruise: u32,
        /// Steps per quarter revolution
        quarter: u32,
    },
    /// A move of `u8::MAX` quadrants would overflow the step counter
    StepCountOverflow {
        /// Steps per quarter revolution
        steps_per_quarter: u32,
    },
    /// Cruise delay must be at least one millisecond
    ZeroEndDelay,
    /// A ramp delay would not fit in `u32` milliseconds
    DelayOverflow {
        /// Configured cruise delay in milliseconds
        end_delay: u32,
    },
    /// Start delay too short for the ramp to stay at or above cruise delay
    StartDelayTooShort {
        /// Configured start delay in milliseconds
        start: u32,
        /// Smallest start delay that keeps the ramp valid
        minimum: u32,
    },
    /// Initial step cursor outside the phase table
    CursorOutOfRange {
        /// Requested cursor
        cursor: usize,
        /// Phase table length
        len: usize,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Writing a phase pattern to the drive lines failed
    PinError,
    /// Reading the homing sensor failed
    SensorError,
    /// Tray quadrant outside 0..4
    InvalidQuadrant(u8),
}

/// State dispatcher errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// Flag word contains bits that map to no state
    UnknownStateBits(u8),
    /// Pending states were still present after the iteration budget ran out
    Budget {
        /// Number of handlers run
        iterations: u32,
        /// Flags still pending
        pending: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Dispatch(e) => write!(f, "Dispatch error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::MissingField(field) => {
                write!(f, "Missing field '{}' (set it or choose a preset)", field)
            }
            ConfigError::EmptyPhaseTable => write!(f, "Phase table is empty"),
            ConfigError::PhaseTableTooLong(len) => {
                write!(f, "Phase table has {} entries, maximum is 8", len)
            }
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be a non-zero multiple of 4", v)
            }
            ConfigError::RampExceedsCruise { ramp, cruise } => {
                write!(f, "Ramp steps ({}) must not exceed cruise steps ({})", ramp, cruise)
            }
            ConfigError::CruiseExceedsQuarter { cruise, quarter } => {
                write!(f, "Cruise steps ({}) must not exceed steps per quarter ({})", cruise, quarter)
            }
            ConfigError::StepCountOverflow { steps_per_quarter } => write!(
                f,
                "{} steps per quarter overflows the step count of a 255 quadrant move",
                steps_per_quarter
            ),
            ConfigError::ZeroEndDelay => write!(f, "End delay must be at least 1 ms"),
            ConfigError::DelayOverflow { end_delay } => {
                write!(f, "End delay {} ms too long, ramp delays overflow", end_delay)
            }
            ConfigError::StartDelayTooShort { start, minimum } => {
                write!(f, "Start delay {} ms too short, minimum is {} ms", start, minimum)
            }
            ConfigError::CursorOutOfRange { cursor, len } => {
                write!(f, "Step cursor {} outside phase table of length {}", cursor, len)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::SensorError => write!(f, "Homing sensor read failed"),
            MotorError::InvalidQuadrant(q) => write!(f, "Invalid tray quadrant {}. Must be 0-3", q),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnknownStateBits(bits) => {
                write!(f, "Unknown state bits: {:#010b}", bits)
            }
            DispatchError::Budget { iterations, pending } => {
                write!(f, "States {:#010b} still pending after {} handlers", pending, iterations)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<DispatchError> for Error {
    fn from(e: DispatchError) -> Self {
        Error::Dispatch(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for DispatchError {}
