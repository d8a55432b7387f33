//! Configuration loading from files (std only).

use core::fmt::Write;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::profile::MotorProfile;
use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use tray_stepper::load_config;
///
/// let config = load_config("tray.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::IoError(bounded(format_args!(
            "{}: {}",
            path.display(),
            e
        ))))
    })?;

    parse_config(&content)
}

/// Load a file and resolve the profile of one motor.
///
/// # Errors
///
/// Returns an error if loading fails or `motor` is not configured.
pub fn load_profile<P: AsRef<Path>>(path: P, motor: &str) -> Result<MotorProfile> {
    load_config(path)?.profile(motor)
}

/// Parse configuration from a TOML string.
///
/// Every motor entry is resolved and validated before the configuration is
/// returned.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or any motor fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = match e.span() {
            Some(span) => bounded(format_args!("{} (at byte {})", e.message(), span.start)),
            None => bounded(format_args!("{}", e.message())),
        };
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

/// Format into a fixed-capacity message, cutting it short if needed.
fn bounded<const N: usize>(args: core::fmt::Arguments<'_>) -> heapless::String<N> {
    struct Truncating<'a, const N: usize>(&'a mut heapless::String<N>);

    impl<const N: usize> Write for Truncating<'_, N> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            for c in s.chars() {
                if self.0.push(c).is_err() {
                    break;
                }
            }
            Ok(())
        }
    }

    let mut msg = heapless::String::new();
    let _ = Truncating(&mut msg).write_fmt(args);
    msg
}
