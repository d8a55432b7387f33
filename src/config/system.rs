//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

use super::motor::MotorConfig;
use super::profile::MotorProfile;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named motor configurations.
    pub motors: FnvIndexMap<String<32>, MotorConfig, 8>,
}

impl SystemConfig {
    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Resolve a motor entry into its validated profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MotorNotFound` for unknown names, or the
    /// validation error of the entry.
    pub fn profile(&self, name: &str) -> Result<MotorProfile> {
        self.motor(name)
            .ok_or_else(|| {
                Error::Config(ConfigError::MotorNotFound(
                    String::try_from(name).unwrap_or_default(),
                ))
            })?
            .to_profile()
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            motors: FnvIndexMap::new(),
        }
    }
}
