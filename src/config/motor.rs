//! Motor configuration from TOML.

use heapless::{String, Vec};
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

use super::phase::{PhaseTable, MAX_PHASES};
use super::profile::MotorProfile;

/// Built-in hardware variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// 2048 steps/rev geared stepper.
    SmallStepper,
    /// 200 steps/rev bipolar stepper.
    LargeStepper,
}

impl Preset {
    /// Profile carried by this preset.
    pub fn profile(self) -> MotorProfile {
        match self {
            Preset::SmallStepper => MotorProfile::small_stepper(),
            Preset::LargeStepper => MotorProfile::large_stepper(),
        }
    }
}

/// Complete motor configuration from TOML.
///
/// Every drive field is optional when a preset is given; fields that are set
/// override the preset.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Hardware variant supplying defaults.
    #[serde(default)]
    pub preset: Option<Preset>,

    /// Coil patterns in forward order.
    #[serde(default)]
    pub phase_table: Option<Vec<u8, MAX_PHASES>>,

    /// Full steps per revolution.
    #[serde(default)]
    pub steps_per_revolution: Option<u32>,

    /// Acceleration segment length, per quadrant.
    #[serde(default)]
    pub ramp_steps: Option<u32>,

    /// End of the cruise segment, per quadrant.
    #[serde(default)]
    pub cruise_steps: Option<u32>,

    /// Delay of the first step and homing cadence, in milliseconds.
    #[serde(default)]
    pub start_delay_ms: Option<u32>,

    /// Cruise delay in milliseconds.
    #[serde(default)]
    pub end_delay_ms: Option<u32>,
}

impl MotorConfig {
    /// Resolve preset and overrides into a validated profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if a field is unset and there is no
    /// preset, or any validation error from [`MotorProfile::new`].
    pub fn to_profile(&self) -> Result<MotorProfile> {
        let base = self.preset.map(Preset::profile);

        let phase_table = match (&self.phase_table, &base) {
            (Some(bits), _) => PhaseTable::new(bits)?,
            (None, Some(p)) => p.phase_table().clone(),
            (None, None) => return Err(missing("phase_table")),
        };

        let field = |value: Option<u32>, from_base: fn(&MotorProfile) -> u32, name: &'static str| {
            value
                .or_else(|| base.as_ref().map(from_base))
                .ok_or_else(|| missing(name))
        };

        MotorProfile::new(
            phase_table,
            field(
                self.steps_per_revolution,
                MotorProfile::steps_per_revolution,
                "steps_per_revolution",
            )?,
            field(self.ramp_steps, MotorProfile::ramp_steps, "ramp_steps")?,
            field(self.cruise_steps, MotorProfile::cruise_steps, "cruise_steps")?,
            field(self.start_delay_ms, MotorProfile::start_delay_ms, "start_delay_ms")?,
            field(self.end_delay_ms, MotorProfile::end_delay_ms, "end_delay_ms")?,
        )
    }
}

fn missing(field: &'static str) -> Error {
    Error::Config(ConfigError::MissingField(field))
}
