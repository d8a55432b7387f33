//! Builder pattern for StepperMotor.

use embedded_hal::delay::DelayNs;

use crate::config::{MotorProfile, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::StepperMotor;
use super::io::{HomingSensor, PhaseOutput};
use super::sequencer::StepCursor;
use super::state::Unhomed;

/// Builder for creating StepperMotor instances.
pub struct StepperMotorBuilder<OUT, SENSOR, DELAY>
where
    OUT: PhaseOutput,
    SENSOR: HomingSensor,
    DELAY: DelayNs,
{
    output: Option<OUT>,
    sensor: Option<SENSOR>,
    delay: Option<DELAY>,
    name: Option<heapless::String<32>>,
    profile: Option<MotorProfile>,
    initial_cursor: usize,
}

impl<OUT, SENSOR, DELAY> Default for StepperMotorBuilder<OUT, SENSOR, DELAY>
where
    OUT: PhaseOutput,
    SENSOR: HomingSensor,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<OUT, SENSOR, DELAY> StepperMotorBuilder<OUT, SENSOR, DELAY>
where
    OUT: PhaseOutput,
    SENSOR: HomingSensor,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            output: None,
            sensor: None,
            delay: None,
            name: None,
            profile: None,
            initial_cursor: 0,
        }
    }

    /// Set the coil drive output.
    pub fn output(mut self, output: OUT) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the homing sensor.
    pub fn sensor(mut self, sensor: SENSOR) -> Self {
        self.sensor = Some(sensor);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the hardware profile.
    pub fn profile(mut self, profile: MotorProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set the phase index the coils were last left at (defaults to 0).
    pub fn initial_cursor(mut self, cursor: usize) -> Self {
        self.initial_cursor = cursor;
        self
    }

    /// Configure from SystemConfig by motor name.
    ///
    /// # Errors
    ///
    /// Returns an error if the motor is missing or its profile is invalid.
    pub fn from_config(mut self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let profile = config.profile(motor_name)?;
        // Checked by config.profile above
        if let Some(motor) = config.motor(motor_name) {
            self.name = Some(motor.name.clone());
        }
        self.profile = Some(profile);
        Ok(self)
    }

    /// Build the StepperMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the initial cursor
    /// lies outside the phase table.
    pub fn build(self) -> Result<StepperMotor<OUT, SENSOR, DELAY, Unhomed>> {
        let output = self.output.ok_or(Error::Config(ConfigError::MissingField("output")))?;
        let sensor = self.sensor.ok_or(Error::Config(ConfigError::MissingField("sensor")))?;
        let delay = self.delay.ok_or(Error::Config(ConfigError::MissingField("delay")))?;
        let profile = self
            .profile
            .ok_or(Error::Config(ConfigError::MissingField("profile")))?;

        let name = self.name.unwrap_or_else(|| {
            let mut name = heapless::String::new();
            let _ = name.push_str("tray");
            name
        });

        let cursor = StepCursor::new(self.initial_cursor, profile.phase_table().len())?;

        Ok(StepperMotor::new(output, sensor, delay, profile, cursor, name))
    }
}
