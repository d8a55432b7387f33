//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::phase::PhaseTable;
use super::units::QUADRANTS_PER_REVOLUTION;
use super::SystemConfig;

/// Validate a system configuration.
///
/// Every motor entry must resolve to a valid [`MotorProfile`](super::MotorProfile).
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, motor) in config.motors.iter() {
        motor.to_profile()?;
    }

    Ok(())
}

/// Check ramp constants against each other.
///
/// Checks:
/// - Steps per revolution splits into four equal quadrants
/// - `ramp_steps <= cruise_steps <= steps_per_quarter`
/// - A move of `u8::MAX` quadrants counts its steps in `u32`
/// - Cruise delay is non-zero
/// - The slowest deceleration step fits in `u32` milliseconds
/// - The acceleration ramp, which drops 1 ms per step from the start delay,
///   never reaches below the cruise delay
pub(crate) fn validate_profile(
    phase_table: &PhaseTable,
    steps_per_revolution: u32,
    ramp_steps: u32,
    cruise_steps: u32,
    start_delay_ms: u32,
    end_delay_ms: u32,
) -> Result<()> {
    if phase_table.is_empty() {
        return Err(Error::Config(ConfigError::EmptyPhaseTable));
    }

    let quadrants = QUADRANTS_PER_REVOLUTION as u32;
    if steps_per_revolution == 0 || steps_per_revolution % quadrants != 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            steps_per_revolution,
        )));
    }
    let steps_per_quarter = steps_per_revolution / quadrants;

    if ramp_steps > cruise_steps {
        return Err(Error::Config(ConfigError::RampExceedsCruise {
            ramp: ramp_steps,
            cruise: cruise_steps,
        }));
    }

    if cruise_steps > steps_per_quarter {
        return Err(Error::Config(ConfigError::CruiseExceedsQuarter {
            cruise: cruise_steps,
            quarter: steps_per_quarter,
        }));
    }

    if steps_per_quarter.checked_mul(u8::MAX as u32).is_none() {
        return Err(Error::Config(ConfigError::StepCountOverflow { steps_per_quarter }));
    }

    if end_delay_ms == 0 {
        return Err(Error::Config(ConfigError::ZeroEndDelay));
    }

    // Deceleration peaks at the last normalized step, steps_per_quarter - 1.
    let decel_rise = steps_per_quarter.saturating_sub(1).saturating_sub(cruise_steps);
    if end_delay_ms.checked_add(decel_rise).is_none() {
        return Err(Error::Config(ConfigError::DelayOverflow { end_delay: end_delay_ms }));
    }

    // Last ramp step waits start - (ramp - 1); it must not undercut cruise.
    let Some(minimum) = end_delay_ms.checked_add(ramp_steps.saturating_sub(1)) else {
        return Err(Error::Config(ConfigError::DelayOverflow { end_delay: end_delay_ms }));
    };
    if start_delay_ms < minimum {
        return Err(Error::Config(ConfigError::StartDelayTooShort {
            start: start_delay_ms,
            minimum,
        }));
    }

    Ok(())
}
