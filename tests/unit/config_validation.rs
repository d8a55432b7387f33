//! Unit tests for configuration validation.

use tray_stepper::config::{parse_config, validate_config, SystemConfig};
use tray_stepper::error::{ConfigError, Error};
use tray_stepper::{MotorProfile, PhaseTable};

fn motor_toml(fields: &str) -> String {
    format!("[motors.tray]\nname = \"Sorting tray\"\n{}\n", fields)
}

fn validate(fields: &str) -> Result<(), Error> {
    let config: SystemConfig = toml::from_str(&motor_toml(fields)).expect("Failed to parse TOML");
    validate_config(&config)
}

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    assert!(validate("preset = \"large_stepper\"").is_ok());
    assert!(validate("preset = \"small_stepper\"").is_ok());
}

/// Test that an empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
}

/// Test that a motor without preset must set every field.
#[test]
fn test_missing_field_without_preset() {
    let result = validate(
        "phase_table = [48, 40, 6, 5]\n\
         steps_per_revolution = 200\n\
         ramp_steps = 15\n\
         cruise_steps = 20\n\
         start_delay_ms = 20",
    );

    assert_eq!(result, Err(Error::Config(ConfigError::MissingField("end_delay_ms"))));
}

/// Test rejection of steps per revolution that do not split into quadrants.
#[test]
fn test_steps_per_revolution_not_quadrant_multiple() {
    let result = validate("preset = \"large_stepper\"\nsteps_per_revolution = 201");

    assert_eq!(
        result,
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(201)))
    );
}

/// Test rejection of a ramp longer than the cruise bound.
#[test]
fn test_ramp_exceeds_cruise() {
    let result = validate("preset = \"large_stepper\"\nramp_steps = 25\nstart_delay_ms = 40");

    assert_eq!(
        result,
        Err(Error::Config(ConfigError::RampExceedsCruise { ramp: 25, cruise: 20 }))
    );
}

/// Test rejection of a cruise bound past the end of the quadrant.
#[test]
fn test_cruise_exceeds_quarter() {
    let result = validate("preset = \"large_stepper\"\ncruise_steps = 60");

    assert_eq!(
        result,
        Err(Error::Config(ConfigError::CruiseExceedsQuarter { cruise: 60, quarter: 50 }))
    );
}

/// Test rejection of a zero cruise delay.
#[test]
fn test_zero_end_delay() {
    let result = validate("preset = \"small_stepper\"\nend_delay_ms = 0");

    assert_eq!(result, Err(Error::Config(ConfigError::ZeroEndDelay)));
}

/// Test rejection of a start delay the ramp would undercut.
#[test]
fn test_start_delay_too_short() {
    let result = validate("preset = \"large_stepper\"\nstart_delay_ms = 10");

    assert_eq!(
        result,
        Err(Error::Config(ConfigError::StartDelayTooShort { start: 10, minimum: 19 }))
    );
}

/// Test rejection of an empty or oversized phase table.
#[test]
fn test_phase_table_bounds() {
    assert_eq!(
        validate("preset = \"large_stepper\"\nphase_table = []"),
        Err(Error::Config(ConfigError::EmptyPhaseTable))
    );

    // Nine entries do not fit the table storage
    let oversized = motor_toml("preset = \"large_stepper\"\nphase_table = [1, 2, 3, 4, 5, 6, 7, 8, 9]");
    assert!(toml::from_str::<SystemConfig>(&oversized).is_err());
}

/// Test that parse_config validates after parsing.
#[test]
fn test_parse_config_validates() {
    let result = parse_config(&motor_toml("preset = \"large_stepper\"\nend_delay_ms = 0"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ZeroEndDelay))));
}

/// Test rejection of a quadrant size whose 255 quadrant move overflows the step count.
#[test]
fn test_step_count_overflow_rejected() {
    let result = MotorProfile::new(PhaseTable::large_stepper(), 4_000_000_000, 0, 0, 5, 5);

    assert_eq!(
        result,
        Err(Error::Config(ConfigError::StepCountOverflow { steps_per_quarter: 1_000_000_000 }))
    );
}

/// Test the largest quadrant size still counts a 255 quadrant move.
#[test]
fn test_largest_quadrant_size_accepted() {
    let profile = MotorProfile::new(PhaseTable::large_stepper(), 67_372_036, 0, 0, 5, 5).unwrap();
    let ramp = profile.ramp(u8::MAX);

    assert_eq!(ramp.total_steps, u32::MAX);
    assert_eq!(ramp.delay_at(u32::MAX - 1), 16_843_008 + 5);
}

/// Test rejection of a cruise delay whose deceleration ramp overflows.
#[test]
fn test_decel_delay_overflow_rejected() {
    let result = parse_config(&motor_toml(
        "preset = \"large_stepper\"\n\
         ramp_steps = 0\n\
         start_delay_ms = 4294967295\n\
         end_delay_ms = 4294967280",
    ));

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::DelayOverflow { end_delay: 4_294_967_280 }))
    ));
}

/// Test that the slowest accepted deceleration step sits exactly at u32::MAX.
#[test]
fn test_longest_decel_delay_accepted() {
    let profile =
        MotorProfile::new(PhaseTable::large_stepper(), 200, 15, 20, u32::MAX, u32::MAX - 29)
            .unwrap();

    assert_eq!(profile.ramp(1).delays().last(), Some(u32::MAX));
}

/// Test that a start delay bound beyond u32 is a config error, not a panic.
#[test]
fn test_start_delay_bound_overflow_rejected() {
    assert_eq!(
        MotorProfile::new(PhaseTable::large_stepper(), 200, 15, 20, u32::MAX, u32::MAX - 5),
        Err(Error::Config(ConfigError::DelayOverflow { end_delay: u32::MAX - 5 }))
    );
    assert_eq!(
        MotorProfile::new(PhaseTable::large_stepper(), 200, 50, 50, u32::MAX, u32::MAX),
        Err(Error::Config(ConfigError::DelayOverflow { end_delay: u32::MAX }))
    );
}
