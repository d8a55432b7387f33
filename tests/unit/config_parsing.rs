//! Unit tests for TOML configuration parsing.

use tray_stepper::config::{load_config, load_profile, Preset, SystemConfig};
use tray_stepper::error::{ConfigError, Error};
use tray_stepper::{MotorProfile, PhasePattern};

/// Test parsing a preset-only motor configuration from TOML.
#[test]
fn test_parse_preset_motor() {
    let toml_str = r#"
[motors.tray]
name = "Sorting tray"
preset = "small_stepper"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("tray").expect("Motor not found");

    assert_eq!(motor.name.as_str(), "Sorting tray");
    assert_eq!(motor.preset, Some(Preset::SmallStepper));
    assert!(motor.phase_table.is_none());
    assert_eq!(config.profile("tray").unwrap(), MotorProfile::small_stepper());
}

/// Test parsing a fully explicit motor without a preset.
#[test]
fn test_parse_explicit_motor() {
    let toml_str = r#"
[motors.bench]
name = "Bench"
phase_table = [0b110000, 0b000110, 0b101000, 0b000101]
steps_per_revolution = 400
ramp_steps = 10
cruise_steps = 60
start_delay_ms = 12
end_delay_ms = 3
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let profile = config.profile("bench").unwrap();

    assert_eq!(profile.steps_per_quarter(), 100);
    assert_eq!(profile.ramp_steps(), 10);
    assert_eq!(profile.cruise_steps(), 60);
    assert_eq!(profile.phase_table().forward(1), PhasePattern(0b000110));
}

/// Test that set fields override the preset and the rest is inherited.
#[test]
fn test_preset_override() {
    let toml_str = r#"
[motors.tray]
name = "Sorting tray"
preset = "large_stepper"
start_delay_ms = 30
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let profile = config.profile("tray").unwrap();
    let large = MotorProfile::large_stepper();

    assert_eq!(profile.start_delay_ms(), 30);
    assert_eq!(profile.end_delay_ms(), large.end_delay_ms());
    assert_eq!(profile.phase_table(), large.phase_table());
}

/// Test parsing several motors and listing them in file order.
#[test]
fn test_multiple_motors() {
    let toml_str = r#"
[motors.tray]
name = "Sorting tray"
preset = "large_stepper"

[motors.feeder]
name = "Feeder"
preset = "small_stepper"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let names: Vec<&str> = config.motor_names().collect();

    assert_eq!(names, ["tray", "feeder"]);
}

/// Test that an unknown preset name is a parse error.
#[test]
fn test_unknown_preset_rejected() {
    let toml_str = r#"
[motors.tray]
name = "Sorting tray"
preset = "medium_stepper"
"#;

    assert!(toml::from_str::<SystemConfig>(toml_str).is_err());
}

/// Test loading configuration from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("tray_stepper_load_config_test.toml");
    std::fs::write(
        &path,
        "[motors.tray]\nname = \"Sorting tray\"\npreset = \"large_stepper\"\n",
    )
    .unwrap();

    let config = load_config(&path).expect("Failed to load config");
    let profile = load_profile(&path, "tray");
    let missing = load_profile(&path, "feeder");
    std::fs::remove_file(&path).ok();

    assert!(config.motor("tray").is_some());
    assert_eq!(profile.unwrap(), MotorProfile::large_stepper());
    assert!(matches!(missing, Err(Error::Config(ConfigError::MotorNotFound(_)))));
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/tray_stepper.toml");

    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
