//! Unit test harness for tray-stepper.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod ramp_properties;
mod sequencer_properties;
