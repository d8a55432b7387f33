//! Platform seams: coil drive output and homing sensor.
//!
//! The driver only talks to these two traits. Adapters over embedded-hal
//! pins cover the common wiring; anything else (a port register, a test
//! recorder) implements the traits directly.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::PhasePattern;

/// Applies phase patterns to the coil drive lines.
pub trait PhaseOutput {
    /// Error raised by the underlying hardware.
    type Error: core::fmt::Debug;

    /// Energize exactly the lines set in `pattern`.
    fn write_phase(&mut self, pattern: PhasePattern) -> Result<(), Self::Error>;
}

/// Reads the homing flag.
pub trait HomingSensor {
    /// Error raised by the underlying hardware.
    type Error: core::fmt::Debug;

    /// `true` once the tray sits at its reference position.
    fn is_homed(&mut self) -> Result<bool, Self::Error>;
}

impl<T: PhaseOutput + ?Sized> PhaseOutput for &mut T {
    type Error = T::Error;

    fn write_phase(&mut self, pattern: PhasePattern) -> Result<(), Self::Error> {
        (**self).write_phase(pattern)
    }
}

impl<T: HomingSensor + ?Sized> HomingSensor for &mut T {
    type Error = T::Error;

    fn is_homed(&mut self) -> Result<bool, Self::Error> {
        (**self).is_homed()
    }
}

/// Flag set from an interrupt handler.
impl HomingSensor for &AtomicBool {
    type Error = core::convert::Infallible;

    fn is_homed(&mut self) -> Result<bool, Self::Error> {
        Ok(self.load(Ordering::Acquire))
    }
}

/// Drive lines on individual output pins; bit `k` of a pattern drives `pins[k]`.
#[derive(Debug)]
pub struct PinPhaseOutput<P, const LINES: usize> {
    pins: [P; LINES],
}

impl<P: OutputPin, const LINES: usize> PinPhaseOutput<P, LINES> {
    /// Wrap the drive pins, least significant line first.
    pub fn new(pins: [P; LINES]) -> Self {
        Self { pins }
    }

    /// Release the pins.
    pub fn release(self) -> [P; LINES] {
        self.pins
    }
}

impl<P: OutputPin, const LINES: usize> PhaseOutput for PinPhaseOutput<P, LINES> {
    type Error = P::Error;

    fn write_phase(&mut self, pattern: PhasePattern) -> Result<(), Self::Error> {
        for (line, pin) in self.pins.iter_mut().enumerate() {
            if pattern.is_active(line) {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }
}

/// Homing switch on an input pin.
#[derive(Debug)]
pub struct PinSensor<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> PinSensor<P> {
    /// Switch reads high when homed.
    pub fn active_high(pin: P) -> Self {
        Self { pin, active_low: false }
    }

    /// Switch reads low when homed (pulled-up opto or reed switch).
    pub fn active_low(pin: P) -> Self {
        Self { pin, active_low: true }
    }

    /// Release the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> HomingSensor for PinSensor<P> {
    type Error = P::Error;

    fn is_homed(&mut self) -> Result<bool, Self::Error> {
        if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        }
    }
}
