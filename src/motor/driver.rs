//! Stepper motor driver.
//!
//! Generic over the coil output, homing sensor and embedded-hal delay, with
//! type-state tracking of whether the tray reference is known.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;

use crate::config::units::Quadrant;
use crate::config::MotorProfile;
use crate::error::{Error, MotorError, Result};
use crate::motion::{Direction, MotionExecutor};

use super::builder::StepperMotorBuilder;
use super::io::{HomingSensor, PhaseOutput};
use super::position::Position;
use super::sequencer::StepCursor;
use super::state::{Homed, MotorState, StateName, Unhomed};

/// Stepper motor driver with type-state safety.
///
/// Generic over:
/// - `OUT`: coil drive output (must implement [`PhaseOutput`])
/// - `SENSOR`: homing flag (must implement [`HomingSensor`])
/// - `DELAY`: Delay provider (must implement `DelayNs`)
/// - `STATE`: Type-state marker (defaults to `Unhomed`)
///
/// The motor owns the step cursor, so every rotation and homing run takes
/// `&mut self` or `self` and calls cannot overlap.
pub struct StepperMotor<OUT, SENSOR, DELAY, STATE = Unhomed>
where
    OUT: PhaseOutput,
    SENSOR: HomingSensor,
    DELAY: DelayNs,
    STATE: MotorState,
{
    /// Coil drive lines.
    output: OUT,

    /// Homing flag.
    sensor: SENSOR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Phase table and ramp constants.
    profile: MotorProfile,

    /// Last energized phase.
    cursor: StepCursor,

    /// Tray quadrant, meaningful once homed.
    position: Position,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Type-state marker.
    _state: PhantomData<STATE>,
}

impl<OUT, SENSOR, DELAY, STATE> StepperMotor<OUT, SENSOR, DELAY, STATE>
where
    OUT: PhaseOutput,
    SENSOR: HomingSensor,
    DELAY: DelayNs,
    STATE: MotorState + StateName,
{
    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the step cursor.
    #[inline]
    pub fn cursor(&self) -> StepCursor {
        self.cursor
    }

    /// Get the hardware profile.
    #[inline]
    pub fn profile(&self) -> &MotorProfile {
        &self.profile
    }

    /// Get the current state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        STATE::name()
    }

    /// Rotate `quadrants` quarter turns with the trapezoidal ramp (blocking).
    ///
    /// Issues exactly `quadrants × steps_per_quarter` phase writes, each
    /// followed by its ramp delay. Zero quadrants does nothing.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a phase write fails. The move stops
    /// at that step and the tray quadrant is no longer reliable.
    pub fn rotate(&mut self, direction: Direction, quadrants: u8) -> Result<()> {
        if quadrants == 0 {
            return Ok(());
        }

        let executor = MotionExecutor::new(self.profile.ramp(quadrants));

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: rotate {} x{} ({} steps)",
            self.name.as_str(),
            direction,
            quadrants,
            executor.total_steps()
        );

        for scheduled in executor {
            self.step(direction)?;
            self.delay.delay_ms(scheduled.delay_ms);
        }

        self.position.rotate(direction, quadrants);
        Ok(())
    }

    /// Find the reference position (blocking).
    ///
    /// Steps clockwise at the start delay cadence until the sensor reports
    /// homed. The sensor is read before every step, so an already homed tray
    /// does not move. On success the cursor becomes the step count modulo
    /// the table length and the tray is at quadrant 0.
    ///
    /// There is no timeout; a sensor that never asserts keeps the motor
    /// turning. Callers needing a bound wrap this with a watchdog.
    ///
    /// # Errors
    ///
    /// Returns the motor unchanged in type alongside `MotorError::PinError`
    /// or `MotorError::SensorError`.
    pub fn home(
        mut self,
    ) -> core::result::Result<StepperMotor<OUT, SENSOR, DELAY, Homed>, (Self, Error)> {
        match self.seek_home() {
            Ok(_steps) => {
                #[cfg(feature = "defmt")]
                defmt::info!("{}: homed after {} steps", self.name.as_str(), _steps);

                Ok(self.into_state(Position::home()))
            }
            Err(e) => Err((self, e)),
        }
    }

    /// Release the hardware resources.
    pub fn release(self) -> (OUT, SENSOR, DELAY) {
        (self.output, self.sensor, self.delay)
    }

    fn seek_home(&mut self) -> Result<u64> {
        let mut steps: u64 = 0;

        while !self
            .sensor
            .is_homed()
            .map_err(|_| MotorError::SensorError)?
        {
            self.step(Direction::Clockwise)?;
            self.delay.delay_ms(self.profile.start_delay_ms());
            steps += 1;
        }

        self.cursor = StepCursor::after_homing(steps, self.profile.phase_table().len());
        Ok(steps)
    }

    /// Energize the next phase in `direction`; the cursor only moves once
    /// the write succeeded.
    fn step(&mut self, direction: Direction) -> Result<()> {
        let (next, pattern) = self.cursor.advance(direction, self.profile.phase_table());
        self.output
            .write_phase(pattern)
            .map_err(|_| MotorError::PinError)?;
        self.cursor = next;
        Ok(())
    }

    fn into_state<S: MotorState>(self, position: Position) -> StepperMotor<OUT, SENSOR, DELAY, S> {
        StepperMotor {
            output: self.output,
            sensor: self.sensor,
            delay: self.delay,
            profile: self.profile,
            cursor: self.cursor,
            position,
            name: self.name,
            _state: PhantomData,
        }
    }
}

impl<OUT, SENSOR, DELAY> StepperMotor<OUT, SENSOR, DELAY, Unhomed>
where
    OUT: PhaseOutput,
    SENSOR: HomingSensor,
    DELAY: DelayNs,
{
    /// Start building a motor.
    pub fn builder() -> StepperMotorBuilder<OUT, SENSOR, DELAY> {
        StepperMotorBuilder::new()
    }

    /// Create a new motor in the Unhomed state.
    pub(crate) fn new(
        output: OUT,
        sensor: SENSOR,
        delay: DELAY,
        profile: MotorProfile,
        cursor: StepCursor,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            output,
            sensor,
            delay,
            profile,
            cursor,
            position: Position::home(),
            name,
            _state: PhantomData,
        }
    }
}

impl<OUT, SENSOR, DELAY> StepperMotor<OUT, SENSOR, DELAY, Homed>
where
    OUT: PhaseOutput,
    SENSOR: HomingSensor,
    DELAY: DelayNs,
{
    /// Quadrant currently facing the chute.
    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.position.quadrant()
    }

    /// Turn the tray the short way round to `target` (blocking).
    ///
    /// Returns the direction and quadrant count used.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a phase write fails.
    pub fn move_to(&mut self, target: Quadrant) -> Result<(Direction, u8)> {
        let (direction, quadrants) = self.position.path_to(target);
        self.rotate(direction, quadrants)?;
        Ok((direction, quadrants))
    }

    /// Forget the reference, e.g. after a missed step was detected.
    pub fn unhome(self) -> StepperMotor<OUT, SENSOR, DELAY, Unhomed> {
        self.into_state(Position::home())
    }
}
