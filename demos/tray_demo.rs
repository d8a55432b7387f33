//! Sorting tray example.
//!
//! Loads the tray motor from TOML, homes it, then runs the sorter states
//! through the dispatcher for a few objects.
//!
//! The coil pins are simulated; the homing sensor is a flag that a thread
//! sets after a short while, standing in for the sensor interrupt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tray_stepper::state::Homed;
use tray_stepper::{
    parse_config, Dispatcher, HomingSensor, PinPhaseOutput, Quadrant, StateFlags, StateHandler,
    StepperMotor, StepperMotorBuilder, SystemState,
};

/// Delay provider backed by thread sleep.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real code, this would use hardware timer
        thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// Simulated coil pin.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

/// Homing flag shared with the "interrupt" thread.
struct SharedFlag(Arc<AtomicBool>);

impl HomingSensor for SharedFlag {
    type Error = core::convert::Infallible;

    fn is_homed(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.load(Ordering::Acquire))
    }
}

type Tray = StepperMotor<PinPhaseOutput<MockPin, 6>, SharedFlag, SleepDelay, Homed>;

/// Sorter application state.
struct Sorter {
    tray: Tray,
    objects: &'static [u8],
    sorted: usize,
    bin: Quadrant,
}

impl StateHandler for Sorter {
    fn handle(&mut self, state: SystemState, flags: &mut StateFlags) -> tray_stepper::Result<()> {
        match state {
            SystemState::Init => flags.trigger(SystemState::Idle),
            SystemState::Idle => {
                if self.sorted < self.objects.len() {
                    flags.trigger(SystemState::NewObject);
                }
            }
            SystemState::NewObject => {
                println!("Object {} detected", self.sorted);
                flags.trigger(SystemState::Classify);
            }
            SystemState::Classify => {
                self.bin = Quadrant::new(self.objects[self.sorted] % 4)?;
                println!("  classified into bin {}", self.bin.value());
                flags.trigger(SystemState::PositionTray);
            }
            SystemState::PositionTray => {
                let (direction, quadrants) = self.tray.move_to(self.bin)?;
                println!("  tray turned {:?} x{}", direction, quadrants);
                self.sorted += 1;
                flags.trigger(SystemState::Idle);
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Sorting Tray Example ===\n");

    let toml_content = r#"
[motors.tray]
name = "Sorting tray"
preset = "large_stepper"
start_delay_ms = 22
"#;

    let config = parse_config(toml_content)?;
    let profile = config.profile("tray")?;

    println!("Steps per quadrant: {}", profile.steps_per_quarter());
    println!(
        "Estimated quarter turn: {} ms",
        profile.ramp(1).estimated_duration_ms()
    );
    println!(
        "Estimated half turn: {} ms",
        profile.ramp(2).estimated_duration_ms()
    );

    // Simulated sensor interrupt fires after a short search
    let homed = Arc::new(AtomicBool::new(false));
    let irq = {
        let homed = Arc::clone(&homed);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(150));
            homed.store(true, Ordering::Release);
        })
    };

    let motor = StepperMotorBuilder::new()
        .from_config(&config, "tray")?
        .output(PinPhaseOutput::new(core::array::from_fn(|_| MockPin::new())))
        .sensor(SharedFlag(homed))
        .delay(SleepDelay)
        .build()?;

    println!("\nMotor created: {}", motor.name());
    println!("State: {}", motor.state_name());

    let tray = motor.home().map_err(|(_, e)| e)?;
    irq.join().ok();
    println!("State: {} (cursor {})", tray.state_name(), tray.cursor().value());

    let mut sorter = Sorter {
        tray,
        objects: &[2, 3, 3, 0, 1],
        sorted: 0,
        bin: Quadrant::HOME,
    };

    println!("\n=== Sorting ===");
    let handled = Dispatcher::new().run_pending(&mut sorter, 64)?;

    let (output, _, _) = sorter.tray.release();
    let lit = output.release().iter().filter(|pin| pin.state).count();
    println!("\nHandled {} states, {} coil lines left energized", handled, lit);
    println!("\n=== Example Complete ===");

    Ok(())
}
