//! Property tests for the trapezoidal ramp.

use proptest::prelude::*;

use tray_stepper::{MotionPhase, MotorProfile, PhaseTable};

/// Any profile that passes validation, plus a move length.
fn valid_profile() -> impl Strategy<Value = (MotorProfile, u8)> {
    (1u32..=300)
        .prop_flat_map(|quarter| (Just(quarter), 0..=quarter))
        .prop_flat_map(|(quarter, cruise)| (Just(quarter), Just(cruise), 0..=cruise))
        .prop_flat_map(|(quarter, cruise, ramp)| {
            (Just(quarter), Just(cruise), Just(ramp), 1u32..=20, 0u32..=10, 1u8..=6)
        })
        .prop_map(|(quarter, cruise, ramp, end, slack, quadrants)| {
            let start = (end + ramp).saturating_sub(1).max(end) + slack;
            let profile =
                MotorProfile::new(PhaseTable::large_stepper(), quarter * 4, ramp, cruise, start, end)
                    .expect("strategy only yields valid profiles");
            (profile, quadrants)
        })
}

/// Ramp constants drawn over the whole `u32` range, valid or not.
fn extreme_constants() -> impl Strategy<Value = (u32, u32, u32, u32, u32, u8)> {
    (1u32..=u32::MAX / 4)
        .prop_flat_map(|quarter| (Just(quarter), 0..=quarter))
        .prop_flat_map(|(quarter, cruise)| (Just(quarter), Just(cruise), 0..=cruise))
        .prop_flat_map(|(quarter, cruise, ramp)| {
            (Just(quarter * 4), Just(ramp), Just(cruise), any::<u32>(), any::<u32>(), any::<u8>())
        })
}

proptest! {
    #[test]
    fn accepted_profiles_never_overflow(
        (spr, ramp_steps, cruise_steps, start, end, quadrants) in extreme_constants(),
    ) {
        let Ok(profile) =
            MotorProfile::new(PhaseTable::large_stepper(), spr, ramp_steps, cruise_steps, start, end)
        else {
            return Ok(());
        };

        let ramp = profile.ramp(quadrants);
        prop_assert_eq!(
            u64::from(ramp.total_steps),
            u64::from(profile.steps_per_quarter()) * u64::from(quadrants)
        );

        // Segment edges and the last step carry the extreme delays
        for step in [0, ramp.cruise_start, ramp.decel_start, ramp.total_steps.saturating_sub(1)] {
            if step < ramp.total_steps {
                prop_assert!(ramp.delay_at(step) >= profile.end_delay_ms());
            }
        }
    }

    #[test]
    fn delay_count_matches_step_count((profile, quadrants) in valid_profile()) {
        let ramp = profile.ramp(quadrants);
        let expected = profile.steps_per_quarter() * quadrants as u32;

        prop_assert_eq!(ramp.total_steps, expected);
        prop_assert_eq!(ramp.delays().count() as u32, expected);
    }

    #[test]
    fn no_step_faster_than_cruise((profile, quadrants) in valid_profile()) {
        let ramp = profile.ramp(quadrants);

        for (step, delay) in ramp.delays().enumerate() {
            prop_assert!(
                delay >= profile.end_delay_ms(),
                "step {} waits {} ms, cruise is {} ms",
                step,
                delay,
                profile.end_delay_ms()
            );
        }
    }

    #[test]
    fn segments_are_monotonic((profile, quadrants) in valid_profile()) {
        let ramp = profile.ramp(quadrants);
        let mut previous: Option<(MotionPhase, u32)> = None;

        for step in 0..ramp.total_steps {
            let phase = ramp.phase_at(step);
            let delay = ramp.delay_at(step);

            if let Some((prev_phase, prev_delay)) = previous {
                if prev_phase == phase {
                    match phase {
                        MotionPhase::Accelerating => prop_assert!(delay <= prev_delay),
                        MotionPhase::Cruising => prop_assert_eq!(delay, prev_delay),
                        MotionPhase::Decelerating => prop_assert!(delay >= prev_delay),
                        MotionPhase::Complete => unreachable!(),
                    }
                }
            }
            previous = Some((phase, delay));
        }

        prop_assert_eq!(ramp.phase_at(ramp.total_steps), MotionPhase::Complete);
    }

    #[test]
    fn single_quadrant_follows_step_index((profile, _quadrants) in valid_profile()) {
        let ramp = profile.ramp(1);

        for step in 0..ramp.total_steps {
            let expected = if step < profile.ramp_steps() {
                profile.start_delay_ms() - step
            } else if step < profile.cruise_steps() {
                profile.end_delay_ms()
            } else {
                step - profile.cruise_steps() + profile.end_delay_ms()
            };
            prop_assert_eq!(ramp.delay_at(step), expected);
        }
    }
}
