//! Property tests for step sequencing over phase tables.

use proptest::prelude::*;

use tray_stepper::{Direction, PhaseTable, StepCursor};

fn table() -> impl Strategy<Value = PhaseTable> {
    proptest::collection::vec(any::<u8>(), 1..=8)
        .prop_map(|bits| PhaseTable::new(&bits).expect("length within bounds"))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Clockwise), Just(Direction::CounterClockwise)]
}

proptest! {
    #[test]
    fn cursor_stays_in_range(
        table in table(),
        start in 0usize..8,
        moves in proptest::collection::vec(direction(), 0..64),
    ) {
        let mut cursor = StepCursor::new(start % table.len(), table.len()).unwrap();

        for direction in moves {
            let (next, pattern) = cursor.advance(direction, &table);
            prop_assert!(next.value() < table.len());
            prop_assert_eq!(pattern, table.forward(next.value()));
            cursor = next;
        }
    }

    #[test]
    fn opposite_steps_cancel(
        table in table(),
        start in 0usize..8,
        count in 0usize..40,
    ) {
        let start = StepCursor::new(start % table.len(), table.len()).unwrap();
        let mut cursor = start;

        for _ in 0..count {
            cursor = cursor.advance(Direction::Clockwise, &table).0;
        }
        prop_assert_eq!(cursor.value(), (start.value() + count) % table.len());

        for _ in 0..count {
            cursor = cursor.advance(Direction::CounterClockwise, &table).0;
        }
        prop_assert_eq!(cursor, start);
    }

    #[test]
    fn homing_cursor_is_count_modulo_length(count in any::<u32>(), len in 1usize..=8) {
        let cursor = StepCursor::after_homing(count as u64, len);
        prop_assert_eq!(cursor.value(), count as usize % len);
    }
}

#[test]
fn out_of_range_cursor_rejected() {
    assert!(StepCursor::new(4, 4).is_err());
    assert!(StepCursor::new(3, 4).is_ok());
}
