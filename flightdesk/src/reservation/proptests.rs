//! Property-based tests for reservation field checks.

use super::{is_valid_date_shape, ReservationFields};
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,12}( [A-Za-z0-9]{1,12})?"
}

fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Any ten characters with dashes at positions 5 and 8 pass the shape check
    #[test]
    fn dashed_ten_chars_pass(y in "[0-9a-z]{4}", m in "[0-9a-z]{2}", d in "[0-9a-z]{2}") {
        let date = format!("{y}-{m}-{d}");
        prop_assert!(is_valid_date_shape(&date));
    }

    // Any other length fails regardless of content
    #[test]
    fn wrong_length_fails(date in "[0-9-]{0,20}") {
        prop_assume!(date.chars().count() != 10);
        prop_assert!(!is_valid_date_shape(&date));
    }

    // Trimmed input round-trips through from_input and validates
    #[test]
    fn padded_input_is_trimmed(
        name in field_strategy(),
        flight in field_strategy(),
        seat in field_strategy(),
        pad in padding_strategy(),
    ) {
        let padded_name = format!("{pad}{name}{pad}");
        let padded_flight = format!("{pad}{flight}");
        let padded_seat = format!("{seat}{pad}");
        let fields = ReservationFields::from_input(
            &padded_name,
            &padded_flight,
            "LHR",
            "JFK",
            "2024-03-01",
            &padded_seat,
        );
        prop_assert_eq!(&fields.name, &name);
        prop_assert_eq!(&fields.flight_number, &flight);
        prop_assert_eq!(&fields.seat_number, &seat);
        prop_assert!(fields.validate().is_ok());
    }

    // Blanking any single field makes validation name that field
    #[test]
    fn blank_field_is_reported(index in 0usize..6, blank in "[ \t]{0,3}") {
        let mut values = ["Ada", "BA200", "LHR", "JFK", "2024-03-01", "12A"].map(String::from);
        values[index] = blank;
        let fields = ReservationFields::new(
            values[0].clone(),
            values[1].clone(),
            values[2].clone(),
            values[3].clone(),
            values[4].clone(),
            values[5].clone(),
        );
        let err = fields.validate().unwrap_err();
        prop_assert_eq!(err.field, super::FIELD_NAMES[index]);
    }
}
