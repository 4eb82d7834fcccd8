use super::*;

// =============================================================
// Whole-rupee conversion
// =============================================================

#[test]
fn ten_rupees_is_exactly_one_thousand_paise() {
    assert_eq!(rupees_to_paise(10), Ok(1000));
}

#[test]
fn zero_rupees_is_rejected() {
    assert!(rupees_to_paise(0).is_err());
}

#[test]
fn overflowing_rupees_is_rejected() {
    assert!(rupees_to_paise(u64::MAX).is_err());
}

// =============================================================
// String parsing
// =============================================================

#[test]
fn integer_string_converts_exactly() {
    assert_eq!(parse_rupees_to_paise("10"), Ok(1000));
    assert_eq!(parse_rupees_to_paise(" 250 "), Ok(25_000));
}

#[test]
fn two_decimal_string_has_no_float_drift() {
    assert_eq!(parse_rupees_to_paise("19.99"), Ok(1999));
    assert_eq!(parse_rupees_to_paise("0.01"), Ok(1));
    assert_eq!(parse_rupees_to_paise("1.10"), Ok(110));
}

#[test]
fn single_decimal_digit_means_tens_of_paise() {
    assert_eq!(parse_rupees_to_paise("19.9"), Ok(1990));
    assert_eq!(parse_rupees_to_paise("0.5"), Ok(50));
}

#[test]
fn bare_fraction_styles_parse() {
    assert_eq!(parse_rupees_to_paise(".50"), Ok(50));
    assert_eq!(parse_rupees_to_paise("5."), Ok(500));
}

#[test]
fn more_than_two_decimals_is_rejected_not_rounded() {
    assert!(parse_rupees_to_paise("19.999").is_err());
}

#[test]
fn zero_and_negative_amounts_are_rejected() {
    assert!(parse_rupees_to_paise("0").is_err());
    assert!(parse_rupees_to_paise("0.00").is_err());
    assert!(parse_rupees_to_paise("-5").is_err());
}

#[test]
fn malformed_amounts_are_rejected() {
    assert!(parse_rupees_to_paise("").is_err());
    assert!(parse_rupees_to_paise("ten").is_err());
    assert!(parse_rupees_to_paise("1,000").is_err());
    assert!(parse_rupees_to_paise("1.2.3").is_err());
    assert!(parse_rupees_to_paise(".").is_err());
}

// =============================================================
// Display formatting
// =============================================================

#[test]
fn format_paise_drops_zero_fraction() {
    assert_eq!(format_paise(1000), "\u{20b9}10");
}

#[test]
fn format_paise_pads_fraction() {
    assert_eq!(format_paise(1999), "\u{20b9}19.99");
    assert_eq!(format_paise(105), "\u{20b9}1.05");
}

#[test]
fn parse_then_format_round_trips() {
    let paise = parse_rupees_to_paise("19.99").unwrap();
    assert_eq!(format_paise(paise), "\u{20b9}19.99");
}
