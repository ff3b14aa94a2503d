use super::*;
use crate::unit::{GIGABYTE, KILOBYTE, TERABYTE};

const MB: i64 = MEGABYTE as i64;

#[test]
fn parses_short_units() {
    assert_eq!(to_bytes("5B"), Ok(5));
    assert_eq!(to_bytes("5K"), Ok(5 * KILOBYTE as i64));
    assert_eq!(to_bytes("5M"), Ok(5 * MB));
    assert_eq!(to_bytes("5m"), Ok(5 * MB));
    assert_eq!(to_bytes("5G"), Ok(5 * GIGABYTE as i64));
    assert_eq!(to_bytes("5T"), Ok(5 * TERABYTE as i64));
}

#[test]
fn parses_long_units() {
    assert_eq!(to_bytes("5MB"), Ok(5 * MB));
    assert_eq!(to_bytes("5mb"), Ok(5 * MB));
    assert_eq!(to_bytes("5GB"), Ok(5 * GIGABYTE as i64));
    assert_eq!(to_bytes("5TB"), Ok(5 * TERABYTE as i64));
    assert_eq!(to_bytes("5M"), to_bytes("5MB"));
}

#[test]
fn parses_fractional_values() {
    assert_eq!(to_bytes("13.5KB"), Ok(13824));
    assert_eq!(to_bytes("4.5KB"), Ok(4608));
    assert_eq!(to_bytes("0.5M"), Ok(MB / 2));
}

#[test]
fn truncates_partial_bytes() {
    assert_eq!(to_bytes("1.9B"), Ok(1));
    assert_eq!(to_bytes("0.5B"), Ok(0));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(to_bytes("\t\n\r 5MB "), Ok(5 * MB));
}

#[test]
fn rejects_missing_unit() {
    assert_eq!(to_bytes("5"), Err(InvalidByteQuantity));
    assert_eq!(to_bytes(""), Err(InvalidByteQuantity));
    assert_eq!(to_bytes("   "), Err(InvalidByteQuantity));
}

#[test]
fn rejects_unrecognized_units() {
    for input in ["5MBB", "5BB", "5PB", "5 MB", "5KiB", "MB", "5.MB", ".5MB", "+5MB", "5M5"] {
        assert_eq!(to_bytes(input), Err(InvalidByteQuantity), "input {:?}", input);
    }
}

#[test]
fn number_must_be_ascii_digits() {
    assert_eq!(to_bytes("00005K"), Ok(5120));
    assert_eq!(to_bytes("5.25KB"), Ok(5376));
    for input in ["\u{0665}MB", "1e3K", "inf M", "NaNB", "5..5K", "5.5.5K"] {
        assert_eq!(to_bytes(input), Err(InvalidByteQuantity), "input {:?}", input);
    }
}

#[test]
fn rejects_non_positive_values() {
    assert_eq!(to_bytes("-5MB"), Err(InvalidByteQuantity));
    assert_eq!(to_bytes("0TB"), Err(InvalidByteQuantity));
    assert_eq!(to_bytes("0.0K"), Err(InvalidByteQuantity));
}

#[test]
fn rejects_values_past_64_bits() {
    assert_eq!(to_bytes("8388608T"), Err(InvalidByteQuantity));
    assert_eq!(to_bytes("8388607T"), Ok(8388607 * TERABYTE as i64));
}

#[test]
fn megabytes_round_down() {
    assert_eq!(to_megabytes("5B"), Ok(0));
    assert_eq!(to_megabytes("5K"), Ok(0));
    assert_eq!(to_megabytes("5M"), Ok(5));
    assert_eq!(to_megabytes("5mb"), Ok(5));
    assert_eq!(to_megabytes("1.5MB"), Ok(1));
    assert_eq!(to_megabytes("2G"), Ok(2048));
    assert_eq!(to_megabytes("2GB"), Ok(2048));
    assert_eq!(to_megabytes("3T"), Ok(3 * 1024 * 1024));
}

#[test]
fn megabytes_propagate_parse_errors() {
    for input in ["5", "5MBB", "5BB", "-5MB", "0TB"] {
        assert_eq!(to_megabytes(input), Err(InvalidByteQuantity), "input {:?}", input);
    }
}

#[test]
fn error_message_names_the_expected_form() {
    assert_eq!(
        InvalidByteQuantity.to_string(),
        "byte quantity must be a positive integer with a unit of measurement like M, MB, G, or GB"
    );
}
