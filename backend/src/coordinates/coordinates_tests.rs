use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_parse_sexagesimal_pair() {
    let coords = parse_coordinates("12:00:00 +45:00:00").unwrap();
    assert_eq!(coords.ra, 180.0);
    assert_eq!(coords.dec, 45.0);
}

#[test]
fn test_parse_sexagesimal_negative_dec() {
    let coords = parse_coordinates("05:34:31.9 -22:00:52").unwrap();
    assert_abs_diff_eq!(coords.ra, (5.0 + 34.0 / 60.0 + 31.9 / 3600.0) * 15.0, epsilon = 1e-12);
    assert_abs_diff_eq!(coords.ra, 83.632916, epsilon = 1e-6);
    assert_abs_diff_eq!(coords.dec, -(22.0 + 52.0 / 3600.0), epsilon = 1e-12);
}

#[test]
fn test_parse_sexagesimal_is_not_range_checked() {
    let coords = parse_coordinates("25:00:00 +100:00:00").unwrap();
    assert_eq!(coords.ra, 375.0);
    assert_eq!(coords.dec, 100.0);
    assert!(!coords.is_in_range());
}

#[test]
fn test_parse_sexagesimal_with_comma() {
    let coords = parse_coordinates("12:30:00, -45:00:00").unwrap();
    assert_abs_diff_eq!(coords.ra, 187.5, epsilon = 1e-12);
    assert_abs_diff_eq!(coords.dec, -45.0, epsilon = 1e-12);
}

#[test]
fn test_parse_decimal_pair() {
    let coords = parse_coordinates("187.5 -45.0").unwrap();
    assert_eq!(coords, Coordinates::new(187.5, -45.0));

    let coords = parse_coordinates("  10.684583,41.269065 ").unwrap();
    assert_eq!(coords, Coordinates::new(10.684583, 41.269065));
}

#[test]
fn test_parse_decimal_bounds_are_inclusive() {
    assert_eq!(parse_coordinates("0 -90"), Some(Coordinates::new(0.0, -90.0)));
    assert_eq!(parse_coordinates("360 90"), Some(Coordinates::new(360.0, 90.0)));
}

#[test]
fn test_parse_decimal_out_of_range() {
    assert_eq!(parse_coordinates("361 0"), None);
    assert_eq!(parse_coordinates("-0.1 0"), None);
    assert_eq!(parse_coordinates("10 90.5"), None);
    assert_eq!(parse_coordinates("10 -91"), None);
}

#[test]
fn test_parse_rejects_object_names() {
    assert_eq!(parse_coordinates("M31"), None);
    assert_eq!(parse_coordinates("NGC 1234"), None);
    assert_eq!(parse_coordinates("Crab Nebula"), None);
}

#[test]
fn test_parse_rejects_too_few_tokens() {
    assert_eq!(parse_coordinates(""), None);
    assert_eq!(parse_coordinates("   "), None);
    assert_eq!(parse_coordinates("187.5"), None);
    assert_eq!(parse_coordinates(" , "), None);
}

#[test]
fn test_parse_space_separated_sexagesimal_fails_closed() {
    assert_eq!(parse_coordinates("12 30 00 -45 00 00"), None);
}

#[test]
fn test_parse_mixed_notation_fails() {
    assert_eq!(parse_coordinates("12:30:00 45"), None);
    assert_eq!(parse_coordinates("187.5 -45:00"), None);
}

#[test]
fn test_parse_rejects_non_finite_tokens() {
    assert_eq!(parse_coordinates("inf 10"), None);
    assert_eq!(parse_coordinates("10 NaN"), None);
    assert_eq!(parse_hms("inf:00:00"), None);
}

#[test]
fn test_parse_hms() {
    assert_eq!(parse_hms("12:00:00"), Some(180.0));
    assert_eq!(parse_hms("00:00:00"), Some(0.0));
    assert_eq!(parse_hms("12:00"), None);
    assert_eq!(parse_hms("12:00:00:00"), None);
    assert_eq!(parse_hms("aa:00:00"), None);
    assert_eq!(parse_hms("12::00"), None);
}

#[test]
fn test_parse_dms_sign_applies_to_whole_value() {
    assert_eq!(parse_dms("-00:30:00"), Some(-0.5));
    assert_eq!(parse_dms("+45:00:00"), Some(45.0));
    assert_eq!(parse_dms("45:30:00"), Some(45.5));
    assert_eq!(parse_dms("  -10:00:00  "), Some(-10.0));
    assert_eq!(parse_dms("-10:00"), None);
}

#[test]
fn test_to_hms() {
    assert_eq!(to_hms(180.0), "12h 0m 0.00s");
    assert_eq!(to_hms(187.5), "12h 30m 0.00s");
    assert_eq!(to_hms(0.0), "0h 0m 0.00s");
}

#[test]
fn test_to_hms_does_not_normalize() {
    assert_eq!(to_hms(-15.0), "-1h 0m 0.00s");
    assert_eq!(to_hms(375.0), "25h 0m 0.00s");
}

#[test]
fn test_to_dms() {
    assert_eq!(to_dms(-(22.0 + 52.0 / 3600.0)), "-22° 0′ 52.00″");
    assert_eq!(to_dms(45.5), "+45° 30′ 0.00″");
    assert_eq!(to_dms(0.0), "+0° 0′ 0.00″");
}

#[test]
fn test_formatters_pass_through_non_finite() {
    assert_eq!(to_hms(f64::NAN), "NaN");
    assert_eq!(to_dms(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_coordinate(f64::NAN, 6), "NaN");
}

#[test]
fn test_format_coordinate() {
    assert_eq!(format_coordinate(10.684583, DEFAULT_COORDINATE_DECIMALS), "10.684583");
    assert_eq!(format_coordinate(-45.0, 2), "-45.00");
    assert_eq!(format_coordinate(187.5, 0), "188");
}

#[test]
fn test_format_coordinate_rounding_boundary() {
    assert_eq!(format_coordinate(10.9999996, 6), "11.000000");
    assert_eq!(format_coordinate(10.9999994, 6), "10.999999");
    assert_eq!(format_coordinate(-0.9999996, 6), "-1.000000");
}

#[test]
fn test_coordinates_display_helpers() {
    let coords = Coordinates::new(180.0, 45.5);
    assert_eq!(coords.ra_hms(), "12h 0m 0.00s");
    assert_eq!(coords.dec_dms(), "+45° 30′ 0.00″");
}

#[test]
fn test_negative_zero_reads_as_zero() {
    let coords = parse_coordinates("-0 10").unwrap();
    assert!(coords.ra.is_sign_positive());
    assert_eq!(coords.ra_hms(), "0h 0m 0.00s");
    assert_eq!(format_coordinate(coords.ra, 6), "0.000000");
    assert_eq!(serde_json::to_string(&coords).unwrap(), r#"{"ra":0.0,"dec":10.0}"#);
}

#[test]
fn test_formatters_print_negative_zero_unsigned() {
    assert_eq!(to_hms(-0.0), "0h 0m 0.00s");
    assert_eq!(format_coordinate(-0.0, 6), "0.000000");
    assert_eq!(format_coordinate(-0.0000001, 6), "-0.000000");
}
