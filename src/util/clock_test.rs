use super::*;

#[test]
fn format_clock_pads_to_two_digits() {
    assert_eq!(format_clock(9, 5), "09:05");
    assert_eq!(format_clock(23, 59), "23:59");
}

#[test]
fn format_clock_wraps_out_of_range_values() {
    assert_eq!(format_clock(24, 60), "00:00");
}

#[cfg(not(feature = "csr"))]
#[test]
fn now_label_is_empty_outside_browser() {
    assert!(now_label().is_empty());
}
