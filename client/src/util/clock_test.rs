#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn format_clock_pads_single_digits() {
    assert_eq!(format_clock(9, 5), "09:05");
    assert_eq!(format_clock(23, 59), "23:59");
}

#[test]
fn format_time_epoch_is_midnight_utc() {
    assert_eq!(format_time(0.0), "00:00");
}

#[test]
fn format_time_wraps_at_day_boundary() {
    // 1970-01-02T13:07:30Z
    let ms = ((24 + 13) * 3_600_000 + 7 * 60_000 + 30_000) as f64;
    assert_eq!(format_time(ms), "13:07");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}
