use super::*;

#[test]
fn format_login_time_renders_utc_date_and_minutes() {
    assert_eq!(format_login_time("2023-11-14T22:13:20Z"), "November 14, 2023 at 22:13 UTC");
}

#[test]
fn format_login_time_pads_hour_and_minute() {
    assert_eq!(format_login_time("2024-02-03T04:05:06.789Z"), "February 3, 2024 at 04:05 UTC");
}

#[test]
fn format_login_time_falls_back_to_raw_value() {
    assert_eq!(format_login_time("not a time"), "not a time");
}
