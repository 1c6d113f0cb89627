// Date and time helper tests
// Author: kelexine (https://github.com/kelexine)

use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use quas_utils::date_time::{
    aware_utcfromtimestamp, aware_utcnow, convert_if_not_none, convert_to_gmt_plus_1,
    format_date_readable, naive_utcfromtimestamp, naive_utcnow, parse_datetime, to_gmt1_or_none,
};

#[test]
fn test_format_date_readable_known_dates() {
    let cases = [
        ((2024, 1, 1), "1st January"),
        ((2024, 3, 2), "2nd March"),
        ((2024, 5, 3), "3rd May"),
        ((2024, 6, 4), "4th June"),
        ((2024, 7, 11), "11th July"),
        ((2024, 8, 12), "12th August"),
        ((2024, 9, 13), "13th September"),
        ((2024, 10, 21), "21st October"),
        ((2024, 11, 22), "22nd November"),
        ((2024, 12, 23), "23rd December"),
        ((2024, 2, 29), "29th February"),
        ((2024, 1, 31), "31st January"),
    ];

    for ((y, m, d), expected) in cases {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(format_date_readable(&date), expected);
    }
}

#[test]
fn test_format_date_readable_accepts_datetimes() {
    let dt = Utc.with_ymd_and_hms(2023, 4, 22, 18, 30, 0).unwrap();
    assert_eq!(format_date_readable(&dt), "22nd April");
    assert_eq!(format_date_readable(&dt.naive_utc()), "22nd April");
}

#[test]
fn test_to_gmt1_or_none_adds_one_hour() {
    let dt = Utc.with_ymd_and_hms(2024, 3, 31, 23, 30, 0).unwrap();
    let shifted = to_gmt1_or_none(Some(dt)).unwrap();
    assert_eq!(shifted - dt, TimeDelta::hours(1));
    assert_eq!(shifted, Utc.with_ymd_and_hms(2024, 4, 1, 0, 30, 0).unwrap());
}

#[test]
fn test_to_gmt1_or_none_passes_none_through() {
    let none: Option<chrono::DateTime<Utc>> = None;
    assert!(to_gmt1_or_none(none).is_none());
    assert!(convert_if_not_none::<chrono::NaiveDateTime>(None).is_none());
}

#[test]
fn test_convert_naive_datetime() {
    let naive = parse_datetime("2024-12-31 23:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
    let shifted = convert_to_gmt_plus_1(naive);
    assert_eq!(
        shifted,
        parse_datetime("2025-01-01 00:15:00", "%Y-%m-%d %H:%M:%S").unwrap()
    );
}

#[test]
fn test_parse_datetime_rejects_mismatch() {
    assert!(parse_datetime("31/12/2024", "%Y-%m-%d %H:%M:%S").is_err());
}

#[test]
fn test_timestamp_conversions() {
    let aware = aware_utcfromtimestamp(1_700_000_000.0).unwrap();
    assert_eq!(aware, Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap());

    let naive = naive_utcfromtimestamp(1_700_000_000.0).unwrap();
    assert_eq!(naive, aware.naive_utc());
}

#[test]
fn test_now_helpers_agree() {
    let aware = aware_utcnow();
    let naive = naive_utcnow();
    let gap = (naive - aware.naive_utc()).num_seconds().abs();
    assert!(gap < 5);
}
