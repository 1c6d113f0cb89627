//! UTC-aware timestamps, readable formatting and the fixed GMT+1 shift.
//!
//! All "now" helpers read the system clock in UTC; the `naive_*` variants
//! strip the timezone for storage columns that carry none.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::{Result, UtilsError};
use chrono::{DateTime, Datelike, Month, NaiveDateTime, TimeDelta, Utc};
use std::fmt::Write;
use std::ops::Add;

/// Default pattern used by [`format_datetime`].
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordinal suffix for a day of the month (1 -> "st", 12 -> "th", 23 -> "rd").
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Current time as a timezone-aware UTC datetime.
pub fn aware_utcnow() -> DateTime<Utc> {
    Utc::now()
}

/// Convert POSIX seconds (fractions allowed) to a UTC datetime.
pub fn aware_utcfromtimestamp(timestamp: f64) -> Result<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return Err(UtilsError::InvalidArgument(format!(
            "timestamp must be finite, got {}",
            timestamp
        )));
    }

    let secs = timestamp.floor();
    // Rounding can push the fraction to a full second
    let mut nanos = ((timestamp - secs) * 1_000_000_000.0).round() as u32;
    let mut secs = secs as i64;
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos -= 1_000_000_000;
    }

    DateTime::from_timestamp(secs, nanos).ok_or_else(|| {
        UtilsError::InvalidArgument(format!("timestamp {} is out of range", timestamp))
    })
}

/// Current UTC time without timezone information.
pub fn naive_utcnow() -> NaiveDateTime {
    aware_utcnow().naive_utc()
}

pub fn naive_utcfromtimestamp(timestamp: f64) -> Result<NaiveDateTime> {
    Ok(aware_utcfromtimestamp(timestamp)?.naive_utc())
}

/// Format a date as `"<day><suffix> <Month>"`, e.g. `"3rd March"`.
///
/// Works with anything carrying a calendar date: `NaiveDate`,
/// `NaiveDateTime` or a zoned `DateTime`.
pub fn format_date_readable<D: Datelike>(dt: &D) -> String {
    let day = dt.day();
    // month() is always 1..=12
    let month = Month::try_from(dt.month() as u8)
        .map(|m| m.name())
        .unwrap_or_default();
    format!("{}{} {}", day, ordinal_suffix(day), month)
}

/// Format a datetime with a strftime pattern, [`DEFAULT_DATETIME_FORMAT`] when `fmt` is `None`.
///
/// An unknown specifier yields `InvalidFormat` instead of panicking.
pub fn format_datetime<T>(dt: &T, fmt: Option<&str>) -> Result<String>
where
    T: FormatDateTime,
{
    let fmt = fmt.unwrap_or(DEFAULT_DATETIME_FORMAT);
    let mut out = String::new();
    dt.write_formatted(&mut out, fmt)
        .map_err(|_| UtilsError::InvalidFormat(fmt.to_string()))?;
    Ok(out)
}

/// Parse a naive datetime from `dt_str` using a strftime pattern.
pub fn parse_datetime(dt_str: &str, fmt: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(dt_str, fmt)?)
}

/// Shift a datetime to GMT+1 by adding one hour. No DST handling.
///
/// # Panics
///
/// Panics when the result is past chrono's maximum datetime. Use
/// [`checked_gmt_plus_1`] for untrusted input.
pub fn convert_to_gmt_plus_1<T>(dt: T) -> T
where
    T: Add<TimeDelta, Output = T>,
{
    dt + TimeDelta::hours(1)
}

/// Non-panicking [`convert_to_gmt_plus_1`] for naive datetimes.
pub fn checked_gmt_plus_1(dt: NaiveDateTime) -> Result<NaiveDateTime> {
    dt.checked_add_signed(TimeDelta::hours(1)).ok_or_else(|| {
        UtilsError::InvalidArgument(format!("{} is too late to shift by one hour", dt))
    })
}

/// [`convert_to_gmt_plus_1`] for optional values.
pub fn convert_if_not_none<T>(dt: Option<T>) -> Option<T>
where
    T: Add<TimeDelta, Output = T>,
{
    dt.map(convert_to_gmt_plus_1)
}

/// Alias of [`convert_if_not_none`], the name most call sites use.
pub fn to_gmt1_or_none<T>(dt: Option<T>) -> Option<T>
where
    T: Add<TimeDelta, Output = T>,
{
    convert_if_not_none(dt)
}

/// Chrono types that can be rendered with a strftime pattern.
pub trait FormatDateTime {
    fn write_formatted(&self, out: &mut String, fmt: &str) -> std::fmt::Result;
}

impl FormatDateTime for NaiveDateTime {
    fn write_formatted(&self, out: &mut String, fmt: &str) -> std::fmt::Result {
        write!(out, "{}", self.format(fmt))
    }
}

impl FormatDateTime for chrono::NaiveDate {
    fn write_formatted(&self, out: &mut String, fmt: &str) -> std::fmt::Result {
        write!(out, "{}", self.format(fmt))
    }
}

impl<Tz> FormatDateTime for DateTime<Tz>
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    fn write_formatted(&self, out: &mut String, fmt: &str) -> std::fmt::Result {
        write!(out, "{}", self.format(fmt))
    }
}
