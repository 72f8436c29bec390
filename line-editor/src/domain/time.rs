//! Time-of-day handling for passing times.
//!
//! Passing times are entered as "HH:MM:SS" strings together with an optional
//! day offset (0 = same day as the nominal trip start, N = N days later).
//! This module turns such pairs into comparable instants so that trips
//! crossing midnight order correctly.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Arbitrary common date that all instants are anchored to.
///
/// Only differences between instants matter, so the choice is irrelevant as
/// long as every instant uses the same one.
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// A time of day shifted by a whole number of days.
///
/// # Examples
///
/// ```
/// use line_editor::domain::ScheduleInstant;
///
/// let late = ScheduleInstant::parse("23:00:00", 0).unwrap();
/// let early_next_day = ScheduleInstant::parse("01:00:00", 1).unwrap();
/// assert!(late < early_next_day);
/// assert_eq!(early_next_day.to_string(), "01:00:00+1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleInstant {
    day_offset: u32,
    time: NaiveTime,
}

impl ScheduleInstant {
    /// Create a new instant from its components.
    pub fn new(time: NaiveTime, day_offset: u32) -> Self {
        Self { day_offset, time }
    }

    /// Parse a time from "HH:MM:SS" (or "HH:MM") with the given day offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use line_editor::domain::ScheduleInstant;
    ///
    /// assert!(ScheduleInstant::parse("00:00:00", 0).is_ok());
    /// assert!(ScheduleInstant::parse("23:59:59", 2).is_ok());
    /// assert!(ScheduleInstant::parse("08:30", 0).is_ok());
    ///
    /// assert!(ScheduleInstant::parse("8:30:00", 0).is_err());
    /// assert!(ScheduleInstant::parse("24:00:00", 0).is_err());
    /// assert!(ScheduleInstant::parse("", 0).is_err());
    /// ```
    pub fn parse(s: &str, day_offset: u32) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        let seconds = match bytes.len() {
            5 => 0,
            8 => {
                if bytes[5] != b':' {
                    return Err(TimeError::new("expected colon at position 5"));
                }
                parse_two_digits(&bytes[6..8])
                    .ok_or_else(|| TimeError::new("invalid second digits"))?
            }
            _ => return Err(TimeError::new("expected HH:MM:SS format")),
        };

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        if seconds > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, seconds)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { day_offset, time })
    }

    /// Returns the day offset.
    pub fn day_offset(&self) -> u32 {
        self.day_offset
    }

    /// Returns the time-of-day component.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Anchors this instant on the common reference date.
    ///
    /// Returns `None` only for offsets too large to represent.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        reference_date()
            .and_time(self.time)
            .checked_add_signed(Duration::days(i64::from(self.day_offset)))
    }
}

impl Ord for ScheduleInstant {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equivalent to comparing `to_datetime()`, without the overflow case.
        self.day_offset
            .cmp(&other.day_offset)
            .then(self.time.cmp(&other.time))
    }
}

impl PartialOrd for ScheduleInstant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ScheduleInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleInstant({self})")
    }
}

impl fmt::Display for ScheduleInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%H:%M:%S"))?;
        if self.day_offset > 0 {
            write!(f, "+{}", self.day_offset)?;
        }
        Ok(())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// A possibly-absent, possibly-malformed time field as entered in the editor.
///
/// An absent day offset is treated as 0. A blank, absent or malformed time
/// never takes part in an ordering: both [`TimePoint::is_before`] and
/// [`TimePoint::is_after`] return `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimePoint<'a> {
    pub time: Option<&'a str>,
    pub day_offset: Option<u32>,
}

impl<'a> TimePoint<'a> {
    pub fn new(time: Option<&'a str>, day_offset: Option<u32>) -> Self {
        Self { time, day_offset }
    }

    /// Returns true if a non-blank time string is present.
    pub fn is_set(&self) -> bool {
        self.time.is_some_and(|t| !t.trim().is_empty())
    }

    /// Resolves to an instant, if the time is present and well-formed.
    pub fn instant(&self) -> Option<ScheduleInstant> {
        let time = self.time?;
        ScheduleInstant::parse(time, self.day_offset.unwrap_or(0)).ok()
    }

    /// Strictly earlier than `other`.
    pub fn is_before(&self, other: &TimePoint<'_>) -> bool {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// Strictly later than `other`.
    pub fn is_after(&self, other: &TimePoint<'_>) -> bool {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }
}

/// Outcome of comparing two time points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InstantComparison {
    pub before: bool,
    pub after: bool,
}

/// Compare two (time, day offset) pairs.
///
/// # Examples
///
/// ```
/// use line_editor::domain::compare_instant;
///
/// let cmp = compare_instant(Some("23:00:00"), Some(0), Some("01:00:00"), Some(1));
/// assert!(cmp.before);
/// assert!(!cmp.after);
///
/// // Absence never satisfies an ordering
/// let cmp = compare_instant(None, Some(0), Some("10:00:00"), Some(0));
/// assert!(!cmp.before && !cmp.after);
/// ```
pub fn compare_instant(
    time_a: Option<&str>,
    offset_a: Option<u32>,
    time_b: Option<&str>,
    offset_b: Option<u32>,
) -> InstantComparison {
    let a = TimePoint::new(time_a, offset_a);
    let b = TimePoint::new(time_b, offset_b);
    InstantComparison {
        before: a.is_before(&b),
        after: a.is_after(&b),
    }
}

/// Is `time_a` (shifted by `offset_a` days) strictly before `time_b`?
pub fn is_before(
    time_a: Option<&str>,
    offset_a: Option<u32>,
    time_b: Option<&str>,
    offset_b: Option<u32>,
) -> bool {
    compare_instant(time_a, offset_a, time_b, offset_b).before
}

/// Is `time_a` (shifted by `offset_a` days) strictly after `time_b`?
pub fn is_after(
    time_a: Option<&str>,
    offset_a: Option<u32>,
    time_b: Option<&str>,
    offset_b: Option<u32>,
) -> bool {
    compare_instant(time_a, offset_a, time_b, offset_b).after
}
