//! Chronological validation of a service journey's passing times.
//!
//! Rules are evaluated per passing time, left to right, and the first
//! failing rule decides the result. Nothing is accumulated.

use std::fmt;

use serde::Serialize;

use crate::domain::PassingTime;

/// Why a passing-time chain was rejected.
///
/// Serialized as the bare identifier; the UI maps it to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemporalErrorKind {
    InsufficientStops,
    AllTimesMustBeFilled,
    DepartureAfterArrival,
    DepartureAfterEarliest,
    ArrivalBeforeLatest,
    LastArrivalMustBeSet,
    LaterThanPrevious,
}

impl TemporalErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalErrorKind::InsufficientStops => "InsufficientStops",
            TemporalErrorKind::AllTimesMustBeFilled => "AllTimesMustBeFilled",
            TemporalErrorKind::DepartureAfterArrival => "DepartureAfterArrival",
            TemporalErrorKind::DepartureAfterEarliest => "DepartureAfterEarliest",
            TemporalErrorKind::ArrivalBeforeLatest => "ArrivalBeforeLatest",
            TemporalErrorKind::LastArrivalMustBeSet => "LastArrivalMustBeSet",
            TemporalErrorKind::LaterThanPrevious => "LaterThanPrevious",
        }
    }
}

impl fmt::Display for TemporalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating a passing-time chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeValidation {
    pub is_valid: bool,
    pub error_kind: Option<TemporalErrorKind>,
}

impl TimeValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_kind: None,
        }
    }

    pub fn invalid(kind: TemporalErrorKind) -> Self {
        Self {
            is_valid: false,
            error_kind: Some(kind),
        }
    }
}

/// Validate the passing times of one service journey.
///
/// # Examples
///
/// ```
/// use line_editor::domain::PassingTime;
/// use line_editor::validation::{TemporalErrorKind, validate_passing_times};
///
/// let times = vec![
///     PassingTime::departing("08:00:00", 0),
///     PassingTime::arriving("08:30:00", 0),
/// ];
/// assert!(validate_passing_times(&times).is_valid);
///
/// let backwards = vec![
///     PassingTime::departing("08:00:00", 0),
///     PassingTime::arriving("07:30:00", 0),
/// ];
/// assert_eq!(
///     validate_passing_times(&backwards).error_kind,
///     Some(TemporalErrorKind::LaterThanPrevious)
/// );
/// ```
pub fn validate_passing_times(passing_times: &[PassingTime]) -> TimeValidation {
    match first_error(passing_times) {
        Some(kind) => TimeValidation::invalid(kind),
        None => TimeValidation::valid(),
    }
}

fn first_error(passing_times: &[PassingTime]) -> Option<TemporalErrorKind> {
    if passing_times.len() < 2 {
        return Some(TemporalErrorKind::InsufficientStops);
    }

    let last = passing_times.len() - 1;
    for (index, current) in passing_times.iter().enumerate() {
        if let Some(kind) = own_fields_error(current) {
            return Some(kind);
        }

        if index == 0 {
            continue;
        }

        if index == last && !current.has_closing_time() {
            return Some(TemporalErrorKind::LastArrivalMustBeSet);
        }

        if is_earlier_than_previous(current, &passing_times[index - 1]) {
            return Some(TemporalErrorKind::LaterThanPrevious);
        }
    }

    None
}

/// Checks that only involve a single passing time.
fn own_fields_error(pt: &PassingTime) -> Option<TemporalErrorKind> {
    if pt.is_empty() {
        return Some(TemporalErrorKind::AllTimesMustBeFilled);
    }

    let arrival = pt.arrival();
    let departure = pt.departure();
    let earliest = pt.earliest_departure();
    let latest = pt.latest_arrival();

    if arrival.is_before(&departure) || latest.is_before(&earliest) {
        return Some(TemporalErrorKind::DepartureAfterArrival);
    }
    if departure.is_before(&earliest) {
        return Some(TemporalErrorKind::DepartureAfterEarliest);
    }
    if latest.is_before(&arrival) {
        return Some(TemporalErrorKind::ArrivalBeforeLatest);
    }

    None
}

/// Is any field of `current` earlier than a related field of `previous`?
///
/// The pair set intentionally mixes fixed and flexible fields so that
/// a fixed stop following a flexible one (and vice versa) is also ordered.
fn is_earlier_than_previous(current: &PassingTime, previous: &PassingTime) -> bool {
    let (arr, dep) = (current.arrival(), current.departure());
    let (earliest, latest) = (current.earliest_departure(), current.latest_arrival());
    let (prev_arr, prev_dep) = (previous.arrival(), previous.departure());
    let (prev_earliest, prev_latest) = (previous.earliest_departure(), previous.latest_arrival());

    dep.is_before(&prev_dep)
        || dep.is_before(&prev_arr)
        || arr.is_before(&prev_arr)
        || arr.is_before(&prev_dep)
        || latest.is_before(&prev_latest)
        || earliest.is_before(&prev_earliest)
        || earliest.is_before(&prev_dep)
        || earliest.is_before(&prev_arr)
        || arr.is_before(&prev_earliest)
        || arr.is_before(&prev_latest)
}
