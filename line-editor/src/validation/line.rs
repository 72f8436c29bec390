//! Whole-line validity, composed from the leaf validators.

use serde::Serialize;
use tracing::trace;

use crate::domain::{Line, ServiceJourney};

use super::booking::validate_booking_arrangement;
use super::day_types::validate_day_types;
use super::passing_times::{TimeValidation, validate_passing_times};
use super::stop_points::{
    StopPointErrors, StopPointStrategy, journey_pattern_is_valid, validate_stop_points,
};

/// All "about the line" fields are filled in.
///
/// Flexible lines additionally need a valid line-level booking arrangement,
/// if they carry one.
pub fn about_step_is_valid(line: &Line) -> bool {
    let missing: Vec<&str> = line
        .about_fields()
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| *field)
        .collect();
    if !missing.is_empty() {
        trace!(?missing, "about step incomplete");
        return false;
    }
    !line.is_flexible() || validate_booking_arrangement(line.booking_arrangement.as_ref())
}

/// Every journey pattern passes the stop-point rules for the line's type.
pub fn journey_patterns_are_valid(line: &Line) -> bool {
    let strategy = StopPointStrategy::for_line_type(line.flexible_line_type);
    !line.journey_patterns.is_empty()
        && line
            .journey_patterns
            .iter()
            .all(|jp| journey_pattern_is_valid(jp, strategy))
}

/// A service journey is named, correctly timed and runs on some day.
pub fn service_journey_is_valid(service_journey: &ServiceJourney) -> bool {
    service_journey.name().is_some()
        && validate_passing_times(&service_journey.passing_times).is_valid
        && validate_day_types(&service_journey.day_types)
        && validate_booking_arrangement(service_journey.booking_arrangement.as_ref())
}

/// The line has at least one service journey and all of them are valid.
pub fn service_journeys_are_valid(line: &Line) -> bool {
    let mut journeys = line
        .journey_patterns
        .iter()
        .flat_map(|jp| jp.service_journeys.iter())
        .peekable();
    journeys.peek().is_some() && journeys.all(service_journey_is_valid)
}

/// Every step of the editor is valid, so the line can be saved.
pub fn valid_line(line: &Line) -> bool {
    about_step_is_valid(line) && journey_patterns_are_valid(line) && service_journeys_are_valid(line)
}

/// Validation details for one service journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJourneyReport {
    pub name: Option<String>,
    pub is_valid: bool,
    pub passing_times: TimeValidation,
    pub day_types_valid: bool,
    pub booking_valid: bool,
}

impl ServiceJourneyReport {
    pub fn for_service_journey(service_journey: &ServiceJourney) -> Self {
        Self {
            name: service_journey.name().map(str::to_string),
            is_valid: service_journey_is_valid(service_journey),
            passing_times: validate_passing_times(&service_journey.passing_times),
            day_types_valid: validate_day_types(&service_journey.day_types),
            booking_valid: validate_booking_arrangement(
                service_journey.booking_arrangement.as_ref(),
            ),
        }
    }
}

/// Validation details for one journey pattern and its service journeys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPatternReport {
    pub name: Option<String>,
    pub is_valid: bool,
    pub stop_points: Vec<StopPointErrors>,
    pub service_journeys: Vec<ServiceJourneyReport>,
}

/// Everything the editor needs to render inline feedback for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReport {
    pub about_valid: bool,
    pub journey_patterns_valid: bool,
    pub service_journeys_valid: bool,
    pub valid_line: bool,
    pub max_allowed_step_index: usize,
    pub journey_patterns: Vec<JourneyPatternReport>,
}

impl LineReport {
    /// Recompute the full report from a snapshot.
    pub fn for_line(line: &Line) -> Self {
        let strategy = StopPointStrategy::for_line_type(line.flexible_line_type);
        let journey_patterns = line
            .journey_patterns
            .iter()
            .map(|jp| JourneyPatternReport {
                name: jp.name().map(str::to_string),
                is_valid: journey_pattern_is_valid(jp, strategy),
                stop_points: validate_stop_points(&jp.points_in_sequence, strategy),
                service_journeys: jp
                    .service_journeys
                    .iter()
                    .map(ServiceJourneyReport::for_service_journey)
                    .collect(),
            })
            .collect();

        let about_valid = about_step_is_valid(line);
        let journey_patterns_valid = journey_patterns_are_valid(line);
        let service_journeys_valid = service_journeys_are_valid(line);

        Self {
            about_valid,
            journey_patterns_valid,
            service_journeys_valid,
            valid_line: about_valid && journey_patterns_valid && service_journeys_valid,
            max_allowed_step_index: crate::wizard::max_allowed_step_index(line),
            journey_patterns,
        }
    }
}
