//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{BookingArrangement, Line, PassingTime};
use crate::wizard::{EditorControls, StepView, WizardEvent, WizardState};

/// Request to validate a passing-time chain.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassingTimesRequest {
    pub passing_times: Vec<PassingTime>,
}

/// Request to validate an optional booking arrangement.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingArrangementRequest {
    #[serde(default)]
    pub booking_arrangement: Option<BookingArrangement>,
}

/// Request to compare two (time, day offset) pairs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareInstantRequest {
    pub time_a: Option<String>,
    pub offset_a: Option<u32>,
    pub time_b: Option<String>,
    pub offset_b: Option<u32>,
}

/// A plain validity answer.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidityResponse {
    pub is_valid: bool,
}

/// Request to apply a navigation event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    #[serde(default)]
    pub state: WizardState,
    pub event: WizardEvent,
    pub line: Line,

    /// Whether the line is referenced elsewhere (checked by the caller)
    #[serde(default)]
    pub in_use: bool,

    /// Whether a save or delete is currently in flight
    #[serde(default)]
    pub in_flight: bool,
}

/// New wizard state plus everything derived from the snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResponse {
    pub state: WizardState,
    pub max_allowed_step_index: usize,
    pub steps: Vec<StepView>,
    pub controls: EditorControls,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
