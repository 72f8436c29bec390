//! Consistency checks for line editor snapshots.
//!
//! All validators are pure functions over a snapshot: they never fail,
//! never mutate and always return the same answer for the same input.
//! Problems are reported as error-kind tokens that the UI turns into
//! messages.
//!
//! Passing times use a first-error-wins policy, while stop points report
//! every problem at once. The two policies are intentionally different.

mod booking;
mod day_types;
mod line;
mod passing_times;
mod stop_points;

pub use booking::{booking_arrangement_is_valid, validate_booking_arrangement};
pub use day_types::{period_contains_weekday, validate_day_type, validate_day_types};
pub use line::{
    JourneyPatternReport, LineReport, ServiceJourneyReport, about_step_is_valid,
    journey_patterns_are_valid, service_journey_is_valid, service_journeys_are_valid, valid_line,
};
pub use passing_times::{TemporalErrorKind, TimeValidation, validate_passing_times};
pub use stop_points::{
    StopPointErrorKind, StopPointErrors, StopPointStrategy, journey_pattern_is_valid,
    validate_area_stop_point, validate_stop_point, validate_stop_points,
};
