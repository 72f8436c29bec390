//! Domain types for the line editor.
//!
//! Every type here is an immutable value snapshot: edits produce a new
//! snapshot through a `with_*` transform and never mutate shared state.
//! Unlike validated domain models, snapshots may hold incomplete or
//! malformed input; the validators in [`crate::validation`] judge them.

mod booking;
mod day_type;
mod error;
mod journey_pattern;
mod line;
mod passing_time;
mod service_journey;
mod stop_point;
mod time;

pub use booking::{
    BookingArrangement, BookingLimitType, BookingMethod, Contact, PurchaseMoment, PurchaseWhen,
};
pub use day_type::{DayType, DayTypeAssignment, InvalidWeekday, OperatingPeriod, Weekday};
pub use error::DomainError;
pub use journey_pattern::JourneyPattern;
pub use line::{FlexibleLineType, Line, Notice};
pub use passing_time::{PassingTime, TimeField};
pub use service_journey::ServiceJourney;
pub use stop_point::{DestinationDisplay, StopPoint, StopPointRole};
pub use time::{
    InstantComparison, ScheduleInstant, TimeError, TimePoint, compare_instant, is_after, is_before,
};

/// Returns the value if it is present and not only whitespace.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
