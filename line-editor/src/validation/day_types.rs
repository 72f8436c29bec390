//! Day type availability: does every operating period contain a running day?

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::domain::{DayType, OperatingPeriod, Weekday};

/// Returns true if some date in `period` falls on one of `weekdays`.
///
/// Periods of a week or more contain every weekday, so only shorter
/// periods are scanned. An inverted period contains no dates.
pub fn period_contains_weekday(period: &OperatingPeriod, weekdays: &BTreeSet<Weekday>) -> bool {
    if weekdays.is_empty() || period.from_date > period.to_date {
        return false;
    }
    let span_days = (period.to_date - period.from_date).num_days() + 1;
    if span_days >= 7 {
        return true;
    }
    period
        .dates()
        .any(|date| weekdays.contains(&Weekday::from(date.weekday())))
}

/// A day type is valid when it names at least one weekday and every
/// assignment's period contains at least one of those weekdays.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use line_editor::domain::{DayType, DayTypeAssignment, OperatingPeriod, Weekday};
/// use line_editor::validation::validate_day_type;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
///
/// let both = DayType::new(
///     [Weekday::Monday],
///     vec![DayTypeAssignment::new(OperatingPeriod::new(monday, tuesday))],
/// );
/// assert!(validate_day_type(&both));
///
/// let tuesday_only = DayType::new(
///     [Weekday::Monday],
///     vec![DayTypeAssignment::new(OperatingPeriod::new(tuesday, tuesday))],
/// );
/// assert!(!validate_day_type(&tuesday_only));
/// ```
pub fn validate_day_type(day_type: &DayType) -> bool {
    !day_type.days_of_week.is_empty()
        && day_type
            .day_type_assignments
            .iter()
            .all(|a| period_contains_weekday(&a.operating_period, &day_type.days_of_week))
}

/// A list of day types is valid when non-empty and every entry is valid.
pub fn validate_day_types(day_types: &[DayType]) -> bool {
    !day_types.is_empty() && day_types.iter().all(validate_day_type)
}
