//! Day types: weekly recurrence plus operating periods.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Error returned when parsing an unknown weekday symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekday: {0}")]
pub struct InvalidWeekday(String);

/// A day-of-week symbol as used in day type definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl FromStr for Weekday {
    type Err = InvalidWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidWeekday(s.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingPeriod {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl OperatingPeriod {
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self { from_date, to_date }
    }

    /// Every date in the period, in order. Empty when the range is inverted.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from_date
            .iter_days()
            .take_while(move |d| *d <= self.to_date)
    }
}

/// Assignment of a day type to an operating period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTypeAssignment {
    pub operating_period: OperatingPeriod,
    #[serde(default = "available_default")]
    pub is_available: bool,
}

fn available_default() -> bool {
    true
}

impl DayTypeAssignment {
    pub fn new(operating_period: OperatingPeriod) -> Self {
        Self {
            operating_period,
            is_available: true,
        }
    }
}

/// When a service journey runs: a weekday set plus operating periods.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayType {
    pub days_of_week: BTreeSet<Weekday>,
    pub day_type_assignments: Vec<DayTypeAssignment>,
}

impl DayType {
    pub fn new(
        days_of_week: impl IntoIterator<Item = Weekday>,
        day_type_assignments: Vec<DayTypeAssignment>,
    ) -> Self {
        Self {
            days_of_week: days_of_week.into_iter().collect(),
            day_type_assignments,
        }
    }

    /// Returns a copy with `day` toggled in or out of the weekday set.
    pub fn with_weekday_toggled(&self, day: Weekday) -> Self {
        let mut days_of_week = self.days_of_week.clone();
        if !days_of_week.remove(&day) {
            days_of_week.insert(day);
        }
        Self {
            days_of_week,
            ..self.clone()
        }
    }

    /// Toggles the weekday named by `symbol` (e.g. `"monday"`).
    pub fn with_weekday_symbol_toggled(&self, symbol: &str) -> Result<Self, DomainError> {
        let day: Weekday = symbol.parse()?;
        Ok(self.with_weekday_toggled(day))
    }

    /// Returns a copy with an assignment for `period` appended.
    pub fn with_period_added(&self, period: OperatingPeriod) -> Self {
        let mut day_type_assignments = self.day_type_assignments.clone();
        day_type_assignments.push(DayTypeAssignment::new(period));
        Self {
            day_type_assignments,
            ..self.clone()
        }
    }
}
