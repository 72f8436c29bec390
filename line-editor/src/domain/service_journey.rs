//! Service journeys: timed trips over a journey pattern.

use serde::{Deserialize, Serialize};

use super::{BookingArrangement, DayType, DomainError, PassingTime, TimeField, non_blank};

/// One scheduled trip realizing a journey pattern.
///
/// `passing_times` is index-aligned with the owning pattern's stop points.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceJourney {
    pub id: Option<String>,
    pub name: Option<String>,
    pub private_code: Option<String>,
    pub public_code: Option<String>,
    pub passing_times: Vec<PassingTime>,
    pub day_types: Vec<DayType>,
    pub booking_arrangement: Option<BookingArrangement>,
}

impl ServiceJourney {
    /// A blank service journey with one empty passing time per stop point.
    pub fn blank(stop_count: usize) -> Self {
        Self {
            passing_times: vec![PassingTime::default(); stop_count],
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..self.clone()
        }
    }

    /// Replaces the passing time at `index`.
    pub fn with_passing_time(
        &self,
        index: usize,
        passing_time: PassingTime,
    ) -> Result<Self, DomainError> {
        let len = self.passing_times.len();
        if index >= len {
            return Err(DomainError::IndexOutOfBounds { index, len });
        }
        let mut next = self.clone();
        next.passing_times[index] = passing_time;
        Ok(next)
    }

    /// Sets one time field of the passing time at `index` from user input.
    pub fn with_time_entered(
        &self,
        index: usize,
        field: TimeField,
        input: &str,
        day_offset: u32,
    ) -> Result<Self, DomainError> {
        let len = self.passing_times.len();
        let current = self
            .passing_times
            .get(index)
            .ok_or(DomainError::IndexOutOfBounds { index, len })?;
        let updated = current.with_time_entered(field, input, day_offset)?;
        self.with_passing_time(index, updated)
    }

    pub fn with_day_types(&self, day_types: Vec<DayType>) -> Self {
        Self {
            day_types,
            ..self.clone()
        }
    }

    pub fn with_booking_arrangement(&self, booking: Option<BookingArrangement>) -> Self {
        Self {
            booking_arrangement: booking,
            ..self.clone()
        }
    }

    /// Inserts a blank passing time, keeping alignment with a new stop point.
    pub(crate) fn with_blank_passing_time_at(&self, index: usize) -> Self {
        let mut next = self.clone();
        let index = index.min(next.passing_times.len());
        next.passing_times.insert(index, PassingTime::default());
        next
    }

    /// Drops the passing time at `index`, if present.
    pub(crate) fn without_passing_time_at(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.passing_times.len() {
            next.passing_times.remove(index);
        }
        next
    }
}
