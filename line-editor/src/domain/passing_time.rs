//! Passing time at one stop of a service journey.

use serde::{Deserialize, Serialize};

use super::{DomainError, ScheduleInstant, TimePoint, non_blank};

/// One of the four time fields of a passing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeField {
    Arrival,
    Departure,
    EarliestDeparture,
    LatestArrival,
}

/// The timing at which a service journey passes one stop.
///
/// A passing time is either *fixed* (arrival/departure) or a *flexible
/// window* (earliest departure/latest arrival). Nothing prevents a snapshot
/// from holding fields of both shapes while it is being edited; the chain
/// validator deliberately cross-checks every combination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassingTime {
    pub arrival_time: Option<String>,
    pub arrival_day_offset: Option<u32>,
    pub departure_time: Option<String>,
    pub departure_day_offset: Option<u32>,
    pub earliest_departure_time: Option<String>,
    pub earliest_departure_day_offset: Option<u32>,
    pub latest_arrival_time: Option<String>,
    pub latest_arrival_day_offset: Option<u32>,
}

impl PassingTime {
    /// A fixed passing time with only a departure (typical first stop).
    pub fn departing(time: &str, day_offset: u32) -> Self {
        Self {
            departure_time: Some(time.to_string()),
            departure_day_offset: Some(day_offset),
            ..Self::default()
        }
    }

    /// A fixed passing time with only an arrival (typical last stop).
    pub fn arriving(time: &str, day_offset: u32) -> Self {
        Self {
            arrival_time: Some(time.to_string()),
            arrival_day_offset: Some(day_offset),
            ..Self::default()
        }
    }

    /// A fixed passing time with both arrival and departure.
    pub fn calling(arrival: (&str, u32), departure: (&str, u32)) -> Self {
        Self {
            arrival_time: Some(arrival.0.to_string()),
            arrival_day_offset: Some(arrival.1),
            departure_time: Some(departure.0.to_string()),
            departure_day_offset: Some(departure.1),
            ..Self::default()
        }
    }

    /// A flexible window between earliest departure and latest arrival.
    pub fn window(earliest_departure: (&str, u32), latest_arrival: (&str, u32)) -> Self {
        Self {
            earliest_departure_time: Some(earliest_departure.0.to_string()),
            earliest_departure_day_offset: Some(earliest_departure.1),
            latest_arrival_time: Some(latest_arrival.0.to_string()),
            latest_arrival_day_offset: Some(latest_arrival.1),
            ..Self::default()
        }
    }

    /// Sets `field` from text typed by the user, normalized to `HH:MM:SS`.
    ///
    /// Blank input clears the field and its day offset. Unparsable input is
    /// rejected and the snapshot is left as it was.
    pub fn with_time_entered(
        &self,
        field: TimeField,
        input: &str,
        day_offset: u32,
    ) -> Result<Self, DomainError> {
        let (time, offset) = match non_blank(Some(input)) {
            None => (None, None),
            Some(text) => {
                let instant = ScheduleInstant::parse(text.trim(), day_offset)?;
                (
                    Some(instant.time().format("%H:%M:%S").to_string()),
                    Some(instant.day_offset()),
                )
            }
        };

        let mut next = self.clone();
        let (time_slot, offset_slot) = match field {
            TimeField::Arrival => (&mut next.arrival_time, &mut next.arrival_day_offset),
            TimeField::Departure => (&mut next.departure_time, &mut next.departure_day_offset),
            TimeField::EarliestDeparture => (
                &mut next.earliest_departure_time,
                &mut next.earliest_departure_day_offset,
            ),
            TimeField::LatestArrival => (
                &mut next.latest_arrival_time,
                &mut next.latest_arrival_day_offset,
            ),
        };
        *time_slot = time;
        *offset_slot = offset;
        Ok(next)
    }

    pub fn arrival(&self) -> TimePoint<'_> {
        TimePoint::new(self.arrival_time.as_deref(), self.arrival_day_offset)
    }

    pub fn departure(&self) -> TimePoint<'_> {
        TimePoint::new(self.departure_time.as_deref(), self.departure_day_offset)
    }

    pub fn earliest_departure(&self) -> TimePoint<'_> {
        TimePoint::new(
            self.earliest_departure_time.as_deref(),
            self.earliest_departure_day_offset,
        )
    }

    pub fn latest_arrival(&self) -> TimePoint<'_> {
        TimePoint::new(
            self.latest_arrival_time.as_deref(),
            self.latest_arrival_day_offset,
        )
    }

    /// Returns true if none of the four time fields is set.
    pub fn is_empty(&self) -> bool {
        !self.arrival().is_set()
            && !self.departure().is_set()
            && !self.earliest_departure().is_set()
            && !self.latest_arrival().is_set()
    }

    /// Returns true if the field that closes a journey is set.
    pub fn has_closing_time(&self) -> bool {
        self.arrival().is_set() || self.latest_arrival().is_set()
    }

    /// Returns true if this passing time uses the flexible window shape.
    pub fn is_flexible(&self) -> bool {
        self.earliest_departure().is_set() || self.latest_arrival().is_set()
    }
}
