//! Booking arrangements for flexible services.

use serde::{Deserialize, Serialize};

use super::non_blank;

/// How a booking can be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingMethod {
    CallDriver,
    CallOffice,
    Online,
    Other,
    PhoneAtStop,
    Text,
    None,
}

/// When payment for a booked journey is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PurchaseMoment {
    OnReservation,
    BeforeBoarding,
    AfterBoarding,
    OnCheckOut,
}

/// Relative to the day of travel, when a booking must be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PurchaseWhen {
    TimeOfTravelOnly,
    DayOfTravelOnly,
    UntilPreviousDay,
    AdvanceOnly,
    AdvanceAndDayOfTravel,
    Other,
}

/// Which kind of booking limit an arrangement expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingLimitType {
    None,
    LatestTime,
    MinimumPeriod,
}

/// Contact details for making a booking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub further_details: Option<String>,
}

/// Rules describing how and when a flexible trip must be pre-booked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingArrangement {
    pub booking_contact: Option<Contact>,
    pub booking_methods: Vec<BookingMethod>,
    pub buy_when: Vec<PurchaseMoment>,
    pub book_when: Option<PurchaseWhen>,
    /// Latest time of day a booking is accepted ("HH:MM" or "HH:MM:SS").
    pub latest_booking_time: Option<String>,
    /// ISO 8601 duration, e.g. "PT2H".
    pub minimum_booking_period: Option<String>,
    pub booking_note: Option<String>,
}

impl BookingArrangement {
    pub fn has_latest_booking_time(&self) -> bool {
        non_blank(self.latest_booking_time.as_deref()).is_some()
    }

    pub fn has_minimum_booking_period(&self) -> bool {
        non_blank(self.minimum_booking_period.as_deref()).is_some()
    }

    pub fn has_book_when(&self) -> bool {
        self.book_when.is_some()
    }

    /// Derives the limit mode from which fields are set.
    ///
    /// A minimum period takes precedence; `bookWhen` on its own still counts
    /// as a latest-time limit so the editor shows the matching inputs.
    pub fn limit_type(&self) -> BookingLimitType {
        if self.has_minimum_booking_period() {
            BookingLimitType::MinimumPeriod
        } else if self.has_latest_booking_time() || self.has_book_when() {
            BookingLimitType::LatestTime
        } else {
            BookingLimitType::None
        }
    }

    /// Switches the limit mode, clearing the fields of the other mode.
    pub fn with_limit_type(&self, limit: BookingLimitType) -> Self {
        let mut next = self.clone();
        match limit {
            BookingLimitType::None => {
                next.latest_booking_time = None;
                next.book_when = None;
                next.minimum_booking_period = None;
            }
            BookingLimitType::LatestTime => {
                next.minimum_booking_period = None;
            }
            BookingLimitType::MinimumPeriod => {
                next.latest_booking_time = None;
                next.book_when = None;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_type_derivation() {
        let ba = BookingArrangement::default();
        assert_eq!(ba.limit_type(), BookingLimitType::None);

        let ba = BookingArrangement {
            minimum_booking_period: Some("PT2H".into()),
            ..Default::default()
        };
        assert_eq!(ba.limit_type(), BookingLimitType::MinimumPeriod);

        let ba = BookingArrangement {
            latest_booking_time: Some("14:00".into()),
            book_when: Some(PurchaseWhen::UntilPreviousDay),
            ..Default::default()
        };
        assert_eq!(ba.limit_type(), BookingLimitType::LatestTime);

        let ba = BookingArrangement {
            latest_booking_time: Some("".into()),
            ..Default::default()
        };
        assert_eq!(ba.limit_type(), BookingLimitType::None);
    }

    #[test]
    fn switching_limit_type_clears_other_fields() {
        let ba = BookingArrangement {
            latest_booking_time: Some("14:00".into()),
            book_when: Some(PurchaseWhen::DayOfTravelOnly),
            booking_methods: vec![BookingMethod::Online],
            ..Default::default()
        };
        let switched = ba.with_limit_type(BookingLimitType::MinimumPeriod);
        assert_eq!(switched.latest_booking_time, None);
        assert_eq!(switched.book_when, None);
        assert_eq!(switched.booking_methods, vec![BookingMethod::Online]);
        assert_eq!(ba.book_when, Some(PurchaseWhen::DayOfTravelOnly));
    }

    #[test]
    fn deserializes_enum_tokens() {
        let ba: BookingArrangement = serde_json::from_str(
            r#"{"bookWhen":"advanceAndDayOfTravel","bookingMethods":["phoneAtStop"],"buyWhen":["onCheckOut"]}"#,
        )
        .unwrap();
        assert_eq!(ba.book_when, Some(PurchaseWhen::AdvanceAndDayOfTravel));
        assert_eq!(ba.booking_methods, vec![BookingMethod::PhoneAtStop]);
        assert_eq!(ba.buy_when, vec![PurchaseMoment::OnCheckOut]);
    }
}
