//! Stop points in a journey pattern.

use serde::{Deserialize, Serialize};

use super::{BookingArrangement, non_blank};

/// Destination text shown on the vehicle from this stop onwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DestinationDisplay {
    pub front_text: Option<String>,
}

/// Position of a stop point within its journey pattern.
///
/// Derived from the index, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StopPointRole {
    First,
    Middle,
    Last,
}

impl StopPointRole {
    /// Role of the stop at `index` in a sequence of `len` stops.
    ///
    /// A single-stop sequence reports `First`.
    pub fn at(index: usize, len: usize) -> Self {
        if index == 0 {
            StopPointRole::First
        } else if index + 1 == len {
            StopPointRole::Last
        } else {
            StopPointRole::Middle
        }
    }
}

/// A place in a journey pattern, with boarding and alighting capabilities.
///
/// During editing both `quay_ref` and `flexible_stop_place_ref` may be
/// present; the `with_*_ref` transforms reconcile them to exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StopPoint {
    pub quay_ref: Option<String>,
    pub flexible_stop_place_ref: Option<String>,
    pub for_boarding: bool,
    pub for_alighting: bool,
    pub destination_display: Option<DestinationDisplay>,
    pub booking_arrangement: Option<BookingArrangement>,
}

impl Default for StopPoint {
    fn default() -> Self {
        Self {
            quay_ref: None,
            flexible_stop_place_ref: None,
            for_boarding: true,
            for_alighting: true,
            destination_display: None,
            booking_arrangement: None,
        }
    }
}

impl StopPoint {
    /// A stop at an external quay.
    pub fn at_quay(quay_ref: &str) -> Self {
        Self {
            quay_ref: Some(quay_ref.to_string()),
            ..Self::default()
        }
    }

    /// A stop at a flexible stop place (area).
    pub fn at_flexible_stop_place(flexible_stop_place_ref: &str) -> Self {
        Self {
            flexible_stop_place_ref: Some(flexible_stop_place_ref.to_string()),
            ..Self::default()
        }
    }

    pub fn quay_ref(&self) -> Option<&str> {
        non_blank(self.quay_ref.as_deref())
    }

    pub fn flexible_stop_place_ref(&self) -> Option<&str> {
        non_blank(self.flexible_stop_place_ref.as_deref())
    }

    /// Returns the non-blank front text, if any.
    pub fn front_text(&self) -> Option<&str> {
        self.destination_display
            .as_ref()
            .and_then(|d| non_blank(d.front_text.as_deref()))
    }

    /// Sets the quay reference and clears any flexible stop place.
    pub fn with_quay_ref(&self, quay_ref: &str) -> Self {
        Self {
            quay_ref: Some(quay_ref.to_string()),
            flexible_stop_place_ref: None,
            ..self.clone()
        }
    }

    /// Sets the flexible stop place and clears any quay reference.
    pub fn with_flexible_stop_place_ref(&self, flexible_stop_place_ref: &str) -> Self {
        Self {
            quay_ref: None,
            flexible_stop_place_ref: Some(flexible_stop_place_ref.to_string()),
            ..self.clone()
        }
    }

    pub fn with_front_text(&self, front_text: &str) -> Self {
        Self {
            destination_display: Some(DestinationDisplay {
                front_text: Some(front_text.to_string()),
            }),
            ..self.clone()
        }
    }

    pub fn with_boarding(&self, for_boarding: bool, for_alighting: bool) -> Self {
        Self {
            for_boarding,
            for_alighting,
            ..self.clone()
        }
    }

    pub fn with_booking_arrangement(&self, booking: Option<BookingArrangement>) -> Self {
        Self {
            booking_arrangement: booking,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_index() {
        assert_eq!(StopPointRole::at(0, 3), StopPointRole::First);
        assert_eq!(StopPointRole::at(1, 3), StopPointRole::Middle);
        assert_eq!(StopPointRole::at(2, 3), StopPointRole::Last);
        assert_eq!(StopPointRole::at(0, 1), StopPointRole::First);
        assert_eq!(StopPointRole::at(1, 2), StopPointRole::Last);
    }

    #[test]
    fn setting_one_reference_clears_the_other() {
        let sp = StopPoint {
            quay_ref: Some("NSR:Quay:1".into()),
            flexible_stop_place_ref: Some("FSP:1".into()),
            ..StopPoint::default()
        };

        let quay = sp.with_quay_ref("NSR:Quay:2");
        assert_eq!(quay.quay_ref(), Some("NSR:Quay:2"));
        assert_eq!(quay.flexible_stop_place_ref(), None);

        let area = sp.with_flexible_stop_place_ref("FSP:2");
        assert_eq!(area.quay_ref(), None);
        assert_eq!(area.flexible_stop_place_ref(), Some("FSP:2"));

        // Original snapshot untouched
        assert_eq!(sp.quay_ref(), Some("NSR:Quay:1"));
    }

    #[test]
    fn blank_front_text_is_none() {
        assert_eq!(StopPoint::default().front_text(), None);
        assert_eq!(StopPoint::default().with_front_text("  ").front_text(), None);
        assert_eq!(
            StopPoint::default().with_front_text("Sentrum").front_text(),
            Some("Sentrum")
        );
    }

    #[test]
    fn new_stop_point_allows_boarding_and_alighting() {
        let sp = StopPoint::at_quay("NSR:Quay:1");
        assert!(sp.for_boarding);
        assert!(sp.for_alighting);
    }
}
