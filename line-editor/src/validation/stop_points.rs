//! Structural validation of a journey pattern's stop points.
//!
//! Unlike passing times, every check runs for every stop point and all
//! failures are reported together, so the editor can flag each field.

use std::fmt;

use serde::Serialize;

use crate::domain::{FlexibleLineType, JourneyPattern, StopPoint};

use super::booking::validate_booking_arrangement;

/// Why a stop point was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StopPointErrorKind {
    PlaceReferenceMissing,
    FrontTextMissing,
    BoardingRoleInvalid,
}

impl StopPointErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopPointErrorKind::PlaceReferenceMissing => "PlaceReferenceMissing",
            StopPointErrorKind::FrontTextMissing => "FrontTextMissing",
            StopPointErrorKind::BoardingRoleInvalid => "BoardingRoleInvalid",
        }
    }
}

impl fmt::Display for StopPointErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field errors for one stop point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointErrors {
    pub place_error: Option<StopPointErrorKind>,
    pub front_text_error: Option<StopPointErrorKind>,
    pub boarding_error: Option<StopPointErrorKind>,
}

impl StopPointErrors {
    pub fn is_clean(&self) -> bool {
        self.place_error.is_none() && self.front_text_error.is_none() && self.boarding_error.is_none()
    }
}

/// Which stop-point rules apply to a journey pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopPointStrategy {
    /// Quays or flexible areas, any number of stops.
    Generic,
    /// One boarding area followed by one alighting area.
    AreasOnly,
}

impl StopPointStrategy {
    /// Lines without a flexible type are ordinary fixed lines and use the
    /// generic rules.
    pub fn for_line_type(flexible_line_type: Option<FlexibleLineType>) -> Self {
        match flexible_line_type {
            None => StopPointStrategy::Generic,
            Some(FlexibleLineType::Fixed) => StopPointStrategy::Generic,
            Some(FlexibleLineType::MixedFlexible) => StopPointStrategy::Generic,
            Some(FlexibleLineType::FlexibleAreasOnly) => StopPointStrategy::AreasOnly,
        }
    }
}

/// Validate a stop point in a fixed or mixed-flexible journey pattern.
pub fn validate_stop_point(stop_point: &StopPoint, is_first: bool, is_last: bool) -> StopPointErrors {
    let place_error = (stop_point.quay_ref().is_none()
        && stop_point.flexible_stop_place_ref().is_none())
    .then_some(StopPointErrorKind::PlaceReferenceMissing);

    let front_text_error = (is_first && stop_point.front_text().is_none())
        .then_some(StopPointErrorKind::FrontTextMissing);

    let bad_first = is_first && (stop_point.for_alighting || !stop_point.for_boarding);
    let bad_last = is_last && (stop_point.for_boarding || !stop_point.for_alighting);
    let boarding_error = (bad_first || bad_last).then_some(StopPointErrorKind::BoardingRoleInvalid);

    StopPointErrors {
        place_error,
        front_text_error,
        boarding_error,
    }
}

/// Validate a stop point in a flexible-areas-only journey pattern.
///
/// Boarding flags are fixed by position in this variant and not checked.
pub fn validate_area_stop_point(stop_point: &StopPoint, is_first: bool) -> StopPointErrors {
    StopPointErrors {
        place_error: stop_point
            .flexible_stop_place_ref()
            .is_none()
            .then_some(StopPointErrorKind::PlaceReferenceMissing),
        front_text_error: (is_first && stop_point.front_text().is_none())
            .then_some(StopPointErrorKind::FrontTextMissing),
        boarding_error: None,
    }
}

/// Validate every stop point of a sequence, index-aligned with the input.
pub fn validate_stop_points(
    stop_points: &[StopPoint],
    strategy: StopPointStrategy,
) -> Vec<StopPointErrors> {
    let len = stop_points.len();
    stop_points
        .iter()
        .enumerate()
        .map(|(index, sp)| match strategy {
            StopPointStrategy::Generic => validate_stop_point(sp, index == 0, index + 1 == len),
            StopPointStrategy::AreasOnly => validate_area_stop_point(sp, index == 0),
        })
        .collect()
}

/// A journey pattern is valid with at least two clean stop points.
///
/// Booking arrangements attached to stop points must also be valid.
pub fn journey_pattern_is_valid(journey_pattern: &JourneyPattern, strategy: StopPointStrategy) -> bool {
    let points = &journey_pattern.points_in_sequence;
    points.len() >= 2
        && validate_stop_points(points, strategy)
            .iter()
            .all(StopPointErrors::is_clean)
        && points
            .iter()
            .all(|sp| validate_booking_arrangement(sp.booking_arrangement.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingArrangement;

    fn first_stop() -> StopPoint {
        StopPoint::at_quay("NSR:Quay:1")
            .with_front_text("Sentrum")
            .with_boarding(true, false)
    }

    fn last_stop() -> StopPoint {
        StopPoint::at_quay("NSR:Quay:2").with_boarding(false, true)
    }

    #[test]
    fn valid_first_middle_last() {
        assert!(validate_stop_point(&first_stop(), true, false).is_clean());
        assert!(validate_stop_point(&StopPoint::at_quay("Q"), false, false).is_clean());
        assert!(validate_stop_point(&last_stop(), false, true).is_clean());
    }

    #[test]
    fn missing_place_reference() {
        let sp = StopPoint::default();
        let errors = validate_stop_point(&sp, false, false);
        assert_eq!(errors.place_error, Some(StopPointErrorKind::PlaceReferenceMissing));

        let blank = StopPoint {
            quay_ref: Some("  ".into()),
            ..StopPoint::default()
        };
        assert!(validate_stop_point(&blank, false, false).place_error.is_some());

        let area = StopPoint::at_flexible_stop_place("FSP:1");
        assert!(validate_stop_point(&area, false, false).is_clean());
    }

    #[test]
    fn front_text_only_required_on_first() {
        let sp = StopPoint::at_quay("Q").with_boarding(true, false);
        assert_eq!(
            validate_stop_point(&sp, true, false).front_text_error,
            Some(StopPointErrorKind::FrontTextMissing)
        );
        assert_eq!(validate_stop_point(&sp, false, false).front_text_error, None);
    }

    #[test]
    fn boarding_rules_on_first_and_last() {
        let alighting_first = first_stop().with_boarding(true, true);
        assert_eq!(
            validate_stop_point(&alighting_first, true, false).boarding_error,
            Some(StopPointErrorKind::BoardingRoleInvalid)
        );

        let no_boarding_first = first_stop().with_boarding(false, false);
        assert!(validate_stop_point(&no_boarding_first, true, false).boarding_error.is_some());

        let boarding_last = last_stop().with_boarding(true, true);
        assert!(validate_stop_point(&boarding_last, false, true).boarding_error.is_some());

        let no_alighting_last = last_stop().with_boarding(false, false);
        assert!(validate_stop_point(&no_alighting_last, false, true).boarding_error.is_some());
    }

    #[test]
    fn all_errors_reported_together() {
        let sp = StopPoint::default().with_boarding(false, true);
        let errors = validate_stop_point(&sp, true, false);
        assert!(errors.place_error.is_some());
        assert!(errors.front_text_error.is_some());
        assert!(errors.boarding_error.is_some());
    }

    #[test]
    fn area_variant_requires_flexible_stop_place() {
        let quay = StopPoint::at_quay("Q").with_front_text("Sentrum");
        assert_eq!(
            validate_area_stop_point(&quay, true).place_error,
            Some(StopPointErrorKind::PlaceReferenceMissing)
        );

        let area = StopPoint::at_flexible_stop_place("FSP:1");
        let errors = validate_area_stop_point(&area, true);
        assert_eq!(errors.front_text_error, Some(StopPointErrorKind::FrontTextMissing));
        assert!(validate_area_stop_point(&area, false).is_clean());
    }

    #[test]
    fn strategy_dispatch() {
        assert_eq!(StopPointStrategy::for_line_type(None), StopPointStrategy::Generic);
        assert_eq!(
            StopPointStrategy::for_line_type(Some(FlexibleLineType::MixedFlexible)),
            StopPointStrategy::Generic
        );
        assert_eq!(
            StopPointStrategy::for_line_type(Some(FlexibleLineType::FlexibleAreasOnly)),
            StopPointStrategy::AreasOnly
        );
    }

    #[test]
    fn journey_pattern_needs_two_stops() {
        let jp = JourneyPattern {
            points_in_sequence: vec![first_stop()],
            ..JourneyPattern::default()
        };
        assert!(!journey_pattern_is_valid(&jp, StopPointStrategy::Generic));

        let jp = jp.with_stop_point_added(last_stop());
        assert!(journey_pattern_is_valid(&jp, StopPointStrategy::Generic));
    }

    #[test]
    fn areas_only_pattern() {
        let jp = JourneyPattern {
            points_in_sequence: vec![
                StopPoint::at_flexible_stop_place("FSP:1")
                    .with_front_text("Sone")
                    .with_boarding(true, false),
                StopPoint::at_flexible_stop_place("FSP:2").with_boarding(false, true),
            ],
            ..JourneyPattern::default()
        };
        assert!(journey_pattern_is_valid(&jp, StopPointStrategy::AreasOnly));
        assert!(journey_pattern_is_valid(&jp, StopPointStrategy::Generic));

        let quay_jp = JourneyPattern {
            points_in_sequence: vec![first_stop(), last_stop()],
            ..JourneyPattern::default()
        };
        assert!(!journey_pattern_is_valid(&quay_jp, StopPointStrategy::AreasOnly));
    }

    #[test]
    fn invalid_stop_booking_invalidates_pattern() {
        let jp = JourneyPattern {
            points_in_sequence: vec![
                first_stop().with_booking_arrangement(Some(BookingArrangement::default())),
                last_stop(),
            ],
            ..JourneyPattern::default()
        };
        assert!(!journey_pattern_is_valid(&jp, StopPointStrategy::Generic));
    }

    #[test]
    fn errors_serialize_as_tokens() {
        let errors = validate_stop_point(&StopPoint::default(), false, false);
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"placeError":"PlaceReferenceMissing","frontTextError":null,"boardingError":null}"#
        );
    }
}
