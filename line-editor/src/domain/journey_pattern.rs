//! Journey patterns: ordered stop sequences shared by service journeys.

use serde::{Deserialize, Serialize};

use super::{DomainError, ServiceJourney, StopPoint, StopPointRole, non_blank};

/// An ordered, reusable route shape and the trips that run over it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JourneyPattern {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub private_code: Option<String>,
    pub points_in_sequence: Vec<StopPoint>,
    pub service_journeys: Vec<ServiceJourney>,
}

impl JourneyPattern {
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Role of the stop point at `index`.
    pub fn role_of(&self, index: usize) -> StopPointRole {
        StopPointRole::at(index, self.points_in_sequence.len())
    }

    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..self.clone()
        }
    }

    /// Inserts a stop point at `index` (appends when `index` is past the end).
    ///
    /// Every service journey gains a blank passing time at the same index.
    pub fn with_stop_point_inserted(&self, index: usize, stop_point: StopPoint) -> Self {
        let index = index.min(self.points_in_sequence.len());
        let mut points_in_sequence = self.points_in_sequence.clone();
        points_in_sequence.insert(index, stop_point);
        Self {
            points_in_sequence,
            service_journeys: self
                .service_journeys
                .iter()
                .map(|sj| sj.with_blank_passing_time_at(index))
                .collect(),
            ..self.clone()
        }
    }

    /// Appends a stop point.
    pub fn with_stop_point_added(&self, stop_point: StopPoint) -> Self {
        self.with_stop_point_inserted(self.points_in_sequence.len(), stop_point)
    }

    /// Removes the stop point at `index` and the matching passing times.
    pub fn with_stop_point_removed(&self, index: usize) -> Result<Self, DomainError> {
        let len = self.points_in_sequence.len();
        if index >= len {
            return Err(DomainError::IndexOutOfBounds { index, len });
        }
        let mut points_in_sequence = self.points_in_sequence.clone();
        points_in_sequence.remove(index);
        Ok(Self {
            points_in_sequence,
            service_journeys: self
                .service_journeys
                .iter()
                .map(|sj| sj.without_passing_time_at(index))
                .collect(),
            ..self.clone()
        })
    }

    /// Replaces the stop point at `index`.
    pub fn with_stop_point(&self, index: usize, stop_point: StopPoint) -> Result<Self, DomainError> {
        let len = self.points_in_sequence.len();
        if index >= len {
            return Err(DomainError::IndexOutOfBounds { index, len });
        }
        let mut next = self.clone();
        next.points_in_sequence[index] = stop_point;
        Ok(next)
    }

    /// Appends a blank service journey aligned with the current stop points.
    pub fn with_service_journey_added(&self) -> Self {
        let mut next = self.clone();
        next.service_journeys
            .push(ServiceJourney::blank(self.points_in_sequence.len()));
        next
    }

    /// Replaces the service journey at `index`.
    pub fn with_service_journey(
        &self,
        index: usize,
        service_journey: ServiceJourney,
    ) -> Result<Self, DomainError> {
        let len = self.service_journeys.len();
        if index >= len {
            return Err(DomainError::IndexOutOfBounds { index, len });
        }
        let mut next = self.clone();
        next.service_journeys[index] = service_journey;
        Ok(next)
    }

    pub fn with_service_journey_removed(&self, index: usize) -> Result<Self, DomainError> {
        let len = self.service_journeys.len();
        if index >= len {
            return Err(DomainError::IndexOutOfBounds { index, len });
        }
        let mut next = self.clone();
        next.service_journeys.remove(index);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PassingTime;

    fn pattern() -> JourneyPattern {
        JourneyPattern {
            points_in_sequence: vec![StopPoint::at_quay("Q:1"), StopPoint::at_quay("Q:2")],
            service_journeys: vec![ServiceJourney {
                passing_times: vec![
                    PassingTime::departing("08:00:00", 0),
                    PassingTime::arriving("08:30:00", 0),
                ],
                ..ServiceJourney::default()
            }],
            ..JourneyPattern::default()
        }
    }

    #[test]
    fn inserting_stop_keeps_passing_times_aligned() {
        let jp = pattern().with_stop_point_inserted(1, StopPoint::at_quay("Q:mid"));
        assert_eq!(jp.points_in_sequence.len(), 3);
        assert_eq!(jp.points_in_sequence[1].quay_ref(), Some("Q:mid"));
        let pts = &jp.service_journeys[0].passing_times;
        assert_eq!(pts.len(), 3);
        assert!(pts[1].is_empty());
        assert_eq!(pts[2], PassingTime::arriving("08:30:00", 0));
    }

    #[test]
    fn removing_stop_keeps_passing_times_aligned() {
        let jp = pattern().with_stop_point_removed(0).unwrap();
        assert_eq!(jp.points_in_sequence.len(), 1);
        assert_eq!(
            jp.service_journeys[0].passing_times,
            vec![PassingTime::arriving("08:30:00", 0)]
        );
    }

    #[test]
    fn removing_out_of_bounds_fails() {
        assert!(matches!(
            pattern().with_stop_point_removed(2),
            Err(DomainError::IndexOutOfBounds { index: 2, len: 2 })
        ));
    }

    #[test]
    fn appended_stop_goes_last() {
        let jp = pattern().with_stop_point_added(StopPoint::at_quay("Q:3"));
        assert_eq!(jp.role_of(2), StopPointRole::Last);
        assert_eq!(jp.role_of(1), StopPointRole::Middle);
        assert_eq!(jp.service_journeys[0].passing_times.len(), 3);
    }

    #[test]
    fn new_service_journey_matches_stop_count() {
        let jp = pattern().with_service_journey_added();
        assert_eq!(jp.service_journeys.len(), 2);
        assert_eq!(jp.service_journeys[1].passing_times.len(), 2);
    }
}
