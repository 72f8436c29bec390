//! Lines: the root of an editor snapshot.

use serde::{Deserialize, Serialize};

use super::{BookingArrangement, DomainError, JourneyPattern, non_blank};

/// Structural variant of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexibleLineType {
    /// Fixed route served by flexible booking.
    Fixed,
    /// Fixed stops mixed with flexible areas.
    MixedFlexible,
    /// Only flexible areas; one boarding area and one alighting area.
    FlexibleAreasOnly,
}

/// A notice attached to a line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notice {
    pub text: String,
}

/// A line being edited, with its journey patterns.
///
/// Every field is optional so that a "new line" snapshot can start blank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Line {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub public_code: Option<String>,
    pub private_code: Option<String>,
    pub operator_ref: Option<String>,
    pub network_ref: Option<String>,
    pub transport_mode: Option<String>,
    pub transport_submode: Option<String>,
    pub journey_patterns: Vec<JourneyPattern>,
    pub flexible_line_type: Option<FlexibleLineType>,
    pub booking_arrangement: Option<BookingArrangement>,
    pub notices: Vec<Notice>,
    pub branding_refs: Vec<String>,
}

impl Line {
    /// A blank snapshot for creating a new line.
    ///
    /// Starts with one empty journey pattern for the editor to fill in.
    pub fn new_blank() -> Self {
        Self {
            journey_patterns: vec![JourneyPattern::default()],
            ..Self::default()
        }
    }

    /// A blank snapshot for a new flexible line of the given type.
    pub fn new_flexible(flexible_line_type: FlexibleLineType) -> Self {
        Self {
            flexible_line_type: Some(flexible_line_type),
            ..Self::new_blank()
        }
    }

    /// Returns true for lines edited through the flexible line editor.
    pub fn is_flexible(&self) -> bool {
        self.flexible_line_type.is_some()
    }

    /// Returns true if the line has been persisted before.
    pub fn is_persisted(&self) -> bool {
        non_blank(self.id.as_deref()).is_some()
    }

    /// The scalar "about the line" fields, in form order.
    pub fn about_fields(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("name", non_blank(self.name.as_deref())),
            ("publicCode", non_blank(self.public_code.as_deref())),
            ("operatorRef", non_blank(self.operator_ref.as_deref())),
            ("networkRef", non_blank(self.network_ref.as_deref())),
            ("transportMode", non_blank(self.transport_mode.as_deref())),
            ("transportSubmode", non_blank(self.transport_submode.as_deref())),
        ]
    }

    /// Sets the transport mode, clearing a submode that belonged to the old one.
    pub fn with_transport_mode(&self, mode: &str) -> Self {
        let changed = self.transport_mode.as_deref() != Some(mode);
        Self {
            transport_mode: Some(mode.to_string()),
            transport_submode: if changed {
                None
            } else {
                self.transport_submode.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_flexible_line_type(&self, flexible_line_type: Option<FlexibleLineType>) -> Self {
        Self {
            flexible_line_type,
            ..self.clone()
        }
    }

    pub fn with_booking_arrangement(&self, booking: Option<BookingArrangement>) -> Self {
        Self {
            booking_arrangement: booking,
            ..self.clone()
        }
    }

    pub fn with_journey_pattern_added(&self, journey_pattern: JourneyPattern) -> Self {
        let mut next = self.clone();
        next.journey_patterns.push(journey_pattern);
        next
    }

    /// Replaces the journey pattern at `index`.
    pub fn with_journey_pattern(
        &self,
        index: usize,
        journey_pattern: JourneyPattern,
    ) -> Result<Self, DomainError> {
        let len = self.journey_patterns.len();
        if index >= len {
            return Err(DomainError::IndexOutOfBounds { index, len });
        }
        let mut next = self.clone();
        next.journey_patterns[index] = journey_pattern;
        Ok(next)
    }

    pub fn with_journey_pattern_removed(&self, index: usize) -> Result<Self, DomainError> {
        let len = self.journey_patterns.len();
        if index >= len {
            return Err(DomainError::IndexOutOfBounds { index, len });
        }
        let mut next = self.clone();
        next.journey_patterns.remove(index);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_blank_line() {
        let line = Line::new_blank();
        assert_eq!(line.journey_patterns.len(), 1);
        assert!(!line.is_flexible());
        assert!(!line.is_persisted());
        assert!(line.about_fields().iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn new_flexible_line() {
        let line = Line::new_flexible(FlexibleLineType::FlexibleAreasOnly);
        assert!(line.is_flexible());
        assert_eq!(line.flexible_line_type, Some(FlexibleLineType::FlexibleAreasOnly));
    }

    #[test]
    fn changing_mode_clears_submode() {
        let line = Line {
            transport_mode: Some("bus".into()),
            transport_submode: Some("localBus".into()),
            ..Line::default()
        };
        assert_eq!(
            line.with_transport_mode("bus").transport_submode.as_deref(),
            Some("localBus")
        );
        assert_eq!(line.with_transport_mode("water").transport_submode, None);
    }

    #[test]
    fn journey_pattern_transforms() {
        let line = Line::new_blank().with_journey_pattern_added(JourneyPattern::default());
        assert_eq!(line.journey_patterns.len(), 2);

        let renamed = line
            .with_journey_pattern(1, JourneyPattern::default().with_name("Return"))
            .unwrap();
        assert_eq!(renamed.journey_patterns[1].name(), Some("Return"));

        let removed = renamed.with_journey_pattern_removed(0).unwrap();
        assert_eq!(removed.journey_patterns.len(), 1);
        assert!(renamed.with_journey_pattern_removed(2).is_err());
    }

    #[test]
    fn flexible_line_type_tokens() {
        let t: FlexibleLineType = serde_json::from_str(r#""flexibleAreasOnly""#).unwrap();
        assert_eq!(t, FlexibleLineType::FlexibleAreasOnly);
        assert_eq!(
            serde_json::to_string(&FlexibleLineType::MixedFlexible).unwrap(),
            r#""mixedFlexible""#
        );
    }
}
