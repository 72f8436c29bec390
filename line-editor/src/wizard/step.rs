//! Wizard steps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One stage of the line editor, in navigation order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    #[default]
    About,
    JourneyPatterns,
    ServiceJourneys,
    Review,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::About,
        Step::JourneyPatterns,
        Step::ServiceJourneys,
        Step::Review,
    ];

    /// Position of this step, 0-based.
    pub fn index(self) -> usize {
        match self {
            Step::About => 0,
            Step::JourneyPatterns => 1,
            Step::ServiceJourneys => 2,
            Step::Review => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Step::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Step::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Step::from_index)
    }

    /// Message key for the step label.
    pub fn label_key(self) -> &'static str {
        match self {
            Step::About => "stepAbout",
            Step::JourneyPatterns => "stepJourneyPatterns",
            Step::ServiceJourneys => "stepServiceJourneys",
            Step::Review => "stepReview",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_key())
    }
}
