//! Save and delete enablement.

use serde::Serialize;

use crate::domain::Line;
use crate::validation::valid_line;

/// Answers whether a persisted line is referenced from elsewhere.
///
/// Implemented by whatever owns the stored data; the editor only asks.
pub trait UsageLookup {
    fn is_in_use(&self, line_id: &str) -> bool;
}

impl<F> UsageLookup for F
where
    F: Fn(&str) -> bool,
{
    fn is_in_use(&self, line_id: &str) -> bool {
        self(line_id)
    }
}

/// Which editor actions are currently available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorControls {
    pub save_enabled: bool,
    pub delete_enabled: bool,
}

impl EditorControls {
    /// Derive the controls from a snapshot.
    ///
    /// Save needs every step to be valid. Delete needs a persisted line that
    /// nothing references and no save or delete already in flight.
    pub fn derive<U: UsageLookup + ?Sized>(line: &Line, usage: &U, in_flight: bool) -> Self {
        let delete_enabled = !in_flight
            && line
                .id
                .as_deref()
                .filter(|_| line.is_persisted())
                .is_some_and(|id| !usage.is_in_use(id));

        Self {
            save_enabled: valid_line(line),
            delete_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct KnownUsage(HashSet<&'static str>);

    impl UsageLookup for KnownUsage {
        fn is_in_use(&self, line_id: &str) -> bool {
            self.0.contains(line_id)
        }
    }

    fn persisted(id: &str) -> Line {
        Line {
            id: Some(id.to_string()),
            ..Line::new_blank()
        }
    }

    #[test]
    fn blank_line_cannot_be_saved_or_deleted() {
        let controls = EditorControls::derive(&Line::new_blank(), &|_: &str| false, false);
        assert_eq!(controls, EditorControls::default());
    }

    #[test]
    fn unused_persisted_line_can_be_deleted() {
        let usage = KnownUsage(HashSet::from(["L:2"]));
        assert!(EditorControls::derive(&persisted("L:1"), &usage, false).delete_enabled);
        assert!(!EditorControls::derive(&persisted("L:2"), &usage, false).delete_enabled);
    }

    #[test]
    fn in_flight_blocks_delete() {
        let controls = EditorControls::derive(&persisted("L:1"), &|_: &str| false, true);
        assert!(!controls.delete_enabled);
    }

    #[test]
    fn blank_id_is_not_persisted() {
        let controls = EditorControls::derive(&persisted(" "), &|_: &str| false, false);
        assert!(!controls.delete_enabled);
    }
}
