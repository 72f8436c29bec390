//! Step gating for the line editor.
//!
//! Reachability is always derived from the snapshot passed in; nothing is
//! cached between calls, so an edit that breaks an earlier step lowers the
//! ceiling on the very next check.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Line;
use crate::validation::{about_step_is_valid, journey_patterns_are_valid, service_journeys_are_valid};

use super::Step;

/// Index of the furthest step the user may navigate to.
///
/// This is the index of the first invalid step, or the review step when
/// every step is valid.
///
/// # Examples
///
/// ```
/// use line_editor::domain::Line;
/// use line_editor::wizard::max_allowed_step_index;
///
/// assert_eq!(max_allowed_step_index(&Line::new_blank()), 0);
/// ```
pub fn max_allowed_step_index(line: &Line) -> usize {
    Step::ALL
        .into_iter()
        .find(|step| !step_is_valid(*step, line))
        .unwrap_or(Step::Review)
        .index()
}

/// Is the step at `step_index` currently valid?
///
/// Unlike reachability this looks at one step in isolation, so a later step
/// can be flagged as broken while the user works on an earlier one. The
/// review step is valid when the whole line is. Unknown indices are invalid.
pub fn current_step_is_valid(step_index: usize, line: &Line) -> bool {
    Step::from_index(step_index).is_some_and(|step| step_is_valid(step, line))
}

/// Validity of a single step.
pub fn step_is_valid(step: Step, line: &Line) -> bool {
    match step {
        Step::About => about_step_is_valid(line),
        Step::JourneyPatterns => journey_patterns_are_valid(line),
        Step::ServiceJourneys => service_journeys_are_valid(line),
        Step::Review => Step::ALL[..3].iter().all(|s| step_is_valid(*s, line)),
    }
}

/// Navigation state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub current_step: Step,
}

/// A navigation request from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "step", rename_all = "camelCase")]
pub enum WizardEvent {
    /// A click on a step header.
    GoTo(Step),
    Next,
    Previous,
}

/// Apply `event` to `state` against the current snapshot.
///
/// A move is honored only if its target is within the reachable range;
/// otherwise the state is returned unchanged.
pub fn transition(state: WizardState, event: WizardEvent, line: &Line) -> WizardState {
    let target = match event {
        WizardEvent::GoTo(step) => Some(step),
        WizardEvent::Next => state.current_step.next(),
        WizardEvent::Previous => state.current_step.prev(),
    };

    let Some(target) = target else {
        return state;
    };

    let max_index = max_allowed_step_index(line);
    if target.index() > max_index {
        debug!(?event, %target, max_index, "navigation blocked");
        return state;
    }

    debug!(from = %state.current_step, to = %target, "step changed");
    WizardState {
        current_step: target,
    }
}

/// How the editor should render one step header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub step: Step,
    pub index: usize,
    pub label_key: &'static str,
    pub is_current: bool,
    pub is_reachable: bool,
    pub is_valid: bool,
}

/// Derive the view of every step for the current state and snapshot.
pub fn step_views(state: WizardState, line: &Line) -> Vec<StepView> {
    let max_index = max_allowed_step_index(line);
    Step::ALL
        .into_iter()
        .map(|step| StepView {
            step,
            index: step.index(),
            label_key: step.label_key(),
            is_current: step == state.current_step,
            is_reachable: step.index() <= max_index,
            is_valid: step_is_valid(step, line),
        })
        .collect()
}
