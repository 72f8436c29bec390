//! Wizard navigation for the line editor.
//!
//! The editor walks through About → JourneyPatterns → ServiceJourneys →
//! Review. Forward progress is gated by validity of the live snapshot.

mod controls;
mod machine;
mod step;

pub use controls::{EditorControls, UsageLookup};
pub use machine::{
    StepView, WizardEvent, WizardState, current_step_is_valid, max_allowed_step_index,
    step_is_valid, step_views, transition,
};
pub use step::Step;
