//! Domain error types.
//!
//! These errors represent invalid edits to a snapshot. They are distinct
//! from validation results, which never fail and are reported as error-kind
//! tokens instead.

/// Domain-level errors for snapshot transforms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// An edit addressed an element that does not exist
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A time field could not be parsed
    #[error(transparent)]
    Time(#[from] super::TimeError),

    /// A weekday symbol could not be parsed
    #[error(transparent)]
    Weekday(#[from] super::InvalidWeekday),
}
