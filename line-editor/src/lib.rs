//! Line editor validation engine.
//!
//! Decides, for any snapshot of a line being edited, whether each wizard
//! step is valid, whether a trip's passing times are chronologically
//! consistent, whether its day types describe at least one operating day,
//! and which steps the user may navigate to.

pub mod config;
pub mod domain;
pub mod validation;
pub mod web;
pub mod wizard;
