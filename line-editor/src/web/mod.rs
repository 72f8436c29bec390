//! Web layer for the line editor.
//!
//! Exposes the validation engine over HTTP so an external editor UI can
//! post its current snapshot and render feedback from the returned tokens.

mod dto;
mod routes;

pub use dto::*;
pub use routes::{AppError, create_router};
