//! Booking arrangement validation.

use crate::domain::BookingArrangement;

/// Validate an optional booking arrangement.
///
/// No arrangement at all is valid. When present, exactly one booking
/// limit must be expressed: either a minimum booking period, or a latest
/// booking time together with `bookWhen`.
///
/// # Examples
///
/// ```
/// use line_editor::domain::{BookingArrangement, PurchaseWhen};
/// use line_editor::validation::validate_booking_arrangement;
///
/// assert!(validate_booking_arrangement(None));
/// assert!(!validate_booking_arrangement(Some(&BookingArrangement::default())));
///
/// let latest = BookingArrangement {
///     latest_booking_time: Some("14:00".into()),
///     book_when: Some(PurchaseWhen::AdvanceOnly),
///     ..Default::default()
/// };
/// assert!(validate_booking_arrangement(Some(&latest)));
/// ```
pub fn validate_booking_arrangement(booking: Option<&BookingArrangement>) -> bool {
    booking.is_none_or(booking_arrangement_is_valid)
}

/// Validate a booking arrangement that is known to be present.
pub fn booking_arrangement_is_valid(booking: &BookingArrangement) -> bool {
    let period = booking.has_minimum_booking_period();
    let latest = booking.has_latest_booking_time();
    let when = booking.has_book_when();

    if period && when {
        return false;
    }
    if latest != when {
        return false;
    }
    period || latest || when
}
