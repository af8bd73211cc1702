use crate::error::{CarpoolError, CarpoolResult};

pub const DEFAULT_SEATS: i32 = 4;
pub const MAX_SEATS: i32 = 8;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> CarpoolResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(CarpoolError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Normalizes a seat count entered by a user into `1..=MAX_SEATS`.
/// Non-positive input falls back to the default, matching a cleared field.
pub fn seat_count(value: i32) -> i32 {
    if value <= 0 {
        DEFAULT_SEATS
    } else {
        value.min(MAX_SEATS)
    }
}

/// Seat capacity the engine derives from a stored count. Any positive
/// value is honored as-is.
pub fn capacity_from_seats(value: i32) -> u32 {
    if value <= 0 {
        DEFAULT_SEATS as u32
    } else {
        value as u32
    }
}
