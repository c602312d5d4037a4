//! Field extraction rules.
//!
//! Applied to trimmed text each time a text node is committed to a field.
//! Later commits overwrite earlier ones.

use crate::domain::TravelRecord;

use super::state::Field;

/// Characters kept from a duration node ("H:MM" or "HhMM").
pub const DURATION_WIDTH: usize = 5;

/// Characters kept from a train node.
pub const TRAIN_WIDTH: usize = 4;

/// Characters kept from a car or seat node.
pub const PLACEMENT_WIDTH: usize = 3;

const CAR_MARKER: &str = "Voiture";
const SEAT_MARKER: &str = "Place";

/// Returns the last `n` characters of `text`, or all of it when shorter.
///
/// Counts `char`s, so multi-byte text is never split.
///
/// # Examples
///
/// ```
/// use itinerary_extract::classify::last_chars;
///
/// assert_eq!(last_chars("TGV INOUI 6607", 4), "6607");
/// assert_eq!(last_chars("1:05", 5), "1:05");
/// ```
pub fn last_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &text[i..],
        None => text,
    }
}

/// Fixed-width suffix, with any whitespace the slice picked up removed.
fn suffix(text: &str, n: usize) -> String {
    last_chars(text, n).trim().to_string()
}

/// Write `text` into `field` of `record`.
pub fn commit(record: &mut TravelRecord, field: Field, text: &str) {
    match field {
        Field::Start => record.start = text.to_string(),
        Field::End => record.end = text.to_string(),
        Field::From => record.from = text.to_string(),
        Field::To => record.to = text.to_string(),
        Field::Ref => record.reference = text.to_string(),
        Field::PlaceType => record.place_type = text.to_string(),
        Field::Duration => record.duration = suffix(text, DURATION_WIDTH),
        Field::Train => record.train = suffix(text, TRAIN_WIDTH),
        Field::Seat => {
            // A node naming both car and seat counts as car only, and the
            // car takes the node's suffix (the seat digits in that case).
            if text.contains(CAR_MARKER) {
                record.car = suffix(text, PLACEMENT_WIDTH);
            } else if text.contains(SEAT_MARKER) {
                record.seat = suffix(text, PLACEMENT_WIDTH);
            }
        }
    }
}
