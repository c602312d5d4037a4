//! Travel segment record.

use std::fmt;

use serde::Serialize;

/// One travel segment extracted from a booking confirmation.
///
/// Every field is the raw text found in the document (after trimming and,
/// for the fixed-width fields, slicing). Fields that were never seen stay
/// empty; the record does not validate its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRecord {
    /// Departure time of day.
    pub start: String,
    /// Arrival time of day.
    pub end: String,
    /// Elapsed time, the last 5 characters of its text node.
    pub duration: String,
    /// Departure station name.
    pub from: String,
    /// Arrival station name.
    pub to: String,
    /// Car (coach) number, the last 3 characters of a "Voiture" node.
    pub car: String,
    /// Seat number, the last 3 characters of a "Place" node.
    pub seat: String,
    /// Train number, the last 4 characters of its text node.
    pub train: String,
    /// Booking reference.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Seat class label.
    pub place_type: String,
}

impl TravelRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for TravelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} - {}) {} -> {} - v:{} pl:{} [{}] ref:{}",
            self.start,
            self.end,
            self.duration,
            self.train,
            self.from,
            self.to,
            self.car,
            self.seat,
            self.place_type,
            self.reference
        )
    }
}

/// A record paired with the day-section label it was found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedRecord {
    /// Display label of the enclosing day section (empty before the first header).
    pub day: String,
    #[serde(flatten)]
    pub record: TravelRecord,
}

impl fmt::Display for DatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.record, self.day)
    }
}
