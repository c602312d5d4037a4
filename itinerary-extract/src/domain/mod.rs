//! Domain types for extracted itineraries.
//!
//! A [`TravelRecord`] is the raw text of one booked travel segment; a
//! [`DayLabel`] is the display form of the day section it belongs to.

mod day;
mod record;

pub use day::{DayLabel, DayLabelError};
pub use record::{DatedRecord, TravelRecord};
