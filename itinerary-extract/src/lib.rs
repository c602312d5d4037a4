//! Travel itinerary extraction.
//!
//! Reads a saved rail booking confirmation page and pulls out one record per
//! booked segment: times, stations, duration, train, car, seat, seat class
//! and booking reference.

pub mod classify;
pub mod domain;
pub mod markup;
pub mod output;
pub mod scan;
