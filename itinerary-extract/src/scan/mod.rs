//! Document scanning.
//!
//! Walks a booking page at the top level, tracks the current day section
//! and hands each travel block to the classifier.

mod config;
mod error;
mod scanner;

pub use config::ScanConfig;
pub use error::ScanError;
pub use scanner::{DocumentScanner, ScanSummary};
