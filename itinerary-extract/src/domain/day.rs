//! Day-section labels.
//!
//! Booking pages group segments by travel day. Each group starts with a
//! header whose identifier embeds the date as "DD/MM/YYYY"; segments below
//! it are reported with a short display label such as "Mon 02/01".

use std::fmt::{self, Write};

use chrono::NaiveDate;

/// Error returned when a day header cannot be turned into a label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DayLabelError {
    /// The date text does not match the expected input format.
    #[error("invalid day header date {text:?}: {reason}")]
    InvalidDate { text: String, reason: String },

    /// The display format contains an unsupported specifier.
    #[error("invalid day label format {0:?}")]
    InvalidFormat(String),
}

/// A parsed day-section header and its display label.
///
/// # Examples
///
/// ```
/// use itinerary_extract::domain::DayLabel;
///
/// let day = DayLabel::parse("02/01/2006", "%d/%m/%Y", "%a %d/%m").unwrap();
/// assert_eq!(day.as_str(), "Mon 02/01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    date: NaiveDate,
    label: String,
}

impl DayLabel {
    /// Parse `text` with `input_format` and render it with `display_format`.
    ///
    /// Both formats use chrono's strftime syntax.
    pub fn parse(
        text: &str,
        input_format: &str,
        display_format: &str,
    ) -> Result<Self, DayLabelError> {
        let date = NaiveDate::parse_from_str(text, input_format).map_err(|e| {
            DayLabelError::InvalidDate {
                text: text.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut label = String::new();
        write!(label, "{}", date.format(display_format))
            .map_err(|_| DayLabelError::InvalidFormat(display_format.to_string()))?;

        Ok(Self { date, label })
    }

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the display label.
    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
