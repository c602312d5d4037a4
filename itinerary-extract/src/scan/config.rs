//! Scanner configuration.

/// Markers the scanner looks for at the top level of a booking page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Exact `class` value of a travel block `div`.
    pub block_class: String,

    /// Prefix of the `id` of a day-section header `div`.
    /// The date follows the prefix, up to the next `_` or the end.
    pub day_id_prefix: String,

    /// chrono format of the date embedded in the header id.
    pub day_date_format: String,

    /// chrono format of the day label printed next to each record.
    pub day_label_format: String,
}

impl ScanConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        block_class: impl Into<String>,
        day_id_prefix: impl Into<String>,
        day_date_format: impl Into<String>,
        day_label_format: impl Into<String>,
    ) -> Self {
        Self {
            block_class: block_class.into(),
            day_id_prefix: day_id_prefix.into(),
            day_date_format: day_date_format.into(),
            day_label_format: day_label_format.into(),
        }
    }

    /// Replace the day label format, keeping everything else.
    pub fn with_day_label_format(mut self, format: impl Into<String>) -> Self {
        self.day_label_format = format.into();
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            block_class: "bookingBlockContent bookingBlockStatus4".to_string(),
            day_id_prefix: "daysubblock_".to_string(),
            day_date_format: "%d/%m/%Y".to_string(),
            day_label_format: "%a %d/%m".to_string(), // e.g. "Mon 02/01"
        }
    }
}
