//! Top-level document scan.

use tracing::{debug, warn};

use crate::classify::{ClassifyError, classify_entry};
use crate::domain::{DatedRecord, DayLabel};
use crate::markup::{Tag, Token, TokenSource};

use super::config::ScanConfig;
use super::error::ScanError;

/// Counters for a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Records returned to the caller.
    pub emitted: usize,
    /// Travel blocks dropped because the stream ended or failed inside them.
    pub discarded: usize,
}

/// Pulls dated travel records out of a booking page.
///
/// Only `div` start tags are inspected at the top level. A header `div`
/// whose `id` starts with the configured prefix sets the day label used for
/// every following record; a `div` whose `class` equals the block class is
/// handed to [`classify_entry`] on the same token source.
///
/// After an error or the end of the document, every call returns `Ok(None)`.
pub struct DocumentScanner<S> {
    source: S,
    config: ScanConfig,
    day: String,
    summary: ScanSummary,
    done: bool,
}

impl<S: TokenSource> DocumentScanner<S> {
    pub fn new(source: S, config: ScanConfig) -> Self {
        Self {
            source,
            config,
            day: String::new(),
            summary: ScanSummary::default(),
            done: false,
        }
    }

    /// Counters so far.
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Label of the current day section (empty before the first header).
    pub fn current_day(&self) -> &str {
        &self.day
    }

    /// Scan forward to the next complete travel record.
    pub fn next_entry(&mut self) -> Result<Option<DatedRecord>, ScanError> {
        if self.done {
            return Ok(None);
        }

        match self.advance() {
            Ok(Some(record)) => Ok(Some(record)),
            Ok(None) => {
                self.done = true;
                Ok(None)
            }
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }

    fn advance(&mut self) -> Result<Option<DatedRecord>, ScanError> {
        while let Some(token) = self.source.next_token()? {
            let Token::StartTag(tag) = token else {
                continue;
            };
            if tag.name != "div" {
                continue;
            }

            self.update_day(&tag)?;

            if !tag.attr_values("class").any(|c| c == self.config.block_class) {
                continue;
            }

            match classify_entry(&mut self.source) {
                Ok(record) => {
                    self.summary.emitted += 1;
                    debug!(day = %self.day, train = %record.train, "travel block parsed");
                    return Ok(Some(DatedRecord {
                        day: self.day.clone(),
                        record,
                    }));
                }
                Err(ClassifyError::Stream { partial, source }) => {
                    self.summary.discarded += 1;
                    warn!(
                        day = %self.day,
                        error = %source,
                        partial = ?partial,
                        "discarding unterminated travel block"
                    );
                }
                Err(ClassifyError::InternalState(e)) => return Err(e.into()),
            }
        }

        Ok(None)
    }

    fn update_day(&mut self, tag: &Tag) -> Result<(), ScanError> {
        for id in tag.attr_values("id") {
            let Some(rest) = id.strip_prefix(self.config.day_id_prefix.as_str()) else {
                continue;
            };
            let date_text = rest.split('_').next().unwrap_or(rest);
            let label = DayLabel::parse(
                date_text,
                &self.config.day_date_format,
                &self.config.day_label_format,
            )?;
            debug!(day = %label, date = %label.date(), "entering day section");
            self.day = label.to_string();
        }
        Ok(())
    }
}

impl<S: TokenSource> Iterator for DocumentScanner<S> {
    type Item = Result<DatedRecord, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}
