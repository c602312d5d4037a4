//! HTML token source backed by `html5gum`.

use std::io::Read;

use html5gum::{DefaultEmitter, HtmlString, IoReader, Readable, Reader, Tokenizer};
use tracing::debug;

use super::token::{Attribute, StreamError, Tag, Token, TokenSource};

/// Streams tokens out of an HTML document.
///
/// Comments and doctypes are skipped. Tokenizer diagnostics (the WHATWG
/// "parse errors") are recoverable and only logged; a failure of the
/// underlying reader is terminal.
pub struct HtmlTokenSource<R: Reader> {
    tokenizer: Tokenizer<R, DefaultEmitter>,
    finished: bool,
}

impl<R: Reader> HtmlTokenSource<R> {
    /// Tokenize any input `html5gum` can read (`&str`, `String`, an `IoReader`).
    pub fn new<'a, S: Readable<'a, Reader = R>>(input: S) -> Self {
        let mut emitter = DefaultEmitter::default();
        // Keep <script> and <style> bodies as text instead of markup.
        emitter.switch_states(true);

        Self {
            tokenizer: Tokenizer::new_with_emitter(input, emitter),
            finished: false,
        }
    }
}

impl<T: Read> HtmlTokenSource<IoReader<T>> {
    /// Tokenize a byte stream such as an open file.
    pub fn from_reader(reader: T) -> Self {
        Self::new(IoReader::new(reader))
    }
}

impl<R> TokenSource for HtmlTokenSource<R>
where
    R: Reader,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    fn next_token(&mut self) -> Result<Option<Token>, StreamError> {
        if self.finished {
            return Ok(None);
        }

        loop {
            let Some(item) = self.tokenizer.next() else {
                self.finished = true;
                return Ok(None);
            };

            match item {
                Err(e) => {
                    self.finished = true;
                    return Err(StreamError::Read(Box::new(e)));
                }
                Ok(html5gum::Token::StartTag(tag)) => {
                    let attributes = tag
                        .attributes
                        .iter()
                        .map(|(key, value)| Attribute::new(lossy(key), lossy(value)))
                        .collect();
                    return Ok(Some(Token::StartTag(Tag {
                        name: lossy(&tag.name),
                        attributes,
                        self_closing: tag.self_closing,
                    })));
                }
                Ok(html5gum::Token::EndTag(tag)) => {
                    return Ok(Some(Token::EndTag {
                        name: lossy(&tag.name),
                    }));
                }
                Ok(html5gum::Token::String(text)) => {
                    return Ok(Some(Token::Text(lossy(&text))));
                }
                Ok(html5gum::Token::Error(e)) => {
                    debug!(error = ?e, "recovered from markup error");
                }
                Ok(_) => {}
            }
        }
    }
}

fn lossy(s: &HtmlString) -> String {
    String::from_utf8_lossy(&s.0).into_owned()
}
