//! Markup token model and the pull-based source contract.

use std::collections::VecDeque;

/// A single attribute on a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A start tag with its attributes in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Lowercase element name.
    pub name: String,
    pub attributes: Vec<Attribute>,
    /// True for `<name ... />`.
    pub self_closing: bool,
}

impl Tag {
    /// Create an open tag with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            self_closing: false,
        }
    }

    /// Add an attribute, keeping insertion order.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Values of every attribute named `key`, in order.
    pub fn attr_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes
            .iter()
            .filter(move |a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// A markup token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag(Tag),
    EndTag { name: String },
    /// Raw text content, character references already decoded.
    Text(String),
}

impl Token {
    /// Shorthand for an end tag token.
    pub fn end(name: impl Into<String>) -> Self {
        Token::EndTag { name: name.into() }
    }

    /// Shorthand for a text token.
    pub fn text(content: impl Into<String>) -> Self {
        Token::Text(content.into())
    }
}

/// Terminal failure of a token source.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The underlying reader failed.
    #[error("read error: {0}")]
    Read(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The stream ended while an element was still open.
    #[error("unexpected end of document")]
    UnexpectedEnd,
}

/// Ordered, pull-based supply of markup tokens.
///
/// `Ok(None)` signals end of stream. An `Err` is terminal: once a source has
/// returned an error or end of stream, every later call returns `Ok(None)`.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Option<Token>, StreamError>;
}

/// An in-memory token source.
///
/// Replays a prepared token list, optionally ending with a stream error
/// instead of a clean end of stream.
#[derive(Debug, Default)]
pub struct TokenQueue {
    tokens: VecDeque<Token>,
    fail_at_end: bool,
}

impl TokenQueue {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
            fail_at_end: false,
        }
    }

    /// Report a read error once the queued tokens are exhausted.
    pub fn failing_at_end(mut self) -> Self {
        self.fail_at_end = true;
        self
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenSource for TokenQueue {
    fn next_token(&mut self) -> Result<Option<Token>, StreamError> {
        match self.tokens.pop_front() {
            Some(token) => Ok(Some(token)),
            None if self.fail_at_end => {
                self.fail_at_end = false;
                Err(StreamError::Read("token queue exhausted".into()))
            }
            None => Ok(None),
        }
    }
}
