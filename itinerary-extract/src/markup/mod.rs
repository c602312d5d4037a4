//! Markup tokens and the sources that produce them.
//!
//! The classifier and scanner only see the [`TokenSource`] contract: a
//! pull-based sequence of start tags, end tags and text, ending either
//! cleanly or with a terminal [`StreamError`].

mod html;
mod token;

pub use html::HtmlTokenSource;
pub use token::{Attribute, StreamError, Tag, Token, TokenQueue, TokenSource};
