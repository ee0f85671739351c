//! Error types for selector and declaration parsing.
//!
//! Individual rules only ever fail with [`NoMatch`]: the input at the cursor
//! does not have the shape the rule expects. The stylesheet driver wraps that
//! into [`CsselError`] when a whole document cannot be consumed.

use thiserror::Error;

/// A rule did not match the input at the current cursor position.
///
/// Carries no payload. Callers are expected to treat it as recoverable and
/// either try another rule or give up on the current input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("input does not match the expected syntax")]
pub struct NoMatch;

/// Errors that can occur while parsing a complete stylesheet.
///
/// # Examples
///
/// ```rust
/// use cssel::parser::parse_stylesheet;
///
/// // The declaration block is never closed.
/// let result = parse_stylesheet("div { color: red;");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum CsselError {
    /// Input remained that is not a selector list followed by a declaration block.
    ///
    /// The string holds the start of the unparsed text.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// An I/O error occurred while reading a stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
