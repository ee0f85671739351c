//! Checkpointed read position over in-memory CSS text.
//!
//! Every parse rule takes a `&mut Cursor` and either advances it past the text
//! it recognised or leaves it where it was. Rules are written as `nom` parsers
//! over [`Cursor::remaining`] and committed through [`Cursor::run`], so a rule
//! that fails halfway never moves the cursor. Composite rules that commit in
//! several steps take a [`Checkpoint`] first and [`Cursor::rewind`] to it on
//! failure.
//!
//! A cursor has a single owner. Independent cursors over the same text can be
//! used from different threads; one cursor must not be shared.

use crate::error::NoMatch;
use nom::{IResult, bytes::complete::take_while};

/// Characters that may appear in an attribute comparator (`=`, `|=`, `^=`, ...).
pub const COMPARATOR_CHARS: &str = "=|^$~*";

/// A saved cursor position that can be restored with [`Cursor::rewind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// Read position within a borrowed source string.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed input.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Next character without consuming it; `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn consume(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Restores a position taken earlier from this cursor.
    ///
    /// Everything consumed since the checkpoint becomes unread again. The
    /// checkpoint must come from this cursor; one taken from a cursor over a
    /// different source can point past the end of this one.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        debug_assert!(
            checkpoint.0 <= self.source.len(),
            "checkpoint at byte {} is past the end of a {}-byte source",
            checkpoint.0,
            self.source.len()
        );
        if checkpoint.0 < self.pos {
            log::trace!(
                "rewinding {} byte(s): {:?}",
                self.pos - checkpoint.0,
                &self.source[checkpoint.0..self.pos]
            );
        }
        self.pos = checkpoint.0;
    }

    /// Consumes all leading whitespace.
    ///
    /// Not transactional: rules call this before their checkpoint, so the
    /// skipped whitespace stays consumed even when the rule then fails.
    pub fn skip_whitespace(&mut self) {
        // take_while accepts the empty string, so this cannot fail.
        let _ = self.run(take_while::<_, &'a str, nom::error::Error<&'a str>>(is_whitespace));
    }

    /// Runs a `nom` parser on the remaining input and commits its advance.
    ///
    /// On error the cursor is left untouched.
    pub fn run<O, P>(&mut self, mut parser: P) -> Result<O, NoMatch>
    where
        P: FnMut(&'a str) -> IResult<&'a str, O>,
    {
        match parser(self.remaining()) {
            Ok((rest, output)) => {
                self.pos = self.source.len() - rest.len();
                Ok(output)
            }
            Err(_) => Err(NoMatch),
        }
    }
}

/// Whitespace as C `isspace` sees it: space, tab, LF, CR, form feed and vertical tab.
pub fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// First character of a type selector or property name.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Characters allowed after the first one in a type selector or property name.
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

pub fn is_comparator_char(c: char) -> bool {
    COMPARATOR_CHARS.contains(c)
}
