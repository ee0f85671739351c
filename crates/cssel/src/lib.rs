//! # cssel - simple CSS selector and declaration parser
//!
//! A cursor-based recursive-descent parser for a small subset of CSS: simple
//! selectors and declaration blocks. Each parse call consumes only what it
//! recognises, so a caller can issue repeated calls against the same
//! [`Cursor`] to walk a selector list and then its declaration block.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssel::Cursor;
//! use cssel::parser::{parse_declaration_block, parse_selectors, Selector};
//!
//! let mut cursor = Cursor::new("a.link[href^=https] { color: red; }");
//!
//! let selectors = parse_selectors(&mut cursor).expect("selector list");
//! assert_eq!(selectors.len(), 3);
//! assert!(matches!(selectors[1], Selector::Class(_)));
//!
//! let block = parse_declaration_block(&mut cursor).expect("declaration block");
//! assert_eq!(block.rules[0].property, "color");
//! assert_eq!(block.rules[0].value, "red");
//! ```
//!
//! ## Supported Syntax
//!
//! - Type selectors: `div`, `test-name`
//! - Class selectors: `.primary`
//! - ID selectors: `#header`
//! - Attribute selectors: `[attr=value]` with `=`, `|=`, `^=`, `$=`, `~=`, `*=`
//! - Declarations: `property: raw value text;`
//! - Declaration blocks: `{ ... }`, skipping everything after a malformed declaration
//!
//! Combinators, pseudo-classes, at-rules, comments and value validation are
//! not supported.
//!
//! ## Modules
//!
//! - [`cursor`]: the checkpointed read position shared by all rules
//! - [`parser`]: the parse rules and their result types
//! - [`error`]: [`NoMatch`] and the stylesheet-level [`CsselError`]

pub mod cursor;
pub mod error;
pub mod parser;

pub use cursor::{Checkpoint, Cursor};
pub use error::{CsselError, NoMatch};
