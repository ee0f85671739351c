//! Selector and declaration parsing.
//!
//! Each rule is a free function taking a `&mut` [`Cursor`] and returning
//! `Result<T, NoMatch>`. Rules compose bottom-up:
//!
//! - [`parse_type_selector`]: `div`, `test-name`
//! - [`parse_class_selector`] / [`parse_id_selector`]: `.name` / `#name`, built on the type rule
//! - [`parse_attribute_selector`]: `[attr*=value]`
//! - [`parse_declaration`]: `property: value;`
//! - [`parse_declaration_block`]: `{ property: value; ... }`
//!
//! On top of those, [`parse_selector`] picks whichever selector kind matches,
//! [`parse_rule`] reads a selector list followed by a block, and
//! [`parse_stylesheet`] reads a whole document of rules.
//!
//! ## Submodules
//!
//! - [`selectors`]: identifier and selector rules
//! - [`declarations`]: declaration and declaration block rules
//! - [`stylesheet`]: the result types
//!
//! ## Example
//!
//! ```rust
//! use cssel::Cursor;
//! use cssel::parser::{parse_class_selector, parse_type_selector};
//!
//! let mut cursor = Cursor::new("test.with-class");
//! assert_eq!(parse_type_selector(&mut cursor).unwrap().text, "test");
//! assert_eq!(parse_class_selector(&mut cursor).unwrap().text, "with-class");
//! assert!(cursor.is_eof());
//! ```

pub mod declarations;
pub mod selectors;
pub mod stylesheet;

pub use crate::parser::declarations::{parse_declaration, parse_declaration_block};
pub use crate::parser::selectors::{
    parse_attribute_selector, parse_class_selector, parse_compound_selectors, parse_id_selector,
    parse_selector, parse_selectors, parse_type_selector,
};
pub use crate::parser::stylesheet::{
    AttributeSelector, ClassSelector, Comparator, CompoundSelector, Declaration, DeclarationBlock,
    IdSelector, Rule, Selector, StyleSheet, TypeSelector,
};

use crate::cursor::Cursor;
use crate::error::{CsselError, NoMatch};
use std::path::Path;

/// How much unparsed text a [`CsselError::InvalidSyntax`] message quotes.
const ERROR_CONTEXT_CHARS: usize = 40;

/// Parses a selector list followed by a declaration block.
///
/// On failure the cursor is rewound to the start of the rule (after any
/// leading whitespace).
pub fn parse_rule(cursor: &mut Cursor) -> Result<Rule, NoMatch> {
    cursor.skip_whitespace();
    let start = cursor.checkpoint();

    let selectors = parse_compound_selectors(cursor)?;
    match parse_declaration_block(cursor) {
        Ok(block) => Ok(Rule::new(selectors, block)),
        Err(NoMatch) => {
            cursor.rewind(start);
            Err(NoMatch)
        }
    }
}

/// Parses a complete stylesheet made of rules separated by whitespace.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, CsselError> {
    let mut cursor = Cursor::new(source);
    let mut rules = Vec::new();

    loop {
        cursor.skip_whitespace();
        if cursor.is_eof() {
            break;
        }

        let rule = parse_rule(&mut cursor).map_err(|_| {
            let context: String = cursor.remaining().chars().take(ERROR_CONTEXT_CHARS).collect();
            CsselError::InvalidSyntax(format!("Unexpected tokens in stylesheet: {context}"))
        })?;
        log::debug!(
            "parsed rule with {} compound selector(s) and {} declaration(s)",
            rule.selectors.len(),
            rule.declarations().len()
        );
        rules.push(rule);
    }

    Ok(StyleSheet { rules })
}

/// Reads a stylesheet from disk and parses it.
pub fn read_stylesheet(path: impl AsRef<Path>) -> Result<StyleSheet, CsselError> {
    let path = path.as_ref();
    log::debug!("reading stylesheet {}", path.display());
    let source = std::fs::read_to_string(path)?;
    parse_stylesheet(&source)
}
