use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::selectors::parse_type_selector;
use crate::parser::{Declaration, DeclarationBlock};
use nom::{
    IResult,
    bytes::complete::take_until,
    character::complete::char,
    combinator::verify,
    sequence::{preceded, terminated},
};

/// Parses `property: value;`.
///
/// The property name is read with the type selector rule and stays consumed
/// if no colon follows it. The value is everything up to the next `;`, which
/// is consumed but not included. A missing `;` or an empty value fails.
pub fn parse_declaration(cursor: &mut Cursor) -> Result<Declaration, NoMatch> {
    let property = parse_type_selector(cursor)?;

    if cursor.run(char(':')).is_err() {
        log::trace!("expected ':' after property `{}`", property.text);
        return Err(NoMatch);
    }
    cursor.skip_whitespace();

    let value = cursor.run(declaration_value)?;
    Ok(Declaration::new(property.text, value))
}

fn declaration_value(input: &str) -> IResult<&str, &str> {
    terminated(verify(take_until(";"), |v: &str| !v.is_empty()), char(';'))(input)
}

/// Parses `{ declaration* }`.
///
/// Declarations are collected until the first one that fails to parse. From
/// there everything up to the closing brace is discarded, including any
/// well-formed declarations that come later. An unclosed block fails and
/// rewinds to the opening brace.
pub fn parse_declaration_block(cursor: &mut Cursor) -> Result<DeclarationBlock, NoMatch> {
    cursor.skip_whitespace();
    let start = cursor.checkpoint();
    cursor.run(char('{'))?;

    let mut rules = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.peek() == Some('}') {
            break;
        }
        match parse_declaration(cursor) {
            Ok(declaration) => rules.push(declaration),
            Err(NoMatch) => {
                log::trace!(
                    "discarding block contents from byte {} to the closing brace",
                    cursor.position()
                );
                break;
            }
        }
    }

    if cursor.run(preceded(take_until("}"), char('}'))).is_err() {
        log::trace!("declaration block is never closed");
        cursor.rewind(start);
        return Err(NoMatch);
    }

    Ok(DeclarationBlock::new(rules))
}
