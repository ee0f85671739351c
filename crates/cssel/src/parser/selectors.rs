use crate::cursor::{
    Cursor, is_comparator_char, is_ident_continue, is_ident_start, is_whitespace,
};
use crate::error::NoMatch;
use crate::parser::{
    AttributeSelector, ClassSelector, Comparator, CompoundSelector, IdSelector, Selector,
    TypeSelector,
};
use nom::{
    IResult,
    bytes::complete::{take_while, take_while1},
    character::complete::{alpha1, char, satisfy},
    combinator::{map_res, recognize},
    sequence::{pair, preceded},
};

/// Parses a type name: an ASCII letter followed by letters, digits or dashes.
///
/// Leading whitespace is skipped. Property names and the names after `.` and
/// `#` use the same rule.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(is_whitespace),
        recognize(pair(satisfy(is_ident_start), take_while(is_ident_continue))),
    )(input)
}

/// Parses the letters-only name used on both sides of an attribute comparator.
///
/// Narrower than [`parse_ident`]: digits and dashes end the name.
pub fn parse_word(input: &str) -> IResult<&str, &str> {
    preceded(take_while(is_whitespace), alpha1)(input)
}

/// Parses a type selector such as `div` or `test-name`.
///
/// Leading whitespace is consumed even when no name follows it.
pub fn parse_type_selector(cursor: &mut Cursor) -> Result<TypeSelector, NoMatch> {
    cursor.skip_whitespace();
    cursor.run(parse_ident).map(TypeSelector::new)
}

/// Parses `.name`. A dot without a valid name after it is left unconsumed.
pub fn parse_class_selector(cursor: &mut Cursor) -> Result<ClassSelector, NoMatch> {
    cursor.skip_whitespace();
    cursor
        .run(preceded(char('.'), parse_ident))
        .map(ClassSelector::new)
}

/// Parses `#name`. A hash without a valid name after it is left unconsumed.
pub fn parse_id_selector(cursor: &mut Cursor) -> Result<IdSelector, NoMatch> {
    cursor.skip_whitespace();
    cursor
        .run(preceded(char('#'), parse_ident))
        .map(IdSelector::new)
}

/// Parses `[attribute comparator value]`.
///
/// Unlike the other selectors this does not skip leading whitespace: the
/// bracket has to be the next character. Failure at any point after the
/// bracket leaves the cursor exactly where it started.
pub fn parse_attribute_selector(cursor: &mut Cursor) -> Result<AttributeSelector, NoMatch> {
    let start = cursor.position();
    cursor.run(attribute_selector).inspect_err(|_| {
        if cursor.peek() == Some('[') {
            log::trace!("malformed attribute selector at byte {start}");
        }
    })
}

fn attribute_selector(input: &str) -> IResult<&str, AttributeSelector> {
    let (input, _) = char('[')(input)?;
    let (input, attribute) = parse_word(input)?;
    let (input, comparator) = parse_comparator(input)?;
    let (input, value) = parse_word(input)?;
    let (input, _) = char(']')(input)?;

    Ok((input, AttributeSelector::new(attribute, comparator, value)))
}

/// Takes the whole run of comparator characters; it must spell one of the six operators.
fn parse_comparator(input: &str) -> IResult<&str, Comparator> {
    map_res(take_while1(is_comparator_char), |op: &str| {
        op.parse::<Comparator>()
    })(input)
}

/// Parses whichever simple selector comes next.
///
/// Kinds are tried in the order type, class, id, attribute. Leading whitespace
/// is skipped first, so an attribute selector may follow a space here.
pub fn parse_selector(cursor: &mut Cursor) -> Result<Selector, NoMatch> {
    cursor.skip_whitespace();

    if let Ok(selector) = parse_type_selector(cursor) {
        return Ok(Selector::Type(selector));
    }
    if let Ok(selector) = parse_class_selector(cursor) {
        return Ok(Selector::Class(selector));
    }
    if let Ok(selector) = parse_id_selector(cursor) {
        return Ok(Selector::Id(selector));
    }
    parse_attribute_selector(cursor).map(Selector::Attribute)
}

/// Parses selectors until the next one fails to match (typically at `{`).
///
/// Fails if not even one selector matched.
pub fn parse_selectors(cursor: &mut Cursor) -> Result<Vec<Selector>, NoMatch> {
    let mut selectors = Vec::new();
    while let Ok(selector) = parse_selector(cursor) {
        selectors.push(selector);
    }

    if selectors.is_empty() {
        return Err(NoMatch);
    }
    Ok(selectors)
}

/// Parses a selector list, grouping selectors that are not separated by whitespace.
///
/// `div .note` yields two compounds, `div.note` one. Fails if not even one
/// selector matched.
pub fn parse_compound_selectors(cursor: &mut Cursor) -> Result<Vec<CompoundSelector>, NoMatch> {
    let mut compounds: Vec<CompoundSelector> = Vec::new();
    loop {
        let before = cursor.position();
        cursor.skip_whitespace();
        let spaced = cursor.position() > before;

        let Ok(selector) = parse_selector(cursor) else {
            break;
        };
        match compounds.last_mut() {
            Some(compound) if !spaced => compound.selectors.push(selector),
            _ => compounds.push(CompoundSelector::new(vec![selector])),
        }
    }

    if compounds.is_empty() {
        return Err(NoMatch);
    }
    Ok(compounds)
}
