use crate::error::NoMatch;
use std::fmt;
use std::str::FromStr;

/// An element type name such as `div` or `test-name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSelector {
    pub text: String,
}

impl TypeSelector {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// `.name`; `text` holds the name without the dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSelector {
    pub text: String,
}

impl ClassSelector {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// `#name`; `text` holds the name without the hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdSelector {
    pub text: String,
}

impl IdSelector {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Operator between the attribute name and value in `[attr op value]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `=`
    Equals,
    /// `|=`
    DashMatch,
    /// `^=`
    Prefix,
    /// `$=`
    Suffix,
    /// `~=`
    Includes,
    /// `*=`
    Substring,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Equals => "=",
            Comparator::DashMatch => "|=",
            Comparator::Prefix => "^=",
            Comparator::Suffix => "$=",
            Comparator::Includes => "~=",
            Comparator::Substring => "*=",
        }
    }
}

impl FromStr for Comparator {
    type Err = NoMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Comparator::Equals),
            "|=" => Ok(Comparator::DashMatch),
            "^=" => Ok(Comparator::Prefix),
            "$=" => Ok(Comparator::Suffix),
            "~=" => Ok(Comparator::Includes),
            "*=" => Ok(Comparator::Substring),
            _ => Err(NoMatch),
        }
    }
}

/// `[attribute comparator value]`, e.g. `[href^=https]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeSelector {
    pub attribute: String,
    pub comparator: Comparator,
    pub value: String,
}

impl AttributeSelector {
    pub fn new(
        attribute: impl Into<String>,
        comparator: Comparator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            comparator,
            value: value.into(),
        }
    }
}

/// One of the simple selector kinds this crate understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Type(TypeSelector),
    Class(ClassSelector),
    Id(IdSelector),
    Attribute(AttributeSelector),
}

/// Simple selectors written back to back with no whitespace, e.g. `a.link[href^=https]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub selectors: Vec<Selector>,
}

impl CompoundSelector {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }
}

/// A `property: value;` pair.
///
/// `value` is the raw text between the colon (after leading whitespace) and
/// the terminating semicolon, e.g. `rgba(0, 1, 1, 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Declarations enclosed in `{ }`, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclarationBlock {
    pub rules: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn new(rules: Vec<Declaration>) -> Self {
        Self { rules }
    }
}

/// A selector list followed by its declaration block.
///
/// `selectors` keeps the whitespace structure of the source: each entry is one
/// run of selectors with no whitespace between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<CompoundSelector>,
    pub block: DeclarationBlock,
}

impl Rule {
    pub fn new(selectors: Vec<CompoundSelector>, block: DeclarationBlock) -> Self {
        Self { selectors, block }
    }

    /// Every simple selector in source order, ignoring compound boundaries.
    pub fn simple_selectors(&self) -> impl Iterator<Item = &Selector> {
        self.selectors.iter().flat_map(|compound| compound.selectors.iter())
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.block.rules
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub rules: Vec<Rule>,
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for ClassSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.text)
    }
}

impl fmt::Display for IdSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.text)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}{}]", self.attribute, self.comparator, self.value)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Type(s) => fmt::Display::fmt(s, f),
            Selector::Class(s) => fmt::Display::fmt(s, f),
            Selector::Id(s) => fmt::Display::fmt(s, f),
            Selector::Attribute(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for selector in &self.selectors {
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rules.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{")?;
        for declaration in &self.rules {
            write!(f, " {declaration}")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{compound}")?;
        }
        write!(f, " {}", self.block)
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
