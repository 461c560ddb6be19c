//! Immutable DOT statements.
//!
//! A [`Statement`] is one terminated line, a [`StatementBlock`] is a header
//! followed by a braced group of child statements. Both carry an ordered set
//! of attributes and are never mutated: `add_attribute` returns a new value
//! and leaves the receiver untouched.

use std::fmt::Write;

use nantgraph_error::{Error, Result};

use crate::dot::escape_label;

/// Insertion-ordered attribute list with persistent updates.
///
/// Setting an existing key replaces its value in place, so the key keeps the
/// position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of `self` with `key` set to `value`.
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_header(text: &str, operation: &'static str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::invalid_argument("text", "statement text is required")
            .with_operation(operation));
    }
    Ok(())
}

fn validate_attribute(identifier: &str, value: &str, operation: &'static str) -> Result<()> {
    if identifier.is_empty() {
        return Err(
            Error::invalid_argument("identifier", "attribute identifier is required")
                .with_operation(operation),
        );
    }
    if value.is_empty() {
        return Err(Error::invalid_argument("value", "attribute value is required")
            .with_context("identifier", identifier)
            .with_operation(operation));
    }
    Ok(())
}

/// A single statement: `text [ k = "v" ... ] ;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    text: String,
    attributes: Attributes,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        validate_header(&text, "dot::Statement::new")?;
        Ok(Self {
            text,
            attributes: Attributes::new(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// A new statement with the same text and one more attribute.
    pub fn add_attribute(&self, identifier: &str, value: &str) -> Result<Self> {
        validate_attribute(identifier, value, "dot::Statement::add_attribute")?;
        Ok(Self {
            text: self.text.clone(),
            attributes: self.attributes.with(identifier, value),
        })
    }

    pub fn as_text(&self) -> String {
        let mut out = self.text.clone();
        if !self.attributes.is_empty() {
            out.push_str(" [ ");
            for (key, value) in self.attributes.iter() {
                let _ = write!(out, "{key} = \"{}\" ", escape_label(value));
            }
            out.push_str("] ;");
        } else {
            out.push(';');
        }
        out
    }
}

/// A header followed by a braced group of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementBlock {
    text: String,
    statements: Vec<DotStatement>,
    attributes: Attributes,
}

impl StatementBlock {
    /// The children are collected into a block-owned list.
    pub fn new<I>(text: impl Into<String>, statements: I) -> Result<Self>
    where
        I: IntoIterator<Item = DotStatement>,
    {
        let text = text.into();
        validate_header(&text, "dot::StatementBlock::new")?;
        Ok(Self {
            text,
            statements: statements.into_iter().collect(),
            attributes: Attributes::new(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn statements(&self) -> &[DotStatement] {
        &self.statements
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn add_attribute(&self, identifier: &str, value: &str) -> Result<Self> {
        validate_attribute(identifier, value, "dot::StatementBlock::add_attribute")?;
        Ok(Self {
            text: self.text.clone(),
            statements: self.statements.clone(),
            attributes: self.attributes.with(identifier, value),
        })
    }

    pub fn as_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.text);
        out.push_str("\n{\n");
        for (key, value) in self.attributes.iter() {
            let _ = write!(out, "{key} = \"{}\"; ", escape_label(value));
        }
        out.push('\n');
        for statement in &self.statements {
            let text = statement.as_text();
            out.push_str(&text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
        out.push_str("}\n");
        out
    }
}

/// Either kind of statement; what the renderer produces for every element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotStatement {
    Line(Statement),
    Block(StatementBlock),
}

impl DotStatement {
    pub fn text(&self) -> &str {
        match self {
            DotStatement::Line(s) => s.text(),
            DotStatement::Block(b) => b.text(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            DotStatement::Line(s) => s.attributes(),
            DotStatement::Block(b) => b.attributes(),
        }
    }

    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes().get(name)
    }

    pub fn add_attribute(&self, identifier: &str, value: &str) -> Result<Self> {
        Ok(match self {
            DotStatement::Line(s) => DotStatement::Line(s.add_attribute(identifier, value)?),
            DotStatement::Block(b) => DotStatement::Block(b.add_attribute(identifier, value)?),
        })
    }

    pub fn as_text(&self) -> String {
        match self {
            DotStatement::Line(s) => s.as_text(),
            DotStatement::Block(b) => b.as_text(),
        }
    }

    pub fn as_block(&self) -> Option<&StatementBlock> {
        match self {
            DotStatement::Block(b) => Some(b),
            DotStatement::Line(_) => None,
        }
    }
}

impl From<Statement> for DotStatement {
    fn from(statement: Statement) -> Self {
        DotStatement::Line(statement)
    }
}

impl From<StatementBlock> for DotStatement {
    fn from(block: StatementBlock) -> Self {
        DotStatement::Block(block)
    }
}
