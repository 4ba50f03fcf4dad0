//! Level-file line parser, used for automation save/restore.
//!
//! A line is a command word followed by `key=value` pairs in insertion
//! order, e.g. `ExistsMush aExist=1 aPhase=2 aProgress=0.25`. Values are
//! untyped text; readers coerce on access with a caller-supplied default,
//! so a missing or malformed parameter degrades instead of failing.

use std::fmt::Write as _;

use anyhow::{Context as _, bail};

/// One `key=value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserParam {
    pub name: String,
    pub value: String,
}

impl ParserParam {
    pub fn new(name: &str, value: impl ToString) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn as_string(&self, default: &str) -> String {
        if self.value.is_empty() {
            default.to_owned()
        } else {
            self.value.clone()
        }
    }

    pub fn as_bool(&self, default: bool) -> bool {
        match self.value.as_str() {
            "1" | "true" => true,
            "0" | "false" => false,
            _ => default,
        }
    }

    pub fn as_int(&self, default: i32) -> i32 {
        self.value.parse().unwrap_or(default)
    }

    pub fn as_float(&self, default: f32) -> f32 {
        self.value.parse().unwrap_or(default)
    }
}

/// A command with its ordered parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParserLine {
    pub command: String,
    params: Vec<ParserParam>,
}

impl ParserLine {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_owned(),
            params: Vec::new(),
        }
    }

    /// Append a parameter, keeping insertion order for rendering.
    pub fn add_param(&mut self, name: &str, value: impl ToString) {
        self.params.push(ParserParam::new(name, value));
    }

    pub fn param(&self, name: &str) -> Option<&ParserParam> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn params(&self) -> &[ParserParam] {
        &self.params
    }

    /// Render to the `Cmd k=v k=v` wire form.
    pub fn render(&self) -> String {
        let mut out = self.command.clone();
        for p in &self.params {
            let _ = write!(out, " {}={}", p.name, p.value);
        }
        out
    }

    /// Parse a line from its wire form. Errors only at the syntax
    /// boundary (empty line, pair without `=`); value typing is deferred
    /// to the accessors.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut words = text.split_whitespace();
        let command = words.next().context("empty line")?;
        let mut line = Self::new(command);
        for word in words {
            let Some((name, value)) = word.split_once('=') else {
                bail!("malformed parameter '{word}' in '{command}'");
            };
            line.add_param(name, value);
        }
        Ok(line)
    }
}
