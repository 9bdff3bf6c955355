use std::fmt;

use serde::{Deserialize, Serialize};

/// An operator key on the keypad.
///
/// Only [`Operator::Add`] carries arithmetic. [`Operator::Equals`] finalizes
/// the pending operation, and every other tag is kept verbatim as
/// [`Operator::Unsupported`], which evaluates as a pass-through of the
/// second operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Equals,
    Unsupported(String),
}

impl Operator {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Equals => "equals",
            Self::Unsupported(tag) => tag,
        }
    }

    /// Maps a key tag onto an operator. Never fails: unknown tags become
    /// [`Operator::Unsupported`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "add" | "+" => Self::Add,
            "equals" | "=" => Self::Equals,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for Operator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
