use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Operator;

/// Errors produced when a textual key tag cannot be turned into a [`KeyToken`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key tag")]
    Empty,

    /// Tags that are neither a digit, a known control key, nor a plain
    /// alphabetic operator name.
    #[error("unrecognized key tag '{0}'")]
    Unrecognized(String),
}

/// A single key press delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyToken {
    /// A numeric key, always in `0..=9`.
    Digit(u8),
    Decimal,
    Clear,
    Backspace,
    Operator(Operator),
}

impl KeyToken {
    /// Builds a digit key, returning `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    pub fn add() -> Self {
        Self::Operator(Operator::Add)
    }

    pub fn equals() -> Self {
        Self::Operator(Operator::Equals)
    }
}

impl FromStr for KeyToken {
    type Err = KeyParseError;

    /// Parses the keypad's tags (`"7"`, `"dot"`, `"clear"`, `"backspace"`,
    /// `"add"`, `"equals"`) plus a few terminal-friendly aliases.
    ///
    /// Any other purely alphabetic tag is accepted as an unsupported operator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let lowered = tag.to_ascii_lowercase();
        let token = match lowered.as_str() {
            "dot" | "." | "decimal" => Self::Decimal,
            "clear" | "c" | "ac" => Self::Clear,
            "backspace" | "bs" | "del" => Self::Backspace,
            "add" | "+" | "equals" | "=" => Self::Operator(Operator::from_tag(&lowered)),
            other => match other.as_bytes() {
                [d] if d.is_ascii_digit() => match Self::digit(d - b'0') {
                    Some(token) => token,
                    None => return Err(KeyParseError::Unrecognized(tag.to_string())),
                },
                _ if other.bytes().all(|b| b.is_ascii_alphabetic() || b == b'_') => {
                    Self::Operator(Operator::Unsupported(other.to_string()))
                }
                _ => return Err(KeyParseError::Unrecognized(tag.to_string())),
            },
        };
        Ok(token)
    }
}

impl fmt::Display for KeyToken {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("dot"),
            Self::Clear => f.write_str("clear"),
            Self::Backspace => f.write_str("backspace"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}
