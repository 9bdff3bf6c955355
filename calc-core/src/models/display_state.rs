use std::fmt;

use serde::{Deserialize, Serialize};

/// Display size bucket chosen from the length of the formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    /// Font size in pixels used by the keypad page for this tier.
    pub fn font_px(&self) -> u16 {
        match self {
            Self::Large => 80,
            Self::Medium => 60,
            Self::Small => 40,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }
}

/// What the host renders after every key press: the formatted text and the
/// size tier it should be drawn at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub text: String,
    pub tier: SizeTier,
}

impl fmt::Display for DisplayState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.text)
    }
}
