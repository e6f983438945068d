//! Heuristic password strength shown under the signup password box.
//!
//! A password earns one point per criterion it meets and the score
//! is bucketed into three categories. An empty password has no
//! category at all, so the indicator stays hidden.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::trace;
use validator::HasLength;

/// Length that earns the length point. Independent from the
/// configured submit policy.
pub const STRENGTH_LENGTH: usize = 8;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl Category {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::Weak,
            2 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// Presentation hint for whoever draws the indicator.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::None => Tone::Neutral,
            Self::Weak => Tone::Alert,
            Self::Medium => Tone::Caution,
            Self::Strong => Tone::Success,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Weak => f.write_str("Weak"),
            Self::Medium => f.write_str("Medium"),
            Self::Strong => f.write_str("Strong"),
        }
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Alert,
    Caution,
    Success,
}

/// Which of the four criteria a password meets.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl Criteria {
    #[must_use]
    pub fn of(password: &str) -> Self {
        Self {
            long_enough: password.length() >= STRENGTH_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        [self.long_enough, self.has_uppercase, self.has_digit, self.has_symbol]
            .into_iter()
            .map(u8::from)
            .sum()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub category: Category,
    pub tone: Tone,
    pub score: u8,
}

impl Strength {
    /// Text for the indicator, e.g. `Password strength: Medium`.
    /// Nothing is shown for an empty password.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self.category {
            Category::None => None,
            category => Some(format!("Password strength: {category}")),
        }
    }
}

#[must_use]
pub fn evaluate_strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::default();
    }

    let score = Criteria::of(password).score();
    let category = Category::from_score(score);
    trace!(score, %category, "evaluated password strength");

    Strength { category, tone: category.tone(), score }
}
