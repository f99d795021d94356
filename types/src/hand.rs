//! The three hands of janken.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// A janken hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    #[default]
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hand '{raw}'; expected one of: {expected:?}")]
pub struct HandParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl HandParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl Hand {
    /// All hands, in button order (グー, チョキ, パー).
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    const NAMES: &'static [&'static str] = &["rock", "paper", "scissors"];

    /// Maps `0..3` onto a hand. Values outside the range wrap.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Paper => "paper",
            Hand::Scissors => "scissors",
        }
    }

    /// Japanese display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Hand::Rock => "グー",
            Hand::Paper => "パー",
            Hand::Scissors => "チョキ",
        }
    }

    /// Primary key binding shown on the button.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Hand::Rock => 'r',
            Hand::Paper => 'p',
            Hand::Scissors => 's',
        }
    }

    /// The hand this one beats.
    #[must_use]
    pub const fn beats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hand {
    type Err = HandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Hand::Rock),
            "paper" => Ok(Hand::Paper),
            "scissors" => Ok(Hand::Scissors),
            _ => Err(HandParseError {
                raw: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}
