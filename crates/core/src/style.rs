// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output styles, selected by a single verb character.

use crate::float_fmt::FloatStyle;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from turning a verb into a [`Style`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("unsupported style '{0}' (expected one of b, e, E, f, g, G, s, v)")]
    Unsupported(char),
    #[error("style must be a single character, got {0:?}")]
    NotSingleChar(String),
}

/// How a duration is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `b`: binary exponent of the seconds value
    Binary,
    /// `e`: seconds in exponent notation
    Exponent,
    /// `E`: as `e` with an upper-case marker
    UpperExponent,
    /// `f`: seconds in fixed notation
    Fixed,
    /// `g`: seconds, fixed or exponent depending on magnitude
    General,
    /// `G`: as `g` with an upper-case marker
    UpperGeneral,
    /// `s`: multi-unit text such as `1w 2d`
    Units,
    /// `v`: same output as `s`
    Verbose,
}

impl Style {
    pub const ALL: [Style; 8] = [
        Style::Binary,
        Style::Exponent,
        Style::UpperExponent,
        Style::Fixed,
        Style::General,
        Style::UpperGeneral,
        Style::Units,
        Style::Verbose,
    ];

    /// The verb character that selects this style.
    pub fn verb(self) -> char {
        match self {
            Style::Binary => 'b',
            Style::Exponent => 'e',
            Style::UpperExponent => 'E',
            Style::Fixed => 'f',
            Style::General => 'g',
            Style::UpperGeneral => 'G',
            Style::Units => 's',
            Style::Verbose => 'v',
        }
    }

    /// Float layout for the numeric styles, `None` for multi-unit text.
    pub fn float_style(self) -> Option<FloatStyle> {
        match self {
            Style::Binary => Some(FloatStyle::Binary),
            Style::Exponent => Some(FloatStyle::Exponent { upper: false }),
            Style::UpperExponent => Some(FloatStyle::Exponent { upper: true }),
            Style::Fixed => Some(FloatStyle::Fixed),
            Style::General => Some(FloatStyle::General { upper: false }),
            Style::UpperGeneral => Some(FloatStyle::General { upper: true }),
            Style::Units | Style::Verbose => None,
        }
    }
}

impl TryFrom<char> for Style {
    type Error = StyleError;

    fn try_from(verb: char) -> Result<Self, Self::Error> {
        Style::ALL
            .into_iter()
            .find(|style| style.verb() == verb)
            .ok_or(StyleError::Unsupported(verb))
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(verb), None) => Style::try_from(verb),
            _ => Err(StyleError::NotSingleChar(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
