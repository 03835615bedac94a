//! Case conversion.
//!
//! Each style is a total `&str -> String` function. Character casing uses the
//! standard library's Unicode mappings, so a single character may expand
//! (`ß` uppercases to `SS`). Word boundaries are deliberately naive: plain
//! `' '` for capitalized and title case, ASCII word characters for sentence
//! starts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Words kept lowercase by [`to_title_case`] unless they open or close the text.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "nor", "of", "on", "or",
    "per", "the", "to", "v", "v.", "vs", "vs.",
];

/// A casing style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseVariant {
    Sentence,
    Lower,
    Upper,
    Capitalized,
    Alternating,
    Title,
    Inverse,
}

impl CaseVariant {
    /// All variants, in display order.
    pub const ALL: [CaseVariant; 7] = [
        CaseVariant::Sentence,
        CaseVariant::Lower,
        CaseVariant::Upper,
        CaseVariant::Capitalized,
        CaseVariant::Alternating,
        CaseVariant::Title,
        CaseVariant::Inverse,
    ];

    /// Identifier used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            CaseVariant::Sentence => "sentence",
            CaseVariant::Lower => "lower",
            CaseVariant::Upper => "upper",
            CaseVariant::Capitalized => "capitalized",
            CaseVariant::Alternating => "alternating",
            CaseVariant::Title => "title",
            CaseVariant::Inverse => "inverse",
        }
    }

    /// Human-facing label, written in the style it produces.
    pub fn label(self) -> &'static str {
        match self {
            CaseVariant::Sentence => "Sentence case",
            CaseVariant::Lower => "lower case",
            CaseVariant::Upper => "UPPER CASE",
            CaseVariant::Capitalized => "Capitalized Case",
            CaseVariant::Alternating => "aLtErNaTiNg cAsE",
            CaseVariant::Title => "Title Case",
            CaseVariant::Inverse => "InVeRsE CaSe",
        }
    }

    /// Apply this style to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseVariant::Sentence => to_sentence_case(text),
            CaseVariant::Lower => to_lower_case(text),
            CaseVariant::Upper => to_upper_case(text),
            CaseVariant::Capitalized => to_capitalized_case(text),
            CaseVariant::Alternating => to_alternating_case(text),
            CaseVariant::Title => to_title_case(text),
            CaseVariant::Inverse => to_inverse_case(text),
        }
    }
}

impl fmt::Display for CaseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        CaseVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::UnknownCase(s.to_string()))
    }
}

/// Convert `text` to the given casing style.
///
/// # Examples
/// ```
/// use wordsmith_core::{CaseVariant, convert};
/// assert_eq!(convert(CaseVariant::Capitalized, "hello world foo"), "Hello World Foo");
/// ```
pub fn convert(variant: CaseVariant, text: &str) -> String {
    variant.apply(text)
}

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Lowercase everything, then uppercase the first word character of the text
/// and the first one after each `.`, `!` or `?`.
///
/// Whitespace between a terminator and the next word is skipped over and kept.
/// A terminator followed by anything else (another terminator, a quote) does
/// not capitalize.
///
/// # Examples
/// ```
/// use wordsmith_core::to_sentence_case;
/// assert_eq!(to_sentence_case("HELLO. how ARE you?  fine"), "Hello. How are you?  Fine");
/// ```
pub fn to_sentence_case(text: &str) -> String {
    let mut chars: Vec<char> = text.to_lowercase().chars().collect();

    let mut i = 0;
    if let Some(start) = word_after_whitespace(&chars, 0) {
        chars[start].make_ascii_uppercase();
        i = start + 1;
    }

    while i < chars.len() {
        if is_sentence_terminator(chars[i])
            && let Some(pos) = word_after_whitespace(&chars, i + 1)
        {
            chars[pos].make_ascii_uppercase();
            i = pos + 1;
            continue;
        }
        i += 1;
    }

    chars.into_iter().collect()
}

/// Lowercase everything, then uppercase the first character of every
/// `' '`-separated segment.
///
/// Only single spaces split; tabs and newlines stay inside segments.
pub fn to_capitalized_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase at even character positions, uppercase at odd ones.
///
/// Positions count every character, whitespace included.
pub fn to_alternating_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if i % 2 == 0 {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
    }
    result
}

/// Capitalized case that keeps small words (articles, short conjunctions and
/// prepositions) lowercase, except as the first or last word.
///
/// # Examples
/// ```
/// use wordsmith_core::to_title_case;
/// assert_eq!(to_title_case("the lord of the rings"), "The Lord of the Rings");
/// ```
pub fn to_title_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split(' ').collect();
    let last = words.len() - 1;

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && i < last && is_small_word(word) {
                word.to_string()
            } else {
                capitalize_first(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Swap the case of every character: uppercase becomes lowercase, anything
/// else is uppercased (a no-op for caseless characters).
pub fn to_inverse_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
    }
    result
}

/// Case-insensitive membership in the title-case small word list.
pub(crate) fn is_small_word(word: &str) -> bool {
    SMALL_WORDS.iter().any(|small| small.eq_ignore_ascii_case(word))
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Index of the word character reached by skipping whitespace from `from`.
fn word_after_whitespace(chars: &[char], from: usize) -> Option<usize> {
    let pos = from
        + chars[from..]
            .iter()
            .take_while(|c| c.is_whitespace())
            .count();
    chars.get(pos).filter(|c| is_word_char(**c)).map(|_| pos)
}
