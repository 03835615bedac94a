//! Text statistics.
//!
//! Whitespace-only input counts characters but nothing else. Sentence
//! counting keeps whitespace-only fragments, and a trailing newline opens a
//! counted (empty) line.

use serde::{Deserialize, Serialize};

/// Counters shown next to the text being edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStats {
    /// Unicode scalar values, whitespace included.
    pub characters: usize,
    /// Maximal runs of non-whitespace.
    pub words: usize,
    /// Non-empty fragments between runs of `.`, `!`, `?`.
    pub sentences: usize,
    /// `\n`-separated segments.
    pub lines: usize,
}

/// Compute [`TextStats`] for `text`.
///
/// # Examples
/// ```
/// use wordsmith_core::{TextStats, compute_stats};
/// assert_eq!(
///     compute_stats("Hello world"),
///     TextStats { characters: 11, words: 2, sentences: 1, lines: 1 },
/// );
/// ```
pub fn compute_stats(text: &str) -> TextStats {
    let characters = text.chars().count();

    if text.trim().is_empty() {
        return TextStats {
            characters,
            ..TextStats::default()
        };
    }

    TextStats {
        characters,
        words: text.split_whitespace().count(),
        sentences: text
            .split(['.', '!', '?'])
            .filter(|fragment| !fragment.is_empty())
            .count(),
        lines: text.split('\n').count(),
    }
}
