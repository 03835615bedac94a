#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Pure text transforms behind Wordsmith.
//!
//! Two independent engines:
//! - **Case conversion**: seven casing styles ([`CaseVariant`]) plus
//!   [`TextStats`] counters.
//! - **Branch names**: [`slugify`] and [`compose_branch_name`] turn a task
//!   description into a git branch name.
//!
//! Every transform is total: any input string yields an output, never an
//! error. Errors only arise when parsing option names from strings.
//!
//! # Example
//!
//! ```
//! use wordsmith_core::{BranchPrefix, CaseVariant, Divider, compose_branch_name, convert};
//!
//! assert_eq!(convert(CaseVariant::Title, "the lord of the rings"), "The Lord of the Rings");
//! assert_eq!(
//!     compose_branch_name("Fix bug #42", BranchPrefix::Feature, "", Divider::Dash),
//!     "feature/fix-bug-42",
//! );
//! ```

pub mod branch;
pub mod case;
pub mod session;
pub mod stats;

#[cfg(test)]
mod branch_tests;

pub use branch::{BranchOptions, BranchPrefix, Divider, compose_branch_name, slugify};
pub use case::{
    CaseVariant, convert, to_alternating_case, to_capitalized_case, to_inverse_case,
    to_lower_case, to_sentence_case, to_title_case, to_upper_case,
};
pub use session::{BranchNameSession, CaseConverterSession, CopyFeedback, TextExport};
pub use stats::{TextStats, compute_stats};

/// Errors from parsing option names (case variants, prefixes, dividers).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(
        "unknown case '{0}' (expected one of: sentence, lower, upper, capitalized, alternating, title, inverse)"
    )]
    UnknownCase(String),

    #[error("unknown branch prefix '{0}' (expected one of: none, feature, bug, custom)")]
    UnknownPrefix(String),

    #[error("unknown divider '{0}' (expected '-' or '_')")]
    UnknownDivider(String),
}
