//! Git branch names from free-text task descriptions.
//!
//! A branch name is an optional prefix segment plus a slug:
//! `feature/add-user-login`. Slugs contain only `[a-z0-9]` and the chosen
//! divider, and never start or end with the divider.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Leading path segment of a branch name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchPrefix {
    #[default]
    None,
    Feature,
    Bug,
    /// Literal text supplied separately (see [`BranchOptions::custom_prefix`]).
    Custom,
}

impl BranchPrefix {
    pub const ALL: [BranchPrefix; 4] = [
        BranchPrefix::Feature,
        BranchPrefix::Bug,
        BranchPrefix::None,
        BranchPrefix::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BranchPrefix::None => "none",
            BranchPrefix::Feature => "feature",
            BranchPrefix::Bug => "bug",
            BranchPrefix::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BranchPrefix::None => "None",
            BranchPrefix::Feature => "Feature",
            BranchPrefix::Bug => "Bug",
            BranchPrefix::Custom => "Custom",
        }
    }
}

impl fmt::Display for BranchPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BranchPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        BranchPrefix::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::UnknownPrefix(s.to_string()))
    }
}

/// Separator between slug words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Divider {
    #[default]
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "_")]
    Underscore,
}

impl Divider {
    pub fn as_char(self) -> char {
        match self {
            Divider::Dash => '-',
            Divider::Underscore => '_',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Divider::Dash => "Dash (-)",
            Divider::Underscore => "Underscore (_)",
        }
    }
}

impl fmt::Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Divider {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "-" | "dash" => Ok(Divider::Dash),
            "_" | "underscore" => Ok(Divider::Underscore),
            _ => Err(ParseError::UnknownDivider(s.to_string())),
        }
    }
}

/// Prefix and divider choices applied to every task name.
///
/// Built with consuming setters:
///
/// ```
/// use wordsmith_core::{BranchOptions, BranchPrefix, Divider};
///
/// let options = BranchOptions::new()
///     .prefix(BranchPrefix::Custom)
///     .custom_prefix("hotfix")
///     .divider(Divider::Underscore);
/// assert_eq!(options.compose("Refactor auth"), "hotfix/refactor_auth");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOptions {
    pub(crate) prefix: BranchPrefix,
    /// Only consulted when `prefix` is [`BranchPrefix::Custom`].
    pub(crate) custom_prefix: String,
    pub(crate) divider: Divider,
}

impl BranchOptions {
    /// No prefix, dash divider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options after the user clears the generator: `feature` prefix, dash
    /// divider. Differs from [`BranchOptions::new`] on the prefix.
    pub fn cleared() -> Self {
        Self {
            prefix: BranchPrefix::Feature,
            ..Self::default()
        }
    }

    /// Set the prefix kind.
    pub fn prefix(mut self, value: BranchPrefix) -> Self {
        self.prefix = value;
        self
    }

    /// Set the literal used by [`BranchPrefix::Custom`].
    pub fn custom_prefix(mut self, value: impl Into<String>) -> Self {
        self.custom_prefix = value.into();
        self
    }

    /// Set the slug divider.
    pub fn divider(mut self, value: Divider) -> Self {
        self.divider = value;
        self
    }

    /// Branch name for `task` under these options.
    pub fn compose(&self, task: &str) -> String {
        compose_branch_name(task, self.prefix, &self.custom_prefix, self.divider)
    }
}

/// Reduce `text` to lowercase ASCII alphanumerics joined by `divider`.
///
/// Runs of whitespace, `_` and `-` become a single divider; any other
/// character is dropped without splitting words.
///
/// # Examples
/// ```
/// use wordsmith_core::{Divider, slugify};
/// assert_eq!(slugify("Add User Login!!", Divider::Dash), "add-user-login");
/// assert_eq!(slugify("  multiple   spaces  ", Divider::Underscore), "multiple_spaces");
/// ```
pub fn slugify(text: &str, divider: Divider) -> String {
    let divider = divider.as_char();
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_divider = false;

    for c in lowered.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_divider && !slug.is_empty() {
                slug.push(divider);
            }
            pending_divider = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_divider = true;
        }
    }

    slug
}

/// Compose a branch name from a task description and prefix choice.
///
/// Returns an empty string when `task` is blank. A custom prefix is only
/// lowercased, not slugified; an empty one yields the bare slug.
///
/// # Examples
/// ```
/// use wordsmith_core::{BranchPrefix, Divider, compose_branch_name};
/// assert_eq!(
///     compose_branch_name("Fix bug #42", BranchPrefix::Feature, "", Divider::Dash),
///     "feature/fix-bug-42",
/// );
/// assert_eq!(compose_branch_name("", BranchPrefix::Feature, "", Divider::Dash), "");
/// ```
pub fn compose_branch_name(
    task: &str,
    prefix: BranchPrefix,
    custom_prefix: &str,
    divider: Divider,
) -> String {
    if task.trim().is_empty() {
        return String::new();
    }

    let slug = slugify(task, divider);
    let prefix_value = match prefix {
        BranchPrefix::None => return slug,
        BranchPrefix::Custom => custom_prefix.to_lowercase(),
        named => named.name().to_string(),
    };

    if prefix_value.is_empty() {
        slug
    } else {
        format!("{prefix_value}/{slug}")
    }
}
