//! Editing sessions: the state a front end keeps between keystrokes.
//!
//! Sessions own the current input and derive everything else (stats, branch
//! name) on demand, so derived values cannot drift from the input. Side
//! effects stay outside: [`CaseConverterSession::copy`] and
//! [`CaseConverterSession::export`] hand back what the clipboard or file
//! download should receive and leave the I/O to the caller.

use std::time::{Duration, Instant};

use crate::branch::{BranchOptions, BranchPrefix, Divider};
use crate::case::CaseVariant;
use crate::stats::{TextStats, compute_stats};

/// How long the "copied" indicator stays on after a copy.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Suggested file name for downloaded text.
pub const EXPORT_FILE_NAME: &str = "converted-text.txt";

/// Transient "copied" indicator.
///
/// Time is passed in rather than read from the clock so callers (and tests)
/// control it.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_FEEDBACK)
    }
}

/// Payload for a plain-text file download.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextExport<'a> {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub contents: &'a str,
}

/// Text being converted between cases.
#[derive(Clone, Debug, Default)]
pub struct CaseConverterSession {
    text: String,
    copied: CopyFeedback,
}

impl CaseConverterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Counters for the current text.
    pub fn stats(&self) -> TextStats {
        compute_stats(&self.text)
    }

    /// Replace the text with its conversion. Does nothing on empty text.
    pub fn apply(&mut self, variant: CaseVariant) {
        if self.text.is_empty() {
            return;
        }
        self.text = variant.apply(&self.text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Text to place on the clipboard, or `None` when there is nothing to copy.
    pub fn copy(&mut self, now: Instant) -> Option<&str> {
        if self.text.is_empty() {
            return None;
        }
        self.copied.mark(now);
        Some(&self.text)
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied.is_active(now)
    }

    /// Download payload for the current text, or `None` when it is empty.
    pub fn export(&self) -> Option<TextExport<'_>> {
        if self.text.is_empty() {
            return None;
        }
        Some(TextExport {
            file_name: EXPORT_FILE_NAME,
            media_type: "text/plain",
            contents: &self.text,
        })
    }
}

/// Task name and options of the branch name generator.
///
/// Starts with no prefix; [`clear`](Self::clear) switches to the `feature`
/// prefix instead.
#[derive(Clone, Debug, Default)]
pub struct BranchNameSession {
    task_name: String,
    options: BranchOptions,
    copied: CopyFeedback,
}

impl BranchNameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BranchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn set_task_name(&mut self, value: impl Into<String>) {
        self.task_name = value.into();
    }

    pub fn prefix(&self) -> BranchPrefix {
        self.options.prefix
    }

    pub fn set_prefix(&mut self, value: BranchPrefix) {
        self.options.prefix = value;
    }

    pub fn custom_prefix(&self) -> &str {
        &self.options.custom_prefix
    }

    pub fn set_custom_prefix(&mut self, value: impl Into<String>) {
        self.options.custom_prefix = value.into();
    }

    pub fn divider(&self) -> Divider {
        self.options.divider
    }

    pub fn set_divider(&mut self, value: Divider) {
        self.options.divider = value;
    }

    pub fn options(&self) -> &BranchOptions {
        &self.options
    }

    /// Branch name for the current inputs, recomputed on every call.
    pub fn branch_name(&self) -> String {
        self.options.compose(&self.task_name)
    }

    /// Branch name to place on the clipboard, or `None` when it is empty.
    pub fn copy(&mut self, now: Instant) -> Option<String> {
        let name = self.branch_name();
        if name.is_empty() {
            return None;
        }
        self.copied.mark(now);
        Some(name)
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied.is_active(now)
    }

    /// Clearing is offered only while a task name is entered.
    pub fn can_clear(&self) -> bool {
        !self.task_name.is_empty()
    }

    /// Empty the inputs and reset options to [`BranchOptions::cleared`].
    pub fn clear(&mut self) {
        self.task_name.clear();
        self.options = BranchOptions::cleared();
    }
}
