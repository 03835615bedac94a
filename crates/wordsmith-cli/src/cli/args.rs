//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! Option names (cases, prefixes, dividers) are parsed by the core's
//! `FromStr` impls so the CLI and library accept the same spellings.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use wordsmith_core::{BranchPrefix, CaseVariant, Divider, ParseError};

use super::ColorChoice;

/// Target case (positional).
pub fn case_arg() -> Arg {
    Arg::new("case")
        .value_name("CASE")
        .required(true)
        .value_parser(parse_case)
        .help("Target case: sentence, lower, upper, capitalized, alternating, title, inverse")
}

/// Inline text (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .help("Inline text (reads --file or stdin when omitted)")
}

/// Input file (-f/--file).
pub fn input_file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("text")
        .help("Read text from file (use \"-\" for stdin)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Save output to the default download file (--save).
pub fn save_arg() -> Arg {
    Arg::new("save")
        .long("save")
        .action(ArgAction::SetTrue)
        .conflicts_with("output")
        .help("Write output to converted-text.txt in the current directory")
}

/// Task description words (positional, variadic).
pub fn task_arg() -> Arg {
    Arg::new("task")
        .value_name("TASK")
        .num_args(1..)
        .required(true)
        .help("Task or ticket description")
}

/// Branch prefix (-p/--prefix).
pub fn prefix_arg() -> Arg {
    Arg::new("prefix")
        .short('p')
        .long("prefix")
        .value_name("PREFIX")
        .value_parser(parse_prefix)
        .help("Branch prefix: none, feature, bug, custom (default: none, or custom with --custom-prefix)")
}

/// Literal custom prefix (--custom-prefix).
pub fn custom_prefix_arg() -> Arg {
    Arg::new("custom_prefix")
        .long("custom-prefix")
        .value_name("TEXT")
        .help("Prefix text used with --prefix custom (e.g. hotfix, refactor, chore)")
}

/// Slug divider (-d/--divider).
pub fn divider_arg() -> Arg {
    Arg::new("divider")
        .short('d')
        .long("divider")
        .value_name("DIVIDER")
        .default_value("-")
        .value_parser(parse_divider)
        .allow_hyphen_values(true)
        .help("Word divider: - (dash) or _ (underscore)")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(value_parser!(ColorChoice))
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log to stderr (-v for info, -vv for debug; RUST_LOG overrides)")
}

fn parse_case(s: &str) -> Result<CaseVariant, ParseError> {
    s.parse()
}

fn parse_prefix(s: &str) -> Result<BranchPrefix, ParseError> {
    s.parse()
}

fn parse_divider(s: &str) -> Result<Divider, ParseError> {
    s.parse()
}
