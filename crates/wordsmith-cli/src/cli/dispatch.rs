//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap matches
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Prefix inference for branch (`--custom-prefix` alone selects custom)

use std::path::PathBuf;

use clap::ArgMatches;
use wordsmith_core::{BranchOptions, BranchPrefix, CaseVariant, Divider};

use super::ColorChoice;
use crate::commands::branch::BranchArgs;
use crate::commands::cases::CasesArgs;
use crate::commands::convert::ConvertArgs;
use crate::commands::stats::StatsArgs;

pub struct ConvertParams {
    pub case: CaseVariant,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub save: bool,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            case: *m.get_one::<CaseVariant>("case").expect("<CASE> is required"),
            text: m.get_one::<String>("text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            save: m.get_flag("save"),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            case: p.case,
            text: p.text,
            file: p.file,
            output: p.output,
            save: p.save,
        }
    }
}

pub struct StatsParams {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub color: ColorChoice,
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text: m.get_one::<String>("text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            text: p.text,
            file: p.file,
            json: p.json,
            palette: p.color.palette(),
        }
    }
}

pub struct BranchParams {
    pub task: String,
    pub prefix: Option<BranchPrefix>,
    pub custom_prefix: Option<String>,
    pub divider: Divider,
    pub json: bool,
}

impl BranchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let task = m
            .get_many::<String>("task")
            .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_default();

        Self {
            task,
            prefix: m.get_one::<BranchPrefix>("prefix").copied(),
            custom_prefix: m.get_one::<String>("custom_prefix").cloned(),
            divider: m.get_one::<Divider>("divider").copied().unwrap_or_default(),
            json: m.get_flag("json"),
        }
    }
}

impl From<BranchParams> for BranchArgs {
    fn from(p: BranchParams) -> Self {
        let prefix = p.prefix.unwrap_or_else(|| infer_prefix(p.custom_prefix.as_deref()));
        let options = BranchOptions::new()
            .prefix(prefix)
            .custom_prefix(p.custom_prefix.unwrap_or_default())
            .divider(p.divider);

        Self {
            task: p.task,
            options,
            json: p.json,
        }
    }
}

pub struct CasesParams {
    pub color: ColorChoice,
}

impl CasesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            color: parse_color(m),
        }
    }
}

impl From<CasesParams> for CasesArgs {
    fn from(p: CasesParams) -> Self {
        Self {
            palette: p.color.palette(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    m.get_one::<ColorChoice>("color").copied().unwrap_or_default()
}

/// Without an explicit --prefix, a custom prefix text selects `custom`.
fn infer_prefix(custom_prefix: Option<&str>) -> BranchPrefix {
    match custom_prefix {
        Some(_) => BranchPrefix::Custom,
        None => BranchPrefix::None,
    }
}
