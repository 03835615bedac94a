use serde::Serialize;
use wordsmith_core::{BranchNameSession, BranchOptions};

use super::Result;

pub struct BranchArgs {
    pub task: String,
    pub options: BranchOptions,
    pub json: bool,
}

/// JSON shape of `branch --json`.
#[derive(Serialize)]
struct BranchReport<'a> {
    task: &'a str,
    branch_name: String,
    #[serde(flatten)]
    options: &'a BranchOptions,
}

pub fn run(args: BranchArgs) -> Result<()> {
    let output = render(&args)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

pub fn render(args: &BranchArgs) -> Result<String> {
    let mut session = BranchNameSession::with_options(args.options.clone());
    session.set_task_name(args.task.as_str());
    let branch_name = session.branch_name();

    if branch_name.is_empty() {
        tracing::warn!(task = %args.task, "task does not produce a branch name");
    } else {
        tracing::debug!(%branch_name, options = ?session.options(), "composed branch name");
    }

    if !args.json {
        return Ok(branch_name);
    }

    let report = BranchReport {
        task: session.task_name(),
        branch_name,
        options: session.options(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
