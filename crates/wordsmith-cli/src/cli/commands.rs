//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("wordsmith")
        .about("Case conversion, text statistics and git branch names")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(convert_command())
        .subcommand(stats_command())
        .subcommand(branch_command())
        .subcommand(cases_command())
}

/// Convert text to another case.
pub fn convert_command() -> Command {
    Command::new("convert")
        .about("Convert text to another case")
        .override_usage(
            "\
  wordsmith convert <CASE> <TEXT>
  wordsmith convert <CASE> -f <FILE>
  wordsmith convert <CASE> < input.txt",
        )
        .after_help(
            r#"EXAMPLES:
  wordsmith convert title 'the lord of the rings'   # The Lord of the Rings
  wordsmith convert sentence -f notes.txt           # from file
  pbpaste | wordsmith convert upper                 # from stdin
  wordsmith convert lower -f draft.txt --save       # write converted-text.txt"#,
        )
        .arg(case_arg())
        .arg(text_arg())
        .arg(input_file_arg())
        .arg(output_file_arg())
        .arg(save_arg())
}

/// Count characters, words, sentences and lines.
pub fn stats_command() -> Command {
    Command::new("stats")
        .about("Count characters, words, sentences and lines")
        .override_usage(
            "\
  wordsmith stats <TEXT>
  wordsmith stats -f <FILE>
  wordsmith stats < input.txt",
        )
        .after_help(
            r#"EXAMPLES:
  wordsmith stats 'Hello world'        # inline text
  wordsmith stats -f README.md --json  # JSON counters"#,
        )
        .arg(text_arg())
        .arg(input_file_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Generate a git branch name from a task description.
pub fn branch_command() -> Command {
    Command::new("branch")
        .about("Generate a git branch name from a task description")
        .override_usage(
            "\
  wordsmith branch <TASK>...
  wordsmith branch -p <PREFIX> <TASK>...
  wordsmith branch --custom-prefix <TEXT> <TASK>...",
        )
        .after_help(
            r#"EXAMPLES:
  wordsmith branch Add user login             # add-user-login
  wordsmith branch -p feature 'Fix bug #42'   # feature/fix-bug-42
  wordsmith branch --custom-prefix hotfix -d _ Refactor auth
                                              # hotfix/refactor_auth
  git switch -c "$(wordsmith branch -p bug Crash on save)""#,
        )
        .arg(task_arg())
        .arg(prefix_arg())
        .arg(custom_prefix_arg())
        .arg(divider_arg())
        .arg(json_arg())
}

/// List supported cases.
pub fn cases_command() -> Command {
    Command::new("cases")
        .about("List supported cases with a sample of each")
        .arg(color_arg())
}
