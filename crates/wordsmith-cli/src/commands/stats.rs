use std::path::PathBuf;

use wordsmith_core::{TextStats, compute_stats};

use super::Result;
use super::input::load_text;
use crate::cli::{Palette, Role};

pub struct StatsArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub palette: Palette,
}

pub fn run(args: StatsArgs) -> Result<()> {
    let input = load_text(args.text.as_deref(), args.file.as_deref())?;
    let stats = compute_stats(&input);
    tracing::debug!(?stats, "computed stats");

    let output = if args.json {
        serde_json::to_string_pretty(&stats)?
    } else {
        render(&stats, args.palette)
    };
    println!("{output}");
    Ok(())
}

/// One aligned `Label  value` row per counter.
pub fn render(stats: &TextStats, palette: Palette) -> String {
    let rows = [
        ("Characters", stats.characters),
        ("Words", stats.words),
        ("Sentences", stats.sentences),
        ("Lines", stats.lines),
    ];
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(label, value)| {
            format!(
                "{}  {}",
                palette.paint(Role::Label, &format!("{label:<width$}")),
                palette.paint(Role::Value, &value.to_string()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
