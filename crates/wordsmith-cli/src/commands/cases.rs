use wordsmith_core::CaseVariant;

use super::Result;
use crate::cli::{Palette, Role};

/// Mixed-case sentence pair that shows every variant's rules.
const SAMPLE: &str = "the quick brown Fox. jumps over the lazy dog";

pub struct CasesArgs {
    pub palette: Palette,
}

pub fn run(args: CasesArgs) -> Result<()> {
    println!("{}", render(args.palette));
    Ok(())
}

/// One row per variant: identifier, label, sample conversion.
pub fn render(palette: Palette) -> String {
    let name_width = CaseVariant::ALL
        .iter()
        .map(|v| v.name().len())
        .max()
        .unwrap_or(0);
    let label_width = CaseVariant::ALL
        .iter()
        .map(|v| v.label().len())
        .max()
        .unwrap_or(0);

    CaseVariant::ALL
        .iter()
        .map(|variant| {
            format!(
                "{}  {}  {}",
                palette.paint(Role::Label, &format!("{:<name_width$}", variant.name())),
                palette.paint(Role::Muted, &format!("{:<label_width$}", variant.label())),
                palette.paint(Role::Value, &variant.apply(SAMPLE)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
