use std::fs;
use std::path::{Path, PathBuf};

use wordsmith_core::{CaseConverterSession, CaseVariant};

use super::input::load_text;
use super::{Error, Result};

pub struct ConvertArgs {
    pub case: CaseVariant,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Write to the session's default export file name.
    pub save: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    run_in(args, Path::new(""))
}

/// Like [`run`], with `--save` resolving its file name against `dir`.
pub fn run_in(args: ConvertArgs, dir: &Path) -> Result<()> {
    let session = convert(&args)?;

    let Some(export) = session.export() else {
        // Empty input converts to empty output; there is nothing to print or write.
        tracing::info!("input is empty, nothing to convert");
        return Ok(());
    };

    let target = match (&args.output, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(dir.join(export.file_name)),
        (None, false) => None,
    };

    match target {
        Some(path) => write_output(&path, export.contents),
        None => {
            print_text(export.contents);
            Ok(())
        }
    }
}

/// Load the input and apply the requested case.
pub fn convert(args: &ConvertArgs) -> Result<CaseConverterSession> {
    let input = load_text(args.text.as_deref(), args.file.as_deref())?;

    let mut session = CaseConverterSession::new();
    session.set_text(input);
    session.apply(args.case);
    tracing::debug!(case = %args.case, characters = session.stats().characters, "converted text");

    Ok(session)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote converted text");
    Ok(())
}

fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}
