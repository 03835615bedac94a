use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use super::{Error, Result};

/// Resolve command input: inline text, then `--file` (`-` for stdin), then
/// piped stdin.
///
/// An interactive stdin with no other input is an error rather than a
/// silent wait for EOF.
pub fn load_text(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        if is_stdin_path(path) {
            return load_stdin();
        }
        return load_file(path);
    }

    if io::stdin().is_terminal() {
        return Err(Error::MissingInput);
    }
    load_stdin()
}

/// `-` names stdin.
pub fn is_stdin_path(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn load_stdin() -> Result<String> {
    read_stream(io::stdin().lock())
}

/// Read a whole stream as UTF-8 text.
pub fn read_stream(mut reader: impl Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::ReadStdin)?;
    tracing::debug!(bytes = buf.len(), "read stdin");
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content)
}
