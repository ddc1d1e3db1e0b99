use crate::error::CliError;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a finished result to `path`, or to stdout when `path` is `None`.
///
/// The file is written to a temporary sibling and renamed into place, so
/// `path` is either left untouched or replaced with the full contents.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        return Ok(());
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
