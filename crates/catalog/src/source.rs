//! Reads library records from markdown content files.
//!
//! Each library lives in its own `.md` file whose YAML front matter carries
//! the record fields; the markdown body is ignored.
//!
//! ```text
//! ---
//! title: PyO3
//! host_lang: Python
//! guest_lang: Rust
//! crate: pyo3
//! description: Rust bindings for Python
//! ---
//! ```

use crate::error::{ErrorKind, Result};
use crate::models::LibraryRecord;
use exn::ResultExt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

const DELIMITER: &str = "---";
const EXTENSION: &str = "md";

/// Parses the front matter of a single content document.
pub fn parse_front_matter(text: &str) -> Result<LibraryRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines();
    if lines.next().map(str::trim_end) != Some(DELIMITER) {
        exn::bail!(ErrorKind::FrontMatter);
    }
    let mut yaml = String::new();
    for line in lines {
        if line.trim_end() == DELIMITER {
            return serde_yaml::from_str(&yaml).or_raise(|| ErrorKind::Parse);
        }
        yaml.push_str(line);
        yaml.push('\n');
    }
    exn::bail!(ErrorKind::FrontMatter);
}

/// Reads and parses one content file.
pub fn load_file(path: impl AsRef<Path>) -> Result<LibraryRecord> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).or_raise(|| ErrorKind::Io(path.to_path_buf()))?;
    parse_front_matter(&text).or_raise(|| ErrorKind::InvalidFile(path.to_path_buf()))
}

/// Loads every `.md` file directly inside `dir`.
///
/// Files are read in path order so the resulting collection, and everything
/// derived from it, is the same on every run.
#[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<LibraryRecord>> {
    let dir = dir.as_ref();
    let mut paths = fs::read_dir(dir)
        .or_raise(|| ErrorKind::Io(dir.to_path_buf()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()
        .or_raise(|| ErrorKind::Io(dir.to_path_buf()))?;
    paths.retain(|path| path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION));
    paths.sort();
    let records = paths.iter().map(|path| load_file(path)).collect::<Result<Vec<_>>>()?;
    tracing::info!(count = records.len(), "Loaded library records");
    Ok(records)
}
