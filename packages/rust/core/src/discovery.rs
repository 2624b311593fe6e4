//! Input discovery: resolve the `--input` path into convertible sources.

use std::path::Path;

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use ssgo_shared::{Dialect, Result, SourceFile, SsgoError, split_name_and_ext};

/// Resolve an input path into the list of sources to convert.
///
/// - A single file must be `.txt` or `.md` with a non-empty name.
/// - A directory is walked recursively; other files are skipped and at least
///   one source must be found. Results are sorted by path.
/// - Files named just `.txt` or `.md`, and files whose name is not valid
///   UTF-8, are skipped with a warning.
#[instrument]
pub fn discover_sources(input: &Path) -> Result<Vec<SourceFile>> {
    let metadata = std::fs::metadata(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SsgoError::validation(format!(
            "no such file or directory: {}",
            input.display()
        )),
        _ => SsgoError::io(input, e),
    })?;

    if !metadata.is_dir() {
        let source = SourceFile::from_path(input).ok_or_else(|| SsgoError::UnsupportedInput {
            path: input.to_path_buf(),
        })?;
        if source.name.is_empty() {
            return Err(SsgoError::validation(format!(
                "source file has an empty name: {}",
                input.display()
            )));
        }
        debug!(path = %source.path.display(), dialect = %source.dialect, "single source");
        return Ok(vec![source]);
    }

    info!("looking for .txt / .md files in the directory");

    let mut sources = Vec::new();
    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(input).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            SsgoError::io(path, source)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        match SourceFile::from_path(entry.path()) {
            Some(source) if source.name.is_empty() => {
                warn!(path = %source.path.display(), "skipping source with an empty name");
            }
            Some(source) => {
                debug!(path = %source.path.display(), dialect = %source.dialect, "found source");
                sources.push(source);
            }
            None if has_non_utf8_source_name(entry.path()) => {
                warn!(path = %entry.path().display(), "skipping source with a non UTF-8 name");
            }
            None => {}
        }
    }

    if sources.is_empty() {
        return Err(SsgoError::NoSources {
            path: input.to_path_buf(),
        });
    }

    sources.sort_by(|a, b| a.path.cmp(&b.path));
    info!(count = sources.len(), "sources discovered");
    Ok(sources)
}

/// True for a `.txt`/`.md`-looking file whose name cannot be read as UTF-8.
fn has_non_utf8_source_name(path: &Path) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };
    if file_name.to_str().is_some() {
        return false;
    }
    let lossy = file_name.to_string_lossy();
    let (_, ext) = split_name_and_ext(&lossy);
    Dialect::from_extension(ext).is_some()
}
