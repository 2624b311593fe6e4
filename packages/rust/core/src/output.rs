//! Output directory preparation and page writing.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use ssgo_shared::{DEFAULT_OUTPUT, Result, SsgoError};

/// Make sure the output directory exists and is ready for fresh pages.
///
/// The path is trimmed and must not be empty. A missing directory is created;
/// an existing file is an error. Only the default `dist` directory is cleared
/// of previous builds, so a user-supplied directory is never deleted.
pub fn prepare_output_dir(output: &str) -> Result<PathBuf> {
    let output = output.trim();
    if output.is_empty() {
        return Err(SsgoError::validation("output directory string is empty"));
    }

    let path = PathBuf::from(output);
    debug!(path = %path.display(), "preparing output directory");

    match std::fs::metadata(&path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            create_dir(&path)?;
        }
        Err(e) => return Err(SsgoError::io(&path, e)),
        Ok(meta) if !meta.is_dir() => {
            return Err(SsgoError::validation(format!(
                "output path exists, but is not a directory: {}",
                path.display()
            )));
        }
        Ok(_) if is_clearable(output) => {
            info!("removing previous compilations from the output folder");
            std::fs::remove_dir_all(&path).map_err(|e| SsgoError::io(&path, e))?;
            create_dir(&path)?;
        }
        Ok(_) => {
            warn!(
                path = %path.display(),
                "output directory exists, pages with the same name will be overwritten"
            );
        }
    }

    Ok(path)
}

/// Only the default directory, named exactly as given, may be emptied.
fn is_clearable(output: &str) -> bool {
    output == DEFAULT_OUTPUT
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| SsgoError::io(path, e))
}

/// Write one generated page, returning its path.
pub(crate) fn write_page(output_dir: &Path, file_name: &str, html: &str) -> Result<PathBuf> {
    let path = output_dir.join(file_name);
    std::fs::write(&path, html).map_err(|e| SsgoError::io(&path, e))?;
    debug!(path = %path.display(), bytes = html.len(), "page written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("site/public");
        let prepared = prepare_output_dir(out.to_str().unwrap()).expect("prepare");
        assert!(prepared.is_dir());
    }

    #[test]
    fn trims_output_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("public");
        let padded = format!("  {}  ", out.display());
        let prepared = prepare_output_dir(&padded).expect("prepare");
        assert_eq!(prepared, out);
    }

    #[test]
    fn empty_output_is_rejected() {
        let err = prepare_output_dir("   ").unwrap_err();
        assert!(matches!(err, SsgoError::Validation { .. }));
    }

    #[test]
    fn file_in_the_way_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("taken");
        std::fs::write(&file, "x").unwrap();

        let err = prepare_output_dir(file.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn existing_custom_directory_is_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let keep = dir.path().join("keep.html");
        std::fs::write(&keep, "old").unwrap();

        prepare_output_dir(dir.path().to_str().unwrap()).expect("prepare");
        assert!(keep.exists());
    }

    #[test]
    fn only_default_output_is_cleared() {
        assert!(is_clearable("dist"));
        assert!(!is_clearable("./dist"));
        assert!(!is_clearable("public"));
    }

    #[test]
    fn write_page_returns_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_page(dir.path(), "index.html", "<p>x</p>").expect("write");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<p>x</p>");
    }
}
