//! End-to-end build pipeline: input path → discovery → convert → write pages.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use ssgo_shared::{Dialect, Result, SiteConfig, SourceFile, SsgoError};

use crate::discovery::discover_sources;
use crate::output::{prepare_output_dir, write_page};

/// Configuration for the `build_site` pipeline.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// A `.txt`/`.md` file or a directory containing them.
    pub input: PathBuf,
    /// Output directory, as given by the user (trimmed later).
    pub output: String,
}

impl TryFrom<&SiteConfig> for BuildConfig {
    type Error = SsgoError;

    fn try_from(config: &SiteConfig) -> Result<Self> {
        let input = config
            .input
            .as_deref()
            .map(str::trim)
            .filter(|input| !input.is_empty())
            .ok_or_else(|| SsgoError::config("no input path given"))?;

        Ok(Self {
            input: PathBuf::from(input),
            output: config.output.clone(),
        })
    }
}

/// One generated page.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    /// The source it was generated from.
    pub source: PathBuf,
    /// Path of the written HTML file.
    pub output: PathBuf,
    /// Page title (detected or derived from the file name).
    pub title: String,
    /// Dialect the source was read as.
    pub dialect: Dialect,
}

/// Result of the `build_site` pipeline.
#[derive(Debug)]
pub struct BuildResult {
    /// Directory the pages were written to.
    pub output_dir: PathBuf,
    /// Generated pages, in conversion order.
    pub pages: Vec<BuiltPage>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each page is written.
    fn page_built(&self, page: &BuiltPage, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &BuildResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn page_built(&self, _page: &BuiltPage, _current: usize, _total: usize) {}
    fn done(&self, _result: &BuildResult) {}
}

/// Run the full build.
///
/// 1. Discover sources under the input path
/// 2. Prepare the output directory
/// 3. Convert each source and write `<name>.html`
///
/// The first failing source aborts the build.
#[instrument(skip_all, fields(input = %config.input.display(), output = %config.output))]
pub fn build_site(config: &BuildConfig, progress: &dyn ProgressReporter) -> Result<BuildResult> {
    let start = Instant::now();

    info!("starting build");

    // --- Phase 1: Discovery ---
    progress.phase("Discovering sources");
    let sources = discover_sources(&config.input)?;

    // --- Phase 2: Output ---
    progress.phase("Preparing output directory");
    let output_dir = prepare_output_dir(&config.output)?;

    // --- Phase 3: Convert ---
    progress.phase("Converting");
    let total = sources.len();
    let mut pages = Vec::with_capacity(total);

    for (idx, source) in sources.iter().enumerate() {
        let page = build_page(source, &output_dir)?;
        progress.page_built(&page, idx + 1, total);
        pages.push(page);
    }

    let result = BuildResult {
        output_dir,
        pages,
        elapsed: start.elapsed(),
    };

    info!(
        pages = result.pages.len(),
        elapsed_ms = result.elapsed.as_millis() as u64,
        "build complete"
    );
    progress.done(&result);

    Ok(result)
}

/// Convert one source file and write its page.
fn build_page(source: &SourceFile, output_dir: &Path) -> Result<BuiltPage> {
    let raw =
        std::fs::read_to_string(&source.path).map_err(|e| SsgoError::io(&source.path, e))?;

    let converted = ssgo_markdown::convert(&raw, source.dialect, &source.name)?;
    if converted.title_detected {
        debug!(title = %converted.title, "title found");
    } else {
        debug!("no title found");
    }

    let title = converted.title.clone();
    let html = converted.into_document();
    let output = write_page(output_dir, &source.output_file_name(), &html)?;

    info!(
        source = %source.path.display(),
        output = %output.display(),
        "page generated"
    );

    Ok(BuiltPage {
        source: source.path.clone(),
        output,
        title,
        dialect: source.dialect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn phase(&self, name: &str) {
            self.events.lock().unwrap().push(format!("phase:{name}"));
        }
        fn page_built(&self, page: &BuiltPage, current: usize, total: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("page:{}:{current}/{total}", page.title));
        }
        fn done(&self, result: &BuildResult) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}", result.pages.len()));
        }
    }

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn builds_directory_of_sources() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("src");
        let output = dir.path().join("out");
        write(&input.join("story.txt"), "Silver Blaze\n\n\nI am afraid.\n");
        write(&input.join("guide/usage.md"), "# Usage\n\nRun **it**.\n");
        write(&input.join("cover.jpg"), "binary");

        let config = BuildConfig {
            input: input.clone(),
            output: output.to_string_lossy().into_owned(),
        };
        let result = build_site(&config, &SilentProgress).expect("build");

        assert_eq!(result.pages.len(), 2);
        assert_eq!(result.output_dir, output);

        let story = std::fs::read_to_string(output.join("story.html")).unwrap();
        assert!(story.contains("<title>Silver Blaze</title>"));
        assert!(story.contains("<h1>Silver Blaze</h1>\n\n<p>I am afraid. </p>\n"));

        let usage = std::fs::read_to_string(output.join("usage.html")).unwrap();
        assert!(usage.contains("<title>usage</title>"));
        assert!(usage.contains("<h1>Usage</h1>\n\n<p>Run <b>it</b>. </p>\n"));

        assert!(!output.join("cover.html").exists());
    }

    #[test]
    fn empty_named_source_does_not_abort_build() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("src");
        let output = dir.path().join("out");
        write(&input.join("a.txt"), "first");
        write(&input.join(".txt"), "hidden");
        write(&input.join("z.txt"), "last");

        let config = BuildConfig {
            input,
            output: output.to_string_lossy().into_owned(),
        };
        let result = build_site(&config, &SilentProgress).expect("build");

        assert_eq!(result.pages.len(), 2);
        assert!(output.join("a.html").exists());
        assert!(output.join("z.html").exists());
        assert!(!output.join(".html").exists());
    }

    #[test]
    fn single_file_build_reports_progress() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("notes.txt");
        write(&input, "one\ntwo\n\nthree");

        let config = BuildConfig {
            input,
            output: dir.path().join("site").to_string_lossy().into_owned(),
        };
        let progress = RecordingProgress::default();
        build_site(&config, &progress).expect("build");

        let events = progress.events.into_inner().unwrap();
        assert_eq!(
            events,
            vec![
                "phase:Discovering sources",
                "phase:Preparing output directory",
                "phase:Converting",
                "page:notes:1/1",
                "done:1",
            ]
        );
    }

    #[test]
    fn unsupported_input_does_not_touch_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("data.csv");
        write(&input, "a,b");
        let output = dir.path().join("out");

        let config = BuildConfig {
            input,
            output: output.to_string_lossy().into_owned(),
        };
        let err = build_site(&config, &SilentProgress).unwrap_err();

        assert!(matches!(err, SsgoError::UnsupportedInput { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("bad.txt");
        std::fs::write(&input, [0xff, 0xfe, 0x00]).unwrap();

        let config = BuildConfig {
            input,
            output: dir.path().join("out").to_string_lossy().into_owned(),
        };
        let err = build_site(&config, &SilentProgress).unwrap_err();
        assert!(matches!(err, SsgoError::Io { .. }));
    }

    #[test]
    fn build_config_requires_input() {
        let err = BuildConfig::try_from(&SiteConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no input path"));

        let config = SiteConfig::default().merge_cli(Some("notes"), None);
        let build = BuildConfig::try_from(&config).expect("valid");
        assert_eq!(build.input, PathBuf::from("notes"));
        assert_eq!(build.output, "dist");
    }
}
