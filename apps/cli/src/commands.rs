//! CLI definition, tracing setup, and the build command.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use ssgo_core::{BuildConfig, BuildResult, BuiltPage, ProgressReporter};
use ssgo_shared::{SiteConfig, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// SSGo — a static site generator for .txt and .md files.
#[derive(Parser)]
#[command(
    name = "ssgo",
    version,
    about = "Turn .txt and .md files into standalone HTML pages.",
    long_about = None,
    disable_version_flag = true,
    group(ArgGroup::new("source").required(true).args(["input", "config"])),
)]
pub(crate) struct Cli {
    /// Path to a .txt / .md file OR a folder containing .txt / .md files to be turned into HTML.
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output directory for the generated HTML (defaults to ./dist, which is cleared first).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a .json or .toml file containing SSGo configuration options.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display installed version of SSGo.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (--verbose, --verbose --verbose).
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "ssgo=info",
        1 => "ssgo=debug",
        _ => "ssgo=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Resolve the effective site config: config file, then CLI overrides.
pub(crate) fn resolve_config(cli: &Cli) -> Result<SiteConfig> {
    let base = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => SiteConfig::default(),
    };

    Ok(base.merge_cli(cli.input.as_deref(), cli.output.as_deref()))
}

/// Run the build described by the CLI flags.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let build = BuildConfig::try_from(&config).map_err(|e| {
        eyre!("{e}. Use 'ssgo -i <path>' or a config file with an \"input\" key.")
    })?;

    info!(input = %build.input.display(), output = %build.output, "building site");

    let reporter = CliProgress::new();
    let result = ssgo_core::build_site(&build, &reporter)?;

    println!();
    println!(
        "  Done! Check '{}' directory to see generated HTML.",
        result.output_dir.display()
    );
    println!("  Pages:  {}", result.pages.len());
    println!("  Time:   {:.2}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn page_built(&self, page: &BuiltPage, current: usize, total: usize) {
        self.spinner.set_message(format!(
            "Generated [{current}/{total}] {}",
            page.output.display()
        ));
    }

    fn done(&self, _result: &BuildResult) {
        self.spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn input_and_output_flags() {
        let cli = Cli::try_parse_from(["ssgo", "-i", "notes", "-o", "public"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.input.as_deref(), Some("notes"));
        assert_eq!(config.output, "public");
    }

    #[test]
    fn output_defaults_to_dist() {
        let cli = Cli::try_parse_from(["ssgo", "--input", "a.txt"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.output, "dist");
    }

    #[test]
    fn input_or_config_is_required() {
        assert!(Cli::try_parse_from(["ssgo"]).is_err());
        assert!(Cli::try_parse_from(["ssgo", "-o", "public"]).is_err());
    }

    #[test]
    fn short_v_prints_version() {
        let err = Cli::try_parse_from(["ssgo", "-v"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn repeated_verbose_counts() {
        let cli = Cli::try_parse_from(["ssgo", "-i", "x", "--verbose", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
