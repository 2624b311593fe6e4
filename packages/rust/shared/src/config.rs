//! Site configuration for SSGo.
//!
//! A config file (`-c path`) may be JSON or TOML and carries the same two keys
//! as the command line. CLI flags override config file values, which override
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SsgoError};

/// Output directory used when neither the CLI nor the config file names one.
///
/// This is also the only directory the site builder is allowed to clear.
pub const DEFAULT_OUTPUT: &str = "dist";

// ---------------------------------------------------------------------------
// Config struct
// ---------------------------------------------------------------------------

/// Site build options, deserialized from a JSON or TOML config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path to a `.txt`/`.md` file or a directory containing them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Directory that receives the generated HTML.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    DEFAULT_OUTPUT.into()
}

impl SiteConfig {
    /// Apply command-line overrides on top of this config.
    pub fn merge_cli(mut self, input: Option<&str>, output: Option<&str>) -> Self {
        if let Some(input) = input {
            self.input = Some(input.to_string());
        }
        if let Some(output) = output {
            self.output = output.to_string();
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Supported config file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SsgoError::config(format!(
                "unsupported config file {}: expected a .json or .toml file",
                path.display()
            ))),
        }
    }
}

/// Load the site config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<SiteConfig> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| SsgoError::io(path, e))?;

    let config: SiteConfig = match format {
        ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| {
            SsgoError::config(format!("failed to parse {}: {e}", path.display()))
        })?,
        ConfigFormat::Toml => toml::from_str(&content).map_err(|e| {
            SsgoError::config(format!("failed to parse {}: {e}", path.display()))
        })?,
    };

    tracing::debug!(?path, ?config, "loaded config file");
    Ok(config)
}
