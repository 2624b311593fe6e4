//! Shared types, error model, and configuration for SSGo.
//!
//! This crate is the foundation depended on by all other SSGo crates.
//! It provides:
//! - [`SsgoError`] — the unified error type
//! - Source types ([`Dialect`], [`SourceFile`])
//! - Configuration ([`SiteConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{DEFAULT_OUTPUT, SiteConfig, load_config_from};
pub use error::{Result, SsgoError};
pub use types::{Dialect, SourceFile, split_name_and_ext};
