//! Site build orchestration for SSGo.
//!
//! This crate ties together source discovery, output directory preparation,
//! and the conversion engine into one end-to-end workflow (`build_site`).

pub mod discovery;
pub mod output;
pub mod pipeline;

pub use discovery::discover_sources;
pub use output::prepare_output_dir;
pub use pipeline::{
    BuildConfig, BuildResult, BuiltPage, ProgressReporter, SilentProgress, build_site,
};
