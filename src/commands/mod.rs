//! CLI command implementations.
//!
//! - **analyze**: calculate the feasibility report of a form data file
//! - **optimize**: detect issues and propose adjusted figures
//! - **project**: save, list, rename and show project snapshots
//! - **init**: write a configuration file with the default thresholds

pub mod analyze;
pub mod init;
pub mod optimize;
pub mod project;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use optimize::{handle_optimize, OptimizeConfig};
pub use project::{handle_projects, handle_save, SaveConfig};

use crate::config::{load_config, FeasibilityConfig};
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use anyhow::{Context, Result};
use std::path::Path;

pub fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}

/// Explicit config file, or discovery from the working directory.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<FeasibilityConfig> {
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    load_config(explicit, &cwd).context("Failed to load configuration")
}
