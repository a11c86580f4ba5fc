use super::resolve_config;
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, OutputFormat};
use crate::observability::set_current_command;
use crate::state::FeasibilityState;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct OptimizeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
    /// Where to write the adjusted form data, if anywhere
    pub write_data: Option<PathBuf>,
}

pub fn handle_optimize(config: OptimizeConfig) -> Result<()> {
    set_current_command(format!("optimize {}", config.path.display()));

    let engine_config = resolve_config(config.config.as_deref())?;
    let form = io::read_form(&config.path)
        .with_context(|| format!("Failed to read form data from {}", config.path.display()))?;

    let state = FeasibilityState::new(form, engine_config);
    let result = state.optimize();
    tracing::info!(
        issues = result.issues.len(),
        resolved = result.issues_resolved,
        "Optimization finished"
    );

    let target = io::output_target(config.output.as_deref())?;
    let mut writer = create_writer(config.format, target, config.formatting_config);
    writer.write_optimization(&result)?;

    if let Some(path) = &config.write_data {
        let json = serde_json::to_string_pretty(&result.optimized_data)?;
        io::write_file(path, &json)
            .with_context(|| format!("Failed to write optimized data to {}", path.display()))?;
        log::info!("Optimized form data written to {}", path.display());
    }
    Ok(())
}
