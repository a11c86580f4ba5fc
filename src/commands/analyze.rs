use super::resolve_config;
use crate::calculator::calculate_feasibility;
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, OutputFormat};
use crate::observability::set_current_command;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    set_current_command(format!("analyze {}", config.path.display()));

    let engine_config = resolve_config(config.config.as_deref())?;
    let form = io::read_form(&config.path)
        .with_context(|| format!("Failed to read form data from {}", config.path.display()))?;

    let results = calculate_feasibility(&form, &engine_config);
    tracing::info!(
        score = results.overall.score.value(),
        viable = results.overall.viable,
        "Feasibility calculated"
    );

    let target = io::output_target(config.output.as_deref())?;
    let mut writer = create_writer(config.format, target, config.formatting_config);
    writer.write_results(&results)?;

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}
