use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::core::CalculationResult;
use crate::formatting::FormattingConfig;
use crate::optimization::OptimizationResult;
use crate::project::Project;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &CalculationResult) -> anyhow::Result<()>;
    fn write_optimization(&mut self, result: &OptimizationResult) -> anyhow::Result<()>;
    /// One saved project with its stored calculations.
    fn write_project(&mut self, project: &Project) -> anyhow::Result<()>;
    fn write_project_list(&mut self, projects: &[Project]) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
