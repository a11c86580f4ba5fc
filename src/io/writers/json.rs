use crate::core::CalculationResult;
use crate::io::output::OutputWriter;
use crate::optimization::OptimizationResult;
use crate::project::Project;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        self.write_json(results)
    }

    fn write_optimization(&mut self, result: &OptimizationResult) -> anyhow::Result<()> {
        self.write_json(result)
    }

    fn write_project(&mut self, project: &Project) -> anyhow::Result<()> {
        self.write_json(project)
    }

    fn write_project_list(&mut self, projects: &[Project]) -> anyhow::Result<()> {
        self.write_json(projects)
    }
}
