//! Explicit application state: the form being edited plus the configuration.

use crate::calculator::calculate_feasibility;
use crate::config::FeasibilityConfig;
use crate::core::{CalculationResult, FormData, Section, SectionKind};
use crate::errors::Result;
use crate::optimization::{optimize_project, OptimizationResult};
use crate::project::{Project, ProjectOwner};

/// Owns the current form data. Results are recomputed on every read, so
/// they can never go stale.
#[derive(Debug, Clone, Default)]
pub struct FeasibilityState {
    form: FormData,
    config: FeasibilityConfig,
}

impl FeasibilityState {
    pub fn new(form: FormData, config: FeasibilityConfig) -> Self {
        Self { form, config }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn config(&self) -> &FeasibilityConfig {
        &self.config
    }

    /// Replace one section, returning the previous content.
    pub fn update_section(&mut self, kind: SectionKind, section: Section) -> Section {
        std::mem::replace(self.form.section_mut(kind), section)
    }

    pub fn calculations(&self) -> CalculationResult {
        calculate_feasibility(&self.form, &self.config)
    }

    pub fn optimize(&self) -> OptimizationResult {
        optimize_project(&self.form, &self.calculations(), &self.config)
    }

    /// Adopt the data proposed by an optimization run.
    pub fn apply_optimization(&mut self, result: OptimizationResult) {
        self.form = result.optimized_data;
    }

    pub fn snapshot(&self, name: &str, owner: ProjectOwner) -> Result<Project> {
        Project::snapshot(&self.form, &self.calculations(), name, owner)
    }
}
