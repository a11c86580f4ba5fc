//! Single-pass optimization heuristic.
//!
//! Detects issues in a calculation result, applies the registered strategy
//! of each issue to a deep copy of the form, then recalculates the copy to
//! report which issues went away. There is no search and no convergence
//! loop; each strategy runs at most once per issue.

pub mod issues;
pub mod paths;
pub mod strategies;

pub use issues::{detect_issues, Issue, IssueKind};
pub use paths::{discover_paths, AdjustmentRole, NumericPath, ValuePath};
pub use strategies::{
    Adjustment, OptimizationStrategy, Recommendation, StrategyRegistry, Workspace,
};

use crate::calculator::calculate_feasibility;
use crate::config::FeasibilityConfig;
use crate::core::{CalculationResult, FormData, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info_span};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_data: FormData,
    pub recommendations: Vec<Recommendation>,
    pub issues_resolved: usize,
    pub original_viability: bool,
    pub projected_viability: bool,
    pub original_score: Score,
    pub projected_score: Score,
    pub issues: Vec<Issue>,
}

pub fn optimize_project(
    form: &FormData,
    calculations: &CalculationResult,
    config: &FeasibilityConfig,
) -> OptimizationResult {
    optimize_with_registry(form, calculations, config, &StrategyRegistry::default())
}

pub fn optimize_with_registry(
    form: &FormData,
    calculations: &CalculationResult,
    config: &FeasibilityConfig,
    registry: &StrategyRegistry,
) -> OptimizationResult {
    let span = info_span!("optimize_project");
    let _guard = span.enter();

    let issues = detect_issues(calculations, config);
    debug!(count = issues.len(), "Detected issues");

    let paths = discover_paths(form, &config.categories);
    let mut workspace = Workspace::new(form.clone(), paths, &config.optimization);

    let recommendations: Vec<Recommendation> = issues
        .iter()
        .map(|issue| {
            registry
                .resolve(issue.kind, &config.optimization)
                .apply(issue, &mut workspace)
        })
        .collect();

    let optimized_data = workspace.data;
    let projected = calculate_feasibility(&optimized_data, config);
    let remaining: BTreeSet<IssueKind> = detect_issues(&projected, config)
        .into_iter()
        .map(|issue| issue.kind)
        .collect();
    let issues_resolved = issues
        .iter()
        .filter(|issue| !remaining.contains(&issue.kind))
        .count();

    debug!(
        resolved = issues_resolved,
        projected_viability = projected.overall.viable,
        "Optimization finished"
    );

    OptimizationResult {
        optimized_data,
        recommendations,
        issues_resolved,
        original_viability: calculations.overall.viable,
        projected_viability: projected.overall.viable,
        original_score: calculations.overall.score,
        projected_score: projected.overall.score,
        issues,
    }
}
