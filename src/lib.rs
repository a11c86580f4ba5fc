// Export modules for library usage
pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod financial;
pub mod formatting;
pub mod io;
pub mod market;
pub mod normalize;
pub mod observability;
pub mod optimization;
pub mod project;
pub mod scoring;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    Area, CalculationResult, FeasibilityLevel, FormData, OverallAssessment, Rating, Score,
    Section, SectionKind, Severity, Suggestion,
};

pub use crate::calculator::calculate_feasibility;
pub use crate::config::{load_config, FeasibilityConfig};
pub use crate::errors::{Error, Result};

pub use crate::financial::{compute_financial_metrics, FinancialMetrics};
pub use crate::market::{evaluate_market, MarketEvaluation};
pub use crate::scoring::{evaluate_legal, evaluate_technical, LegalEvaluation, TechnicalEvaluation};

pub use crate::optimization::{
    optimize_project, optimize_with_registry, Issue, IssueKind, OptimizationResult,
    OptimizationStrategy, Recommendation, StrategyRegistry,
};

pub use crate::project::{FileProjectRepository, Project, ProjectRepository};
pub use crate::state::FeasibilityState;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
