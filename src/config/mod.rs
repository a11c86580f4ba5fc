// Sub-modules
mod categories;
mod loader;
mod optimization;
mod thresholds;
mod weights;

pub use categories::{CategoryGroup, CategoryKeys};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    user_config_path, CONFIG_FILE_NAME,
};
pub use optimization::OptimizationSettings;
pub use thresholds::{FinancialThresholds, MarketThresholds, ViabilityThresholds};
pub use weights::{is_valid_weight, OverallWeights, TechnicalWeights};

use serde::{Deserialize, Serialize};

/// Complete engine configuration. Every table is optional in TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityConfig {
    #[serde(default)]
    pub financial: FinancialThresholds,

    #[serde(default)]
    pub viability: ViabilityThresholds,

    #[serde(default)]
    pub technical_weights: TechnicalWeights,

    #[serde(default)]
    pub overall_weights: OverallWeights,

    #[serde(default)]
    pub market: MarketThresholds,

    #[serde(default)]
    pub categories: CategoryKeys,

    #[serde(default)]
    pub optimization: OptimizationSettings,
}

impl FeasibilityConfig {
    /// Replace every invalid table with its defaults and normalize weights.
    ///
    /// Returns the messages of the tables that were replaced.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut replaced = Vec::new();

        if let Err(e) = self.financial.validate() {
            replaced.push(e);
            self.financial = FinancialThresholds::default();
        }
        if let Err(e) = self.viability.validate() {
            replaced.push(e);
            self.viability = ViabilityThresholds::default();
        }
        if let Err(e) = self.market.validate() {
            replaced.push(e);
            self.market = MarketThresholds::default();
        }
        if let Err(e) = self.optimization.validate() {
            replaced.push(e);
            self.optimization = OptimizationSettings {
                skip_unevaluated_areas: self.optimization.skip_unevaluated_areas,
                disabled_strategies: std::mem::take(&mut self.optimization.disabled_strategies),
                ..OptimizationSettings::default()
            };
        }

        if let Err(e) = self.technical_weights.validate() {
            replaced.push(e);
            self.technical_weights = TechnicalWeights::default();
        } else {
            self.technical_weights.normalize(); // Ensure exact sum of 1.0
        }
        if let Err(e) = self.overall_weights.validate() {
            replaced.push(e);
            self.overall_weights = OverallWeights::default();
        } else {
            self.overall_weights.normalize();
        }

        replaced
    }
}
