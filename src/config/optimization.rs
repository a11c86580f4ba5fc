use crate::optimization::IssueKind;
use serde::{Deserialize, Serialize};

/// Percentage nudges applied by the optimization pass, as fractions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSettings {
    /// Cost reduction for a negative NPV (default: 0.15)
    #[serde(default = "default_negative_npv_cost_cut")]
    pub negative_npv_cost_cut: f64,

    /// Revenue increase for a negative NPV (default: 0.12)
    #[serde(default = "default_negative_npv_revenue_boost")]
    pub negative_npv_revenue_boost: f64,

    /// Investment reduction for a negative NPV (default: 0.10)
    #[serde(default = "default_negative_npv_investment_cut")]
    pub negative_npv_investment_cut: f64,

    /// Revenue increase for a low IRR (default: 0.08)
    #[serde(default = "default_low_irr_revenue_boost")]
    pub low_irr_revenue_boost: f64,

    /// Investment reduction for a long payback (default: 0.20)
    #[serde(default = "default_long_payback_investment_cut")]
    pub long_payback_investment_cut: f64,

    /// Increase of market reach figures for market issues (default: 0.10)
    #[serde(default = "default_market_boost")]
    pub market_boost: f64,

    /// Raise no issue for a technical, market or legal screen left empty
    /// (default: false, an empty screen is not viable)
    #[serde(default)]
    pub skip_unevaluated_areas: bool,

    /// Issue kinds whose strategy is skipped in favor of the generic note
    #[serde(default)]
    pub disabled_strategies: Vec<IssueKind>,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            negative_npv_cost_cut: default_negative_npv_cost_cut(),
            negative_npv_revenue_boost: default_negative_npv_revenue_boost(),
            negative_npv_investment_cut: default_negative_npv_investment_cut(),
            low_irr_revenue_boost: default_low_irr_revenue_boost(),
            long_payback_investment_cut: default_long_payback_investment_cut(),
            market_boost: default_market_boost(),
            skip_unevaluated_areas: false,
            disabled_strategies: Vec::new(),
        }
    }
}

impl OptimizationSettings {
    pub fn validate(&self) -> Result<(), String> {
        let fractions = [
            ("negative_npv_cost_cut", self.negative_npv_cost_cut),
            ("negative_npv_revenue_boost", self.negative_npv_revenue_boost),
            ("negative_npv_investment_cut", self.negative_npv_investment_cut),
            ("low_irr_revenue_boost", self.low_irr_revenue_boost),
            ("long_payback_investment_cut", self.long_payback_investment_cut),
            ("market_boost", self.market_boost),
        ];
        match fractions.iter().find(|(_, v)| !(0.0..1.0).contains(v)) {
            Some((name, value)) => Err(format!(
                "optimization.{name} must be a fraction in [0.0, 1.0), got {value}"
            )),
            None => Ok(()),
        }
    }

    pub fn is_disabled(&self, kind: IssueKind) -> bool {
        self.disabled_strategies.contains(&kind)
    }
}

fn default_negative_npv_cost_cut() -> f64 {
    0.15
}
fn default_negative_npv_revenue_boost() -> f64 {
    0.12
}
fn default_negative_npv_investment_cut() -> f64 {
    0.10
}
fn default_low_irr_revenue_boost() -> f64 {
    0.08
}
fn default_long_payback_investment_cut() -> f64 {
    0.20
}
fn default_market_boost() -> f64 {
    0.10
}
