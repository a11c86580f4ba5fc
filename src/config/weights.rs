//! Weight tables for the technical sub-categories and the overall score.

use serde::{Deserialize, Serialize};

const SUM_TOLERANCE: f64 = 0.001;

// Pure function: Check if a weight is in valid range
pub fn is_valid_weight(weight: f64) -> bool {
    (0.0..=1.0).contains(&weight)
}

// Pure function: Validate a named set of weights
fn validate_weight_set(table: &str, weights: &[(&str, f64)]) -> Result<(), String> {
    if let Some((name, weight)) = weights.iter().find(|(_, w)| !is_valid_weight(*w)) {
        return Err(format!(
            "{table}.{name} weight must be between 0.0 and 1.0, got {weight}"
        ));
    }

    let sum: f64 = weights.iter().map(|(_, w)| w).sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(format!("{table} weights must sum to 1.0, but sum to {sum:.3}"));
    }
    Ok(())
}

// Pure function: Scale factor that brings a weight sum to 1.0
fn normalization_factor(sum: f64) -> Option<f64> {
    (sum > 0.0 && (sum - 1.0).abs() > f64::EPSILON).then(|| 1.0 / sum)
}

/// Technical sub-category weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalWeights {
    #[serde(default = "default_localization_weight")]
    pub localization: f64,

    #[serde(default = "default_capacity_weight")]
    pub capacity: f64,

    #[serde(default = "default_engineering_weight")]
    pub engineering: f64,

    #[serde(default = "default_resources_weight")]
    pub resources: f64,

    #[serde(default = "default_infrastructure_weight")]
    pub infrastructure: f64,

    #[serde(default = "default_timeline_weight")]
    pub timeline: f64,
}

impl Default for TechnicalWeights {
    fn default() -> Self {
        Self {
            localization: default_localization_weight(),
            capacity: default_capacity_weight(),
            engineering: default_engineering_weight(),
            resources: default_resources_weight(),
            infrastructure: default_infrastructure_weight(),
            timeline: default_timeline_weight(),
        }
    }
}

impl TechnicalWeights {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("localization", self.localization),
            ("capacity", self.capacity),
            ("engineering", self.engineering),
            ("resources", self.resources),
            ("infrastructure", self.infrastructure),
            ("timeline", self.timeline),
        ]
    }

    /// Weight for a sub-category key; unknown keys weigh nothing.
    pub fn weight_for(&self, category: &str) -> f64 {
        self.named()
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_weight_set("technical_weights", &self.named())
    }

    /// Normalize weights to ensure they sum to 1.0
    pub fn normalize(&mut self) {
        let sum: f64 = self.named().iter().map(|(_, w)| w).sum();
        if let Some(factor) = normalization_factor(sum) {
            self.localization *= factor;
            self.capacity *= factor;
            self.engineering *= factor;
            self.resources *= factor;
            self.infrastructure *= factor;
            self.timeline *= factor;
        }
    }
}

pub fn default_localization_weight() -> f64 {
    0.15
}
pub fn default_capacity_weight() -> f64 {
    0.20
}
pub fn default_engineering_weight() -> f64 {
    0.25
}
pub fn default_resources_weight() -> f64 {
    0.15
}
pub fn default_infrastructure_weight() -> f64 {
    0.15
}
pub fn default_timeline_weight() -> f64 {
    0.10
}

/// Weights of each area in the overall score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallWeights {
    #[serde(default = "default_financial_weight")]
    pub financial: f64,

    #[serde(default = "default_technical_weight")]
    pub technical: f64,

    #[serde(default = "default_market_weight")]
    pub market: f64,

    #[serde(default = "default_legal_weight")]
    pub legal: f64,
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            financial: default_financial_weight(),
            technical: default_technical_weight(),
            market: default_market_weight(),
            legal: default_legal_weight(),
        }
    }
}

impl OverallWeights {
    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("financial", self.financial),
            ("technical", self.technical),
            ("market", self.market),
            ("legal", self.legal),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_weight_set("overall_weights", &self.named())
    }

    pub fn normalize(&mut self) {
        let sum: f64 = self.named().iter().map(|(_, w)| w).sum();
        if let Some(factor) = normalization_factor(sum) {
            self.financial *= factor;
            self.technical *= factor;
            self.market *= factor;
            self.legal *= factor;
        }
    }
}

pub fn default_financial_weight() -> f64 {
    0.35
}
pub fn default_technical_weight() -> f64 {
    0.25
}
pub fn default_market_weight() -> f64 {
    0.25
}
pub fn default_legal_weight() -> f64 {
    0.15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!(TechnicalWeights::default().validate().is_ok());
        assert!(OverallWeights::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_weight_is_named() {
        let weights = TechnicalWeights {
            capacity: 1.4,
            ..Default::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.contains("capacity"), "{err}");
    }

    #[test]
    fn normalize_rescales_to_one() {
        let mut weights = OverallWeights {
            financial: 0.4,
            technical: 0.4,
            market: 0.4,
            legal: 0.4,
        };
        weights.normalize();
        assert!((weights.financial - 0.25).abs() < 1e-9);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn unknown_category_weighs_nothing() {
        let weights = TechnicalWeights::default();
        assert_eq!(weights.weight_for("engineering"), 0.25);
        assert_eq!(weights.weight_for("marketing"), 0.0);
    }
}
