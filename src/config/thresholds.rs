use serde::{Deserialize, Serialize};

/// Financial viability and horizon defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialThresholds {
    /// Discount rate in percent used when the form leaves it blank (default: 10)
    #[serde(default = "default_discount_rate")]
    pub default_discount_rate: f64,

    /// Analysis horizon in years used when the form leaves it blank (default: 5)
    #[serde(default = "default_period")]
    pub default_period: u32,

    /// Minimum IRR, as a fraction, for a project to be viable (default: 0.08)
    #[serde(default = "default_min_irr")]
    pub min_irr: f64,

    /// Payback beyond this many years is flagged (default: 5)
    #[serde(default = "default_max_payback_years")]
    pub max_payback_years: f64,

    /// Payback at or under this many years earns full payback points (default: 3)
    #[serde(default = "default_quick_payback_years")]
    pub quick_payback_years: f64,
}

impl Default for FinancialThresholds {
    fn default() -> Self {
        Self {
            default_discount_rate: default_discount_rate(),
            default_period: default_period(),
            min_irr: default_min_irr(),
            max_payback_years: default_max_payback_years(),
            quick_payback_years: default_quick_payback_years(),
        }
    }
}

impl FinancialThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.default_discount_rate >= 0.0 && self.default_discount_rate.is_finite()) {
            return Err("financial.default_discount_rate must be a non-negative number".into());
        }
        if self.default_period == 0 {
            return Err("financial.default_period must be at least 1".into());
        }
        if self.quick_payback_years > self.max_payback_years {
            return Err(format!(
                "financial.quick_payback_years ({}) cannot exceed max_payback_years ({})",
                self.quick_payback_years, self.max_payback_years
            ));
        }
        Ok(())
    }
}

fn default_discount_rate() -> f64 {
    10.0
}
fn default_period() -> u32 {
    5
}
fn default_min_irr() -> f64 {
    0.08
}
fn default_max_payback_years() -> f64 {
    5.0
}
fn default_quick_payback_years() -> f64 {
    3.0
}

/// Score cut-offs shared by every category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViabilityThresholds {
    /// Minimum score for a category to count as viable (default: 70)
    #[serde(default = "default_viable_score")]
    pub viable_score: f64,

    /// Minimum score for a high feasibility level (default: 80)
    #[serde(default = "default_high_level")]
    pub high_level: f64,

    /// Minimum score for a medium feasibility level (default: 60)
    #[serde(default = "default_medium_level")]
    pub medium_level: f64,

    /// Low scores under this value are reported with high severity (default: 50)
    #[serde(default = "default_critical_score")]
    pub critical_score: f64,
}

impl Default for ViabilityThresholds {
    fn default() -> Self {
        Self {
            viable_score: default_viable_score(),
            high_level: default_high_level(),
            medium_level: default_medium_level(),
            critical_score: default_critical_score(),
        }
    }
}

impl ViabilityThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.medium_level) || !(0.0..=100.0).contains(&self.high_level)
        {
            return Err("viability levels must be between 0 and 100".into());
        }
        if self.medium_level > self.high_level {
            return Err(format!(
                "viability.medium_level ({}) cannot exceed high_level ({})",
                self.medium_level, self.high_level
            ));
        }
        Ok(())
    }
}

fn default_viable_score() -> f64 {
    70.0
}
fn default_high_level() -> f64 {
    80.0
}
fn default_medium_level() -> f64 {
    60.0
}
fn default_critical_score() -> f64 {
    50.0
}

/// Market classification thresholds.
///
/// Scoring, strengths, weaknesses and recommendations all read these same
/// values so the generated text never disagrees with the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketThresholds {
    /// Competitor counts at or under this value mean high intensity (default: 3)
    #[serde(default = "default_high_intensity_max_competitors")]
    pub high_intensity_max_competitors: usize,

    /// Competitor counts at or over this value mean low intensity (default: 10)
    #[serde(default = "default_low_intensity_min_competitors")]
    pub low_intensity_min_competitors: usize,

    /// CR4 above this percentage is a concentrated market (default: 60)
    #[serde(default = "default_high_concentration_cr4")]
    pub high_concentration_cr4: f64,

    /// CR4 below this percentage is a fragmented market (default: 30)
    #[serde(default = "default_low_concentration_cr4")]
    pub low_concentration_cr4: f64,

    /// Price spread over average at or above this ratio is high competitiveness (default: 0.5)
    #[serde(default = "default_high_price_spread")]
    pub high_price_spread: f64,

    /// Price spread over average below this ratio is low competitiveness (default: 0.2)
    #[serde(default = "default_low_price_spread")]
    pub low_price_spread: f64,

    /// Average margin percentage above this value is high potential (default: 40)
    #[serde(default = "default_high_margin")]
    pub high_margin: f64,

    /// Average margin percentage below this value is low potential (default: 15)
    #[serde(default = "default_low_margin")]
    pub low_margin: f64,

    /// Growth potential percentage needed for strong demand (default: 15)
    #[serde(default = "default_strong_growth_potential")]
    pub strong_growth_potential: f64,

    /// Unmet need percentage needed for strong demand (default: 30)
    #[serde(default = "default_strong_unmet_need")]
    pub strong_unmet_need: f64,

    /// Growth potential percentage under which demand is weak (default: 5)
    #[serde(default = "default_weak_growth_potential")]
    pub weak_growth_potential: f64,

    /// Unmet need percentage under which demand is weak (default: 10)
    #[serde(default = "default_weak_unmet_need")]
    pub weak_unmet_need: f64,

    /// Market share fraction considered significant (default: 0.10)
    #[serde(default = "default_significant_share")]
    pub significant_share: f64,

    /// Market share fraction considered moderate (default: 0.05)
    #[serde(default = "default_moderate_share")]
    pub moderate_share: f64,

    /// Growth rate fraction considered strong (default: 0.20)
    #[serde(default = "default_strong_growth_rate")]
    pub strong_growth_rate: f64,

    /// Growth rate fraction considered moderate (default: 0.10)
    #[serde(default = "default_moderate_growth_rate")]
    pub moderate_growth_rate: f64,
}

impl Default for MarketThresholds {
    fn default() -> Self {
        Self {
            high_intensity_max_competitors: default_high_intensity_max_competitors(),
            low_intensity_min_competitors: default_low_intensity_min_competitors(),
            high_concentration_cr4: default_high_concentration_cr4(),
            low_concentration_cr4: default_low_concentration_cr4(),
            high_price_spread: default_high_price_spread(),
            low_price_spread: default_low_price_spread(),
            high_margin: default_high_margin(),
            low_margin: default_low_margin(),
            strong_growth_potential: default_strong_growth_potential(),
            strong_unmet_need: default_strong_unmet_need(),
            weak_growth_potential: default_weak_growth_potential(),
            weak_unmet_need: default_weak_unmet_need(),
            significant_share: default_significant_share(),
            moderate_share: default_moderate_share(),
            strong_growth_rate: default_strong_growth_rate(),
            moderate_growth_rate: default_moderate_growth_rate(),
        }
    }
}

impl MarketThresholds {
    pub fn validate(&self) -> Result<(), String> {
        let ordered = [
            (
                self.high_intensity_max_competitors < self.low_intensity_min_competitors,
                "market.high_intensity_max_competitors must be below low_intensity_min_competitors",
            ),
            (
                self.low_concentration_cr4 <= self.high_concentration_cr4,
                "market.low_concentration_cr4 cannot exceed high_concentration_cr4",
            ),
            (
                self.low_price_spread <= self.high_price_spread,
                "market.low_price_spread cannot exceed high_price_spread",
            ),
            (
                self.low_margin <= self.high_margin,
                "market.low_margin cannot exceed high_margin",
            ),
            (
                self.moderate_share <= self.significant_share,
                "market.moderate_share cannot exceed significant_share",
            ),
            (
                self.moderate_growth_rate <= self.strong_growth_rate,
                "market.moderate_growth_rate cannot exceed strong_growth_rate",
            ),
        ];

        match ordered.iter().find(|(ok, _)| !ok) {
            Some((_, message)) => Err((*message).to_string()),
            None => Ok(()),
        }
    }
}

fn default_high_intensity_max_competitors() -> usize {
    3
}
fn default_low_intensity_min_competitors() -> usize {
    10
}
fn default_high_concentration_cr4() -> f64 {
    60.0
}
fn default_low_concentration_cr4() -> f64 {
    30.0
}
fn default_high_price_spread() -> f64 {
    0.5
}
fn default_low_price_spread() -> f64 {
    0.2
}
fn default_high_margin() -> f64 {
    40.0
}
fn default_low_margin() -> f64 {
    15.0
}
fn default_strong_growth_potential() -> f64 {
    15.0
}
fn default_strong_unmet_need() -> f64 {
    30.0
}
fn default_weak_growth_potential() -> f64 {
    5.0
}
fn default_weak_unmet_need() -> f64 {
    10.0
}
fn default_significant_share() -> f64 {
    0.10
}
fn default_moderate_share() -> f64 {
    0.05
}
fn default_strong_growth_rate() -> f64 {
    0.20
}
fn default_moderate_growth_rate() -> f64 {
    0.10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(FinancialThresholds::default().validate().is_ok());
        assert!(ViabilityThresholds::default().validate().is_ok());
        assert!(MarketThresholds::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let thresholds: MarketThresholds = toml::from_str("high_margin = 50.0").unwrap();
        assert_eq!(thresholds.high_margin, 50.0);
        assert_eq!(thresholds.low_margin, 15.0);
        assert_eq!(thresholds.high_intensity_max_competitors, 3);
    }

    #[test]
    fn inverted_levels_are_rejected() {
        let viability = ViabilityThresholds {
            high_level: 50.0,
            medium_level: 70.0,
            ..Default::default()
        };
        assert!(viability.validate().is_err());

        let market = MarketThresholds {
            low_margin: 60.0,
            ..Default::default()
        };
        assert!(market.validate().unwrap_err().contains("low_margin"));
    }

    #[test]
    fn zero_period_is_rejected() {
        let financial = FinancialThresholds {
            default_period: 0,
            ..Default::default()
        };
        assert!(financial.validate().is_err());
    }
}
