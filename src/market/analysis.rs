//! Market classifications and their score contributions.

use super::inputs::MarketInputs;
use crate::config::MarketThresholds;
use serde::{Deserialize, Serialize};

pub const SIZE_GROWTH_MAX: f64 = 30.0;
pub const COMPETITION_MAX: f64 = 25.0;
pub const PRICING_MAX: f64 = 20.0;
pub const DEMAND_MAX: f64 = 15.0;
pub const OUTLOOK_MAX: f64 = 10.0;

/// Three-step grade used by every market classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionAnalysis {
    pub competitor_count: usize,
    pub intensity: Option<Grade>,
    /// Sum of the top four market shares, percent
    pub cr4: Option<f64>,
    pub concentration: Option<Grade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingAnalysis {
    pub average_price: Option<f64>,
    /// `(max - min) / average`
    pub price_spread: Option<f64>,
    pub competitiveness: Option<Grade>,
    pub average_margin: Option<f64>,
    pub margin_potential: Option<Grade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandAnalysis {
    pub growth_potential: Option<f64>,
    pub unmet_need: Option<f64>,
    pub strength: Option<Grade>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub size_growth: f64,
    pub competition: f64,
    pub pricing: f64,
    pub demand: f64,
    pub outlook: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        (self.size_growth + self.competition + self.pricing + self.demand + self.outlook)
            .min(100.0)
    }
}

pub fn market_share(inputs: &MarketInputs) -> f64 {
    if inputs.total_market > 0.0 {
        inputs.target_market / inputs.total_market
    } else {
        0.0
    }
}

/// Growth from the first historical point to the last projected one (or
/// the last historical one when nothing is projected).
pub fn growth_rate(inputs: &MarketInputs) -> f64 {
    if inputs.historical.len() < 2 {
        return 0.0;
    }
    let first = inputs.historical[0];
    let last = inputs
        .projected
        .last()
        .or_else(|| inputs.historical.last())
        .copied()
        .unwrap_or(first);

    if first == 0.0 {
        0.0
    } else {
        (last - first) / first
    }
}

pub fn competition_intensity(count: usize, t: &MarketThresholds) -> Option<Grade> {
    match count {
        0 => None,
        n if n <= t.high_intensity_max_competitors => Some(Grade::High),
        n if n >= t.low_intensity_min_competitors => Some(Grade::Low),
        _ => Some(Grade::Medium),
    }
}

/// CR4 over percent shares, `None` without share data.
pub fn concentration_ratio(shares: &[f64]) -> Option<f64> {
    if shares.is_empty() {
        return None;
    }
    let mut sorted = shares.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    Some(sorted.iter().take(4).sum())
}

pub fn concentration(cr4: f64, t: &MarketThresholds) -> Grade {
    if cr4 > t.high_concentration_cr4 {
        Grade::High
    } else if cr4 < t.low_concentration_cr4 {
        Grade::Low
    } else {
        Grade::Medium
    }
}

pub fn price_spread(inputs: &MarketInputs) -> Option<f64> {
    match (inputs.min_price, inputs.max_price, inputs.average_price) {
        (Some(min), Some(max), Some(avg)) if avg > 0.0 && max >= min => Some((max - min) / avg),
        _ => None,
    }
}

pub fn price_competitiveness(spread: f64, t: &MarketThresholds) -> Grade {
    if spread >= t.high_price_spread {
        Grade::High
    } else if spread < t.low_price_spread {
        Grade::Low
    } else {
        Grade::Medium
    }
}

pub fn margin_potential(margin: f64, t: &MarketThresholds) -> Grade {
    if margin > t.high_margin {
        Grade::High
    } else if margin < t.low_margin {
        Grade::Low
    } else {
        Grade::Medium
    }
}

pub fn demand_strength(
    growth_potential: Option<f64>,
    unmet_need: Option<f64>,
    t: &MarketThresholds,
) -> Option<Grade> {
    if growth_potential.is_none() && unmet_need.is_none() {
        return None;
    }
    let growth = growth_potential.unwrap_or(0.0);
    let need = unmet_need.unwrap_or(0.0);

    if growth >= t.strong_growth_potential && need >= t.strong_unmet_need {
        Some(Grade::High)
    } else if growth < t.weak_growth_potential || need < t.weak_unmet_need {
        Some(Grade::Low)
    } else {
        Some(Grade::Medium)
    }
}

// Pure function: Points for the size and growth block
fn size_growth_points(share: f64, growth: f64, total_market: f64, t: &MarketThresholds) -> f64 {
    let share_points: f64 = if total_market <= 0.0 {
        0.0
    } else if share >= t.significant_share {
        15.0
    } else if share >= t.moderate_share {
        10.0
    } else if share > 0.0 {
        5.0
    } else {
        0.0
    };

    let growth_points: f64 = if growth >= t.strong_growth_rate {
        15.0
    } else if growth >= t.moderate_growth_rate {
        10.0
    } else if growth > 0.0 {
        5.0
    } else {
        0.0
    };

    (share_points + growth_points).min(SIZE_GROWTH_MAX)
}

fn graded_points(grade: Option<Grade>, high: f64, medium: f64, low: f64) -> f64 {
    match grade {
        Some(Grade::High) => high,
        Some(Grade::Medium) => medium,
        Some(Grade::Low) => low,
        None => 0.0,
    }
}

fn outlook_points(opportunities: usize, threats: usize) -> f64 {
    if opportunities + threats == 0 {
        return 0.0;
    }
    (5.0 + 2.0 * opportunities as f64 - 2.0 * threats as f64).clamp(0.0, OUTLOOK_MAX)
}

pub fn analyze_competition(inputs: &MarketInputs, t: &MarketThresholds) -> CompetitionAnalysis {
    let cr4 = concentration_ratio(&inputs.competitor_shares);
    CompetitionAnalysis {
        competitor_count: inputs.competitor_count,
        intensity: competition_intensity(inputs.competitor_count, t),
        cr4,
        concentration: cr4.map(|ratio| concentration(ratio, t)),
    }
}

pub fn analyze_pricing(inputs: &MarketInputs, t: &MarketThresholds) -> PricingAnalysis {
    let spread = price_spread(inputs);
    PricingAnalysis {
        average_price: inputs.average_price,
        price_spread: spread,
        competitiveness: spread.map(|s| price_competitiveness(s, t)),
        average_margin: inputs.average_margin,
        margin_potential: inputs.average_margin.map(|m| margin_potential(m, t)),
    }
}

pub fn analyze_demand(inputs: &MarketInputs, t: &MarketThresholds) -> DemandAnalysis {
    DemandAnalysis {
        growth_potential: inputs.growth_potential,
        unmet_need: inputs.unmet_need,
        strength: demand_strength(inputs.growth_potential, inputs.unmet_need, t),
    }
}

pub fn score_breakdown(
    inputs: &MarketInputs,
    share: f64,
    growth: f64,
    competition: &CompetitionAnalysis,
    pricing: &PricingAnalysis,
    demand: &DemandAnalysis,
    t: &MarketThresholds,
) -> ScoreBreakdown {
    // Fewer rivals and a fragmented market leave more room to enter.
    let competition_points = graded_points(competition.intensity, 5.0, 10.0, 15.0)
        + graded_points(competition.concentration, 2.0, 6.0, 10.0);
    let pricing_points = graded_points(pricing.competitiveness, 10.0, 6.0, 2.0)
        + graded_points(pricing.margin_potential, 10.0, 6.0, 2.0);

    ScoreBreakdown {
        size_growth: size_growth_points(share, growth, inputs.total_market, t),
        competition: competition_points.min(COMPETITION_MAX),
        pricing: pricing_points.min(PRICING_MAX),
        demand: graded_points(demand.strength, 15.0, 9.0, 3.0).min(DEMAND_MAX),
        outlook: outlook_points(inputs.opportunities.len(), inputs.threats.len()),
    }
}
