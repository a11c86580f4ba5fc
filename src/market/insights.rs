//! Qualitative findings derived from the market classifications.

use super::analysis::{CompetitionAnalysis, DemandAnalysis, Grade, PricingAnalysis};
use super::inputs::MarketInputs;
use crate::config::MarketThresholds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

impl MarketInsights {
    fn strength(&mut self, text: impl Into<String>) {
        self.strengths.push(text.into());
    }

    fn weakness(&mut self, text: impl Into<String>, recommendation: impl Into<String>) {
        self.weaknesses.push(text.into());
        self.recommendations.push(recommendation.into());
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[allow(clippy::too_many_arguments)]
pub fn derive_insights(
    inputs: &MarketInputs,
    share: f64,
    growth: f64,
    competition: &CompetitionAnalysis,
    pricing: &PricingAnalysis,
    demand: &DemandAnalysis,
    t: &MarketThresholds,
) -> MarketInsights {
    let mut insights = MarketInsights::default();

    if inputs.total_market > 0.0 {
        if share >= t.significant_share {
            insights.strength(format!("Significant target market share ({})", percent(share)));
        } else if share < t.moderate_share {
            insights.weakness(
                format!("Small target market share ({})", percent(share)),
                "Broaden the target segment or add distribution channels",
            );
        }
    }

    if growth >= t.strong_growth_rate {
        insights.strength(format!("Strong market growth ({})", percent(growth)));
    } else if inputs.historical.len() >= 2 && growth <= 0.0 {
        insights.weakness(
            "Stagnant or shrinking market",
            "Validate demand trends before committing the investment",
        );
    }

    match competition.intensity {
        Some(Grade::Low) => insights.strength("Few direct competitors"),
        Some(Grade::High) => insights.weakness(
            format!("Crowded market ({} competitors)", competition.competitor_count),
            "Define a clear differentiation against established competitors",
        ),
        _ => {}
    }
    if competition.concentration == Some(Grade::High) {
        insights.weakness(
            "Market dominated by a few players",
            "Target niches the leading competitors do not serve",
        );
    }

    if pricing.competitiveness == Some(Grade::High) {
        insights.strength("Wide price range leaves room for positioning");
    }
    match pricing.margin_potential {
        Some(Grade::High) => insights.strength("Healthy margins in the sector"),
        Some(Grade::Low) => insights.weakness(
            "Thin sector margins",
            "Review the cost structure and pricing strategy",
        ),
        _ => {}
    }

    match demand.strength {
        Some(Grade::High) => insights.strength("Strong unmet demand"),
        Some(Grade::Low) => insights.weakness(
            "Weak demand signals",
            "Run a demand study or pilot before launch",
        ),
        _ => {}
    }

    if inputs.threats.len() > inputs.opportunities.len() {
        insights.weakness(
            "Identified threats outweigh opportunities",
            "Prepare mitigation plans for the main threats",
        );
    } else if !inputs.opportunities.is_empty() && inputs.threats.is_empty() {
        insights.strength("Opportunities identified with no listed threats");
    }

    insights
}
