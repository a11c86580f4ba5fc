//! Market evaluation: size and growth, competition, pricing, demand and
//! outlook folded into one 0-100 score with qualitative findings.
//!
//! Each block contributes only when the section carries its inputs, so a
//! market screen with nothing filled in scores `0` and is not evaluated.

pub mod analysis;
pub mod inputs;
pub mod insights;

pub use analysis::{
    CompetitionAnalysis, DemandAnalysis, Grade, PricingAnalysis, ScoreBreakdown,
};
pub use inputs::MarketInputs;
pub use insights::MarketInsights;

use crate::config::{MarketThresholds, ViabilityThresholds};
use crate::core::{FeasibilityLevel, Score, Section};
use crate::scoring::judge;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    /// Fraction of the total market targeted
    pub market_share: f64,
    /// Fractional growth over the available series
    pub growth_rate: f64,
    pub competition: CompetitionAnalysis,
    pub pricing: PricingAnalysis,
    pub demand: DemandAnalysis,
    pub breakdown: ScoreBreakdown,
    #[serde(flatten)]
    pub insights: MarketInsights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEvaluation {
    pub score: Score,
    pub viable: bool,
    pub level: FeasibilityLevel,
    pub evaluated: bool,
    pub detailed_analysis: DetailedAnalysis,
}

pub fn evaluate_market(
    market: &Section,
    thresholds: &MarketThresholds,
    viability: &ViabilityThresholds,
) -> MarketEvaluation {
    let inputs = MarketInputs::from_section(market);
    let evaluated = inputs != MarketInputs::default();

    let share = analysis::market_share(&inputs);
    let growth = analysis::growth_rate(&inputs);
    let competition = analysis::analyze_competition(&inputs, thresholds);
    let pricing = analysis::analyze_pricing(&inputs, thresholds);
    let demand = analysis::analyze_demand(&inputs, thresholds);

    let breakdown = analysis::score_breakdown(
        &inputs,
        share,
        growth,
        &competition,
        &pricing,
        &demand,
        thresholds,
    );
    let insights = insights::derive_insights(
        &inputs,
        share,
        growth,
        &competition,
        &pricing,
        &demand,
        thresholds,
    );

    let score = Score::new(breakdown.total()).rounded();
    let (viable, level) = judge(score, evaluated, viability);

    log::debug!(
        "Market score {} (share {:.3}, growth {:.3}, evaluated {})",
        score,
        share,
        growth,
        evaluated
    );

    MarketEvaluation {
        score,
        viable,
        level,
        evaluated,
        detailed_analysis: DetailedAnalysis {
            market_share: share,
            growth_rate: growth,
            competition,
            pricing,
            demand,
            breakdown,
            insights,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn evaluate(market: serde_json::Value) -> MarketEvaluation {
        evaluate_market(
            &Section::from_value(market),
            &MarketThresholds::default(),
            &ViabilityThresholds::default(),
        )
    }

    #[test]
    fn empty_market_scores_zero() {
        let result = evaluate(json!({}));
        assert_eq!(result.score, Score::ZERO);
        assert!(!result.viable);
        assert_eq!(result.level, FeasibilityLevel::Low);
        assert!(!result.evaluated);
    }

    #[test]
    fn attractive_market_is_viable() {
        let result = evaluate(json!({
            "targetMarket": 15000,
            "totalMarket": 100000,
            "historicalData": [100, 110, 120],
            "projectedData": [130, 150],
            "competitors": [
                { "name": "A", "marketShare": 8, "price": 10 },
                { "name": "B", "marketShare": 6, "price": 12 },
                { "name": "C", "marketShare": 5, "price": 16 },
                { "name": "D", "marketShare": 4, "price": 9 },
                { "name": "E", "marketShare": 3, "price": 11 }
            ],
            "averageMargin": 45,
            "growthPotential": 20,
            "unmetNeed": 35,
            "opportunities": ["Tourism", "Delivery apps"],
            "threats": []
        }));

        let breakdown = result.detailed_analysis.breakdown;
        // share 0.15 -> 15, growth 0.5 -> 15
        assert_eq!(breakdown.size_growth, 30.0);
        // 5 competitors -> medium (10), CR4 23 -> low (10)
        assert_eq!(breakdown.competition, 20.0);
        // spread (16-9)/11.6 ≈ 0.60 -> high (10), margin 45 -> high (10)
        assert_eq!(breakdown.pricing, 20.0);
        assert_eq!(breakdown.demand, 15.0);
        assert_eq!(breakdown.outlook, 9.0);
        assert_eq!(result.score.value(), 94.0);
        assert!(result.viable);
        assert_eq!(result.level, FeasibilityLevel::High);
        assert!(!result.detailed_analysis.insights.strengths.is_empty());
    }

    #[test]
    fn saturated_market_is_not_viable() {
        let result = evaluate(json!({
            "targetMarket": 100,
            "totalMarket": 100000,
            "competitorCount": 2,
            "averageMargin": 10,
            "threats": ["Imports", "Regulation"]
        }));
        assert!(result.evaluated);
        assert!(!result.viable);
        assert_eq!(result.level, FeasibilityLevel::Low);
        assert!(!result.detailed_analysis.insights.recommendations.is_empty());
    }

    #[test]
    fn detailed_analysis_serializes_camel_case() {
        let result = evaluate(json!({ "competitorCount": 12 }));
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["detailedAnalysis"]["competition"]["competitorCount"].is_number());
        assert!(value["detailedAnalysis"]["strengths"].is_array());
    }
}
