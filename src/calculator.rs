//! Run every engine over one `FormData` and aggregate the results.

use crate::config::{FeasibilityConfig, OverallWeights, ViabilityThresholds};
use crate::core::{
    Area, CalculationResult, FeasibilityLevel, FormData, OverallAssessment, Score, Severity,
    Suggestion,
};
use crate::financial::{compute_financial_metrics, FinancialMetrics};
use crate::market::evaluate_market;
use crate::normalize::normalize_financial;
use crate::scoring::{evaluate_legal, evaluate_technical};
use tracing::{debug, info_span};

/// Compute the full feasibility result. Pure: the same form and
/// configuration always give the same result.
pub fn calculate_feasibility(form: &FormData, config: &FeasibilityConfig) -> CalculationResult {
    let span = info_span!("calculate_feasibility");
    let _guard = span.enter();

    let financial = {
        let _span = info_span!("financial").entered();
        let inputs = normalize_financial(&form.financial, &config.categories, &config.financial);
        debug!(
            investment = inputs.investment,
            revenue = inputs.projected_revenue,
            costs = inputs.operational_costs,
            "Normalized financial inputs"
        );
        compute_financial_metrics(&inputs, &config.financial, &config.viability)
    };

    let technical = {
        let _span = info_span!("technical").entered();
        evaluate_technical(&form.technical, &config.technical_weights, &config.viability)
    };
    let market = {
        let _span = info_span!("market").entered();
        evaluate_market(&form.market, &config.market, &config.viability)
    };
    let legal = evaluate_legal(&form.legal, &config.viability);

    let mut result = CalculationResult {
        financial,
        technical,
        market,
        legal,
        overall: OverallAssessment {
            score: Score::ZERO,
            viable: false,
            level: FeasibilityLevel::Low,
            color: FeasibilityLevel::Low.color(),
        },
        suggestions: Vec::new(),
    };
    result.overall = overall_assessment(&result, &config.overall_weights, &config.viability);
    result.suggestions = build_suggestions(&result, config);

    debug!(
        score = result.overall.score.value(),
        viable = result.overall.viable,
        suggestions = result.suggestions.len(),
        "Feasibility calculated"
    );
    result
}

fn area_weight(weights: &OverallWeights, area: Area) -> f64 {
    match area {
        Area::Financial => weights.financial,
        Area::Technical => weights.technical,
        Area::Market => weights.market,
        Area::Legal => weights.legal,
    }
}

const AREAS: [Area; 4] = [Area::Financial, Area::Technical, Area::Market, Area::Legal];

/// Weighted mean over the evaluated areas with the weights renormalized
/// over that set.
pub fn overall_assessment(
    result: &CalculationResult,
    weights: &OverallWeights,
    viability: &ViabilityThresholds,
) -> OverallAssessment {
    let evaluated: Vec<(Score, bool, f64)> = AREAS
        .iter()
        .filter_map(|area| {
            let (score, viable, evaluated) = result.area_score(*area);
            evaluated.then_some((score, viable, area_weight(weights, *area)))
        })
        .collect();

    let weight_sum: f64 = evaluated.iter().map(|(_, _, w)| w).sum();
    let score = if weight_sum > 0.0 {
        let weighted: f64 = evaluated.iter().map(|(s, _, w)| s.value() * w).sum();
        Score::new(weighted / weight_sum).rounded()
    } else {
        Score::ZERO
    };

    let viable = evaluated.iter().all(|(_, viable, _)| *viable);
    let level = FeasibilityLevel::classify(score, viability.high_level, viability.medium_level);

    OverallAssessment {
        score,
        viable,
        level,
        color: level.color(),
    }
}

fn financial_suggestions(
    financial: &FinancialMetrics,
    config: &FeasibilityConfig,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if financial.npv < 0.0 {
        suggestions.push(Suggestion::new(
            Area::Financial,
            Severity::High,
            format!(
                "Negative NPV ({:.2}): reduce costs or the initial investment, or raise projected revenue",
                financial.npv
            ),
        ));
    }
    if financial.irr < config.financial.min_irr {
        suggestions.push(Suggestion::new(
            Area::Financial,
            Severity::Medium,
            format!(
                "IRR {:.2}% is below the minimum {:.2}%",
                financial.irr * 100.0,
                config.financial.min_irr * 100.0
            ),
        ));
    }
    match financial.payback {
        None => suggestions.push(Suggestion::new(
            Area::Financial,
            Severity::High,
            "The investment is never recovered with the current cash flow",
        )),
        Some(years) if years > config.financial.max_payback_years => {
            suggestions.push(Suggestion::new(
                Area::Financial,
                Severity::Medium,
                format!(
                    "Payback of {:.1} years exceeds the {:.0}-year target",
                    years, config.financial.max_payback_years
                ),
            ))
        }
        Some(_) => {}
    }

    suggestions
}

fn category_severity(score: Score, viability: &ViabilityThresholds) -> Severity {
    if score.value() < viability.critical_score {
        Severity::High
    } else {
        Severity::Medium
    }
}

pub fn build_suggestions(
    result: &CalculationResult,
    config: &FeasibilityConfig,
) -> Vec<Suggestion> {
    let mut suggestions = financial_suggestions(&result.financial, config);

    for area in [Area::Technical, Area::Market, Area::Legal] {
        let (score, viable, evaluated) = result.area_score(area);
        if evaluated && !viable {
            suggestions.push(Suggestion::new(
                area,
                category_severity(score, &config.viability),
                format!(
                    "{} score {} is below the viability threshold of {:.0}",
                    area, score, config.viability.viable_score
                ),
            ));
        }
    }

    suggestions.extend(
        result
            .market
            .detailed_analysis
            .insights
            .recommendations
            .iter()
            .map(|text| Suggestion::new(Area::Market, Severity::Medium, text.clone())),
    );

    suggestions
}
