mod common;

use common::{complete_form, losing_form, profitable_form};
use factibilidad::core::{Area, FeasibilityLevel, LevelColor};
use factibilidad::{calculate_feasibility, optimize_project, FeasibilityConfig, IssueKind};
use pretty_assertions::assert_eq;

#[test]
fn profitable_project_is_viable() {
    let result = calculate_feasibility(&profitable_form(), &FeasibilityConfig::default());
    let financial = &result.financial;

    assert_eq!(financial.annual_cash_flow, 70000.0);
    assert!(financial.npv > 0.0);
    let payback = financial.payback.expect("investment is recovered");
    assert!((payback - 1.43).abs() < 0.01, "payback was {payback}");
    assert!(financial.irr > 0.08);
    assert!(financial.viable);

    assert!(result.overall.viable);
    assert_eq!(result.overall.score.value(), 100.0);
    assert_eq!(result.overall.level, FeasibilityLevel::High);
    assert_eq!(result.overall.color, LevelColor::Green);
    assert!(result.suggestions.is_empty());
}

#[test]
fn losing_project_gets_a_financial_recommendation() {
    let config = FeasibilityConfig::default();
    let form = losing_form();
    let result = calculate_feasibility(&form, &config);

    assert_eq!(result.financial.annual_cash_flow, 10000.0);
    assert!(result.financial.npv < 0.0);
    assert!(!result.overall.viable);
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.area == Area::Financial));

    let optimization = optimize_project(&form, &result, &config);
    assert!(optimization
        .issues
        .iter()
        .any(|issue| issue.kind == IssueKind::FinancialNegativeNpv));
    let recommendation = optimization
        .recommendations
        .iter()
        .find(|r| r.issue == IssueKind::FinancialNegativeNpv)
        .expect("negative NPV is addressed");
    assert_eq!(recommendation.area.label(), "Financiera");
    assert!(!recommendation.adjustments.is_empty());
}

#[test]
fn complete_form_evaluates_every_area() {
    let result = calculate_feasibility(&complete_form(), &FeasibilityConfig::default());

    assert_eq!(result.financial.investment, 60000.0);
    assert_eq!(result.financial.projected_revenue, 90000.0);
    assert_eq!(result.financial.operational_costs, 48000.0);
    assert!(result.technical.evaluated);
    assert!(result.market.evaluated);
    assert!(result.legal.evaluated);

    // good 3 + regular 2 + poor 1 + excellent 4 over 4 rated fields
    assert_eq!(result.legal.score.value(), 63.0);
    assert!(!result.legal.viable);
    assert!(!result.overall.viable);
    assert!(result.suggestions.iter().any(|s| s.area == Area::Legal));
}

#[test]
fn results_are_finite() {
    for form in [profitable_form(), losing_form(), complete_form()] {
        let result = calculate_feasibility(&form, &FeasibilityConfig::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_finite(&json);
    }
}

fn assert_finite(value: &serde_json::Value) {
    match value {
        serde_json::Value::Number(n) => {
            assert!(n.as_f64().is_some_and(f64::is_finite), "non-finite {n}")
        }
        serde_json::Value::Array(items) => items.iter().for_each(assert_finite),
        serde_json::Value::Object(map) => map.values().for_each(assert_finite),
        _ => {}
    }
}
