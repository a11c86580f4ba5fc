//! Flatten the financial section into the inputs the calculator needs.
//!
//! Scalars typed directly on the summary screen take precedence; otherwise
//! totals are rebuilt from the category line items.

use crate::config::{CategoryGroup, CategoryKeys, FinancialThresholds};
use crate::core::{coerce_f64, Section};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const INVESTMENT_KEYS: [&str; 2] = ["investment", "initialInvestment"];
pub const REVENUE_KEYS: [&str; 2] = ["projectedRevenue", "annualRevenue"];
pub const OPERATIONAL_COST_KEYS: [&str; 2] = ["operationalCosts", "annualCosts"];
pub const DISCOUNT_RATE_KEYS: [&str; 1] = ["discountRate"];
pub const PERIOD_KEYS: [&str; 2] = ["period", "analysisYears"];

/// Longest analysis horizon accepted, in years.
pub const MAX_PERIOD: u32 = 100;

/// Sum of the resolved amounts of one category.
///
/// A list sums its rows; a numeric scalar counts as itself; anything else
/// is `0`.
pub fn category_total(section: &Section, key: &str) -> f64 {
    match section.get(key) {
        Some(Value::Array(_)) => section
            .items(key)
            .iter()
            .map(|item| item.resolved_amount())
            .sum(),
        Some(other) => coerce_f64(other).unwrap_or(0.0),
        None => 0.0,
    }
}

/// Sum of the category totals of every key in `keys`.
pub fn group_total(section: &Section, keys: &[String]) -> f64 {
    keys.iter().map(|key| category_total(section, key)).sum()
}

/// Per-group totals of the financial section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub financing: f64,
    pub income: f64,
    pub costs: f64,
    pub expenses: f64,
}

impl CategoryTotals {
    pub fn from_section(section: &Section, keys: &CategoryKeys) -> Self {
        Self {
            financing: group_total(section, keys.keys(CategoryGroup::Financing)),
            income: group_total(section, keys.keys(CategoryGroup::Income)),
            costs: group_total(section, keys.keys(CategoryGroup::Costs)),
            expenses: group_total(section, keys.keys(CategoryGroup::Expenses)),
        }
    }
}

/// Flat inputs for the financial metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    pub investment: f64,
    pub projected_revenue: f64,
    pub operational_costs: f64,
    /// Percent, e.g. `10.0` for 10%
    pub discount_rate: f64,
    pub period: u32,
}

impl Default for FinancialInputs {
    fn default() -> Self {
        Self {
            investment: 0.0,
            projected_revenue: 0.0,
            operational_costs: 0.0,
            discount_rate: 10.0,
            period: 5,
        }
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Resolve the financial inputs from a financial section.
pub fn normalize_financial(
    section: &Section,
    keys: &CategoryKeys,
    defaults: &FinancialThresholds,
) -> FinancialInputs {
    let totals = CategoryTotals::from_section(section, keys);

    let investment = positive(section.first_scalar(&INVESTMENT_KEYS))
        .unwrap_or(totals.financing)
        .max(0.0);
    let projected_revenue =
        positive(section.first_scalar(&REVENUE_KEYS)).unwrap_or(totals.income);
    let operational_costs = positive(section.first_scalar(&OPERATIONAL_COST_KEYS))
        .unwrap_or(totals.costs + totals.expenses);

    let discount_rate = section
        .first_scalar(&DISCOUNT_RATE_KEYS)
        .filter(|r| *r >= 0.0)
        .unwrap_or(defaults.default_discount_rate);
    let period = positive(section.first_scalar(&PERIOD_KEYS))
        .map(|p| p.round().clamp(1.0, MAX_PERIOD as f64) as u32)
        .unwrap_or(defaults.default_period)
        .min(MAX_PERIOD);

    FinancialInputs {
        investment,
        projected_revenue,
        operational_costs,
        discount_rate,
        period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(value: Value) -> Section {
        Section::from_value(value)
    }

    #[test]
    fn totals_sum_resolved_amounts() {
        let financial = section(json!({
            "rawMaterials": [
                { "material": "Flour", "annualCost": 1200 },
                { "material": "Sugar", "unitCost": "300" },
                { "material": "Salt" }
            ],
            "capital": 5000,
            "bankCredit": "not a list"
        }));

        assert_eq!(category_total(&financial, "rawMaterials"), 1500.0);
        assert_eq!(category_total(&financial, "capital"), 5000.0);
        assert_eq!(category_total(&financial, "bankCredit"), 0.0);
        assert_eq!(category_total(&financial, "grants"), 0.0);
    }

    #[test]
    fn scalars_win_over_category_totals() {
        let financial = section(json!({
            "investment": 100000,
            "capital": [{ "amount": 1 }],
            "projectedRevenue": 150000,
            "salesServices": [{ "amount": 5 }],
            "operationalCosts": 80000,
            "discountRate": 10,
            "period": 5
        }));

        let inputs = normalize_financial(
            &financial,
            &CategoryKeys::default(),
            &FinancialThresholds::default(),
        );

        assert_eq!(inputs.investment, 100000.0);
        assert_eq!(inputs.projected_revenue, 150000.0);
        assert_eq!(inputs.operational_costs, 80000.0);
        assert_eq!(inputs.discount_rate, 10.0);
        assert_eq!(inputs.period, 5);
    }

    #[test]
    fn category_items_fill_missing_scalars() {
        let financial = section(json!({
            "capital": [{ "amount": 20000 }],
            "bankCredit": [{ "amount": 30000 }],
            "salesServices": [{ "description": "Catering", "annualAmount": 60000 }],
            "rawMaterials": [{ "annualCost": 15000 }],
            "salaries": [{ "name": "Baker", "annualAmount": 12000 }],
            "rent": 6000
        }));

        let inputs = normalize_financial(
            &financial,
            &CategoryKeys::default(),
            &FinancialThresholds::default(),
        );

        assert_eq!(inputs.investment, 50000.0);
        assert_eq!(inputs.projected_revenue, 60000.0);
        assert_eq!(inputs.operational_costs, 33000.0);
    }

    #[test]
    fn missing_rate_and_period_use_defaults() {
        let defaults = FinancialThresholds {
            default_discount_rate: 12.0,
            default_period: 7,
            ..Default::default()
        };
        let inputs = normalize_financial(&Section::new(), &CategoryKeys::default(), &defaults);

        assert_eq!(inputs.discount_rate, 12.0);
        assert_eq!(inputs.period, 7);
        assert_eq!(inputs.investment, 0.0);
    }

    #[test]
    fn period_alias_and_rounding() {
        let financial = section(json!({ "analysisYears": "3.6", "discountRate": 0 }));
        let inputs = normalize_financial(
            &financial,
            &CategoryKeys::default(),
            &FinancialThresholds::default(),
        );
        assert_eq!(inputs.period, 4);
        assert_eq!(inputs.discount_rate, 0.0);
    }

    #[test]
    fn period_is_capped() {
        let financial = section(json!({ "period": 1e9 }));
        let inputs = normalize_financial(
            &financial,
            &CategoryKeys::default(),
            &FinancialThresholds::default(),
        );
        assert_eq!(inputs.period, MAX_PERIOD);
    }
}
