//! Financial metrics over a constant annual cash flow.
//!
//! `npv` discounts `annualCashFlow` over years `1..=period` at
//! `discountRate` percent and subtracts the year-0 investment. `irr` is a
//! fraction (0.08 = 8%). `payback` is `None` when the investment is never
//! recovered, which is how a non-positive cash flow is reported; infinity
//! never leaves this module.

pub mod cash_flow;
pub mod irr;

pub use cash_flow::{build_schedule, project_flows, CashFlowEntry};
pub use irr::{npv_of, solve_irr};

use crate::config::{FinancialThresholds, ViabilityThresholds};
use crate::core::{FeasibilityLevel, Score};
use crate::normalize::FinancialInputs;
use serde::{Deserialize, Serialize};

const NPV_POINTS: f64 = 40.0;
const IRR_POINTS: f64 = 30.0;
const PAYBACK_POINTS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub npv: f64,
    pub irr: f64,
    /// Years to recover the investment; `None` when it is never recovered
    pub payback: Option<f64>,
    pub annual_cash_flow: f64,
    pub investment: f64,
    pub projected_revenue: f64,
    pub operational_costs: f64,
    /// Percent
    pub discount_rate: f64,
    pub period: u32,
    pub profitability_index: Option<f64>,
    pub cash_flows: Vec<CashFlowEntry>,
    pub score: Score,
    pub viable: bool,
    pub level: FeasibilityLevel,
}

impl FinancialMetrics {
    pub fn payback_exceeds(&self, years: f64) -> bool {
        self.payback.is_none_or(|p| p > years)
    }
}

/// NPV of a constant annual cash flow. `rate` is a fraction.
pub fn npv(investment: f64, annual_cash_flow: f64, rate: f64, period: u32) -> f64 {
    npv_of(&project_flows(investment, annual_cash_flow, period), rate)
}

/// IRR of a constant annual cash flow, `0` when there is no root.
pub fn irr(investment: f64, annual_cash_flow: f64, period: u32) -> f64 {
    if investment <= 0.0 || annual_cash_flow <= 0.0 || period == 0 {
        return 0.0;
    }
    solve_irr(&project_flows(investment, annual_cash_flow, period)).unwrap_or(0.0)
}

pub fn payback(investment: f64, annual_cash_flow: f64) -> Option<f64> {
    if investment <= 0.0 {
        Some(0.0)
    } else if annual_cash_flow > 0.0 {
        // A tiny cash flow can overflow the ratio
        Some(investment / annual_cash_flow).filter(|years| years.is_finite())
    } else {
        None
    }
}

// Pure function: Points earned by each signal
fn financial_score(
    npv: f64,
    irr: f64,
    payback: Option<f64>,
    annual_cash_flow: f64,
    period: u32,
    thresholds: &FinancialThresholds,
) -> Score {
    let npv_points = if npv > 0.0 { NPV_POINTS } else { 0.0 };

    let irr_target = thresholds.min_irr * 2.0;
    let irr_points = if irr_target > 0.0 {
        IRR_POINTS * (irr / irr_target).clamp(0.0, 1.0)
    } else if irr > 0.0 {
        IRR_POINTS
    } else {
        0.0
    };

    let payback_points = match payback {
        Some(years) if annual_cash_flow > 0.0 => {
            if years <= thresholds.quick_payback_years {
                PAYBACK_POINTS
            } else if years <= thresholds.max_payback_years {
                PAYBACK_POINTS * 2.0 / 3.0
            } else if years <= period as f64 {
                PAYBACK_POINTS / 3.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    Score::new(npv_points + irr_points + payback_points).rounded()
}

pub fn compute_financial_metrics(
    inputs: &FinancialInputs,
    thresholds: &FinancialThresholds,
    viability: &ViabilityThresholds,
) -> FinancialMetrics {
    let annual_cash_flow = inputs.projected_revenue - inputs.operational_costs;
    let rate = inputs.discount_rate / 100.0;
    let flows = project_flows(inputs.investment, annual_cash_flow, inputs.period);

    let npv = finite_or_zero(npv_of(&flows, rate));
    let irr = irr(inputs.investment, annual_cash_flow, inputs.period);
    let payback = payback(inputs.investment, annual_cash_flow);
    let profitability_index = (inputs.investment > 0.0)
        .then(|| finite_or_zero((npv + inputs.investment) / inputs.investment));

    let score = financial_score(
        npv,
        irr,
        payback,
        annual_cash_flow,
        inputs.period,
        thresholds,
    );

    FinancialMetrics {
        npv,
        irr,
        payback,
        annual_cash_flow,
        investment: inputs.investment,
        projected_revenue: inputs.projected_revenue,
        operational_costs: inputs.operational_costs,
        discount_rate: inputs.discount_rate,
        period: inputs.period,
        profitability_index,
        cash_flows: build_schedule(&flows, rate),
        score,
        viable: npv > 0.0 && irr > thresholds.min_irr,
        level: FeasibilityLevel::classify(score, viability.high_level, viability.medium_level),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(investment: f64, revenue: f64, costs: f64) -> FinancialInputs {
        FinancialInputs {
            investment,
            projected_revenue: revenue,
            operational_costs: costs,
            discount_rate: 10.0,
            period: 5,
        }
    }

    fn metrics(inputs: &FinancialInputs) -> FinancialMetrics {
        compute_financial_metrics(
            inputs,
            &FinancialThresholds::default(),
            &ViabilityThresholds::default(),
        )
    }

    #[test]
    fn profitable_project_is_viable() {
        let result = metrics(&inputs(100000.0, 150000.0, 80000.0));

        assert_eq!(result.annual_cash_flow, 70000.0);
        assert!(result.npv > 0.0);
        assert!(result.irr > 0.08);
        let payback = result.payback.unwrap();
        assert!((payback - 1.4286).abs() < 1e-3);
        assert!(result.viable);
        assert_eq!(result.cash_flows.len(), 6);
    }

    #[test]
    fn payback_of_four_years() {
        assert_eq!(payback(100000.0, 25000.0), Some(4.0));
    }

    #[test]
    fn overflowing_payback_is_not_recoverable() {
        assert_eq!(payback(1e300, 1e-10), None);
        assert_eq!(payback(f64::MAX, 0.5), None);

        let result = metrics(&inputs(1e300, 1e-10, 0.0));
        assert_eq!(result.payback, None);
        assert!(result.payback_exceeds(5.0));
    }

    #[test]
    fn zero_investment_pays_back_immediately() {
        let result = metrics(&inputs(0.0, 1000.0, 500.0));
        assert_eq!(result.payback, Some(0.0));
        assert_eq!(result.irr, 0.0);
        assert_eq!(result.profitability_index, None);
        assert!(result.npv > 0.0);
        assert!(!result.viable);
    }

    #[test]
    fn negative_cash_flow_is_not_recoverable() {
        let result = metrics(&inputs(1000.0, 100.0, 400.0));
        assert_eq!(result.payback, None);
        assert_eq!(result.irr, 0.0);
        assert!(result.npv < -1000.0);
        assert!(result.payback_exceeds(5.0));
    }

    #[test]
    fn all_zero_inputs_stay_finite() {
        let result = metrics(&inputs(0.0, 0.0, 0.0));
        assert_eq!(result.npv, 0.0);
        assert_eq!(result.irr, 0.0);
        assert_eq!(result.payback, Some(0.0));
        assert_eq!(result.score, Score::ZERO);
    }

    #[test]
    fn npv_matches_annuity_formula() {
        let (investment, flow, rate, period): (f64, f64, f64, u32) = (50000.0, 12000.0, 0.12, 7);
        let expected =
            -investment + flow * (1.0 - (1.0 + rate).powi(-(period as i32))) / rate;
        assert!((npv(investment, flow, rate, period) - expected).abs() < 1e-6);
    }

    #[test]
    fn weak_project_scores_low() {
        let result = metrics(&inputs(500000.0, 100000.0, 90000.0));
        assert_eq!(result.annual_cash_flow, 10000.0);
        assert!(result.npv < 0.0);
        assert!(!result.viable);
        assert_eq!(result.level, FeasibilityLevel::Low);
    }
}
