use serde::{Deserialize, Serialize};

/// One year of the projected cash-flow schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEntry {
    pub year: u32,
    pub cash_flow: f64,
    pub discounted: f64,
    pub cumulative: f64,
}

/// Cash flows by year: `-investment` at year 0, then a constant annual flow.
pub fn project_flows(investment: f64, annual_cash_flow: f64, period: u32) -> Vec<f64> {
    std::iter::once(-investment)
        .chain(std::iter::repeat(annual_cash_flow).take(period as usize))
        .collect()
}

/// Year-by-year schedule with discounted and cumulative (undiscounted) values.
pub fn build_schedule(flows: &[f64], rate: f64) -> Vec<CashFlowEntry> {
    let base = 1.0 + rate;
    let mut cumulative = 0.0;

    flows
        .iter()
        .enumerate()
        .map(|(year, cash_flow)| {
            cumulative += cash_flow;
            CashFlowEntry {
                year: year as u32,
                cash_flow: *cash_flow,
                discounted: cash_flow / base.powi(year as i32),
                cumulative,
            }
        })
        .collect()
}
