use crate::config::FeasibilityConfig;
use crate::core::{Area, CalculationResult, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of problem found in a calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    FinancialNegativeNpv,
    FinancialLowIrr,
    FinancialLongPayback,
    TechnicalNotViable,
    TechnicalLowScore,
    MarketNotViable,
    MarketLowScore,
    LegalNotViable,
    LegalLowScore,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FinancialNegativeNpv => "FINANCIAL_NEGATIVE_NPV",
            Self::FinancialLowIrr => "FINANCIAL_LOW_IRR",
            Self::FinancialLongPayback => "FINANCIAL_LONG_PAYBACK",
            Self::TechnicalNotViable => "TECHNICAL_NOT_VIABLE",
            Self::TechnicalLowScore => "TECHNICAL_LOW_SCORE",
            Self::MarketNotViable => "MARKET_NOT_VIABLE",
            Self::MarketLowScore => "MARKET_LOW_SCORE",
            Self::LegalNotViable => "LEGAL_NOT_VIABLE",
            Self::LegalLowScore => "LEGAL_LOW_SCORE",
        }
    }

    pub fn area(self) -> Area {
        match self {
            Self::FinancialNegativeNpv | Self::FinancialLowIrr | Self::FinancialLongPayback => {
                Area::Financial
            }
            Self::TechnicalNotViable | Self::TechnicalLowScore => Area::Technical,
            Self::MarketNotViable | Self::MarketLowScore => Area::Market,
            Self::LegalNotViable | Self::LegalLowScore => Area::Legal,
        }
    }

    fn not_viable(area: Area) -> Option<Self> {
        match area {
            Area::Technical => Some(Self::TechnicalNotViable),
            Area::Market => Some(Self::MarketNotViable),
            Area::Legal => Some(Self::LegalNotViable),
            Area::Financial => None,
        }
    }

    fn low_score(area: Area) -> Option<Self> {
        match area {
            Area::Technical => Some(Self::TechnicalLowScore),
            Area::Market => Some(Self::MarketLowScore),
            Area::Legal => Some(Self::LegalLowScore),
            Area::Financial => None,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub kind: IssueKind,
    pub area: Area,
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn new(kind: IssueKind, severity: Severity, message: String) -> Self {
        Self {
            kind,
            area: kind.area(),
            severity,
            message,
        }
    }
}

/// Find every issue in `calculations`.
///
/// A technical, market or legal category that was never filled in is not
/// viable and raises its `*_NOT_VIABLE` issue unless
/// `optimization.skip_unevaluated_areas` is set.
pub fn detect_issues(calculations: &CalculationResult, config: &FeasibilityConfig) -> Vec<Issue> {
    let mut issues = Vec::new();
    let financial = &calculations.financial;

    if financial.npv < 0.0 {
        issues.push(Issue::new(
            IssueKind::FinancialNegativeNpv,
            Severity::High,
            format!("NPV is negative ({:.2})", financial.npv),
        ));
    }
    if financial.irr < config.financial.min_irr {
        issues.push(Issue::new(
            IssueKind::FinancialLowIrr,
            Severity::Medium,
            format!(
                "IRR {:.2}% is below {:.2}%",
                financial.irr * 100.0,
                config.financial.min_irr * 100.0
            ),
        ));
    }
    if financial.payback_exceeds(config.financial.max_payback_years) {
        let message = match financial.payback {
            Some(years) => format!("Payback takes {years:.1} years"),
            None => "The investment is never recovered".to_string(),
        };
        issues.push(Issue::new(
            IssueKind::FinancialLongPayback,
            Severity::Medium,
            message,
        ));
    }

    for area in [Area::Technical, Area::Market, Area::Legal] {
        let (score, viable, evaluated) = calculations.area_score(area);
        if !evaluated && config.optimization.skip_unevaluated_areas {
            continue;
        }
        let viable_score = config.viability.viable_score;
        let issue = if !viable {
            let message = if evaluated {
                format!("{area} evaluation is not viable ({score})")
            } else {
                format!("{area} evaluation has not been filled in")
            };
            IssueKind::not_viable(area).map(|kind| Issue::new(kind, Severity::High, message))
        } else if score.value() < viable_score {
            let severity = if score.value() >= config.viability.critical_score {
                Severity::Medium
            } else {
                Severity::High
            };
            let message = format!("{area} score {score} is below {viable_score:.0}");
            IssueKind::low_score(area).map(|kind| Issue::new(kind, severity, message))
        } else {
            None
        };
        issues.extend(issue);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_feasibility;
    use crate::core::FormData;
    use serde_json::json;

    fn financial_only() -> CalculationResult {
        let form: FormData = serde_json::from_value(json!({
            "financial": {
                "investment": 100000,
                "projectedRevenue": 150000,
                "operationalCosts": 80000
            }
        }))
        .unwrap();
        calculate_feasibility(&form, &FeasibilityConfig::default())
    }

    #[test]
    fn empty_areas_are_not_viable() {
        let issues = detect_issues(&financial_only(), &FeasibilityConfig::default());
        let kinds: Vec<IssueKind> = issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::TechnicalNotViable,
                IssueKind::MarketNotViable,
                IssueKind::LegalNotViable
            ]
        );
        assert!(issues.iter().all(|i| i.severity == Severity::High));
    }

    #[test]
    fn empty_areas_can_be_skipped() {
        let mut config = FeasibilityConfig::default();
        config.optimization.skip_unevaluated_areas = true;
        assert!(detect_issues(&financial_only(), &config).is_empty());
    }

    #[test]
    fn kinds_use_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&IssueKind::FinancialNegativeNpv).unwrap(),
            "\"FINANCIAL_NEGATIVE_NPV\""
        );
        for kind in [IssueKind::MarketLowScore, IssueKind::LegalNotViable] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json.trim_matches('"'), kind.as_str());
        }
    }

    #[test]
    fn every_kind_maps_to_its_area() {
        assert_eq!(IssueKind::FinancialLongPayback.area(), Area::Financial);
        assert_eq!(IssueKind::TechnicalLowScore.area(), Area::Technical);
        assert_eq!(IssueKind::MarketNotViable.area(), Area::Market);
        assert_eq!(IssueKind::LegalLowScore.area(), Area::Legal);
    }
}
