use super::score::{Area, FeasibilityLevel, LevelColor, Score, Severity};
use crate::financial::FinancialMetrics;
use crate::market::MarketEvaluation;
use crate::scoring::{LegalEvaluation, TechnicalEvaluation};
use serde::{Deserialize, Serialize};

/// Everything derived from one `FormData`. Rebuilt from scratch on every
/// calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub financial: FinancialMetrics,
    pub technical: TechnicalEvaluation,
    pub market: MarketEvaluation,
    pub legal: LegalEvaluation,
    pub overall: OverallAssessment,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAssessment {
    pub score: Score,
    pub viable: bool,
    pub level: FeasibilityLevel,
    pub color: LevelColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub area: Area,
    pub severity: Severity,
    pub message: String,
}

impl Suggestion {
    pub fn new(area: Area, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            area,
            severity,
            message: message.into(),
        }
    }
}

impl CalculationResult {
    /// Score and evaluation flag for one area.
    pub fn area_score(&self, area: Area) -> (Score, bool, bool) {
        match area {
            Area::Financial => (self.financial.score, self.financial.viable, true),
            Area::Technical => (
                self.technical.score,
                self.technical.viable,
                self.technical.evaluated,
            ),
            Area::Market => (self.market.score, self.market.viable, self.market.evaluated),
            Area::Legal => (self.legal.score, self.legal.viable, self.legal.evaluated),
        }
    }

    pub fn area_level(&self, area: Area) -> FeasibilityLevel {
        match area {
            Area::Financial => self.financial.level,
            Area::Technical => self.technical.level,
            Area::Market => self.market.level,
            Area::Legal => self.legal.level,
        }
    }
}
