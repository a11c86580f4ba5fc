use super::{compute_category_score, judge};
use crate::config::ViabilityThresholds;
use crate::core::{FeasibilityLevel, Score, Section};
use serde::{Deserialize, Serialize};

/// Rated fields of the legal section.
pub const LEGAL_FIELDS: [&str; 8] = [
    "businessConstitution",
    "operatingPermits",
    "sanitaryLicenses",
    "taxRegistration",
    "laborCompliance",
    "environmentalPermits",
    "intellectualProperty",
    "contracts",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalEvaluation {
    pub score: Score,
    pub viable: bool,
    pub level: FeasibilityLevel,
    pub evaluated: bool,
    pub rated_fields: usize,
    pub total_fields: usize,
}

pub fn evaluate_legal(legal: &Section, viability: &ViabilityThresholds) -> LegalEvaluation {
    let result = compute_category_score(legal, &LEGAL_FIELDS);
    let (viable, level) = judge(result.score, result.evaluated(), viability);

    LegalEvaluation {
        score: result.score,
        viable,
        level,
        evaluated: result.evaluated(),
        rated_fields: result.rated_fields,
        total_fields: result.total_fields,
    }
}
