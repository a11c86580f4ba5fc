use super::{compute_category_score, judge};
use crate::config::{TechnicalWeights, ViabilityThresholds};
use crate::core::{FeasibilityLevel, Score, Section};
use serde::{Deserialize, Serialize};

/// Technical sub-categories and the rated fields of each.
pub const TECHNICAL_CATEGORIES: [(&str, &[&str]); 6] = [
    (
        "localization",
        &[
            "proximityToMarket",
            "proximityToSuppliers",
            "accessRoutes",
            "basicServices",
            "landCost",
        ],
    ),
    (
        "capacity",
        &[
            "installedCapacity",
            "demandCoverage",
            "scalability",
            "capacityUtilization",
        ],
    ),
    (
        "engineering",
        &[
            "processDefinition",
            "technologyAvailability",
            "equipmentSelection",
            "qualityControl",
            "maintenancePlan",
        ],
    ),
    (
        "resources",
        &[
            "rawMaterialAvailability",
            "laborAvailability",
            "supplierReliability",
            "energySupply",
        ],
    ),
    (
        "infrastructure",
        &[
            "facilities",
            "equipmentCondition",
            "logistics",
            "informationSystems",
        ],
    ),
    (
        "timeline",
        &["implementationSchedule", "milestones", "contingencyPlanning"],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalCategoryScore {
    pub key: String,
    pub weight: f64,
    pub score: Score,
    pub rated_fields: usize,
    pub total_fields: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalEvaluation {
    pub score: Score,
    pub viable: bool,
    pub level: FeasibilityLevel,
    pub evaluated: bool,
    pub categories: Vec<TechnicalCategoryScore>,
}

/// Ratings of one sub-category: its nested object when present, otherwise
/// the flat technical section.
fn category_ratings(technical: &Section, key: &str) -> Section {
    technical
        .subsection(key)
        .unwrap_or_else(|| technical.clone())
}

pub fn evaluate_technical(
    technical: &Section,
    weights: &TechnicalWeights,
    viability: &ViabilityThresholds,
) -> TechnicalEvaluation {
    let categories: Vec<TechnicalCategoryScore> = TECHNICAL_CATEGORIES
        .iter()
        .map(|(key, fields)| {
            let result = compute_category_score(&category_ratings(technical, key), fields);
            TechnicalCategoryScore {
                key: key.to_string(),
                weight: weights.weight_for(key),
                score: result.score,
                rated_fields: result.rated_fields,
                total_fields: result.total_fields,
            }
        })
        .collect();

    let evaluated = categories.iter().any(|c| c.rated_fields > 0);
    // Unrated sub-categories contribute nothing to the weighted sum.
    let weighted: f64 = categories.iter().map(|c| c.score.value() * c.weight).sum();
    let score = Score::new(weighted).rounded();
    let (viable, level) = judge(score, evaluated, viability);

    TechnicalEvaluation {
        score,
        viable,
        level,
        evaluated,
        categories,
    }
}
