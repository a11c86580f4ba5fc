//! Rating-based category scores.
//!
//! A category score is the share of the maximum rating weight earned by the
//! fields that were actually rated:
//!
//! ```text
//! score = Σ weight(rated) / (rated × 4) × 100
//! ```
//!
//! Unrated fields are left out of both sides, so a half-filled screen is
//! judged on what was filled. Scores are rounded to the nearest integer,
//! halves away from zero (`[excellent, good]` → 87.5 → 88).

pub mod legal;
pub mod technical;

pub use legal::{evaluate_legal, LegalEvaluation, LEGAL_FIELDS};
pub use technical::{
    evaluate_technical, TechnicalCategoryScore, TechnicalEvaluation, TECHNICAL_CATEGORIES,
};

use crate::config::ViabilityThresholds;
use crate::core::{FeasibilityLevel, Rating, Score, Section};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: Score,
    pub rated_fields: usize,
    pub total_fields: usize,
}

impl CategoryScore {
    pub fn evaluated(&self) -> bool {
        self.rated_fields > 0
    }
}

/// Score the ratings of `fields` found in `ratings`.
pub fn compute_category_score(ratings: &Section, fields: &[&str]) -> CategoryScore {
    let rated: Vec<Rating> = fields
        .iter()
        .map(|field| ratings.rating(field))
        .filter(|rating| rating.is_set())
        .collect();

    let earned: u32 = rated.iter().map(|rating| rating.weight()).sum();
    let possible = rated.len() as u32 * Rating::MAX_WEIGHT;

    CategoryScore {
        score: Score::ratio(earned as f64, possible as f64).rounded(),
        rated_fields: rated.len(),
        total_fields: fields.len(),
    }
}

/// Viability and level shared by every rated category.
pub fn judge(
    score: Score,
    evaluated: bool,
    thresholds: &ViabilityThresholds,
) -> (bool, FeasibilityLevel) {
    let viable = evaluated && score.value() >= thresholds.viable_score;
    let level = FeasibilityLevel::classify(score, thresholds.high_level, thresholds.medium_level);
    (viable, level)
}
