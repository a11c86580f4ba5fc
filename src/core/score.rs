//! Score scale, feasibility levels and the labels shown next to them.
//!
//! ```rust
//! use factibilidad::core::{FeasibilityLevel, Score};
//!
//! let score = Score::new(150.0);
//! assert_eq!(score.value(), 100.0);
//! assert_eq!(FeasibilityLevel::classify(score, 80.0, 60.0), FeasibilityLevel::High);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score on the 0-100 scale.
///
/// Values are clamped to `[0.0, 100.0]`; NaN becomes `0.0` so it never
/// reaches a report.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(0.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 100.0))
        }
    }

    /// Percentage of `earned` over `possible`, `0` when nothing is possible.
    pub fn ratio(earned: f64, possible: f64) -> Self {
        if possible > 0.0 {
            Self::new(earned / possible * 100.0)
        } else {
            Self::ZERO
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Round to the nearest integer, halves away from zero.
    pub fn rounded(self) -> Self {
        Self(self.0.round())
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityLevel {
    Low,
    Medium,
    High,
}

impl FeasibilityLevel {
    pub fn classify(score: Score, high: f64, medium: f64) -> Self {
        if score.value() >= high {
            Self::High
        } else if score.value() >= medium {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Label used in the Spanish reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }

    pub fn color(self) -> LevelColor {
        match self {
            Self::High => LevelColor::Green,
            Self::Medium => LevelColor::Yellow,
            Self::Low => LevelColor::Red,
        }
    }
}

impl fmt::Display for FeasibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelColor {
    Green,
    Yellow,
    Red,
}

/// Evaluation area a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "Financiera")]
    Financial,
    #[serde(rename = "Técnica")]
    Technical,
    #[serde(rename = "Mercado")]
    Market,
    #[serde(rename = "Legal")]
    Legal,
}

impl Area {
    pub const ALL: [Area; 4] = [Self::Financial, Self::Technical, Self::Market, Self::Legal];

    pub fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financiera",
            Self::Technical => "Técnica",
            Self::Market => "Mercado",
            Self::Legal => "Legal",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => f.write_str("high"),
            Self::Medium => f.write_str("medium"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clamps_both_bounds() {
        assert_eq!(Score::new(-5.0).value(), 0.0);
        assert_eq!(Score::new(120.0).value(), 100.0);
        assert_eq!(Score::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn ratio_handles_empty_denominator() {
        assert_eq!(Score::ratio(3.0, 0.0), Score::ZERO);
        assert_eq!(Score::ratio(7.0, 8.0).value(), 87.5);
        assert_eq!(Score::ratio(7.0, 8.0).rounded().value(), 88.0);
    }

    #[test]
    fn level_boundaries() {
        let classify = |score: f64| FeasibilityLevel::classify(Score::new(score), 80.0, 60.0);
        assert_eq!(classify(80.0), FeasibilityLevel::High);
        assert_eq!(classify(79.9), FeasibilityLevel::Medium);
        assert_eq!(classify(60.0), FeasibilityLevel::Medium);
        assert_eq!(classify(59.9), FeasibilityLevel::Low);
    }

    #[test]
    fn area_serializes_spanish_label() {
        assert_eq!(serde_json::to_string(&Area::Financial).unwrap(), "\"Financiera\"");
        assert_eq!(serde_json::to_string(&Area::Technical).unwrap(), "\"Técnica\"");
    }
}
