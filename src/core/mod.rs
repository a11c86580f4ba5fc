//! Shared data model: form sections, line items, ratings, scores and the
//! aggregated calculation result.

pub mod form;
pub mod line_item;
pub mod rating;
pub mod results;
pub mod score;

pub use form::{FormData, Section, SectionKind};
pub use line_item::{amount_field, coerce_f64, LineItem, AMOUNT_FIELDS, LABEL_FIELDS};
pub use rating::Rating;
pub use results::{CalculationResult, OverallAssessment, Suggestion};
pub use score::{Area, FeasibilityLevel, LevelColor, Score, Severity};
