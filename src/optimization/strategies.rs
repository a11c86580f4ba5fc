//! Adjustment strategies, one per issue kind, dispatched through a registry.

use super::issues::{Issue, IssueKind};
use super::paths::{AdjustmentRole, NumericPath, Segment, ValuePath};
use crate::config::OptimizationSettings;
use crate::core::{coerce_f64, Area, FormData, Rating, SectionKind, Severity};
use crate::scoring::{LEGAL_FIELDS, TECHNICAL_CATEGORIES};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One changed leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub path: String,
    pub before: Value,
    pub after: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub area: Area,
    pub issue: IssueKind,
    pub severity: Severity,
    pub action: String,
    pub impact: String,
    pub adjustments: Vec<Adjustment>,
}

impl Recommendation {
    fn for_issue(issue: &Issue, action: impl Into<String>, impact: impl Into<String>) -> Self {
        Self {
            area: issue.area,
            issue: issue.kind,
            severity: issue.severity,
            action: action.into(),
            impact: impact.into(),
            adjustments: Vec::new(),
        }
    }

    fn with_adjustments(mut self, adjustments: Vec<Adjustment>) -> Self {
        self.adjustments = adjustments;
        self
    }
}

/// Deep copy of the form being optimized together with its adjustable paths.
pub struct Workspace<'a> {
    pub data: FormData,
    pub paths: Vec<NumericPath>,
    pub settings: &'a OptimizationSettings,
}

fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

impl<'a> Workspace<'a> {
    pub fn new(
        data: FormData,
        paths: Vec<NumericPath>,
        settings: &'a OptimizationSettings,
    ) -> Self {
        Self {
            data,
            paths,
            settings,
        }
    }

    /// Multiply every leaf with `role` by `factor`.
    pub fn scale(&mut self, role: AdjustmentRole, factor: f64) -> Vec<Adjustment> {
        let targets: Vec<ValuePath> = self
            .paths
            .iter()
            .filter(|p| p.role == role)
            .map(|p| p.path.clone())
            .collect();

        targets
            .into_iter()
            .filter_map(|path| {
                let slot = path.get_mut(&mut self.data)?;
                let current = coerce_f64(slot)?;
                let before = slot.clone();
                let after = number(current * factor);
                *slot = after.clone();
                Some(Adjustment {
                    path: path.to_string(),
                    before,
                    after,
                })
            })
            .collect()
    }

    /// Raise every set rating of the rated fields one step, never past `good`.
    pub fn step_up_ratings(&mut self, kind: SectionKind) -> Vec<Adjustment> {
        rating_paths(&self.data, kind)
            .into_iter()
            .filter_map(|path| {
                let slot = path.get_mut(&mut self.data)?;
                let before = Rating::parse(slot.as_str()?);
                let after = before.step_up();
                if after == before {
                    return None;
                }
                let previous = std::mem::replace(slot, Value::String(after.as_str().to_string()));
                Some(Adjustment {
                    path: path.to_string(),
                    before: previous,
                    after: Value::String(after.as_str().to_string()),
                })
            })
            .collect()
    }
}

fn rated_fields(kind: SectionKind) -> Vec<(Option<&'static str>, &'static [&'static str])> {
    match kind {
        SectionKind::Technical => TECHNICAL_CATEGORIES
            .iter()
            .map(|(key, fields)| (Some(*key), *fields))
            .collect(),
        SectionKind::Legal => {
            let fields: &'static [&'static str] = &LEGAL_FIELDS;
            vec![(None, fields)]
        }
        SectionKind::Financial | SectionKind::Market => Vec::new(),
    }
}

/// Paths of the rating fields present in a section, nested or flat.
fn rating_paths(data: &FormData, kind: SectionKind) -> Vec<ValuePath> {
    let section = data.section(kind);
    let mut paths = Vec::new();

    for (category, fields) in rated_fields(kind) {
        let nested = category.filter(|key| matches!(section.get(key), Some(Value::Object(_))));
        for field in fields {
            let segments = match nested {
                Some(category) => vec![
                    Segment::Key(category.to_string()),
                    Segment::Key(field.to_string()),
                ],
                None => vec![Segment::Key(field.to_string())],
            };
            let path = ValuePath {
                section: kind,
                segments,
            };
            if path.get(data).is_some_and(Value::is_string) && !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

pub trait OptimizationStrategy {
    fn apply(&self, issue: &Issue, workspace: &mut Workspace<'_>) -> Recommendation;
}

pub struct NegativeNpvStrategy;

impl OptimizationStrategy for NegativeNpvStrategy {
    fn apply(&self, issue: &Issue, workspace: &mut Workspace<'_>) -> Recommendation {
        let s = workspace.settings;
        let (cost_cut, revenue_boost, investment_cut) = (
            s.negative_npv_cost_cut,
            s.negative_npv_revenue_boost,
            s.negative_npv_investment_cut,
        );

        let mut adjustments = workspace.scale(AdjustmentRole::Cost, 1.0 - cost_cut);
        adjustments.extend(workspace.scale(AdjustmentRole::Revenue, 1.0 + revenue_boost));
        adjustments.extend(workspace.scale(AdjustmentRole::Investment, 1.0 - investment_cut));

        Recommendation::for_issue(
            issue,
            format!(
                "Cut costs by {:.0}%, raise revenue by {:.0}% and reduce the investment by {:.0}%",
                cost_cut * 100.0,
                revenue_boost * 100.0,
                investment_cut * 100.0
            ),
            "Raises the annual cash flow and lowers the capital at risk",
        )
        .with_adjustments(adjustments)
    }
}

pub struct LowIrrStrategy;

impl OptimizationStrategy for LowIrrStrategy {
    fn apply(&self, issue: &Issue, workspace: &mut Workspace<'_>) -> Recommendation {
        let boost = workspace.settings.low_irr_revenue_boost;
        let adjustments = workspace.scale(AdjustmentRole::Revenue, 1.0 + boost);
        Recommendation::for_issue(
            issue,
            format!("Raise projected revenue by {:.0}%", boost * 100.0),
            "Improves the return on the invested capital",
        )
        .with_adjustments(adjustments)
    }
}

pub struct LongPaybackStrategy;

impl OptimizationStrategy for LongPaybackStrategy {
    fn apply(&self, issue: &Issue, workspace: &mut Workspace<'_>) -> Recommendation {
        let cut = workspace.settings.long_payback_investment_cut;
        let adjustments = workspace.scale(AdjustmentRole::Investment, 1.0 - cut);
        Recommendation::for_issue(
            issue,
            format!("Reduce the initial investment by {:.0}%", cut * 100.0),
            "Shortens the time needed to recover the investment",
        )
        .with_adjustments(adjustments)
    }
}

pub struct MarketReachStrategy;

impl OptimizationStrategy for MarketReachStrategy {
    fn apply(&self, issue: &Issue, workspace: &mut Workspace<'_>) -> Recommendation {
        let boost = workspace.settings.market_boost;
        let adjustments = workspace.scale(AdjustmentRole::Market, 1.0 + boost);
        Recommendation::for_issue(
            issue,
            format!("Expand the reachable market by {:.0}%", boost * 100.0),
            "Strengthens market share and demand indicators",
        )
        .with_adjustments(adjustments)
    }
}

pub struct RatingStepUpStrategy {
    pub section: SectionKind,
}

impl OptimizationStrategy for RatingStepUpStrategy {
    fn apply(&self, issue: &Issue, workspace: &mut Workspace<'_>) -> Recommendation {
        let adjustments = workspace.step_up_ratings(self.section);
        Recommendation::for_issue(
            issue,
            format!("Strengthen the weakest {} items by one level", issue.area),
            "Raises the category score toward the viability threshold",
        )
        .with_adjustments(adjustments)
    }
}

/// Used for disabled or unregistered kinds. Changes no data.
pub struct StandardImprovements;

impl OptimizationStrategy for StandardImprovements {
    fn apply(&self, issue: &Issue, _workspace: &mut Workspace<'_>) -> Recommendation {
        Recommendation::for_issue(
            issue,
            "Applied standard improvements",
            format!("Review the {} evaluation manually", issue.area),
        )
    }
}

pub struct StrategyRegistry {
    strategies: BTreeMap<IssueKind, Box<dyn OptimizationStrategy>>,
    fallback: StandardImprovements,
}

impl StrategyRegistry {
    pub fn empty() -> Self {
        Self {
            strategies: BTreeMap::new(),
            fallback: StandardImprovements,
        }
    }

    pub fn register(&mut self, kind: IssueKind, strategy: Box<dyn OptimizationStrategy>) {
        self.strategies.insert(kind, strategy);
    }

    pub fn contains(&self, kind: IssueKind) -> bool {
        self.strategies.contains_key(&kind)
    }

    /// Strategy for `kind`, the fallback when it is disabled or missing.
    pub fn resolve(
        &self,
        kind: IssueKind,
        settings: &OptimizationSettings,
    ) -> &dyn OptimizationStrategy {
        if settings.is_disabled(kind) {
            return &self.fallback;
        }
        self.strategies
            .get(&kind)
            .map(|s| s.as_ref())
            .unwrap_or(&self.fallback)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(IssueKind::FinancialNegativeNpv, Box::new(NegativeNpvStrategy));
        registry.register(IssueKind::FinancialLowIrr, Box::new(LowIrrStrategy));
        registry.register(IssueKind::FinancialLongPayback, Box::new(LongPaybackStrategy));
        for kind in [IssueKind::MarketNotViable, IssueKind::MarketLowScore] {
            registry.register(kind, Box::new(MarketReachStrategy));
        }
        for kind in [IssueKind::TechnicalNotViable, IssueKind::TechnicalLowScore] {
            registry.register(
                kind,
                Box::new(RatingStepUpStrategy {
                    section: SectionKind::Technical,
                }),
            );
        }
        for kind in [IssueKind::LegalNotViable, IssueKind::LegalLowScore] {
            registry.register(
                kind,
                Box::new(RatingStepUpStrategy {
                    section: SectionKind::Legal,
                }),
            );
        }
        registry
    }
}
