//! Locate the numeric leaves of a `FormData` that the optimizer may scale.
//!
//! Roles come from the category registry first: line items under a
//! financing, income, cost or expense key adjust their resolved amount
//! field only, and a few market keys are pinned explicitly. Market rows
//! adjust the one field the analysis reads from them, never labels such as
//! `year`. Everything else falls back to case-insensitive keyword matching
//! on the leaf's key.

use crate::config::{CategoryGroup, CategoryKeys};
use crate::core::{amount_field, coerce_f64, FormData, SectionKind};
use crate::market::inputs::series_field;
use serde_json::{Map, Value};
use std::fmt;

const COST_KEYWORDS: [&str; 5] = ["cost", "costo", "gasto", "expense", "operat"];
const REVENUE_KEYWORDS: [&str; 5] = ["revenue", "ingreso", "venta", "income", "sales"];
const INVESTMENT_KEYWORDS: [&str; 4] = ["investment", "inversión", "inversion", "capital"];
const MARKET_KEYWORDS: [&str; 5] = ["market", "mercado", "share", "demand", "demanda"];

/// Market keys with a fixed role. `None` keys are never adjusted.
const MARKET_REGISTRY: [(&str, Option<RowShape>); 8] = [
    ("targetMarket", Some(RowShape::LineItem)),
    ("targetMarketSize", Some(RowShape::LineItem)),
    ("growthPotential", Some(RowShape::LineItem)),
    ("unmetNeed", Some(RowShape::LineItem)),
    ("projectedData", Some(RowShape::Series)),
    ("totalMarket", None),
    ("totalMarketSize", None),
    ("competitors", None),
];

/// How the rows under a registered key carry their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowShape {
    /// Objects with an amount field, as summed by `category_total`.
    LineItem,
    /// Objects with a series value field, or bare numbers.
    Series,
}

impl RowShape {
    fn field(self, row: &Map<String, Value>) -> Option<&'static str> {
        match self {
            Self::LineItem => amount_field(row),
            Self::Series => series_field(row),
        }
    }

    fn reads_bare_numbers(self) -> bool {
        matches!(self, Self::Series)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustmentRole {
    Cost,
    Revenue,
    Investment,
    Market,
}

impl AdjustmentRole {
    /// Role implied by a key name, `None` when no keyword matches.
    pub fn from_keyword(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| key.contains(k));

        if matches(&COST_KEYWORDS) {
            Some(Self::Cost)
        } else if matches(&REVENUE_KEYWORDS) {
            Some(Self::Revenue)
        } else if matches(&INVESTMENT_KEYWORDS) {
            Some(Self::Investment)
        } else if matches(&MARKET_KEYWORDS) {
            Some(Self::Market)
        } else {
            None
        }
    }

    fn from_group(group: CategoryGroup) -> Self {
        match group {
            CategoryGroup::Financing => Self::Investment,
            CategoryGroup::Income => Self::Revenue,
            CategoryGroup::Costs | CategoryGroup::Expenses => Self::Cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of one numeric leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValuePath {
    pub section: SectionKind,
    pub segments: Vec<Segment>,
}

impl ValuePath {
    fn new(section: SectionKind, segments: Vec<Segment>) -> Self {
        Self { section, segments }
    }

    pub fn get<'a>(&self, form: &'a FormData) -> Option<&'a Value> {
        let (first, rest) = self.segments.split_first()?;
        let Segment::Key(key) = first else {
            return None;
        };
        let mut current = form.section(self.section).get(key)?;
        for segment in rest {
            current = match (segment, current) {
                (Segment::Key(key), Value::Object(map)) => map.get(key)?,
                (Segment::Index(i), Value::Array(values)) => values.get(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn get_mut<'a>(&self, form: &'a mut FormData) -> Option<&'a mut Value> {
        let (first, rest) = self.segments.split_first()?;
        let Segment::Key(key) = first else {
            return None;
        };
        let mut current = form.section_mut(self.section).as_map_mut().get_mut(key)?;
        for segment in rest {
            current = match (segment, current) {
                (Segment::Key(key), Value::Object(map)) => map.get_mut(key)?,
                (Segment::Index(i), Value::Array(values)) => values.get_mut(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section.key())?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericPath {
    pub path: ValuePath,
    pub role: AdjustmentRole,
}

/// Walk every section and tag each numeric leaf that has a role.
pub fn discover_paths(form: &FormData, keys: &CategoryKeys) -> Vec<NumericPath> {
    let mut found = Vec::new();

    for kind in SectionKind::ALL {
        for (key, value) in form.section(kind).as_map() {
            let segments = vec![Segment::Key(key.clone())];
            match registry_role(kind, key, keys) {
                Some(Registered::Category(role)) => collect_rows(
                    kind,
                    segments,
                    value,
                    role,
                    RowShape::LineItem,
                    &mut found,
                ),
                Some(Registered::Market(Some(shape))) => collect_rows(
                    kind,
                    segments,
                    value,
                    AdjustmentRole::Market,
                    shape,
                    &mut found,
                ),
                Some(Registered::Market(None)) => {}
                None => collect_by_keyword(kind, segments, key, value, &mut found),
            }
        }
    }

    found
}

enum Registered {
    Category(AdjustmentRole),
    Market(Option<RowShape>),
}

fn registry_role(kind: SectionKind, key: &str, keys: &CategoryKeys) -> Option<Registered> {
    match kind {
        SectionKind::Financial => keys
            .group_of(key)
            .map(|group| Registered::Category(AdjustmentRole::from_group(group))),
        SectionKind::Market => MARKET_REGISTRY
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, shape)| Registered::Market(*shape)),
        SectionKind::Technical | SectionKind::Legal => None,
    }
}

fn is_numeric(value: &Value) -> bool {
    matches!(value, Value::Number(_) | Value::String(_)) && coerce_f64(value).is_some()
}

fn with(segments: &[Segment], next: Segment) -> Vec<Segment> {
    let mut extended = segments.to_vec();
    extended.push(next);
    extended
}

// Each row adjusts the one field its shape reads; a scalar adjusts itself.
fn collect_rows(
    kind: SectionKind,
    segments: Vec<Segment>,
    value: &Value,
    role: AdjustmentRole,
    shape: RowShape,
    found: &mut Vec<NumericPath>,
) {
    match value {
        Value::Array(rows) => {
            for (i, row) in rows.iter().enumerate() {
                let row_path = with(&segments, Segment::Index(i));
                let path = match row {
                    Value::Object(map) => match shape.field(map) {
                        Some(field) => with(&row_path, Segment::Key(field.into())),
                        None => continue,
                    },
                    other if shape.reads_bare_numbers() && is_numeric(other) => row_path,
                    _ => continue,
                };
                found.push(NumericPath {
                    path: ValuePath::new(kind, path),
                    role,
                });
            }
        }
        other if is_numeric(other) => found.push(NumericPath {
            path: ValuePath::new(kind, segments),
            role,
        }),
        _ => {}
    }
}

/// `key` is the nearest object key above `value`.
fn collect_by_keyword(
    kind: SectionKind,
    segments: Vec<Segment>,
    key: &str,
    value: &Value,
    found: &mut Vec<NumericPath>,
) {
    match value {
        Value::Array(values) => {
            for (i, item) in values.iter().enumerate() {
                collect_by_keyword(kind, with(&segments, Segment::Index(i)), key, item, found);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                let path = with(&segments, Segment::Key(child.clone()));
                collect_by_keyword(kind, path, child, item, found);
            }
        }
        other if is_numeric(other) => {
            if let Some(role) = AdjustmentRole::from_keyword(key) {
                found.push(NumericPath {
                    path: ValuePath::new(kind, segments),
                    role,
                });
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: Value) -> FormData {
        serde_json::from_value(value).unwrap()
    }

    fn paths_with(form: &FormData, role: AdjustmentRole) -> Vec<String> {
        let mut paths: Vec<String> = discover_paths(form, &CategoryKeys::default())
            .into_iter()
            .filter(|p| p.role == role)
            .map(|p| p.path.to_string())
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn keyword_roles() {
        assert_eq!(AdjustmentRole::from_keyword("operationalCosts"), Some(AdjustmentRole::Cost));
        assert_eq!(AdjustmentRole::from_keyword("VentasAnuales"), Some(AdjustmentRole::Revenue));
        assert_eq!(AdjustmentRole::from_keyword("Inversión"), Some(AdjustmentRole::Investment));
        assert_eq!(AdjustmentRole::from_keyword("marketShare"), Some(AdjustmentRole::Market));
        assert_eq!(AdjustmentRole::from_keyword("discountRate"), None);
    }

    #[test]
    fn category_items_adjust_their_amount_field_only() {
        let data = form(json!({
            "financial": {
                "rawMaterials": [
                    { "material": "Flour", "unitCost": 2, "annualCost": 1200 },
                    { "material": "Sugar" }
                ],
                "salesProducts": [{ "name": "Bread", "amount": "5000", "unitCost": 1 }],
                "capital": 20000
            }
        }));

        assert_eq!(
            paths_with(&data, AdjustmentRole::Cost),
            vec!["financial.rawMaterials[0].annualCost"]
        );
        assert_eq!(
            paths_with(&data, AdjustmentRole::Revenue),
            vec!["financial.salesProducts[0].amount"]
        );
        assert_eq!(paths_with(&data, AdjustmentRole::Investment), vec!["financial.capital"]);
    }

    #[test]
    fn market_registry_pins_total_market() {
        let data = form(json!({
            "market": {
                "targetMarket": 5000,
                "totalMarket": 90000,
                "competitors": [{ "marketShare": 30 }],
                "segmentDemand": "120"
            }
        }));
        assert_eq!(
            paths_with(&data, AdjustmentRole::Market),
            vec!["market.segmentDemand", "market.targetMarket"]
        );
    }

    #[test]
    fn market_rows_keep_their_labels() {
        let data = form(json!({
            "market": {
                "projectedData": [
                    { "year": 2025, "value": 101 },
                    { "year": "2026", "marketSize": "120" },
                    130,
                    { "year": 2028 }
                ],
                "targetMarket": [
                    { "name": "Students", "year": 2025, "amount": 800 },
                    { "segment": "Offices", "size": 300 }
                ]
            }
        }));

        assert_eq!(
            paths_with(&data, AdjustmentRole::Market),
            vec![
                "market.projectedData[0].value",
                "market.projectedData[1].marketSize",
                "market.projectedData[2]",
                "market.targetMarket[0].amount",
            ]
        );
    }

    #[test]
    fn paths_read_and_write() {
        let mut data = form(json!({ "financial": { "salaries": [{ "amount": 10 }] } }));
        let path = &discover_paths(&data, &CategoryKeys::default())[0];
        assert_eq!(path.path.get(&data), Some(&json!(10)));
        *path.path.get_mut(&mut data).unwrap() = json!(8.5);
        assert_eq!(data.financial.items("salaries")[0].resolved_amount(), 8.5);
    }
}
