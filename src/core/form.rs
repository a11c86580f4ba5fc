//! Form data as entered across the wizard sections.
//!
//! Sections are deliberately loose: each one is a JSON object mapping
//! category keys to scalars, lists of line items, nested objects or
//! strings. Typed views ([`LineItem`], [`Rating`]) are derived on read and
//! never replace the underlying values, so unknown keys survive a
//! load/save cycle untouched.

use super::line_item::{coerce_f64, LineItem};
use super::rating::Rating;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One wizard section (`financial`, `technical`, `market` or `legal`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(Map<String, Value>);

impl Section {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build a section from a JSON value; anything but an object is empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    /// Numeric value under `key`, coercing numeric strings.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(coerce_f64)
    }

    /// First numeric value found among `keys`, in order.
    pub fn first_scalar(&self, keys: &[&str]) -> Option<f64> {
        keys.iter().find_map(|key| self.scalar(key))
    }

    /// Line items under `key`. A non-array value yields no items.
    pub fn items(&self, key: &str) -> Vec<LineItem> {
        match self.0.get(key) {
            Some(Value::Array(values)) => values.iter().filter_map(LineItem::from_value).collect(),
            _ => Vec::new(),
        }
    }

    /// Strings listed under `key` (non-string entries are skipped).
    pub fn strings(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                    Value::Object(obj) => obj
                        .get("description")
                        .or_else(|| obj.get("name"))
                        .and_then(Value::as_str)
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Nested object under `key` viewed as a section.
    pub fn subsection(&self, key: &str) -> Option<Section> {
        match self.0.get(key) {
            Some(Value::Object(map)) => Some(Section(map.clone())),
            _ => None,
        }
    }

    pub fn rating(&self, key: &str) -> Rating {
        match self.0.get(key) {
            Some(Value::String(s)) => Rating::parse(s),
            _ => Rating::Unset,
        }
    }
}

impl From<Map<String, Value>> for Section {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Complete form data for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub financial: Section,
    #[serde(default)]
    pub technical: Section,
    #[serde(default)]
    pub market: Section,
    #[serde(default)]
    pub legal: Section,
}

/// Names of the four wizard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Financial,
    Technical,
    Market,
    Legal,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Financial,
        SectionKind::Technical,
        SectionKind::Market,
        SectionKind::Legal,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Technical => "technical",
            Self::Market => "market",
            Self::Legal => "legal",
        }
    }
}

impl FormData {
    pub fn section(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::Financial => &self.financial,
            SectionKind::Technical => &self.technical,
            SectionKind::Market => &self.market,
            SectionKind::Legal => &self.legal,
        }
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        match kind {
            SectionKind::Financial => &mut self.financial,
            SectionKind::Technical => &mut self.technical,
            SectionKind::Market => &mut self.market,
            SectionKind::Legal => &mut self.legal,
        }
    }
}
