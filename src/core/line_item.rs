//! Typed view over a user-entered row within a category.
//!
//! Rows come from several form screens that name their amount differently.
//! The resolved amount is the first present field in [`AMOUNT_FIELDS`]
//! order; when none is present the row counts as `0`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Amount field names in lookup order.
pub const AMOUNT_FIELDS: [&str; 4] = ["amount", "annualAmount", "annualCost", "unitCost"];

/// Label field names in lookup order.
pub const LABEL_FIELDS: [&str; 3] = ["name", "description", "material"];

/// Coerce a JSON value into a finite number.
///
/// Numbers and numeric strings are accepted; everything else, including
/// NaN or infinite results, is `None`.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Name of the field that supplies the amount of a raw row, if any.
pub fn amount_field(row: &Map<String, Value>) -> Option<&'static str> {
    AMOUNT_FIELDS
        .iter()
        .copied()
        .find(|field| row.get(*field).and_then(coerce_f64).is_some())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub label: Option<String>,
    pub amount: Option<f64>,
    pub annual_amount: Option<f64>,
    pub annual_cost: Option<f64>,
    pub unit_cost: Option<f64>,
}

impl LineItem {
    /// Read a row from JSON. Only objects are rows.
    pub fn from_value(value: &Value) -> Option<Self> {
        let row = value.as_object()?;
        let number = |key: &str| row.get(key).and_then(coerce_f64);
        let label = LABEL_FIELDS.iter().find_map(|key| {
            row.get(*key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        });

        Some(Self {
            label,
            amount: number("amount"),
            annual_amount: number("annualAmount"),
            annual_cost: number("annualCost"),
            unit_cost: number("unitCost"),
        })
    }

    pub fn resolved_amount(&self) -> f64 {
        self.amount
            .or(self.annual_amount)
            .or(self.annual_cost)
            .or(self.unit_cost)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_present_amount_field_wins() {
        let item = LineItem::from_value(&json!({
            "name": "Flour",
            "annualCost": 300,
            "unitCost": 2
        }))
        .unwrap();
        assert_eq!(item.resolved_amount(), 300.0);
        assert_eq!(item.label.as_deref(), Some("Flour"));

        let item = LineItem::from_value(&json!({ "amount": "150", "annualAmount": 900 })).unwrap();
        assert_eq!(item.resolved_amount(), 150.0);
    }

    #[test]
    fn unparsable_amounts_fall_through() {
        let item = LineItem::from_value(&json!({ "amount": "abc", "annualAmount": 40 })).unwrap();
        assert_eq!(item.resolved_amount(), 40.0);

        let item = LineItem::from_value(&json!({ "material": "Steel" })).unwrap();
        assert_eq!(item.resolved_amount(), 0.0);
        assert_eq!(item.label.as_deref(), Some("Steel"));
    }

    #[test]
    fn non_objects_are_not_rows() {
        assert!(LineItem::from_value(&json!(12)).is_none());
        assert!(LineItem::from_value(&json!("row")).is_none());
    }

    #[test]
    fn amount_field_reports_lookup_winner() {
        let row = json!({ "unitCost": 3, "annualCost": "x" });
        assert_eq!(amount_field(row.as_object().unwrap()), Some("unitCost"));
        let row = json!({ "quantity": 3 });
        assert_eq!(amount_field(row.as_object().unwrap()), None);
    }

    #[test]
    fn coerce_rejects_non_finite() {
        assert_eq!(coerce_f64(&json!("inf")), None);
        assert_eq!(coerce_f64(&json!("NaN")), None);
        assert_eq!(coerce_f64(&json!(true)), None);
        assert_eq!(coerce_f64(&json!(-4.5)), Some(-4.5));
    }
}
