//! Typed view of the market section.

use crate::core::{coerce_f64, Section};
use crate::normalize::category_total;
use serde_json::Value;

/// Value field names of a series row, in lookup order.
pub const SERIES_VALUE_FIELDS: [&str; 4] = ["value", "amount", "size", "marketSize"];
const SHARE_FIELDS: [&str; 2] = ["marketShare", "share"];
const PRICE_FIELDS: [&str; 2] = ["price", "averagePrice"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketInputs {
    pub target_market: f64,
    pub total_market: f64,
    pub historical: Vec<f64>,
    pub projected: Vec<f64>,
    /// Percent shares of the listed competitors
    pub competitor_shares: Vec<f64>,
    pub competitor_count: usize,
    pub average_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Percent
    pub average_margin: Option<f64>,
    /// Percent
    pub growth_potential: Option<f64>,
    /// Percent
    pub unmet_need: Option<f64>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

fn first_field(row: &serde_json::Map<String, Value>, fields: &[&str]) -> Option<f64> {
    fields
        .iter()
        .find_map(|field| row.get(*field).and_then(coerce_f64))
}

/// Name of the field that supplies the value of a series row, if any.
pub fn series_field(row: &serde_json::Map<String, Value>) -> Option<&'static str> {
    SERIES_VALUE_FIELDS
        .iter()
        .copied()
        .find(|field| row.get(*field).and_then(coerce_f64).is_some())
}

fn series(section: &Section, keys: &[&str]) -> Vec<f64> {
    let values = keys.iter().find_map(|key| match section.get(key) {
        Some(Value::Array(values)) => Some(values),
        _ => None,
    });

    values
        .map(|values| {
            values
                .iter()
                .filter_map(|v| match v {
                    Value::Object(row) => first_field(row, &SERIES_VALUE_FIELDS),
                    other => coerce_f64(other),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn market_size(section: &Section, keys: &[&str]) -> f64 {
    keys.iter()
        .map(|key| category_total(section, key))
        .find(|total| *total > 0.0)
        .unwrap_or(0.0)
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v >= 0.0)
}

impl MarketInputs {
    pub fn from_section(section: &Section) -> Self {
        let competitors: Vec<&serde_json::Map<String, Value>> = match section.get("competitors") {
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_object).collect(),
            _ => Vec::new(),
        };

        let competitor_shares: Vec<f64> = competitors
            .iter()
            .filter_map(|row| first_field(row, &SHARE_FIELDS))
            .filter(|share| *share > 0.0)
            .collect();
        let competitor_prices: Vec<f64> = competitors
            .iter()
            .filter_map(|row| first_field(row, &PRICE_FIELDS))
            .filter(|price| *price > 0.0)
            .collect();

        let competitor_count = if competitors.is_empty() {
            section
                .scalar("competitorCount")
                .filter(|n| *n > 0.0)
                .map(|n| n.round() as usize)
                .unwrap_or(0)
        } else {
            competitors.len()
        };

        let mean_price = (!competitor_prices.is_empty())
            .then(|| competitor_prices.iter().sum::<f64>() / competitor_prices.len() as f64);
        let min_price = competitor_prices.iter().copied().reduce(f64::min);
        let max_price = competitor_prices.iter().copied().reduce(f64::max);

        Self {
            target_market: market_size(section, &["targetMarket", "targetMarketSize"]),
            total_market: market_size(section, &["totalMarket", "totalMarketSize"]),
            historical: series(section, &["historicalData", "historical"]),
            projected: series(section, &["projectedData", "projections"]),
            competitor_shares,
            competitor_count,
            average_price: non_negative(section.scalar("averagePrice")).or(mean_price),
            min_price: non_negative(section.scalar("minPrice")).or(min_price),
            max_price: non_negative(section.scalar("maxPrice")).or(max_price),
            average_margin: section.scalar("averageMargin"),
            growth_potential: section.scalar("growthPotential"),
            unmet_need: section.scalar("unmetNeed"),
            opportunities: section.strings("opportunities"),
            threats: section.strings("threats"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_lists_and_scalars() {
        let section = Section::from_value(json!({
            "targetMarket": [{ "name": "Downtown", "amount": 2000 }, { "amount": 1000 }],
            "totalMarketSize": 30000,
            "historicalData": [100, { "year": 2023, "value": "120" }, "bad"],
            "competitors": [
                { "name": "A", "marketShare": 30, "price": 10 },
                { "name": "B", "share": "20", "price": 14 },
                { "name": "C" }
            ],
            "opportunities": ["Tourism"]
        }));

        let inputs = MarketInputs::from_section(&section);

        assert_eq!(inputs.target_market, 3000.0);
        assert_eq!(inputs.total_market, 30000.0);
        assert_eq!(inputs.historical, vec![100.0, 120.0]);
        assert!(inputs.projected.is_empty());
        assert_eq!(inputs.competitor_shares, vec![30.0, 20.0]);
        assert_eq!(inputs.competitor_count, 3);
        assert_eq!(inputs.average_price, Some(12.0));
        assert_eq!(inputs.min_price, Some(10.0));
        assert_eq!(inputs.max_price, Some(14.0));
        assert_eq!(inputs.opportunities, vec!["Tourism"]);
    }

    #[test]
    fn explicit_prices_override_competitors() {
        let section = Section::from_value(json!({
            "competitors": [{ "price": 10 }, { "price": 20 }],
            "averagePrice": 18,
            "competitorCount": 40
        }));
        let inputs = MarketInputs::from_section(&section);
        assert_eq!(inputs.average_price, Some(18.0));
        assert_eq!(inputs.competitor_count, 2);
    }

    #[test]
    fn competitor_count_scalar_without_list() {
        let section = Section::from_value(json!({ "competitorCount": "12" }));
        assert_eq!(MarketInputs::from_section(&section).competitor_count, 12);
    }

    #[test]
    fn empty_section_has_no_data() {
        assert_eq!(MarketInputs::from_section(&Section::new()), MarketInputs::default());
    }
}
