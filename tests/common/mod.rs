//! Shared form data fixtures for integration tests.
#![allow(dead_code)]

use factibilidad::FormData;
use indoc::indoc;

pub fn form_from(json: &str) -> FormData {
    serde_json::from_str(json).expect("fixture must be valid form data")
}

/// Investment 100000, revenue 150000, costs 80000 at 10% over 5 years.
pub fn profitable_form() -> FormData {
    form_from(indoc! {r#"
        {
          "financial": {
            "investment": 100000,
            "projectedRevenue": 150000,
            "operationalCosts": 80000,
            "discountRate": 10,
            "period": 5
          }
        }
    "#})
}

/// Investment 500000, revenue 100000, costs 90000.
pub fn losing_form() -> FormData {
    form_from(indoc! {r#"
        {
          "financial": {
            "investment": 500000,
            "projectedRevenue": 100000,
            "operationalCosts": 90000,
            "discountRate": 10,
            "period": 5
          }
        }
    "#})
}

/// Every section filled in, with the financial figures given as line items.
pub fn complete_form() -> FormData {
    form_from(indoc! {r#"
        {
          "financial": {
            "capital": [{ "description": "Local", "amount": "40000" }],
            "bankCredit": [{ "description": "Horno", "amount": 20000 }],
            "salesProducts": [{ "name": "Pan", "annualAmount": 90000 }],
            "rawMaterials": [{ "material": "Harina", "annualCost": 30000 }],
            "directLabor": [{ "name": "Panadero", "annualAmount": 18000 }],
            "discountRate": 12,
            "period": 5
          },
          "technical": {
            "localization": {
              "proximityToMarket": "excellent",
              "proximityToSuppliers": "good",
              "accessRoutes": "good"
            },
            "engineering": {
              "processDefinition": "regular",
              "technologyAvailability": "good"
            }
          },
          "market": {
            "targetMarket": 20000,
            "totalMarket": 100000,
            "historicalData": [1000, 1100, 1200],
            "projectedData": [1300, 1450],
            "competitors": [
              { "name": "A", "marketShare": 20, "price": 10 },
              { "name": "B", "marketShare": 15, "price": 12 },
              { "name": "C", "marketShare": 10, "price": 16 },
              { "name": "D", "marketShare": 5, "price": 14 }
            ],
            "averageMargin": 30,
            "growthPotential": 12,
            "unmetNeed": 25,
            "opportunities": ["Turismo"],
            "threats": []
          },
          "legal": {
            "businessConstitution": "good",
            "operatingPermits": "regular",
            "sanitaryLicenses": "poor",
            "taxRegistration": "excellent"
          }
        }
    "#})
}
