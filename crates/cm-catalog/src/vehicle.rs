//! Vehicle records as supplied by the catalog loader.

use serde::{Deserialize, Serialize};

use crate::lenient::{f64_or_zero, null_as_default, u16_or_zero, u32_or_zero};

/// A single catalog entry.
///
/// Numeric fields read as zero when absent, null, or malformed so a sparse
/// record still participates in filtering and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier within a catalog snapshot (e.g., "CAR-1").
    pub id: String,
    /// Display name (e.g., "Camry").
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trim: String,
    /// Model year.
    #[serde(default, deserialize_with = "u16_or_zero")]
    pub year: u16,
    /// Market region tag ("US", "Canada", "EU").
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    /// Body-type / series tag ("SUV", "Sedan", ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: String,
    /// Powertrain tag ("Hybrid", "Electric", ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub powertrain: String,
    /// Drivetrain tag ("AWD", "FWD", ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub drivetrain: String,
    /// Base price in `currency`.
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub msrp: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Manufacturer model code (e.g., "GR86", "BZ4X").
    #[serde(default, deserialize_with = "null_as_default")]
    pub model_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub efficiency: Efficiency,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Inventory,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// City / highway fuel economy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Efficiency {
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub city_mpg: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub hwy_mpg: f64,
}

/// Dealer inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub in_stock: u32,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub delivery_eta_days: u32,
}

impl Vehicle {
    /// Combined city + highway MPG.
    pub fn total_mpg(&self) -> f64 {
        self.efficiency.city_mpg + self.efficiency.hwy_mpg
    }

    /// "Name Trim" label used in assistant messages; just the name when
    /// the trim is empty.
    pub fn label(&self) -> String {
        if self.trim.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.trim)
        }
    }

    /// Lower-cased "name trim modelCode" text that model mentions are matched against.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.trim, self.model_code).to_lowercase()
    }

    /// True if any of the given lower-case tokens occurs in `search_text`.
    pub fn matches_any_token(&self, tokens: &[String]) -> bool {
        let hay = self.search_text();
        tokens.iter().any(|t| hay.contains(&t.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "id": "CAR-1",
            "name": "Camry",
            "trim": "XSE Hybrid",
            "year": 2025,
            "region": "US",
            "series": "Sedan",
            "powertrain": "Hybrid",
            "drivetrain": "FWD",
            "msrp": 32000,
            "currency": "USD",
            "modelCode": "XV80",
            "efficiency": { "city_mpg": 51, "hwy_mpg": 49 },
            "inventory": { "location": "Dallas", "inStock": 4, "deliveryEtaDays": 7 }
        }"#;
        let v: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(v.id, "CAR-1");
        assert_eq!(v.model_code, "XV80");
        assert_eq!(v.inventory.in_stock, 4);
        assert_eq!(v.inventory.delivery_eta_days, 7);
        assert_eq!(v.total_mpg(), 100.0);
    }

    #[test]
    fn missing_numeric_fields_default_to_zero() {
        let v: Vehicle = serde_json::from_str(r#"{"id": "X", "name": "Mystery"}"#).unwrap();
        assert_eq!(v.msrp, 0.0);
        assert_eq!(v.year, 0);
        assert_eq!(v.total_mpg(), 0.0);
        assert_eq!(v.inventory.in_stock, 0);
        assert_eq!(v.currency, "USD");
    }

    #[test]
    fn serializes_camel_case_keys() {
        let v: Vehicle = serde_json::from_str(r#"{"id": "X", "name": "Prius", "modelCode": "XW60"}"#)
            .unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["modelCode"], "XW60");
        assert!(json["inventory"].get("inStock").is_some());
    }

    #[test]
    fn token_matching_is_case_insensitive() {
        let v: Vehicle = serde_json::from_str(
            r#"{"id": "X", "name": "Land Cruiser", "trim": "1958", "modelCode": "J250"}"#,
        )
        .unwrap();
        assert!(v.matches_any_token(&["land cruiser".into()]));
        assert!(v.matches_any_token(&["J250".into()]));
        assert!(!v.matches_any_token(&["camry".into()]));
        assert!(!v.matches_any_token(&[]));
    }

    #[test]
    fn label_skips_empty_trim() {
        let v: Vehicle = serde_json::from_str(r#"{"id": "X", "name": "Supra"}"#).unwrap();
        assert_eq!(v.label(), "Supra");
    }
}
