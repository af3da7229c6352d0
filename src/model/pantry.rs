//! Pantry inventory items.

use super::category::{classify, Category};
use super::date::{item_date, parse_item_date};
use crate::error::{PantryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named, quantified ingredient with an expiry date.
///
/// Items are replaced wholesale on every reload; nothing patches them in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    /// Server-assigned identifier, absent for unsaved items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(deserialize_with = "quantity::deserialize")]
    pub quantity: f64,
    pub unit: String,
    #[serde(with = "item_date")]
    pub expiry_date: NaiveDate,
    #[serde(
        default,
        with = "item_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub added_date: Option<NaiveDate>,
    /// Precomputed by the server; not authoritative, see [`PantryItem::is_running_low`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_low: Option<bool>,
}

impl PantryItem {
    /// Build an unsaved item, checking the quantity and parsing the expiry date.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        expiry_date: &str,
    ) -> Result<Self> {
        Ok(Self {
            id: None,
            name: name.into(),
            quantity: check_quantity(quantity)?,
            unit: unit.into(),
            expiry_date: parse_item_date(expiry_date)?,
            added_date: None,
            running_low: None,
        })
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_added_date(mut self, added: NaiveDate) -> Self {
        self.added_date = Some(added);
        self
    }

    /// Category derived from the item name.
    #[must_use]
    pub fn category(&self) -> Category {
        classify(&self.name)
    }

    /// Recomputed running-low flag; ignores whatever the server sent.
    #[must_use]
    pub fn is_running_low(&self) -> bool {
        crate::view::is_low_stock(self.quantity)
    }

    /// The body sent to create or update this item.
    #[must_use]
    pub fn to_request(&self) -> PantryItemRequest {
        PantryItemRequest {
            name: self.name.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            expiry_date: self.expiry_date,
        }
    }
}

/// Create/update payload for a pantry item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItemRequest {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(with = "item_date")]
    pub expiry_date: NaiveDate,
}

impl PantryItemRequest {
    /// The item the server is expected to hand back, minus server fields.
    #[must_use]
    pub fn into_item(self) -> PantryItem {
        PantryItem {
            id: None,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            expiry_date: self.expiry_date,
            added_date: None,
            running_low: None,
        }
    }
}

/// Accept a quantity only if it is a number `>= 0`.
pub fn check_quantity(quantity: f64) -> Result<f64> {
    if quantity >= 0.0 {
        Ok(quantity)
    } else {
        Err(PantryError::invalid_quantity(quantity))
    }
}

mod quantity {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        super::check_quantity(raw).map_err(serde::de::Error::custom)
    }
}

/// Load a pantry snapshot (a JSON array as returned by the list endpoint).
pub fn items_from_json(json: &str) -> Result<Vec<PantryItem>> {
    use crate::error::ErrorContext;
    serde_json::from_str(json).context("pantry snapshot")
}
