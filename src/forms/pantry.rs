//! Add/edit form for a pantry item.

use crate::error::{PantryError, ValidationErrors};
use crate::model::{format_item_date, parse_item_date, PantryItem, PantryItemRequest};

/// Smallest quantity the form accepts.
pub const MIN_QUANTITY: f64 = 0.1;

/// Raw form input. The expiry date stays a string until validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PantryItemForm {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: String,
}

impl Default for PantryItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1.0,
            unit: String::new(),
            expiry_date: String::new(),
        }
    }
}

impl PantryItemForm {
    /// Prefill from an existing item for editing.
    #[must_use]
    pub fn edit(item: &PantryItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            expiry_date: format_item_date(item.expiry_date),
        }
    }

    /// Set the expiry from a raw value, dropping any time part.
    #[must_use]
    pub fn with_expiry(mut self, raw: &str) -> Self {
        self.expiry_date = raw.split('T').next().unwrap_or_default().to_string();
        self
    }

    /// Check every field and build the request body.
    pub fn validate(&self) -> Result<PantryItemRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Name is required");
        }
        if !self.quantity.is_finite() || self.quantity < MIN_QUANTITY {
            errors.push("quantity", format!("Quantity must be at least {MIN_QUANTITY}"));
        }
        let unit = self.unit.trim();
        if unit.is_empty() {
            errors.push("unit", "Unit is required");
        }

        let expiry = if self.expiry_date.trim().is_empty() {
            errors.push("expiryDate", "Expiry date is required");
            None
        } else {
            match parse_item_date(&self.expiry_date) {
                Ok(date) => Some(date),
                Err(PantryError::InvalidDate { value, reason }) => {
                    errors.push("expiryDate", format!("Invalid date '{value}': {reason}"));
                    None
                }
                Err(other) => {
                    errors.push("expiryDate", other.to_string());
                    None
                }
            }
        };

        match expiry {
            Some(expiry_date) if errors.is_empty() => Ok(PantryItemRequest {
                name: name.to_string(),
                quantity: self.quantity,
                unit: unit.to_string(),
                expiry_date,
            }),
            _ => Err(errors),
        }
    }
}
