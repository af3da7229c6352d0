//! Stock level classification.
//!
//! Two thresholds coexist: the four-level display bucketing (0.5 / 1 / 3)
//! and the low-stock counter (`< 2`). They are intentionally not unified.

use crate::model::PantryItem;
use serde::{Deserialize, Serialize};

/// Quantities below this count toward the low-stock total.
pub const LOW_STOCK_THRESHOLD: f64 = 2.0;
/// Quantity shown as a full stock bar.
pub const MAX_STOCK: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockLevel {
    VeryLow,
    Low,
    Moderate,
    Good,
}

impl StockLevel {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
        }
    }
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[must_use]
pub fn stock_level(quantity: f64) -> StockLevel {
    if quantity <= 0.5 {
        StockLevel::VeryLow
    } else if quantity <= 1.0 {
        StockLevel::Low
    } else if quantity <= 3.0 {
        StockLevel::Moderate
    } else {
        StockLevel::Good
    }
}

#[must_use]
pub fn is_low_stock(quantity: f64) -> bool {
    quantity < LOW_STOCK_THRESHOLD
}

#[must_use]
pub fn low_stock_count(items: &[PantryItem]) -> usize {
    items.iter().filter(|item| is_low_stock(item.quantity)).count()
}

/// Fill of the stock bar, 0-100.
#[must_use]
pub fn stock_percentage(quantity: f64) -> f64 {
    (quantity / MAX_STOCK * 100.0).min(100.0)
}
