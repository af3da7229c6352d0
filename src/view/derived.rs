//! Derived view state and per-item presentation.

use super::expiry::{
    days_until_display, expiring_items, expiring_soon_count, expiry_bucket, is_expiring_soon,
    ExpiryBucket,
};
use super::params::ViewParameters;
use super::pipeline::apply;
use super::stock::{low_stock_count, stock_level, stock_percentage, StockLevel};
use crate::model::{Category, PantryItem};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Dashboard counters. All of them are computed over the full item list,
/// not the filtered one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryCounts {
    pub total: usize,
    /// Items in the 14-day window, uncapped
    pub expiring_soon: usize,
    pub low_stock: usize,
    /// Distinct categories present
    pub categories: usize,
}

impl PantryCounts {
    #[must_use]
    pub fn compute(items: &[PantryItem], now: DateTime<Utc>) -> Self {
        Self {
            total: items.len(),
            expiring_soon: expiring_soon_count(items, now),
            low_stock: low_stock_count(items),
            categories: category_count(items),
        }
    }
}

/// Everything a pantry page renders, derived from (items, params, now).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    pub filtered_items: Vec<PantryItem>,
    pub expiring_items: Vec<PantryItem>,
    pub counts: PantryCounts,
}

impl DerivedView {
    #[must_use]
    pub fn compute(items: &[PantryItem], params: &ViewParameters, now: DateTime<Utc>) -> Self {
        Self {
            filtered_items: apply(items, params),
            expiring_items: expiring_items(items, now),
            counts: PantryCounts::compute(items, now),
        }
    }
}

/// Number of distinct categories across the items.
#[must_use]
pub fn category_count(items: &[PantryItem]) -> usize {
    category_breakdown(items).len()
}

/// Items per category, in order of first appearance.
#[must_use]
pub fn category_breakdown(items: &[PantryItem]) -> IndexMap<Category, usize> {
    let mut breakdown = IndexMap::new();
    for item in items {
        *breakdown.entry(item.category()).or_insert(0) += 1;
    }
    breakdown
}

/// Presentation attributes of a single item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub category: Category,
    pub stock_level: StockLevel,
    pub expiry_bucket: ExpiryBucket,
    /// Rounded up, as shown next to the item
    pub days_until: i64,
    pub expiring_soon: bool,
    pub stock_percentage: f64,
    pub running_low: bool,
}

impl ItemSummary {
    #[must_use]
    pub fn for_item(item: &PantryItem, now: DateTime<Utc>) -> Self {
        Self {
            category: item.category(),
            stock_level: stock_level(item.quantity),
            expiry_bucket: expiry_bucket(item.expiry_date, now),
            days_until: days_until_display(item.expiry_date, now),
            expiring_soon: is_expiring_soon(item.expiry_date, now),
            stock_percentage: stock_percentage(item.quantity),
            running_low: item.is_running_low(),
        }
    }
}
