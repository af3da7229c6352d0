//! Pantry view-state engine.
//!
//! Everything a page renders is derived here from two inputs: the raw item
//! list (replaced wholesale on every reload) and the user-controlled
//! [`ViewParameters`]. Nothing in this module holds state between calls; the
//! caller recomputes a [`DerivedView`] after any data or parameter change.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pantry_tools::model::PantryItem;
//! use pantry_tools::view::{DerivedView, SortKey, ViewParameters};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
//! let items = vec![
//!     PantryItem::new("Rice", 5.0, "kg", "2024-06-21").unwrap(),
//!     PantryItem::new("Milk", 0.3, "l", "2024-06-03").unwrap(),
//! ];
//! let params = ViewParameters::default().sorted_by(SortKey::Expiry);
//!
//! let view = DerivedView::compute(&items, &params, now);
//! assert_eq!(view.filtered_items[0].name, "Milk");
//! assert_eq!(view.counts.low_stock, 1);
//! ```

mod derived;
mod expiry;
mod params;
mod pipeline;
mod recipes;
mod stock;
mod suggestions;

pub use crate::model::{classify, Category};
pub use derived::{category_breakdown, category_count, DerivedView, ItemSummary, PantryCounts};
pub use expiry::{
    days_until, days_until_display, expiring_items, expiring_soon_count, expiry_bucket,
    is_expiring_soon, is_in_expiring_window, ExpiryBucket, EXPIRING_ITEMS_LIMIT,
    EXPIRING_SOON_DAYS, EXPIRING_WINDOW_DAYS,
};
pub use params::{CategoryFilter, SortKey, ViewParameters};
pub use pipeline::{apply, sort_items, NameCollator};
pub use recipes::{
    filter_recipes, page_numbers, Pagination, RecipeQuery, RecipeStats, DEFAULT_PAGE_SIZE,
    POPULAR_RATING,
};
pub use stock::{
    is_low_stock, low_stock_count, stock_level, stock_percentage, StockLevel,
    LOW_STOCK_THRESHOLD, MAX_STOCK,
};
pub use suggestions::{SuggestionBoard, SuggestionStats};
