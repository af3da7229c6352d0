//! **View state and REST clients for a recipe platform's pantry.**
//!
//! `pantry-tools` keeps a household's pantry inventory in a shape pages and
//! scripts can render directly. It classifies items into food categories,
//! tracks how close each one is to expiry and how low its stock is, and
//! derives filtered, sorted views plus the counts shown above them. The same
//! crate talks to the platform's REST services (pantry, recipes, AI chef and
//! auth) and backs the `pantry-tools` command-line client.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: pantry items, recipes, AI suggestions and auth payloads.
//!   Dates are parsed at the boundary; a malformed date is an error, never a
//!   sentinel.
//! - **[`view`]**: the pure view-state engine. [`DerivedView::compute`] turns
//!   `(items, parameters, now)` into the filtered list, the expiring subset and
//!   the header counts.
//! - **[`pantry`]**: the [`PantrySource`] seam and the [`PantryPage`]
//!   controller that reloads, mutates and re-derives.
//! - **[`forms`]**: validation for the item and recipe forms, and the
//!   password meter.
//! - **[`session`]**: the shared login session and its on-disk token.
//! - **[`reports`]**: CSV export, JSON and terminal tables.
//! - **[`client`]**: blocking REST clients (feature `client`, on by default).
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Getting Started
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pantry_tools::{DerivedView, PantryItem, ViewParameters};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
//! let items = vec![
//!     PantryItem::new("Cheddar Cheese", 0.4, "kg", "2024-06-04").unwrap(),
//!     PantryItem::new("Basmati Rice", 5.0, "kg", "2025-01-01").unwrap(),
//! ];
//!
//! let view = DerivedView::compute(&items, &ViewParameters::default(), now);
//! assert_eq!(view.counts.total, 2);
//! assert_eq!(view.counts.expiring_soon, 1);
//! assert_eq!(view.counts.categories, 2);
//! ```
//!
//! ### Exporting
//!
//! ```
//! use pantry_tools::{reports::to_delimited_text, PantryItem};
//!
//! let items = vec![PantryItem::new("Milk", 1.0, "l", "2024-06-03").unwrap()];
//! let csv = to_delimited_text(&items);
//! assert_eq!(csv.lines().nth(1), Some("\"Milk\",1,l,2024-06-03,"));
//! ```

#[cfg(feature = "client")]
pub mod cli;
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod model;
pub mod output;
pub mod pantry;
pub mod reports;
pub mod session;
pub mod view;

pub use error::{ErrorContext, PantryError, Result};
pub use forms::{PantryItemForm, RecipeForm};
pub use model::{
    classify, AiRecipe, Category, Difficulty, PantryItem, PantryItemRequest, Recipe,
    RecipeGenerationRequest,
};
pub use pantry::{InMemoryPantry, PantryPage, PantrySource};
pub use reports::{ReportFormat, TableReporter};
pub use session::{SessionContext, SessionStore};
pub use view::{
    CategoryFilter, DerivedView, ExpiryBucket, ItemSummary, PantryCounts, SortKey, StockLevel,
    SuggestionBoard, ViewParameters,
};

#[cfg(feature = "client")]
pub use client::{AiChefClient, ApiClient, ApiClientConfig, AuthClient, PantryClient, RecipeClient};
