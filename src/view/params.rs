//! User-controlled view parameters.

use crate::model::Category;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordering applied to the filtered item list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Name, ascending
    #[default]
    Name,
    /// Expiry date, soonest first
    Expiry,
    /// Added date, most recent first
    Added,
    /// Quantity, largest first
    Quantity,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Expiry => write!(f, "expiry"),
            Self::Added => write!(f, "added"),
            Self::Quantity => write!(f, "quantity"),
        }
    }
}

/// Category selection: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl JsonSchema for CategoryFilter {
    fn schema_name() -> String {
        "CategoryFilter".to_string()
    }

    fn json_schema(generator: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

/// Search text, category selection and sort key.
///
/// Owned by the presentation layer and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParameters {
    /// Case-insensitive substring of the item name; empty matches everything
    pub search_query: String,
    pub selected_category: CategoryFilter,
    pub sort_by: SortKey,
}

impl ViewParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn searching(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    #[must_use]
    pub fn in_category(mut self, filter: CategoryFilter) -> Self {
        self.selected_category = filter;
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }
}
