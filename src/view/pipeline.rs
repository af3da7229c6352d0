//! Search, category filter and sort over the raw item list.

use super::params::{SortKey, ViewParameters};
use crate::model::{classify, PantryItem};
use chrono::NaiveDate;
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;

/// Derive the display list for the given parameters.
///
/// Steps run in order and each is skipped when it does not apply: name
/// substring search (case-insensitive), category filter, then a stable sort.
/// Equal keys keep their input order.
#[must_use]
pub fn apply(items: &[PantryItem], params: &ViewParameters) -> Vec<PantryItem> {
    let query = params.search_query.to_lowercase();

    let mut filtered: Vec<PantryItem> = items
        .iter()
        .filter(|item| query.is_empty() || item.name.to_lowercase().contains(&query))
        .filter(|item| params.selected_category.matches(classify(&item.name)))
        .cloned()
        .collect();

    sort_items(&mut filtered, params.sort_by);
    filtered
}

/// Stable in-place sort by the given key.
pub fn sort_items(items: &mut [PantryItem], key: SortKey) {
    match key {
        SortKey::Name => {
            let collator = NameCollator::new();
            items.sort_by(|a, b| collator.compare(&a.name, &b.name));
        }
        SortKey::Expiry => items.sort_by_key(|item| item.expiry_date),
        SortKey::Added => items.sort_by(|a, b| added_or_epoch(b).cmp(&added_or_epoch(a))),
        SortKey::Quantity => items.sort_by(|a, b| b.quantity.total_cmp(&a.quantity)),
    }
}

/// Locale-aware name ordering (root locale, tertiary strength).
///
/// Accents and case are secondary and tertiary differences, so "Édam" sorts
/// between "apple" and "Zucchini", and "apple" precedes "Apple".
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    #[must_use]
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&Default::default(), options)
            .inspect_err(|e| tracing::warn!("collation data unavailable, sorting by code point: {e}"))
            .ok();
        Self { collator }
    }

    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameCollator")
            .field("locale_aware", &self.collator.is_some())
            .finish()
    }
}

/// Items without an added date sort as if added at the epoch.
fn added_or_epoch(item: &PantryItem) -> NaiveDate {
    item.added_date.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::view::CategoryFilter;

    fn item(name: &str, quantity: f64, expiry: &str) -> PantryItem {
        PantryItem::new(name, quantity, "pcs", expiry).unwrap()
    }

    fn names(items: &[PantryItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![
            item("Whole Milk", 1.0, "2024-01-05"),
            item("Rice", 1.0, "2024-01-05"),
            item("milk chocolate", 1.0, "2024-01-05"),
        ];
        let params = ViewParameters::new().searching("MILK");
        assert_eq!(names(&apply(&items, &params)), ["milk chocolate", "Whole Milk"]);
    }

    #[test]
    fn test_category_filter() {
        let items = vec![
            item("Cheddar Cheese", 1.0, "2024-01-05"),
            item("Pasta", 1.0, "2024-01-05"),
            item("Bread", 1.0, "2024-01-05"),
        ];
        let params = ViewParameters::new().in_category(CategoryFilter::Only(Category::Grains));
        assert_eq!(names(&apply(&items, &params)), ["Bread", "Pasta"]);
    }

    #[test]
    fn test_sort_name_folds_case() {
        let items = vec![
            item("banana", 1.0, "2024-01-05"),
            item("Apple", 1.0, "2024-01-05"),
            item("cherry", 1.0, "2024-01-05"),
        ];
        assert_eq!(
            names(&apply(&items, &ViewParameters::new())),
            ["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_sort_name_places_accented_names_by_base_letter() {
        let items = vec![
            item("Zucchini", 1.0, "2024-01-05"),
            item("Édam cheese", 1.0, "2024-01-05"),
            item("apple", 1.0, "2024-01-05"),
            item("crème fraîche", 1.0, "2024-01-05"),
        ];
        assert_eq!(
            names(&apply(&items, &ViewParameters::new())),
            ["apple", "crème fraîche", "Édam cheese", "Zucchini"]
        );
    }

    #[test]
    fn test_sort_name_breaks_case_ties_lowercase_first() {
        let collator = NameCollator::new();
        assert_eq!(collator.compare("apple", "Apple"), Ordering::Less);
        assert_eq!(collator.compare("apple", "apple"), Ordering::Equal);
        assert_eq!(collator.compare("éclair", "eclair"), Ordering::Greater);
    }

    #[test]
    fn test_sort_added_missing_is_oldest() {
        let d = |s: &str| crate::model::parse_item_date(s).unwrap();
        let items = vec![
            item("none", 1.0, "2024-01-05"),
            item("old", 1.0, "2024-01-05").with_added_date(d("2023-01-01")),
            item("new", 1.0, "2024-01-05").with_added_date(d("2024-01-01")),
        ];
        let params = ViewParameters::new().sorted_by(SortKey::Added);
        assert_eq!(names(&apply(&items, &params)), ["new", "old", "none"]);
    }

    #[test]
    fn test_sort_quantity_descending() {
        let items = vec![
            item("a", 0.5, "2024-01-05"),
            item("b", 3.0, "2024-01-05"),
            item("c", 1.5, "2024-01-05"),
        ];
        let params = ViewParameters::new().sorted_by(SortKey::Quantity);
        assert_eq!(names(&apply(&items, &params)), ["b", "c", "a"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(apply(&[], &ViewParameters::new().searching("x")).is_empty());
    }
}
