//! View-state tests over a realistic pantry snapshot.

use chrono::{DateTime, TimeZone, Utc};
use pantry_tools::model::{items_from_json, Category, PantryItem};
use pantry_tools::view::{
    category_breakdown, CategoryFilter, DerivedView, ExpiryBucket, ItemSummary, PantryCounts,
    SortKey, StockLevel, ViewParameters,
};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURE: &str = include_str!("fixtures/pantry.json");

fn items() -> Vec<PantryItem> {
    items_from_json(FIXTURE).expect("fixture parses")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

fn names(items: &[PantryItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

fn view(params: &ViewParameters) -> DerivedView {
    DerivedView::compute(&items(), params, now())
}

// ============================================================================
// Counts
// ============================================================================

mod counts {
    use super::*;

    #[test]
    fn test_header_counts() {
        assert_eq!(
            PantryCounts::compute(&items(), now()),
            PantryCounts {
                total: 10,
                expiring_soon: 6,
                low_stock: 6,
                categories: 7,
            }
        );
    }

    #[test]
    fn test_counts_ignore_view_parameters() {
        let narrowed = view(&ViewParameters::new().searching("milk"));
        assert_eq!(narrowed.filtered_items.len(), 1);
        assert_eq!(narrowed.counts.total, 10);
        assert_eq!(narrowed.expiring_items.len(), 5);
    }

    #[test]
    fn test_breakdown_in_first_seen_order() {
        let breakdown = category_breakdown(&items());
        let order: Vec<Category> = breakdown.keys().copied().collect();
        assert_eq!(
            order,
            [
                Category::Dairy,
                Category::Meat,
                Category::Grains,
                Category::Vegetables,
                Category::Fruits,
                Category::Spices,
                Category::Other,
            ]
        );
        assert_eq!(breakdown[&Category::Dairy], 4);
    }

    #[test]
    fn test_empty_pantry() {
        let empty = DerivedView::compute(&[], &ViewParameters::default(), now());
        assert!(empty.filtered_items.is_empty());
        assert!(empty.expiring_items.is_empty());
        assert_eq!(empty.counts, PantryCounts::default());
    }
}

// ============================================================================
// Filtering and sorting
// ============================================================================

mod pipeline {
    use super::*;

    #[test]
    fn test_default_is_name_order() {
        assert_eq!(
            names(&view(&ViewParameters::default()).filtered_items),
            [
                "Basmati Rice",
                "butter",
                "Cheddar Cheese",
                "Cherry Tomatoes",
                "Chicken Breast",
                "Greek Yogurt",
                "Green Apples",
                "Olive Oil",
                "Smoked Paprika",
                "Whole Milk",
            ]
        );
    }

    #[test]
    fn test_expiry_order() {
        let sorted = view(&ViewParameters::new().sorted_by(SortKey::Expiry)).filtered_items;
        assert_eq!(
            names(&sorted[..4]),
            ["Cheddar Cheese", "Chicken Breast", "Whole Milk", "Cherry Tomatoes"]
        );
        assert_eq!(sorted.last().unwrap().name, "Smoked Paprika");
    }

    #[test]
    fn test_added_order_puts_undated_last() {
        let sorted = view(&ViewParameters::new().sorted_by(SortKey::Added)).filtered_items;
        assert_eq!(sorted[0].name, "Green Apples");
        assert_eq!(sorted.last().unwrap().name, "Smoked Paprika");
    }

    #[test]
    fn test_quantity_order_is_stable() {
        let sorted = view(&ViewParameters::new().sorted_by(SortKey::Quantity)).filtered_items;
        assert_eq!(names(&sorted[..3]), ["Green Apples", "Basmati Rice", "Greek Yogurt"]);
        // Paprika and butter both hold 1; input order decides.
        let ones: Vec<&str> = sorted
            .iter()
            .filter(|i| i.quantity == 1.0)
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(ones, ["Smoked Paprika", "butter"]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let params = ViewParameters::new().searching("CH");
        assert_eq!(
            names(&view(&params).filtered_items),
            ["Cheddar Cheese", "Cherry Tomatoes", "Chicken Breast"]
        );

        let params = params.in_category(CategoryFilter::Only(Category::Dairy));
        assert_eq!(names(&view(&params).filtered_items), ["Cheddar Cheese"]);
    }

    #[test]
    fn test_other_is_a_selectable_category() {
        let params = ViewParameters::new().in_category(CategoryFilter::Only(Category::Other));
        assert_eq!(names(&view(&params).filtered_items), ["Olive Oil"]);
    }

    #[test]
    fn test_no_match() {
        let params = ViewParameters::new().searching("saffron");
        assert!(view(&params).filtered_items.is_empty());
    }
}

// ============================================================================
// Expiring subset and per-item summaries
// ============================================================================

mod expiry {
    use super::*;

    #[test]
    fn test_expiring_items_capped_and_sorted() {
        let expiring = view(&ViewParameters::default()).expiring_items;
        assert_eq!(
            names(&expiring),
            [
                "Chicken Breast",
                "Whole Milk",
                "Cherry Tomatoes",
                "Green Apples",
                "butter",
            ]
        );
    }

    #[test]
    fn test_expired_items_are_not_expiring() {
        let expiring = view(&ViewParameters::default()).expiring_items;
        assert!(expiring.iter().all(|i| i.name != "Cheddar Cheese"));
    }

    #[test]
    fn test_item_summaries() {
        let items = items();
        let milk = ItemSummary::for_item(&items[0], now());
        assert_eq!(milk.category, Category::Dairy);
        assert_eq!(milk.stock_level, StockLevel::VeryLow);
        assert_eq!(milk.expiry_bucket, ExpiryBucket::Critical);
        assert_eq!(milk.days_until, 2);
        assert!(milk.expiring_soon);
        // The server said false; the flag is recomputed from quantity.
        assert!(milk.running_low);

        let cheddar = ItemSummary::for_item(&items[8], now());
        assert_eq!(cheddar.expiry_bucket, ExpiryBucket::Expired);
        assert_eq!(cheddar.days_until, -2);
        assert!(!cheddar.expiring_soon);

        let rice = ItemSummary::for_item(&items[2], now());
        assert_eq!(rice.stock_level, StockLevel::Good);
        assert_eq!(rice.expiry_bucket, ExpiryBucket::Safe);
        assert!(!rice.running_low);
    }
}

// ============================================================================
// Two-item walkthrough
// ============================================================================

mod walkthrough {
    use super::*;

    #[test]
    fn test_milk_and_rice_by_expiry() {
        let midnight = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let items = vec![
            PantryItem::new("Milk", 0.3, "l", "2024-06-03").unwrap(),
            PantryItem::new("Rice", 5.0, "kg", "2024-06-21").unwrap(),
        ];
        let params = ViewParameters::new()
            .searching("")
            .in_category(CategoryFilter::All)
            .sorted_by(SortKey::Expiry);

        let view = DerivedView::compute(&items, &params, midnight);

        assert_eq!(names(&view.filtered_items), ["Milk", "Rice"]);
        assert_eq!(names(&view.expiring_items), ["Milk"]);
        assert_eq!(view.counts.low_stock, 1);
        assert_eq!(view.counts.categories, 2);
        assert_eq!(
            category_breakdown(&items).keys().copied().collect::<Vec<_>>(),
            [Category::Dairy, Category::Grains]
        );
    }
}
