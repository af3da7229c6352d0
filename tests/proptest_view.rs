//! Property-based tests for the view-state engine.
//!
//! Random pantries and parameters; the invariants hold for any input.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use pantry_tools::model::{classify, PantryItem};
use pantry_tools::reports::to_delimited_text;
use pantry_tools::view::{
    apply, days_until, expiry_bucket, stock_level, CategoryFilter, DerivedView, ExpiryBucket,
    NameCollator, SortKey, StockLevel, ViewParameters, EXPIRING_ITEMS_LIMIT,
};
use proptest::prelude::*;
use std::cmp::Ordering;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn arb_item() -> impl Strategy<Value = PantryItem> {
    (
        "(Milk|Cheese|Beef|Onion|Apple|Rice|Cumin|Tea|Flour|Honey)[a-z ]{0,8}",
        0.0f64..20.0,
        -30i64..60,
        proptest::option::of(-200i64..0),
    )
        .prop_map(|(name, quantity, expiry_offset, added_offset)| {
            let mut item = PantryItem::new(name, quantity, "pcs", "2024-06-01").unwrap();
            item.expiry_date = base_date() + Duration::days(expiry_offset);
            item.added_date = added_offset.map(|d| base_date() + Duration::days(d));
            item
        })
}

/// Items drawn from small domains so that equal sort keys are common. Each
/// item's id is its input position.
fn arb_tied_items() -> impl Strategy<Value = Vec<PantryItem>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["Milk", "Rice", "Édam", "apple", "Apple"]),
            prop::sample::select(vec![0.5, 1.0, 2.0]),
            0i64..3,
            proptest::option::of(-3i64..0),
        ),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, quantity, expiry_offset, added_offset))| {
                let mut item = PantryItem::new(name, quantity, "pcs", "2024-06-01")
                    .unwrap()
                    .with_id(index as i64);
                item.expiry_date = base_date() + Duration::days(expiry_offset);
                item.added_date = added_offset.map(|d| base_date() + Duration::days(d));
                item
            })
            .collect()
    })
}

fn same_key(collator: &NameCollator, sort: SortKey, a: &PantryItem, b: &PantryItem) -> bool {
    match sort {
        SortKey::Name => collator.compare(&a.name, &b.name) == Ordering::Equal,
        SortKey::Expiry => a.expiry_date == b.expiry_date,
        SortKey::Added => a.added_date.unwrap_or_default() == b.added_date.unwrap_or_default(),
        SortKey::Quantity => a.quantity == b.quantity,
    }
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Name),
        Just(SortKey::Expiry),
        Just(SortKey::Added),
        Just(SortKey::Quantity),
    ]
}

fn arb_now() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..86_400).prop_map(|secs| {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn filtered_items_are_a_subset(
        items in prop::collection::vec(arb_item(), 0..30),
        search in "[a-z]{0,3}",
        sort in arb_sort(),
        now in arb_now(),
    ) {
        let params = ViewParameters::new().searching(search.clone()).sorted_by(sort);
        let view = DerivedView::compute(&items, &params, now);
        prop_assert!(view.filtered_items.len() <= items.len());
        for item in &view.filtered_items {
            prop_assert!(items.contains(item));
            prop_assert!(item.name.to_lowercase().contains(&search));
        }
    }

    #[test]
    fn sort_is_a_permutation(
        items in prop::collection::vec(arb_item(), 0..30),
        sort in arb_sort(),
    ) {
        let view = DerivedView::compute(&items, &ViewParameters::new().sorted_by(sort), Utc::now());
        prop_assert_eq!(view.filtered_items.len(), items.len());
        let mut before: Vec<String> = items.iter().map(|i| i.name.clone()).collect();
        let mut after: Vec<String> = view.filtered_items.iter().map(|i| i.name.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn sort_orders_by_key(
        items in prop::collection::vec(arb_item(), 0..30),
        sort in arb_sort(),
    ) {
        let collator = NameCollator::new();
        let sorted = DerivedView::compute(&items, &ViewParameters::new().sorted_by(sort), Utc::now())
            .filtered_items;
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match sort {
                SortKey::Name => prop_assert_ne!(collator.compare(&a.name, &b.name), Ordering::Greater),
                SortKey::Expiry => prop_assert!(a.expiry_date <= b.expiry_date),
                SortKey::Added => prop_assert!(a.added_date.unwrap_or_default() >= b.added_date.unwrap_or_default()),
                SortKey::Quantity => prop_assert!(a.quantity >= b.quantity),
            }
        }
    }

    #[test]
    fn sort_keeps_input_order_for_equal_keys(items in arb_tied_items(), sort in arb_sort()) {
        let collator = NameCollator::new();
        let sorted = apply(&items, &ViewParameters::new().sorted_by(sort));
        for (i, earlier) in sorted.iter().enumerate() {
            for later in &sorted[i + 1..] {
                if same_key(&collator, sort, earlier, later) {
                    prop_assert!(
                        earlier.id < later.id,
                        "{:?} swapped input positions {:?} and {:?}", sort, earlier.id, later.id
                    );
                }
            }
        }
    }

    #[test]
    fn apply_is_idempotent(
        items in prop::collection::vec(arb_item(), 0..30),
        search in "[a-z]{0,2}",
        pick in 0usize..8,
        sort in arb_sort(),
    ) {
        let category = pantry_tools::Category::ALL
            .get(pick)
            .map_or(CategoryFilter::All, |c| CategoryFilter::Only(*c));
        let params = ViewParameters::new()
            .searching(search)
            .in_category(category)
            .sorted_by(sort);
        let once = apply(&items, &params);
        prop_assert_eq!(&apply(&items, &params), &once);
        prop_assert_eq!(apply(&once, &params), once);
    }

    #[test]
    fn category_filter_only_keeps_that_category(
        items in prop::collection::vec(arb_item(), 0..30),
        pick in 0usize..7,
    ) {
        let category = pantry_tools::Category::ALL[pick];
        let params = ViewParameters::new().in_category(CategoryFilter::Only(category));
        let view = DerivedView::compute(&items, &params, Utc::now());
        let expected = items.iter().filter(|i| classify(&i.name) == category).count();
        prop_assert_eq!(view.filtered_items.len(), expected);
    }

    #[test]
    fn expiring_subset_invariants(
        items in prop::collection::vec(arb_item(), 0..30),
        now in arb_now(),
    ) {
        let view = DerivedView::compute(&items, &ViewParameters::default(), now);
        prop_assert!(view.expiring_items.len() <= EXPIRING_ITEMS_LIMIT);
        prop_assert!(view.expiring_items.len() <= view.counts.expiring_soon);
        prop_assert!(view.counts.expiring_soon <= view.counts.total);
        for pair in view.expiring_items.windows(2) {
            prop_assert!(pair[0].expiry_date <= pair[1].expiry_date);
        }
        for item in &view.expiring_items {
            let days = days_until(item.expiry_date, now);
            prop_assert!((0..=14).contains(&days), "{} days", days);
        }
    }

    #[test]
    fn counts_are_bounded(items in prop::collection::vec(arb_item(), 0..30)) {
        let view = DerivedView::compute(&items, &ViewParameters::default(), Utc::now());
        prop_assert_eq!(view.counts.total, items.len());
        prop_assert!(view.counts.low_stock <= items.len());
        prop_assert!(view.counts.categories <= 7);
        prop_assert_eq!(view.counts.categories == 0, items.is_empty());
    }

    #[test]
    fn classifiers_are_total(quantity in -5.0f64..50.0, offset in -400i64..400, now in arb_now()) {
        let level = stock_level(quantity);
        if quantity <= 0.5 {
            prop_assert_eq!(level, StockLevel::VeryLow);
        }
        if quantity > 3.0 {
            prop_assert_eq!(level, StockLevel::Good);
        }
        let expiry = base_date() + Duration::days(offset);
        let bucket = expiry_bucket(expiry, now);
        prop_assert_eq!(bucket == ExpiryBucket::Expired, days_until(expiry, now) < 0);
    }

    #[test]
    fn export_has_one_row_per_item(items in prop::collection::vec(arb_item(), 0..30)) {
        let csv = to_delimited_text(&items);
        prop_assert_eq!(csv.split('\n').count(), items.len() + 1);
    }

    #[test]
    fn export_rows_give_back_the_names(items in prop::collection::vec(arb_item(), 0..30)) {
        let csv = to_delimited_text(&items);
        let (header, body) = csv.split_once('\n').unwrap_or((csv.as_str(), ""));
        prop_assert_eq!(header, pantry_tools::reports::EXPORT_HEADER);
        let names: Vec<&str> = body
            .lines()
            .map(|row| row.split(',').next().unwrap_or_default().trim_matches('"'))
            .collect();
        let expected: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn classify_never_panics(name in "\\PC{0,40}") {
        let _ = classify(&name);
    }
}
