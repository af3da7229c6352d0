//! Keyword-based ingredient categories.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ingredient category derived from an item name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Category {
    Dairy,
    Meat,
    Vegetables,
    Fruits,
    Grains,
    Spices,
    Other,
}

/// Keyword table in priority order. The first category with a matching
/// keyword wins, so `pepper` always lands in `Vegetables`.
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Dairy, &["milk", "cheese", "yogurt", "butter", "egg"]),
    (Category::Meat, &["chicken", "beef", "pork", "fish"]),
    (
        Category::Vegetables,
        &["tomato", "onion", "garlic", "pepper", "carrot"],
    ),
    (
        Category::Fruits,
        &["apple", "banana", "orange", "berry", "strawberry"],
    ),
    (Category::Grains, &["rice", "pasta", "flour", "bread"]),
    (Category::Spices, &["salt", "pepper", "cumin", "paprika"]),
];

impl Category {
    /// Every category, `Other` last.
    pub const ALL: [Self; 7] = [
        Self::Dairy,
        Self::Meat,
        Self::Vegetables,
        Self::Fruits,
        Self::Grains,
        Self::Spices,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Vegetables => "Vegetables",
            Self::Fruits => "Fruits",
            Self::Grains => "Grains",
            Self::Spices => "Spices",
            Self::Other => "Other",
        }
    }

    /// Keywords that select this category (empty for `Other`).
    #[must_use]
    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(category, _)| category == self)
            .map_or(&[], |(_, words)| *words)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Category::label).collect();
                format!("unknown category '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Classify an item by name.
///
/// Case-insensitive substring match against the keyword table. Total: any
/// input, including the empty string, yields a category.
#[must_use]
pub fn classify(item_name: &str) -> Category {
    let name = item_name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| name.contains(w)))
        .map_or(Category::Other, |(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_category() {
        assert_eq!(classify("Whole Milk"), Category::Dairy);
        assert_eq!(classify("Free-range EGGS"), Category::Dairy);
        assert_eq!(classify("chicken thighs"), Category::Meat);
        assert_eq!(classify("Cherry Tomatoes"), Category::Vegetables);
        assert_eq!(classify("Frozen Blueberry Mix"), Category::Fruits);
        // Plural "berries" does not contain "berry".
        assert_eq!(classify("Blueberries"), Category::Other);
        assert_eq!(classify("Basmati Rice"), Category::Grains);
        assert_eq!(classify("Smoked Paprika"), Category::Spices);
        assert_eq!(classify("Olive Oil"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }

    #[test]
    fn test_first_match_wins() {
        // "pepper" is listed under both; Vegetables comes first.
        assert_eq!(classify("black pepper"), Category::Vegetables);
        // "butter" (Dairy) beats "bread" (Grains)
        assert_eq!(classify("bread and butter"), Category::Dairy);
        // "peanut butter" still reads as Dairy
        assert_eq!(classify("Peanut Butter"), Category::Dairy);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("dairy".parse::<Category>(), Ok(Category::Dairy));
        assert_eq!(" SPICES ".parse::<Category>(), Ok(Category::Spices));
        assert!("Beverages".parse::<Category>().is_err());
    }

    #[test]
    fn test_keywords_lookup() {
        assert!(Category::Grains.keywords().contains(&"pasta"));
        assert!(Category::Other.keywords().is_empty());
    }
}
