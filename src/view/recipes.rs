//! Recipe browsing: search, difficulty filter, pagination and stats.

use crate::model::{Difficulty, Recipe};
use serde::Serialize;

/// Recipes per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Ratings at or above this count as popular.
pub const POPULAR_RATING: f64 = 4.5;

/// Search text plus an optional difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Matches title or description, case-insensitive
    pub search: String,
    pub difficulty: Option<Difficulty>,
}

impl RecipeQuery {
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let query = self.search.to_lowercase();
        let text_ok = query.is_empty()
            || recipe.title.to_lowercase().contains(&query)
            || recipe.description.to_lowercase().contains(&query);
        let difficulty_ok = self
            .difficulty
            .map_or(true, |wanted| recipe.difficulty == Some(wanted));
        text_ok && difficulty_ok
    }
}

/// Matching recipes in their original order.
#[must_use]
pub fn filter_recipes(recipes: &[Recipe], query: &RecipeQuery) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| query.matches(recipe))
        .cloned()
        .collect()
}

/// Page links around the current page: `[max(1, c-2), min(total, c+2)]`.
#[must_use]
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<usize> {
    let start = current.saturating_sub(2).max(1);
    let end = total_pages.min(current + 2);
    (start..=end).collect()
}

/// One-based page cursor over a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_size: usize,
    pub total_items: usize,
    pub current: usize,
}

impl Pagination {
    /// Starts on page 1. A zero page size falls back to [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            total_items,
            current: 1,
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Jump to a page, clamped into range.
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next(&mut self) {
        if self.current < self.total_pages() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// The slice of `items` on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.current - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    #[must_use]
    pub fn page_numbers(&self) -> Vec<usize> {
        page_numbers(self.current, self.total_pages())
    }
}

/// Summary counters over a recipe collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStats {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub popular: usize,
}

impl RecipeStats {
    #[must_use]
    pub fn compute(recipes: &[Recipe]) -> Self {
        let mut stats = Self {
            total: recipes.len(),
            ..Self::default()
        };
        for recipe in recipes {
            match recipe.difficulty {
                Some(Difficulty::Easy) => stats.easy += 1,
                Some(Difficulty::Medium) => stats.medium += 1,
                Some(Difficulty::Hard) => stats.hard += 1,
                None => {}
            }
            if recipe.rating >= POPULAR_RATING {
                stats.popular += 1;
            }
        }
        stats
    }

    #[must_use]
    pub const fn difficulty_count(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, description: &str, difficulty: Option<Difficulty>, rating: f64) -> Recipe {
        let mut recipe: Recipe = serde_json::from_str(r#"{"title":""}"#).unwrap();
        recipe.title = title.to_string();
        recipe.description = description.to_string();
        recipe.difficulty = difficulty;
        recipe.rating = rating;
        recipe
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let recipes = vec![
            recipe("Tomato Soup", "warming", Some(Difficulty::Easy), 4.0),
            recipe("Pasta", "with tomato sauce", Some(Difficulty::Medium), 4.8),
            recipe("Salad", "crisp", Some(Difficulty::Easy), 3.0),
        ];
        let query = RecipeQuery {
            search: "TOMATO".to_string(),
            difficulty: None,
        };
        assert_eq!(filter_recipes(&recipes, &query).len(), 2);

        let easy_tomato = RecipeQuery {
            difficulty: Some(Difficulty::Easy),
            ..query
        };
        let found = filter_recipes(&recipes, &easy_tomato);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Tomato Soup");
    }

    #[test]
    fn test_page_numbers_window() {
        assert_eq!(page_numbers(1, 10), [1, 2, 3]);
        assert_eq!(page_numbers(5, 10), [3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(10, 10), [8, 9, 10]);
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_pagination_clamps_and_slices() {
        let items: Vec<usize> = (0..25).collect();
        let mut pages = Pagination::new(items.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(pages.total_pages(), 3);

        pages.go_to(99);
        assert_eq!(pages.current, 3);
        assert_eq!(pages.slice(&items), [24]);

        pages.next();
        assert_eq!(pages.current, 3);
        pages.go_to(0);
        assert_eq!(pages.current, 1);
        pages.prev();
        assert_eq!(pages.current, 1);
        assert_eq!(pages.slice(&items).len(), 12);
    }

    #[test]
    fn test_stats() {
        let recipes = vec![
            recipe("a", "", Some(Difficulty::Easy), 4.5),
            recipe("b", "", Some(Difficulty::Hard), 4.49),
            recipe("c", "", None, 5.0),
        ];
        let stats = RecipeStats::compute(&recipes);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.difficulty_count(Difficulty::Easy), 1);
        assert_eq!(stats.difficulty_count(Difficulty::Medium), 0);
        assert_eq!(stats.hard, 1);
        assert_eq!(stats.popular, 2);
    }
}
