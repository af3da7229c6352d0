//! Aligned terminal tables.

use crate::model::{format_item_date, AiRecipe, Category, PantryItem, Recipe};
use crate::view::{ExpiryBucket, ItemSummary, Pagination, PantryCounts, StockLevel, SuggestionStats};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Table renderer for terminal output
pub struct TableReporter {
    colored: bool,
}

impl TableReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Pad to `width` columns first, then color, so escapes never count
    /// toward alignment.
    fn cell(&self, text: &str, width: usize, color: &str) -> String {
        ansi_color(&pad(text, width), color, self.colored)
    }

    fn header(&self, columns: &[(&str, usize)]) -> Vec<String> {
        let cells: Vec<String> = columns
            .iter()
            .map(|(title, width)| self.cell(title, *width, "bold"))
            .collect();
        let total: usize = columns.iter().map(|(_, w)| w + 1).sum();
        vec![cells.join(" ").trim_end().to_string(), "─".repeat(total)]
    }

    /// Item list with per-item classification.
    #[must_use]
    pub fn items(&self, items: &[PantryItem], now: DateTime<Utc>) -> String {
        if items.is_empty() {
            return "No pantry items.".to_string();
        }
        let mut lines = self.header(&[
            ("ID", 6),
            ("NAME", 28),
            ("QTY", 8),
            ("UNIT", 8),
            ("CATEGORY", 11),
            ("STOCK", 9),
            ("EXPIRES", 11),
            ("DAYS", 5),
            ("STATUS", 8),
        ]);

        for item in items {
            let summary = ItemSummary::for_item(item, now);
            let id = item.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());
            lines.push(
                [
                    pad(&id, 6),
                    pad(&item.name, 28),
                    pad(&item.quantity.to_string(), 8),
                    pad(&item.unit, 8),
                    pad(summary.category.label(), 11),
                    self.cell(summary.stock_level.label(), 9, stock_color(summary.stock_level)),
                    pad(&format_item_date(item.expiry_date), 11),
                    pad(&summary.days_until.to_string(), 5),
                    self.cell(summary.expiry_bucket.label(), 8, expiry_color(summary.expiry_bucket)),
                ]
                .join(" ")
                .trim_end()
                .to_string(),
            );
        }
        lines.join("\n")
    }

    /// Dashboard counters plus the per-category breakdown.
    #[must_use]
    pub fn stats(&self, counts: &PantryCounts, breakdown: &IndexMap<Category, usize>) -> String {
        let mut lines = vec![
            self.cell("Pantry", 0, "bold"),
            format!("  Total items:    {}", counts.total),
            format!(
                "  Expiring soon:  {}",
                self.count_color(counts.expiring_soon, "yellow")
            ),
            format!("  Low stock:      {}", self.count_color(counts.low_stock, "red")),
            format!("  Categories:     {}", counts.categories),
        ];
        if !breakdown.is_empty() {
            lines.push(String::new());
            lines.extend(self.header(&[("CATEGORY", 12), ("ITEMS", 6)]));
            for (category, count) in breakdown {
                lines.push(format!("{} {count}", pad(category.label(), 12)));
            }
        }
        lines.join("\n")
    }

    fn count_color(&self, count: usize, color: &str) -> String {
        if count == 0 {
            count.to_string()
        } else {
            ansi_color(&count.to_string(), color, self.colored)
        }
    }

    /// One page of recipes with a page footer.
    #[must_use]
    pub fn recipes(&self, recipes: &[Recipe], pagination: &Pagination) -> String {
        if recipes.is_empty() {
            return "No recipes found.".to_string();
        }
        let mut lines = self.header(&[
            ("ID", 6),
            ("TITLE", 34),
            ("DIFFICULTY", 10),
            ("TIME", 8),
            ("SERVES", 6),
            ("RATING", 6),
            ("VISIBILITY", 10),
        ]);
        for recipe in pagination.slice(recipes) {
            let id = recipe.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());
            lines.push(
                [
                    pad(&id, 6),
                    pad(&recipe.title, 34),
                    pad(recipe.difficulty_text(), 10),
                    pad(&format!("{} min", recipe.preparation_time), 8),
                    pad(&recipe.servings.to_string(), 6),
                    pad(&format!("{:.1}", recipe.rating), 6),
                    pad(recipe.visibility.label(), 10),
                ]
                .join(" ")
                .trim_end()
                .to_string(),
            );
        }

        let pages: Vec<String> = pagination
            .page_numbers()
            .iter()
            .map(|n| {
                if *n == pagination.current {
                    self.cell(&format!("[{n}]"), 0, "bold")
                } else {
                    n.to_string()
                }
            })
            .collect();
        lines.push(String::new());
        lines.push(format!(
            "Page {} of {} ({} recipes)  {}",
            pagination.current,
            pagination.total_pages(),
            pagination.total_items,
            pages.join(" ")
        ));
        lines.join("\n")
    }

    /// Full recipe card.
    #[must_use]
    pub fn recipe_detail(&self, recipe: &Recipe) -> String {
        let mut lines = vec![
            self.cell(&recipe.title, 0, "bold"),
            recipe.description.clone(),
            String::new(),
            format!(
                "{} · {} min · serves {} · {:.1} ({} ratings) · {}",
                recipe.difficulty_text(),
                recipe.preparation_time,
                recipe.servings,
                recipe.rating,
                recipe.rating_count,
                recipe.visibility.label()
            ),
            String::new(),
            self.cell("Ingredients", 0, "bold"),
        ];
        for ingredient in &recipe.ingredients {
            lines.push(format!(
                "  - {} {} {}",
                ingredient.quantity, ingredient.unit, ingredient.name
            ));
        }
        lines.push(String::new());
        lines.push(self.cell("Instructions", 0, "bold"));
        for (i, step) in recipe.instructions.iter().enumerate() {
            lines.push(format!("  {}. {step}", i + 1));
        }
        lines.join("\n")
    }

    /// Suggestion list headed by its stats.
    #[must_use]
    pub fn suggestions(&self, recipes: &[&AiRecipe], stats: Option<&SuggestionStats>) -> String {
        let mut lines = Vec::new();
        if let Some(stats) = stats {
            lines.push(format!(
                "{} recipes · avg {} min · {} pantry ingredients used · {} high confidence",
                stats.generated_recipes, stats.avg_time, stats.ingredients_used, stats.high_confidence
            ));
            lines.push(String::new());
        }
        if recipes.is_empty() {
            lines.push("No suggestions.".to_string());
            return lines.join("\n");
        }
        lines.extend(self.header(&[
            ("#", 3),
            ("TITLE", 34),
            ("CUISINE", 12),
            ("TIME", 8),
            ("CONFIDENCE", 10),
            ("MISSING", 7),
        ]));
        for (i, recipe) in recipes.iter().enumerate() {
            let (label, color) = match recipe.confidence() {
                Some(c) => (c.label(), confidence_color(c)),
                None => ("-", ""),
            };
            lines.push(
                [
                    pad(&(i + 1).to_string(), 3),
                    pad(&recipe.title, 34),
                    pad(&recipe.cuisine, 12),
                    pad(&format!("{} min", recipe.preparation_time), 8),
                    self.cell(label, 10, color),
                    pad(&recipe.missing_ingredient_count().to_string(), 7),
                ]
                .join(" ")
                .trim_end()
                .to_string(),
            );
        }
        lines.join("\n")
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

const fn stock_color(level: StockLevel) -> &'static str {
    match level {
        StockLevel::VeryLow => "red",
        StockLevel::Low => "yellow",
        StockLevel::Moderate | StockLevel::Good => "green",
    }
}

const fn expiry_color(bucket: ExpiryBucket) -> &'static str {
    match bucket {
        ExpiryBucket::Expired | ExpiryBucket::Critical => "red",
        ExpiryBucket::Warning => "yellow",
        ExpiryBucket::Safe => "green",
    }
}

const fn confidence_color(confidence: crate::model::Confidence) -> &'static str {
    match confidence {
        crate::model::Confidence::High => "green",
        crate::model::Confidence::Medium => "yellow",
        crate::model::Confidence::Low => "dim",
    }
}

/// Truncate to `width` display columns and pad with spaces. A zero width
/// leaves the text untouched.
fn pad(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let text = truncate(text, width);
    let used = UnicodeWidthStr::width(text.as_str());
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pad_counts_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        // Each CJK char is two columns wide.
        assert_eq!(UnicodeWidthStr::width(pad("米饭", 6).as_str()), 6);
        assert_eq!(pad("abcdef", 4), "abc…");
    }

    #[test]
    fn test_items_table_plain() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let items = vec![PantryItem::new("Milk", 0.3, "l", "2024-06-03")
            .unwrap()
            .with_id(4)];
        let table = TableReporter::new().no_color().items(&items, now);
        assert!(!table.contains('\x1b'));
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with("4      Milk"), "{row}");
        assert!(row.contains("Very Low"));
        assert!(row.ends_with("critical"), "{row}");
    }

    #[test]
    fn test_colored_cells_keep_alignment() {
        let reporter = TableReporter::new();
        let cell = reporter.cell("Low", 6, "yellow");
        assert_eq!(cell, "\x1b[33mLow   \x1b[0m");
    }

    #[test]
    fn test_empty_tables() {
        let reporter = TableReporter::new().no_color();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(reporter.items(&[], now), "No pantry items.");
        assert_eq!(
            reporter.recipes(&[], &Pagination::new(0, 12)),
            "No recipes found."
        );
        assert_eq!(reporter.suggestions(&[], None), "No suggestions.");
    }
}
