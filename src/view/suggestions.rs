//! AI chef suggestion board.

use crate::error::{PantryError, Result};
use crate::model::{AiRecipe, Confidence, ConfidenceFilter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Suggestions gathered over a session, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBoard {
    pub recipes: Vec<AiRecipe>,
    #[serde(skip)]
    pub filter: ConfidenceFilter,
}

/// Aggregates shown above the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionStats {
    pub generated_recipes: usize,
    /// Mean preparation time in minutes, rounded
    pub avg_time: u32,
    pub ingredients_used: usize,
    pub high_confidence: usize,
}

impl SuggestionBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a fresh batch, keeping its internal order.
    pub fn add(&mut self, batch: Vec<AiRecipe>) {
        tracing::debug!("Adding {} suggestions", batch.len());
        let older = std::mem::replace(&mut self.recipes, batch);
        self.recipes.extend(older);
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    pub fn set_filter(&mut self, filter: ConfidenceFilter) {
        self.filter = filter;
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&AiRecipe> {
        self.recipes
            .iter()
            .filter(|recipe| self.filter.matches(recipe))
            .collect()
    }

    /// `None` while the board is empty.
    #[must_use]
    pub fn stats(&self) -> Option<SuggestionStats> {
        if self.recipes.is_empty() {
            return None;
        }
        let count = self.recipes.len();
        let total_time: u64 = self
            .recipes
            .iter()
            .map(|r| u64::from(r.preparation_time))
            .sum();

        Some(SuggestionStats {
            generated_recipes: count,
            avg_time: (total_time as f64 / count as f64).round() as u32,
            ingredients_used: self.recipes.iter().map(AiRecipe::pantry_ingredients_used).sum(),
            high_confidence: self
                .recipes
                .iter()
                .filter(|r| r.confidence() == Some(Confidence::High))
                .count(),
        })
    }

    /// Load a saved board; a missing file is an empty board.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| PantryError::io(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| PantryError::parse("saved suggestions", e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PantryError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| PantryError::io(path, e))
    }
}
