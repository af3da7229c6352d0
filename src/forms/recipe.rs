//! Create-recipe form.

use super::pantry::MIN_QUANTITY;
use crate::error::ValidationErrors;
use crate::model::{CreateRecipeRequest, Difficulty, RecipeIngredient, Visibility};
use serde::{Deserialize, Serialize};

/// One ingredient line of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientRow {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Default for IngredientRow {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1.0,
            unit: String::new(),
        }
    }
}

/// Recipe form. Also readable from a YAML or JSON file, with unset fields
/// taking their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    /// Empty means no image
    pub image_url: String,
    pub preparation_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub visibility: Visibility,
    pub ingredients: Vec<IngredientRow>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            preparation_time: 30,
            servings: 4,
            difficulty: Difficulty::Medium,
            visibility: Visibility::Public,
            ingredients: vec![IngredientRow::default()],
            instructions: vec![String::new()],
            tags: Vec::new(),
        }
    }
}

impl RecipeForm {
    /// Add a trimmed tag; blank input is ignored.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() {
            self.tags.push(tag.to_string());
        }
    }

    /// Remove an instruction step, always keeping at least one.
    pub fn remove_instruction(&mut self, index: usize) {
        if self.instructions.len() > 1 && index < self.instructions.len() {
            self.instructions.remove(index);
        }
    }

    pub fn validate(&self) -> Result<CreateRecipeRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.title.trim().is_empty() {
            errors.push("title", "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.push("description", "Description is required");
        }
        if self.preparation_time < 1 {
            errors.push("preparationTime", "Preparation time must be at least 1 minute");
        }
        if self.servings < 1 {
            errors.push("servings", "Servings must be at least 1");
        }

        if self.ingredients.is_empty() {
            errors.push("ingredients", "At least one ingredient is required");
        }
        for (i, row) in self.ingredients.iter().enumerate() {
            if row.name.trim().is_empty() {
                errors.push(format!("ingredients[{i}].name"), "Name is required");
            }
            if !row.quantity.is_finite() || row.quantity < MIN_QUANTITY {
                errors.push(
                    format!("ingredients[{i}].quantity"),
                    format!("Quantity must be at least {MIN_QUANTITY}"),
                );
            }
            if row.unit.trim().is_empty() {
                errors.push(format!("ingredients[{i}].unit"), "Unit is required");
            }
        }

        if self.instructions.is_empty() {
            errors.push("instructions", "At least one instruction is required");
        }
        for (i, step) in self.instructions.iter().enumerate() {
            if step.trim().is_empty() {
                errors.push(format!("instructions[{i}]"), "Step is required");
            }
        }

        errors.into_result(())?;

        let image_url = self.image_url.trim();
        Ok(CreateRecipeRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            preparation_time: self.preparation_time,
            servings: self.servings,
            difficulty: self.difficulty,
            visibility: self.visibility,
            ingredients: self
                .ingredients
                .iter()
                .map(|row| RecipeIngredient {
                    name: row.name.trim().to_string(),
                    quantity: row.quantity,
                    unit: row.unit.trim().to_string(),
                })
                .collect(),
            instructions: self
                .instructions
                .iter()
                .map(|s| s.trim().to_string())
                .collect(),
            cuisine: None,
            tags: self.tags.clone(),
            user_id: None,
        })
    }
}
