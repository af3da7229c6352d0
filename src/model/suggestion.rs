//! AI chef recipe suggestions.

use super::recipe::{CreateRecipeRequest, Difficulty, RecipeIngredient, Visibility};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Score at or above which a suggestion counts as high confidence.
pub const HIGH_CONFIDENCE: f64 = 0.7;
/// Score at or above which a suggestion counts as medium confidence.
pub const MEDIUM_CONFIDENCE: f64 = 0.4;

/// Image attached to suggestions saved into the recipe collection.
const SAVED_SUGGESTION_IMAGE: &str = "https://i.insider.com/67af9ba27bb3f854015cfbef?width=700";

/// Bucketed fit of a suggestion to the pantry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Bucket a 0-1 score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_CONFIDENCE {
            Self::High
        } else if score >= MEDIUM_CONFIDENCE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recipe proposed by the AI chef.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub preparation_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub cuisine: String,
    /// 0.0 to 1.0; absent when the model did not score the recipe
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
}

impl AiRecipe {
    /// `None` when the suggestion carries no score; such suggestions match
    /// no confidence bucket.
    #[must_use]
    pub fn confidence(&self) -> Option<Confidence> {
        self.confidence_score.map(Confidence::from_score)
    }

    #[must_use]
    pub fn missing_ingredient_count(&self) -> usize {
        self.missing_ingredients.len()
    }

    /// Ingredients this recipe takes from the pantry.
    #[must_use]
    pub fn pantry_ingredients_used(&self) -> usize {
        self.ingredients
            .len()
            .saturating_sub(self.missing_ingredient_count())
    }

    /// Turn a suggestion into a recipe the user can keep.
    #[must_use]
    pub fn to_create_request(&self, user_id: &str) -> CreateRecipeRequest {
        let difficulty = self.difficulty.unwrap_or(Difficulty::Medium);
        let mut tags = vec!["ai-generated".to_string()];
        if !self.cuisine.is_empty() {
            tags.push(self.cuisine.to_lowercase());
        }
        tags.push(difficulty.as_lower().to_string());

        CreateRecipeRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: Some(SAVED_SUGGESTION_IMAGE.to_string()),
            preparation_time: self.preparation_time,
            servings: self.servings,
            difficulty,
            visibility: Visibility::Public,
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            cuisine: (!self.cuisine.is_empty()).then(|| self.cuisine.clone()),
            tags,
            user_id: (!user_id.is_empty()).then(|| user_id.to_string()),
        }
    }
}

/// Custom generation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGenerationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_preparation_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Lowercase difficulty ("easy")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl RecipeGenerationRequest {
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty.as_lower().to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGenerationResponse {
    #[serde(default)]
    pub generation_id: String,
    #[serde(default)]
    pub recipe_count: usize,
    #[serde(default)]
    pub suggestions: Vec<AiRecipe>,
    #[serde(default)]
    pub timestamp: i64,
}

/// Which suggestions to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfidenceFilter {
    #[default]
    All,
    Only(Confidence),
}

impl ConfidenceFilter {
    #[must_use]
    pub fn matches(&self, recipe: &AiRecipe) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => recipe.confidence() == Some(*wanted),
        }
    }
}

impl FromStr for ConfidenceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "high" => Ok(Self::Only(Confidence::High)),
            "medium" => Ok(Self::Only(Confidence::Medium)),
            "low" => Ok(Self::Only(Confidence::Low)),
            _ => Err(format!(
                "unknown confidence filter '{s}' (expected all, high, medium or low)"
            )),
        }
    }
}
