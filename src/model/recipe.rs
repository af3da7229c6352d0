//! Recipes as served by the recipe service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Recipe difficulty.
///
/// The recipe service speaks `EASY`/`MEDIUM`/`HARD`; the AI chef speaks
/// lowercase. Both spellings are accepted on input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    #[serde(alias = "easy", alias = "Easy")]
    Easy,
    #[serde(alias = "medium", alias = "Medium")]
    Medium,
    #[serde(alias = "hard", alias = "Hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Title-cased label ("Easy").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Lowercase wire spelling used by the AI chef.
    #[must_use]
    pub const fn as_lower(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_lower().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty '{s}' (expected easy, medium or hard)"))
    }
}

/// Who can see a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    #[default]
    #[serde(alias = "public")]
    Public,
    #[serde(alias = "private")]
    Private,
}

impl Visibility {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub preparation_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u32,
}

impl Recipe {
    /// Difficulty label, "Unknown" when the service left it out.
    #[must_use]
    pub fn difficulty_text(&self) -> &'static str {
        self.difficulty.as_ref().map_or("Unknown", Difficulty::label)
    }
}

/// Body for creating (or updating) a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub preparation_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub visibility: Visibility,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
