//! Data model shared by the view engine, the REST clients and the CLI.
//!
//! Pantry items carry strongly typed calendar dates: unparseable dates are
//! rejected at the boundary (see [`parse_item_date`]) rather than compared as
//! sentinels later on.

mod category;
mod date;
mod pantry;
mod recipe;
mod suggestion;
mod user;

pub use category::{classify, Category};
pub use date::{format_item_date, item_date, parse_item_date, start_of_day, DATE_FORMAT};
pub use pantry::{check_quantity, items_from_json, PantryItem, PantryItemRequest};
pub use recipe::{CreateRecipeRequest, Difficulty, Recipe, RecipeIngredient, Visibility};
pub use suggestion::{
    AiRecipe, Confidence, ConfidenceFilter, RecipeGenerationRequest, RecipeGenerationResponse,
    HIGH_CONFIDENCE, MEDIUM_CONFIDENCE,
};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
