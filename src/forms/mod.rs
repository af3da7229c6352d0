//! Client-side form validation.
//!
//! Forms are checked before any request is sent. A rejected form yields a
//! [`ValidationErrors`](crate::error::ValidationErrors) naming every bad field.

mod pantry;
mod password;
mod recipe;

pub use pantry::{PantryItemForm, MIN_QUANTITY};
pub use password::{password_strength, PasswordChecks, PasswordStrength};
pub use recipe::{IngredientRow, RecipeForm};
