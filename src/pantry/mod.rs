//! Pantry data access and the page controller built on it.

mod page;
mod source;

pub use page::PantryPage;
pub use source::{InMemoryPantry, PantrySource};
