//! Blocking REST clients for the recipe platform.
//!
//! Every client shares one [`ApiClient`], which carries the HTTP connection
//! pool and the [`SessionContext`](crate::session::SessionContext) used for
//! the `Authorization` and `User-Id` headers.

mod ai_chef;
mod auth;
mod http;
mod pantry;
mod recipes;

pub use ai_chef::AiChefClient;
pub use auth::AuthClient;
pub use http::{ApiClient, ApiClientConfig, Auth};
pub use pantry::PantryClient;
pub use recipes::{RecipeClient, RecipeScope};
