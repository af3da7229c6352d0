//! CLI command handlers.
//!
//! `main.rs` parses arguments and calls into these; each handler takes a
//! [`CommandContext`] plus plain values so it can be driven from tests.

mod account;
mod chef;
mod context;
mod pantry;
mod recipes;

pub use account::{password_report, run_login, run_logout, run_register};
pub use chef::{run_chef, run_chef_clear, run_chef_history, run_chef_save, ChefRequest};
pub use context::CommandContext;
pub use pantry::{
    run_pantry_expiring, run_pantry_export, run_pantry_list, run_pantry_remove, run_pantry_save,
    run_pantry_show, run_pantry_stats, OutputArgs,
};
pub use recipes::{
    load_recipe_form, run_recipes_delete, run_recipes_list, run_recipes_save, run_recipes_show,
    run_recipes_suggested,
};
