//! Recipe service endpoints.

use super::http::{ApiClient, Auth};
use crate::error::Result;
use crate::model::{CreateRecipeRequest, Recipe};
use reqwest::Method;

/// Which recipe collection to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeScope {
    /// Everything visible to the signed-in user
    All,
    /// Visible without logging in
    Public,
    /// Recipes the signed-in user created
    Mine,
}

#[derive(Debug, Clone)]
pub struct RecipeClient {
    api: ApiClient,
}

impl RecipeClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `All` when logged in, `Public` otherwise.
    #[must_use]
    pub fn default_scope(&self) -> RecipeScope {
        if self.api.session().is_authenticated() {
            RecipeScope::All
        } else {
            RecipeScope::Public
        }
    }

    pub fn list(&self, scope: RecipeScope) -> Result<Vec<Recipe>> {
        match scope {
            RecipeScope::All => {
                self.api
                    .get_json("/api/recipes/all", &[], Auth::Required, "listing recipes")
            }
            RecipeScope::Public => self.api.get_json(
                "/api/recipes/public",
                &[],
                Auth::Anonymous,
                "listing public recipes",
            ),
            RecipeScope::Mine => self.api.get_json(
                "/api/recipes/my-recipes",
                &[],
                Auth::Required,
                "listing my recipes",
            ),
        }
    }

    pub fn get(&self, id: i64) -> Result<Recipe> {
        self.api.get_json(
            &format!("/api/recipes/getRecipeById/{id}"),
            &[],
            Auth::Required,
            "fetching recipe",
        )
    }

    pub fn create(&self, recipe: &CreateRecipeRequest) -> Result<Recipe> {
        self.api.send_json(
            Method::POST,
            "/api/recipes/createRecipe",
            recipe,
            Auth::Required,
            "creating recipe",
        )
    }

    pub fn update(&self, id: i64, recipe: &CreateRecipeRequest) -> Result<Recipe> {
        self.api.send_json(
            Method::PUT,
            &format!("/api/recipes/updateRecipe/{id}"),
            recipe,
            Auth::Required,
            "updating recipe",
        )
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.api
            .delete(&format!("/api/recipes/deleteRecipe/{id}"), "deleting recipe")
    }

    /// Recipes the service matches against the pantry.
    pub fn suggestions(&self) -> Result<Vec<Recipe>> {
        self.api.get_json(
            "/api/recipes/suggestions",
            &[],
            Auth::Required,
            "fetching recipe suggestions",
        )
    }

    pub fn use_it_up(&self) -> Result<Vec<Recipe>> {
        self.api.get_json(
            "/api/recipes/use-it-up",
            &[],
            Auth::Required,
            "fetching use-it-up recipes",
        )
    }
}
