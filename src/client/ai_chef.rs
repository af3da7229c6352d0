//! AI chef endpoints. The service does the generation; this is a passthrough.

use super::http::{ApiClient, Auth};
use crate::error::Result;
use crate::model::{RecipeGenerationRequest, RecipeGenerationResponse};
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct AiChefClient {
    api: ApiClient,
}

impl AiChefClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn generate(&self, request: &RecipeGenerationRequest) -> Result<RecipeGenerationResponse> {
        self.api.send_json(
            Method::POST,
            "/api/ai/generate-recipes",
            request,
            Auth::Required,
            "generating recipes",
        )
    }

    /// Quick ideas; both filters are optional and omitted when unset.
    pub fn quick_suggestions(
        &self,
        meal_type: Option<&str>,
        max_time: Option<u32>,
    ) -> Result<RecipeGenerationResponse> {
        let mut query = Vec::new();
        if let Some(meal_type) = meal_type.filter(|m| !m.is_empty()) {
            query.push(("mealType", meal_type.to_string()));
        }
        if let Some(max_time) = max_time.filter(|t| *t > 0) {
            query.push(("maxTime", max_time.to_string()));
        }
        self.api.get_json(
            "/api/ai/quick-suggestions",
            &query,
            Auth::Required,
            "fetching quick suggestions",
        )
    }

    /// Recipes built around items close to expiry.
    pub fn use_it_up(&self) -> Result<RecipeGenerationResponse> {
        self.api.get_json(
            "/api/ai/use-it-up",
            &[],
            Auth::Required,
            "fetching use-it-up suggestions",
        )
    }
}
