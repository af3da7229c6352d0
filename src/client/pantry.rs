//! Pantry service endpoints.

use super::http::{ApiClient, Auth};
use crate::error::Result;
use crate::model::{PantryItem, PantryItemRequest};
use crate::pantry::PantrySource;
use reqwest::Method;

/// REST-backed [`PantrySource`]. Every call needs a logged-in session.
#[derive(Debug, Clone)]
pub struct PantryClient {
    api: ApiClient,
}

impl PantryClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn get_item(&self, id: i64) -> Result<PantryItem> {
        self.api.get_json(
            &format!("/api/pantry/items/getItemById/{id}"),
            &[],
            Auth::Required,
            "fetching item",
        )
    }

    /// The server's own view of expiring items.
    pub fn server_expiring_items(&self) -> Result<Vec<PantryItem>> {
        self.api.get_json(
            "/api/pantry/items/expiring",
            &[],
            Auth::Required,
            "listing expiring items",
        )
    }
}

impl PantrySource for PantryClient {
    fn list_items(&self) -> Result<Vec<PantryItem>> {
        self.api
            .get_json("/api/pantry/items", &[], Auth::Required, "listing items")
    }

    fn create_item(&self, request: &PantryItemRequest) -> Result<PantryItem> {
        self.api.send_json(
            Method::POST,
            "/api/pantry/items/addItem",
            request,
            Auth::Required,
            "adding item",
        )
    }

    fn update_item(&self, id: i64, request: &PantryItemRequest) -> Result<PantryItem> {
        self.api.send_json(
            Method::PUT,
            &format!("/api/pantry/items/updateItem/{id}"),
            request,
            Auth::Required,
            "updating item",
        )
    }

    fn remove_item(&self, id: i64) -> Result<()> {
        self.api
            .delete(&format!("/api/pantry/deletePantry/{id}"), "removing item")
    }

    fn name(&self) -> &'static str {
        "REST"
    }
}
