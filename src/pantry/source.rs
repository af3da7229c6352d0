//! Where pantry items come from.

use crate::error::{ErrorContext, PantryError, Result};
use crate::model::{items_from_json, PantryItem, PantryItemRequest};
use chrono::Utc;
use std::path::Path;
use std::sync::Mutex;

/// Fetch and mutate the item collection.
///
/// Implemented by the REST client and by [`InMemoryPantry`]. Every call is
/// a single request; none is retried here.
pub trait PantrySource: Send + Sync {
    /// The full item list, in server order.
    fn list_items(&self) -> Result<Vec<PantryItem>>;

    fn create_item(&self, request: &PantryItemRequest) -> Result<PantryItem>;

    fn update_item(&self, id: i64, request: &PantryItemRequest) -> Result<PantryItem>;

    fn remove_item(&self, id: i64) -> Result<()>;

    /// Short label for log lines (e.g. "REST", "memory").
    fn name(&self) -> &'static str;
}

impl<S: PantrySource + ?Sized> PantrySource for Box<S> {
    fn list_items(&self) -> Result<Vec<PantryItem>> {
        (**self).list_items()
    }

    fn create_item(&self, request: &PantryItemRequest) -> Result<PantryItem> {
        (**self).create_item(request)
    }

    fn update_item(&self, id: i64, request: &PantryItemRequest) -> Result<PantryItem> {
        (**self).update_item(id, request)
    }

    fn remove_item(&self, id: i64) -> Result<()> {
        (**self).remove_item(id)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// An item list held in memory, optionally seeded from a JSON snapshot.
///
/// New items get the next free id and today's date as their added date.
#[derive(Debug, Default)]
pub struct InMemoryPantry {
    items: Mutex<Vec<PantryItem>>,
}

impl InMemoryPantry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_items(items: Vec<PantryItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Seed from a file holding the list endpoint's JSON array.
    pub fn from_snapshot(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| PantryError::io(path, e))?;
        let items = items_from_json(&json).with_context(|| path.display().to_string())?;
        tracing::debug!("Loaded {} items from {}", items.len(), path.display());
        Ok(Self::with_items(items))
    }

    /// Write the current items back in the snapshot format.
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let json = {
            let items = self.items.lock().expect("pantry lock poisoned");
            serde_json::to_string_pretty(&*items)?
        };
        std::fs::write(path, json).map_err(|e| PantryError::io(path, e))?;
        tracing::debug!("Saved pantry snapshot to {}", path.display());
        Ok(())
    }

    fn next_id(items: &[PantryItem]) -> i64 {
        items.iter().filter_map(|item| item.id).max().unwrap_or(0) + 1
    }

    fn not_found(context: &str, id: i64) -> PantryError {
        PantryError::api_status(context, 404, format!("no pantry item with id {id}"))
    }
}

impl PantrySource for InMemoryPantry {
    fn list_items(&self) -> Result<Vec<PantryItem>> {
        Ok(self.items.lock().expect("pantry lock poisoned").clone())
    }

    fn create_item(&self, request: &PantryItemRequest) -> Result<PantryItem> {
        let mut items = self.items.lock().expect("pantry lock poisoned");
        let item = request
            .clone()
            .into_item()
            .with_id(Self::next_id(&items))
            .with_added_date(Utc::now().date_naive());
        items.push(item.clone());
        Ok(item)
    }

    fn update_item(&self, id: i64, request: &PantryItemRequest) -> Result<PantryItem> {
        let mut items = self.items.lock().expect("pantry lock poisoned");
        let slot = items
            .iter_mut()
            .find(|item| item.id == Some(id))
            .ok_or_else(|| Self::not_found("updating item", id))?;
        slot.name.clone_from(&request.name);
        slot.quantity = request.quantity;
        slot.unit.clone_from(&request.unit);
        slot.expiry_date = request.expiry_date;
        Ok(slot.clone())
    }

    fn remove_item(&self, id: i64) -> Result<()> {
        let mut items = self.items.lock().expect("pantry lock poisoned");
        let before = items.len();
        items.retain(|item| item.id != Some(id));
        if items.len() == before {
            return Err(Self::not_found("removing item", id));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
