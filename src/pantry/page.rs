//! Pantry page controller.
//!
//! Holds the last successfully fetched item list and the current view
//! parameters. Rendering state is never cached; callers ask for
//! [`PantryPage::view`] after any change.

use super::source::PantrySource;
use crate::error::{ErrorContext, Result};
use crate::forms::PantryItemForm;
use crate::model::PantryItem;
use crate::reports::to_delimited_text;
use crate::view::{CategoryFilter, DerivedView, ItemSummary, SortKey, ViewParameters};
use chrono::{DateTime, Utc};

pub struct PantryPage<S: PantrySource> {
    source: S,
    items: Vec<PantryItem>,
    params: ViewParameters,
}

impl<S: PantrySource> PantryPage<S> {
    /// An empty page; call [`reload`](Self::reload) to fetch items.
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: Vec::new(),
            params: ViewParameters::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: ViewParameters) -> Self {
        self.params = params;
        self
    }

    /// Replace the item list with a fresh fetch.
    ///
    /// On failure the previous list stays in place and the error is logged
    /// and returned. Calls take `&mut self`, so the last completed reload
    /// is the one that sticks.
    pub fn reload(&mut self) -> Result<usize> {
        let items = self
            .source
            .list_items()
            .inspect_err(|e| {
                tracing::warn!(
                    "Error loading pantry items from {}: {e}; keeping {} cached items",
                    self.source.name(),
                    self.items.len()
                );
            })
            .context("loading pantry items")?;
        tracing::debug!("Loaded {} items from {}", items.len(), self.source.name());
        self.items = items;
        Ok(self.items.len())
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.params.search_query = query.into();
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.params.selected_category = filter;
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.params.sort_by = key;
    }

    /// Validate the form, then create (no id) or update (with id) and reload.
    ///
    /// Nothing is sent when validation fails.
    pub fn save(&mut self, form: &PantryItemForm, editing_id: Option<i64>) -> Result<PantryItem> {
        let request = form.validate()?;
        let saved = match editing_id {
            Some(id) => self
                .source
                .update_item(id, &request)
                .with_context(|| format!("updating item {id}"))?,
            None => self.source.create_item(&request).context("adding item")?,
        };
        self.refresh();
        Ok(saved)
    }

    /// Remove an item, then reload.
    pub fn remove(&mut self, id: i64) -> Result<()> {
        self.source
            .remove_item(id)
            .with_context(|| format!("removing item {id}"))?;
        self.refresh();
        Ok(())
    }

    /// Current derived state.
    #[must_use]
    pub fn view(&self, now: DateTime<Utc>) -> DerivedView {
        DerivedView::compute(&self.items, &self.params, now)
    }

    #[must_use]
    pub fn summary(&self, id: i64, now: DateTime<Utc>) -> Option<ItemSummary> {
        self.items
            .iter()
            .find(|item| item.id == Some(id))
            .map(|item| ItemSummary::for_item(item, now))
    }

    /// Export of the full, unfiltered list.
    #[must_use]
    pub fn export(&self) -> String {
        to_delimited_text(&self.items)
    }

    /// Reload after a mutation that already succeeded. A failed reload was
    /// logged by [`Self::reload`] and leaves the previous list in place.
    fn refresh(&mut self) {
        if self.reload().is_err() {
            tracing::debug!("showing {} cached items after mutation", self.items.len());
        }
    }
}
