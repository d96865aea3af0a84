//! Packing list application coordinator.
//!
//! # Responsibility
//! - Own the list store, entry form, id allocator and active sort criterion.
//! - Translate view intents (submit, edit, toggle, delete, clear, sort) into
//!   store mutations.
//!
//! # Invariants
//! - Rejected submissions never reach the store.
//! - Unknown ids are silent no-ops for every intent.
//! - The store's order is only changed by add/delete/clear.

use crate::model::item::{Item, ItemId, ItemIdAllocator};
use crate::session::entry_form::{EntryForm, Submission};
use crate::store::list_store::{ListStore, SortCriterion};
use crate::store::stats::{stats, PackingStats};
use log::{debug, info};

/// Top-level state container handed to views by reference.
#[derive(Debug, Clone, Default)]
pub struct PackingApp {
    store: ListStore,
    form: EntryForm,
    ids: ItemIdAllocator,
    sort: SortCriterion,
}

impl PackingApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    /// Mutable form access for field input (description, quantity).
    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn sort(&self) -> SortCriterion {
        self.sort
    }

    pub fn set_sort(&mut self, criterion: SortCriterion) {
        self.sort = criterion;
    }

    /// Submits the entry form.
    ///
    /// Returns the id of the added or updated item, or `None` when the input
    /// was rejected. Updating an item that no longer exists is a no-op on the
    /// store but still resets the form.
    pub fn submit_entry(&mut self) -> Option<ItemId> {
        match self.form.submit(&mut self.ids) {
            Ok(Submission::Add(item)) => {
                let id = item.id;
                self.store.add(item);
                Some(id)
            }
            Ok(Submission::Update(item)) => {
                let id = item.id;
                self.store.update(item);
                Some(id)
            }
            Err(err) => {
                debug!("event=entry_submit module=service status=rejected reason=\"{err}\"");
                None
            }
        }
    }

    /// Starts editing the item with `id`; returns `false` if it does not exist.
    pub fn request_edit(&mut self, id: ItemId) -> bool {
        match self.store.get(id) {
            Some(item) => {
                self.form.request_edit(item);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.cancel_edit();
    }

    pub fn toggle(&mut self, id: ItemId) -> bool {
        self.store.toggle(id)
    }

    pub fn delete(&mut self, id: ItemId) -> bool {
        self.store.delete(id)
    }

    pub fn clear(&mut self) {
        info!(
            "event=list_clear_requested module=service status=ok count={}",
            self.store.len()
        );
        self.store.clear();
    }

    /// Items in the active sort order.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.store.sorted_view(self.sort)
    }

    pub fn stats(&self) -> PackingStats {
        stats(self.store.items())
    }
}
