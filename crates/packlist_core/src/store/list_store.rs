//! Ordered packing list store.
//!
//! # Responsibility
//! - Provide add/delete/toggle/update/clear over the item collection.
//! - Produce sorted views for display.
//!
//! # Invariants
//! - The store trusts its input; validation happens in `EntryForm::submit`.
//! - `sorted_view` never reorders stored items.
//! - Missing ids never produce errors.

use crate::model::item::{Item, ItemId};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// Root collation with compiled data: accents and case are secondary and
// tertiary differences, lowercase first.
static DESCRIPTION_COLLATOR: Lazy<CollatorBorrowed<'static>> = Lazy::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .expect("compiled root collation data")
});

/// Display ordering for the list surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Store order (insertion order).
    #[default]
    Input,
    /// Ascending by description, case-insensitive first.
    Description,
    /// Unpacked items first, insertion order kept within each group.
    Packed,
}

impl SortCriterion {
    /// All criteria in menu order.
    pub const ALL: [SortCriterion; 3] = [Self::Input, Self::Description, Self::Packed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Description => "description",
            Self::Packed => "packed",
        }
    }
}

impl Display for SortCriterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown sort criterion name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCriterionParseError(pub String);

impl Display for SortCriterionParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported sort criterion `{}`; expected input|description|packed",
            self.0
        )
    }
}

impl Error for SortCriterionParseError {}

impl FromStr for SortCriterion {
    type Err = SortCriterionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "description" => Ok(Self::Description),
            "packed" => Ok(Self::Packed),
            other => Err(SortCriterionParseError(other.to_string())),
        }
    }
}

/// In-memory ordered collection of packing list items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    items: Vec<Item>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one item at the end of the list.
    ///
    /// Duplicate ids are not guarded; id uniqueness is the caller's job.
    pub fn add(&mut self, item: Item) {
        let id = item.id;
        self.items.push(item);
        debug!(
            "event=item_add module=store status=ok id={} count={}",
            id,
            self.items.len()
        );
    }

    /// Removes the item with `id`; returns whether anything was removed.
    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        debug!(
            "event=item_delete module=store status={} id={} count={}",
            status(removed),
            id,
            self.items.len()
        );
        removed
    }

    /// Flips the packed flag of the item with `id`; returns whether it existed.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let found = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.packed = !item.packed;
                true
            }
            None => false,
        };
        debug!(
            "event=item_toggle module=store status={} id={}",
            status(found),
            id
        );
        found
    }

    /// Replaces the stored item sharing `item.id` wholesale.
    ///
    /// Returns whether a matching item existed.
    pub fn update(&mut self, item: Item) -> bool {
        let id = item.id;
        let found = match self.items.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        };
        debug!(
            "event=item_update module=store status={} id={}",
            status(found),
            id
        );
        found
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        let removed = self.items.len();
        self.items.clear();
        debug!("event=list_clear module=store status=ok removed={removed}");
    }

    /// Returns items in store (insertion) order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items ordered by `criterion` without touching stored order.
    pub fn sorted_view(&self, criterion: SortCriterion) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        match criterion {
            SortCriterion::Input => {}
            SortCriterion::Description => {
                view.sort_by(|a, b| compare_descriptions(&a.description, &b.description));
            }
            // `sort_by_key` is stable, so insertion order survives within groups.
            SortCriterion::Packed => view.sort_by_key(|item| item.packed),
        }
        view
    }
}

/// Locale-aware comparison for descriptions.
///
/// Uses Unicode root collation, so `Éclair` sorts with the other `e` words.
/// Raw text breaks ties the collator considers equal.
pub fn compare_descriptions(left: &str, right: &str) -> Ordering {
    DESCRIPTION_COLLATOR
        .compare(left, right)
        .then_with(|| left.cmp(right))
}

fn status(changed: bool) -> &'static str {
    if changed {
        "ok"
    } else {
        "noop"
    }
}
