//! Packing list item model.
//!
//! # Responsibility
//! - Define the checklist entry record and its validation rules.
//! - Allocate unique, monotonically increasing item ids.
//!
//! # Invariants
//! - `id` is never reused for another item within one allocator lifetime.
//! - `quantity` stays within `QUANTITY_MIN..=QUANTITY_MAX` for validated items.
//! - `description` is non-empty for validated items.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of one packing list item.
pub type ItemId = u64;

/// Smallest quantity the entry form offers.
pub const QUANTITY_MIN: u32 = 1;
/// Largest quantity the entry form offers.
pub const QUANTITY_MAX: u32 = 20;

/// Validation failures for item input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Description is empty or whitespace-only.
    EmptyDescription,
    /// Quantity is outside the selectable range.
    QuantityOutOfRange(u32),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "item description cannot be empty"),
            Self::QuantityOutOfRange(value) => write!(
                f,
                "item quantity {value} is out of range; expected {QUANTITY_MIN}..={QUANTITY_MAX}"
            ),
        }
    }
}

impl Error for ItemValidationError {}

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    /// Checked off on the list. New items start unpacked.
    pub packed: bool,
}

impl Item {
    /// Creates an unpacked item with the given id.
    ///
    /// Does not validate; callers at the input boundary use `validate()`.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Checks description and quantity rules.
    ///
    /// # Errors
    /// - `EmptyDescription` when the description is blank.
    /// - `QuantityOutOfRange` when quantity is outside `1..=20`.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        validate_description(&self.description)?;
        validate_quantity(self.quantity)
    }
}

fn validate_description(description: &str) -> Result<(), ItemValidationError> {
    if description.trim().is_empty() {
        return Err(ItemValidationError::EmptyDescription);
    }
    Ok(())
}

pub(crate) fn validate_quantity(quantity: u32) -> Result<(), ItemValidationError> {
    if !(QUANTITY_MIN..=QUANTITY_MAX).contains(&quantity) {
        return Err(ItemValidationError::QuantityOutOfRange(quantity));
    }
    Ok(())
}

/// Monotonic id source for new items.
///
/// Ids start at 1 and keep growing across `clear()` so stale references
/// (for example an edit target that was removed) never alias a new item.
#[derive(Debug, Clone)]
pub struct ItemIdAllocator {
    next: ItemId,
}

impl Default for ItemIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl ItemIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh id and advances the counter.
    pub fn allocate(&mut self) -> ItemId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}
