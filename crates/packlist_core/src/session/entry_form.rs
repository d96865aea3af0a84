//! Add/update entry form.
//!
//! # Responsibility
//! - Capture description and quantity input.
//! - Turn a submit into either an add or an update intent.
//!
//! # Invariants
//! - At most one edit target exists; a new edit request replaces it.
//! - A rejected submit changes nothing (fields, mode, ids).
//! - A successful submit resets fields to defaults and returns to `Idle`.
//! - Updates keep the target's `id` and `packed` flag.

use crate::model::item::{
    validate_quantity, Item, ItemId, ItemIdAllocator, ItemValidationError, QUANTITY_MIN,
};
use log::debug;

// Never handed out by `ItemIdAllocator`; replaced once an add passes validation.
const PENDING_ID: ItemId = 0;

/// Which intent the next submit produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Submitting creates a new item.
    #[default]
    Idle,
    /// Submitting rewrites the carried item.
    Editing(Item),
}

/// Store intent produced by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Add(Item),
    Update(Item),
}

impl Submission {
    pub fn item(&self) -> &Item {
        match self {
            Self::Add(item) | Self::Update(item) => item,
        }
    }
}

/// Single form serving both item creation and item update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    description: String,
    quantity: u32,
    mode: EditMode,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: QUANTITY_MIN,
            mode: EditMode::Idle,
        }
    }
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_updating(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    /// Item currently being edited, if any.
    pub fn editing_target(&self) -> Option<&Item> {
        match &self.mode {
            EditMode::Editing(item) => Some(item),
            EditMode::Idle => None,
        }
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_updating() {
            "Update"
        } else {
            "Add"
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the quantity if it is a selectable value.
    ///
    /// # Errors
    /// - `QuantityOutOfRange` when outside `1..=20`; the previous value is kept.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), ItemValidationError> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Enters edit mode for `item` and pre-fills the fields from it.
    ///
    /// Replaces any in-progress edit; its unsaved input is discarded.
    pub fn request_edit(&mut self, item: &Item) {
        if let Some(previous) = self.editing_target() {
            debug!(
                "event=edit_replace module=form status=ok previous_id={} id={}",
                previous.id, item.id
            );
        }
        self.description = item.description.clone();
        self.quantity = item.quantity;
        self.mode = EditMode::Editing(item.clone());
    }

    /// Leaves edit mode and resets the fields.
    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::Idle;
        self.reset_fields();
    }

    /// Validates input and produces the matching store intent.
    ///
    /// A fresh id is only allocated for adds that pass validation.
    ///
    /// # Errors
    /// - `EmptyDescription` when the description is blank; form state is untouched.
    pub fn submit(&mut self, ids: &mut ItemIdAllocator) -> Result<Submission, ItemValidationError> {
        let description = normalize_description(&self.description);
        let mut candidate = match &self.mode {
            EditMode::Idle => Item::new(PENDING_ID, description, self.quantity),
            EditMode::Editing(target) => Item {
                description,
                quantity: self.quantity,
                ..target.clone()
            },
        };
        candidate.validate()?;

        let submission = match std::mem::take(&mut self.mode) {
            EditMode::Idle => {
                candidate.id = ids.allocate();
                Submission::Add(candidate)
            }
            EditMode::Editing(_) => Submission::Update(candidate),
        };
        self.reset_fields();
        Ok(submission)
    }

    fn reset_fields(&mut self) {
        self.description.clear();
        self.quantity = QUANTITY_MIN;
    }
}

/// Trims surrounding whitespace; inner spacing is kept as typed.
pub fn normalize_description(value: &str) -> String {
    value.trim().to_string()
}
