//! Core state model for the travel packing list.
//! This crate is the single source of truth for list invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod store;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use model::item::{
    Item, ItemId, ItemIdAllocator, ItemValidationError, QUANTITY_MAX, QUANTITY_MIN,
};
pub use service::packing_service::PackingApp;
pub use session::entry_form::{normalize_description, EditMode, EntryForm, Submission};
pub use store::list_store::{
    compare_descriptions, ListStore, SortCriterion, SortCriterionParseError,
};
pub use store::stats::{stats, PackingStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
