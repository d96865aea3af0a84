//! Domain model for packing list entries.
//!
//! # Responsibility
//! - Define the canonical checklist entry shared by store, form and views.
//! - Own id allocation so every entry keeps a unique identity.
//!
//! # Invariants
//! - Every entry is identified by an `ItemId` unique within the list.
//! - Validation lives at the submission boundary, not in the store.

pub mod item;
