//! In-memory list state and derived projections.
//!
//! # Responsibility
//! - Hold the ordered collection of items and its mutation operations.
//! - Derive sort views and progress statistics without mutating state.
//!
//! # Invariants
//! - Insertion order is the canonical order; sort views are copies.
//! - Operations on unknown ids are silent no-ops, never failures.

pub mod list_store;
pub mod stats;
