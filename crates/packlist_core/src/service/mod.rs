//! Core use-case services.
//!
//! # Responsibility
//! - Wire form, store and id allocation into one application state object.
//! - Keep view layers free of store/form coordination details.

pub mod packing_service;
