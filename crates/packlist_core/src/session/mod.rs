//! Entry form session state.
//!
//! # Responsibility
//! - Model the single add/update form as an explicit Idle/Editing machine.
//! - Validate user input before anything reaches the store.

pub mod entry_form;
