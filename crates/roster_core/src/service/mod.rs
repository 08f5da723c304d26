//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate draft editing, validation and store calls into screen-level
//!   APIs.
//! - Keep the shell layer decoupled from storage and validation details.

pub mod add_form;
pub mod list_view;
