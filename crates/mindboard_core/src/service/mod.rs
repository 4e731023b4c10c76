//! Session-level orchestration services.
//!
//! # Responsibility
//! - Drive load → render → edit flows over the model and gateway.
//! - Keep persistence policy decisions (log-and-drop saves, placeholder
//!   fallback) in one visible place.

pub mod edit_service;
pub mod workspace_service;
