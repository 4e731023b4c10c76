//! Persistence boundary for project documents.
//!
//! # Responsibility
//! - Define the storage-facing contract consumed by the workspace session
//!   and the edit path.
//! - Keep SQL and document-encoding details out of services.
//!
//! # Invariants
//! - The store is opaque to callers: whole documents in, whole documents
//!   out, no partial updates except the graph-payload overwrite.

pub mod gateway;
pub mod project_repo;
