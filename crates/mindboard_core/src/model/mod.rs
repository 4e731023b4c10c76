//! Domain model for project boards and their workspace graphs.
//!
//! # Responsibility
//! - Define the canonical node/link graph owned by one project.
//! - Define the project envelope that the persistence boundary stores.
//!
//! # Invariants
//! - Node identifiers are unique within one graph.
//! - A graph never exists outside its owning project document.

pub mod graph;
pub mod project;
