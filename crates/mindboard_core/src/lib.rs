//! Core domain logic for Mindboard.
//! This crate is the single source of truth for graph and persistence invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::graph::{
    GraphError, GraphModel, Link, Node, NodeId, NodeStyle, DEFAULT_NODE_HEIGHT,
    DEFAULT_NODE_WIDTH,
};
pub use model::project::{Project, ProjectId, ProjectStatus, ProjectSummary};
pub use render::{render_document, NODE_ELEMENT_PREFIX};
pub use repo::gateway::ProjectGateway;
pub use repo::project_repo::{ProjectStore, SqliteProjectStore, StoreError, StoreResult};
pub use service::edit_service::{BodyEditCommit, EditOutcome};
pub use service::workspace_service::{resolve_project_id, SessionState, WorkspaceSession};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
