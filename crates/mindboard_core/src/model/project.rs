//! Project envelope around one workspace graph.
//!
//! # Responsibility
//! - Define the unit of persistence and access control.
//! - Keep listing shapes free of graph payload.

use crate::model::graph::GraphModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable project identifier.
pub type ProjectId = Uuid;

/// Project lifecycle state as stored in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Archived,
}

/// One persisted project with its embedded graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub uuid: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
    pub owner: String,
    pub graph: GraphModel,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds, stamped by every whole-graph save.
    pub updated_at: i64,
}

/// Listing row without graph payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub uuid: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
}
