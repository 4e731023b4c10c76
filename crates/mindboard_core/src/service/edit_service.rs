//! Edit-commit controller.
//!
//! # Responsibility
//! - Route a committed body edit from its surface tag to the model.
//! - Trigger the whole-graph autosave after each applied mutation.
//!
//! # Invariants
//! - Unknown node tags are a silent no-op: no mutation, no save.
//! - Save results never propagate past this layer; failures are logged
//!   and dropped, never retried.

use crate::model::graph::{GraphModel, NodeId};
use crate::model::project::ProjectId;
use crate::repo::gateway::ProjectGateway;
use log::{debug, info, warn};

/// A body edit at the moment its surface region loses focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyEditCommit {
    /// Node identifier carried by the edited region's `data-node-id`.
    pub node_id: NodeId,
    /// Committed body text.
    pub text: String,
}

impl BodyEditCommit {
    pub fn new(node_id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            text: text.into(),
        }
    }
}

/// What happened to one committed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The node was found and its body replaced.
    Applied,
    /// The tag did not resolve to a live node; nothing changed.
    UnknownNode,
}

/// Applies one committed edit and fires the autosave.
///
/// The save carries the full current node/link payload (no diffing) and
/// is skipped entirely for sessions without a project identifier.
pub fn commit_body_edit(
    model: &mut GraphModel,
    gateway: &ProjectGateway<'_>,
    project_id: Option<&ProjectId>,
    commit: BodyEditCommit,
) -> EditOutcome {
    let node_id = commit.node_id;
    if !model.update_node_body(&node_id, commit.text) {
        debug!("event=edit_commit module=edit status=skipped reason=unknown_node node={node_id}");
        return EditOutcome::UnknownNode;
    }
    info!("event=edit_commit module=edit status=ok node={node_id}");

    match project_id {
        Some(id) => {
            if let Err(err) = gateway.save_graph(id, model.nodes(), model.links()) {
                // Availability over durability: the surface stays live,
                // the failed save is dropped.
                warn!("event=edit_autosave module=edit status=dropped project={id} error={err}");
            }
        }
        None => {
            debug!("event=edit_autosave module=edit status=skipped reason=no_project");
        }
    }

    EditOutcome::Applied
}
