//! Session-gated handle over the project store.
//!
//! # Responsibility
//! - Give session and edit code one call surface whether or not a store
//!   session is established yet.
//! - Emit structured events around every store round-trip.
//!
//! # Invariants
//! - A detached gateway never errors: loads resolve to absent, listings
//!   to empty, saves to a logged no-op.
//! - The gateway never retries; persistence policy lives in callers.

use crate::model::graph::{Link, Node};
use crate::model::project::{Project, ProjectId, ProjectSummary};
use crate::repo::project_repo::{ProjectStore, StoreResult};
use log::{error, info, warn};
use std::time::Instant;

/// Gateway handle constructed once per editing session.
///
/// `detached()` models the state before a store session exists (the
/// sign-in boundary is outside this crate); `attached()` wraps a live
/// store.
pub struct ProjectGateway<'a> {
    store: Option<&'a dyn ProjectStore>,
}

impl<'a> ProjectGateway<'a> {
    /// Gateway with no backing store session.
    pub fn detached() -> Self {
        Self { store: None }
    }

    /// Gateway delegating to a live store.
    pub fn attached(store: &'a dyn ProjectStore) -> Self {
        Self { store: Some(store) }
    }

    /// Whether a store session is established.
    pub fn is_attached(&self) -> bool {
        self.store.is_some()
    }

    /// Loads one project document. Absent id, detached gateway and
    /// unknown project all resolve to `Ok(None)`.
    pub fn load_project(&self, id: &ProjectId) -> StoreResult<Option<Project>> {
        let Some(store) = self.store else {
            info!("event=project_load module=gateway status=skipped reason=detached");
            return Ok(None);
        };

        let started_at = Instant::now();
        let result = store.load_project(id);
        match &result {
            Ok(found) => info!(
                "event=project_load module=gateway status=ok project={id} found={} duration_ms={}",
                found.is_some(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=project_load module=gateway status=error project={id} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Overwrites the whole persisted graph payload for one project.
    ///
    /// Detached gateways drop the save with a warning; the caller owns
    /// any further policy on the returned result.
    pub fn save_graph(&self, id: &ProjectId, nodes: &[Node], links: &[Link]) -> StoreResult<()> {
        let Some(store) = self.store else {
            warn!("event=graph_save module=gateway status=skipped reason=detached project={id}");
            return Ok(());
        };

        let started_at = Instant::now();
        let result = store.save_graph(id, nodes, links);
        match &result {
            Ok(()) => info!(
                "event=graph_save module=gateway status=ok project={id} nodes={} links={} duration_ms={}",
                nodes.len(),
                links.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=graph_save module=gateway status=error project={id} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Lists project summaries, newest first. Empty when detached.
    pub fn list_projects(&self) -> StoreResult<Vec<ProjectSummary>> {
        let Some(store) = self.store else {
            info!("event=project_list module=gateway status=skipped reason=detached");
            return Ok(Vec::new());
        };
        store.list_projects()
    }

    /// Creates an empty project. `Ok(None)` when detached.
    pub fn create_project(&self, name: &str) -> StoreResult<Option<Project>> {
        let Some(store) = self.store else {
            info!("event=project_create module=gateway status=skipped reason=detached");
            return Ok(None);
        };

        let project = store.create_project(name)?;
        info!(
            "event=project_create module=gateway status=ok project={}",
            project.uuid
        );
        Ok(Some(project))
    }
}
