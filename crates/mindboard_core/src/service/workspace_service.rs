//! Workspace editing session.
//!
//! # Responsibility
//! - Resolve the project identifier from the page context.
//! - Drive the one-shot load → populate → render flow and route edit
//!   commits afterwards.
//!
//! # Invariants
//! - State only moves forward: `Uninitialized → Loading → Rendered`.
//!   Load failure or absence lands in `Rendered` over the placeholder
//!   seed, never in an error state.
//! - A session without a project identifier never touches the gateway
//!   for loading.
//! - The surface is rendered exactly once; later edits mutate the
//!   host-side surface directly and do not re-render here.

use crate::model::graph::GraphModel;
use crate::model::project::ProjectId;
use crate::render::render_document;
use crate::repo::gateway::ProjectGateway;
use crate::service::edit_service::{commit_body_edit, BodyEditCommit, EditOutcome};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static PROJECT_ID_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[?&])id=([^&#]*)").expect("valid id parameter regex"));

/// Extracts the project identifier from a page query string.
///
/// Absence, a blank value and an unparsable value are all the same
/// supported non-error state: no project, placeholder session.
pub fn resolve_project_id(query: &str) -> Option<ProjectId> {
    let captures = PROJECT_ID_PARAM_RE.captures(query)?;
    let raw = captures.get(1)?.as_str();
    Uuid::parse_str(raw).ok()
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Rendered,
}

/// One editing session over one project graph.
///
/// Constructed once per page visit; all state lives here, not in
/// process-wide globals. Dropped with the page, and with it the model.
pub struct WorkspaceSession {
    project_id: Option<ProjectId>,
    model: GraphModel,
    state: SessionState,
    surface: String,
}

impl WorkspaceSession {
    /// Creates an unstarted session for an optional project.
    pub fn new(project_id: Option<ProjectId>) -> Self {
        Self {
            project_id,
            model: GraphModel::new(),
            state: SessionState::Uninitialized,
            surface: String::new(),
        }
    }

    /// Creates a session from the raw page query string.
    pub fn from_page_query(query: &str) -> Self {
        Self::new(resolve_project_id(query))
    }

    pub fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    /// The rendered document. Empty until [`WorkspaceSession::start`].
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Loads the project graph (or falls back to the placeholder seed)
    /// and renders the surface once.
    ///
    /// Calling `start` on an already started session is a no-op that
    /// returns the existing surface; re-entering `Loading` requires a
    /// fresh session.
    pub fn start(&mut self, gateway: &ProjectGateway<'_>) -> &str {
        if self.state != SessionState::Uninitialized {
            warn!("event=workspace_start module=workspace status=skipped reason=already_started");
            return &self.surface;
        }
        self.state = SessionState::Loading;

        let loaded = match &self.project_id {
            Some(id) => match gateway.load_project(id) {
                Ok(Some(project)) => Some(project.graph),
                // Unknown id and store failure both degrade to the
                // placeholder; the gateway already logged the miss.
                Ok(None) | Err(_) => None,
            },
            None => {
                info!("event=workspace_load module=workspace status=skipped reason=no_project");
                None
            }
        };

        self.model = loaded.unwrap_or_else(|| {
            info!("event=workspace_load module=workspace status=fallback mode=placeholder");
            GraphModel::placeholder_seed()
        });

        self.surface = render_document(&self.model);
        self.state = SessionState::Rendered;
        info!(
            "event=workspace_render module=workspace status=ok nodes={} links={}",
            self.model.nodes().len(),
            self.model.links().len()
        );

        &self.surface
    }

    /// Routes one committed body edit through the edit controller.
    pub fn commit_body_edit(
        &mut self,
        gateway: &ProjectGateway<'_>,
        commit: BodyEditCommit,
    ) -> EditOutcome {
        commit_body_edit(&mut self.model, gateway, self.project_id.as_ref(), commit)
    }
}
