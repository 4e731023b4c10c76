use mindboard_core::{
    BodyEditCommit, EditOutcome, GraphModel, Link, Node, Project, ProjectGateway, ProjectId,
    ProjectStatus, ProjectStore, ProjectSummary, SessionState, StoreError, StoreResult,
    WorkspaceSession,
};
use std::cell::{Cell, RefCell};
use uuid::Uuid;

/// In-memory store that records every call for assertion.
struct RecordingStore {
    project: Option<Project>,
    fail_saves: bool,
    load_calls: Cell<u32>,
    saves: RefCell<Vec<(ProjectId, Vec<Node>, Vec<Link>)>>,
}

impl RecordingStore {
    fn empty() -> Self {
        Self {
            project: None,
            fail_saves: false,
            load_calls: Cell::new(0),
            saves: RefCell::new(Vec::new()),
        }
    }

    fn with_project(project: Project) -> Self {
        Self {
            project: Some(project),
            ..Self::empty()
        }
    }
}

impl ProjectStore for RecordingStore {
    fn load_project(&self, id: &ProjectId) -> StoreResult<Option<Project>> {
        self.load_calls.set(self.load_calls.get() + 1);
        Ok(self
            .project
            .clone()
            .filter(|project| project.uuid == *id))
    }

    fn save_graph(&self, id: &ProjectId, nodes: &[Node], links: &[Link]) -> StoreResult<()> {
        self.saves
            .borrow_mut()
            .push((*id, nodes.to_vec(), links.to_vec()));
        if self.fail_saves {
            return Err(StoreError::ProjectNotFound(*id));
        }
        Ok(())
    }

    fn list_projects(&self) -> StoreResult<Vec<ProjectSummary>> {
        Ok(Vec::new())
    }

    fn create_project(&self, _name: &str) -> StoreResult<Project> {
        unreachable!("not exercised by session tests")
    }

    fn rename_project(&self, _id: &ProjectId, _name: &str) -> StoreResult<()> {
        unreachable!("not exercised by session tests")
    }
}

fn stored_project(uuid: ProjectId, graph: GraphModel) -> Project {
    Project {
        uuid,
        name: "Stored board".to_string(),
        status: ProjectStatus::Active,
        owner: "local".to_string(),
        graph,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
    }
}

fn one_node_graph() -> GraphModel {
    GraphModel::from_parts(
        vec![Node::new("n1", "Stored node", 50.0, 60.0)],
        Vec::new(),
    )
    .unwrap()
}

#[test]
fn session_without_project_id_renders_placeholder_and_never_loads() {
    let store = RecordingStore::empty();
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(None);

    assert_eq!(session.state(), SessionState::Uninitialized);
    session.start(&gateway);

    assert_eq!(session.state(), SessionState::Rendered);
    assert_eq!(session.model(), &GraphModel::placeholder_seed());
    assert_eq!(store.load_calls.get(), 0);
    assert!(store.saves.borrow().is_empty());
}

#[test]
fn unknown_project_id_falls_back_to_placeholder_after_one_load() {
    let store = RecordingStore::empty();
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(Some(Uuid::new_v4()));

    session.start(&gateway);

    assert_eq!(session.state(), SessionState::Rendered);
    assert_eq!(session.model(), &GraphModel::placeholder_seed());
    assert_eq!(store.load_calls.get(), 1);
}

#[test]
fn loaded_project_graph_is_adopted_and_rendered() {
    let project_id = Uuid::new_v4();
    let store = RecordingStore::with_project(stored_project(project_id, one_node_graph()));
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(Some(project_id));

    let surface = session.start(&gateway).to_string();

    assert_eq!(session.model(), &one_node_graph());
    assert!(surface.contains("id=\"node-n1\""));
    assert!(surface.contains(">Stored node</text>"));
}

#[test]
fn start_is_one_shot_per_session() {
    let project_id = Uuid::new_v4();
    let store = RecordingStore::with_project(stored_project(project_id, one_node_graph()));
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(Some(project_id));

    let first = session.start(&gateway).to_string();
    let second = session.start(&gateway).to_string();

    assert_eq!(first, second);
    assert_eq!(store.load_calls.get(), 1);
}

#[test]
fn edit_commit_updates_body_and_saves_full_payload_exactly_once() {
    let project_id = Uuid::new_v4();
    let graph = GraphModel::from_parts(
        vec![
            Node::new("n1", "First", 0.0, 0.0),
            Node::new("n2", "Second", 300.0, 0.0),
        ],
        vec![Link::new("n1", "n2")],
    )
    .unwrap();
    let store = RecordingStore::with_project(stored_project(project_id, graph));
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(Some(project_id));
    session.start(&gateway);

    let outcome = session.commit_body_edit(&gateway, BodyEditCommit::new("n1", "Task A"));

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(session.model().find_node("n1").unwrap().body, "Task A");

    let saves = store.saves.borrow();
    assert_eq!(saves.len(), 1);
    let (saved_id, saved_nodes, saved_links) = &saves[0];
    assert_eq!(*saved_id, project_id);
    assert_eq!(saved_nodes.len(), 2);
    assert_eq!(saved_nodes[0].body, "Task A");
    assert_eq!(saved_links, &[Link::new("n1", "n2")]);
}

#[test]
fn unknown_node_commit_is_a_noop_without_save() {
    let project_id = Uuid::new_v4();
    let store = RecordingStore::with_project(stored_project(project_id, one_node_graph()));
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(Some(project_id));
    session.start(&gateway);

    let outcome = session.commit_body_edit(&gateway, BodyEditCommit::new("gone", "text"));

    assert_eq!(outcome, EditOutcome::UnknownNode);
    assert_eq!(session.model(), &one_node_graph());
    assert!(store.saves.borrow().is_empty());
}

#[test]
fn save_failure_is_swallowed_and_edit_stays_applied() {
    let project_id = Uuid::new_v4();
    let mut store = RecordingStore::with_project(stored_project(project_id, one_node_graph()));
    store.fail_saves = true;
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(Some(project_id));
    session.start(&gateway);

    let outcome = session.commit_body_edit(&gateway, BodyEditCommit::new("n1", "still applied"));

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(
        session.model().find_node("n1").unwrap().body,
        "still applied"
    );
    assert_eq!(store.saves.borrow().len(), 1);
}

#[test]
fn placeholder_session_edits_skip_the_gateway() {
    let store = RecordingStore::empty();
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(None);
    session.start(&gateway);

    let outcome = session.commit_body_edit(&gateway, BodyEditCommit::new("n1", "local only"));

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(session.model().find_node("n1").unwrap().body, "local only");
    assert!(store.saves.borrow().is_empty());
}

#[test]
fn edits_do_not_rerender_the_surface() {
    let store = RecordingStore::empty();
    let gateway = ProjectGateway::attached(&store);
    let mut session = WorkspaceSession::new(None);
    let before = session.start(&gateway).to_string();

    session.commit_body_edit(&gateway, BodyEditCommit::new("n1", "changed"));

    assert_eq!(session.surface(), before);
}

#[test]
fn detached_gateway_resolves_to_empty_results() {
    let gateway = ProjectGateway::detached();

    assert!(!gateway.is_attached());
    assert!(gateway.load_project(&Uuid::new_v4()).unwrap().is_none());
    assert!(gateway.list_projects().unwrap().is_empty());
    assert!(gateway.create_project("anything").unwrap().is_none());
    gateway.save_graph(&Uuid::new_v4(), &[], &[]).unwrap();
}

#[test]
fn session_resolves_project_id_from_page_query() {
    let project_id = Uuid::new_v4();
    let session = WorkspaceSession::from_page_query(&format!("id={project_id}"));
    assert_eq!(session.project_id(), Some(&project_id));

    let session = WorkspaceSession::from_page_query("view=board");
    assert_eq!(session.project_id(), None);
}
