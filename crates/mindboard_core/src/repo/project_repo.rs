//! Project store contract and SQLite-backed document implementation.
//!
//! # Responsibility
//! - Provide load/save/list/create over whole project documents.
//! - Keep graph payload encoding inside the persistence boundary.
//!
//! # Invariants
//! - `save_graph` replaces the entire persisted node/link payload and
//!   stamps `updated_at`; last writer wins, no version comparison.
//! - Listing order is deterministic: `created_at DESC, project_uuid ASC`.
//! - Persisted state that cannot be decoded is reported, never masked.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::graph::{GraphModel, Link, Node};
use crate::model::project::{Project, ProjectId, ProjectStatus, ProjectSummary};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PROJECT_SELECT_SQL: &str = "SELECT
    project_uuid,
    name,
    status,
    owner,
    nodes_json,
    links_json,
    created_at,
    updated_at
FROM projects";

const DEFAULT_PROJECT_NAME: &str = "Untitled project";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from project document persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Target project does not exist.
    ProjectNotFound(ProjectId),
    /// Project name is blank after trim.
    InvalidName(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted document cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::InvalidName(value) => write!(f, "project name must not be blank: `{value}`"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "project store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "project store requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "project store requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid project document: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for project documents.
///
/// The only component aware of the backing store. Object-safe so session
/// code can hold it behind a gateway handle.
pub trait ProjectStore {
    /// Loads one project with its embedded graph. `Ok(None)` when the
    /// identifier does not resolve.
    fn load_project(&self, id: &ProjectId) -> StoreResult<Option<Project>>;
    /// Replaces the whole persisted graph payload and stamps
    /// `updated_at`.
    fn save_graph(&self, id: &ProjectId, nodes: &[Node], links: &[Link]) -> StoreResult<()>;
    /// Lists summaries sorted by creation time, newest first.
    fn list_projects(&self) -> StoreResult<Vec<ProjectSummary>>;
    /// Creates an empty project. Blank names fall back to a default.
    fn create_project(&self, name: &str) -> StoreResult<Project>;
    /// Renames one project.
    fn rename_project(&self, id: &ProjectId, name: &str) -> StoreResult<()>;
}

/// SQLite-backed project document store.
pub struct SqliteProjectStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectStore<'conn> {
    /// Creates a store over a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_store_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ProjectStore for SqliteProjectStore<'_> {
    fn load_project(&self, id: &ProjectId) -> StoreResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE project_uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }
        Ok(None)
    }

    fn save_graph(&self, id: &ProjectId, nodes: &[Node], links: &[Link]) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE projects
             SET
                nodes_json = ?2,
                links_json = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE project_uuid = ?1;",
            params![
                id.to_string(),
                encode_payload(nodes, "nodes")?,
                encode_payload(links, "links")?,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::ProjectNotFound(*id));
        }

        Ok(())
    }

    fn list_projects(&self) -> StoreResult<Vec<ProjectSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT project_uuid, name, status
             FROM projects
             ORDER BY created_at DESC, project_uuid ASC;",
        )?;
        let mut rows = stmt.query([])?;

        let mut summaries = Vec::new();
        while let Some(row) = rows.next()? {
            let uuid_text: String = row.get("project_uuid")?;
            let status_text: String = row.get("status")?;
            summaries.push(ProjectSummary {
                uuid: parse_uuid(&uuid_text, "projects.project_uuid")?,
                name: row.get("name")?,
                status: parse_status(&status_text)?,
            });
        }
        Ok(summaries)
    }

    fn create_project(&self, name: &str) -> StoreResult<Project> {
        let project_uuid = Uuid::new_v4();
        let normalized =
            normalize_project_name(name).unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

        self.conn.execute(
            "INSERT INTO projects (project_uuid, name) VALUES (?1, ?2);",
            params![project_uuid.to_string(), normalized],
        )?;

        self.load_project(&project_uuid)?
            .ok_or(StoreError::ProjectNotFound(project_uuid))
    }

    fn rename_project(&self, id: &ProjectId, name: &str) -> StoreResult<()> {
        let normalized =
            normalize_project_name(name).ok_or_else(|| StoreError::InvalidName(name.to_string()))?;

        let changed = self.conn.execute(
            "UPDATE projects
             SET
                name = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE project_uuid = ?1;",
            params![id.to_string(), normalized],
        )?;

        if changed == 0 {
            return Err(StoreError::ProjectNotFound(*id));
        }

        Ok(())
    }
}

fn parse_project_row(row: &Row<'_>) -> StoreResult<Project> {
    let uuid_text: String = row.get("project_uuid")?;
    let status_text: String = row.get("status")?;
    let nodes_json: String = row.get("nodes_json")?;
    let links_json: String = row.get("links_json")?;

    let nodes: Vec<Node> = serde_json::from_str(&nodes_json).map_err(|err| {
        StoreError::InvalidData(format!("undecodable projects.nodes_json: {err}"))
    })?;
    let links: Vec<Link> = serde_json::from_str(&links_json).map_err(|err| {
        StoreError::InvalidData(format!("undecodable projects.links_json: {err}"))
    })?;
    let graph = GraphModel::from_parts(nodes, links)
        .map_err(|err| StoreError::InvalidData(err.to_string()))?;

    Ok(Project {
        uuid: parse_uuid(&uuid_text, "projects.project_uuid")?,
        name: row.get("name")?,
        status: parse_status(&status_text)?,
        owner: row.get("owner")?,
        graph,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn encode_payload<T: serde::Serialize>(payload: &[T], field: &str) -> StoreResult<String> {
    serde_json::to_string(payload)
        .map_err(|err| StoreError::InvalidData(format!("unencodable {field} payload: {err}")))
}

fn parse_status(value: &str) -> StoreResult<ProjectStatus> {
    match value {
        "active" => Ok(ProjectStatus::Active),
        "archived" => Ok(ProjectStatus::Archived),
        other => Err(StoreError::InvalidData(format!(
            "invalid project status `{other}` in projects.status"
        ))),
    }
}

fn parse_uuid(value: &str, column: &'static str) -> StoreResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| StoreError::InvalidData(format!("invalid uuid `{value}` in {column}")))
}

fn normalize_project_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn ensure_store_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "projects")? {
        return Err(StoreError::MissingRequiredTable("projects"));
    }

    for column in [
        "project_uuid",
        "name",
        "status",
        "owner",
        "nodes_json",
        "links_json",
        "created_at",
        "updated_at",
    ] {
        if !table_has_column(conn, "projects", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "projects",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
