//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mindboard_core` wiring.
//! - Render the offline placeholder workspace for quick visual checks.

use mindboard_core::{ProjectGateway, WorkspaceSession};

fn main() {
    // A detached gateway exercises the same fallback path a visitor with
    // no project id goes through: placeholder seed, one render.
    let gateway = ProjectGateway::detached();
    let mut session = WorkspaceSession::new(None);

    eprintln!("mindboard_core version={}", mindboard_core::core_version());
    print!("{}", session.start(&gateway));
}
