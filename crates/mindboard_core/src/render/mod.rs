//! Visual-surface projection of workspace graphs.
//!
//! # Responsibility
//! - Regenerate the full SVG document for one graph on demand.
//! - Keep surface addressing stable: group ids are `node-<id>` and
//!   editable body regions carry `data-node-id` for edit routing.
//!
//! # Invariants
//! - Rendering never mutates the model and never fails on dangling
//!   links; missing endpoints are an explicit skip branch.
//! - All user text is markup-escaped before insertion.

mod svg;

pub use svg::render_document;

use crate::model::graph::{Node, NodeStyle};

/// Fixed prefix composing the addressable element id of a node group.
pub const NODE_ELEMENT_PREFIX: &str = "node-";

pub(crate) const CANVAS_PADDING: f64 = 40.0;

/// Escapes text for insertion into markup attribute or element content.
pub(crate) fn escape_markup(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Straight connector endpoints: right-center of `from`, left-center of
/// `to`. No routing or avoidance.
pub(crate) fn connector_endpoints(from: &Node, to: &Node) -> ((f64, f64), (f64, f64)) {
    (
        (from.x + from.width, from.y + from.height / 2.0),
        (to.x, to.y + to.height / 2.0),
    )
}

pub(crate) fn style_class(style: NodeStyle) -> &'static str {
    match style {
        NodeStyle::Plain => "style-plain",
        NodeStyle::Accent => "style-accent",
        NodeStyle::Muted => "style-muted",
    }
}
