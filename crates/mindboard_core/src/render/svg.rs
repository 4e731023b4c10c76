//! SVG document emitter.
//!
//! The surface is regenerated from scratch on every call; there is no
//! incremental diffing. Edits after the initial draw mutate the host-side
//! surface directly, so the session renders exactly once.

use super::{
    connector_endpoints, escape_markup, style_class, CANVAS_PADDING, NODE_ELEMENT_PREFIX,
};
use crate::model::graph::GraphModel;
use log::debug;
use std::fmt::Write;

const TITLE_INSET_X: f64 = 12.0;
const TITLE_INSET_Y: f64 = 24.0;
const BODY_INSET_Y: f64 = 48.0;

/// Renders the full visual surface for one graph.
///
/// Per node: an addressable `<g>` (`node-<id>`) with its box, read-only
/// title and the editable body region tagged `data-node-id`. Per link: a
/// straight connector line, skipped when either endpoint is missing from
/// the node set.
pub fn render_document(model: &GraphModel) -> String {
    let (canvas_width, canvas_height) = canvas_extent(model);
    let mut doc = String::with_capacity(1024 + model.nodes().len() * 512);

    let _ = write!(
        doc,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{canvas_width}\" height=\"{canvas_height}\" viewBox=\"0 0 {canvas_width} {canvas_height}\">\n"
    );

    doc.push_str("  <g class=\"links\">\n");
    for link in model.links() {
        let (Some(from), Some(to)) = (model.find_node(&link.from), model.find_node(&link.to))
        else {
            // Dangling endpoints stay in the model; they just have no
            // visual projection.
            debug!(
                "event=link_skip module=render status=skipped from={} to={}",
                link.from, link.to
            );
            continue;
        };

        let ((x1, y1), (x2, y2)) = connector_endpoints(from, to);
        let _ = write!(
            doc,
            "    <line class=\"link\" x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"/>\n"
        );
    }
    doc.push_str("  </g>\n");

    doc.push_str("  <g class=\"nodes\">\n");
    for node in model.nodes() {
        let id = escape_markup(&node.id);
        let _ = write!(
            doc,
            "    <g id=\"{NODE_ELEMENT_PREFIX}{id}\" class=\"node {}\" data-node-id=\"{id}\">\n",
            style_class(node.style)
        );
        let _ = write!(
            doc,
            "      <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"6\"/>\n",
            node.x, node.y, node.width, node.height
        );
        let _ = write!(
            doc,
            "      <text class=\"node-title\" x=\"{}\" y=\"{}\">{}</text>\n",
            node.x + TITLE_INSET_X,
            node.y + TITLE_INSET_Y,
            escape_markup(&node.title)
        );
        let _ = write!(
            doc,
            "      <text class=\"node-body\" data-node-id=\"{id}\" x=\"{}\" y=\"{}\">{}</text>\n",
            node.x + TITLE_INSET_X,
            node.y + BODY_INSET_Y,
            escape_markup(&node.body)
        );
        doc.push_str("    </g>\n");
    }
    doc.push_str("  </g>\n");

    doc.push_str("</svg>\n");
    doc
}

fn canvas_extent(model: &GraphModel) -> (f64, f64) {
    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;
    for node in model.nodes() {
        max_x = max_x.max(node.x + node.width);
        max_y = max_y.max(node.y + node.height);
    }
    (max_x + CANVAS_PADDING, max_y + CANVAS_PADDING)
}
