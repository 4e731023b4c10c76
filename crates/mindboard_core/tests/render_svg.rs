use mindboard_core::{render_document, GraphModel, Link, Node, NodeStyle};

fn two_node_graph() -> GraphModel {
    GraphModel::from_parts(
        vec![
            Node::new("n1", "Alpha", 100.0, 200.0),
            Node::new("n2", "Beta", 500.0, 400.0),
        ],
        vec![Link::new("n1", "n2")],
    )
    .unwrap()
}

#[test]
fn nodes_render_as_addressable_groups_with_tagged_body_regions() {
    let doc = render_document(&two_node_graph());

    assert!(doc.contains("id=\"node-n1\""));
    assert!(doc.contains("id=\"node-n2\""));
    assert!(doc.contains("data-node-id=\"n1\""));
    assert!(doc.contains(">Alpha</text>"));
    assert!(doc.contains("<rect x=\"100\" y=\"200\" width=\"220\" height=\"100\""));
    // One editable body region per node, tagged for edit routing.
    assert_eq!(doc.matches("class=\"node-body\"").count(), 2);
}

#[test]
fn connector_joins_right_center_to_left_center() {
    let doc = render_document(&two_node_graph());

    // n1 box: 100..320 x 200..300, so its right-center is (320, 250);
    // n2 left-center is (500, 450).
    assert!(doc.contains("<line class=\"link\" x1=\"320\" y1=\"250\" x2=\"500\" y2=\"450\"/>"));
}

#[test]
fn dangling_link_renders_zero_connectors_without_error() {
    let graph = GraphModel::from_parts(
        vec![Node::new("n1", "only", 0.0, 0.0)],
        vec![Link::new("n1", "n2")],
    )
    .unwrap();

    let doc = render_document(&graph);
    assert!(!doc.contains("<line"));
    assert!(doc.contains("id=\"node-n1\""));
}

#[test]
fn body_markup_is_escaped_to_literal_text() {
    let mut graph = two_node_graph();
    assert!(graph.update_node_body("n1", "<script>alert('x')</script>"));

    let doc = render_document(&graph);
    assert!(doc.contains("&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;"));
    assert!(!doc.contains("<script>"));
}

#[test]
fn title_markup_is_escaped_too() {
    let graph = GraphModel::from_parts(
        vec![Node::new("n1", "Fish & \"Chips\"", 0.0, 0.0)],
        Vec::new(),
    )
    .unwrap();

    let doc = render_document(&graph);
    assert!(doc.contains("Fish &amp; &quot;Chips&quot;"));
}

#[test]
fn rendering_is_idempotent_for_an_unchanged_model() {
    let graph = two_node_graph();
    assert_eq!(render_document(&graph), render_document(&graph));
}

#[test]
fn style_tag_projects_into_a_class_name() {
    let mut node = Node::new("n1", "styled", 0.0, 0.0);
    node.style = NodeStyle::Accent;
    let graph = GraphModel::from_parts(vec![node], Vec::new()).unwrap();

    let doc = render_document(&graph);
    assert!(doc.contains("class=\"node style-accent\""));
}

#[test]
fn canvas_covers_node_extents() {
    let graph = GraphModel::from_parts(
        vec![Node::new("n1", "far", 1000.0, 600.0)],
        Vec::new(),
    )
    .unwrap();

    let doc = render_document(&graph);
    // 1000 + 220 width + padding, 600 + 100 height + padding.
    assert!(doc.contains("viewBox=\"0 0 1260 740\""));
}
