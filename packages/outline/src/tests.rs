use crate::{derive_mindmap, derive_outline, DeriveOptions, OutlineEntry, RootSelection, MAX_DEPTH};
use mindmap_model::{Edge, Mindmap, Node};

fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| Node::new(*id, *id)).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (from, to))| Edge::new(format!("e{}", i + 1), *from, *to))
        .collect()
}

fn numbered(outline: &crate::Outline) -> Vec<(&str, &str)> {
    outline
        .iter()
        .map(|e| (e.numbering.as_str(), e.text.as_str()))
        .collect()
}

#[test]
fn test_empty_nodes() {
    let outline = derive_outline(&[], &edges(&[("a", "b")]), &DeriveOptions::default());

    assert!(outline.is_empty());
    assert_eq!(outline.root, RootSelection::Empty);
}

#[test]
fn test_root_is_first_in_sequence() {
    let outline = derive_outline(&nodes(&["A", "B", "C"]), &[], &DeriveOptions::default());

    assert_eq!(outline.root, RootSelection::InDegreeZero("A".to_string()));
    assert_eq!(numbered(&outline), vec![("1", "A")]);
}

#[test]
fn test_children_numbered_in_order() {
    let outline = derive_outline(
        &nodes(&["A", "B", "C"]),
        &edges(&[("A", "B"), ("A", "C")]),
        &DeriveOptions::default(),
    );

    assert_eq!(
        outline.entries,
        vec![
            OutlineEntry::new("1", "A"),
            OutlineEntry::new("1.1", "B"),
            OutlineEntry::new("1.2", "C"),
        ]
    );
}

#[test]
fn test_sibling_order_follows_node_sequence() {
    let outline = derive_outline(
        &nodes(&["A", "B", "C"]),
        &edges(&[("A", "C"), ("A", "B")]),
        &DeriveOptions::default(),
    );

    assert_eq!(numbered(&outline), vec![("1", "A"), ("1.1", "B"), ("1.2", "C")]);
}

#[test]
fn test_root_skips_nodes_with_inbound_edges() {
    let outline = derive_outline(
        &nodes(&["child", "root"]),
        &edges(&[("root", "child")]),
        &DeriveOptions::default(),
    );

    assert_eq!(outline.root, RootSelection::InDegreeZero("root".to_string()));
    assert_eq!(numbered(&outline), vec![("1", "root"), ("1.1", "child")]);
}

#[test]
fn test_dangling_edges_ignored() {
    let outline = derive_outline(
        &nodes(&["A", "B"]),
        &edges(&[("A", "ghost"), ("A", "B"), ("ghost", "A")]),
        &DeriveOptions::default(),
    );

    assert_eq!(outline.dangling_edges, 2);
    // ghost -> A still counts toward A's in-degree
    assert_eq!(outline.root, RootSelection::Fallback("A".to_string()));
    assert_eq!(numbered(&outline), vec![("1", "A"), ("1.1", "B")]);
    assert!(outline.iter().all(|e| e.text != "ghost"));
}

#[test]
fn test_edge_from_removed_parent_blocks_root() {
    let outline = derive_outline(
        &nodes(&["A", "B"]),
        &edges(&[("P", "A")]),
        &DeriveOptions::default(),
    );

    assert_eq!(outline.dangling_edges, 1);
    assert_eq!(outline.root, RootSelection::InDegreeZero("B".to_string()));
    assert_eq!(numbered(&outline), vec![("1", "B")]);
}

#[test]
fn test_depth_cap_on_chain() {
    let ids: Vec<String> = (1..=10).map(|i| format!("n{}", i)).collect();
    let chain: Vec<Node> = ids.iter().map(|id| Node::new(id.as_str(), id.as_str())).collect();
    let links: Vec<Edge> = ids
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Edge::new(format!("e{}", i), pair[0].as_str(), pair[1].as_str()))
        .collect();

    let outline = derive_outline(&chain, &links, &DeriveOptions::default());

    assert_eq!(outline.len(), MAX_DEPTH);
    assert_eq!(outline.entries.last().unwrap().numbering, "1.1.1.1.1.1.1");
    assert_eq!(outline.entries.last().unwrap().text, "n7");
    assert!(outline.iter().all(|e| e.depth() <= MAX_DEPTH));
    assert_eq!(outline.truncated_branches, 1);
}

#[test]
fn test_cycle_falls_back_and_terminates() {
    let outline = derive_outline(
        &nodes(&["A", "B"]),
        &edges(&[("A", "B"), ("B", "A")]),
        &DeriveOptions::default(),
    );

    assert_eq!(outline.root, RootSelection::Fallback("A".to_string()));
    assert_eq!(outline.len(), MAX_DEPTH);
    let texts: Vec<&str> = outline.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["A", "B", "A", "B", "A", "B", "A"]);
}

#[test]
fn test_self_loop_bounded() {
    let outline = derive_outline(
        &nodes(&["A", "B"]),
        &edges(&[("B", "B")]),
        &DeriveOptions::default(),
    );

    // A has in-degree 0, so the self loop on B is unreachable
    assert_eq!(numbered(&outline), vec![("1", "A")]);

    let outline = derive_outline(&nodes(&["B"]), &edges(&[("B", "B")]), &DeriveOptions::default());
    assert_eq!(outline.root, RootSelection::Fallback("B".to_string()));
    assert_eq!(outline.len(), MAX_DEPTH);
}

#[test]
fn test_unreachable_nodes_omitted() {
    let outline = derive_outline(
        &nodes(&["A", "B", "C", "D"]),
        &edges(&[("A", "B"), ("C", "D")]),
        &DeriveOptions::default(),
    );

    assert_eq!(numbered(&outline), vec![("1", "A"), ("1.1", "B")]);
}

#[test]
fn test_shared_child_visited_per_path() {
    let outline = derive_outline(
        &nodes(&["A", "B", "C", "D"]),
        &edges(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]),
        &DeriveOptions::default(),
    );

    assert_eq!(
        numbered(&outline),
        vec![
            ("1", "A"),
            ("1.1", "B"),
            ("1.1.1", "D"),
            ("1.2", "C"),
            ("1.2.1", "D"),
        ]
    );
}

#[test]
fn test_duplicate_edges_rank_twice() {
    let outline = derive_outline(
        &nodes(&["A", "B"]),
        &edges(&[("A", "B"), ("A", "B")]),
        &DeriveOptions::default(),
    );

    assert_eq!(numbered(&outline), vec![("1", "A"), ("1.1", "B"), ("1.2", "B")]);
}

#[test]
fn test_custom_max_depth() {
    let outline = derive_outline(
        &nodes(&["A", "B", "C"]),
        &edges(&[("A", "B"), ("B", "C")]),
        &DeriveOptions::with_max_depth(2),
    );
    assert_eq!(numbered(&outline), vec![("1", "A"), ("1.1", "B")]);

    let outline = derive_outline(
        &nodes(&["A", "B"]),
        &edges(&[("A", "B")]),
        &DeriveOptions::with_max_depth(0),
    );
    assert_eq!(numbered(&outline), vec![("1", "A")]);
}

#[test]
fn test_missing_text_is_empty() {
    let map = Mindmap::from_json(
        r#"{ "nodes": [{ "nodeId": "n1" }, { "nodeId": "n2", "text": "Child" }],
             "edges": [{ "id": "e1", "from": "n1", "to": "n2" }] }"#,
    )
    .unwrap();

    let outline = derive_mindmap(&map, &DeriveOptions::default());
    assert_eq!(numbered(&outline), vec![("1", ""), ("1.1", "Child")]);
}

#[test]
fn test_dense_graph_terminates() {
    let ids: Vec<String> = (0..12).map(|i| format!("n{}", i)).collect();
    let all: Vec<Node> = ids.iter().map(|id| Node::new(id.as_str(), id.as_str())).collect();
    let mut links = Vec::new();
    for from in ids.iter().take(3) {
        for to in ids.iter().take(3) {
            links.push(Edge::new(format!("{}-{}", from, to), from.as_str(), to.as_str()));
        }
    }

    let outline = derive_outline(&all, &links, &DeriveOptions::default());

    // n3 is the first node without inbound edges
    assert_eq!(outline.root, RootSelection::InDegreeZero("n3".to_string()));
    assert_eq!(outline.len(), 1);
}

#[test]
fn test_outline_serializes_root_selection() {
    let outline = derive_outline(&nodes(&["A"]), &[], &DeriveOptions::default());
    let json = serde_json::to_value(&outline).unwrap();

    assert_eq!(json["root"]["kind"], "inDegreeZero");
    assert_eq!(json["root"]["nodeId"], "A");
    assert_eq!(json["entries"][0]["numbering"], "1");
}
