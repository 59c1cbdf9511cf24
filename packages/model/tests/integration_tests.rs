//! Integration tests for the model crate

use mindmap_model::{
    Edge, MindmapDocument, ModelError, Mutation, MutationError, Node, SequentialIdGenerator,
};
use std::fs;

const SOURCE: &str = r#"{
    "id": "mindmap_1",
    "title": "Plan",
    "owner": "alice",
    "nodes": [
        { "nodeId": "n1", "text": "Root", "x": 10, "y": 10 },
        { "nodeId": "n2", "text": "Child", "x": 200, "y": 10 }
    ],
    "edges": [{ "id": "e1", "from": "n1", "to": "n2" }]
}"#;

#[test]
fn test_document_lifecycle() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("plan.json");
    fs::write(&path, SOURCE)?;

    let mut doc = MindmapDocument::load(&path)?;
    assert_eq!(doc.version, 0);
    assert!(!doc.is_dirty());
    assert_eq!(doc.path(), Some(path.as_path()));

    let mut ids = SequentialIdGenerator::new();
    let node = doc.map().new_node(&mut ids, 40.0, 300.0);
    let node_id = node.node_id.clone();
    doc.apply(Mutation::AddNode { node })?;

    let edge = doc.map().connect(&mut ids, "n1", &node_id);
    let result = doc.apply(Mutation::AddEdge { edge })?;
    assert_eq!(result.version, 2);
    assert!(doc.is_dirty());

    doc.save()?;
    assert!(!doc.is_dirty());

    let reloaded = MindmapDocument::load(&path)?;
    assert_eq!(reloaded.map().nodes.len(), 3);
    assert_eq!(reloaded.map().edges.len(), 2);
    assert_eq!(reloaded.map().nodes[2].node_id, "node_1");
    assert_eq!(reloaded.map().edges[1].id, "edge_2");
    Ok(())
}

#[test]
fn test_canvas_edit_sequence() {
    let mut doc = MindmapDocument::from_json(SOURCE).unwrap();

    doc.apply(Mutation::MoveNode {
        node_id: "n2".to_string(),
        x: 320.0,
        y: 45.5,
    })
    .unwrap();
    doc.apply(Mutation::ResizeNode {
        node_id: "n2".to_string(),
        width: 210.0,
        height: 96.0,
    })
    .unwrap();
    doc.apply(Mutation::UpdateText {
        node_id: "n2".to_string(),
        text: "- item\n- item".to_string(),
    })
    .unwrap();

    let node = doc.map().node("n2").unwrap();
    assert_eq!((node.x, node.y), (320.0, 45.5));
    assert_eq!((node.width, node.height), (210.0, 96.0));
    assert_eq!(node.text, "- item\n- item");
    assert_eq!(doc.version, 3);
}

#[test]
fn test_rejected_mutations_leave_map_unchanged() {
    let mut doc = MindmapDocument::from_json(SOURCE).unwrap();
    let before = doc.map().clone();

    let err = doc
        .apply(Mutation::AddNode {
            node: Node::new("n1", "dup"),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::Mutation(MutationError::DuplicateNodeId(_))
    ));

    let err = doc
        .apply(Mutation::AddEdge {
            edge: Edge::new("e2", "n1", "ghost"),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::Mutation(MutationError::NodeNotFound(_))
    ));

    let err = doc
        .apply(Mutation::RemoveEdge {
            edge_id: "e9".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::Mutation(MutationError::EdgeNotFound(_))
    ));

    assert_eq!(doc.map(), &before);
}

#[test]
fn test_remove_edge() {
    let mut doc = MindmapDocument::from_json(SOURCE).unwrap();

    doc.apply(Mutation::RemoveEdge {
        edge_id: "e1".to_string(),
    })
    .unwrap();

    assert!(doc.map().edges.is_empty());
}

#[test]
fn test_load_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        MindmapDocument::load(&path),
        Err(ModelError::Json(_))
    ));
}
