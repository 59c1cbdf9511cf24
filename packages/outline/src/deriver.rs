//! # Outline Derivation
//!
//! ```text
//! nodes + edges
//!      ↓  in-degree per node        → root (first with 0, else first node)
//!      ↓  adjacency by node position → children in node sequence order
//!      ↓  depth-first, depth-bounded → 1, 1.1, 1.1.1, 1.2, …
//! Outline
//! ```
//!
//! An edge counts toward its target's in-degree whenever the target exists,
//! even if its source is gone. Dangling edges never reach adjacency. There is no
//! cycle detection: a node reachable along several paths (or through a
//! cycle) is emitted once per path until the depth bound cuts the branch.

use mindmap_model::{Edge, Mindmap, Node, NodeIndex};
use tracing::{debug, trace};

use crate::outline::{DeriveOptions, Outline, OutlineEntry, RootSelection};

/// Derive the numbered outline of a mindmap
pub fn derive_mindmap(map: &Mindmap, options: &DeriveOptions) -> Outline {
    derive_outline(&map.nodes, &map.edges, options)
}

/// Derive a numbered outline from an immutable node/edge snapshot
pub fn derive_outline(nodes: &[Node], edges: &[Edge], options: &DeriveOptions) -> Outline {
    if nodes.is_empty() {
        return Outline::empty();
    }

    let index = NodeIndex::new(nodes);
    let graph = Graph::build(&index, nodes.len(), edges);
    if graph.dangling_edges > 0 {
        debug!(count = graph.dangling_edges, "Skipping dangling edges");
    }

    let root = select_root(nodes, &index, &graph.in_degree);
    let root_position = match &root {
        RootSelection::InDegreeZero(id) | RootSelection::Fallback(id) => {
            index.position(id).unwrap_or(0)
        }
        RootSelection::Empty => return Outline::empty(),
    };

    let max_depth = options.max_depth.max(1);
    let (entries, truncated_branches) = walk(nodes, &graph.children, root_position, max_depth);
    if truncated_branches > 0 {
        debug!(
            truncated = truncated_branches,
            max_depth, "Depth bound cut outline branches"
        );
    }

    Outline {
        entries,
        root,
        dangling_edges: graph.dangling_edges,
        truncated_branches,
    }
}

/// Edges resolved to node positions
struct Graph {
    in_degree: Vec<usize>,
    children: Vec<Vec<usize>>,
    dangling_edges: usize,
}

impl Graph {
    fn build(index: &NodeIndex<'_>, node_count: usize, edges: &[Edge]) -> Self {
        let mut in_degree = vec![0; node_count];
        let mut children = vec![Vec::new(); node_count];
        let mut dangling_edges = 0;

        for edge in edges {
            let to = index.position(&edge.to);
            if let Some(to) = to {
                in_degree[to] += 1;
            }

            match (index.position(&edge.from), to) {
                (Some(from), Some(to)) => children[from].push(to),
                _ => {
                    trace!(edge_id = %edge.id, from = %edge.from, to = %edge.to, "Dangling edge");
                    dangling_edges += 1;
                }
            }
        }

        // Sibling order follows the node sequence, not the edge sequence
        for list in &mut children {
            list.sort();
        }

        Self {
            in_degree,
            children,
            dangling_edges,
        }
    }
}

fn select_root(nodes: &[Node], index: &NodeIndex<'_>, in_degree: &[usize]) -> RootSelection {
    let candidate = nodes
        .iter()
        .enumerate()
        // Shadowed duplicate ids are not part of the graph
        .filter(|(position, node)| index.position(&node.node_id) == Some(*position))
        .find(|(position, _)| in_degree[*position] == 0);

    match candidate {
        Some((_, node)) => RootSelection::InDegreeZero(node.node_id.clone()),
        None => {
            let first = &nodes[0];
            debug!(node_id = %first.node_id, "No node without inbound edges, using first node as root");
            RootSelection::Fallback(first.node_id.clone())
        }
    }
}

/// Depth-first pre-order walk with an explicit stack.
///
/// The bound is checked before a child is pushed, so no frame deeper than
/// `max_depth` ever exists.
fn walk(
    nodes: &[Node],
    children: &[Vec<usize>],
    root: usize,
    max_depth: usize,
) -> (Vec<OutlineEntry>, usize) {
    let mut entries = Vec::new();
    let mut truncated = 0;
    let mut stack = vec![(root, "1".to_string(), 1usize)];

    while let Some((position, numbering, depth)) = stack.pop() {
        trace!(numbering = %numbering, node_id = %nodes[position].node_id, "Visiting node");

        let kids = &children[position];
        if depth >= max_depth {
            truncated += kids.len();
        } else {
            for (rank, &child) in kids.iter().enumerate().rev() {
                stack.push((child, format!("{}.{}", numbering, rank + 1), depth + 1));
            }
        }

        entries.push(OutlineEntry {
            numbering,
            text: nodes[position].text.clone(),
        });
    }

    (entries, truncated)
}
