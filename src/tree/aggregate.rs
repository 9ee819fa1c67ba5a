use rayon::prelude::*;

use super::arena::{CategoryForest, NodeId};
use super::collate::SortKey;

/// Sort the roots and every sibling list by name (Polish collation).
/// Stable: equal names keep their current relative order.
/// This re-links the sibling lists without moving nodes in the arena.
pub fn sort_children_by_name(forest: &mut CategoryForest) {
    // One key per arena slot, indexed by NodeId.
    let keys: Vec<SortKey> = forest
        .nodes
        .par_iter()
        .map(|node| SortKey::new(&node.name))
        .collect();

    forest.roots.sort_by(|a, b| keys[a.index()].cmp(&keys[b.index()]));

    let len = forest.nodes.len();
    for i in 0..len {
        if forest.nodes[i].first_child.is_none() {
            continue;
        }

        // Collect children into a vec
        let mut children: Vec<NodeId> = Vec::new();
        let mut child = forest.nodes[i].first_child;
        while let Some(child_id) = child {
            children.push(child_id);
            child = forest.nodes[child_id.index()].next_sibling;
        }

        children.sort_by(|a, b| keys[a.index()].cmp(&keys[b.index()]));

        forest.set_children(NodeId(i as u32), &children);
    }
}

/// Set `depth` on every node, top-down from the roots.
pub fn assign_depths(forest: &mut CategoryForest) {
    let order: Vec<(NodeId, u32)> = forest.walk().collect();
    for (id, depth) in order {
        forest.nodes[id.index()].depth = depth;
    }
}

/// Compute `total_count` for every node (bottom-up).
/// After this, each node's `total_count` equals its own `count` plus the
/// `count` of every descendant.
pub fn aggregate_counts(forest: &mut CategoryForest) {
    // Arena order is input order, so parents may sit after their children.
    // Reverse pre-order visits every child before its parent.
    let order: Vec<NodeId> = forest.walk().map(|(id, _)| id).collect();
    for &id in order.iter().rev() {
        let mut total = forest.nodes[id.index()].count;
        let mut child = forest.nodes[id.index()].first_child;
        while let Some(child_id) = child {
            total = total.saturating_add(forest.nodes[child_id.index()].total_count);
            child = forest.nodes[child_id.index()].next_sibling;
        }
        forest.nodes[id.index()].total_count = total;
    }
}
