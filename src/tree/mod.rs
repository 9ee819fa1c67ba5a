pub mod aggregate;
pub mod arena;
pub mod collate;
pub mod resolve;

use self::arena::{CategoryForest, CategoryNode, NodeId};
use crate::source::types::CategoryRecord;

/// Build a CategoryForest from the flat list of records the commerce API returns.
///
/// Never fails: a parent id that names no record, points at the record itself,
/// or closes a longer parent cycle makes the record a root instead.
pub fn build_category_tree(records: &[CategoryRecord]) -> CategoryForest {
    let mut forest = CategoryForest::new();
    if records.is_empty() {
        return forest;
    }

    tracing::info!("Building category tree from {} records", records.len());

    // First pass: index every record by id
    for record in records {
        if forest.find_by_id(record.id).is_some() {
            tracing::warn!(
                "Duplicate category id {} ('{}'), keeping the first occurrence",
                record.id,
                record.name
            );
            continue;
        }
        forest.push(node_from_record(record));
    }

    // Second pass: resolve parents, then link each sibling list in input order
    let parents = resolve_parents(&forest);
    let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); forest.len()];
    for (i, parent) in parents.iter().enumerate() {
        let id = NodeId(i as u32);
        match parent {
            Some(parent) => children[parent.index()].push(id),
            None => forest.roots.push(id),
        }
    }
    for (i, kids) in children.iter().enumerate() {
        if !kids.is_empty() {
            forest.set_children(NodeId(i as u32), kids);
        }
    }

    aggregate::sort_children_by_name(&mut forest);
    aggregate::assign_depths(&mut forest);
    aggregate::aggregate_counts(&mut forest);

    tracing::info!(
        "Category tree built: {} nodes, {} roots",
        forest.len(),
        forest.roots.len()
    );

    forest
}

fn node_from_record(record: &CategoryRecord) -> CategoryNode {
    CategoryNode {
        id: record.id,
        name: record.name.clone(),
        slug: record.slug.clone(),
        parent_id: record.parent,
        count: record.count,
        total_count: record.count,
        image: record.image.clone(),
        parent: None,
        first_child: None,
        next_sibling: None,
        depth: 0,
    }
}

/// Map each arena slot to the node it should hang under, or None for a root.
fn resolve_parents(forest: &CategoryForest) -> Vec<Option<NodeId>> {
    let mut parents: Vec<Option<NodeId>> = forest
        .nodes
        .iter()
        .map(|node| {
            if node.parent_id == 0 {
                return None;
            }
            if node.parent_id == node.id {
                tracing::warn!(
                    "Category {} ('{}') is its own parent, treating it as a root",
                    node.id,
                    node.name
                );
                return None;
            }
            let parent = forest.find_by_id(node.parent_id);
            if parent.is_none() {
                tracing::debug!(
                    "Category {} ('{}') names missing parent {}, treating it as a root",
                    node.id,
                    node.name,
                    node.parent_id
                );
            }
            parent
        })
        .collect();

    break_cycles(forest, &mut parents);
    parents
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnPath,
    Done,
}

/// Cut every parent cycle (A → B → … → A) by promoting the member that came
/// first in the input to a root. The parent links form a functional graph, so
/// one walk per unvisited node finds each cycle exactly once.
fn break_cycles(forest: &CategoryForest, parents: &mut [Option<NodeId>]) {
    let mut state = vec![Visit::New; parents.len()];

    for start in 0..parents.len() {
        if state[start] != Visit::New {
            continue;
        }

        let mut path: Vec<NodeId> = Vec::new();
        let mut current = Some(NodeId(start as u32));

        while let Some(id) = current {
            match state[id.index()] {
                Visit::Done => break,
                Visit::OnPath => {
                    if let Some(pos) = path.iter().position(|&p| p == id) {
                        if let Some(&head) = path[pos..].iter().min() {
                            let node = forest.get(head);
                            tracing::warn!(
                                "Parent cycle of {} categories through {} ('{}'), promoting it to a root",
                                path.len() - pos,
                                node.id,
                                node.name
                            );
                            parents[head.index()] = None;
                        }
                    }
                    break;
                }
                Visit::New => {
                    state[id.index()] = Visit::OnPath;
                    path.push(id);
                    current = parents[id.index()];
                }
            }
        }

        for id in path {
            state[id.index()] = Visit::Done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u64, name: &str, parent: u64) -> CategoryRecord {
        CategoryRecord::new(id, name, &name.to_lowercase(), parent)
    }

    fn root_names(forest: &CategoryForest) -> Vec<String> {
        forest
            .roots()
            .iter()
            .map(|&id| forest.get(id).name.to_string())
            .collect()
    }

    fn child_names(forest: &CategoryForest, parent: NodeId) -> Vec<String> {
        forest
            .children(parent)
            .map(|id| forest.get(id).name.to_string())
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_forest() {
        let forest = build_category_tree(&[]);
        assert!(forest.is_empty());
        assert!(forest.roots().is_empty());
    }

    #[test]
    fn builds_nested_sorted_forest() {
        let records = vec![
            rec(10, "Zwierzęta", 1),
            rec(1, "Tapety", 0),
            rec(11, "Abstrakcja", 1),
            rec(2, "Fototapety", 0),
            rec(12, "Ćmy", 10),
            rec(13, "Koty", 10),
        ];
        let forest = build_category_tree(&records);

        assert_eq!(forest.len(), 6);
        assert_eq!(root_names(&forest), ["Fototapety", "Tapety"]);

        let tapety = forest.find_by_id(1).unwrap();
        assert_eq!(child_names(&forest, tapety), ["Abstrakcja", "Zwierzęta"]);

        let zwierzeta = forest.find_by_id(10).unwrap();
        assert_eq!(child_names(&forest, zwierzeta), ["Ćmy", "Koty"]);
        assert_eq!(forest.get(zwierzeta).parent, Some(tapety));
        assert_eq!(forest.get(forest.find_by_id(12).unwrap()).depth, 2);
    }

    #[test]
    fn missing_parent_becomes_root() {
        let forest = build_category_tree(&[rec(5, "Sierota", 999), rec(6, "Inne", 0)]);
        assert_eq!(root_names(&forest), ["Inne", "Sierota"]);
        let orphan = forest.get(forest.find_by_id(5).unwrap());
        assert_eq!(orphan.parent, None);
        assert_eq!(orphan.parent_id, 999);
    }

    #[test]
    fn self_parent_becomes_root() {
        let forest = build_category_tree(&[rec(7, "Pętla", 7)]);
        assert_eq!(forest.roots().len(), 1);
        let node = forest.get(forest.roots()[0]);
        assert_eq!(node.id, 7);
        assert_eq!(node.first_child, None);
    }

    #[test]
    fn two_cycle_keeps_every_record_reachable() {
        let forest = build_category_tree(&[rec(1, "A", 2), rec(2, "B", 1), rec(3, "C", 2)]);
        assert_eq!(forest.walk().count(), 3);
        // "A" came first in the input, so it is the one promoted
        assert_eq!(root_names(&forest), ["A"]);
        let b = forest.find_by_id(2).unwrap();
        assert_eq!(child_names(&forest, b), ["C"]);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let forest = build_category_tree(&[rec(1, "Pierwsza", 0), rec(1, "Druga", 0)]);
        assert_eq!(forest.len(), 1);
        assert_eq!(root_names(&forest), ["Pierwsza"]);
    }

    #[test]
    fn siblings_all_attached_and_counts_rolled_up() {
        let records = vec![
            rec(1, "Tapety", 0).with_count(1),
            rec(2, "Kwiaty", 1).with_count(5),
            rec(3, "Pasy", 1).with_count(0),
            rec(4, "Kratka", 1).with_count(2),
        ];
        let forest = build_category_tree(&records);
        let tapety = forest.find_by_id(1).unwrap();
        assert_eq!(forest.children(tapety).count(), 3);
        assert_eq!(forest.get(tapety).total_count, 8);
        let visible: Vec<_> = forest.visible_children(tapety).collect();
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn very_deep_chain_builds() {
        const DEPTH: u64 = 70_000;
        let records: Vec<CategoryRecord> = (1..=DEPTH)
            .map(|id| rec(id, &format!("K{id}"), id - 1).with_count(1))
            .collect();
        let forest = build_category_tree(&records);

        assert_eq!(forest.roots().len(), 1);
        assert_eq!(forest.walk().count(), DEPTH as usize);
        let deepest = forest.find_by_id(DEPTH).unwrap();
        assert_eq!(forest.get(deepest).depth, 69_999);
        assert_eq!(forest.get(forest.roots()[0]).total_count, DEPTH);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let records = vec![rec(3, "Łąki", 0), rec(1, "Lasy", 0), rec(2, "Góry", 1)];
        assert_eq!(build_category_tree(&records), build_category_tree(&records));
    }
}
