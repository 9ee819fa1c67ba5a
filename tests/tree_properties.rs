use std::cmp::Ordering;
use std::collections::HashSet;

use proptest::prelude::*;
use storefront_rs::tree::collate;
use storefront_rs::tree::resolve::{resolve_path, slug_path};
use storefront_rs::{build_category_tree, CategoryForest, CategoryRecord};

/// Records with unique ids 1..=n and arbitrary parents, including 0,
/// self-references, dangling ids and cycles.
fn records() -> impl Strategy<Value = Vec<CategoryRecord>> {
    prop::collection::vec(
        (0u64..40, "[a-zA-ZąćęłńóśźżĄĆĘŁŃÓŚŹŻ ]{0,8}", 0u64..50),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (parent, name, count))| {
                let id = i as u64 + 1;
                CategoryRecord::new(id, &name, &format!("s{}", id), parent).with_count(count)
            })
            .collect()
    })
}

fn sibling_lists(forest: &CategoryForest) -> Vec<Vec<storefront_rs::NodeId>> {
    let mut lists = vec![forest.roots().to_vec()];
    for (id, _) in forest.walk() {
        lists.push(forest.children(id).collect());
    }
    lists
}

proptest! {
    #[test]
    fn every_record_appears_exactly_once(records in records()) {
        let forest = build_category_tree(&records);
        prop_assert_eq!(forest.len(), records.len());

        let seen: Vec<u64> = forest.walk().map(|(id, _)| forest.get(id).id).collect();
        let unique: HashSet<u64> = seen.iter().copied().collect();
        prop_assert_eq!(seen.len(), records.len());
        prop_assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn siblings_are_in_polish_order(records in records()) {
        let forest = build_category_tree(&records);
        for list in sibling_lists(&forest) {
            for pair in list.windows(2) {
                let a = &forest.get(pair[0]).name;
                let b = &forest.get(pair[1]).name;
                prop_assert_ne!(collate::compare(a, b), Ordering::Greater);
            }
        }
    }

    #[test]
    fn children_link_back_to_parent(records in records()) {
        let forest = build_category_tree(&records);
        for (id, depth) in forest.walk() {
            prop_assert_eq!(forest.get(id).depth, depth);
            for child in forest.children(id) {
                prop_assert_eq!(forest.get(child).parent, Some(id));
            }
        }
        for &root in forest.roots() {
            prop_assert_eq!(forest.get(root).parent, None);
        }
    }

    #[test]
    fn total_counts_sum_to_input(records in records()) {
        let forest = build_category_tree(&records);
        let expected: u64 = records.iter().map(|r| r.count).sum();
        let actual: u64 = forest.roots().iter().map(|&r| forest.get(r).total_count).sum();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn every_node_resolves_by_its_own_path(records in records()) {
        // Slugs are unique, so no sibling can shadow another
        let forest = build_category_tree(&records);
        for (id, _) in forest.walk() {
            let path = slug_path(&forest, id);
            let found = resolve_path(&forest, &path).unwrap();
            prop_assert_eq!(found.active, id);
            prop_assert_eq!(forest.get(found.top).parent, None);
        }
    }

    #[test]
    fn build_is_deterministic(records in records()) {
        prop_assert_eq!(build_category_tree(&records), build_category_tree(&records));
    }
}

#[test]
fn self_reference_is_a_root() {
    let forest = build_category_tree(&[
        CategoryRecord::new(1, "Samotna", "samotna", 1),
        CategoryRecord::new(2, "Dziecko", "dziecko", 1),
    ]);
    assert_eq!(forest.roots().len(), 1);
    let root = forest.roots()[0];
    assert_eq!(forest.get(root).id, 1);
    assert_eq!(forest.children(root).count(), 1);
}

#[test]
fn documented_path_cases() {
    let forest = build_category_tree(&[
        CategoryRecord::new(1, "A", "a", 0),
        CategoryRecord::new(2, "B", "b", 1),
    ]);

    let found = resolve_path(&forest, &["a", "b"]).unwrap();
    assert_eq!(forest.get(found.active).slug.as_str(), "b");
    assert_eq!(forest.get(found.top).slug.as_str(), "a");

    assert_eq!(resolve_path(&forest, &["a", "x"]), None);
    assert_eq!(resolve_path::<&str>(&forest, &[]), None);
}
