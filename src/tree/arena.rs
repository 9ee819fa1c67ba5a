use std::collections::HashMap;

use compact_str::CompactString;

/// Index into the arena `Vec<CategoryNode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single category in the forest, stored in a flat arena.
/// Uses sibling-list representation: each node has `first_child` and `next_sibling`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    /// Category id from the commerce API
    pub id: u64,
    pub name: CompactString,
    pub slug: CompactString,
    /// Parent id exactly as declared by the record (0 = none).
    /// May name a missing category; `parent` below is the resolved link.
    pub parent_id: u64,
    /// Products directly in this category
    pub count: u64,
    /// Products in this category and all descendants
    pub total_count: u64,
    pub image: Option<String>,
    /// Resolved parent node (None for roots)
    pub parent: Option<NodeId>,
    /// First child in sorted order
    pub first_child: Option<NodeId>,
    /// Next sibling in sorted order
    pub next_sibling: Option<NodeId>,
    /// Depth in the forest (root = 0)
    pub depth: u32,
}

/// The category forest: every node lives in one arena, links are indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForest {
    /// All nodes, in input order
    pub nodes: Vec<CategoryNode>,
    /// Top-level nodes in sorted order
    pub roots: Vec<NodeId>,
    /// Category id → arena index
    pub by_id: HashMap<u64, NodeId>,
}

impl CategoryForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a detached node. Link it with `attach` or `set_children`.
    pub fn push(&mut self, node: CategoryNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.by_id.insert(node.id, id);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent` (O(children)).
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[child.index()].next_sibling = None;

        match self.nodes[parent.index()].first_child {
            None => self.nodes[parent.index()].first_child = Some(child),
            Some(first) => {
                let mut last = first;
                while let Some(next) = self.nodes[last.index()].next_sibling {
                    last = next;
                }
                self.nodes[last.index()].next_sibling = Some(child);
            }
        }
    }

    /// Replace the child list of `parent` with `children`, in the given order.
    pub fn set_children(&mut self, parent: NodeId, children: &[NodeId]) {
        self.nodes[parent.index()].first_child = children.first().copied();
        for w in children.windows(2) {
            self.nodes[w[0].index()].next_sibling = Some(w[1]);
        }
        if let Some(last) = children.last() {
            self.nodes[last.index()].next_sibling = None;
        }
        for &child in children {
            self.nodes[child.index()].parent = Some(parent);
        }
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> &CategoryNode {
        &self.nodes[id.index()]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        ChildIter {
            forest: self,
            current: self.nodes[parent.index()].first_child,
        }
    }

    /// Children that hold at least one product somewhere below them.
    pub fn visible_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent)
            .filter(move |&child| self.get(child).total_count > 0)
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.nodes[id.index()].first_child.is_some()
    }

    /// Look a node up by its commerce API id.
    pub fn find_by_id(&self, category_id: u64) -> Option<NodeId> {
        self.by_id.get(&category_id).copied()
    }

    /// First node in pre-order whose slug matches, anywhere in the forest.
    pub fn find_by_slug(&self, slug: &str) -> Option<NodeId> {
        self.walk().map(|(id, _)| id).find(|&id| self.get(id).slug.as_str() == slug)
    }

    /// Pre-order traversal over the whole forest, yielding `(node, depth)`.
    /// Iterative, so deep chains cannot overflow the stack.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            forest: self,
            stack: self.roots.iter().rev().map(|&id| (id, 0)).collect(),
        }
    }
}

/// Iterator over the children of a node.
pub struct ChildIter<'a> {
    forest: &'a CategoryForest,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.forest.nodes[id.index()].next_sibling;
        Some(id)
    }
}

/// Pre-order iterator returned by [`CategoryForest::walk`].
pub struct Walk<'a> {
    forest: &'a CategoryForest,
    stack: Vec<(NodeId, u32)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (NodeId, u32);

    fn next(&mut self) -> Option<(NodeId, u32)> {
        let (id, depth) = self.stack.pop()?;
        let children: Vec<NodeId> = self.forest.children(id).collect();
        self.stack
            .extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        Some((id, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64, slug: &str) -> CategoryNode {
        CategoryNode {
            id,
            name: CompactString::new(slug),
            slug: CompactString::new(slug),
            parent_id: 0,
            count: 0,
            total_count: 0,
            image: None,
            parent: None,
            first_child: None,
            next_sibling: None,
            depth: 0,
        }
    }

    #[test]
    fn attach_appends_in_order() {
        let mut forest = CategoryForest::new();
        let root = forest.push(node(1, "root"));
        let a = forest.push(node(2, "a"));
        let b = forest.push(node(3, "b"));
        forest.roots.push(root);
        forest.attach(root, a);
        forest.attach(root, b);

        let kids: Vec<_> = forest.children(root).collect();
        assert_eq!(kids, vec![a, b]);
        assert_eq!(forest.get(b).parent, Some(root));
        assert_eq!(forest.find_by_id(3), Some(b));
    }

    #[test]
    fn walk_is_preorder() {
        let mut forest = CategoryForest::new();
        let r1 = forest.push(node(1, "r1"));
        let c1 = forest.push(node(2, "c1"));
        let r2 = forest.push(node(3, "r2"));
        let g1 = forest.push(node(4, "g1"));
        forest.roots = vec![r1, r2];
        forest.attach(r1, c1);
        forest.attach(c1, g1);

        let order: Vec<_> = forest.walk().collect();
        assert_eq!(order, vec![(r1, 0), (c1, 1), (g1, 2), (r2, 0)]);
        assert_eq!(forest.find_by_slug("g1"), Some(g1));
        assert_eq!(forest.find_by_slug("nope"), None);
    }
}
