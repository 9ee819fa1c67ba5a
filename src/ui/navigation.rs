use crate::tree::arena::{CategoryForest, NodeId};
use crate::tree::resolve::{breadcrumbs, PathMatch};

/// Sidebar navigation state: which menu level is open, and how we got there.
pub struct NavigationState {
    /// Stack of previously open levels (for back navigation)
    history: Vec<Option<NodeId>>,
    /// Category whose children are listed. None = top-level menu.
    pub current: Option<NodeId>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            current: None,
        }
    }

    /// Open the menu on a resolved URL, with history pointing back up the
    /// ancestor chain so `navigate_up` walks towards the top level.
    pub fn from_match(forest: &CategoryForest, found: PathMatch) -> Self {
        let chain = breadcrumbs(forest, found.active);
        let mut history = vec![None];
        history.extend(chain[..chain.len() - 1].iter().copied().map(Some));
        Self {
            history,
            current: Some(found.active),
        }
    }

    /// Open a category's submenu.
    /// Returns true if navigation happened.
    pub fn drill_down(&mut self, node: NodeId, forest: &CategoryForest) -> bool {
        // A leaf has no submenu: open its parent's level instead
        let target = if forest.has_children(node) {
            Some(node)
        } else {
            forest.get(node).parent
        };

        if target == self.current {
            return false;
        }

        self.history.push(self.current);
        self.current = target;
        true
    }

    /// Navigate back one level.
    /// Returns true if navigation happened.
    pub fn navigate_up(&mut self) -> bool {
        if let Some(prev) = self.history.pop() {
            self.current = prev;
            true
        } else {
            false
        }
    }

    /// Back to the top-level menu.
    pub fn navigate_home(&mut self) {
        self.history.clear();
        self.current = None;
    }

    /// Current depth in navigation history.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Entries of the open menu level, in sorted order.
    pub fn menu_items(&self, forest: &CategoryForest, hide_empty: bool) -> Vec<NodeId> {
        let items: Vec<NodeId> = match self.current {
            Some(id) => forest.children(id).collect(),
            None => forest.roots().to_vec(),
        };
        if hide_empty {
            items
                .into_iter()
                .filter(|&id| forest.get(id).total_count > 0)
                .collect()
        } else {
            items
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
