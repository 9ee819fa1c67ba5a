use super::arena::{CategoryForest, NodeId};

/// Result of a successful path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMatch {
    /// Deepest matched node (the category the URL points at)
    pub active: NodeId,
    /// Root matched by the first segment (the top-level menu entry)
    pub top: NodeId,
}

/// Resolve a slug path like `["tapety", "zwierzeta", "koty"]` against the forest.
///
/// All-or-nothing: an empty path, an unknown root slug, or any segment without
/// a matching child yields `None`. When several siblings share a slug the first
/// one in sorted order wins.
pub fn resolve_path<S: AsRef<str>>(forest: &CategoryForest, path: &[S]) -> Option<PathMatch> {
    let (first, rest) = path.split_first()?;

    let top = forest
        .roots()
        .iter()
        .copied()
        .find(|&id| forest.get(id).slug.as_str() == first.as_ref())?;

    let mut active = top;
    for segment in rest {
        active = forest
            .children(active)
            .find(|&id| forest.get(id).slug.as_str() == segment.as_ref())?;
    }

    Some(PathMatch { active, top })
}

/// Ancestor chain of a node, from its root down to the node itself.
pub fn breadcrumbs(forest: &CategoryForest, node_id: NodeId) -> Vec<NodeId> {
    let mut chain = Vec::with_capacity(forest.get(node_id).depth as usize + 1);
    let mut current = Some(node_id);

    while let Some(id) = current {
        chain.push(id);
        current = forest.get(id).parent;
    }

    chain.reverse();
    chain
}

/// Slugs along the breadcrumb chain. Feeding this back into
/// [`resolve_path`] finds the same node.
pub fn slug_path(forest: &CategoryForest, node_id: NodeId) -> Vec<&str> {
    breadcrumbs(forest, node_id)
        .into_iter()
        .map(|id| forest.get(id).slug.as_str())
        .collect()
}

/// Category URL under `prefix`, e.g. `/category/tapety/zwierzeta`.
pub fn category_url(forest: &CategoryForest, node_id: NodeId, prefix: &str) -> String {
    let mut url = prefix.trim_end_matches('/').to_string();
    for slug in slug_path(forest, node_id) {
        url.push('/');
        url.push_str(slug);
    }
    url
}

/// Split a URL path into slug segments, dropping `prefix` when present.
/// `"/category/tapety/koty/"` with prefix `"/category"` → `["tapety", "koty"]`.
pub fn split_path<'a>(url_path: &'a str, prefix: &str) -> Vec<&'a str> {
    let path = url_path.split(['?', '#']).next().unwrap_or("");
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let prefix: Vec<&str> = prefix.split('/').filter(|s| !s.is_empty()).collect();
    if !prefix.is_empty() && segments.starts_with(&prefix) {
        segments.drain(..prefix.len());
    }
    segments
}
