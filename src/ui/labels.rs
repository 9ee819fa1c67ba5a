use crate::tree::arena::{CategoryForest, NodeId};
use crate::tree::resolve::{breadcrumbs, category_url};

/// Everything a menu row needs to render one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub name: String,
    pub url: String,
    pub count_display: String,
    pub child_count: usize,
    pub image: Option<String>,
}

/// Build the menu row for a category.
pub fn build_menu_entry(forest: &CategoryForest, node_id: NodeId, prefix: &str) -> MenuEntry {
    let node = forest.get(node_id);

    MenuEntry {
        name: node.name.to_string(),
        url: category_url(forest, node_id, prefix),
        count_display: format_count(node.total_count),
        child_count: forest.children(node_id).count(),
        image: node.image.clone(),
    }
}

/// Product count with the Polish plural form: 1 produkt, 2 produkty, 5 produktów.
pub fn format_count(count: u64) -> String {
    let last = count % 10;
    let last_two = count % 100;

    let noun = if count == 1 {
        "produkt"
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        "produkty"
    } else {
        "produktów"
    };
    format!("{} {}", count, noun)
}

/// Human-readable trail, e.g. `Tapety › Zwierzęta › Koty`.
pub fn format_breadcrumb(forest: &CategoryForest, node_id: NodeId) -> String {
    breadcrumbs(forest, node_id)
        .into_iter()
        .map(|id| forest.get(id).name.as_str())
        .collect::<Vec<_>>()
        .join(" › ")
}
