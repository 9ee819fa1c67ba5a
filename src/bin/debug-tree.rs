/// Diagnostic tool to verify records → tree → path resolution
use std::path::PathBuf;

use anyhow::{bail, Result};
use storefront_rs::config::StorefrontConfig;
use storefront_rs::source;
use storefront_rs::tree::{self, resolve};
use storefront_rs::ui::labels;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront_rs=debug".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(dump) = args.next().map(PathBuf::from) else {
        bail!("usage: debug-tree <categories.json> [url-path | segment...]");
    };
    let rest: Vec<String> = args.collect();

    let config_path = std::env::var_os("STOREFRONT_CONFIG").map(PathBuf::from);
    let config = StorefrontConfig::load_or_default(config_path.as_deref())?;

    println!("=== DIAGNOSTIC: Records → Tree → Path ===");
    println!("Loading: {}", dump.display());

    let records = source::load_records(&dump)?;
    println!("\n[1] Loaded {} records", records.len());

    let forest = tree::build_category_tree(&records);
    println!(
        "\n[2] Tree built: {} nodes, {} roots",
        forest.len(),
        forest.roots().len()
    );

    println!("\n[3] Forest:");
    for (id, depth) in forest.walk() {
        let node = forest.get(id);
        println!(
            "    {}{} [{}] (id={}, {})",
            "  ".repeat(depth as usize),
            node.name,
            node.slug,
            node.id,
            labels::format_count(node.total_count)
        );
    }

    if rest.is_empty() {
        return Ok(());
    }

    // A single argument containing '/' is treated as a URL path
    let segments: Vec<&str> = if rest.len() == 1 && rest[0].contains('/') {
        resolve::split_path(&rest[0], &config.category_prefix)
    } else {
        rest.iter().map(String::as_str).collect()
    };

    println!("\n[4] Resolving {:?}", segments);
    match resolve::resolve_path(&forest, &segments) {
        Some(found) => {
            println!(
                "    active: {}",
                labels::format_breadcrumb(&forest, found.active)
            );
            println!("    top:    {}", forest.get(found.top).name);
            println!(
                "    url:    {}",
                resolve::category_url(&forest, found.active, &config.category_prefix)
            );
            for child in forest.children(found.active) {
                let entry = labels::build_menu_entry(&forest, child, &config.category_prefix);
                println!("      - {} ({}) {}", entry.name, entry.count_display, entry.url);
            }
        }
        None => println!("    not found"),
    }

    Ok(())
}
