/// Catalog validation tool
/// Checks: Records → Tree invariants (totality, ordering, depths, links)
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{bail, Result};
use storefront_rs::source;
use storefront_rs::tree::{self, collate, resolve};

const MAX_REPORTED: usize = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront_rs=info".parse()?),
        )
        .init();

    let Some(dump) = std::env::args().nth(1).map(PathBuf::from) else {
        bail!("usage: validate-catalog <categories.json>");
    };

    println!("Target: {}", dump.display());
    println!();

    // === STAGE 1: RECORDS ===
    println!("┌─ STAGE 1: RECORDS ─────────────────────────────────────────┐");
    let records = source::load_records(&dump)?;
    let ids: HashSet<u64> = records.iter().map(|r| r.id).collect();
    let duplicates = records.len() - ids.len();
    let dangling: Vec<_> = records
        .iter()
        .filter(|r| r.parent != 0 && !ids.contains(&r.parent))
        .collect();
    let self_parented = records.iter().filter(|r| r.parent == r.id).count();

    println!("  ✓ Records:       {}", records.len());
    println!("  {} Duplicate ids: {}", mark(duplicates == 0), duplicates);
    println!("  {} Self-parented: {}", mark(self_parented == 0), self_parented);
    println!("  {} Dangling parents: {}", mark(dangling.is_empty()), dangling.len());
    for record in dangling.iter().take(MAX_REPORTED) {
        println!(
            "      '{}' (id={}) → missing parent {}",
            record.name, record.id, record.parent
        );
    }
    println!("└────────────────────────────────────────────────────────────┘");
    println!();

    // === STAGE 2: TREE ===
    println!("┌─ STAGE 2: TREE CONSTRUCTION ───────────────────────────────┐");
    let start = std::time::Instant::now();
    let forest = tree::build_category_tree(&records);
    let duration = start.elapsed();
    println!("  ✓ Built in {:.2}ms", duration.as_secs_f64() * 1000.0);

    let mut errors = 0;

    let reachable: Vec<_> = forest.walk().collect();
    let unique: HashSet<_> = reachable.iter().map(|(id, _)| *id).collect();
    if reachable.len() != forest.len() || unique.len() != forest.len() {
        println!(
            "  ✗ Totality: {} reachable ({} unique) of {} nodes",
            reachable.len(),
            unique.len(),
            forest.len()
        );
        errors += 1;
    } else {
        println!("  ✓ Totality: every node reachable exactly once");
    }

    let mut order_errors = 0;
    let mut depth_errors = 0;
    for &(id, depth) in &reachable {
        let node = forest.get(id);
        if node.depth != depth {
            depth_errors += 1;
        }

        let siblings: Vec<_> = forest.children(id).collect();
        for pair in siblings.windows(2) {
            let (a, b) = (forest.get(pair[0]), forest.get(pair[1]));
            if collate::compare(&a.name, &b.name) == Ordering::Greater {
                if order_errors < MAX_REPORTED {
                    println!("  ✗ Order: '{}' listed before '{}'", a.name, b.name);
                }
                order_errors += 1;
            }
        }
    }
    for pair in forest.roots().windows(2) {
        let (a, b) = (forest.get(pair[0]), forest.get(pair[1]));
        if collate::compare(&a.name, &b.name) == Ordering::Greater {
            order_errors += 1;
        }
    }

    println!("  {} Sibling order errors: {}", mark(order_errors == 0), order_errors);
    println!("  {} Depth errors: {}", mark(depth_errors == 0), depth_errors);
    errors += order_errors + depth_errors;

    // Every node must be found again through its own URL path
    let mut unresolvable = 0;
    for &(id, _) in &reachable {
        let path = resolve::slug_path(&forest, id);
        if resolve::resolve_path(&forest, &path).map(|m| m.active) != Some(id) {
            if unresolvable < MAX_REPORTED {
                println!(
                    "  ⚠ '{}' shadowed by a sibling with the same slug ({})",
                    forest.get(id).name,
                    path.join("/")
                );
            }
            unresolvable += 1;
        }
    }
    println!("  {} Unreachable by URL: {}", mark(unresolvable == 0), unresolvable);
    println!("└────────────────────────────────────────────────────────────┘");
    println!();

    if errors > 0 {
        bail!("{} invariant violations", errors);
    }
    println!("✓ Catalog is consistent");
    Ok(())
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "⚠"
    }
}
