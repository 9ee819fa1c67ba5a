/// Diagnostic tool for the wallpaper panel calculator
use anyhow::{bail, Context, Result};
use storefront_rs::layout::{compute_layout_from_text, parse_dimension, LayoutConfig, SizeBounds};

fn optional_bound(arg: Option<String>) -> Result<Option<f64>> {
    arg.map(|text| parse_dimension(&text).with_context(|| format!("bad bound '{}'", text)))
        .transpose()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront_rs=debug".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(width), Some(height)) = (args.next(), args.next()) else {
        bail!("usage: debug-layout <width> <height> [max_width] [max_height] [max_panel_width]");
    };

    let bounds = SizeBounds::new(optional_bound(args.next())?, optional_bound(args.next())?);
    let mut config = LayoutConfig::default();
    if let Some(panel) = optional_bound(args.next())? {
        config.max_panel_width_cm = panel;
    }

    println!("=== DIAGNOSTIC: Panel layout ===");
    println!("Requested: {} x {} cm", width, height);
    println!(
        "Bounds:    width {:?}, height {:?}, panel {} cm",
        bounds.max_width_cm,
        bounds.max_height_cm,
        config.effective_panel_width()
    );

    let layout = compute_layout_from_text(&width, &height, &bounds, &config)
        .context("cannot compute layout")?;

    println!("\n{}", layout);

    let covered = layout.covered_width_cm();
    if covered != u64::from(layout.width_cm) {
        println!(
            "note: {} x {} cm = {} cm covers {} cm width (rounding)",
            layout.panel_count, layout.panel_width_cm, covered, layout.width_cm
        );
    }

    Ok(())
}
