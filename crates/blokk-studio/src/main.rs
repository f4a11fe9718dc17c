mod config;
mod export;

use anyhow::{Context, Result};

use blokk_engine::logging::init_logging;
use blokk_shapes::ShapeRegistry;

use crate::config::StudioConfig;

fn main() -> Result<()> {
    let config = StudioConfig::from_env()?;
    init_logging(config.logging.clone());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          BLOKK SHAPE STUDIO v0.1       ║");
    println!("  ║   usvg outlines  ·  lyon extrusion     ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    // Composition root: the one registry every consumer borrows from.
    let registry = ShapeRegistry::with_catalog().context("registering the shape catalog")?;
    registry
        .selection()
        .subscribe(|shape| log::info!("selected `{}`", shape.name()));

    for (i, shape) in registry.iter().enumerate() {
        log::debug!("#{i} {:<18} {}", shape.name(), shape.to_markup(0.0, 0.0, 1.0));
    }

    if let Some(name) = &config.select {
        let index = registry
            .iter()
            .position(|s| s.name() == name.as_str())
            .with_context(|| format!("no shape named `{name}`"))?;
        registry.select_index(index);
    }

    let exported = export::export_catalog(&registry, &config.out_dir, &config.thumbnail)
        .with_context(|| format!("exporting to {}", config.out_dir.display()))?;

    for e in &exported {
        log::debug!("wrote {} and {}", e.thumbnail.display(), e.mesh.display());
    }
    println!("  {} shapes written to {}", exported.len(), config.out_dir.display());
    let selected = registry.selected();
    println!("  Selected: {} ({})", selected.name(), selected.kind());
    println!();
    Ok(())
}
