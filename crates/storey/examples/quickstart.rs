//! Storey quickstart: generate a layout and apply it to an in-memory host.
//!
//! Demonstrates:
//!   1. Configuring units and naming schemes
//!   2. Turning dialog text into a LayoutRequest with default substitution
//!   3. Generating grids and levels
//!   4. Applying the result transactionally, replacing existing levels
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use storey::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SetupError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ─── Configuration ──────────────────────────────────────────

    let config = LayoutConfig {
        units: UnitConversion::new(LinearUnit::Meters, LinearUnit::Millimeters),
        x_naming: GridNaming::Numeric,
        y_naming: GridNaming::Alphabetic,
        ..LayoutConfig::default()
    };
    let setup = ProjectSetup::new(config, SetupOptions::default())?;

    // ─── A document that already has levels ─────────────────────

    let mut doc = MemoryDocument::new();
    for (index, elevation) in [0.0, 4000.0].into_iter().enumerate() {
        doc.seed_level(LevelSpec {
            index,
            name: format!("Old {index}"),
            elevation,
        });
    }

    // ─── Dialog input (one token is a typo) ─────────────────────

    let form = LayoutForm {
        grid_count_x: "4".into(),
        grid_count_y: "3".into(),
        spacing_x: "7.5".into(),
        spacing_y: "6".into(),
        level_heights: "4.5; 3.6; 3.6m; 3.6".into(),
    };

    let outcome = setup.run(&mut Some(form), &mut doc, &mut LogNotifier)?;
    if let SetupOutcome::Succeeded(report) = &outcome {
        println!(
            "created {} grids and {} levels, removed {} old levels",
            report.grids.len(),
            report.levels.len(),
            report.removed_levels
        );
    }

    for grid in doc.grids() {
        println!("grid {:>3}  {} -> {}", grid.name, grid.start, grid.end);
    }
    for level in doc.levels() {
        println!("{:<8}  {:>8.1} mm", level.name, level.elevation);
    }
    Ok(())
}
