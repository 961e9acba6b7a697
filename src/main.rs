use anyhow::{Context, Result};
use clap::Parser;

mod cli;

use cli::Cli;
use wbt_stubgen::harvest::{harvest, parse_toolboxes};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    log::info!("Reading tool metadata from {}", cli.toolkit_source());
    let toolkit = cli.toolkit()?;

    // Handle list-toolboxes flag
    if cli.list_toolboxes {
        let listing = toolkit
            .list_toolboxes()
            .context("Failed to list toolboxes")?;
        println!("Available toolboxes:");
        for toolbox in parse_toolboxes(&listing)? {
            println!("  - {toolbox}");
        }
        return Ok(());
    }

    // Resolve the output path before harvesting
    let output_path = cli.output_path()?;
    log::info!(
        "Writing stubs to {} ({})",
        output_path.display(),
        cli.output_source()
    );

    let harvested = harvest(toolkit.as_ref()).context("Failed to harvest tool metadata")?;
    let report = wbt_stubgen::render(&harvested).context("Failed to render stubs")?;

    wbt_stubgen::output::write_report(&output_path, &report.text)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    log::info!(
        "Wrote {} stubs in {} toolboxes to {} ({} bytes)",
        report.stubs,
        report.toolboxes,
        output_path.display(),
        report.text.len()
    );
    eprintln!("✓ Stubs written to {}", output_path.display());

    Ok(())
}
