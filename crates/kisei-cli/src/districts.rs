//! # Districts Subcommand
//!
//! Prints the zoning catalog in presentation order, either as a plain
//! table or as JSON for scripting.

use clap::Args;

use kisei_zoning::ZoningCatalog;

/// Arguments for the `kisei districts` subcommand.
#[derive(Args, Debug)]
pub struct DistrictsArgs {
    /// Emit machine-readable JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the districts subcommand. Always exits 0.
pub fn run_districts(args: &DistrictsArgs) -> anyhow::Result<u8> {
    let catalog = ZoningCatalog::hofu();

    if args.json {
        let entries: Vec<serde_json::Value> = catalog
            .rules()
            .iter()
            .map(|r| {
                serde_json::json!({
                    "name": r.district.official_name(),
                    "slug": r.district.slug(),
                    "coverage_limit": r.coverage_limit,
                    "floor_area_limit": r.floor_area_limit,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(0);
    }

    println!("{:<28} {:>8} {:>8}", "用途地域", "建ぺい率", "容積率");
    for rule in catalog.rules() {
        println!(
            "{:<28} {:>7}% {:>7}%",
            rule.district.official_name(),
            rule.coverage_limit,
            rule.floor_area_limit
        );
    }
    Ok(0)
}
