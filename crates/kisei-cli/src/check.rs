//! # Check Subcommand
//!
//! The simulator's main operation from the terminal: evaluate a plan
//! against a district's limits and print the ratios, the effective
//! limits, the verdict, and the capacity figures. An optional address is
//! geocoded for display only.

use clap::Args;

use kisei_core::ValidationError;
use kisei_geocode::GeocodeClient;
use kisei_zoning::{capacity, evaluate, BuildingPlan, ZoningCatalog};

/// Arguments for the `kisei check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Use district: official Japanese name or slug (see `kisei districts`).
    #[arg(long, short = 'd')]
    pub district: String,

    /// Lot area (敷地面積) in square metres.
    #[arg(long)]
    pub site_area: f64,

    /// Building footprint (建築面積) in square metres.
    #[arg(long)]
    pub building_area: f64,

    /// Total floor area (延べ床面積) in square metres.
    #[arg(long)]
    pub total_floor_area: f64,

    /// Apply the corner-lot relaxation (角地緩和, +10 points of coverage).
    #[arg(long)]
    pub corner_lot: bool,

    /// Address to geocode for the map pin (display only).
    #[arg(long)]
    pub address: Option<String>,

    /// Emit machine-readable JSON instead of the report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the check subcommand.
///
/// Exit code: 0 when the plan complies, 1 when it does not or an input is
/// rejected.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<u8> {
    let catalog = ZoningCatalog::hofu();
    let rule = match catalog.get(&args.district) {
        Ok(rule) => *rule,
        Err(e) => return reject(&e),
    };

    let plan = BuildingPlan {
        site_area_sqm: args.site_area,
        building_area_sqm: args.building_area,
        total_floor_area_sqm: args.total_floor_area,
        corner_lot: args.corner_lot,
    };

    let assessment = match evaluate(&plan, &rule) {
        Ok(a) => a,
        Err(e) => return reject(&e),
    };
    let cap = match capacity(args.site_area, args.corner_lot, &rule) {
        Ok(cap) => cap,
        Err(e) => return reject(&e),
    };

    // Display-only; lookup failure degrades to the City Hall fallback
    // inside the client, and a broken geocoder configuration merely omits
    // the location. Neither can block the verdict.
    let location = match args.address.as_deref() {
        Some(address) if !address.trim().is_empty() => match GeocodeClient::from_env() {
            Ok(client) => {
                let runtime = crate::geocode_runtime()?;
                Some(runtime.block_on(client.locate_or_fallback(address)))
            }
            Err(e) => {
                tracing::warn!("geocoder not configured: {e}. Omitting map location.");
                None
            }
        },
        _ => None,
    };

    if args.json {
        let out = serde_json::json!({
            "district": rule.district.official_name(),
            "assessment": assessment,
            "capacity": cap,
            "location": location,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} (建ぺい率 {}% / 容積率 {}%)",
            rule.district.official_name(),
            rule.coverage_limit,
            rule.floor_area_limit
        );
        if let Some(ref loc) = location {
            let origin = if loc.matched {
                loc.display_name.as_deref().unwrap_or("geocoded match")
            } else {
                "no match — showing Hōfu City Hall"
            };
            println!(
                "location: {:.4}, {:.4} ({origin})",
                loc.coordinate.latitude, loc.coordinate.longitude
            );
        }
        println!(
            "coverage:   {:>7.2}% of {:>5.1}% limit  [{}]",
            assessment.coverage_percent,
            assessment.effective_coverage_limit,
            pass_mark(assessment.coverage_ok)
        );
        println!(
            "floor area: {:>7.2}% of {:>5.1}% limit  [{}]",
            assessment.floor_area_percent,
            assessment.effective_floor_area_limit,
            pass_mark(assessment.floor_area_ok)
        );
        println!(
            "buildable:  footprint up to {:.1}㎡, total floor up to {:.1}㎡ on {:.1}㎡",
            cap.max_building_footprint_sqm, cap.max_total_floor_area_sqm, cap.site_area_sqm
        );
        if assessment.compliant {
            println!("verdict: within limits");
        } else {
            println!("verdict: over the limits — revise the plan");
        }
    }

    Ok(if assessment.compliant { 0 } else { 1 })
}

fn pass_mark(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "over"
    }
}

fn reject(e: &ValidationError) -> anyhow::Result<u8> {
    eprintln!("error: {e}");
    Ok(1)
}
