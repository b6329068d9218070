//! # Capacity Subcommand
//!
//! The "how much could I build" variant: given a district and a lot,
//! print the maximum footprint and total floor area.

use clap::Args;

use kisei_zoning::{capacity, corner_adjusted_limit, ZoningCatalog};

/// Arguments for the `kisei capacity` subcommand.
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Use district: official Japanese name or slug (see `kisei districts`).
    #[arg(long, short = 'd')]
    pub district: String,

    /// Lot area (敷地面積) in square metres.
    #[arg(long)]
    pub site_area: f64,

    /// Apply the corner-lot relaxation (角地緩和, +10 points of coverage).
    #[arg(long)]
    pub corner_lot: bool,

    /// Emit machine-readable JSON instead of the report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the capacity subcommand.
///
/// Exit code: 0 on success, 1 on rejected input.
pub fn run_capacity(args: &CapacityArgs) -> anyhow::Result<u8> {
    let catalog = ZoningCatalog::hofu();
    let rule = match catalog.get(&args.district) {
        Ok(rule) => *rule,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(1);
        }
    };

    let cap = match capacity(args.site_area, args.corner_lot, &rule) {
        Ok(cap) => cap,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(1);
        }
    };
    let coverage_limit = corner_adjusted_limit(f64::from(rule.coverage_limit), args.corner_lot);

    if args.json {
        let out = serde_json::json!({
            "district": rule.district.official_name(),
            "effective_coverage_limit": coverage_limit,
            "floor_area_limit": rule.floor_area_limit,
            "capacity": cap,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} — lot {:.1}㎡{}",
            rule.district.official_name(),
            cap.site_area_sqm,
            if args.corner_lot { " (corner lot)" } else { "" }
        );
        println!(
            "max footprint:   {:>9.1}㎡ ({:.0}% coverage)",
            cap.max_building_footprint_sqm, coverage_limit
        );
        println!(
            "max total floor: {:>9.1}㎡ ({}% floor area)",
            cap.max_total_floor_area_sqm, rule.floor_area_limit
        );
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_exits_zero() {
        // 150㎡ lot, 60% + corner → 70%, 200% floor area.
        let args = CapacityArgs {
            district: "第一種住居地域".into(),
            site_area: 150.0,
            corner_lot: true,
            json: true,
        };
        assert_eq!(run_capacity(&args).unwrap(), 0);
    }

    #[test]
    fn negative_site_exits_one() {
        let args = CapacityArgs {
            district: "商業地域".into(),
            site_area: -5.0,
            corner_lot: false,
            json: false,
        };
        assert_eq!(run_capacity(&args).unwrap(), 1);
    }
}
