//! # Locate Subcommand
//!
//! Geocodes an address for map display. Purely informational — the
//! coordinate plays no part in any compliance calculation. A failed or
//! empty lookup prints the Hōfu City Hall fallback.

use clap::Args;

use kisei_geocode::GeocodeClient;

/// Arguments for the `kisei locate` subcommand.
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// The address to look up (e.g., 防府市寿町).
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Emit machine-readable JSON instead of the report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the locate subcommand.
///
/// Exit code: 0 for a geocoder match, 1 when the fallback coordinate was
/// substituted (so scripts can tell the difference).
pub fn run_locate(args: &LocateArgs) -> anyhow::Result<u8> {
    let runtime = crate::geocode_runtime()?;
    let client = GeocodeClient::from_env()?;
    let location = runtime.block_on(client.locate_or_fallback(&args.address));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&location)?);
    } else if location.matched {
        println!(
            "{:.4}, {:.4}  {}",
            location.coordinate.latitude,
            location.coordinate.longitude,
            location.display_name.as_deref().unwrap_or(&args.address)
        );
    } else {
        println!(
            "no match for \"{}\" — showing Hōfu City Hall ({:.4}, {:.4})",
            args.address, location.coordinate.latitude, location.coordinate.longitude
        );
    }

    Ok(if location.matched { 0 } else { 1 })
}
