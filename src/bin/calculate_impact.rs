//! Impact Calculator Demo
//!
//! Computes the environmental impact of one media session and prints a
//! report. Positional arguments with the model defaults:
//!
//!   calculate_impact [device] [content] [connectivity] [minutes] [--json]
//!
//! Defaults: laptop text 3G 120. Unrecognized device/content/connectivity
//! labels fall back to laptop/text/WiFi, matching the model.
//!
//! Run with: cargo run --bin calculate_impact -- phone video 5G 30

use anyhow::{Context, Result};
use webenergy_rust::{calculate_impact, render_report, UsageSession};

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let json = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    let device = args.first().map_or("laptop", String::as_str);
    let content = args.get(1).map_or("text", String::as_str);
    let connectivity = args.get(2).map_or("3G", String::as_str);
    let duration_minutes: f64 = match args.get(3) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid duration in minutes: {:?}", raw))?,
        None => 120.0,
    };

    let session = UsageSession::from_labels(device, content, connectivity, duration_minutes);
    let result = calculate_impact(&session);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&session, &result));
    }

    Ok(())
}
