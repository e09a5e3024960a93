//! Impact Calculator
//!
//! Top-level coordinator: composes the per-term energy functions and the
//! equivalents into one [`ImpactResult`] for a session. Deterministic and
//! infallible; degenerate inputs (duration <= 0) produce degenerate floats
//! rather than errors, matching the unguarded reference model. Callers who
//! want validation build the session with `UsageSession::try_new` first.

use crate::energy::EnergyBreakdown;
use crate::equivalents::{carbon_grams, driving_meters, joules_to_wh, light_bulb_ratio};
use crate::session::UsageSession;
use serde::{Deserialize, Serialize};

/// Full result of an impact computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Total energy consumed (Wh)
    pub energy_wh: f64,
    /// Carbon emissions (g CO2)
    pub carbon_g: f64,
    /// Petrol-car driving-distance equivalent (m)
    pub driving_m: f64,
    /// Session energy over 11W-bulb energy for the same interval
    /// (dimensionless)
    pub light_bulb_ratio: f64,
    /// Per-term energy breakdown (joules)
    pub breakdown: EnergyBreakdown,
}

/// Compute the environmental impact of one session.
///
/// The four headline quantities are derived from a single total, so
/// `carbon_g == 0.525 * energy_wh` and
/// `driving_m == (carbon_g / 0.20864) * 1000` hold exactly for every result.
pub fn calculate_impact(session: &UsageSession) -> ImpactResult {
    let breakdown = EnergyBreakdown::for_session(session);

    let energy_wh = joules_to_wh(breakdown.total_j);
    let carbon_g = carbon_grams(energy_wh);

    ImpactResult {
        energy_wh,
        carbon_g,
        driving_m: driving_meters(carbon_g),
        light_bulb_ratio: light_bulb_ratio(breakdown.total_j, session.duration_secs()),
        breakdown,
    }
}

/// Compute the impact from free-form labels.
///
/// Label resolution follows the silent fallbacks: unknown devices behave as
/// `laptop`, unknown connectivity as `WiFi`, and any content label other
/// than `"video"` as `text`.
pub fn calculate_impact_from_labels(
    device: &str,
    content: &str,
    connectivity: &str,
    duration_minutes: f64,
) -> ImpactResult {
    calculate_impact(&UsageSession::from_labels(
        device,
        content,
        connectivity,
        duration_minutes,
    ))
}
