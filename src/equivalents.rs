//! Equivalents
//!
//! Conversions from a session's total energy to the headline quantities:
//! watt-hours, carbon grams, petrol-car driving meters, and the ratio of the
//! session's energy to an 11W light bulb running for the same interval.

use crate::constants::*;

/// Joules to watt-hours
pub fn joules_to_wh(total_j: f64) -> f64 {
    total_j / JOULES_PER_WATT_HOUR
}

/// Carbon emissions in grams for a given energy consumption
pub fn carbon_grams(energy_wh: f64) -> f64 {
    CARBON_G_PER_WH * energy_wh
}

/// Driving-distance equivalent in meters for a petrol car.
///
/// Grams of CO2 over the car's kg-per-km emission factor gives kilometers
/// per thousand, so the factor of 1000 lands the result in meters.
pub fn driving_meters(carbon_g: f64) -> f64 {
    (carbon_g / CAR_EMISSIONS_KG_PER_KM) * METERS_PER_KM
}

/// Ratio of the session's total energy to what an 11W bulb would use over
/// the same duration.
///
/// Dimensionless, despite the bulb framing: a value of 2.0 means the session
/// used twice the energy of one bulb left on for the whole session. Division
/// by zero at zero duration is deliberate and mirrors the unguarded model.
pub fn light_bulb_ratio(total_j: f64, duration_secs: f64) -> f64 {
    total_j / (LIGHT_BULB_POWER_W * duration_secs)
}
