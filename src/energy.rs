//! Energy Terms
//!
//! The four energy components of a session, each in joules:
//!   1. Server: fixed origin cost per request plus a per-byte term
//!   2. Core network: per-byte transport cost
//!   3. Access network: technology-dependent last-mile cost (3G/5G/WiFi)
//!   4. User device: device draw over the session length
//!
//! Each term is a standalone function over the session's derived quantities
//! so the arithmetic can be tested in isolation; [`EnergyBreakdown::for_session`]
//! composes them.

use crate::constants::*;
use crate::session::{Connectivity, UsageSession};
use serde::{Deserialize, Serialize};

/// Origin-side energy: fixed per-request cost plus a volume-proportional
/// term, scaled by the number of page loads.
pub fn server_energy_j(data_volume_bytes: f64, page_loads: f64) -> f64 {
    (ORIGIN_ENERGY_PER_REQUEST_J + SERVER_ENERGY_PER_BYTE_J * data_volume_bytes) * page_loads
}

/// Core-network transport energy, proportional to total bytes moved.
pub fn network_energy_j(data_volume_bytes: f64, page_loads: f64) -> f64 {
    NETWORK_ENERGY_PER_BYTE_J * data_volume_bytes * page_loads
}

/// Last-mile access-network energy.
///
/// 3G scales with bytes transferred; 5G and WiFi are modeled as flat
/// per-second draws, with 5G at one tenth of WiFi's power.
pub fn access_network_energy_j(
    connectivity: Connectivity,
    data_volume_bytes: f64,
    page_loads: f64,
    duration_secs: f64,
) -> f64 {
    match connectivity {
        Connectivity::ThreeG => ACCESS_3G_ENERGY_PER_BYTE_J * data_volume_bytes * page_loads,
        Connectivity::FiveG => (WIFI_POWER_W * ACCESS_5G_EFFICIENCY) * duration_secs,
        Connectivity::Wifi => WIFI_POWER_W * duration_secs,
    }
}

/// User-device energy: effective draw over the session length.
pub fn device_energy_j(device_power_watts: f64, duration_secs: f64) -> f64 {
    device_power_watts * duration_secs
}

/// Per-term energy breakdown for one session, all joules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Origin/server energy
    pub server_j: f64,
    /// Core-network transport energy
    pub network_j: f64,
    /// Last-mile access-network energy
    pub access_network_j: f64,
    /// User-device energy
    pub device_j: f64,
    /// Sum of the four terms
    pub total_j: f64,
}

impl EnergyBreakdown {
    /// Compute all four terms for a session
    pub fn for_session(session: &UsageSession) -> Self {
        let duration_secs = session.duration_secs();
        let page_loads = session.page_loads();
        let data_volume = session.data_volume_bytes();

        let server_j = server_energy_j(data_volume, page_loads);
        let network_j = network_energy_j(data_volume, page_loads);
        let access_network_j = access_network_energy_j(
            session.connectivity,
            data_volume,
            page_loads,
            duration_secs,
        );
        let device_j = device_energy_j(session.device_power_watts(), duration_secs);

        Self {
            server_j,
            network_j,
            access_network_j,
            device_j,
            total_j: server_j + network_j + access_network_j + device_j,
        }
    }
}
