//! Webenergy Rust Implementation
//!
//! Estimates the environmental impact of consuming digital media: given a
//! device type, content type, connectivity method, and duration, computes
//! total energy (Wh), carbon emissions (g CO2), a petrol-car driving
//! equivalent (m), and an 11W-light-bulb energy ratio.
//!
//! Structure:
//! - `constants`: every coefficient of the model
//! - `session`: typed inputs with silent-fallback label parsing
//! - `energy`: the four energy terms (server, network, access, device)
//! - `equivalents`: joules to Wh / carbon / driving / bulb ratio
//! - `calculator`: the top-level `calculate_impact` entry points
//! - `report`: plain-text rendering
//!
//! The computation is pure and deterministic; unrecognized categorical
//! labels fall back to defaults (laptop / text / WiFi) instead of failing.

pub mod calculator;
pub mod constants;
pub mod energy;
pub mod equivalents;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use calculator::{calculate_impact, calculate_impact_from_labels, ImpactResult};
pub use energy::EnergyBreakdown;
pub use report::render_report;
pub use session::{Connectivity, ContentType, DeviceType, ImpactError, UsageSession};
