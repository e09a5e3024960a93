//! Report Rendering
//!
//! Plain-text presentation of a session and its computed impact, for the
//! demo binary and anywhere a human-readable summary is wanted.

use crate::calculator::ImpactResult;
use crate::session::UsageSession;
use std::fmt::Write;

/// Render a session and its result as a multi-line text report.
pub fn render_report(session: &UsageSession, result: &ImpactResult) -> String {
    let mut out = String::new();

    writeln!(out, "Digital media environmental impact").unwrap();
    writeln!(out, "===================================").unwrap();
    writeln!(
        out,
        "Session: {} / {} / {} / {} min",
        session.device.label(),
        session.content.label(),
        session.connectivity.label(),
        session.duration_minutes
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Energy breakdown (J):").unwrap();
    writeln!(out, "  Server:         {:>14.2}", result.breakdown.server_j).unwrap();
    writeln!(out, "  Core network:   {:>14.2}", result.breakdown.network_j).unwrap();
    writeln!(
        out,
        "  Access network: {:>14.2}",
        result.breakdown.access_network_j
    )
    .unwrap();
    writeln!(out, "  Device:         {:>14.2}", result.breakdown.device_j).unwrap();
    writeln!(out, "  Total:          {:>14.2}", result.breakdown.total_j).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Total energy:       {:.3} Wh", result.energy_wh).unwrap();
    writeln!(out, "Carbon emissions:   {:.3} g CO2", result.carbon_g).unwrap();
    writeln!(out, "Driving equivalent: {:.1} m (petrol car)", result.driving_m).unwrap();
    writeln!(
        out,
        "Light bulb ratio:   {:.3}x an 11W bulb over the same interval",
        result.light_bulb_ratio
    )
    .unwrap();

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_impact;

    #[test]
    fn test_report_contains_session_and_headlines() {
        let session = UsageSession::from_labels("phone", "text", "3G", 120.0);
        let result = calculate_impact(&session);
        let report = render_report(&session, &result);

        assert!(report.contains("phone / text / 3G / 120 min"));
        assert!(report.contains("Total energy:       38.173 Wh"));
        assert!(report.contains("Carbon emissions:   20.041 g CO2"));
        assert!(report.contains("Access network:"));
    }
}
