//! Model constants
//!
//! Every coefficient of the impact model in one place: device power draws,
//! the traffic model (payload sizes), per-request and per-byte energy costs,
//! access-network power, and the conversion factors used to turn joules into
//! the headline equivalents.

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Joules per watt-hour
pub const JOULES_PER_WATT_HOUR: f64 = 3600.0;

// ---------------------------------------------------------------------------
// Device power draw (watts)
// ---------------------------------------------------------------------------

/// Power draw of a phone (W)
pub const POWER_PHONE_W: f64 = 1.0;

/// Power draw of a tablet (W)
pub const POWER_TABLET_W: f64 = 3.0;

/// Power draw of a desktop PC (W)
pub const POWER_PC_W: f64 = 115.0;

/// Power draw of a laptop (W); also the fallback for unrecognized devices
pub const POWER_LAPTOP_W: f64 = 32.0;

/// Extra device draw while decoding video (multiplier on base power)
pub const VIDEO_POWER_MULTIPLIER: f64 = 1.15;

// ---------------------------------------------------------------------------
// Traffic model
// ---------------------------------------------------------------------------

/// Fixed payload of a text page load (bytes), independent of duration
pub const TEXT_PAGE_BYTES: f64 = 8_000_000.0;

/// Video stream bitrate assumption (bytes per second)
pub const VIDEO_BYTES_PER_SECOND: f64 = 1_100_000.0;

// ---------------------------------------------------------------------------
// Server and network energy coefficients
// ---------------------------------------------------------------------------

/// Fixed origin-side cost of serving one request (J), independent of payload
pub const ORIGIN_ENERGY_PER_REQUEST_J: f64 = 306.0;

/// Origin-side cost per byte served (J/byte)
pub const SERVER_ENERGY_PER_BYTE_J: f64 = 6.9e-6;

/// Core-network transport cost per byte (J/byte)
pub const NETWORK_ENERGY_PER_BYTE_J: f64 = 0.000045;

/// 3G access-network cost per byte (J/byte)
pub const ACCESS_3G_ENERGY_PER_BYTE_J: f64 = 4.55e-5;

/// WiFi access-point draw (W), modeled as flat per-second consumption
pub const WIFI_POWER_W: f64 = 10.0;

/// 5G efficiency factor relative to WiFi's flat draw.
///
/// 5G is modeled as 90% more energy efficient than WiFi, so its flat
/// per-second draw is WiFi's scaled by this factor.
pub const ACCESS_5G_EFFICIENCY: f64 = 0.1;

// ---------------------------------------------------------------------------
// Equivalents
// ---------------------------------------------------------------------------

/// Carbon intensity of consumed energy (g CO2 per Wh)
pub const CARBON_G_PER_WH: f64 = 0.525;

/// Petrol-car emission factor used for the driving equivalent (kg CO2 per km)
pub const CAR_EMISSIONS_KG_PER_KM: f64 = 0.20864;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Power draw of the reference light bulb (W)
pub const LIGHT_BULB_POWER_W: f64 = 11.0;
