//! Usage Session Vocabulary
//!
//! Typed inputs for one media-consumption session: the device, the content
//! type, the access-network technology, and the duration in minutes.
//!
//! Label parsing is deliberately infallible. Unrecognized labels resolve to
//! a documented fallback variant instead of failing: unknown devices behave
//! as a laptop (32W), unknown connectivity behaves as WiFi, and any content
//! label other than `"video"` is treated as text. Comparisons are exact and
//! case-sensitive.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Device used to consume the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Phone (1W draw)
    Phone,

    /// Tablet (3W draw)
    Tablet,

    /// Desktop PC (115W draw)
    Pc,

    /// Laptop (32W draw); fallback for unrecognized device labels
    Laptop,
}

impl DeviceType {
    /// Resolve a free-form device label.
    ///
    /// Anything other than the four known lowercase labels resolves to
    /// `Laptop`, which carries the 32W fallback draw.
    pub fn from_label(label: &str) -> Self {
        match label {
            "phone" => DeviceType::Phone,
            "tablet" => DeviceType::Tablet,
            "pc" => DeviceType::Pc,
            "laptop" => DeviceType::Laptop,
            _ => DeviceType::Laptop,
        }
    }

    /// Base power draw in watts, before any content-type multiplier
    pub fn power_watts(&self) -> f64 {
        match self {
            DeviceType::Phone => POWER_PHONE_W,
            DeviceType::Tablet => POWER_TABLET_W,
            DeviceType::Pc => POWER_PC_W,
            DeviceType::Laptop => POWER_LAPTOP_W,
        }
    }

    /// Canonical label for display
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Phone => "phone",
            DeviceType::Tablet => "tablet",
            DeviceType::Pc => "pc",
            DeviceType::Laptop => "laptop",
        }
    }

    /// All known devices
    pub fn all() -> &'static [DeviceType] {
        &[
            DeviceType::Phone,
            DeviceType::Tablet,
            DeviceType::Pc,
            DeviceType::Laptop,
        ]
    }
}

/// Kind of content consumed during the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Text browsing: one fixed-size page load per minute
    Text,

    /// Video streaming: one session-long load at a fixed bitrate
    Video,
}

impl ContentType {
    /// Resolve a free-form content label.
    ///
    /// Only the exact label `"video"` selects `Video`; every other label
    /// (including typos) is text.
    pub fn from_label(label: &str) -> Self {
        if label == "video" {
            ContentType::Video
        } else {
            ContentType::Text
        }
    }

    /// Canonical label for display
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Video => "video",
        }
    }
}

/// Access-network technology for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connectivity {
    /// 3G cellular: energy scales with bytes transferred
    #[serde(rename = "3G")]
    ThreeG,

    /// 5G cellular: flat per-second draw, 90% more efficient than WiFi
    #[serde(rename = "5G")]
    FiveG,

    /// WiFi: flat per-second draw; fallback for unrecognized labels
    #[serde(rename = "WiFi")]
    Wifi,
}

impl Connectivity {
    /// Resolve a free-form connectivity label.
    ///
    /// Only the exact labels `"3G"` and `"5G"` select the cellular branches;
    /// everything else (e.g. `"4G"`, `"wifi"`, `"ethernet"`) behaves as WiFi.
    pub fn from_label(label: &str) -> Self {
        match label {
            "3G" => Connectivity::ThreeG,
            "5G" => Connectivity::FiveG,
            _ => Connectivity::Wifi,
        }
    }

    /// Canonical label for display
    pub fn label(&self) -> &'static str {
        match self {
            Connectivity::ThreeG => "3G",
            Connectivity::FiveG => "5G",
            Connectivity::Wifi => "WiFi",
        }
    }

    /// All known connectivity methods
    pub fn all() -> &'static [Connectivity] {
        &[
            Connectivity::ThreeG,
            Connectivity::FiveG,
            Connectivity::Wifi,
        ]
    }
}

/// Errors from the validating session constructor
#[derive(Debug, Error, PartialEq)]
pub enum ImpactError {
    /// Duration must be a positive, finite number of minutes
    #[error("duration must be positive and finite, got {minutes} minutes")]
    InvalidDuration { minutes: f64 },
}

/// One media-consumption session: the four model inputs.
///
/// Construct with [`UsageSession::new`] (no validation, matching the
/// reference model which computes degenerate floats for non-positive
/// durations) or [`UsageSession::try_new`] (rejects non-positive and
/// non-finite durations).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageSession {
    pub device: DeviceType,
    pub content: ContentType,
    pub connectivity: Connectivity,
    pub duration_minutes: f64,
}

impl UsageSession {
    /// Build a session without validating the duration
    pub fn new(
        device: DeviceType,
        content: ContentType,
        connectivity: Connectivity,
        duration_minutes: f64,
    ) -> Self {
        Self {
            device,
            content,
            connectivity,
            duration_minutes,
        }
    }

    /// Build a session, rejecting non-positive or non-finite durations
    pub fn try_new(
        device: DeviceType,
        content: ContentType,
        connectivity: Connectivity,
        duration_minutes: f64,
    ) -> Result<Self, ImpactError> {
        if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
            return Err(ImpactError::InvalidDuration {
                minutes: duration_minutes,
            });
        }
        Ok(Self::new(device, content, connectivity, duration_minutes))
    }

    /// Build a session from free-form labels, with the documented fallbacks
    pub fn from_labels(
        device: &str,
        content: &str,
        connectivity: &str,
        duration_minutes: f64,
    ) -> Self {
        Self::new(
            DeviceType::from_label(device),
            ContentType::from_label(content),
            Connectivity::from_label(connectivity),
            duration_minutes,
        )
    }

    /// Session length in seconds
    pub fn duration_secs(&self) -> f64 {
        self.duration_minutes * SECONDS_PER_MINUTE
    }

    /// Request count driving the server and network terms.
    ///
    /// A video session is one long-lived load; text browsing is modeled as
    /// one page load per minute.
    pub fn page_loads(&self) -> f64 {
        match self.content {
            ContentType::Video => 1.0,
            ContentType::Text => self.duration_minutes,
        }
    }

    /// Bytes transferred per page load.
    ///
    /// Video scales with duration at a fixed bitrate; text is a fixed
    /// payload regardless of duration.
    pub fn data_volume_bytes(&self) -> f64 {
        match self.content {
            ContentType::Video => self.duration_secs() * VIDEO_BYTES_PER_SECOND,
            ContentType::Text => TEXT_PAGE_BYTES,
        }
    }

    /// Effective device draw in watts, including the video decode overhead
    pub fn device_power_watts(&self) -> f64 {
        let base = self.device.power_watts();
        match self.content {
            ContentType::Video => base * VIDEO_POWER_MULTIPLIER,
            ContentType::Text => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_device_labels() {
        assert_eq!(DeviceType::from_label("phone"), DeviceType::Phone);
        assert_eq!(DeviceType::from_label("tablet"), DeviceType::Tablet);
        assert_eq!(DeviceType::from_label("pc"), DeviceType::Pc);
        assert_eq!(DeviceType::from_label("laptop"), DeviceType::Laptop);

        // Unknown labels fall back to the laptop constant
        assert_eq!(DeviceType::from_label("server"), DeviceType::Laptop);
        assert_eq!(DeviceType::from_label("Phone"), DeviceType::Laptop);
        assert_eq!(DeviceType::from_label(""), DeviceType::Laptop);
    }

    #[test]
    fn test_device_power_table() {
        assert_relative_eq!(DeviceType::Phone.power_watts(), 1.0);
        assert_relative_eq!(DeviceType::Tablet.power_watts(), 3.0);
        assert_relative_eq!(DeviceType::Pc.power_watts(), 115.0);
        assert_relative_eq!(DeviceType::Laptop.power_watts(), 32.0);
    }

    #[test]
    fn test_content_labels() {
        assert_eq!(ContentType::from_label("video"), ContentType::Video);
        assert_eq!(ContentType::from_label("text"), ContentType::Text);

        // Anything that is not exactly "video" is text
        assert_eq!(ContentType::from_label("Video"), ContentType::Text);
        assert_eq!(ContentType::from_label("vidoe"), ContentType::Text);
        assert_eq!(ContentType::from_label("audio"), ContentType::Text);
    }

    #[test]
    fn test_connectivity_labels() {
        assert_eq!(Connectivity::from_label("3G"), Connectivity::ThreeG);
        assert_eq!(Connectivity::from_label("5G"), Connectivity::FiveG);
        assert_eq!(Connectivity::from_label("WiFi"), Connectivity::Wifi);

        // Everything else behaves as WiFi
        assert_eq!(Connectivity::from_label("4G"), Connectivity::Wifi);
        assert_eq!(Connectivity::from_label("3g"), Connectivity::Wifi);
        assert_eq!(Connectivity::from_label("ethernet"), Connectivity::Wifi);
    }

    #[test]
    fn test_page_loads() {
        let text = UsageSession::from_labels("phone", "text", "3G", 120.0);
        assert_relative_eq!(text.page_loads(), 120.0);

        // Video is a single long-lived load regardless of duration
        let video = UsageSession::from_labels("phone", "video", "3G", 120.0);
        assert_relative_eq!(video.page_loads(), 1.0);
        let long_video = UsageSession::from_labels("phone", "video", "3G", 600.0);
        assert_relative_eq!(long_video.page_loads(), 1.0);
    }

    #[test]
    fn test_data_volume() {
        // Text payload is fixed regardless of duration
        let short = UsageSession::from_labels("pc", "text", "WiFi", 1.0);
        let long = UsageSession::from_labels("pc", "text", "WiFi", 600.0);
        assert_relative_eq!(short.data_volume_bytes(), 8_000_000.0);
        assert_relative_eq!(long.data_volume_bytes(), 8_000_000.0);

        // Video scales with duration at 1.1 MB/s
        let video = UsageSession::from_labels("pc", "video", "WiFi", 10.0);
        assert_relative_eq!(video.data_volume_bytes(), 600.0 * 1_100_000.0);
    }

    #[test]
    fn test_video_power_multiplier() {
        let text = UsageSession::from_labels("pc", "text", "WiFi", 10.0);
        let video = UsageSession::from_labels("pc", "video", "WiFi", 10.0);
        assert_relative_eq!(text.device_power_watts(), 115.0);
        assert_relative_eq!(video.device_power_watts(), 132.25);
    }

    #[test]
    fn test_try_new_validation() {
        let ok = UsageSession::try_new(
            DeviceType::Laptop,
            ContentType::Text,
            Connectivity::Wifi,
            120.0,
        );
        assert!(ok.is_ok());

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = UsageSession::try_new(
                DeviceType::Laptop,
                ContentType::Text,
                Connectivity::Wifi,
                bad,
            );
            assert!(err.is_err(), "duration {} should be rejected", bad);
        }
    }
}
