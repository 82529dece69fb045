use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::intensity::{IntensityPeriod, deserialize_flexible_datetime};

/// Best-time response from the optimizer service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BestTime {
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub end_time: DateTime<Utc>,
    pub saved_grams_co2: i64,
}

/// Appliance descriptor attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub name: String,
    pub reason: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Recommended low-intensity window, computed by the optimizer service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationWindow {
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub end_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub average_intensity: f64,
}

/// One per-appliance recommendation card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceRecommendation {
    pub appliance: Appliance,
    pub window: RecommendationWindow,
}

/// An appliance preset offered by the time optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliancePreset {
    pub name: &'static str,
    pub duration_minutes: u32,
    pub power_kw: f64,
}

/// Presets shown as quick-query buttons.
pub const APPLIANCE_PRESETS: [AppliancePreset; 4] = [
    AppliancePreset {
        name: "Washing Machine",
        duration_minutes: 120,
        power_kw: 0.5,
    },
    AppliancePreset {
        name: "Dishwasher",
        duration_minutes: 90,
        power_kw: 0.7,
    },
    AppliancePreset {
        name: "Tumble Dryer",
        duration_minutes: 60,
        power_kw: 2.5,
    },
    AppliancePreset {
        name: "EV Charge (4h)",
        duration_minutes: 240,
        power_kw: 7.0,
    },
];

/// Locates a recommendation window within an ordered forecast.
///
/// Returns the slot indices whose `from`/`to` match the window's start and end
/// exactly, or `None` when either boundary is missing from the forecast. The
/// chart only shades a highlight when both boundaries resolve.
pub fn window_bounds(
    slots: &[IntensityPeriod],
    window: &RecommendationWindow,
) -> Option<(usize, usize)> {
    let start = slots.iter().position(|s| s.from == window.start_time)?;
    let end = slots.iter().position(|s| s.to == window.end_time)?;
    Some((start, end))
}
