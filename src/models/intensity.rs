use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Carbon intensity index category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityIndex {
    #[serde(rename = "very low")]
    VeryLow,
    Low,
    Moderate,
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl IntensityIndex {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            IntensityIndex::VeryLow => "intensity-very-low",
            IntensityIndex::Low => "intensity-low",
            IntensityIndex::Moderate => "intensity-moderate",
            IntensityIndex::High => "intensity-high",
            IntensityIndex::VeryHigh => "intensity-very-high",
        }
    }

    /// Returns human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            IntensityIndex::VeryLow => "Very Low",
            IntensityIndex::Low => "Low",
            IntensityIndex::Moderate => "Moderate",
            IntensityIndex::High => "High",
            IntensityIndex::VeryHigh => "Very High",
        }
    }

    /// Returns color for display (hex code)
    pub fn color(&self) -> &'static str {
        match self {
            IntensityIndex::VeryLow => "#4caf50",  // dark green
            IntensityIndex::Low => "#8bc34a",      // light green
            IntensityIndex::Moderate => "#ffc107", // amber
            IntensityIndex::High => "#ff9800",     // orange
            IntensityIndex::VeryHigh => "#f44336", // red
        }
    }
}

/// Intensity values for a specific half-hour period.
///
/// The upstream API always sends `forecast` for future periods and fills
/// `actual` in once the period has been metered; a reading is only usable
/// when at least one of the two is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intensity {
    /// Forecasted carbon intensity (gCO2/kWh)
    #[serde(default)]
    pub forecast: Option<u32>,

    /// Actual carbon intensity if available (gCO2/kWh)
    #[serde(default)]
    pub actual: Option<u32>,

    /// Intensity category
    pub index: IntensityIndex,
}

impl Intensity {
    /// Best available value: actual when present, otherwise forecast.
    pub const fn value(&self) -> Option<u32> {
        match self.actual {
            Some(v) => Some(v),
            None => self.forecast,
        }
    }

    /// A reading is valid when at least one of actual/forecast is present.
    pub const fn is_valid(&self) -> bool {
        self.actual.is_some() || self.forecast.is_some()
    }
}

/// A half-hour interval `[from, to)` paired with its intensity.
///
/// Used both for the "current" reading and as one slot of a 48-hour forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityPeriod {
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub from: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub to: DateTime<Utc>,
    pub intensity: Intensity,
}

/// Custom deserializer for datetime that handles both with and without seconds
pub fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use chrono::NaiveDateTime;

    let s: String = serde::Deserialize::deserialize(deserializer)?;

    // Try RFC3339 parsing first (handles most cases)
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }

    // If string ends with 'Z' but no seconds, parse as UTC naive datetime
    if s.ends_with('Z') {
        let s_without_z = &s[..s.len() - 1];

        // Try with seconds
        if let Ok(naive) = NaiveDateTime::parse_from_str(s_without_z, "%Y-%m-%dT%H:%M:%S") {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }

        // Try without seconds
        if let Ok(naive) = NaiveDateTime::parse_from_str(s_without_z, "%Y-%m-%dT%H:%M") {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    Err(serde::de::Error::custom(format!(
        "Failed to parse datetime '{}'",
        s
    )))
}

/// Builds chart series data from an ordered forecast.
///
/// Labels carry the day as well as the time: a 48-hour forecast repeats every
/// clock time once, and the chart's category axis needs unique labels.
pub fn series_data(slots: &[IntensityPeriod]) -> (Vec<String>, Vec<f64>) {
    let mut sorted = slots.to_vec();
    sorted.sort_by(|a, b| a.from.cmp(&b.from));

    let x_data: Vec<String> = sorted.iter().map(|s| axis_label(s)).collect();
    let y_data: Vec<f64> = sorted
        .iter()
        .map(|s| f64::from(s.intensity.value().unwrap_or(0)))
        .collect();

    (x_data, y_data)
}

/// Category-axis label for one forecast slot.
pub fn axis_label(slot: &IntensityPeriod) -> String {
    slot.from.format("%d %b %H:%M").to_string()
}
