/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Intensity/forecast/mix polling interval (3 minutes)
    pub const DATA_POLL_INTERVAL_MS: u32 = 180_000;

    /// Recommendations polling interval (30 minutes); the underlying forecast
    /// does not change more frequently than this
    pub const RECOMMENDATIONS_POLL_INTERVAL_MS: u32 = 1_800_000;
}
