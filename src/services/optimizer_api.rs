use crate::models::{
    error::AppError,
    optimizer::{AppliancePreset, ApplianceRecommendation, BestTime},
    region::Region,
};

use super::api::{ApiConfig, encode_region};
use super::http::get_json;

/// Client for the optimizer service (best-time queries and per-appliance
/// recommendations).
pub struct OptimizerClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl OptimizerClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the lowest-intensity window for an appliance preset.
    pub async fn fetch_best_time(
        &self,
        preset: &AppliancePreset,
        region: Region,
    ) -> Result<BestTime, AppError> {
        let url = best_time_url(&self.config, preset, region);
        get_json(&self.http, &url).await
    }

    /// Fetches the per-appliance recommended windows for a region.
    pub async fn fetch_appliance_recommendations(
        &self,
        region: Region,
    ) -> Result<Vec<ApplianceRecommendation>, AppError> {
        let url = recommendations_url(&self.config, region);
        get_json(&self.http, &url).await
    }
}

/// The national view queries without a region parameter; the optimizer then
/// falls back to the national forecast.
fn best_time_url(config: &ApiConfig, preset: &AppliancePreset, region: Region) -> String {
    let mut url = format!(
        "{}/api/v1/optimizer/best-time?duration_minutes={}&power_kw={}",
        config.base_url(),
        preset.duration_minutes,
        preset.power_kw
    );
    if !region.is_national() {
        url.push_str(&format!("&region_shortname={}", encode_region(region)));
    }
    url
}

fn recommendations_url(config: &ApiConfig, region: Region) -> String {
    let mut url = format!(
        "{}/api/v1/optimizer/appliance-recommendations",
        config.base_url()
    );
    if !region.is_national() {
        url.push_str(&format!("?region_shortname={}", encode_region(region)));
    }
    url
}

// CONVENIENCE FUNCTIONS
/// Queries the best time for a preset using default configuration.
pub async fn fetch_best_time(
    preset: &AppliancePreset,
    region: Region,
) -> Result<BestTime, AppError> {
    OptimizerClient::new()?.fetch_best_time(preset, region).await
}

/// Fetches appliance recommendations using default configuration.
pub async fn fetch_appliance_recommendations(
    region: Region,
) -> Result<Vec<ApplianceRecommendation>, AppError> {
    OptimizerClient::new()?
        .fetch_appliance_recommendations(region)
        .await
}
