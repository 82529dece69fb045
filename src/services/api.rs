use crate::models::{
    error::AppError,
    generation::GenerationMixEntry,
    intensity::{Intensity, IntensityPeriod, deserialize_flexible_datetime},
    region::Region,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::http::get_json;

// CONSTANTS
const BASE_URL: &str = "http://localhost:8001";

// API CONFIGURATION
/// Configuration for the carbon dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn regions_url(&self) -> String {
        format!("{}/api/v1/regions", self.base_url)
    }

    pub fn national_current_url(&self) -> String {
        format!("{}/api/v1/intensity/current", self.base_url)
    }

    pub fn national_forecast_url(&self) -> String {
        format!("{}/api/v1/intensity/forecast/48h", self.base_url)
    }

    pub fn national_generation_url(&self) -> String {
        format!("{}/api/v1/generation/current", self.base_url)
    }

    pub fn regional_current_url(&self, region: Region) -> String {
        format!(
            "{}/api/v1/intensity/regional/current/{}",
            self.base_url,
            encode_region(region)
        )
    }

    pub fn regional_forecast_url(&self, region: Region) -> String {
        format!(
            "{}/api/v1/intensity/regional/forecast/48h/{}",
            self.base_url,
            encode_region(region)
        )
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

/// Percent-encodes a region shortname for use in a path or query segment.
/// Shortnames only ever contain letters and spaces.
pub(crate) fn encode_region(region: Region) -> String {
    region.shortname().replace(' ', "%20")
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct RegionsResponse {
    regions: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct NationalGenerationResponse {
    generationmix: Vec<GenerationMixEntry>,
}

#[derive(Deserialize, Debug)]
struct RegionalCurrentResponse {
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    from: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    to: DateTime<Utc>,
    intensity: Intensity,
    #[serde(default)]
    generationmix: Vec<GenerationMixEntry>,
}

#[derive(Deserialize, Debug)]
struct RegionalForecastResponse {
    data: Vec<IntensityPeriod>,
}

/// The current/forecast/mix triple displayed for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub current: IntensityPeriod,
    pub forecast: Vec<IntensityPeriod>,
    pub generation_mix: Vec<GenerationMixEntry>,
}

// DASHBOARD CLIENT
/// HTTP client for the carbon intensity proxy API.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
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

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the list of selectable regions, with the national sentinel
    /// prepended. Shortnames the client does not know are skipped.
    pub async fn fetch_regions(&self) -> Result<Vec<Region>, AppError> {
        let response: RegionsResponse = get_json(&self.http, &self.config.regions_url()).await?;

        let mut regions = vec![Region::National];
        regions.extend(
            response
                .regions
                .iter()
                .filter_map(|name| name.parse::<Region>().ok()),
        );
        Ok(regions)
    }

    /// Fetches the current/forecast/mix triple for the given region.
    pub async fn fetch_dashboard(&self, region: Region) -> Result<DashboardData, AppError> {
        if region.is_national() {
            self.fetch_national().await
        } else {
            self.fetch_regional(region).await
        }
    }

    /// National view: three endpoints, issued concurrently and awaited jointly.
    async fn fetch_national(&self) -> Result<DashboardData, AppError> {
        let current_url = self.config.national_current_url();
        let forecast_url = self.config.national_forecast_url();
        let generation_url = self.config.national_generation_url();
        let (current, forecast, generation) = futures::try_join!(
            get_json::<IntensityPeriod>(&self.http, &current_url),
            get_json::<Vec<IntensityPeriod>>(&self.http, &forecast_url),
            get_json::<NationalGenerationResponse>(&self.http, &generation_url),
        )?;

        Ok(DashboardData {
            current,
            forecast,
            generation_mix: generation.generationmix,
        })
    }

    /// Regional view: the mix arrives inline with the current reading, so only
    /// two endpoints are needed.
    async fn fetch_regional(&self, region: Region) -> Result<DashboardData, AppError> {
        let current_url = self.config.regional_current_url(region);
        let forecast_url = self.config.regional_forecast_url(region);
        let (current, forecast) = futures::try_join!(
            get_json::<RegionalCurrentResponse>(&self.http, &current_url),
            get_json::<RegionalForecastResponse>(&self.http, &forecast_url),
        )?;

        Ok(DashboardData {
            current: IntensityPeriod {
                from: current.from,
                to: current.to,
                intensity: current.intensity,
            },
            forecast: forecast.data,
            generation_mix: current.generationmix,
        })
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the region list using default configuration.
pub async fn fetch_regions() -> Result<Vec<Region>, AppError> {
    DashboardClient::new()?.fetch_regions().await
}

/// Fetches the dashboard triple for a region using default configuration.
pub async fn fetch_dashboard_data(region: Region) -> Result<DashboardData, AppError> {
    DashboardClient::new()?.fetch_dashboard(region).await
}
