pub mod current_intensity;
pub mod forecast_chart;
pub mod generation_mix_chart;
pub mod recommendations;
pub mod region_selector;
pub mod time_optimizer;

pub use current_intensity::CurrentIntensity;
pub use forecast_chart::ForecastChart;
pub use generation_mix_chart::GenerationMixChart;
pub use recommendations::SmartRecommendations;
pub use region_selector::RegionSelector;
pub use time_optimizer::TimeOptimizer;
