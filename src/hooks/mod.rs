pub mod use_best_time;
pub mod use_carbon_data;
