pub mod error;
pub mod generation;
pub mod intensity;
pub mod optimizer;
pub mod region;
