pub mod api;
pub mod http;
pub mod optimizer_api;
