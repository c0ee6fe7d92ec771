pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod football_data;
pub mod http_cache;
pub mod http_client;
pub mod live;
pub mod logging;
pub mod state;
pub mod ui;
pub mod views;
