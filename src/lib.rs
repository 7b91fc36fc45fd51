pub mod api;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod services;
pub mod store;
