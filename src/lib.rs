//! Startup configuration for the service: defaults, document overlay and
//! validation of listen address, session timings and credentials.

pub mod config;

pub use config::{Config, ConfigError, Settings};
