//! Core library for the `ozweather` binaries.
//!
//! This crate defines:
//! - The fixed city table and the unified report model
//! - Condition normalization (codes, compass directions, free text)
//! - Weather sources (BOM observations, Open-Meteo forecasts) behind one trait
//! - The TTL'd report cache and the aggregating service with fallback
//!
//! It is used by `ozweather-cli` and `ozweather-server`, but can be reused by
//! other binaries or services.

pub mod cache;
pub mod client;
pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod source;

pub use cache::ReportCache;
pub use config::Config;
pub use error::WeatherError;
pub use model::{City, CityReport, CurrentConditions, FailedReport, TodayOutlook, WeatherReport};
pub use service::WeatherService;
pub use source::{SourceId, WeatherSource};
