//! # Datapress Core
//!
//! Normalization pipeline for heterogeneous upstream records.
//!
//! ## Overview
//!
//! This crate turns idiosyncratic provider payloads (weather, equities,
//! news, imagery, epidemiological counts) into a small set of schema-stable
//! record types:
//!
//! - **Domain records** with fixed field sets and documented defaults
//! - **Normalizers** — total functions from raw JSON to a record or
//!   [`SourceError`]
//! - **Provider adapters** that build upstream requests and classify
//!   transport failures
//! - **Aggregation coordinator** combining independent sources with
//!   per-source failure isolation
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`combine`] | Multi-source aggregation coordinator |
//! | [`config`] | Upstream credentials and base URLs |
//! | [`domain`] | Normalized record types |
//! | [`error`] | Source error taxonomy |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`normalize`] | Raw-payload normalizers |
//! | [`providers`] | Per-upstream adapters |
//! | [`source`] | Source identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use datapress_core::{ProviderConfig, ReqwestHttpClient, WeatherProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProviderConfig::from_env();
//!     let http = Arc::new(ReqwestHttpClient::new());
//!     let weather = WeatherProvider::new(http, &config);
//!
//!     let report = weather.current("London", Some("GB")).await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure semantics
//!
//! Per-source failures (`InvalidSourceData`, `TransportFailure`) are
//! terminal for that source and never retried. The coordinator absorbs them
//! and only surfaces `NoDataAvailable` when every requested source failed.
//!
//! ## Security
//!
//! API keys are read from environment variables once at startup and held in
//! an explicit [`ProviderConfig`]; there is no process-wide mutable state
//! and keys are never logged.

pub mod combine;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod normalize;
pub mod providers;
pub mod source;

pub use combine::{combine, CombinedRequest, SourceRecord};
pub use config::ProviderConfig;
pub use domain::{
    Condition, EquityBar, EquitySeries, ForecastEntry, ImageAsset, ImageBatch, ImageVariants,
    NewsArticle, NewsBatch, Temperature, WeatherReport, WeatherSnapshot, Wind,
};
pub use error::{SourceError, SourceErrorKind};
pub use http_client::{
    HttpBytes, HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient, IMAGE_FETCH_TIMEOUT_MS, PROVIDER_TIMEOUT_MS,
};
pub use normalize::{
    normalize_daily_series, normalize_forecast_entries, normalize_images, normalize_news,
    normalize_snapshot, normalize_weather,
};
pub use providers::{
    CovidProvider, EquitiesProvider, ImagesProvider, NewsProvider, Orientation, OutputSize,
    WeatherProvider,
};
pub use source::SourceId;
