//! Normalized record types.
//!
//! Every struct here is produced exactly once by a normalizer and never
//! mutated afterwards. Field order is the serialization order, so keep the
//! declarations aligned with the export schema.

mod images;
mod market;
mod news;
mod weather;

pub use images::{ImageAsset, ImageBatch, ImageVariants};
pub use market::{EquityBar, EquitySeries};
pub use news::{NewsArticle, NewsBatch};
pub use weather::{Condition, ForecastEntry, Temperature, WeatherReport, WeatherSnapshot, Wind};
