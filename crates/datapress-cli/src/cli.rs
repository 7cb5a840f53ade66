//! CLI argument definitions for Datapress.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `weather` | Fetch a current weather snapshot for a city |
//! | `forecast` | Fetch a multi-day forecast for a city |
//! | `stocks` | Fetch a normalized daily OHLCV series |
//! | `news` | Fetch news articles by query or country headlines |
//! | `images` | Fetch image metadata, optionally bundled as a ZIP |
//! | `covid` | Fetch epidemiological counts for a country or globally |
//! | `combined` | Aggregate several sources into one export |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Export format (csv, json, parquet) |
//! | `--out` | derived | Destination path for the exported file |
//! | `--artifact-dir` | system temp | Working directory for artifacts |
//!
//! # Examples
//!
//! ```bash
//! # Current weather as JSON
//! datapress weather London --country GB
//!
//! # Daily bars as CSV
//! datapress stocks IBM --format csv
//!
//! # Image search bundled into a ZIP archive
//! datapress images "mountain lake" --archive
//!
//! # Multi-source export
//! datapress combined --city London --symbol IBM --query rust
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use datapress_export::ExportFormat;

/// Datapress - normalized dataset fetch-and-export CLI
///
/// Fetch records from weather, equities, news, imagery, and epidemiological
/// providers, normalize them into schema-stable shapes, and export the
/// result as CSV, JSON, Parquet, or a ZIP of images.
#[derive(Debug, Parser)]
#[command(
    name = "datapress",
    author,
    version,
    about = "Normalized dataset fetch-and-export CLI"
)]
pub struct Cli {
    /// Export format for the fetched records.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Destination path for the exported file.
    ///
    /// Defaults to a timestamped name in the current directory, e.g.
    /// `weather_London_20240101_120000.json`.
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Working directory for intermediate artifacts.
    #[arg(long, global = true)]
    pub artifact_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Row/document export formats selectable from the command line. ZIP is not
/// listed here; it is reached through `images --archive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values, first record defines the columns.
    Csv,
    /// Pretty-printed JSON document.
    Json,
    /// Columnar Parquet file.
    Parquet,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Json => Self::Json,
            OutputFormat::Parquet => Self::Parquet,
        }
    }
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a current weather snapshot for a city.
    ///
    /// # Examples
    ///
    ///   datapress weather London
    ///   datapress weather London --country GB --format csv
    ///   datapress weather --lat 51.5 --lon -0.12
    Weather(WeatherArgs),

    /// Fetch a multi-day forecast (3-hour entries) for a city.
    ///
    /// # Examples
    ///
    ///   datapress forecast Paris --days 3
    Forecast(ForecastArgs),

    /// Fetch a normalized daily OHLCV series for a symbol.
    ///
    /// The series is sorted newest-first and capped at 50 bars.
    ///
    /// # Examples
    ///
    ///   datapress stocks IBM
    ///   datapress stocks IBM --full --format parquet
    Stocks(StocksArgs),

    /// Fetch news articles by full-text query or country headlines.
    ///
    /// # Examples
    ///
    ///   datapress news "rust language"
    ///   datapress news --country us --category technology
    News(NewsArgs),

    /// Fetch image metadata, optionally downloading a ZIP of the images.
    ///
    /// # Examples
    ///
    ///   datapress images "mountain lake" --per-page 15
    ///   datapress images --curated
    ///   datapress images sunset --archive --out sunset.zip
    Images(ImagesArgs),

    /// Fetch epidemiological counts for a country, or the global summary.
    ///
    /// # Examples
    ///
    ///   datapress covid germany
    ///   datapress covid --format csv
    Covid(CovidArgs),

    /// Aggregate several sources into one export.
    ///
    /// Sources that fail or time out are excluded; the command only fails
    /// when every requested source failed.
    ///
    /// # Examples
    ///
    ///   datapress combined --city London --symbol IBM
    ///   datapress combined --query rust --covid-country france
    Combined(CombinedArgs),
}

#[derive(Debug, Args)]
pub struct WeatherArgs {
    /// City name, e.g. London. Omit when querying by coordinates.
    pub city: Option<String>,

    /// Optional ISO country code to disambiguate the city.
    #[arg(long)]
    pub country: Option<String>,

    /// Latitude for coordinate lookup (requires --lon).
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude for coordinate lookup (requires --lat).
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ForecastArgs {
    /// City name, e.g. Paris.
    pub city: String,

    /// Forecast window in days (1-5).
    #[arg(long, default_value_t = 5)]
    pub days: u8,
}

#[derive(Debug, Args)]
pub struct StocksArgs {
    /// Equity symbol, e.g. IBM.
    pub symbol: String,

    /// Request the full history instead of the compact window.
    #[arg(long, default_value_t = false)]
    pub full: bool,

    /// Fetch the latest quote instead of the daily series.
    #[arg(long, default_value_t = false)]
    pub quote: bool,
}

#[derive(Debug, Args)]
pub struct NewsArgs {
    /// Full-text search query. Omit to fetch country headlines instead.
    pub query: Option<String>,

    /// Two-letter country code for headline mode.
    #[arg(long)]
    pub country: Option<String>,

    /// Headline category (business, technology, ...).
    #[arg(long)]
    pub category: Option<String>,

    /// Article language for query mode.
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Number of articles to request (capped at 100 upstream).
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,
}

#[derive(Debug, Args)]
pub struct ImagesArgs {
    /// Search query. Omit with --curated to fetch the curated feed.
    pub query: Option<String>,

    /// Fetch the curated feed instead of searching.
    #[arg(long, default_value_t = false)]
    pub curated: bool,

    /// Number of images to request (capped at 80 upstream).
    #[arg(long, default_value_t = 15)]
    pub per_page: u32,

    /// Filter by orientation (landscape, portrait, square).
    #[arg(long)]
    pub orientation: Option<String>,

    /// Filter by dominant color (red, blue, ...).
    #[arg(long)]
    pub color: Option<String>,

    /// Download the images themselves into a ZIP archive (at most 10).
    #[arg(long, default_value_t = false)]
    pub archive: bool,
}

#[derive(Debug, Args)]
pub struct CovidArgs {
    /// Country name or code. Omit for the global summary.
    pub country: Option<String>,
}

#[derive(Debug, Args)]
pub struct CombinedArgs {
    /// City for the weather source.
    #[arg(long)]
    pub city: Option<String>,

    /// Equity symbol for the stocks source.
    #[arg(long)]
    pub symbol: Option<String>,

    /// Query for the news source.
    #[arg(long)]
    pub query: Option<String>,

    /// Country for the covid source.
    #[arg(long)]
    pub covid_country: Option<String>,
}
