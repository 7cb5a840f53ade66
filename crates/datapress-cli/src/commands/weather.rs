use datapress_core::WeatherProvider;
use serde_json::Value;
use std::sync::Arc;

use crate::cli::{ForecastArgs, WeatherArgs};
use crate::error::CliError;

use super::Context;

pub async fn current(context: &Context, args: &WeatherArgs) -> Result<(String, Value), CliError> {
    let provider = WeatherProvider::new(Arc::clone(&context.http), &context.config);
    match (&args.city, args.lat, args.lon) {
        (Some(city), None, None) => {
            let report = provider.current(city, args.country.as_deref()).await?;
            Ok((city.clone(), serde_json::to_value(report)?))
        }
        (None, Some(lat), Some(lon)) => {
            let report = provider.by_coordinates(lat, lon).await?;
            Ok((format!("{lat}_{lon}"), serde_json::to_value(report)?))
        }
        _ => Err(CliError::Command(
            "weather requires either a city or --lat/--lon".into(),
        )),
    }
}

pub async fn forecast(context: &Context, args: &ForecastArgs) -> Result<(String, Value), CliError> {
    let provider = WeatherProvider::new(Arc::clone(&context.http), &context.config);
    let report = provider.forecast(&args.city, args.days).await?;
    Ok((args.city.clone(), serde_json::to_value(report)?))
}
