use datapress_core::{combine, CombinedRequest};
use serde_json::Value;
use std::sync::Arc;

use crate::cli::CombinedArgs;
use crate::error::CliError;

use super::Context;

pub async fn run(context: &Context, args: &CombinedArgs) -> Result<(String, Value), CliError> {
    let request = CombinedRequest {
        weather_city: args.city.clone(),
        stock_symbol: args.symbol.clone(),
        news_query: args.query.clone(),
        covid_country: args.covid_country.clone(),
    };
    let records = combine(Arc::clone(&context.http), &context.config, &request).await?;
    Ok(("data".to_owned(), serde_json::to_value(records)?))
}
