use datapress_core::NewsProvider;
use serde_json::Value;
use std::sync::Arc;

use crate::cli::NewsArgs;
use crate::error::CliError;

use super::Context;

pub async fn run(context: &Context, args: &NewsArgs) -> Result<(String, Value), CliError> {
    let provider = NewsProvider::new(Arc::clone(&context.http), &context.config);
    let (key, batch) = match (&args.query, &args.country) {
        (Some(query), _) => {
            let batch = provider
                .search(query, &args.language, args.page_size)
                .await?;
            (query.clone(), batch)
        }
        (None, Some(country)) => {
            let batch = provider
                .headlines(country, args.category.as_deref(), args.page_size)
                .await?;
            (country.clone(), batch)
        }
        (None, None) => {
            return Err(CliError::Command(
                "news requires a search query or --country".into(),
            ))
        }
    };
    Ok((key, serde_json::to_value(batch)?))
}
