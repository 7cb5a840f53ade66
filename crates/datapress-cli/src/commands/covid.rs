use datapress_core::CovidProvider;
use serde_json::Value;
use std::sync::Arc;

use crate::cli::CovidArgs;
use crate::error::CliError;

use super::Context;

pub async fn run(context: &Context, args: &CovidArgs) -> Result<(String, Value), CliError> {
    let provider = CovidProvider::new(Arc::clone(&context.http), &context.config);
    match &args.country {
        Some(country) => Ok((country.clone(), provider.country(country).await?)),
        None => Ok(("global".to_owned(), provider.global_summary().await?)),
    }
}
