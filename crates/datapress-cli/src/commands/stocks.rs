use datapress_core::{EquitiesProvider, OutputSize};
use serde_json::Value;
use std::sync::Arc;

use crate::cli::StocksArgs;
use crate::error::CliError;

use super::Context;

pub async fn run(context: &Context, args: &StocksArgs) -> Result<(String, Value), CliError> {
    let provider = EquitiesProvider::new(Arc::clone(&context.http), &context.config);
    if args.quote {
        let quote = provider.quote(&args.symbol).await?;
        return Ok((args.symbol.clone(), quote));
    }
    let output_size = if args.full {
        OutputSize::Full
    } else {
        OutputSize::Compact
    };
    let series = provider.daily(&args.symbol, output_size).await?;
    Ok((args.symbol.clone(), serde_json::to_value(series)?))
}
