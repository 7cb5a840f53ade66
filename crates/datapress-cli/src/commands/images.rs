use std::str::FromStr;
use std::sync::Arc;

use datapress_core::{ImageBatch, ImagesProvider, Orientation};
use datapress_export::{to_archive, ExportArtifact};
use serde_json::Value;

use crate::cli::ImagesArgs;
use crate::error::CliError;

use super::Context;

pub async fn run(context: &Context, args: &ImagesArgs) -> Result<(String, Value), CliError> {
    let (key, batch) = fetch(context, args).await?;
    Ok((key, serde_json::to_value(batch)?))
}

/// Archive mode: fetch the metadata first, then bundle the original-size
/// variants into a ZIP.
pub async fn archive(
    context: &Context,
    args: &ImagesArgs,
) -> Result<(String, ExportArtifact), CliError> {
    let (key, batch) = fetch(context, args).await?;
    let urls: Vec<String> = batch
        .photos
        .iter()
        .map(|photo| photo.src.original.clone())
        .filter(|url| !url.is_empty())
        .collect();
    let artifact = to_archive(&context.store, context.http.as_ref(), &urls).await?;
    Ok((key, artifact))
}

async fn fetch(context: &Context, args: &ImagesArgs) -> Result<(String, ImageBatch), CliError> {
    let provider = ImagesProvider::new(Arc::clone(&context.http), &context.config);
    match (&args.query, args.curated) {
        (Some(query), _) => {
            let orientation = args
                .orientation
                .as_deref()
                .map(Orientation::from_str)
                .transpose()?;
            let batch = provider
                .search(query, args.per_page, orientation, args.color.as_deref())
                .await?;
            Ok((query.clone(), batch))
        }
        (None, true) => {
            let batch = provider.curated(args.per_page).await?;
            Ok(("curated".to_owned(), batch))
        }
        (None, false) => Err(CliError::Command(
            "images requires a search query or --curated".into(),
        )),
    }
}
