mod combined;
mod covid;
mod images;
mod news;
mod stocks;
mod weather;

use std::path::PathBuf;
use std::sync::Arc;

use datapress_core::{HttpClient, ProviderConfig, ReqwestHttpClient};
use datapress_export::{
    download_file_name, to_columnar, to_document, to_table, ArtifactStore, ExportArtifact,
    ExportFormat,
};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Shared per-invocation state handed to every command.
pub struct Context {
    pub http: Arc<dyn HttpClient>,
    pub config: ProviderConfig,
    pub store: ArtifactStore,
}

impl Context {
    fn from_cli(cli: &Cli) -> Self {
        let store = cli
            .artifact_dir
            .clone()
            .map(ArtifactStore::new)
            .unwrap_or_else(ArtifactStore::default_location);
        Self {
            http: Arc::new(ReqwestHttpClient::new()),
            config: ProviderConfig::from_env(),
            store,
        }
    }
}

/// Dispatch the parsed command, export the result, and copy the export to
/// its destination. Returns the path the caller can hand to the user.
pub async fn run(cli: &Cli) -> Result<PathBuf, CliError> {
    let context = Context::from_cli(cli);

    // Image archives are the one export whose format is fixed by the
    // command rather than by --format.
    if let Command::Images(args) = &cli.command {
        if args.archive {
            let (key, artifact) = images::archive(&context, args).await?;
            return deliver(cli, "images", &key, ExportFormat::Zip, &artifact);
        }
    }

    let (domain, key, payload) = match &cli.command {
        Command::Weather(args) => {
            let (key, payload) = weather::current(&context, args).await?;
            ("weather", key, payload)
        }
        Command::Forecast(args) => {
            let (key, payload) = weather::forecast(&context, args).await?;
            ("weather", key, payload)
        }
        Command::Stocks(args) => {
            let (key, payload) = stocks::run(&context, args).await?;
            ("stocks", key, payload)
        }
        Command::News(args) => {
            let (key, payload) = news::run(&context, args).await?;
            ("news", key, payload)
        }
        Command::Images(args) => {
            let (key, payload) = images::run(&context, args).await?;
            ("images", key, payload)
        }
        Command::Covid(args) => {
            let (key, payload) = covid::run(&context, args).await?;
            ("covid", key, payload)
        }
        Command::Combined(args) => {
            let (key, payload) = combined::run(&context, args).await?;
            ("combined", key, payload)
        }
    };

    let format = ExportFormat::from(cli.format);
    let artifact = write_payload(&context.store, format, &payload)?;
    deliver(cli, domain, &key, format, &artifact)
}

/// Serialize one payload into an artifact of the requested format. Row
/// formats view a top-level array as the record set and anything else as a
/// single record.
pub(crate) fn write_payload(
    store: &ArtifactStore,
    format: ExportFormat,
    payload: &Value,
) -> Result<ExportArtifact, CliError> {
    match format {
        ExportFormat::Json => Ok(to_document(store, payload)?),
        ExportFormat::Csv => Ok(to_table(store, &as_rows(payload))?),
        ExportFormat::Parquet => Ok(to_columnar(store, &as_rows(payload))?),
        ExportFormat::Zip => Err(CliError::Command(
            "zip output is only available via `images --archive`".into(),
        )),
    }
}

fn as_rows(payload: &Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    }
}

fn deliver(
    cli: &Cli,
    domain: &str,
    key: &str,
    format: ExportFormat,
    artifact: &ExportArtifact,
) -> Result<PathBuf, CliError> {
    let destination = cli
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(download_file_name(domain, key, format)));
    artifact.copy_to(&destination)?;
    Ok(destination)
}
