//! webflow-provider - Webflow resource provider
//!
//! Commands:
//! - `schema` (default): print the provider schema as JSON
//! - `types`: list the managed resource type tokens
//! - `check`: load the configuration and introspect the API token

use std::io::Write;

use anyhow::{anyhow, bail, Context};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use webflow_provider::{init_logging_from_env, Provider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before logging so WEBFLOW_LOG can live there
    let dotenv = dotenvy::dotenv();
    init_logging_from_env().map_err(|e| anyhow!(e)).context("failed to initialise logging")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!(error = %e, "No .env file loaded"),
    }

    let command = std::env::args().nth(1).unwrap_or_else(|| "schema".to_string());
    match command.as_str() {
        "schema" => {
            let schema = serde_json::to_string_pretty(&Provider::schema())?;
            writeln!(std::io::stdout(), "{schema}")?;
        }
        "types" => {
            let types: Vec<String> = webflow_infra::catalogue().iter().map(|d| d.token()).collect();
            writeln!(std::io::stdout(), "{}", types.join("\n"))?;
        }
        "check" => check().await?,
        other => bail!("unknown command '{other}'. Expected one of: schema, types, check"),
    }

    Ok(())
}

async fn check() -> anyhow::Result<()> {
    let config = webflow_infra::config::load().context("failed to load provider configuration")?;
    let provider = Provider::new(&config).context("failed to configure provider")?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling in-flight requests");
            on_interrupt.cancel();
        }
    });

    let info = provider.get_token_info(&cancel).await.context("token introspection failed")?;
    let report = serde_json::to_string_pretty(&info)?;
    writeln!(std::io::stdout(), "{report}")?;
    Ok(())
}
