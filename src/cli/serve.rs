use crate::config::Credentials;
use crate::{web, Config};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = Config::load(config_path)?;
    let credentials = Credentials::from_env(&config);

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    tracing::info!(?credentials, "Media sources");
    tracing::info!("Starting server at http://{}", addr);

    web::serve(config, credentials, &addr).await?;

    Ok(())
}
