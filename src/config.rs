use std::path::Path;

use anyhow::{Context, Result};
use common::ApiConfig;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Where the analysis server listens when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment prefix, e.g. `STOCK_ANALYZER__API__BASE_URL`
const ENV_PREFIX: &str = "STOCK_ANALYZER";

/// Optional config file looked up in the working directory (any extension
/// the `config` crate understands)
const DEFAULT_CONFIG_NAME: &str = "stock-analyzer";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiConfig,
}

/// Load settings: defaults, then the config file, then the environment.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let defaults = ApiConfig::with_base_url(DEFAULT_API_URL);

    let file = match config_path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let config = Config::builder()
        .set_default("api.base_url", defaults.base_url)?
        .set_default("api.ingest_period", defaults.ingest_period)?
        .set_default("api.forecast_periods", i64::from(defaults.forecast_periods))?
        .set_default("api.price_limit", i64::from(defaults.price_limit))?
        .set_default("api.portfolio_period", defaults.portfolio_period)?
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("Failed to load configuration")?;

    let settings: Settings = config
        .try_deserialize()
        .context("Invalid configuration")?;

    tracing::debug!(?settings, "Configuration loaded");
    Ok(settings)
}

/// Resolve the API configuration, applying a command-line base URL last.
pub fn resolve_api_config(config_path: Option<&Path>, api_url: Option<&str>) -> Result<ApiConfig> {
    let mut api = load_settings(config_path)?.api;
    if let Some(url) = api_url {
        api.base_url = url.to_string();
    }
    Ok(api)
}
