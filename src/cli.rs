use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::client::HttpClient;
use crate::config::resolve_api_config;
use crate::output::OutputFormat;
use commands::{analyze, fetch, health, optimize, predict, prices, stocks};

#[derive(Parser)]
#[command(name = "stock-analyzer")]
#[command(about = "Stock forecasts and portfolio optimization from the terminal")]
#[command(version)]
pub struct Cli {
    /// Base URL of the analysis API
    ///
    /// Overrides the config file and STOCK_ANALYZER__API__BASE_URL.
    /// Example: http://localhost:5000/api
    #[arg(long, global = true, env = "STOCK_ANALYZER_API_URL")]
    pub api_url: Option<String>,

    /// Config file (TOML, YAML or JSON). Defaults to ./stock-analyzer.* when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the analysis server is up
    Health,
    /// List the stocks known to the server
    Stocks,
    /// Ask the server to ingest price history for a symbol
    Fetch {
        #[arg(short, long)]
        symbol: String,

        /// History window, e.g. 1mo, 3mo, 1y (defaults to the configured ingest period)
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Show the most recent prices stored for a symbol
    Prices {
        #[arg(short, long)]
        symbol: String,

        /// Number of prices to return (defaults to the configured price limit)
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Request a forecast for an already ingested symbol
    Predict {
        #[arg(short, long)]
        symbol: String,

        /// Number of periods to forecast (defaults to the configured forecast periods)
        #[arg(short = 'n', long)]
        periods: Option<u32>,
    },
    /// Ingest a symbol, then forecast it
    Analyze {
        #[arg(short, long)]
        symbol: String,
    },
    /// Optimize allocations across two or more symbols
    Optimize {
        /// Symbols to include, e.g. AAPL GOOGL MSFT
        symbols: Vec<String>,

        /// History window used for the optimization (defaults to the configured portfolio period)
        #[arg(short, long)]
        period: Option<String>,
    },
}

impl Cli {
    /// Execute the command and return what should be printed.
    pub async fn run(self) -> Result<String> {
        let mut api = resolve_api_config(self.config.as_deref(), self.api_url.as_deref())?;
        tracing::debug!("API base URL: {}", api.base_url);

        let format = self.format;
        match self.command {
            Commands::Health => health(&HttpClient::new(api), format).await,
            Commands::Stocks => stocks(&HttpClient::new(api), format).await,
            Commands::Fetch { symbol, period } => {
                let period = period.unwrap_or_else(|| api.ingest_period.clone());
                fetch(&HttpClient::new(api), &symbol, &period, format).await
            }
            Commands::Prices { symbol, limit } => {
                let limit = limit.unwrap_or(api.price_limit);
                prices(&HttpClient::new(api), &symbol, limit, format).await
            }
            Commands::Predict { symbol, periods } => {
                let periods = periods.unwrap_or(api.forecast_periods);
                predict(&HttpClient::new(api), &symbol, periods, format).await
            }
            Commands::Analyze { symbol } => analyze(&HttpClient::new(api), &symbol, format).await,
            Commands::Optimize { symbols, period } => {
                if let Some(period) = period {
                    api.portfolio_period = period;
                }
                optimize(&HttpClient::new(api), &symbols, format).await
            }
        }
    }
}
