use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::portfolio::{OptimizeRequest, PortfolioResult};
use crate::prediction::PredictResponse;
use crate::stocks::{FetchStockResponse, HealthStatus, StockList, StockPrices};

/// Explicit client configuration handed to every API client instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root under which every endpoint path is joined (e.g. "/api" or
    /// "http://localhost:5000/api")
    pub base_url: String,
    /// History window requested when triggering ingestion before a forecast
    pub ingest_period: String,
    /// Number of periods requested from the forecast endpoint
    pub forecast_periods: u32,
    /// Number of recent prices requested for the price table
    pub price_limit: u32,
    /// History window used by the portfolio optimizer
    pub portfolio_period: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            ingest_period: "3mo".to_string(),
            forecast_periods: 7,
            price_limit: 30,
            portfolio_period: "1y".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL for an endpoint
    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// The server endpoints consumed by the client, one per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    FetchStock,
    ListStocks,
    StockPrices { symbol: &'a str, limit: u32 },
    Predict { symbol: &'a str, periods: u32 },
    OptimizePortfolio,
    Health,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::FetchStock | Endpoint::OptimizePortfolio => Method::Post,
            _ => Method::Get,
        }
    }

    /// Path relative to the configured base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::FetchStock => "/stocks/fetch".to_string(),
            Endpoint::ListStocks => "/stocks".to_string(),
            Endpoint::StockPrices { symbol, limit } => {
                format!("/stocks/{}/prices?limit={}", path_segment(symbol), limit)
            }
            Endpoint::Predict { symbol, periods } => {
                format!("/stocks/{}/predict?periods={}", path_segment(symbol), periods)
            }
            Endpoint::OptimizePortfolio => "/portfolio/optimize".to_string(),
            Endpoint::Health => "/health".to_string(),
        }
    }
}

/// Characters escaped inside a single path segment (everything but the
/// RFC 3986 unreserved set)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Error body the server attaches to failed requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Failure of a single API round trip
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Request failed with status code {status}")]
    Http { status: u16, error: Option<String> },

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn http(status: u16, body: Option<ErrorBody>) -> Self {
        ApiError::Http {
            status,
            error: body.and_then(|b| b.error).filter(|e| !e.is_empty()),
        }
    }

    /// Message supplied by the server in the error body, if any
    pub fn server_error(&self) -> Option<&str> {
        match self {
            ApiError::Http { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// The error's own message, or `fallback` when it has none
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Operations exposed by the analysis server.
///
/// Every call is a single best-effort round trip: implementations do not
/// retry, cache or apply their own timeouts.
#[allow(async_fn_in_trait)]
pub trait StockApi {
    /// Trigger server-side ingestion of `symbol` over `period`
    async fn fetch_stock_data(&self, symbol: &str, period: &str) -> Result<FetchStockResponse, ApiError>;

    async fn list_stocks(&self) -> Result<StockList, ApiError>;

    async fn stock_prices(&self, symbol: &str, limit: u32) -> Result<StockPrices, ApiError>;

    /// Request a `periods`-step forecast for `symbol`
    async fn predict(&self, symbol: &str, periods: u32) -> Result<PredictResponse, ApiError>;

    async fn optimize_portfolio(&self, request: &OptimizeRequest) -> Result<PortfolioResult, ApiError>;

    /// Liveness probe
    async fn health_check(&self) -> Result<HealthStatus, ApiError>;
}
