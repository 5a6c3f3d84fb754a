pub mod portfolio;
pub mod stocks;

use common::{
    ApiConfig, ApiError, Endpoint, ErrorBody, FetchStockResponse, HealthStatus, OptimizeRequest,
    PortfolioResult, PredictResponse, StockApi, StockList, StockPrices,
};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

/// Browser client for the analysis server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Common GET request handler
    async fn get<T>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.config.url(&endpoint);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url).send().await.map_err(|e| {
            log::error!("GET {} - Request failed: {}", url, e);
            ApiError::Transport(e.to_string())
        })?;

        decode("GET", &url, response).await
    }

    /// Common POST request handler
    async fn post<T, B>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize,
    {
        let url = self.config.url(&endpoint);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| {
                log::error!("POST {} - Failed to serialize request: {}", url, e);
                ApiError::Transport(e.to_string())
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} - Request failed: {}", url, e);
                ApiError::Transport(e.to_string())
            })?;

        decode("POST", &url, response).await
    }
}

async fn decode<T>(method: &str, url: &str, response: Response) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, url, status);
        let body: Option<ErrorBody> = response.json().await.ok();
        let error = ApiError::http(status, body);
        log::error!("{} {} - {}", method, url, error);
        return Err(error);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, url);
    let data = response.json::<T>().await.map_err(|e| {
        log::error!("{} {} - Failed to parse response: {}", method, url, e);
        ApiError::Decode(e.to_string())
    })?;

    log::info!("{} {} - Success", method, url);
    Ok(data)
}

impl StockApi for ApiClient {
    async fn fetch_stock_data(&self, symbol: &str, period: &str) -> Result<FetchStockResponse, ApiError> {
        stocks::fetch_stock_data(self, symbol, period).await
    }

    async fn list_stocks(&self) -> Result<StockList, ApiError> {
        stocks::list_stocks(self).await
    }

    async fn stock_prices(&self, symbol: &str, limit: u32) -> Result<StockPrices, ApiError> {
        stocks::stock_prices(self, symbol, limit).await
    }

    async fn predict(&self, symbol: &str, periods: u32) -> Result<PredictResponse, ApiError> {
        stocks::predict(self, symbol, periods).await
    }

    async fn optimize_portfolio(&self, request: &OptimizeRequest) -> Result<PortfolioResult, ApiError> {
        portfolio::optimize_portfolio(self, request).await
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        stocks::health_check(self).await
    }
}
