use common::{
    ApiConfig, ApiError, Endpoint, ErrorBody, FetchStockRequest, FetchStockResponse, HealthStatus,
    OptimizeRequest, PortfolioResult, PredictResponse, StockApi, StockList, StockPrices,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, info, instrument, trace, warn};

/// Native client for the analysis server.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Common GET request handler
    async fn get<T>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.url(&endpoint);
        debug!("GET request to: {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", url, e);
            ApiError::Transport(e.to_string())
        })?;

        Self::decode("GET", &url, response).await
    }

    /// Common POST request handler
    async fn post<T, B>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.config.url(&endpoint);
        debug!("POST request to: {}", url);

        let response = self.http.post(&url).json(body).send().await.map_err(|e| {
            error!("POST {} - Request failed: {}", url, e);
            ApiError::Transport(e.to_string())
        })?;

        Self::decode("POST", &url, response).await
    }

    async fn decode<T>(method: &str, url: &str, response: reqwest::Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            warn!("{} {} - Non-OK response: {}", method, url, status);
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::http(status.as_u16(), serde_json::from_str::<ErrorBody>(&body).ok());
            error!("{} {} - {}", method, url, err);
            return Err(err);
        }

        trace!("{} {} - Response received, parsing JSON", method, url);
        let data = response.json::<T>().await.map_err(|e| {
            error!("{} {} - Failed to parse response: {}", method, url, e);
            ApiError::Decode(e.to_string())
        })?;

        info!("{} {} - Success", method, url);
        Ok(data)
    }
}

impl StockApi for HttpClient {
    #[instrument(skip(self))]
    async fn fetch_stock_data(&self, symbol: &str, period: &str) -> Result<FetchStockResponse, ApiError> {
        self.post(Endpoint::FetchStock, &FetchStockRequest::new(symbol, period)).await
    }

    #[instrument(skip(self))]
    async fn list_stocks(&self) -> Result<StockList, ApiError> {
        self.get(Endpoint::ListStocks).await
    }

    #[instrument(skip(self))]
    async fn stock_prices(&self, symbol: &str, limit: u32) -> Result<StockPrices, ApiError> {
        self.get(Endpoint::StockPrices { symbol, limit }).await
    }

    #[instrument(skip(self))]
    async fn predict(&self, symbol: &str, periods: u32) -> Result<PredictResponse, ApiError> {
        self.get(Endpoint::Predict { symbol, periods }).await
    }

    #[instrument(skip(self, request), fields(symbols = request.symbols.len()))]
    async fn optimize_portfolio(&self, request: &OptimizeRequest) -> Result<PortfolioResult, ApiError> {
        self.post(Endpoint::OptimizePortfolio, request).await
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get(Endpoint::Health).await
    }
}
