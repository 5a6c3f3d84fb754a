use common::{
    ApiError, Endpoint, FetchStockRequest, FetchStockResponse, HealthStatus, PredictResponse, StockList,
    StockPrices,
};

use super::ApiClient;

/// Ask the server to download and store price history
pub async fn fetch_stock_data(
    client: &ApiClient,
    symbol: &str,
    period: &str,
) -> Result<FetchStockResponse, ApiError> {
    log::debug!("Requesting ingestion of {} over {}", symbol, period);
    let request = FetchStockRequest::new(symbol, period);
    client.post(Endpoint::FetchStock, &request).await
}

pub async fn list_stocks(client: &ApiClient) -> Result<StockList, ApiError> {
    client.get(Endpoint::ListStocks).await
}

pub async fn stock_prices(client: &ApiClient, symbol: &str, limit: u32) -> Result<StockPrices, ApiError> {
    client.get(Endpoint::StockPrices { symbol, limit }).await
}

pub async fn predict(client: &ApiClient, symbol: &str, periods: u32) -> Result<PredictResponse, ApiError> {
    let response: PredictResponse = client.get(Endpoint::Predict { symbol, periods }).await?;
    log::debug!(
        "Forecast for {}: success={}, {} points",
        symbol,
        response.success,
        response.predictions.len()
    );
    Ok(response)
}

pub async fn health_check(client: &ApiClient) -> Result<HealthStatus, ApiError> {
    client.get(Endpoint::Health).await
}
