use common::{ApiError, Endpoint, OptimizeRequest, PortfolioResult};

use super::ApiClient;

pub async fn optimize_portfolio(client: &ApiClient, request: &OptimizeRequest) -> Result<PortfolioResult, ApiError> {
    log::info!(
        "Optimizing portfolio of {} symbols over {}",
        request.symbols.len(),
        request.period
    );
    client.post(Endpoint::OptimizePortfolio, request).await
}
