//! In-memory `StockApi` used by the state machine tests.

use std::cell::RefCell;

use crate::api::{ApiError, StockApi};
use crate::portfolio::{OptimalPortfolio, OptimizeRequest, PortfolioResult};
use crate::prediction::{AccuracyMetrics, PredictResponse, PredictionPoint};
use crate::stocks::{FetchStockResponse, HealthStatus, StockList, StockPrices, StockRecord};

pub fn stock(symbol: &str) -> StockRecord {
    StockRecord {
        symbol: symbol.to_string(),
        name: format!("{} Corp.", symbol),
        sector: "Technology".to_string(),
    }
}

/// Successful forecast with `points` daily steps. AAPL is priced around 100,
/// everything else around 200.
pub fn forecast_response(symbol: &str, points: usize) -> PredictResponse {
    let base = if symbol == "AAPL" { 100.0 } else { 200.0 };
    PredictResponse {
        success: true,
        error: None,
        stock: Some(stock(symbol)),
        predictions: (0..points)
            .map(|i| PredictionPoint {
                ds: format!("2024-01-{:02}", i + 1),
                yhat: base + i as f64,
                yhat_lower: base + i as f64 - 1.5,
                yhat_upper: base + i as f64 + 1.5,
            })
            .collect(),
        metrics: Some(AccuracyMetrics {
            mae: base / 100.0,
            rmse: base / 50.0,
        }),
    }
}

pub fn portfolio_result(symbols: &[String]) -> PortfolioResult {
    let share = 100.0 / symbols.len() as f64;
    PortfolioResult {
        optimal_portfolio: OptimalPortfolio {
            allocations: symbols.iter().map(|s| (s.clone(), share)).collect(),
            expected_return: 15.0,
            volatility: 20.0,
            sharpe_ratio: 0.65,
        },
        efficient_frontier: Vec::new(),
    }
}

#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<String>>,
    forecast: RefCell<PredictResponse>,
    fetch_error: Option<ApiError>,
    optimize_error: Option<ApiError>,
}

impl FakeApi {
    pub fn with_forecast(self, response: PredictResponse) -> Self {
        self.set_forecast(response);
        self
    }

    pub fn set_forecast(&self, response: PredictResponse) {
        *self.forecast.borrow_mut() = response;
    }

    pub fn failing_fetch(mut self, err: ApiError) -> Self {
        self.fetch_error = Some(err);
        self
    }

    pub fn failing_optimize(mut self, err: ApiError) -> Self {
        self.optimize_error = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl StockApi for FakeApi {
    async fn fetch_stock_data(&self, symbol: &str, period: &str) -> Result<FetchStockResponse, ApiError> {
        self.record(format!("fetch {} {}", symbol, period));
        match &self.fetch_error {
            Some(err) => Err(err.clone()),
            None => Ok(FetchStockResponse {
                success: true,
                stock: Some(stock(symbol)),
                error: None,
            }),
        }
    }

    async fn list_stocks(&self) -> Result<StockList, ApiError> {
        self.record("list".to_string());
        Ok(StockList::default())
    }

    async fn stock_prices(&self, symbol: &str, limit: u32) -> Result<StockPrices, ApiError> {
        self.record(format!("prices {} {}", symbol, limit));
        Ok(StockPrices {
            stock: stock(symbol),
            prices: Vec::new(),
        })
    }

    async fn predict(&self, symbol: &str, periods: u32) -> Result<PredictResponse, ApiError> {
        self.record(format!("predict {} {}", symbol, periods));
        Ok(self.forecast.borrow().clone())
    }

    async fn optimize_portfolio(&self, request: &OptimizeRequest) -> Result<PortfolioResult, ApiError> {
        self.record(format!("optimize {} {}", request.symbols.join(","), request.period));
        match &self.optimize_error {
            Some(err) => Err(err.clone()),
            None => Ok(portfolio_result(&request.symbols)),
        }
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.record("health".to_string());
        Ok(HealthStatus {
            status: "healthy".to_string(),
            message: None,
        })
    }
}
