//! Common transport-layer types and view state shared between the browser
//! frontend and the terminal client.
//! These structs mirror the analysis server's request/response payloads so
//! both front ends deserialize API responses without duplicating shapes, and
//! the two page state machines live here so they can be tested natively.

pub mod api;
pub mod fence;
pub mod portfolio;
pub mod prediction;
pub mod stocks;
pub mod symbols;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{ApiConfig, ApiError, Endpoint, ErrorBody, Method, StockApi};
pub use fence::{RequestSequence, RequestToken};
pub use portfolio::{FrontierPoint, OptimalPortfolio, OptimizeRequest, PortfolioResult};
pub use prediction::{AccuracyMetrics, ChartRow, DateLabel, Forecast, IsoDateLabel, PredictResponse, PredictionPoint};
pub use stocks::{FetchStockRequest, FetchStockResponse, HealthStatus, PricePoint, StockList, StockPrices, StockRecord};
pub use symbols::{Symbol, SymbolSet, uppercase_input};
pub use view::analysis::{AnalysisState, fetch_then_predict};
pub use view::portfolio::PortfolioState;
pub use view::{Completion, Phase};
