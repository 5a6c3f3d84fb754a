use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request body for the optimize endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub symbols: Vec<String>,
    pub period: String,
}

/// Maximum-Sharpe allocation chosen by the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimalPortfolio {
    /// Percentage of the portfolio per symbol. Ordered by symbol; the total
    /// is not checked locally.
    #[serde(default)]
    pub allocations: BTreeMap<String, f64>,
    /// Expected annual return in percent
    pub expected_return: f64,
    /// Annualized volatility in percent
    pub volatility: f64,
    pub sharpe_ratio: f64,
}

impl OptimalPortfolio {
    pub fn allocation_total(&self) -> f64 {
        self.allocations.values().sum()
    }
}

/// One candidate portfolio on the efficient frontier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierPoint {
    pub volatility: f64,
    #[serde(rename = "return")]
    pub expected_return: f64,
    #[serde(alias = "sharpe_ratio")]
    pub sharpe: f64,
}

/// Body of the optimize endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioResult {
    pub optimal_portfolio: OptimalPortfolio,
    #[serde(default)]
    pub efficient_frontier: Vec<FrontierPoint>,
}

impl PortfolioResult {
    /// `(symbol, percent)` rows in symbol order
    pub fn allocation_rows(&self) -> Vec<(String, f64)> {
        self.optimal_portfolio
            .allocations
            .iter()
            .map(|(symbol, percent)| (symbol.clone(), *percent))
            .collect()
    }

    /// Frontier point with the highest Sharpe ratio
    pub fn best_frontier_point(&self) -> Option<&FrontierPoint> {
        self.efficient_frontier
            .iter()
            .max_by(|a, b| a.sharpe.total_cmp(&b.sharpe))
    }
}
