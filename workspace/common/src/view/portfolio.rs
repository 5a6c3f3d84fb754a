use tracing::{debug, info};

use super::{Completion, Phase};
use crate::api::{ApiConfig, ApiError, StockApi};
use crate::fence::{RequestSequence, RequestToken};
use crate::portfolio::{FrontierPoint, OptimizeRequest, PortfolioResult};
use crate::symbols::{Symbol, SymbolSet, uppercase_input};

/// Validation message for portfolios that are too small to optimize
pub const TOO_FEW_SYMBOLS: &str = "Add at least 2 stocks";

/// Shown when the server rejects an optimization without an error body
pub const OPTIMIZATION_FAILED: &str = "Optimization failed";

pub const MIN_SYMBOLS: usize = 2;

/// State of the portfolio optimizer page.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioState {
    symbols: SymbolSet,
    input: String,
    phase: Phase,
    error: Option<String>,
    result: Option<PortfolioResult>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::with_symbols(SymbolSet::with_defaults())
    }
}

impl PortfolioState {
    pub fn with_symbols(symbols: SymbolSet) -> Self {
        Self {
            symbols,
            input: String::new(),
            phase: Phase::Idle,
            error: None,
            result: None,
        }
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, raw: &str) {
        self.input = uppercase_input(raw);
    }

    /// Whether the input buffer holds something worth adding
    pub fn can_add(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Move the input buffer into the symbol set. Empty input and symbols
    /// already present are ignored and leave the buffer untouched.
    pub fn add_symbol(&mut self) -> bool {
        let Some(symbol) = Symbol::normalize(&self.input) else {
            return false;
        };
        if !self.symbols.insert(symbol) {
            debug!(input = %self.input, "Symbol already in portfolio");
            return false;
        }
        self.input.clear();
        true
    }

    pub fn remove_symbol(&mut self, symbol: &Symbol) -> bool {
        self.symbols.remove(symbol)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn can_optimize(&self) -> bool {
        self.symbols.len() >= MIN_SYMBOLS && !self.is_loading()
    }

    /// Enter Loading for `token` and return the request to send. Returns
    /// `None` without any request when a submission is already in flight or
    /// the portfolio has fewer than two symbols; the latter also sets the
    /// validation error.
    pub fn begin(&mut self, token: RequestToken, config: &ApiConfig) -> Option<OptimizeRequest> {
        if self.symbols.len() < MIN_SYMBOLS {
            self.error = Some(TOO_FEW_SYMBOLS.to_string());
            return None;
        }
        if self.is_loading() {
            return None;
        }
        self.phase = Phase::Loading(token);
        self.error = None;
        Some(OptimizeRequest {
            symbols: self.symbols.to_strings(),
            period: config.portfolio_period.clone(),
        })
    }

    pub fn complete(&mut self, token: RequestToken, result: Result<PortfolioResult, ApiError>) -> Completion {
        if !self.phase.awaits(token) {
            debug!(%token, "Discarding stale optimization result");
            return Completion::Stale;
        }

        match result {
            Ok(result) => {
                info!(
                    allocations = result.optimal_portfolio.allocations.len(),
                    frontier = result.efficient_frontier.len(),
                    "Portfolio optimized"
                );
                self.result = Some(result);
                self.phase = Phase::Succeeded;
            }
            Err(err) => {
                self.error = Some(err.server_error().unwrap_or(OPTIMIZATION_FAILED).to_string());
                self.phase = Phase::Failed;
            }
        }
        Completion::Applied
    }

    /// Run one optimization against `api`. `None` when nothing was sent.
    pub async fn submit<A: StockApi>(
        &mut self,
        api: &A,
        config: &ApiConfig,
        sequence: &mut RequestSequence,
    ) -> Option<Completion> {
        let token = sequence.issue();
        let request = self.begin(token, config)?;
        let result = api.optimize_portfolio(&request).await;
        Some(self.complete(token, result))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&PortfolioResult> {
        self.result.as_ref()
    }

    pub fn allocation_rows(&self) -> Vec<(String, f64)> {
        self.result.as_ref().map(|r| r.allocation_rows()).unwrap_or_default()
    }

    /// Scatter projection of the efficient frontier; empty without a result.
    pub fn frontier_points(&self) -> &[FrontierPoint] {
        self.result
            .as_ref()
            .map(|r| r.efficient_frontier.as_slice())
            .unwrap_or_default()
    }
}
