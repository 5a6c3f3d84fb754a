use tracing::{debug, info, warn};

use super::{Completion, Phase};
use crate::api::{ApiConfig, ApiError, StockApi};
use crate::fence::{RequestSequence, RequestToken};
use crate::prediction::{AccuracyMetrics, ChartRow, DateLabel, Forecast, PredictResponse, PredictionPoint};
use crate::stocks::StockRecord;
use crate::symbols::uppercase_input;

/// Shown when a request fails without a usable message
pub const FETCH_FAILED: &str = "Failed to fetch data";

/// Symbol the analysis page starts with
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Ingest `symbol`, then forecast it.
///
/// The forecast request is only sent once ingestion has answered, so the
/// server always predicts over freshly ingested prices. The ingestion payload
/// itself is not used; a reported ingestion failure is only logged.
pub async fn fetch_then_predict<A: StockApi>(
    api: &A,
    symbol: &str,
    config: &ApiConfig,
) -> Result<PredictResponse, ApiError> {
    let ingestion = api.fetch_stock_data(symbol, &config.ingest_period).await?;
    if !ingestion.success {
        warn!(
            symbol,
            error = ingestion.error.as_deref().unwrap_or_default(),
            "Ingestion reported failure, requesting forecast anyway"
        );
    }
    api.predict(symbol, config.forecast_periods).await
}

/// State of the single-symbol analysis page.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisState {
    symbol: String,
    phase: Phase,
    error: Option<String>,
    forecast: Option<Forecast>,
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL)
    }
}

impl AnalysisState {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: uppercase_input(symbol),
            phase: Phase::Idle,
            error: None,
            forecast: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Store the typed symbol uppercased. Whitespace is kept as typed.
    pub fn set_symbol(&mut self, raw: &str) {
        self.symbol = uppercase_input(raw);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        !self.symbol.is_empty() && !self.is_loading()
    }

    /// Enter Loading for `token` and return the symbol to analyse, or `None`
    /// when the page cannot submit right now.
    pub fn begin(&mut self, token: RequestToken) -> Option<String> {
        if !self.can_submit() {
            debug!(symbol = %self.symbol, "Analysis submission rejected");
            return None;
        }
        self.phase = Phase::Loading(token);
        self.error = None;
        Some(self.symbol.clone())
    }

    /// Apply the outcome of the submission identified by `token`.
    pub fn complete(&mut self, token: RequestToken, result: Result<PredictResponse, ApiError>) -> Completion {
        if !self.phase.awaits(token) {
            debug!(%token, "Discarding stale analysis result");
            return Completion::Stale;
        }

        match result.map(PredictResponse::into_forecast) {
            Ok(Ok(forecast)) => {
                info!(
                    symbol = forecast.stock.as_ref().map(|s| s.symbol.as_str()).unwrap_or_default(),
                    points = forecast.predictions.len(),
                    "Forecast received"
                );
                self.forecast = Some(forecast);
                self.phase = Phase::Succeeded;
            }
            Ok(Err(message)) => {
                self.error = Some(message);
                self.phase = Phase::Failed;
            }
            Err(err) => {
                self.error = Some(err.message_or(FETCH_FAILED));
                self.phase = Phase::Failed;
            }
        }
        Completion::Applied
    }

    /// Run one full submission against `api`. `None` when the page could
    /// not submit.
    pub async fn submit<A: StockApi>(
        &mut self,
        api: &A,
        config: &ApiConfig,
        sequence: &mut RequestSequence,
    ) -> Option<Completion> {
        let token = sequence.issue();
        let symbol = self.begin(token)?;
        let result = fetch_then_predict(api, &symbol, config).await;
        Some(self.complete(token, result))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn forecast(&self) -> Option<&Forecast> {
        self.forecast.as_ref()
    }

    pub fn stock(&self) -> Option<&StockRecord> {
        self.forecast.as_ref().and_then(|f| f.stock.as_ref())
    }

    pub fn predictions(&self) -> &[PredictionPoint] {
        self.forecast.as_ref().map(|f| f.predictions.as_slice()).unwrap_or_default()
    }

    pub fn metrics(&self) -> Option<&AccuracyMetrics> {
        self.forecast.as_ref().and_then(|f| f.metrics.as_ref())
    }

    /// Chart projection of the current predictions; empty before the first
    /// successful forecast.
    pub fn chart_rows(&self, labels: &dyn DateLabel) -> Vec<ChartRow> {
        self.forecast.as_ref().map(|f| f.chart_rows(labels)).unwrap_or_default()
    }
}
