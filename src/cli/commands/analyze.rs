use anyhow::Result;
use common::{AccuracyMetrics, AnalysisState, ChartRow, IsoDateLabel, RequestSequence, StockRecord};
use serde::Serialize;
use tracing::{debug, info};

use super::CommandError;
use crate::client::HttpClient;
use crate::output::{OutputFormat, render, table};

/// What the analysis page would display after a successful run.
#[derive(Debug, Serialize)]
struct AnalysisReport {
    stock: Option<StockRecord>,
    metrics: Option<AccuracyMetrics>,
    predictions: Vec<ChartRow>,
}

pub async fn analyze(client: &HttpClient, symbol: &str, format: OutputFormat) -> Result<String> {
    let mut state = AnalysisState::new(symbol);
    let mut sequence = RequestSequence::new();
    debug!("Analyzing symbol: {}", state.symbol());

    if state.submit(client, client.config(), &mut sequence).await.is_none() {
        return Err(CommandError::Invalid("Enter a stock symbol".to_string()).into());
    }
    if let Some(error) = state.error() {
        return Err(CommandError::Failed(error.to_string()).into());
    }

    let report = AnalysisReport {
        stock: state.stock().cloned(),
        metrics: state.metrics().copied(),
        predictions: state.chart_rows(&IsoDateLabel),
    };
    info!("Analysis complete with {} predictions", report.predictions.len());

    let periods = client.config().forecast_periods;
    render(format, &report, |report| render_report(report, periods))
}

fn render_report(report: &AnalysisReport, periods: u32) -> String {
    let mut sections = Vec::new();

    if let Some(stock) = &report.stock {
        sections.push(format!(
            "Stock Info\n  Symbol: {}\n  Name:   {}\n  Sector: {}",
            stock.symbol, stock.name, stock.sector
        ));
    }

    if let Some(metrics) = &report.metrics {
        sections.push(format!(
            "Model Accuracy\n  MAE:  ${}\n  RMSE: ${}\n  Lower values indicate better accuracy",
            metrics.mae, metrics.rmse
        ));
    }

    let rows: Vec<Vec<String>> = report
        .predictions
        .iter()
        .map(|row| vec![row.date.clone(), row.predicted.clone(), row.lower.clone(), row.upper.clone()])
        .collect();
    sections.push(format!(
        "{}-Day Price Predictions\n{}",
        periods,
        table(&["Date", "Predicted", "Lower", "Upper"], &rows)
    ));

    sections.join("\n\n")
}
