use anyhow::Result;
use common::{IsoDateLabel, StockApi, Symbol};
use tracing::{info, trace};

use super::CommandError;
use crate::client::HttpClient;
use crate::output::{OutputFormat, render, table};

fn parse_symbol(raw: &str) -> Result<Symbol, CommandError> {
    Symbol::normalize(raw).ok_or_else(|| CommandError::Invalid("Enter a stock symbol".to_string()))
}

pub async fn health(client: &HttpClient, format: OutputFormat) -> Result<String> {
    trace!("Entering health command");
    let status = client.health_check().await?;
    info!("Server status: {}", status.status);

    render(format, &status, |status| match &status.message {
        Some(message) => format!("{} - {}", status.status, message),
        None => status.status.clone(),
    })
}

pub async fn stocks(client: &HttpClient, format: OutputFormat) -> Result<String> {
    trace!("Entering stocks command");
    let list = client.list_stocks().await?;

    render(format, &list, |list| {
        if list.stocks.is_empty() {
            return list
                .message
                .clone()
                .unwrap_or_else(|| "No stocks tracked yet.".to_string());
        }
        let rows: Vec<Vec<String>> = list
            .stocks
            .iter()
            .map(|s| vec![s.symbol.clone(), s.name.clone(), s.sector.clone()])
            .collect();
        table(&["Symbol", "Name", "Sector"], &rows)
    })
}

pub async fn fetch(client: &HttpClient, symbol: &str, period: &str, format: OutputFormat) -> Result<String> {
    trace!("Entering fetch command");
    let symbol = parse_symbol(symbol)?;
    let response = client.fetch_stock_data(symbol.as_str(), period).await?;

    if !response.success {
        let message = response.error.unwrap_or_else(|| "Ingestion failed".to_string());
        return Err(CommandError::Failed(message).into());
    }

    render(format, &response, |response| match &response.stock {
        Some(stock) => format!("Ingested {} ({}) over {}", stock.symbol, stock.name, period),
        None => format!("Ingested {} over {}", symbol, period),
    })
}

pub async fn prices(client: &HttpClient, symbol: &str, limit: u32, format: OutputFormat) -> Result<String> {
    trace!("Entering prices command");
    let symbol = parse_symbol(symbol)?;
    let prices = client.stock_prices(symbol.as_str(), limit).await?;

    render(format, &prices, |prices| {
        let rows: Vec<Vec<String>> = prices
            .prices
            .iter()
            .map(|p| {
                vec![
                    p.date.to_string(),
                    format!("{:.2}", p.open_price),
                    format!("{:.2}", p.high_price),
                    format!("{:.2}", p.low_price),
                    format!("{:.2}", p.close_price),
                    p.volume.to_string(),
                ]
            })
            .collect();
        format!(
            "{} ({})\n{}",
            prices.stock.symbol,
            prices.stock.name,
            table(&["Date", "Open", "High", "Low", "Close", "Volume"], &rows)
        )
    })
}

pub async fn predict(client: &HttpClient, symbol: &str, periods: u32, format: OutputFormat) -> Result<String> {
    trace!("Entering predict command");
    let symbol = parse_symbol(symbol)?;
    let response = client.predict(symbol.as_str(), periods).await?;
    let forecast = response.into_forecast().map_err(CommandError::Failed)?;

    render(format, &forecast, |forecast| {
        let rows: Vec<Vec<String>> = forecast
            .chart_rows(&IsoDateLabel)
            .into_iter()
            .map(|row| vec![row.date, row.predicted, row.lower, row.upper])
            .collect();
        table(&["Date", "Predicted", "Lower", "Upper"], &rows)
    })
}
