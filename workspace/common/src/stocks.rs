use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::prediction::parse_forecast_date;
use crate::symbols::Symbol;

// ===================== Stocks =====================

/// Descriptive metadata the server keeps for an ingested stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: String,
}

/// Known stocks (mirrors the server's list endpoint).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockList {
    #[serde(default)]
    pub stocks: Vec<StockRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for triggering server-side ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchStockRequest {
    pub symbol: String,
    pub period: String,
}

impl FetchStockRequest {
    pub fn new(symbol: &str, period: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            period: period.to_string(),
        }
    }
}

/// Ingestion result. The analysis flow does not depend on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FetchStockResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stock: Option<StockRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

// ===================== Prices =====================

/// One daily bar as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(deserialize_with = "lenient_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub open_price: f64,
    #[serde(default)]
    pub high_price: f64,
    #[serde(default)]
    pub low_price: f64,
    pub close_price: f64,
    #[serde(default, deserialize_with = "volume_or_zero")]
    pub volume: u64,
}

/// Price dates may come back as ISO datetimes or HTTP dates.
fn lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_forecast_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid price date: {raw}")))
}

/// `null` and fractional volumes are tolerated.
fn volume_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let volume = Option::<f64>::deserialize(deserializer)?;
    Ok(volume.map(|v| v.max(0.0) as u64).unwrap_or_default())
}

/// Most recent prices for one stock, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrices {
    pub stock: StockRecord,
    #[serde(default)]
    pub prices: Vec<PricePoint>,
}

impl StockPrices {
    pub fn latest_close(&self) -> Option<f64> {
        self.prices.iter().max_by_key(|p| p.date).map(|p| p.close_price)
    }

    pub fn is_for(&self, symbol: &Symbol) -> bool {
        self.stock.symbol.eq_ignore_ascii_case(symbol.as_str())
    }
}

// ===================== Health =====================

/// Liveness payload returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}
