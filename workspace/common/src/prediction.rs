use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::stocks::StockRecord;

/// Shown when the server reports a failed forecast without saying why
pub const PREDICTION_FAILED: &str = "Prediction failed";

/// One forecast step as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    /// Forecast date as serialized by the server
    pub ds: String,
    /// Predicted value
    pub yhat: f64,
    /// Lower bound of the confidence interval
    pub yhat_lower: f64,
    /// Upper bound of the confidence interval
    pub yhat_upper: f64,
}

impl PredictionPoint {
    pub fn date(&self) -> Option<NaiveDate> {
        parse_forecast_date(&self.ds)
    }
}

/// Accepts the date encodings the server is known to emit: plain ISO dates,
/// ISO datetimes and HTTP dates (`Fri, 05 Jan 2024 00:00:00 GMT`).
pub fn parse_forecast_date(ds: &str) -> Option<NaiveDate> {
    let ds = ds.trim();
    if let Ok(date) = NaiveDate::parse_from_str(ds, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(ds, format) {
            return Some(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(ds) {
        return Some(datetime.date_naive());
    }
    DateTime::parse_from_rfc2822(ds).ok().map(|d| d.date_naive())
}

/// Accuracy of the most recent prediction run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
}

/// Body of the predict endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub stock: Option<StockRecord>,
    #[serde(default)]
    pub predictions: Vec<PredictionPoint>,
    #[serde(default)]
    pub metrics: Option<AccuracyMetrics>,
}

impl PredictResponse {
    /// Split the response into the forecast or the message to display.
    pub fn into_forecast(self) -> Result<Forecast, String> {
        if self.success {
            Ok(Forecast {
                stock: self.stock,
                predictions: self.predictions,
                metrics: self.metrics,
            })
        } else {
            Err(self
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| PREDICTION_FAILED.to_string()))
        }
    }
}

/// The three slices a successful prediction replaces together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    pub stock: Option<StockRecord>,
    pub predictions: Vec<PredictionPoint>,
    pub metrics: Option<AccuracyMetrics>,
}

impl Forecast {
    pub fn chart_rows(&self, labels: &dyn DateLabel) -> Vec<ChartRow> {
        self.predictions
            .iter()
            .map(|p| ChartRow::from_point(p, labels))
            .collect()
    }
}

/// Renders a forecast date for display.
pub trait DateLabel {
    fn label(&self, date: NaiveDate) -> String;
}

/// `YYYY-MM-DD` labels, used where no locale is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateLabel;

impl DateLabel for IsoDateLabel {
    fn label(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// A prediction point projected for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub date: String,
    pub predicted: String,
    pub lower: String,
    pub upper: String,
}

impl ChartRow {
    pub fn from_point(point: &PredictionPoint, labels: &dyn DateLabel) -> Self {
        let date = point
            .date()
            .map(|d| labels.label(d))
            .unwrap_or_else(|| point.ds.clone());

        Self {
            date,
            predicted: format!("{:.2}", point.yhat),
            lower: format!("{:.2}", point.yhat_lower),
            upper: format!("{:.2}", point.yhat_upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlashLabel;

    impl DateLabel for SlashLabel {
        fn label(&self, date: NaiveDate) -> String {
            date.format("%-m/%-d/%Y").to_string()
        }
    }

    fn point(ds: &str, yhat: f64, lower: f64, upper: f64) -> PredictionPoint {
        PredictionPoint {
            ds: ds.to_string(),
            yhat,
            yhat_lower: lower,
            yhat_upper: upper,
        }
    }

    #[test]
    fn test_chart_row_projection() {
        let row = ChartRow::from_point(&point("2024-01-05", 101.236, 99.1, 103.4), &SlashLabel);
        assert_eq!(
            row,
            ChartRow {
                date: "1/5/2024".to_string(),
                predicted: "101.24".to_string(),
                lower: "99.10".to_string(),
                upper: "103.40".to_string(),
            }
        );
    }

    #[test]
    fn test_chart_row_keeps_unparseable_date() {
        let row = ChartRow::from_point(&point("next tuesday", 1.0, 0.0, 2.0), &IsoDateLabel);
        assert_eq!(row.date, "next tuesday");
        assert_eq!(row.predicted, "1.00");
    }

    #[test]
    fn test_parse_forecast_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(parse_forecast_date("2024-01-05"), expected);
        assert_eq!(parse_forecast_date("2024-01-05T00:00:00"), expected);
        assert_eq!(parse_forecast_date("2024-01-05 00:00:00"), expected);
        assert_eq!(parse_forecast_date("2024-01-05T00:00:00+00:00"), expected);
        assert_eq!(parse_forecast_date("Fri, 05 Jan 2024 00:00:00 GMT"), expected);
        assert_eq!(parse_forecast_date("garbage"), None);
    }

    #[test]
    fn test_into_forecast_success() {
        let response: PredictResponse = serde_json::from_str(
            r#"{
                "success": true,
                "stock": {"symbol": "AAPL", "name": "Apple Inc.", "sector": "Technology"},
                "metrics": {"mae": 1.23, "rmse": 2.34},
                "predictions": [{"ds": "2024-01-05", "yhat": 101.236, "yhat_lower": 99.1, "yhat_upper": 103.4}]
            }"#,
        )
        .unwrap();

        let forecast = response.into_forecast().unwrap();
        assert_eq!(forecast.stock.unwrap().symbol, "AAPL");
        assert_eq!(forecast.predictions.len(), 1);
        assert_eq!(forecast.metrics, Some(AccuracyMetrics { mae: 1.23, rmse: 2.34 }));
    }

    #[test]
    fn test_into_forecast_failure_message() {
        let response: PredictResponse =
            serde_json::from_str(r#"{"success": false, "error": "No data"}"#).unwrap();
        assert_eq!(response.into_forecast(), Err("No data".to_string()));

        let response: PredictResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(response.into_forecast(), Err(PREDICTION_FAILED.to_string()));
    }
}
