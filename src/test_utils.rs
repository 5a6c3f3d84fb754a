#[cfg(test)]
pub mod test_utils {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::StatusCode,
        routing::{get, post},
    };
    use chrono::{Days, NaiveDate};
    use common::{FetchStockRequest, OptimizeRequest};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Symbol whose forecast the mock backend reports as failed
    pub const NO_DATA_SYMBOL: &str = "NODATA";

    /// Symbol the mock optimizer cannot price
    pub const UNKNOWN_SYMBOL: &str = "ZZZZ";

    /// Requests seen by the mock backend, in arrival order
    #[derive(Clone, Default)]
    pub struct RequestLog(Arc<Mutex<Vec<String>>>);

    impl RequestLog {
        fn push(&self, entry: String) {
            self.0.lock().expect("request log poisoned").push(entry);
        }

        pub fn entries(&self) -> Vec<String> {
            self.0.lock().expect("request log poisoned").clone()
        }
    }

    pub struct MockBackend {
        /// Base URL to hand to clients, including the `/api` prefix
        pub base_url: String,
        pub requests: RequestLog,
    }

    fn stock_json(symbol: &str) -> Value {
        json!({"symbol": symbol, "name": format!("{} Inc.", symbol), "sector": "Technology"})
    }

    async fn health() -> Json<Value> {
        Json(json!({"status": "healthy", "message": "AI Stock Analyzer API is running"}))
    }

    async fn list_stocks(State(log): State<RequestLog>) -> Json<Value> {
        log.push("list".to_string());
        Json(json!({"stocks": [stock_json("AAPL"), stock_json("MSFT")]}))
    }

    async fn fetch_stock(
        State(log): State<RequestLog>,
        Json(body): Json<FetchStockRequest>,
    ) -> Json<Value> {
        log.push(format!("fetch {} {}", body.symbol, body.period));
        Json(json!({"success": true, "stock": stock_json(&body.symbol)}))
    }

    async fn stock_prices(
        State(log): State<RequestLog>,
        Path(symbol): Path<String>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        let limit: usize = query.get("limit").and_then(|l| l.parse().ok()).unwrap_or(30);
        log.push(format!("prices {} {}", symbol, limit));

        let newest = NaiveDate::from_ymd_opt(2024, 2, 28).expect("valid date");
        let prices: Vec<Value> = (0..limit)
            .map(|i| {
                json!({
                    "date": (newest - Days::new(i as u64)).to_string(),
                    "open_price": 100.0,
                    "high_price": 101.0,
                    "low_price": 99.0,
                    "close_price": 100.5 + i as f64,
                    "volume": 1_000_000
                })
            })
            .collect();
        Json(json!({"stock": stock_json(&symbol), "prices": prices}))
    }

    async fn predict(
        State(log): State<RequestLog>,
        Path(symbol): Path<String>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        let periods: usize = query.get("periods").and_then(|p| p.parse().ok()).unwrap_or(30);
        log.push(format!("predict {} {}", symbol, periods));

        if symbol == NO_DATA_SYMBOL {
            return Json(json!({"success": false, "error": "No data"}));
        }

        let base = if symbol == "AAPL" { 100.0 } else { 200.0 };
        let predictions: Vec<Value> = (0..periods)
            .map(|i| {
                json!({
                    "ds": format!("2024-01-{:02}", i + 5),
                    "yhat": base + 1.236 + i as f64,
                    "yhat_lower": base - 0.9 + i as f64,
                    "yhat_upper": base + 3.4 + i as f64
                })
            })
            .collect();

        Json(json!({
            "success": true,
            "stock": stock_json(&symbol),
            "metrics": {"mae": 1.25, "rmse": 1.75},
            "predictions": predictions
        }))
    }

    async fn optimize(
        State(log): State<RequestLog>,
        Json(body): Json<OptimizeRequest>,
    ) -> (StatusCode, Json<Value>) {
        log.push(format!("optimize {} {}", body.symbols.join(","), body.period));

        if body.symbols.iter().any(|s| s == UNKNOWN_SYMBOL) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Failed to fetch data for {}", UNKNOWN_SYMBOL)})),
            );
        }

        let share = 100.0 / body.symbols.len() as f64;
        let allocations: serde_json::Map<String, Value> = body
            .symbols
            .iter()
            .map(|s| (s.clone(), json!(share)))
            .collect();

        (
            StatusCode::OK,
            Json(json!({
                "optimal_portfolio": {
                    "allocations": allocations,
                    "expected_return": 18.4,
                    "volatility": 22.1,
                    "sharpe_ratio": 0.74
                },
                "efficient_frontier": [
                    {"return": 12.0, "volatility": 18.0, "sharpe": 0.56},
                    {"return": 16.0, "volatility": 20.0, "sharpe": 0.7},
                    {"return": 20.0, "volatility": 25.0, "sharpe": 0.72}
                ]
            })),
        )
    }

    /// Router mimicking the analysis server under `/api`
    pub fn mock_router(log: RequestLog) -> Router {
        Router::new()
            .route("/api/health", get(health))
            .route("/api/stocks", get(list_stocks))
            .route("/api/stocks/fetch", post(fetch_stock))
            .route("/api/stocks/:symbol/prices", get(stock_prices))
            .route("/api/stocks/:symbol/predict", get(predict))
            .route("/api/portfolio/optimize", post(optimize))
            .with_state(log)
    }

    /// Serve the mock router on an ephemeral local port.
    pub async fn spawn_backend() -> MockBackend {
        let _guard = init_test_tracing();

        let requests = RequestLog::default();
        let app = mock_router(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let address = listener.local_addr().expect("Mock backend has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend failed");
        });

        MockBackend {
            base_url: format!("http://{}/api", address),
            requests,
        }
    }

    /// URL of a local port nothing listens on
    pub async fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let address = listener.local_addr().expect("Probe listener has no address");
        drop(listener);
        format!("http://{}/api", address)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level comes from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}
