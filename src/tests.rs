#[cfg(test)]
mod integration_tests {
    use crate::cli::Cli;
    use crate::cli::commands::CommandError;
    use crate::client::HttpClient;
    use crate::test_utils::test_utils::{NO_DATA_SYMBOL, UNKNOWN_SYMBOL, closed_port_url, spawn_backend};
    use clap::Parser;
    use common::{
        AnalysisState, ApiConfig, ApiError, Completion, IsoDateLabel, OptimizeRequest, PortfolioState,
        RequestSequence, StockApi, Symbol, fetch_then_predict,
    };

    async fn run_cli(args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec!["stock-analyzer"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid arguments").run().await
    }

    #[tokio::test]
    async fn test_health_check() {
        let backend = spawn_backend().await;
        let client = HttpClient::new(ApiConfig::with_base_url(&backend.base_url));

        let status = client.health_check().await.unwrap();

        assert!(status.is_healthy());
        assert_eq!(status.message.as_deref(), Some("AI Stock Analyzer API is running"));
    }

    #[tokio::test]
    async fn test_list_stocks() {
        let backend = spawn_backend().await;
        let client = HttpClient::new(ApiConfig::with_base_url(&backend.base_url));

        let list = client.list_stocks().await.unwrap();

        let symbols: Vec<&str> = list.stocks.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }

    #[tokio::test]
    async fn test_stock_prices_sends_limit() {
        let backend = spawn_backend().await;
        let client = HttpClient::new(ApiConfig::with_base_url(&backend.base_url));

        let prices = client.stock_prices("MSFT", 5).await.unwrap();

        assert_eq!(prices.prices.len(), 5);
        assert!(prices.is_for(&Symbol::normalize("msft").unwrap()));
        assert_eq!(backend.requests.entries(), vec!["prices MSFT 5".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_then_predict_sequences_calls() {
        let backend = spawn_backend().await;
        let config = ApiConfig::with_base_url(&backend.base_url);
        let client = HttpClient::new(config.clone());

        let response = fetch_then_predict(&client, "AAPL", &config).await.unwrap();

        assert!(response.success);
        assert_eq!(response.predictions.len(), 7);
        assert_eq!(
            backend.requests.entries(),
            vec!["fetch AAPL 3mo".to_string(), "predict AAPL 7".to_string()]
        );
    }

    #[tokio::test]
    async fn test_analysis_projection_from_live_response() {
        let backend = spawn_backend().await;
        let config = ApiConfig::with_base_url(&backend.base_url);
        let client = HttpClient::new(config.clone());
        let mut sequence = RequestSequence::new();
        let mut state = AnalysisState::new("aapl");

        let completion = state.submit(&client, &config, &mut sequence).await;

        assert_eq!(completion, Some(Completion::Applied));
        let first = &state.chart_rows(&IsoDateLabel)[0];
        assert_eq!(first.date, "2024-01-05");
        assert_eq!(first.predicted, "101.24");
        assert_eq!(first.lower, "99.10");
        assert_eq!(first.upper, "103.40");
    }

    #[tokio::test]
    async fn test_analysis_replaces_previous_symbol() {
        let backend = spawn_backend().await;
        let config = ApiConfig::with_base_url(&backend.base_url);
        let client = HttpClient::new(config.clone());
        let mut sequence = RequestSequence::new();
        let mut state = AnalysisState::new("AAPL");

        state.submit(&client, &config, &mut sequence).await;
        assert_eq!(state.stock().unwrap().symbol, "AAPL");

        state.set_symbol("tsla");
        state.submit(&client, &config, &mut sequence).await;

        assert_eq!(state.stock().unwrap().symbol, "TSLA");
        assert_eq!(state.stock().unwrap().name, "TSLA Inc.");
        assert!(state.predictions().iter().all(|p| p.yhat > 200.0));
        assert_eq!(state.predictions().len(), 7);
    }

    #[tokio::test]
    async fn test_prediction_failure_is_shown_verbatim() {
        let backend = spawn_backend().await;
        let config = ApiConfig::with_base_url(&backend.base_url);
        let client = HttpClient::new(config.clone());
        let mut sequence = RequestSequence::new();
        let mut state = AnalysisState::new(NO_DATA_SYMBOL);

        state.submit(&client, &config, &mut sequence).await;

        assert_eq!(state.error(), Some("No data"));
        assert!(state.chart_rows(&IsoDateLabel).is_empty());
    }

    #[tokio::test]
    async fn test_optimize_error_body_is_decoded() {
        let backend = spawn_backend().await;
        let client = HttpClient::new(ApiConfig::with_base_url(&backend.base_url));

        let request = OptimizeRequest {
            symbols: vec!["AAPL".to_string(), UNKNOWN_SYMBOL.to_string()],
            period: "1y".to_string(),
        };
        let err = client.optimize_portfolio(&request).await.unwrap_err();

        assert_eq!(err.to_string(), "Request failed with status code 400");
        assert_eq!(err.server_error(), Some("Failed to fetch data for ZZZZ"));
    }

    #[tokio::test]
    async fn test_portfolio_state_against_backend() {
        let backend = spawn_backend().await;
        let config = ApiConfig::with_base_url(&backend.base_url);
        let client = HttpClient::new(config.clone());
        let mut sequence = RequestSequence::new();
        let mut state = PortfolioState::default();

        state.set_input("nvda");
        state.add_symbol();
        state.submit(&client, &config, &mut sequence).await;

        assert_eq!(state.allocation_rows().len(), 4);
        assert_eq!(state.frontier_points().len(), 3);
        assert_eq!(
            backend.requests.entries(),
            vec!["optimize AAPL,GOOGL,MSFT,NVDA 1y".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_http_error() {
        let backend = spawn_backend().await;
        let config = ApiConfig::with_base_url(format!("{}/v2", backend.base_url));
        let client = HttpClient::new(config);

        let err = client.health_check().await.unwrap_err();

        assert!(matches!(err, ApiError::Http { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = HttpClient::new(ApiConfig::with_base_url(closed_port_url().await));

        let err = client.health_check().await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.message_or("Failed to fetch data").is_empty());
    }

    #[tokio::test]
    async fn test_cli_analyze_prints_report() {
        let backend = spawn_backend().await;

        let output = run_cli(&["--api-url", &backend.base_url, "analyze", "-s", "aapl"])
            .await
            .unwrap();

        assert!(output.contains("Stock Info"));
        assert!(output.contains("Symbol: AAPL"));
        assert!(output.contains("MAE:  $1.25"));
        assert!(output.contains("7-Day Price Predictions"));
        assert!(output.contains("2024-01-05  101.24"));
        assert!(output.contains("99.10"));
        assert!(output.contains("103.40"));
    }

    #[tokio::test]
    async fn test_cli_analyze_reports_server_error() {
        let backend = spawn_backend().await;

        let err = run_cli(&["--api-url", &backend.base_url, "analyze", "-s", NO_DATA_SYMBOL])
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<CommandError>(),
            Some(&CommandError::Failed("No data".to_string()))
        );
    }

    #[tokio::test]
    async fn test_cli_optimize_needs_two_symbols() {
        let backend = spawn_backend().await;

        let err = run_cli(&["--api-url", &backend.base_url, "optimize", "AAPL", "aapl "])
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<CommandError>(),
            Some(&CommandError::Invalid("Add at least 2 stocks".to_string()))
        );
        assert!(backend.requests.entries().is_empty());
    }

    #[tokio::test]
    async fn test_cli_optimize_json_output() {
        let backend = spawn_backend().await;

        let output = run_cli(&[
            "--api-url",
            &backend.base_url,
            "--format",
            "json",
            "optimize",
            "msft",
            "aapl",
            "--period",
            "6mo",
        ])
        .await
        .unwrap();

        let body: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(body["optimal_portfolio"]["allocations"]["AAPL"], 50.0);
        assert_eq!(body["efficient_frontier"].as_array().unwrap().len(), 3);
        assert_eq!(backend.requests.entries(), vec!["optimize MSFT,AAPL 6mo".to_string()]);
    }

    #[tokio::test]
    async fn test_cli_optimize_surfaces_server_error() {
        let backend = spawn_backend().await;

        let err = run_cli(&["--api-url", &backend.base_url, "optimize", "AAPL", UNKNOWN_SYMBOL])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch data for ZZZZ");
    }

    #[tokio::test]
    async fn test_cli_optimize_table_is_sorted_by_symbol() {
        let backend = spawn_backend().await;

        let output = run_cli(&["--api-url", &backend.base_url, "optimize", "msft", "aapl"])
            .await
            .unwrap();

        let aapl = output.find("AAPL").unwrap();
        let msft = output.find("MSFT").unwrap();
        assert!(aapl < msft);
        assert!(output.contains("Sharpe Ratio:           0.74"));
        assert!(output.contains("Best Sharpe: 0.72"));
    }

    #[tokio::test]
    async fn test_cli_health_yaml() {
        let backend = spawn_backend().await;

        let output = run_cli(&["--api-url", &backend.base_url, "-f", "yaml", "health"])
            .await
            .unwrap();

        assert!(output.contains("status: healthy"));
    }

    #[tokio::test]
    async fn test_cli_fetch_and_prices() {
        let backend = spawn_backend().await;

        let output = run_cli(&["--api-url", &backend.base_url, "fetch", "-s", " tsla "])
            .await
            .unwrap();
        assert_eq!(output, "Ingested TSLA (TSLA Inc.) over 3mo");

        let output = run_cli(&["--api-url", &backend.base_url, "prices", "-s", "tsla", "-l", "3"])
            .await
            .unwrap();
        assert!(output.starts_with("TSLA (TSLA Inc.)"));
        assert!(output.contains("2024-02-28"));
        assert!(output.contains("2024-02-26"));

        assert_eq!(
            backend.requests.entries(),
            vec!["fetch TSLA 3mo".to_string(), "prices TSLA 3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cli_stocks_lists_known_symbols() {
        let backend = spawn_backend().await;

        let output = run_cli(&["--api-url", &backend.base_url, "stocks"]).await.unwrap();

        assert!(output.contains("Symbol"));
        assert!(output.contains("AAPL Inc."));
        assert!(output.contains("MSFT Inc."));
    }
}
