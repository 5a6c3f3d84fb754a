use anyhow::Result;
use common::{PortfolioResult, PortfolioState, RequestSequence, SymbolSet};
use tracing::{debug, info};

use super::CommandError;
use crate::client::HttpClient;
use crate::output::{OutputFormat, render, table};

pub async fn optimize(client: &HttpClient, symbols: &[String], format: OutputFormat) -> Result<String> {
    let mut state = PortfolioState::with_symbols(SymbolSet::new());
    for raw in symbols {
        state.set_input(raw);
        if !state.add_symbol() {
            debug!("Skipping symbol input: {:?}", raw);
        }
    }

    let mut sequence = RequestSequence::new();
    let submitted = state.submit(client, client.config(), &mut sequence).await;

    if let Some(error) = state.error() {
        let error = error.to_string();
        return Err(match submitted {
            None => CommandError::Invalid(error),
            Some(_) => CommandError::Failed(error),
        }
        .into());
    }

    let Some(result) = state.result() else {
        return Err(CommandError::Failed("Optimization failed".to_string()).into());
    };
    info!(
        "Optimized {} symbols, {} frontier points",
        state.symbols().len(),
        state.frontier_points().len()
    );

    render(format, result, render_result)
}

fn render_result(result: &PortfolioResult) -> String {
    let rows: Vec<Vec<String>> = result
        .allocation_rows()
        .into_iter()
        .map(|(symbol, percent)| vec![symbol, format!("{}%", percent)])
        .collect();

    let portfolio = &result.optimal_portfolio;
    let mut sections = vec![
        format!("Optimal Allocation\n{}", table(&["Stock", "Allocation %"], &rows)),
        format!(
            "Portfolio Metrics\n  Expected Annual Return: {}%\n  Volatility (Risk):      {}%\n  Sharpe Ratio:           {}",
            portfolio.expected_return, portfolio.volatility, portfolio.sharpe_ratio
        ),
    ];

    let mut frontier = format!("Efficient Frontier\n  {} candidate portfolios", result.efficient_frontier.len());
    if let Some(best) = result.best_frontier_point() {
        frontier.push_str(&format!(
            "\n  Best Sharpe: {} (return {}%, volatility {}%)",
            best.sharpe, best.expected_return, best.volatility
        ));
    }
    sections.push(frontier);

    sections.join("\n\n")
}
