use common::OptimalPortfolio;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub portfolio: OptimalPortfolio,
}

#[function_component(PortfolioMetrics)]
pub fn portfolio_metrics(props: &Props) -> Html {
    let portfolio = &props.portfolio;
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Portfolio Metrics"}</h3>
                <div class="stats stats-vertical">
                    <div class="stat px-0 py-2">
                        <div class="stat-title">{"Expected Annual Return"}</div>
                        <div class="stat-value text-2xl text-success">{format!("{}%", portfolio.expected_return)}</div>
                    </div>
                    <div class="stat px-0 py-2">
                        <div class="stat-title">{"Volatility (Risk)"}</div>
                        <div class="stat-value text-2xl text-warning">{format!("{}%", portfolio.volatility)}</div>
                    </div>
                    <div class="stat px-0 py-2">
                        <div class="stat-title">{"Sharpe Ratio"}</div>
                        <div class="stat-value text-2xl">{portfolio.sharpe_ratio}</div>
                    </div>
                </div>
                <p class="text-xs text-gray-500">{"Higher Sharpe ratio = Better risk-adjusted returns"}</p>
            </div>
        </div>
    }
}
