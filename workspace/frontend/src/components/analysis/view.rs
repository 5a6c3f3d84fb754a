use common::{fetch_then_predict, RequestSequence};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::metrics::ModelAccuracy;
use super::prediction_chart::PredictionChart;
use super::recent_prices::RecentPrices;
use super::stock_info::StockInfo;
use super::stock_list::TrackedStocks;
use super::store::{AnalysisAction, AnalysisStore};
use crate::common::error::ErrorAlert;
use crate::common::loading::ButtonSpinner;
use crate::hooks::use_api_client;
use crate::locale::BrowserDateLabel;

#[function_component(Analysis)]
pub fn analysis() -> Html {
    let store = use_reducer(AnalysisStore::default);
    let sequence = use_mut_ref(RequestSequence::new);
    let client = use_api_client();
    let state = &store.state;

    let on_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.dispatch(AnalysisAction::SetSymbol(input.value()));
        })
    };

    let on_pick = {
        let store = store.clone();
        Callback::from(move |symbol: String| {
            log::debug!("Picked tracked stock {}", symbol);
            store.dispatch(AnalysisAction::SetSymbol(symbol));
        })
    };

    let on_submit = {
        let store = store.clone();
        let sequence = sequence.clone();
        let client = client.clone();
        Callback::from(move |_| {
            let token = sequence.borrow_mut().issue();
            let Some(symbol) = store.state.clone().begin(token) else {
                log::debug!("Analysis not submitted for {:?}", store.state.symbol());
                return;
            };
            store.dispatch(AnalysisAction::Begin(token));

            let store = store.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Analyzing {}", symbol);
                let result = fetch_then_predict(&client, &symbol, client.config()).await;
                store.dispatch(AnalysisAction::Complete(token, result));
            });
        })
    };

    let chart_rows = state.chart_rows(&BrowserDateLabel);
    let periods = client.config().forecast_periods;

    html! {
        <>
            <div class="mb-6">
                <h2 class="text-2xl font-bold">{"Stock Price Prediction"}</h2>
                <p class="text-sm text-gray-500">{"Enter a stock symbol to fetch data and generate ML predictions"}</p>
            </div>

            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body">
                    <div class="flex flex-col md:flex-row gap-4 md:items-end">
                        <label class="form-control w-full md:max-w-xs">
                            <div class="label"><span class="label-text">{"Stock Symbol"}</span></div>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="e.g., AAPL, GOOGL, MSFT"
                                value={state.symbol().to_string()}
                                oninput={on_input}
                            />
                        </label>
                        <button
                            class="btn btn-primary md:w-56"
                            onclick={on_submit}
                            disabled={!state.can_submit()}
                        >
                            if state.is_loading() {
                                <ButtonSpinner />
                            } else {
                                {"Analyze & Predict"}
                            }
                        </button>
                    </div>
                    <div class="mt-4">
                        <TrackedStocks on_pick={on_pick} />
                    </div>
                </div>
            </div>

            if let Some(error) = state.error() {
                <ErrorAlert message={error.to_string()} />
            }

            if let Some(stock) = state.stock() {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <StockInfo stock={stock.clone()} />
                    if let Some(metrics) = state.metrics() {
                        <ModelAccuracy metrics={*metrics} />
                    }
                    if !chart_rows.is_empty() {
                        <div class="card bg-base-100 shadow md:col-span-3">
                            <div class="card-body">
                                <h3 class="card-title">{format!("{}-Day Price Predictions", periods)}</h3>
                                <PredictionChart rows={chart_rows.clone()} />
                            </div>
                        </div>
                    }
                    <div class="md:col-span-3">
                        <RecentPrices key={stock.symbol.clone()} symbol={stock.symbol.clone()} />
                    </div>
                </div>
            }
        </>
    }
}
