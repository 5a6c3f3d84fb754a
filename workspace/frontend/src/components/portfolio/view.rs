use common::{RequestSequence, StockApi, Symbol};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::allocation_table::AllocationTable;
use super::frontier_chart::FrontierChart;
use super::metrics::PortfolioMetrics;
use super::store::{PortfolioAction, PortfolioStore};
use super::symbol_chips::SymbolChips;
use crate::common::error::ErrorAlert;
use crate::common::loading::ButtonSpinner;
use crate::hooks::use_api_client;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let store = use_reducer(PortfolioStore::default);
    let sequence = use_mut_ref(RequestSequence::new);
    let client = use_api_client();
    let state = &store.state;

    let on_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.dispatch(PortfolioAction::SetInput(input.value()));
        })
    };

    let on_keydown = {
        let store = store.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                store.dispatch(PortfolioAction::AddSymbol);
            }
        })
    };

    let on_add = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(PortfolioAction::AddSymbol))
    };

    let on_remove = {
        let store = store.clone();
        Callback::from(move |symbol: Symbol| store.dispatch(PortfolioAction::RemoveSymbol(symbol)))
    };

    let on_optimize = {
        let store = store.clone();
        let sequence = sequence.clone();
        let client = client.clone();
        Callback::from(move |_| {
            let token = sequence.borrow_mut().issue();
            let config = client.config().clone();
            let request = store.state.clone().begin(token, &config);
            store.dispatch(PortfolioAction::Begin(token, config));

            let Some(request) = request else {
                log::debug!("Optimization not submitted");
                return;
            };

            let store = store.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.optimize_portfolio(&request).await;
                store.dispatch(PortfolioAction::Complete(token, result));
            });
        })
    };

    html! {
        <>
            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body">
                    <h2 class="card-title text-2xl">{"Portfolio Optimizer"}</h2>
                    <p class="text-sm text-gray-500 mb-2">{"Add stocks and optimize your portfolio allocation"}</p>

                    <div class="flex flex-col sm:flex-row gap-4 sm:items-end">
                        <label class="form-control w-full">
                            <div class="label"><span class="label-text">{"Add Stock Symbol"}</span></div>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="e.g., AAPL"
                                value={state.input().to_string()}
                                oninput={on_input}
                                onkeydown={on_keydown}
                            />
                        </label>
                        <button class="btn btn-outline sm:w-40" onclick={on_add} disabled={!state.can_add()}>
                            {"Add Stock"}
                        </button>
                    </div>

                    <SymbolChips symbols={state.symbols().clone()} on_remove={on_remove} />

                    <button
                        class="btn btn-primary w-full mt-2"
                        onclick={on_optimize}
                        disabled={!state.can_optimize()}
                    >
                        if state.is_loading() {
                            <ButtonSpinner />
                        } else {
                            {"Optimize Portfolio"}
                        }
                    </button>
                </div>
            </div>

            if let Some(error) = state.error() {
                <ErrorAlert message={error.to_string()} />
            }

            if let Some(result) = state.result() {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <AllocationTable rows={state.allocation_rows()} />
                    <PortfolioMetrics portfolio={result.optimal_portfolio.clone()} />
                    <div class="card bg-base-100 shadow md:col-span-2">
                        <div class="card-body">
                            <h3 class="card-title">{"Efficient Frontier"}</h3>
                            <FrontierChart points={state.frontier_points().to_vec()} />
                            <p class="text-xs text-gray-500">
                                {"Each dot represents a possible portfolio combination. Larger dots have higher Sharpe ratios."}
                            </p>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
