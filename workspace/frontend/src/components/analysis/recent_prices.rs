use common::{StockApi, StockPrices};
use yew::prelude::*;

use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::hooks::use_api_client;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbol: String,
}

/// Latest stored prices for the analysed stock. Keyed by symbol by the parent.
#[function_component(RecentPrices)]
pub fn recent_prices(props: &Props) -> Html {
    let client = use_api_client();
    let symbol = props.symbol.clone();
    let limit = client.config().price_limit;

    let (fetch_state, refetch) = use_fetch_with_refetch(move || {
        let client = client.clone();
        let symbol = symbol.clone();
        async move { client.stock_prices(&symbol, limit).await }
    });

    let render = Callback::from(|prices: StockPrices| {
        html! {
            <div class="overflow-x-auto max-h-96">
                <table class="table table-sm table-pin-rows">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th class="text-right">{"Open"}</th>
                            <th class="text-right">{"High"}</th>
                            <th class="text-right">{"Low"}</th>
                            <th class="text-right">{"Close"}</th>
                            <th class="text-right">{"Volume"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for prices.prices.iter().map(|p| html! {
                            <tr key={p.date.to_string()}>
                                <td>{p.date.to_string()}</td>
                                <td class="text-right">{format!("{:.2}", p.open_price)}</td>
                                <td class="text-right">{format!("{:.2}", p.high_price)}</td>
                                <td class="text-right">{format!("{:.2}", p.low_price)}</td>
                                <td class="text-right font-semibold">{format!("{:.2}", p.close_price)}</td>
                                <td class="text-right">{p.volume}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        }
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Recent Prices"}</h3>
                <FetchRender<StockPrices>
                    state={(*fetch_state).clone()}
                    render={render}
                    on_retry={Some(refetch)}
                    loading_text={Some("Loading prices...".to_string())}
                />
            </div>
        </div>
    }
}
