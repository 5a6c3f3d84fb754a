use common::{StockApi, StockRecord};
use yew::prelude::*;

use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRenderList;
use crate::hooks::use_api_client;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Receives the symbol of the clicked stock
    pub on_pick: Callback<String>,
}

#[function_component(TrackedStocks)]
pub fn tracked_stocks(props: &Props) -> Html {
    let client = use_api_client();
    let (fetch_state, refetch) = use_fetch_with_refetch(move || {
        let client = client.clone();
        async move { client.list_stocks().await.map(|list| list.stocks) }
    });

    let render_item = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |stock: StockRecord| {
            let on_pick = on_pick.clone();
            let symbol = stock.symbol.clone();
            html! {
                <button
                    key={stock.symbol.clone()}
                    class="badge badge-outline badge-lg cursor-pointer"
                    title={stock.name.clone()}
                    onclick={Callback::from(move |_| on_pick.emit(symbol.clone()))}
                >
                    {&stock.symbol}
                </button>
            }
        })
    };

    html! {
        <div class="flex flex-col gap-2">
            <div class="flex items-center gap-2 text-sm text-gray-500">
                <span>{"Tracked stocks"}</span>
                <button class="btn btn-ghost btn-xs" title="Reload" onclick={refetch.reform(|_| ())}>
                    <i class="fas fa-sync-alt"></i>
                </button>
            </div>
            <FetchRenderList<StockRecord>
                state={(*fetch_state).clone()}
                render_item={render_item}
                on_retry={Some(refetch)}
                empty_message={Some("No stocks ingested yet. Analyze a symbol to add it.".to_string())}
            />
        </div>
    }
}
