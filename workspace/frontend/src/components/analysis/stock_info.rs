use common::StockRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stock: StockRecord,
}

#[function_component(StockInfo)]
pub fn stock_info(props: &Props) -> Html {
    let stock = &props.stock;
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Stock Info"}</h3>
                <p class="text-sm"><strong>{"Symbol: "}</strong>{&stock.symbol}</p>
                <p class="text-sm"><strong>{"Name: "}</strong>{&stock.name}</p>
                <p class="text-sm"><strong>{"Sector: "}</strong>{&stock.sector}</p>
            </div>
        </div>
    }
}
