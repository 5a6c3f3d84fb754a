use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// `(symbol, percent)` rows, already sorted
    pub rows: Vec<(String, f64)>,
}

#[function_component(AllocationTable)]
pub fn allocation_table(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Optimal Allocation"}</h3>
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>{"Stock"}</th>
                            <th class="text-right">{"Allocation %"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.rows.iter().map(|(symbol, percent)| html! {
                            <tr key={symbol.clone()}>
                                <td>{symbol}</td>
                                <td class="text-right">{format!("{}%", percent)}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
