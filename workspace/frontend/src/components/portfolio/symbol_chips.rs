use common::{Symbol, SymbolSet};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbols: SymbolSet,
    pub on_remove: Callback<Symbol>,
}

#[function_component(SymbolChips)]
pub fn symbol_chips(props: &Props) -> Html {
    html! {
        <div class="flex flex-wrap gap-2 my-4">
            {for props.symbols.iter().map(|symbol| {
                let on_remove = props.on_remove.clone();
                let removed = symbol.clone();
                html! {
                    <div key={symbol.to_string()} class="badge badge-primary badge-lg gap-1">
                        {symbol.to_string()}
                        <button
                            class="btn btn-ghost btn-xs btn-circle"
                            aria-label={format!("Remove {}", symbol)}
                            onclick={Callback::from(move |_| on_remove.emit(removed.clone()))}
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
