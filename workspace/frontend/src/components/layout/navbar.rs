use common::StockApi;
use yew::prelude::*;

use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::hooks::{use_api_client, use_settings, FetchState};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let settings = use_settings();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="app-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold">{ &props.title }</h1>
            </div>
            <div class="flex-none px-4">
                <HealthBadge key={settings.api_base_url.clone()} />
            </div>
        </div>
    }
}

/// Server liveness, checked on mount and again whenever the base URL changes.
#[function_component(HealthBadge)]
fn health_badge() -> Html {
    let client = use_api_client();
    let (fetch_state, refetch) = use_fetch_with_refetch(move || {
        let client = client.clone();
        async move { client.health_check().await }
    });

    let (class, label) = match &*fetch_state {
        FetchState::Success(status) if status.is_healthy() => ("badge-success", "API online".to_string()),
        FetchState::Success(status) => ("badge-warning", format!("API {}", status.status)),
        FetchState::Error(_) => ("badge-error", "API offline".to_string()),
        FetchState::Loading | FetchState::NotStarted => ("badge-ghost", "Checking API...".to_string()),
    };

    let title = match &*fetch_state {
        FetchState::Success(status) => status.message.clone().unwrap_or_default(),
        FetchState::Error(err) => err.clone(),
        _ => String::new(),
    };

    html! {
        <button
            class={classes!("badge", "badge-lg", "cursor-pointer", class)}
            title={title}
            disabled={fetch_state.is_loading()}
            onclick={refetch.reform(|_| ())}
        >
            {label}
        </button>
    }
}
