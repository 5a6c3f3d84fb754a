use yew::prelude::*;

use super::error::ErrorDisplay;
use super::loading::Loading;
use crate::hooks::FetchState;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<String>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.loading_text == other.loading_text
    }
}

/// Component that handles rendering based on FetchState
/// - Loading: shows loading spinner
/// - Error: shows error display with optional retry
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading text={props.loading_text.clone()} /> },
        FetchState::Error(err) => {
            html! {
                <ErrorDisplay
                    message={err.clone()}
                    on_retry={props.on_retry.clone()}
                />
            }
        }
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}

/// Helper for rendering lists with empty state handling
#[derive(Properties)]
pub struct FetchRenderListProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<Vec<T>>,
    pub render_item: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub empty_message: Option<String>,
    #[prop_or_default]
    pub container_class: Option<String>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderListProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.empty_message == other.empty_message
            && self.container_class == other.container_class
    }
}

#[function_component(FetchRenderList)]
pub fn fetch_render_list<T>(props: &FetchRenderListProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let render = {
        let render_item = props.render_item.clone();
        let empty_message = props.empty_message.clone();
        let container_class = props.container_class.clone();

        Callback::from(move |items: Vec<T>| {
            if items.is_empty() {
                html! {
                    <div class="alert alert-info">
                        <i class="fas fa-info-circle"></i>
                        <span>{empty_message.clone().unwrap_or_else(|| "No items found.".to_string())}</span>
                    </div>
                }
            } else {
                html! {
                    <div class={container_class.clone().unwrap_or_else(|| "flex flex-wrap gap-2".to_string())}>
                        { for items.iter().map(|item| render_item.emit(item.clone())) }
                    </div>
                }
            }
        })
    };

    html! {
        <FetchRender<Vec<T>>
            state={props.state.clone()}
            render={render}
            on_retry={props.on_retry.clone()}
        />
    }
}
