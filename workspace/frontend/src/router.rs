use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::analysis::Analysis;
use crate::components::layout::layout::Layout;
use crate::components::portfolio::Portfolio;
use crate::components::settings::Settings;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Analysis,
    #[at("/portfolio")]
    Portfolio,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Analysis => {
            log::trace!("Rendering Analysis page");
            html! { <Layout title="AI-Powered Stock Market Analyzer"><Analysis /></Layout> }
        }
        Route::Portfolio => {
            log::trace!("Rendering Portfolio page");
            html! { <Layout title="Portfolio"><Portfolio /></Layout> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <Layout title="Settings"><Settings /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}
