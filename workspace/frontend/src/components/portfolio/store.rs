use std::rc::Rc;

use common::{ApiConfig, ApiError, Completion, PortfolioResult, PortfolioState, RequestToken, Symbol};
use yew::prelude::*;

pub enum PortfolioAction {
    SetInput(String),
    AddSymbol,
    RemoveSymbol(Symbol),
    Begin(RequestToken, ApiConfig),
    Complete(RequestToken, Result<PortfolioResult, ApiError>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioStore {
    pub state: PortfolioState,
}

impl Reducible for PortfolioStore {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        match action {
            PortfolioAction::SetInput(raw) => state.set_input(&raw),
            PortfolioAction::AddSymbol => {
                if !state.add_symbol() {
                    return self;
                }
            }
            PortfolioAction::RemoveSymbol(symbol) => {
                if !state.remove_symbol(&symbol) {
                    return self;
                }
                log::debug!("Removed {} from portfolio", symbol);
            }
            PortfolioAction::Begin(token, config) => {
                // A rejected begin may still have set the validation error
                state.begin(token, &config);
            }
            PortfolioAction::Complete(token, result) => {
                if state.complete(token, result) == Completion::Stale {
                    log::debug!("Ignoring superseded optimization {}", token);
                    return self;
                }
            }
        }
        Rc::new(Self { state })
    }
}
