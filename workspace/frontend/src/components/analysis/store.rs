use std::rc::Rc;

use common::{AnalysisState, ApiError, Completion, PredictResponse, RequestToken};
use yew::prelude::*;

pub enum AnalysisAction {
    SetSymbol(String),
    Begin(RequestToken),
    Complete(RequestToken, Result<PredictResponse, ApiError>),
}

/// Reducer wrapper around the page state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisStore {
    pub state: AnalysisState,
}

impl Reducible for AnalysisStore {
    type Action = AnalysisAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        match action {
            AnalysisAction::SetSymbol(raw) => state.set_symbol(&raw),
            AnalysisAction::Begin(token) => {
                if state.begin(token).is_none() {
                    return self;
                }
                log::debug!("Analysis {} started for {}", token, state.symbol());
            }
            AnalysisAction::Complete(token, result) => {
                if state.complete(token, result) == Completion::Stale {
                    log::debug!("Ignoring superseded analysis {}", token);
                    return self;
                }
            }
        }
        Rc::new(Self { state })
    }
}
