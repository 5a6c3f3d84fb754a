//! Page state machines.
//!
//! Each page owns one state value; nothing is shared between pages. A page
//! goes Idle → Loading → (Succeeded | Failed) and back to Loading on the next
//! submission. Completions are fenced by [`RequestToken`]: only the token of
//! the latest submission is applied.

pub mod analysis;
pub mod portfolio;

use crate::fence::RequestToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading(RequestToken),
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading(_))
    }

    /// Whether `token` belongs to the submission currently in flight
    pub fn awaits(&self, token: RequestToken) -> bool {
        matches!(self, Phase::Loading(pending) if *pending == token)
    }
}

/// What happened to a completion handed to a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A later submission superseded this one; nothing changed
    Stale,
}
