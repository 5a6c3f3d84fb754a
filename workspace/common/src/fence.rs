//! Request fencing for views whose requests can resolve out of order.
//!
//! Every submission takes a token from a [`RequestSequence`]; a view only
//! applies the completion carrying the token of its latest submission.

use serde::{Deserialize, Serialize};

/// Identifies one submission. Later submissions compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonically increasing token source
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}
