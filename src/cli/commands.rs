pub mod analyze;
pub mod optimize;
pub mod stocks;

pub use analyze::analyze;
pub use optimize::optimize;
pub use stocks::{fetch, health, predict, prices, stocks};

use thiserror::Error;

/// Why a command produced no result
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    /// Rejected locally, nothing was sent
    #[error("{0}")]
    Invalid(String),

    /// The server or the transport reported a failure
    #[error("{0}")]
    Failed(String),
}
