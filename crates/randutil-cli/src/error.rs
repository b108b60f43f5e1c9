//! CLI error types.

use randutil::RandomError;
use thiserror::Error;

/// Start-up and runtime errors for the sampler.
#[derive(Debug, Error)]
pub enum CliError {
    /// An environment variable is set to an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// A draw was rejected.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// A sample could not be encoded as JSON.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
