use thiserror::Error;

/// Failures of the CLI itself, as opposed to lexical errors in the input.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
