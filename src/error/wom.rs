use thiserror::Error;

/// Errors from the Wise Old Man REST API layer.
#[derive(Error, Debug)]
pub enum WomError {
    /// Wise Old Man has no competition with this id.
    #[error("Wise Old Man competition {0} not found")]
    NotFound(i64),
    /// Wise Old Man returned a non-2xx status code.
    #[error("Wise Old Man API error ({status}): {body}")]
    ApiError { status: u16, body: String },
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("Wise Old Man request failed: {0}")]
    Request(#[from] reqwest::Error),
}
