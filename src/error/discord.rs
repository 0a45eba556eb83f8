use thiserror::Error;

/// Errors from the Discord REST API layer.
#[derive(Error, Debug)]
pub enum DiscordError {
    /// Message was deleted or never existed.
    #[error("Discord message {message_id} not found in channel {channel_id}")]
    NotFound {
        channel_id: String,
        message_id: String,
    },
    /// Discord returned a non-2xx status code.
    #[error("Discord API error ({status}): {body}")]
    ApiError { status: u16, body: String },
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("Discord request failed: {0}")]
    Request(#[from] reqwest::Error),
}
