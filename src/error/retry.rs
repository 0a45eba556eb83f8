use sea_orm::DbErr;

use super::{discord::DiscordError, wom::WomError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Try again on a later pass (server errors, connection issues)
    Retry,
    /// Failed permanently (bad request, rule violation)
    Fail,
}

/// Server errors and rate limiting are worth retrying, other statuses are not.
fn status_retry_strategy(status: u16) -> ErrorRetryStrategy {
    if status >= 500 || status == 429 {
        ErrorRetryStrategy::Retry
    } else {
        ErrorRetryStrategy::Fail
    }
}

fn reqwest_retry_strategy(err: &reqwest::Error) -> ErrorRetryStrategy {
    match err.status() {
        Some(status) => status_retry_strategy(status.as_u16()),
        // Body decoding failures mean the payload shape is wrong, retrying won't change it
        None if err.is_decode() => ErrorRetryStrategy::Fail,
        // Network error, timeout or connection issue
        None => ErrorRetryStrategy::Retry,
    }
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::WomError(WomError::Request(err)) => reqwest_retry_strategy(err),
            Self::WomError(WomError::ApiError { status, .. }) => status_retry_strategy(*status),
            Self::WomError(WomError::NotFound(_)) => ErrorRetryStrategy::Fail,

            Self::DiscordError(DiscordError::Request(err)) => reqwest_retry_strategy(err),
            Self::DiscordError(DiscordError::ApiError { status, .. }) => {
                status_retry_strategy(*status)
            }
            Self::DiscordError(DiscordError::NotFound { .. }) => ErrorRetryStrategy::Fail,

            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                // Query, constraint, conversion and schema errors won't resolve with retry
                _ => ErrorRetryStrategy::Fail,
            },

            Self::HttpClientError(err) => reqwest_retry_strategy(err),

            // Validation, conflict and not-found are surfaced immediately
            Self::CompetitionError(_) => ErrorRetryStrategy::Fail,
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
