//! Error types for the Varietyz competition engine.
//!
//! Domain errors (configuration, competition rules, Wise Old Man, Discord) are defined in their
//! own submodules and aggregated into [`Error`] so that services can propagate any of them with
//! the `?` operator. Classification helpers for retry decisions live in [`retry`].

pub mod competition;
pub mod config;
pub mod discord;
pub mod retry;
pub mod wom;

use thiserror::Error;

use crate::error::{
    competition::CompetitionError, config::ConfigError, discord::DiscordError, wom::WomError,
};

/// Main error type for the competition engine.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Competition rule errors (validation, conflicts, missing records)
/// - Wise Old Man and Discord API errors
/// - External library errors (database, scheduler)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Competition rule violation (unknown metric, duplicate vote, missing competition).
    #[error(transparent)]
    CompetitionError(#[from] CompetitionError),
    /// Wise Old Man API error.
    #[error(transparent)]
    WomError(#[from] WomError),
    /// Discord API error.
    #[error(transparent)]
    DiscordError(#[from] DiscordError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the engine's code.
    #[error("Internal error in the competition engine, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client construction error.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl Error {
    /// Whether the error means the referenced record or message does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::CompetitionError(err) => err.is_not_found(),
            Self::WomError(WomError::NotFound(_)) => true,
            Self::DiscordError(DiscordError::NotFound { .. }) => true,
            Self::DbErr(sea_orm::DbErr::RecordNotFound(_)) => true,
            _ => false,
        }
    }

    /// Whether retrying the same operation later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self.to_retry_strategy(), retry::ErrorRetryStrategy::Retry)
    }
}
