use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

pub const DEFAULT_WOM_API_URL: &str = "https://api.wiseoldman.net/v2";
pub const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
pub const DEFAULT_USER_AGENT: &str = "varietyz-competitions";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,
    pub sotw_channel_id: String,
    pub botw_channel_id: String,
    pub hall_of_fame_channel_id: String,
    pub wom_group_id: i64,
    pub wom_group_secret: String,
    pub wom_api_url: String,
    pub discord_api_url: String,
    pub user_agent: String,
    pub http_timeout_secs: u64,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            sotw_channel_id: required("SOTW_CHANNEL_ID")?,
            botw_channel_id: required("BOTW_CHANNEL_ID")?,
            hall_of_fame_channel_id: required("HALL_OF_FAME_CHANNEL_ID")?,
            wom_group_id: parse("WOM_GROUP_ID", &required("WOM_GROUP_ID")?)?,
            wom_group_secret: required("WOM_GROUP_SECRET")?,
            wom_api_url: optional("WOM_API_URL")
                .unwrap_or_else(|| DEFAULT_WOM_API_URL.to_string()),
            discord_api_url: optional("DISCORD_API_URL")
                .unwrap_or_else(|| DEFAULT_DISCORD_API_URL.to_string()),
            user_agent: optional("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            http_timeout_secs: match optional("HTTP_TIMEOUT_SECS") {
                Some(value) => parse("HTTP_TIMEOUT_SECS", &value)?,
                None => DEFAULT_HTTP_TIMEOUT_SECS,
            },
            log_level: match optional("LOG_LEVEL") {
                Some(value) => parse("LOG_LEVEL", &value)?,
                None => Level::INFO,
            },
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Unset and blank variables are both treated as absent.
fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })
}
