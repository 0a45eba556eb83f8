//! HTTP clients for the external services the engine depends on.
//!
//! Each client sits behind a trait ([`wom::TrackingService`], [`discord::MessageGateway`]) so
//! services can be exercised against fakes or mock servers.

pub mod discord;
pub mod wom;

use std::time::Duration;

/// Build the shared `reqwest` client with the configured user agent and request timeout.
pub fn build_http_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}
