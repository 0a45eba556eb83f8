//! REST client for the Discord API (v10), limited to channel messages.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    error::discord::DiscordError,
    model::discord::{Message, MessageContent},
};

/// Messaging platform the engine posts announcements and leaderboards to.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    async fn post_message(
        &self,
        channel_id: &str,
        content: &MessageContent,
    ) -> Result<Message, DiscordError>;

    async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        content: &MessageContent,
    ) -> Result<Message, DiscordError>;

    /// `Ok(None)` when the message no longer exists.
    async fn fetch_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Option<Message>, DiscordError>;
}

/// HTTP client for Discord authenticated with a bot token.
pub struct DiscordClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl DiscordClient {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.token)
    }

    async fn parse_message(
        response: reqwest::Response,
        channel_id: &str,
        message_id: Option<&str>,
    ) -> Result<Message, DiscordError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(message_id) = message_id {
                return Err(DiscordError::NotFound {
                    channel_id: channel_id.to_string(),
                    message_id: message_id.to_string(),
                });
            }
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DiscordError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Message>().await?)
    }
}

#[async_trait]
impl MessageGateway for DiscordClient {
    async fn post_message(
        &self,
        channel_id: &str,
        content: &MessageContent,
    ) -> Result<Message, DiscordError> {
        let response = self
            .client
            .post(format!("{}/channels/{}/messages", self.api_url, channel_id))
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .json(content)
            .send()
            .await?;

        Self::parse_message(response, channel_id, None).await
    }

    async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        content: &MessageContent,
    ) -> Result<Message, DiscordError> {
        let response = self
            .client
            .patch(format!(
                "{}/channels/{}/messages/{}",
                self.api_url, channel_id, message_id
            ))
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .json(content)
            .send()
            .await?;

        Self::parse_message(response, channel_id, Some(message_id)).await
    }

    async fn fetch_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Option<Message>, DiscordError> {
        let response = self
            .client
            .get(format!(
                "{}/channels/{}/messages/{}",
                self.api_url, channel_id, message_id
            ))
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .send()
            .await?;

        match Self::parse_message(response, channel_id, Some(message_id)).await {
            Ok(message) => Ok(Some(message)),
            Err(DiscordError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
