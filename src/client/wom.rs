//! REST client for the Wise Old Man API (v2).

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    error::wom::WomError,
    model::wom::{CompetitionDetails, CreateCompetitionRequest, CreateCompetitionResponse},
};

/// Progress-tracking service that owns competitions and their standings.
#[async_trait]
pub trait TrackingService: Send + Sync {
    /// Register a new competition, returning its id and verification secret.
    async fn create_competition(
        &self,
        request: &CreateCompetitionRequest,
    ) -> Result<CreateCompetitionResponse, WomError>;

    /// Fetch a competition with its participants' progress.
    async fn get_competition_details(&self, id: i64) -> Result<CompetitionDetails, WomError>;
}

/// HTTP client for Wise Old Man.
pub struct WomClient {
    client: reqwest::Client,
    api_url: String,
}

impl WomClient {
    /// * `api_url` - Base URL without trailing slash, e.g. `https://api.wiseoldman.net/v2`.
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, WomError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WomError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TrackingService for WomClient {
    async fn create_competition(
        &self,
        request: &CreateCompetitionRequest,
    ) -> Result<CreateCompetitionResponse, WomError> {
        let response = self
            .client
            .post(format!("{}/competitions", self.api_url))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn get_competition_details(&self, id: i64) -> Result<CompetitionDetails, WomError> {
        let response = self
            .client
            .get(format!("{}/competitions/{}", self.api_url, id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(WomError::NotFound(id));
        }

        Self::parse_response(response).await
    }
}
