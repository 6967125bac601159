use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Talk, error::ApiError, protocol::TALKS_ROUTE};
use tracing::debug;
use url::Url;

use crate::error::ClientError;

/// Where the controller gets its talks from. One call, full list, no retry.
#[async_trait]
pub trait TalkProvider: Send + Sync {
    async fn fetch_talks(&self) -> Result<Vec<Talk>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct TalksClient {
    http: Client,
    base_url: Url,
}

impl TalksClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(server_url)?,
        })
    }

    pub fn talks_url(&self) -> Result<Url, ClientError> {
        Ok(self.base_url.join(TALKS_ROUTE)?)
    }
}

#[async_trait]
impl TalkProvider for TalksClient {
    async fn fetch_talks(&self) -> Result<Vec<Talk>, ClientError> {
        let url = self.talks_url()?;
        debug!(%url, "fetching talks");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiError>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Vec<Talk>>().await?)
    }
}

#[cfg(test)]
#[path = "tests/provider_tests.rs"]
mod tests;
