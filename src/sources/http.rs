//! HTTP implementation of UserSource

use crate::config::RemoteConfig;
use crate::core::error::{RegistryResult, RemoteError};
use crate::core::service::{UserSource, UsersResponse};
use async_trait::async_trait;
use serde_json::Value;

/// Fetches users with a GET on the configured endpoint.
///
/// The `reqwest::Client` is supplied by the caller so that proxies, TLS and
/// timeouts stay under their control.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl HttpUserSource {
    /// Create a source using the given client and endpoint
    pub fn new(client: reqwest::Client, config: RemoteConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_all_users(&self) -> RegistryResult<UsersResponse> {
        let url = self.config.users_url();
        tracing::debug!(url = %url, "Fetching users");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Users request failed");
            return Err(RemoteError::Status {
                url,
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(|e| RemoteError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let data: Vec<Value> = serde_json::from_slice(&body).map_err(|e| RemoteError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        tracing::info!(url = %url, count = data.len(), "Fetched users");

        Ok(UsersResponse::new(url, status.as_u16(), data))
    }
}
