//! Service trait for remote user sources

use crate::core::error::{RegistryResult, RemoteError};
use crate::core::user::User;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of fetching the remote users collection.
///
/// `data` holds the JSON array exactly as the source returned it. Remote
/// records are "user-like" and may not match [`User`]'s shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    /// Location the collection was fetched from
    pub url: String,

    /// HTTP status of the response
    pub status: u16,

    /// Response body
    pub data: Vec<Value>,
}

impl UsersResponse {
    pub fn new(url: impl Into<String>, status: u16, data: Vec<Value>) -> Self {
        Self {
            url: url.into(),
            status,
            data,
        }
    }

    /// Decode every element as a [`User`]
    pub fn into_users(self) -> RegistryResult<Vec<User>> {
        let url = self.url;
        self.data
            .into_iter()
            .map(serde_json::from_value::<User>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                RemoteError::Decode {
                    url,
                    message: e.to_string(),
                }
                .into()
            })
    }
}

/// A source of user records.
///
/// Implementations resolve once with a snapshot of the collection. There is
/// no retry, timeout, or cancellation at this level.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the whole users collection
    async fn fetch_all_users(&self) -> RegistryResult<UsersResponse>;
}
