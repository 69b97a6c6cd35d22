//! In-memory implementation of UserSource for testing and development

use crate::core::error::RegistryResult;
use crate::core::service::{UserSource, UsersResponse};
use async_trait::async_trait;
use serde_json::Value;

/// Location reported by [`StaticUserSource`] responses
pub const STATIC_SOURCE_URL: &str = "memory://users";

/// Source that always resolves with the same JSON array
#[derive(Debug, Clone, Default)]
pub struct StaticUserSource {
    data: Vec<Value>,
}

impl StaticUserSource {
    pub fn new(data: Vec<Value>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl UserSource for StaticUserSource {
    async fn fetch_all_users(&self) -> RegistryResult<UsersResponse> {
        Ok(UsersResponse::new(STATIC_SOURCE_URL, 200, self.data.clone()))
    }
}
