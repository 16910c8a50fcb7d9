//! Driving port for free-text gym search.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Gym, Page};

/// Request to search gyms by title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGymsRequest {
    pub query: String,
    #[serde(default)]
    pub page: Page,
}

/// One page of matching gyms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGymsResponse {
    pub gyms: Vec<Gym>,
}

/// Driving port for title searches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GymSearchQuery: Send + Sync {
    async fn search(&self, request: SearchGymsRequest) -> Result<SearchGymsResponse, Error>;
}
