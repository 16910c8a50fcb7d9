//! Driving port for gym registration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Error, Gym};

/// Request to register a gym.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGymRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: Coordinate,
}

/// Response carrying the registered gym and its assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGymResponse {
    pub gym: Gym,
}

/// Driving port for gym write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GymCommand: Send + Sync {
    async fn create_gym(&self, request: CreateGymRequest) -> Result<CreateGymResponse, Error>;
}
