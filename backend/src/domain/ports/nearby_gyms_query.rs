//! Driving port for proximity-based gym discovery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Error, Gym};

/// Request for gyms near the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNearbyGymsRequest {
    pub user_location: Coordinate,
}

/// Gyms within the search radius, each listed once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNearbyGymsResponse {
    pub gyms: Vec<Gym>,
}

/// Driving port for nearby gym searches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NearbyGymsQuery: Send + Sync {
    /// Gyms within the search radius of the user's position.
    async fn fetch_nearby(
        &self,
        request: FetchNearbyGymsRequest,
    ) -> Result<FetchNearbyGymsResponse, Error>;
}
