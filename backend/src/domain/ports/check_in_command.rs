//! Driving port for checking a user in to a gym.
//!
//! Inbound adapters hand over an already shaped request; the command decides
//! eligibility (geofence and daily limit) and records the check-in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CheckIn, Coordinate, Error, GymId, UserId};

/// Request to check a user in to a gym.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub user_id: UserId,
    pub gym_id: GymId,
    /// Position reported by the user's device.
    pub user_location: Coordinate,
}

/// Response carrying the newly recorded check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub check_in: CheckIn,
}

/// Driving port for check-in creation.
///
/// Business failures surface as [`Error`] values carrying
/// [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound),
/// [`ErrorCode::MaxDistanceExceeded`](crate::domain::ErrorCode::MaxDistanceExceeded)
/// or [`ErrorCode::MaxCheckInsExceeded`](crate::domain::ErrorCode::MaxCheckInsExceeded).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInCommand: Send + Sync {
    async fn check_in(&self, request: CheckInRequest) -> Result<CheckInResponse, Error>;
}
