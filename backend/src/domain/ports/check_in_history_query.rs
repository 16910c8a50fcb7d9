//! Driving port for a user's check-in history and totals.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CheckIn, Error, Page, UserId};

/// Request for one page of a user's check-ins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInHistoryRequest {
    pub user_id: UserId,
    #[serde(default)]
    pub page: Page,
}

/// Check-ins ordered newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInHistoryResponse {
    pub check_ins: Vec<CheckIn>,
}

/// Request for a user's aggregate metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetricsRequest {
    pub user_id: UserId,
}

/// Aggregate check-in metrics for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetricsResponse {
    pub check_ins_count: u64,
}

/// Driving port for check-in read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInHistoryQuery: Send + Sync {
    /// One page of the user's check-ins.
    async fn history(&self, request: CheckInHistoryRequest)
    -> Result<CheckInHistoryResponse, Error>;

    /// Totals across the user's whole history.
    async fn metrics(&self, request: UserMetricsRequest) -> Result<UserMetricsResponse, Error>;
}
