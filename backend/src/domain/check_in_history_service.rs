//! Read-side queries over a user's check-ins.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{
    CheckInHistoryQuery, CheckInHistoryRequest, CheckInHistoryResponse, CheckInRepository,
    UserMetricsRequest, UserMetricsResponse,
};

/// Domain service implementing check-in history and metrics.
#[derive(Clone)]
pub struct CheckInHistoryService<C> {
    check_in_repo: Arc<C>,
}

impl<C> CheckInHistoryService<C> {
    pub fn new(check_in_repo: Arc<C>) -> Self {
        Self { check_in_repo }
    }
}

#[async_trait]
impl<C> CheckInHistoryQuery for CheckInHistoryService<C>
where
    C: CheckInRepository,
{
    async fn history(
        &self,
        request: CheckInHistoryRequest,
    ) -> Result<CheckInHistoryResponse, Error> {
        let check_ins = self
            .check_in_repo
            .list_by_user_id(&request.user_id, request.page)
            .await?;
        Ok(CheckInHistoryResponse { check_ins })
    }

    async fn metrics(&self, request: UserMetricsRequest) -> Result<UserMetricsResponse, Error> {
        let check_ins_count = self.check_in_repo.count_by_user_id(&request.user_id).await?;
        Ok(UserMetricsResponse { check_ins_count })
    }
}
