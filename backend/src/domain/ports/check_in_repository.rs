//! Driven port for check-in persistence and the per-day lookup.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{CheckIn, Page, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by check-in repository adapters.
    pub enum CheckInRepositoryError {
        /// The backing store could not be reached.
        Unavailable { message: String } =>
            "check-in repository unavailable: {message}" as ServiceUnavailable,
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "check-in repository query failed: {message}" as InternalError,
        /// The store's uniqueness constraint rejected a second check-in for
        /// the same user and day.
        DailyLimitConflict { user_id: String, date: NaiveDate } =>
            "user {user_id} already checked in on {date}" as MaxCheckInsExceeded,
    }
}

/// Port for writing check-ins and answering history queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Find the user's check-in on a local calendar date, if any.
    async fn find_by_user_id_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, CheckInRepositoryError>;

    /// Persist a new check-in and return the stored record.
    async fn create(&self, check_in: CheckIn) -> Result<CheckIn, CheckInRepositoryError>;

    /// The user's check-ins, newest first.
    async fn list_by_user_id(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> Result<Vec<CheckIn>, CheckInRepositoryError>;

    /// Total number of check-ins recorded for the user.
    async fn count_by_user_id(&self, user_id: &UserId) -> Result<u64, CheckInRepositoryError>;
}
