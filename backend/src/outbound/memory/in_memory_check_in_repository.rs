//! In-memory check-in repository.
//!
//! Mirrors the unique `(user_id, local date)` constraint a relational store
//! would carry: the conflict check and the insert happen under one lock.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::domain::ports::{CheckInRepository, CheckInRepositoryError};
use crate::domain::{CheckIn, Page, UserId};

/// Append-only check-in store.
#[derive(Debug, Default)]
pub struct InMemoryCheckInRepository {
    check_ins: Mutex<Vec<CheckIn>>,
}

impl InMemoryCheckInRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<CheckIn>>, CheckInRepositoryError> {
        self.check_ins
            .lock()
            .map_err(|_| CheckInRepositoryError::unavailable("check-in store lock poisoned"))
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn find_by_user_id_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, CheckInRepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .find(|check_in| check_in.user_id() == user_id && check_in.local_date() == date)
            .cloned())
    }

    async fn create(&self, check_in: CheckIn) -> Result<CheckIn, CheckInRepositoryError> {
        let mut check_ins = self.lock()?;
        let date = check_in.local_date();
        let conflict = check_ins
            .iter()
            .any(|stored| stored.user_id() == check_in.user_id() && stored.local_date() == date);
        if conflict {
            return Err(CheckInRepositoryError::daily_limit_conflict(
                check_in.user_id().to_string(),
                date,
            ));
        }

        debug!(
            check_in_id = %check_in.id(),
            user_id = %check_in.user_id(),
            gym_id = %check_in.gym_id(),
            "check-in stored"
        );
        check_ins.push(check_in.clone());
        Ok(check_in)
    }

    async fn list_by_user_id(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> Result<Vec<CheckIn>, CheckInRepositoryError> {
        let mut history: Vec<CheckIn> = self
            .lock()?
            .iter()
            .filter(|check_in| check_in.user_id() == user_id)
            .cloned()
            .collect();
        history.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| right.id().cmp(&left.id()))
        });
        Ok(page.slice(history))
    }

    async fn count_by_user_id(&self, user_id: &UserId) -> Result<u64, CheckInRepositoryError> {
        let count = self
            .lock()?
            .iter()
            .filter(|check_in| check_in.user_id() == user_id)
            .count();
        u64::try_from(count).map_err(|err| CheckInRepositoryError::query(err.to_string()))
    }
}
