//! Check-in eligibility service.
//!
//! Implements the [`CheckInCommand`] driving port: the gym must exist, the
//! user must be inside its geofence, and the user must not have checked in
//! anywhere on the current local calendar day.
//!
//! The daily-limit lookup and the insert are separate repository calls, so
//! two concurrent requests for the same user can both pass the lookup.
//! Adapters are expected to enforce the limit durably and report
//! [`CheckInRepositoryError::DailyLimitConflict`], which surfaces with the
//! same [`ErrorCode::MaxCheckInsExceeded`] code as the fast-path check.
//!
//! [`CheckInRepositoryError::DailyLimitConflict`]: crate::domain::ports::CheckInRepositoryError::DailyLimitConflict
//! [`ErrorCode::MaxCheckInsExceeded`]: crate::domain::ErrorCode::MaxCheckInsExceeded

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{
    CheckInCommand, CheckInRepository, CheckInRequest, CheckInResponse, GymRepository,
};
use crate::domain::{CheckIn, Error, distance_in_km};

/// Maximum distance between user and gym for a valid check-in (100 m).
pub const MAX_DISTANCE_KM: f64 = 0.1;

/// Domain service implementing the check-in command.
#[derive(Clone)]
pub struct CheckInService<G, C> {
    gym_repo: Arc<G>,
    check_in_repo: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<G, C> CheckInService<G, C> {
    /// Create a new service.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use gym_checkin::domain::CheckInService;
    /// use gym_checkin::outbound::memory::{InMemoryCheckInRepository, InMemoryGymRepository};
    ///
    /// let service = CheckInService::new(
    ///     Arc::new(InMemoryGymRepository::default()),
    ///     Arc::new(InMemoryCheckInRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(gym_repo: Arc<G>, check_in_repo: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            gym_repo,
            check_in_repo,
            clock,
        }
    }
}

#[async_trait]
impl<G, C> CheckInCommand for CheckInService<G, C>
where
    G: GymRepository,
    C: CheckInRepository,
{
    async fn check_in(&self, request: CheckInRequest) -> Result<CheckInResponse, Error> {
        let CheckInRequest {
            user_id,
            gym_id,
            user_location,
        } = request;

        let gym = self
            .gym_repo
            .find_by_id(&gym_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("gym {gym_id} not found")))?;

        let distance_km = distance_in_km(user_location, gym.location());
        if distance_km > MAX_DISTANCE_KM {
            return Err(Error::max_distance_exceeded(format!(
                "user is {distance_km:.3} km from gym {gym_id}; check-ins require {MAX_DISTANCE_KM} km or less"
            ))
            .with_details(json!({
                "distanceKm": distance_km,
                "maxDistanceKm": MAX_DISTANCE_KM,
            })));
        }

        let now = self.clock.utc();
        let today = now.with_timezone(&Local).date_naive();
        if let Some(existing) = self
            .check_in_repo
            .find_by_user_id_on_date(&user_id, today)
            .await?
        {
            return Err(Error::max_check_ins_exceeded(format!(
                "user {user_id} already checked in on {today}"
            ))
            .with_details(json!({
                "checkInId": existing.id().to_string(),
                "gymId": existing.gym_id().as_ref(),
            })));
        }

        let check_in = self
            .check_in_repo
            .create(CheckIn::new(user_id, gym_id, now))
            .await?;

        Ok(CheckInResponse { check_in })
    }
}

#[cfg(test)]
#[path = "check_in_service_tests.rs"]
mod tests;
