//! Check-in records.
//!
//! A check-in asserts that a user was physically present at a gym. The core
//! only ever creates check-ins; validation by gym staff happens elsewhere and
//! is carried through as an optional timestamp.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GymId, UserId};

/// Stable check-in identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckInId(Uuid);

impl CheckInId {
    /// Generate a new random [`CheckInId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CheckInId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user's presence at a gym.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use gym_checkin::domain::{CheckIn, GymId, UserId};
///
/// let check_in = CheckIn::new(
///     UserId::new("user-01")?,
///     GymId::new("gym-01")?,
///     Utc::now(),
/// );
/// assert!(check_in.validated_at().is_none());
/// # Ok::<(), gym_checkin::domain::IdValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    id: CheckInId,
    user_id: UserId,
    gym_id: GymId,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validated_at: Option<DateTime<Utc>>,
}

impl CheckIn {
    /// Build a fresh, unvalidated check-in with a generated id.
    pub fn new(user_id: UserId, gym_id: GymId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: CheckInId::random(),
            user_id,
            gym_id,
            created_at,
            validated_at: None,
        }
    }

    pub fn id(&self) -> CheckInId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn gym_id(&self) -> &GymId {
        &self.gym_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn validated_at(&self) -> Option<DateTime<Utc>> {
        self.validated_at
    }

    /// Local calendar date the check-in counts against for the daily limit.
    pub fn local_date(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }
}
