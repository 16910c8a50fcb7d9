//! User identity as seen by the check-in core.
//!
//! Registration and authentication live outside this crate; the core only
//! needs a stable, opaque reference to the user performing an action.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum accepted length for an opaque identifier.
pub const ID_MAX_LEN: usize = 128;

/// Validation errors returned by identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdValidationError {
    Empty,
    SurroundingWhitespace,
    TooLong { max: usize },
}

impl fmt::Display for IdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier must not be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "identifier must not start or end with whitespace")
            }
            Self::TooLong { max } => write!(f, "identifier must be at most {max} characters"),
        }
    }
}

impl std::error::Error for IdValidationError {}

pub(crate) fn validate_opaque_id(id: &str) -> Result<(), IdValidationError> {
    if id.is_empty() {
        return Err(IdValidationError::Empty);
    }
    if id.trim() != id {
        return Err(IdValidationError::SurroundingWhitespace);
    }
    if id.chars().count() > ID_MAX_LEN {
        return Err(IdValidationError::TooLong { max: ID_MAX_LEN });
    }
    Ok(())
}

/// Opaque identifier of the user performing a check-in.
///
/// # Examples
/// ```
/// use gym_checkin::domain::UserId;
///
/// let id = UserId::new("user-01")?;
/// assert_eq!(id.as_ref(), "user-01");
/// assert!(UserId::new(" user-01").is_err());
/// # Ok::<(), gym_checkin::domain::IdValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, IdValidationError> {
        validate_opaque_id(&id)?;
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = IdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
