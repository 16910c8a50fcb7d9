//! Gym aggregate.
//!
//! Gyms are created by registration and read-only for check-in purposes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geo::{Coordinate, GeoValidationError};
use super::user::{IdValidationError, validate_opaque_id};

/// Maximum allowed length for a gym title.
pub const GYM_TITLE_MAX: usize = 120;

/// Validation errors returned when building a [`Gym`].
#[derive(Debug, Clone, PartialEq)]
pub enum GymValidationError {
    InvalidId(IdValidationError),
    EmptyTitle,
    TitleTooLong { max: usize },
    InvalidLocation(GeoValidationError),
}

impl fmt::Display for GymValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(err) => write!(f, "invalid gym id: {err}"),
            Self::EmptyTitle => write!(f, "gym title must not be empty"),
            Self::TitleTooLong { max } => {
                write!(f, "gym title must be at most {max} characters")
            }
            Self::InvalidLocation(err) => write!(f, "invalid gym location: {err}"),
        }
    }
}

impl std::error::Error for GymValidationError {}

impl From<IdValidationError> for GymValidationError {
    fn from(value: IdValidationError) -> Self {
        Self::InvalidId(value)
    }
}

impl From<GeoValidationError> for GymValidationError {
    fn from(value: GeoValidationError) -> Self {
        Self::InvalidLocation(value)
    }
}

/// Opaque gym identifier.
///
/// # Examples
/// ```
/// use gym_checkin::domain::GymId;
///
/// let id = GymId::new("gym-01")?;
/// assert_eq!(id.to_string(), "gym-01");
/// # Ok::<(), gym_checkin::domain::IdValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GymId(String);

impl GymId {
    /// Validate and construct a [`GymId`].
    pub fn new(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
        let id = id.as_ref();
        validate_opaque_id(id)?;
        Ok(Self(id.to_owned()))
    }

    /// Generate a new random [`GymId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for GymId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for GymId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<GymId> for String {
    fn from(value: GymId) -> Self {
        value.0
    }
}

impl TryFrom<String> for GymId {
    type Error = IdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_opaque_id(&value)?;
        Ok(Self(value))
    }
}

/// Unvalidated gym fields used to construct a [`Gym`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymDraft {
    pub id: GymId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: Coordinate,
}

/// A registered gym.
///
/// ## Invariants
/// - `title` is non-empty once trimmed and at most [`GYM_TITLE_MAX`]
///   characters.
/// - `description` and `phone` are either absent or non-blank.
///
/// # Examples
/// ```
/// use gym_checkin::domain::{Coordinate, Gym, GymDraft, GymId};
///
/// let gym = Gym::new(GymDraft {
///     id: GymId::new("gym-01")?,
///     title: "JavaScript Gym".to_owned(),
///     description: Some("  ".to_owned()),
///     phone: None,
///     location: Coordinate::new(-23.3045386, -51.1689972)?,
/// })?;
/// assert_eq!(gym.title(), "JavaScript Gym");
/// assert!(gym.description().is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GymDraft", into = "GymDraft")]
pub struct Gym {
    id: GymId,
    title: String,
    description: Option<String>,
    phone: Option<String>,
    location: Coordinate,
}

fn normalise_optional(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    })
}

impl Gym {
    /// Validate a draft and build the gym.
    pub fn new(draft: GymDraft) -> Result<Self, GymValidationError> {
        let GymDraft {
            id,
            title,
            description,
            phone,
            location,
        } = draft;

        let title = title.trim();
        if title.is_empty() {
            return Err(GymValidationError::EmptyTitle);
        }
        if title.chars().count() > GYM_TITLE_MAX {
            return Err(GymValidationError::TitleTooLong { max: GYM_TITLE_MAX });
        }

        Ok(Self {
            id,
            title: title.to_owned(),
            description: normalise_optional(description),
            phone: normalise_optional(phone),
            location,
        })
    }

    pub fn id(&self) -> &GymId {
        &self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Registered position of the gym.
    pub fn location(&self) -> Coordinate {
        self.location
    }
}

impl TryFrom<GymDraft> for Gym {
    type Error = GymValidationError;

    fn try_from(value: GymDraft) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Gym> for GymDraft {
    fn from(value: Gym) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            phone: value.phone,
            location: value.location,
        }
    }
}
