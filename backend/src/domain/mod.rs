//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define strongly typed entities for gyms and check-ins, the
//! geographic rules that govern them, and the services behind each driving
//! port. Types are immutable once validated; serde contracts are documented
//! on each type.
//!
//! Public surface:
//! - DomainError (also exported as `Error`): error payload with a stable code.
//! - Coordinate, GeoBox, distance_in_km: geographic primitives.
//! - Gym, CheckIn, UserId: aggregates and identifiers.
//! - CheckInService, NearbyGymsService, GymService, CheckInHistoryService:
//!   implementations of the driving ports in [`ports`].

pub mod check_in;
pub mod check_in_history_service;
pub mod check_in_service;
pub mod error;
pub mod geo;
pub mod gym;
pub mod gym_service;
pub mod nearby_gyms_service;
pub mod page;
pub mod ports;
pub mod user;

pub use self::check_in::{CheckIn, CheckInId};
pub use self::check_in_history_service::CheckInHistoryService;
pub use self::check_in_service::{CheckInService, MAX_DISTANCE_KM};
pub use self::error::{DomainError, DomainErrorValidationError, Error, ErrorCode};
pub use self::geo::{Coordinate, EARTH_RADIUS_KM, GeoBox, GeoValidationError, distance_in_km};
pub use self::gym::{GYM_TITLE_MAX, Gym, GymDraft, GymId, GymValidationError};
pub use self::gym_service::GymService;
pub use self::nearby_gyms_service::{NearbyGymsService, SEARCH_RADIUS_KM};
pub use self::page::{PAGE_SIZE, Page, PageValidationError};
pub use self::user::{ID_MAX_LEN, IdValidationError, UserId};
