//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters.
//! Driving ports (`*Command`, `*Query`) are implemented by domain services
//! and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod check_in_command;
mod check_in_history_query;
mod check_in_repository;
mod gym_command;
mod gym_repository;
mod gym_search_query;
mod nearby_gyms_query;

pub use check_in_command::{CheckInCommand, CheckInRequest, CheckInResponse};
#[cfg(test)]
pub use check_in_command::MockCheckInCommand;
pub use check_in_history_query::{
    CheckInHistoryQuery, CheckInHistoryRequest, CheckInHistoryResponse, UserMetricsRequest,
    UserMetricsResponse,
};
#[cfg(test)]
pub use check_in_history_query::MockCheckInHistoryQuery;
#[cfg(test)]
pub use check_in_repository::MockCheckInRepository;
pub use check_in_repository::{CheckInRepository, CheckInRepositoryError};
#[cfg(test)]
pub use gym_command::MockGymCommand;
pub use gym_command::{CreateGymRequest, CreateGymResponse, GymCommand};
#[cfg(test)]
pub use gym_repository::MockGymRepository;
pub use gym_repository::{GymRepository, GymRepositoryError};
#[cfg(test)]
pub use gym_search_query::MockGymSearchQuery;
pub use gym_search_query::{GymSearchQuery, SearchGymsRequest, SearchGymsResponse};
#[cfg(test)]
pub use nearby_gyms_query::MockNearbyGymsQuery;
pub use nearby_gyms_query::{FetchNearbyGymsRequest, FetchNearbyGymsResponse, NearbyGymsQuery};
