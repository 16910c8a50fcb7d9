//! Driven port for gym lookup, geographic search, and registration.

use async_trait::async_trait;

use crate::domain::{Coordinate, Gym, GymId, Page};

use super::define_port_error;

define_port_error! {
    /// Errors raised by gym repository adapters.
    pub enum GymRepositoryError {
        /// The backing store could not be reached.
        Unavailable { message: String } =>
            "gym repository unavailable: {message}" as ServiceUnavailable,
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "gym repository query failed: {message}" as InternalError,
        /// A gym with the same identifier already exists.
        DuplicateId { id: String } =>
            "gym {id} already exists" as InvalidRequest,
    }
}

/// Port for reading and registering gyms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GymRepository: Send + Sync {
    /// Find a gym by id.
    async fn find_by_id(&self, id: &GymId) -> Result<Option<Gym>, GymRepositoryError>;

    /// Coarse geographic pre-filter.
    ///
    /// Adapters may return gyms further than `radius_km` from `centre` but
    /// must return every gym within it.
    async fn search_by_coordinate(
        &self,
        centre: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Gym>, GymRepositoryError>;

    /// Gyms whose title contains `query` case-insensitively, ordered by
    /// title then id.
    async fn search_by_title(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<Gym>, GymRepositoryError>;

    /// Persist a newly registered gym.
    async fn create(&self, gym: &Gym) -> Result<(), GymRepositoryError>;
}
