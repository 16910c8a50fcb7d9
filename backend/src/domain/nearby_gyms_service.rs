//! Proximity-based gym search.
//!
//! The repository pre-filter only narrows the candidate set; this service
//! applies the authoritative [`SEARCH_RADIUS_KM`] cutoff with
//! [`distance_in_km`].

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    FetchNearbyGymsRequest, FetchNearbyGymsResponse, GymRepository, NearbyGymsQuery,
};
use crate::domain::{Error, distance_in_km};

/// Radius of the nearby-gyms search.
pub const SEARCH_RADIUS_KM: f64 = 10.0;

/// Domain service implementing the nearby gyms query.
#[derive(Clone)]
pub struct NearbyGymsService<G> {
    gym_repo: Arc<G>,
}

impl<G> NearbyGymsService<G> {
    /// Create a new service backed by the gym repository.
    pub fn new(gym_repo: Arc<G>) -> Self {
        Self { gym_repo }
    }
}

#[async_trait]
impl<G> NearbyGymsQuery for NearbyGymsService<G>
where
    G: GymRepository,
{
    async fn fetch_nearby(
        &self,
        request: FetchNearbyGymsRequest,
    ) -> Result<FetchNearbyGymsResponse, Error> {
        let origin = request.user_location;
        let candidates = self
            .gym_repo
            .search_by_coordinate(origin, SEARCH_RADIUS_KM)
            .await?;

        let mut seen = HashSet::new();
        let mut nearby = candidates
            .into_iter()
            .map(|gym| (distance_in_km(origin, gym.location()), gym))
            .filter(|(distance_km, gym)| {
                *distance_km <= SEARCH_RADIUS_KM && seen.insert(gym.id().clone())
            })
            .collect::<Vec<_>>();

        // Closest first; ties broken by id so repeated calls agree.
        nearby.sort_by(|(left_km, left), (right_km, right)| {
            left_km
                .total_cmp(right_km)
                .then_with(|| left.id().cmp(right.id()))
        });

        Ok(FetchNearbyGymsResponse {
            gyms: nearby.into_iter().map(|(_, gym)| gym).collect(),
        })
    }
}
