//! Gym registration and title search.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CreateGymRequest, CreateGymResponse, GymCommand, GymRepository, GymSearchQuery,
    SearchGymsRequest, SearchGymsResponse,
};
use crate::domain::{Error, Gym, GymDraft, GymId};

/// Domain service implementing gym commands and title search.
#[derive(Clone)]
pub struct GymService<G> {
    gym_repo: Arc<G>,
}

impl<G> GymService<G> {
    /// Create a new service backed by the gym repository.
    pub fn new(gym_repo: Arc<G>) -> Self {
        Self { gym_repo }
    }
}

#[async_trait]
impl<G> GymCommand for GymService<G>
where
    G: GymRepository,
{
    async fn create_gym(&self, request: CreateGymRequest) -> Result<CreateGymResponse, Error> {
        let gym = Gym::new(GymDraft {
            id: GymId::random(),
            title: request.title,
            description: request.description,
            phone: request.phone,
            location: request.location,
        })
        .map_err(|err| Error::invalid_request(err.to_string()))?;

        self.gym_repo.create(&gym).await?;
        Ok(CreateGymResponse { gym })
    }
}

#[async_trait]
impl<G> GymSearchQuery for GymService<G>
where
    G: GymRepository,
{
    async fn search(&self, request: SearchGymsRequest) -> Result<SearchGymsResponse, Error> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(Error::invalid_request("search query must not be empty"));
        }

        let gyms = self.gym_repo.search_by_title(query, request.page).await?;
        Ok(SearchGymsResponse { gyms })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{GymRepositoryError, MockGymRepository};
    use crate::domain::{Coordinate, ErrorCode, Page};

    fn create_request(title: &str) -> CreateGymRequest {
        CreateGymRequest {
            title: title.to_owned(),
            description: Some("   ".to_owned()),
            phone: Some("+55 43 3333-0000".to_owned()),
            location: Coordinate::new(-23.3045386, -51.1689972).expect("valid location"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_gym_assigns_an_id_and_persists() {
        let mut repo = MockGymRepository::new();
        repo.expect_create()
            .withf(|gym| gym.title() == "TypeScript Gym")
            .times(1)
            .returning(|_| Ok(()));

        let service = GymService::new(Arc::new(repo));
        let response = service
            .create_gym(create_request("  TypeScript Gym "))
            .await
            .expect("gym created");

        assert_eq!(response.gym.title(), "TypeScript Gym");
        assert!(response.gym.description().is_none());
        assert_eq!(response.gym.phone(), Some("+55 43 3333-0000"));
        assert!(!response.gym.id().as_ref().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn create_gym_rejects_blank_title() {
        let mut repo = MockGymRepository::new();
        repo.expect_create().times(0);

        let service = GymService::new(Arc::new(repo));
        let error = service
            .create_gym(create_request("   "))
            .await
            .expect_err("blank title");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn create_gym_maps_duplicate_ids() {
        let mut repo = MockGymRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|gym| Err(GymRepositoryError::duplicate_id(gym.id().to_string())));

        let service = GymService::new(Arc::new(repo));
        let error = service
            .create_gym(create_request("TypeScript Gym"))
            .await
            .expect_err("duplicate id");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn search_trims_the_query() {
        let mut repo = MockGymRepository::new();
        repo.expect_search_by_title()
            .withf(|query, page| query == "script" && *page == Page::FIRST)
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = GymService::new(Arc::new(repo));
        let response = service
            .search(SearchGymsRequest {
                query: "  script ".to_owned(),
                page: Page::FIRST,
            })
            .await
            .expect("search succeeds");

        assert!(response.gyms.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn search_rejects_blank_queries(#[case] query: &str) {
        let mut repo = MockGymRepository::new();
        repo.expect_search_by_title().times(0);

        let service = GymService::new(Arc::new(repo));
        let error = service
            .search(SearchGymsRequest {
                query: query.to_owned(),
                page: Page::FIRST,
            })
            .await
            .expect_err("blank query");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }
}
