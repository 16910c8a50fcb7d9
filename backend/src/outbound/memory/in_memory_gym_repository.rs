//! In-memory gym repository with a bounding-box pre-filter.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{GymRepository, GymRepositoryError};
use crate::domain::{Coordinate, GeoBox, Gym, GymId, Page};

/// Gym store keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryGymRepository {
    gyms: RwLock<BTreeMap<GymId, Gym>>,
}

impl InMemoryGymRepository {
    /// Build a repository pre-populated with `gyms`.
    ///
    /// # Examples
    /// ```
    /// use gym_checkin::domain::{Coordinate, Gym, GymDraft, GymId};
    /// use gym_checkin::outbound::memory::InMemoryGymRepository;
    ///
    /// let gym = Gym::new(GymDraft {
    ///     id: GymId::new("gym-01")?,
    ///     title: "JavaScript Gym".into(),
    ///     description: None,
    ///     phone: None,
    ///     location: Coordinate::new(-23.3045386, -51.1689972)?,
    /// })?;
    /// let repo = InMemoryGymRepository::with_gyms([gym])?;
    /// assert_eq!(repo.len()?, 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_gyms(gyms: impl IntoIterator<Item = Gym>) -> Result<Self, GymRepositoryError> {
        let repo = Self::default();
        for gym in gyms {
            repo.insert(gym)?;
        }
        Ok(repo)
    }

    /// Insert a gym, rejecting ids that are already present.
    pub fn insert(&self, gym: Gym) -> Result<(), GymRepositoryError> {
        let mut gyms = self.write()?;
        if gyms.contains_key(gym.id()) {
            return Err(GymRepositoryError::duplicate_id(gym.id().to_string()));
        }
        debug!(gym_id = %gym.id(), "gym stored");
        gyms.insert(gym.id().clone(), gym);
        Ok(())
    }

    /// Number of stored gyms.
    pub fn len(&self) -> Result<usize, GymRepositoryError> {
        Ok(self.read()?.len())
    }

    /// Whether the store holds no gyms.
    pub fn is_empty(&self) -> Result<bool, GymRepositoryError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<GymId, Gym>>, GymRepositoryError> {
        self.gyms
            .read()
            .map_err(|_| GymRepositoryError::unavailable("gym store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<GymId, Gym>>, GymRepositoryError> {
        self.gyms
            .write()
            .map_err(|_| GymRepositoryError::unavailable("gym store lock poisoned"))
    }
}

#[async_trait]
impl GymRepository for InMemoryGymRepository {
    async fn find_by_id(&self, id: &GymId) -> Result<Option<Gym>, GymRepositoryError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn search_by_coordinate(
        &self,
        centre: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Gym>, GymRepositoryError> {
        let bounds = GeoBox::around(centre, radius_km);
        let candidates: Vec<Gym> = self
            .read()?
            .values()
            .filter(|gym| bounds.contains(gym.location()))
            .cloned()
            .collect();
        debug!(
            %centre,
            radius_km,
            bbox = ?bounds.as_array(),
            candidates = candidates.len(),
            "gym bounding-box search"
        );
        Ok(candidates)
    }

    async fn search_by_title(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<Gym>, GymRepositoryError> {
        let needle = query.to_lowercase();
        let mut matches: Vec<Gym> = self
            .read()?
            .values()
            .filter(|gym| gym.title().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort_by(|left, right| {
            left.title()
                .cmp(right.title())
                .then_with(|| left.id().cmp(right.id()))
        });
        Ok(page.slice(matches))
    }

    async fn create(&self, gym: &Gym) -> Result<(), GymRepositoryError> {
        self.insert(gym.clone())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{GymDraft, PAGE_SIZE};

    fn gym(id: &str, title: &str, latitude: f64, longitude: f64) -> Gym {
        Gym::new(GymDraft {
            id: GymId::new(id).expect("valid gym id"),
            title: title.to_owned(),
            description: None,
            phone: None,
            location: Coordinate::new(latitude, longitude).expect("valid location"),
        })
        .expect("valid gym")
    }

    #[fixture]
    fn repo() -> InMemoryGymRepository {
        InMemoryGymRepository::with_gyms([
            gym("gym-near", "JavaScript Gym", -23.3045386, -51.1689972),
            gym("gym-far", "TypeScript Gym", -23.4007372, -51.4307919),
        ])
        .expect("seed gyms")
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_returns_stored_gym(repo: InMemoryGymRepository) {
        let id = GymId::new("gym-near").expect("valid gym id");
        let found = repo.find_by_id(&id).await.expect("lookup succeeds");
        assert_eq!(found.map(|gym| gym.title().to_owned()).as_deref(), Some("JavaScript Gym"));

        let missing = GymId::new("gym-missing").expect("valid gym id");
        assert!(repo.find_by_id(&missing).await.expect("lookup succeeds").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn coordinate_search_uses_bounding_box(repo: InMemoryGymRepository) {
        let centre = Coordinate::new(-23.3045386, -51.1689972).expect("valid location");
        let found = repo
            .search_by_coordinate(centre, 10.0)
            .await
            .expect("search succeeds");

        let ids: Vec<&str> = found.iter().map(|gym| gym.id().as_ref()).collect();
        assert_eq!(ids, vec!["gym-near"]);
    }

    #[rstest]
    #[tokio::test]
    async fn title_search_is_case_insensitive(repo: InMemoryGymRepository) {
        let found = repo
            .search_by_title("SCRIPT", Page::FIRST)
            .await
            .expect("search succeeds");

        let titles: Vec<&str> = found.iter().map(Gym::title).collect();
        assert_eq!(titles, vec!["JavaScript Gym", "TypeScript Gym"]);
    }

    #[rstest]
    #[tokio::test]
    async fn title_search_pages_by_twenty() {
        let repo = InMemoryGymRepository::with_gyms(
            (1..=22).map(|n| gym(&format!("gym-{n:02}"), &format!("Gym {n:02}"), 0.0, 0.0)),
        )
        .expect("seed gyms");

        let first = repo
            .search_by_title("gym", Page::FIRST)
            .await
            .expect("first page");
        let second = repo
            .search_by_title("gym", Page::new(2).expect("valid page"))
            .await
            .expect("second page");

        assert_eq!(first.len(), PAGE_SIZE);
        let titles: Vec<&str> = second.iter().map(Gym::title).collect();
        assert_eq!(titles, vec!["Gym 21", "Gym 22"]);
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_ids(repo: InMemoryGymRepository) {
        let duplicate = gym("gym-near", "Another Gym", 0.0, 0.0);
        let err = repo.create(&duplicate).await.expect_err("duplicate id");

        assert_eq!(err, GymRepositoryError::duplicate_id("gym-near"));
        assert_eq!(repo.len().expect("store readable"), 2);
    }
}
