//! Gym catalogue loading.
//!
//! The catalogue is a JSON array of gyms, each validated on deserialisation.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::Gym;
use crate::domain::ports::GymRepositoryError;
use crate::outbound::memory::InMemoryGymRepository;

/// Errors returned while loading the gym catalogue.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Catalogue file could not be read.
    #[error("failed to read gym catalogue at {path}: {source}")]
    Read {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Catalogue contents were not a valid gym list.
    #[error("invalid gym catalogue at {path}: {source}")]
    Parse {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The catalogue could not be stored.
    #[error("gym catalogue rejected: {0}")]
    Store(#[from] GymRepositoryError),
}

/// Read and validate the gym catalogue at `path`.
pub fn load_gyms(path: &Path) -> Result<Vec<Gym>, FixtureError> {
    let read_error = |source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "catalogue path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(read_error)?;

    serde_json::from_str(&contents).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a gym repository seeded from the catalogue at `path`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use gym_checkin::fixtures::seed_gym_repository;
///
/// let repo = seed_gym_repository(Path::new("fixtures/gyms.json"))?;
/// assert!(!repo.is_empty()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn seed_gym_repository(path: &Path) -> Result<InMemoryGymRepository, FixtureError> {
    let gyms = load_gyms(path)?;
    let count = gyms.len();
    let repo = InMemoryGymRepository::with_gyms(gyms)?;
    info!(path = %path.display(), count, "gym catalogue loaded");
    Ok(repo)
}
