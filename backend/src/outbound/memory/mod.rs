//! Process-local adapters for the gym and check-in repositories.
//!
//! These back the command-line binary and the behaviour suites. Both stores
//! hold their records behind a lock, so the daily check-in limit is enforced
//! atomically with the insert.

mod in_memory_check_in_repository;
mod in_memory_gym_repository;

pub use in_memory_check_in_repository::InMemoryCheckInRepository;
pub use in_memory_gym_repository::InMemoryGymRepository;
