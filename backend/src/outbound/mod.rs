//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: lock-guarded, process-local repositories
//!
//! Adapters are thin translators that convert between domain types and
//! storage representations. They contain no business logic beyond the
//! constraints a durable store would enforce.

pub mod memory;
