//! Gym check-in library modules.
//!
//! - [`domain`]: entities, geographic rules, ports, and services
//! - [`inbound`]: the command-line adapter
//! - [`outbound`]: repository adapters
//! - [`config`] and [`fixtures`]: startup configuration and gym catalogue
//!   loading

pub mod config;
pub mod domain;
pub mod fixtures;
pub mod inbound;
pub mod outbound;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
