//! Album review and rating backend.
//!
//! - [`domain`]: entities, ports, and the review and comment services.
//! - [`outbound`]: in-memory adapters for the driven ports.
//! - [`config`]: runtime settings.
//! - [`fixtures`]: catalogue fixtures used to seed the adapters.

pub mod config;
pub mod domain;
pub mod fixtures;
pub mod outbound;
