//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and storage. They
//! contain no business logic beyond the atomic conditional write the review
//! port demands.
//!
//! - **memory**: process-local stores seeded from catalogue fixtures.

pub mod memory;
