//! Registered application instances - domain model, grouping service
//! and the status aggregation policy used by the instance list.
pub mod domain;
pub mod policies;
pub mod services;
