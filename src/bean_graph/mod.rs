//! Bean dependency graph - domain model and pure graph services.
//!
//! Nothing in here performs I/O; snapshots are read by adapters and
//! handed over as plain `Bean` records.
pub mod domain;
pub mod services;
