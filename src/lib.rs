//! sba-view - inspection views for Spring Boot Admin style monitoring servers
//!
//! This library turns snapshots taken from a monitoring server or an actuator
//! endpoint into views, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bean_graph`, `instance_registry`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use sba_view::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let beans = vec![
//!     Bean::new("orderService", vec!["orderRepository".to_string()])?,
//!     Bean::new("orderRepository", vec![])?,
//!     Bean::new("auditLog", vec![])?,
//! ];
//!
//! // Beans named orderService plus everything one hop away
//! let elements = extract_graph(&beans, |bean| bean.name() == "orderService");
//!
//! assert_eq!(elements.iter().filter(|e| e.is_edge()).count(), 1);
//! assert_eq!(elements.iter().filter(|e| e.is_node()).count(), 2);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bean_graph;
pub mod cli;
pub mod config;
pub mod instance_registry;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::AdminServerClient;
    pub use crate::application::dto::{
        ActionReport, ActionRequest, ActionTarget, AdminAction, BeanGraphRequest,
        BeanGraphResponse, InstanceGroupsRequest, InstanceGroupsResponse, OutputFormat,
    };
    pub use crate::application::use_cases::{
        ExtractBeanGraphUseCase, GroupInstancesUseCase, InvokeActionUseCase,
    };
    pub use crate::bean_graph::domain::{Bean, BeanGraph, BeanName, Edge, GraphElement};
    pub use crate::bean_graph::services::{extract_graph, BeanSelector, GraphExtractor};
    pub use crate::instance_registry::domain::{
        Application, GroupingType, Instance, InstanceGroup, InstanceId, InstanceStatus,
        Registration, NO_GROUP,
    };
    pub use crate::instance_registry::policies::StatusAggregation;
    pub use crate::instance_registry::services::InstanceGrouper;
    pub use crate::ports::outbound::{
        ActuatorGateway, OutputPresenter, ProgressReporter, SnapshotReader, ViewFormatter,
    };
    pub use crate::shared::Result;
}
