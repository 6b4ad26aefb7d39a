//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for the formatters.

mod bean_graph_read_model;
mod instance_groups_read_model;
mod read_model_builder;
mod view_metadata;

pub use bean_graph_read_model::{BeanGraphReadModel, GraphElementView, GraphSummary};
pub use instance_groups_read_model::{InstanceGroupView, InstanceGroupsReadModel, InstanceView};
pub use read_model_builder::ReadModelBuilder;
pub use view_metadata::ViewMetadata;
