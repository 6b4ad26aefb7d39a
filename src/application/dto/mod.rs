/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod action_report;
mod action_request;
mod bean_graph_request;
mod bean_graph_response;
mod instance_groups_request;
mod instance_groups_response;
mod output_format;

pub use action_report::{ActionFailure, ActionReport};
pub use action_request::{ActionRequest, ActionTarget, AdminAction};
pub use bean_graph_request::BeanGraphRequest;
pub use bean_graph_response::BeanGraphResponse;
pub use instance_groups_request::InstanceGroupsRequest;
pub use instance_groups_response::InstanceGroupsResponse;
pub use output_format::OutputFormat;
