/// Use cases module containing application business logic orchestration
mod extract_bean_graph;
mod group_instances;
mod invoke_action;

pub use extract_bean_graph::ExtractBeanGraphUseCase;
pub use group_instances::GroupInstancesUseCase;
pub use invoke_action::InvokeActionUseCase;
