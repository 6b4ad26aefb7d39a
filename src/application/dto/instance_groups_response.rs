use crate::application::read_models::InstanceGroupsReadModel;

/// InstanceGroupsResponse - Response DTO from the instance list use case
#[derive(Debug, Clone)]
pub struct InstanceGroupsResponse {
    pub read_model: InstanceGroupsReadModel,
}

impl InstanceGroupsResponse {
    pub fn new(read_model: InstanceGroupsReadModel) -> Self {
        Self { read_model }
    }
}
