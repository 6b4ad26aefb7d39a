use crate::instance_registry::domain::GroupingType;

/// InstanceGroupsRequest - Request DTO for the instance list use case
#[derive(Debug, Clone, Copy, Default)]
pub struct InstanceGroupsRequest {
    pub grouping: GroupingType,
}

impl InstanceGroupsRequest {
    pub fn new(grouping: GroupingType) -> Self {
        Self { grouping }
    }
}
