//! Instance list read model

use super::ViewMetadata;
use crate::instance_registry::domain::{GroupingType, InstanceStatus};
use serde::Serialize;

/// Read model for the grouped instance list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceGroupsReadModel {
    pub metadata: ViewMetadata,
    pub grouping: GroupingType,
    pub groups: Vec<InstanceGroupView>,
}

impl InstanceGroupsReadModel {
    pub fn instance_count(&self) -> usize {
        self.groups.iter().map(|group| group.instances.len()).sum()
    }
}

/// One group of the instance list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceGroupView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    pub instances: Vec<InstanceView>,
}

/// Flattened instance row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceView {
    pub id: String,
    pub name: String,
    pub status: InstanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_timestamp: Option<String>,
}
