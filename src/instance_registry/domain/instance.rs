use super::InstanceStatus;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Metadata key carrying the group tag of an instance
pub const GROUP_METADATA_KEY: &str = "group";

/// Identifier the monitoring server assigned to an instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            anyhow::bail!("Instance id cannot be empty");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registration data an instance announced itself with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Registration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            management_url: None,
            health_url: None,
            service_url: None,
            source: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Last known status of an instance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusInfo {
    #[serde(default)]
    pub status: InstanceStatus,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
}

impl StatusInfo {
    pub fn new(status: InstanceStatus) -> Self {
        Self {
            status,
            details: Map::new(),
        }
    }
}

/// A registered application instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: InstanceId,
    #[serde(default)]
    pub version: u64,
    pub registration: Registration,
    #[serde(default = "registered_by_default")]
    pub registered: bool,
    #[serde(default)]
    pub status_info: StatusInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

fn registered_by_default() -> bool {
    true
}

impl Instance {
    pub fn new(id: InstanceId, registration: Registration, status: InstanceStatus) -> Self {
        Self {
            id,
            version: 0,
            registration,
            registered: true,
            status_info: StatusInfo::new(status),
            status_timestamp: None,
            build_version: None,
            tags: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.registration.name
    }

    pub fn status(&self) -> InstanceStatus {
        self.status_info.status
    }

    /// The `group` metadata tag, when the instance carries one
    pub fn group(&self) -> Option<&str> {
        self.registration
            .metadata
            .get(GROUP_METADATA_KEY)
            .map(String::as_str)
    }
}
