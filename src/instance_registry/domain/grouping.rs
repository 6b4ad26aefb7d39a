use super::{Instance, InstanceStatus};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Group name used for instances without a `group` metadata tag
pub const NO_GROUP: &str = "(no group)";

/// How the instance list is organized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingType {
    /// One group per registration name
    #[default]
    Application,
    /// One group per `group` metadata tag
    Group,
}

impl GroupingType {
    pub const ALL: [GroupingType; 2] = [GroupingType::Application, GroupingType::Group];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingType::Application => "application",
            GroupingType::Group => "group",
        }
    }

    /// Whether `value` names a supported grouping
    pub fn is_grouping_type(value: &str) -> bool {
        value.parse::<GroupingType>().is_ok()
    }

    /// The key an instance is grouped under
    pub fn key_of<'a>(&self, instance: &'a Instance) -> &'a str {
        match self {
            GroupingType::Application => instance.name(),
            GroupingType::Group => instance.group().unwrap_or(NO_GROUP),
        }
    }
}

impl FromStr for GroupingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "application" => Ok(GroupingType::Application),
            "group" => Ok(GroupingType::Group),
            _ => Err(format!(
                "Invalid grouping: {}. Please specify 'application' or 'group'",
                s
            )),
        }
    }
}

impl fmt::Display for GroupingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the grouped instance list
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceGroup {
    pub name: String,
    /// Filled in when the group is built from applications
    pub status: Option<InstanceStatus>,
    pub build_version: Option<String>,
    pub instances: Vec<Instance>,
}

impl InstanceGroup {
    pub fn new(name: impl Into<String>, instances: Vec<Instance>) -> Self {
        Self {
            name: name.into(),
            status: None,
            build_version: None,
            instances,
        }
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}
