use serde::{Deserialize, Serialize};
use std::fmt;

/// Health status of a registered instance as reported by the monitoring server
///
/// Any status string the server invents beyond the known ones is read as
/// `Unknown` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstanceStatus {
    Up,
    Down,
    Offline,
    OutOfService,
    Restricted,
    #[default]
    Unknown,
}

impl InstanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Up => "UP",
            InstanceStatus::Down => "DOWN",
            InstanceStatus::Offline => "OFFLINE",
            InstanceStatus::OutOfService => "OUT_OF_SERVICE",
            InstanceStatus::Restricted => "RESTRICTED",
            InstanceStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "UP" => InstanceStatus::Up,
            "DOWN" => InstanceStatus::Down,
            "OFFLINE" => InstanceStatus::Offline,
            "OUT_OF_SERVICE" => InstanceStatus::OutOfService,
            "RESTRICTED" => InstanceStatus::Restricted,
            _ => InstanceStatus::Unknown,
        }
    }
}

impl From<String> for InstanceStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<InstanceStatus> for String {
    fn from(status: InstanceStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
