use crate::instance_registry::domain::InstanceId;
use crate::shared::error::ViewError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Administrative action proxied through the monitoring server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    /// POST to the `restart` actuator endpoint
    Restart,
    /// POST to the `shutdown` actuator endpoint
    Shutdown,
    /// Remove an application from the registry
    Unregister,
}

impl AdminAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::Restart => "restart",
            AdminAction::Shutdown => "shutdown",
            AdminAction::Unregister => "unregister",
        }
    }

    /// Actuator endpoint the action posts to; `None` for registry operations
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            AdminAction::Restart => Some("restart"),
            AdminAction::Shutdown => Some("shutdown"),
            AdminAction::Unregister => None,
        }
    }
}

impl FromStr for AdminAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restart" => Ok(AdminAction::Restart),
            "shutdown" => Ok(AdminAction::Shutdown),
            "unregister" => Ok(AdminAction::Unregister),
            _ => Err(format!(
                "Invalid action: {}. Please specify 'restart', 'shutdown' or 'unregister'",
                s
            )),
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an action is applied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionTarget {
    /// Each listed instance, one request per instance
    Instances(Vec<InstanceId>),
    /// Every instance of the named application, one request in total
    Application(String),
}

impl ActionTarget {
    /// Labels of the individual targets, in request order
    pub fn labels(&self) -> Vec<String> {
        match self {
            ActionTarget::Instances(ids) => ids.iter().map(|id| format!("instance {}", id)).collect(),
            ActionTarget::Application(name) => vec![format!("application {}", name)],
        }
    }
}

/// ActionRequest - Request DTO for the admin action use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: AdminAction,
    pub target: ActionTarget,
}

impl ActionRequest {
    pub fn new(action: AdminAction, target: ActionTarget) -> Self {
        Self { action, target }
    }

    /// Checks the action/target combination
    ///
    /// # Errors
    /// - No instance ids given
    /// - Blank application name
    /// - `unregister` aimed at instances
    pub fn validate(&self) -> Result<()> {
        match (&self.target, self.action) {
            (ActionTarget::Instances(ids), _) if ids.is_empty() => Err(validation(
                "At least one instance id is required".to_string(),
            )),
            (ActionTarget::Instances(_), AdminAction::Unregister) => Err(validation(
                "unregister applies to applications only; use --application".to_string(),
            )),
            (ActionTarget::Application(name), _) if name.trim().is_empty() => {
                Err(validation("Application name cannot be empty".to_string()))
            }
            _ => Ok(()),
        }
    }
}

fn validation(message: String) -> anyhow::Error {
    ViewError::Validation { message }.into()
}
