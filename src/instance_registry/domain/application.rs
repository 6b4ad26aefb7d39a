use super::{Instance, InstanceId, InstanceStatus};
use serde::{Deserialize, Serialize};

/// Instances sharing a registration name, as listed by the monitoring server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    /// Status reported by the server; absent when built from a bare instance list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
    #[serde(default)]
    pub instances: Vec<Instance>,
}

impl Application {
    pub fn new(name: impl Into<String>, instances: Vec<Instance>) -> Self {
        Self {
            name: name.into(),
            build_version: None,
            status: None,
            instances,
        }
    }

    pub fn with_status(mut self, status: InstanceStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Wraps a flat instance list into applications keyed by registration name
    ///
    /// Applications appear in order of their first instance.
    pub fn from_instances(instances: Vec<Instance>) -> Vec<Application> {
        let mut applications: Vec<Application> = Vec::new();
        for instance in instances {
            match applications
                .iter_mut()
                .find(|app| app.name == instance.registration.name)
            {
                Some(app) => app.instances.push(instance),
                None => applications.push(Application::new(
                    instance.registration.name.clone(),
                    vec![instance],
                )),
            }
        }
        applications
    }

    pub fn contains_instance(&self, id: &InstanceId) -> bool {
        self.instances.iter().any(|instance| &instance.id == id)
    }

    /// Finds the application owning the given instance
    pub fn find_by_instance_id<'a>(
        applications: &'a [Application],
        id: &InstanceId,
    ) -> Option<&'a Application> {
        applications.iter().find(|app| app.contains_instance(id))
    }
}
