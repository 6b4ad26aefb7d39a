use crate::instance_registry::domain::InstanceId;
use crate::shared::Result;
use async_trait::async_trait;

/// ActuatorGateway port for administrative actions
///
/// Abstracts the monitoring server routes that forward requests to the
/// actuator endpoints of registered instances.
#[async_trait]
pub trait ActuatorGateway: Send + Sync {
    /// Invokes an actuator endpoint (e.g. `restart`) of a single instance
    ///
    /// # Errors
    /// Returns an error if the request fails or the server answers with a
    /// non-success status code
    async fn invoke_instance_endpoint(&self, instance_id: &InstanceId, endpoint: &str)
        -> Result<()>;

    /// Invokes an actuator endpoint on every instance of an application
    async fn invoke_application_endpoint(&self, application: &str, endpoint: &str) -> Result<()>;

    /// Removes an application and all its instances from the registry
    async fn unregister_application(&self, application: &str) -> Result<()>;
}
