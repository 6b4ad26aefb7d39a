use async_trait::async_trait;
use sba_view::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock ActuatorGateway recording every call as a `METHOD path` line
#[derive(Default, Clone)]
pub struct MockActuatorGateway {
    pub calls: Arc<Mutex<Vec<String>>>,
    failing_targets: HashSet<String>,
}

impl MockActuatorGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls for this instance id or application name fail with a 503
    pub fn failing_for(mut self, target: &str) -> Self {
        self.failing_targets.insert(target.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String, target: &str) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing_targets.contains(target) {
            anyhow::bail!("Mock request for {} failed with status 503", target);
        }
        Ok(())
    }
}

#[async_trait]
impl ActuatorGateway for MockActuatorGateway {
    async fn invoke_instance_endpoint(&self, id: &InstanceId, endpoint: &str) -> Result<()> {
        self.record(
            format!("POST /instances/{}/actuator/{}", id, endpoint),
            id.as_str(),
        )
    }

    async fn invoke_application_endpoint(&self, name: &str, endpoint: &str) -> Result<()> {
        self.record(
            format!("POST /applications/{}/actuator/{}", name, endpoint),
            name,
        )
    }

    async fn unregister_application(&self, name: &str) -> Result<()> {
        self.record(format!("DELETE /applications/{}", name), name)
    }
}
