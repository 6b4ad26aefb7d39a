use crate::application::dto::{ActionReport, ActionRequest, ActionTarget, AdminAction};
use crate::instance_registry::domain::InstanceId;
use crate::ports::outbound::{ActuatorGateway, ProgressReporter};
use crate::shared::error::ViewError;
use crate::shared::Result;

/// InvokeActionUseCase - Applies an administrative action to its targets
///
/// Targets are processed one after another. A failing target is recorded
/// in the report and does not stop the remaining ones.
///
/// # Type Parameters
/// * `AG` - ActuatorGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct InvokeActionUseCase<AG, PR> {
    gateway: AG,
    progress_reporter: PR,
}

impl<AG, PR> InvokeActionUseCase<AG, PR>
where
    AG: ActuatorGateway,
    PR: ProgressReporter,
{
    pub fn new(gateway: AG, progress_reporter: PR) -> Self {
        Self {
            gateway,
            progress_reporter,
        }
    }

    /// Executes the action
    ///
    /// # Errors
    /// Returns an error only when the request itself is invalid; per-target
    /// failures end up in the returned ActionReport.
    pub async fn execute(&self, request: ActionRequest) -> Result<ActionReport> {
        request.validate()?;

        let action = request.action;
        let mut report = ActionReport::new(action);
        let labels = request.target.labels();
        let total = labels.len();

        self.progress_reporter
            .report(&format!("🔧 Sending {} to {} target(s)...", action, total));

        match &request.target {
            ActionTarget::Instances(ids) => {
                for (index, (id, label)) in ids.iter().zip(labels).enumerate() {
                    let outcome = self.invoke_on_instance(action, id).await;
                    Self::record(&mut report, label, outcome);
                    self.progress_reporter
                        .report_progress(index + 1, total, Some(id.as_str()));
                }
            }
            ActionTarget::Application(name) => {
                let outcome = self.invoke_on_application(action, name).await;
                if let Some(label) = labels.into_iter().next() {
                    Self::record(&mut report, label, outcome);
                }
                self.progress_reporter.report_progress(total, total, Some(name));
            }
        }

        for failure in &report.failed {
            self.progress_reporter
                .report_error(&format!("❌ {}: {}", failure.target, failure.error));
        }
        if report.has_failures() {
            self.progress_reporter
                .report_error(&format!("⚠️  {}", report.summary()));
        } else {
            self.progress_reporter
                .report_completion(&format!("✅ {}", report.summary()));
        }

        Ok(report)
    }

    async fn invoke_on_instance(&self, action: AdminAction, id: &InstanceId) -> Result<()> {
        match action.endpoint() {
            Some(endpoint) => self.gateway.invoke_instance_endpoint(id, endpoint).await,
            None => Err(ViewError::Validation {
                message: format!("{} cannot be applied to an instance", action),
            }
            .into()),
        }
    }

    async fn invoke_on_application(&self, action: AdminAction, name: &str) -> Result<()> {
        match action.endpoint() {
            Some(endpoint) => self.gateway.invoke_application_endpoint(name, endpoint).await,
            None => self.gateway.unregister_application(name).await,
        }
    }

    fn record(report: &mut ActionReport, label: String, outcome: Result<()>) {
        match outcome {
            Ok(()) => report.record_success(label),
            Err(e) => report.record_failure(label, first_line(&e)),
        }
    }
}

/// The headline of an error, without hint lines
fn first_line(error: &anyhow::Error) -> String {
    error
        .to_string()
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct ScriptedGateway {
        failing: Vec<String>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn call(&self, entry: String) -> Result<()> {
            self.calls.lock().unwrap().push(entry.clone());
            if self.failing.iter().any(|f| entry.contains(f.as_str())) {
                anyhow::bail!("Request to {} failed\nDetails: status code 503", entry);
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ActuatorGateway for ScriptedGateway {
        async fn invoke_instance_endpoint(&self, id: &InstanceId, endpoint: &str) -> Result<()> {
            self.call(format!("POST /instances/{}/actuator/{}", id, endpoint))
        }

        async fn invoke_application_endpoint(&self, name: &str, endpoint: &str) -> Result<()> {
            self.call(format!("POST /applications/{}/actuator/{}", name, endpoint))
        }

        async fn unregister_application(&self, name: &str) -> Result<()> {
            self.call(format!("DELETE /applications/{}", name))
        }
    }

    struct Silent;

    impl ProgressReporter for Silent {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn instances(ids: &[&str]) -> ActionTarget {
        ActionTarget::Instances(ids.iter().map(|id| InstanceId::new(*id).unwrap()).collect())
    }

    #[tokio::test]
    async fn test_restart_instances() {
        let use_case = InvokeActionUseCase::new(ScriptedGateway::default(), Silent);
        let report = use_case
            .execute(ActionRequest::new(AdminAction::Restart, instances(&["a1", "b2"])))
            .await
            .unwrap();

        assert_eq!(report.succeeded, vec!["instance a1", "instance b2"]);
        assert!(!report.has_failures());
        assert_eq!(
            *use_case.gateway.calls.lock().unwrap(),
            vec![
                "POST /instances/a1/actuator/restart",
                "POST /instances/b2/actuator/restart"
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_remaining_instances() {
        let gateway = ScriptedGateway {
            failing: vec!["/instances/a1/".to_string()],
            ..Default::default()
        };
        let use_case = InvokeActionUseCase::new(gateway, Silent);
        let report = use_case
            .execute(ActionRequest::new(AdminAction::Shutdown, instances(&["a1", "b2"])))
            .await
            .unwrap();

        assert_eq!(report.succeeded, vec!["instance b2"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].target, "instance a1");
        assert!(report.failed[0].error.contains("failed"));
        assert!(!report.failed[0].error.contains('\n'));
        assert_eq!(use_case.gateway.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_application_actions() {
        let use_case = InvokeActionUseCase::new(ScriptedGateway::default(), Silent);
        let target = || ActionTarget::Application("orders".to_string());

        use_case
            .execute(ActionRequest::new(AdminAction::Restart, target()))
            .await
            .unwrap();
        let report = use_case
            .execute(ActionRequest::new(AdminAction::Unregister, target()))
            .await
            .unwrap();

        assert_eq!(report.succeeded, vec!["application orders"]);
        assert_eq!(
            *use_case.gateway.calls.lock().unwrap(),
            vec![
                "POST /applications/orders/actuator/restart",
                "DELETE /applications/orders"
            ]
        );
    }

    #[tokio::test]
    async fn test_unregister_instances_is_rejected_without_calls() {
        let use_case = InvokeActionUseCase::new(ScriptedGateway::default(), Silent);
        let err = use_case
            .execute(ActionRequest::new(AdminAction::Unregister, instances(&["a1"])))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("applications only"));
        assert!(use_case.gateway.calls.lock().unwrap().is_empty());
    }
}
