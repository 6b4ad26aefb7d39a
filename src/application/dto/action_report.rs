use super::AdminAction;

/// A target the action could not be applied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionFailure {
    pub target: String,
    pub error: String,
}

/// ActionReport - Response DTO from the admin action use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub action: AdminAction,
    pub succeeded: Vec<String>,
    pub failed: Vec<ActionFailure>,
}

impl ActionReport {
    pub fn new(action: AdminAction) -> Self {
        Self {
            action,
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn record_success(&mut self, target: String) {
        self.succeeded.push(target);
    }

    pub fn record_failure(&mut self, target: String, error: String) {
        self.failed.push(ActionFailure { target, error });
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// One-line summary, e.g. `restart: 2 succeeded, 1 failed`
    pub fn summary(&self) -> String {
        format!(
            "{}: {} succeeded, {} failed",
            self.action,
            self.succeeded.len(),
            self.failed.len()
        )
    }
}
