use crate::instance_registry::domain::{Application, Instance};
use crate::shared::error::ViewError;
use crate::shared::Result;
use serde_json::Value;

/// Parses an applications snapshot
///
/// Accepts the monitoring server's application list (objects carrying an
/// `instances` array) or a flat instance list. Instances of a flat list are
/// wrapped into applications by registration name, without a reported status.
pub fn parse_applications(content: &str, origin: &str) -> Result<Vec<Application>> {
    let parse_error = |details: String| ViewError::SnapshotParseError {
        kind: "applications".to_string(),
        origin: origin.to_string(),
        details,
    };

    let document: Value =
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    let Value::Array(entries) = document else {
        return Err(
            parse_error("expected a JSON array of applications or instances".to_string()).into(),
        );
    };

    if is_instance_list(&entries) {
        let instances: Vec<Instance> = serde_json::from_value(Value::Array(entries))
            .map_err(|e| parse_error(e.to_string()))?;
        return Ok(Application::from_instances(instances));
    }

    serde_json::from_value(Value::Array(entries)).map_err(|e| parse_error(e.to_string()).into())
}

/// An instance list is recognised by its `registration` objects
fn is_instance_list(entries: &[Value]) -> bool {
    entries
        .first()
        .map(|entry| entry.get("registration").is_some() && entry.get("instances").is_none())
        .unwrap_or(false)
}
