use crate::bean_graph::domain::Bean;
use crate::shared::error::ViewError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Attribute recording which application context a bean was declared in
pub const CONTEXT_ATTRIBUTE: &str = "context";

/// The document returned by the actuator `beans` endpoint
#[derive(Debug, Deserialize)]
struct ActuatorBeans {
    contexts: BTreeMap<String, ActuatorContext>,
}

#[derive(Debug, Deserialize)]
struct ActuatorContext {
    #[serde(default)]
    beans: BTreeMap<String, Map<String, Value>>,
}

/// Parses a beans snapshot
///
/// Accepts either a JSON array of bean records or the actuator `beans`
/// document. Actuator contexts and the beans inside them are flattened in
/// key order; each bean gets its map key as `name` and its context name as
/// the `context` attribute.
///
/// # Arguments
/// * `content` - Raw JSON text
/// * `origin` - File path or URL, used in error messages
pub fn parse_beans(content: &str, origin: &str) -> Result<Vec<Bean>> {
    let parse_error = |details: String| ViewError::SnapshotParseError {
        kind: "beans".to_string(),
        origin: origin.to_string(),
        details,
    };

    let document: Value =
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    if document.is_array() {
        return serde_json::from_value(document).map_err(|e| parse_error(e.to_string()).into());
    }

    if document.get("contexts").is_some() {
        let actuator: ActuatorBeans =
            serde_json::from_value(document).map_err(|e| parse_error(e.to_string()))?;
        return flatten_contexts(actuator).map_err(|e| parse_error(e.to_string()).into());
    }

    Err(parse_error(
        "expected a JSON array of beans or an object with a \"contexts\" field".to_string(),
    )
    .into())
}

fn flatten_contexts(actuator: ActuatorBeans) -> Result<Vec<Bean>> {
    let mut beans = Vec::new();
    for (context_name, context) in actuator.contexts {
        for (bean_name, mut record) in context.beans {
            record.insert("name".to_string(), Value::String(bean_name));
            record.insert(
                CONTEXT_ATTRIBUTE.to_string(),
                Value::String(context_name.clone()),
            );
            beans.push(serde_json::from_value(Value::Object(record))?);
        }
    }
    Ok(beans)
}
