//! Metadata stamped on every rendered view

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Tool name written into view metadata
pub const TOOL_NAME: &str = "sba-view";

/// View representation of generation metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewMetadata {
    /// RFC 3339 timestamp of when the view was rendered
    pub generated_at: String,
    /// Name of the tool that rendered the view
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
    /// Unique id of this rendering, `urn:uuid:<v4>`
    pub view_id: String,
}

impl ViewMetadata {
    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        view_id: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            view_id,
        }
    }

    /// Metadata for a view rendered now by this build
    pub fn generate() -> Self {
        Self::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            TOOL_NAME.to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let metadata = ViewMetadata::generate();

        assert_eq!(metadata.tool_name, "sba-view");
        assert_eq!(metadata.tool_version, env!("CARGO_PKG_VERSION"));
        assert!(metadata.view_id.starts_with("urn:uuid:"));
        assert!(chrono::DateTime::parse_from_rfc3339(&metadata.generated_at).is_ok());
    }

    #[test]
    fn test_generate_unique_ids() {
        assert_ne!(ViewMetadata::generate().view_id, ViewMetadata::generate().view_id);
    }

    #[test]
    fn test_serialize_camel_case() {
        let metadata = ViewMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "sba-view".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:12345".to_string(),
        );
        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["generatedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(value["viewId"], "urn:uuid:12345");
    }
}
