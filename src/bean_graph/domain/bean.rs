use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by `Bean` itself; attributes never shadow them.
const RESERVED_KEYS: [&str; 2] = ["name", "dependencies"];

/// NewType wrapper for bean name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BeanName(String);

impl BeanName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Bean name cannot be empty");
        }

        // Generated names contain '$', '#', '.' and the like; only control characters are refused
        if name.chars().any(char::is_control) {
            anyhow::bail!("Bean name contains control characters");
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BeanName {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BeanName> for String {
    fn from(name: BeanName) -> Self {
        name.0
    }
}

impl std::fmt::Display for BeanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A managed component as reported by the actuator `beans` endpoint.
///
/// `dependencies` are names of other beans in the same snapshot and may be
/// dangling. Everything else the endpoint reports (`aliases`, `scope`,
/// `type`, `resource`, ...) is kept verbatim in `attributes` and is opaque
/// to the graph services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bean {
    name: BeanName,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl Bean {
    pub fn new(name: impl Into<String>, dependencies: Vec<String>) -> Result<Self> {
        Ok(Self {
            name: BeanName::new(name.into())?,
            dependencies,
            attributes: Map::new(),
        })
    }

    /// Adds an opaque attribute; reserved keys are ignored.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !RESERVED_KEYS.contains(&key.as_str()) {
            self.attributes.insert(key, value);
        }
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn bean_name(&self) -> &BeanName {
        &self.name
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == name)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Convenience accessor for the `type` attribute
    pub fn type_name(&self) -> Option<&str> {
        self.attribute("type").and_then(Value::as_str)
    }

    /// Convenience accessor for the `scope` attribute
    pub fn scope(&self) -> Option<&str> {
        self.attribute("scope").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bean_name_new_valid() {
        let name = BeanName::new("dataSource".to_string()).unwrap();
        assert_eq!(name.as_str(), "dataSource");
    }

    #[test]
    fn test_bean_name_accepts_generated_names() {
        let generated = "org.springframework.boot.autoconfigure.web.servlet.DispatcherServletAutoConfiguration$DispatcherServletConfiguration";
        assert!(BeanName::new(generated.to_string()).is_ok());
        assert!(BeanName::new("spring.jpa-org.springframework.boot.autoconfigure.orm.jpa.JpaProperties".to_string()).is_ok());
    }

    #[test]
    fn test_bean_name_new_empty() {
        assert!(BeanName::new(String::new()).is_err());
    }

    #[test]
    fn test_bean_name_has_no_length_limit() {
        let long = "a".repeat(4096);
        assert_eq!(BeanName::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_bean_name_control_characters() {
        assert!(BeanName::new("data\nSource".to_string()).is_err());
    }

    #[test]
    fn test_bean_new_and_accessors() {
        let bean = Bean::new("aBean", vec!["bBean".to_string()])
            .unwrap()
            .with_attribute("scope", json!("singleton"))
            .with_attribute("type", json!("com.example.ABean"));

        assert_eq!(bean.name(), "aBean");
        assert_eq!(bean.dependencies(), &["bBean".to_string()]);
        assert!(bean.depends_on("bBean"));
        assert!(!bean.depends_on("cBean"));
        assert_eq!(bean.scope(), Some("singleton"));
        assert_eq!(bean.type_name(), Some("com.example.ABean"));
    }

    #[test]
    fn test_with_attribute_ignores_reserved_keys() {
        let bean = Bean::new("aBean", vec![])
            .unwrap()
            .with_attribute("name", json!("other"))
            .with_attribute("dependencies", json!(["x"]));

        assert!(bean.attributes().is_empty());
        assert_eq!(bean.name(), "aBean");
    }

    #[test]
    fn test_deserialize_keeps_unknown_fields_as_attributes() {
        let bean: Bean = serde_json::from_value(json!({
            "name": "aBean",
            "aliases": [],
            "scope": "singleton",
            "type": "de.codecentric.boot.admin.server.web.client.LegacyEndpointConverter",
            "dependencies": ["bBean"]
        }))
        .unwrap();

        assert_eq!(bean.name(), "aBean");
        assert_eq!(bean.dependencies(), &["bBean".to_string()]);
        assert_eq!(bean.attribute("aliases"), Some(&json!([])));
        assert_eq!(bean.attributes().len(), 3);
    }

    #[test]
    fn test_deserialize_missing_dependencies_defaults_to_empty() {
        let bean: Bean = serde_json::from_value(json!({ "name": "dBean" })).unwrap();
        assert!(bean.dependencies().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let result: std::result::Result<Bean, _> =
            serde_json::from_value(json!({ "name": "", "dependencies": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_has_record_shape() {
        let bean = Bean::new("aBean", vec!["bBean".to_string()])
            .unwrap()
            .with_attribute("scope", json!("singleton"));

        let value = serde_json::to_value(&bean).unwrap();
        assert_eq!(
            value,
            json!({ "name": "aBean", "dependencies": ["bBean"], "scope": "singleton" })
        );
    }
}
