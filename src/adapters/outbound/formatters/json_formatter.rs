use crate::application::read_models::{BeanGraphReadModel, InstanceGroupsReadModel};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering read models as pretty-printed JSON
///
/// The bean graph's `elements` array is the flat edges-then-nodes sequence
/// graph renderers consume.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonFormatter {
    fn format_bean_graph(&self, model: &BeanGraphReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }

    fn format_instance_groups(&self, model: &InstanceGroupsReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }
}
