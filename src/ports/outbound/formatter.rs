use crate::application::read_models::{BeanGraphReadModel, InstanceGroupsReadModel};
use crate::shared::Result;

/// ViewFormatter port for rendering views
///
/// This port abstracts the output format (JSON, Markdown).
pub trait ViewFormatter {
    /// Formats a bean dependency graph view
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_bean_graph(&self, model: &BeanGraphReadModel) -> Result<String>;

    /// Formats a grouped instance list
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_instance_groups(&self, model: &InstanceGroupsReadModel) -> Result<String>;
}
