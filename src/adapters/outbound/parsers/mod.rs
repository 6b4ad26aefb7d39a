/// Parsers for the JSON snapshot documents served by the actuator
/// and the monitoring server
mod applications_document;
mod beans_document;

pub use applications_document::parse_applications;
pub use beans_document::parse_beans;
