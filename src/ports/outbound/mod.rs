/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, monitoring server, console).
pub mod actuator_gateway;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_reader;

pub use actuator_gateway::ActuatorGateway;
pub use formatter::ViewFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_reader::SnapshotReader;
