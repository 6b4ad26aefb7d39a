/// Mock implementations for testing
mod mock_actuator_gateway;
mod mock_progress_reporter;
mod mock_snapshot_reader;

pub use mock_actuator_gateway::MockActuatorGateway;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_snapshot_reader::MockSnapshotReader;
