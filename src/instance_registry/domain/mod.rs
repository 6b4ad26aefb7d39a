pub mod application;
pub mod grouping;
pub mod instance;
pub mod status;

pub use application::Application;
pub use grouping::{GroupingType, InstanceGroup, NO_GROUP};
pub use instance::{Instance, InstanceId, Registration, StatusInfo};
pub use status::InstanceStatus;
