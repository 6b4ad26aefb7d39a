mod instance_grouper;

pub use instance_grouper::InstanceGrouper;
