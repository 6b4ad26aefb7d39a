use crate::instance_registry::domain::{Instance, InstanceStatus};

/// Status shown for a group of instances
///
/// A group is DOWN only when every member is DOWN and UP only when every
/// member is UP; any mix is RESTRICTED.
pub struct StatusAggregation;

impl StatusAggregation {
    /// Aggregates member statuses into one group status
    ///
    /// An empty slice counts as "every member DOWN". Groups built by the
    /// grouper always have at least one member.
    pub fn aggregate(instances: &[Instance]) -> InstanceStatus {
        if Self::all_have(instances, InstanceStatus::Down) {
            return InstanceStatus::Down;
        }
        if Self::all_have(instances, InstanceStatus::Up) {
            return InstanceStatus::Up;
        }
        InstanceStatus::Restricted
    }

    fn all_have(instances: &[Instance], status: InstanceStatus) -> bool {
        instances.iter().all(|instance| instance.status() == status)
    }
}
