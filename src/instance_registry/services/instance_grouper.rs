use crate::instance_registry::domain::{Application, GroupingType, Instance, InstanceGroup};
use crate::instance_registry::policies::StatusAggregation;

/// InstanceGrouper service organizing the instance list
///
/// Pure logic over an in-memory snapshot; no I/O.
pub struct InstanceGrouper;

impl InstanceGrouper {
    /// Groups instances by application name or `group` tag
    ///
    /// # Returns
    /// Groups in order of the first appearance of their key. Inside a group,
    /// instances are ordered by registration name; the sort is stable so
    /// instances of the same application keep their snapshot order.
    /// The returned groups carry no status.
    pub fn group_instances_by(
        instances: &[Instance],
        grouping: GroupingType,
    ) -> Vec<InstanceGroup> {
        let mut groups: Vec<InstanceGroup> = Vec::new();

        for instance in instances {
            let key = grouping.key_of(instance);
            match groups.iter_mut().find(|group| group.name == key) {
                Some(group) => group.instances.push(instance.clone()),
                None => groups.push(InstanceGroup::new(key, vec![instance.clone()])),
            }
        }

        for group in &mut groups {
            group
                .instances
                .sort_by(|a, b| a.registration.name.cmp(&b.registration.name));
        }

        groups
    }

    /// Groups every instance of the given applications and assigns group statuses
    ///
    /// For `Application` grouping, a group takes the status and build version
    /// of the application owning its first instance; when the snapshot did
    /// not report a status, the aggregated member status is used instead.
    /// For `Group` grouping, the status is always the aggregated one.
    pub fn group_applications_by(
        applications: &[Application],
        grouping: GroupingType,
    ) -> Vec<InstanceGroup> {
        let instances: Vec<Instance> = applications
            .iter()
            .flat_map(|app| app.instances.iter().cloned())
            .collect();

        Self::group_instances_by(&instances, grouping)
            .into_iter()
            .map(|mut group| {
                let aggregated = StatusAggregation::aggregate(&group.instances);
                match grouping {
                    GroupingType::Application => {
                        let owner = group
                            .instances
                            .first()
                            .and_then(|first| Application::find_by_instance_id(applications, &first.id));
                        group.status = Some(owner.and_then(|app| app.status).unwrap_or(aggregated));
                        group.build_version = owner.and_then(|app| app.build_version.clone());
                    }
                    GroupingType::Group => {
                        group.status = Some(aggregated);
                    }
                }
                group
            })
            .collect()
    }
}
