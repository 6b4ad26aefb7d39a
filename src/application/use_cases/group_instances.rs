use crate::application::dto::{InstanceGroupsRequest, InstanceGroupsResponse};
use crate::application::read_models::{ReadModelBuilder, ViewMetadata};
use crate::instance_registry::services::InstanceGrouper;
use crate::ports::outbound::{ProgressReporter, SnapshotReader};
use crate::shared::Result;

/// GroupInstancesUseCase - Builds the grouped instance list
///
/// # Type Parameters
/// * `SR` - SnapshotReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GroupInstancesUseCase<SR, PR> {
    snapshot_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> GroupInstancesUseCase<SR, PR>
where
    SR: SnapshotReader,
    PR: ProgressReporter,
{
    pub fn new(snapshot_reader: SR, progress_reporter: PR) -> Self {
        Self {
            snapshot_reader,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: InstanceGroupsRequest) -> Result<InstanceGroupsResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Reading applications from {}...",
            self.snapshot_reader.describe()
        ));
        let applications = self.snapshot_reader.read_applications().await?;

        let groups = InstanceGrouper::group_applications_by(&applications, request.grouping);
        let read_model = ReadModelBuilder::build_instance_groups(
            groups,
            request.grouping,
            ViewMetadata::generate(),
        );

        self.progress_reporter.report(&format!(
            "📊 {} instances in {} groups (grouped by {})",
            read_model.instance_count(),
            read_model.groups.len(),
            request.grouping
        ));

        Ok(InstanceGroupsResponse::new(read_model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bean_graph::domain::Bean;
    use crate::instance_registry::domain::{
        Application, GroupingType, Instance, InstanceId, InstanceStatus, Registration, NO_GROUP,
    };
    use async_trait::async_trait;

    struct StaticApplications(Vec<Application>);

    #[async_trait]
    impl SnapshotReader for StaticApplications {
        async fn read_beans(&self) -> Result<Vec<Bean>> {
            Ok(vec![])
        }

        async fn read_applications(&self) -> Result<Vec<Application>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    struct Silent;

    impl ProgressReporter for Silent {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn instance(id: &str, name: &str, group: Option<&str>, status: InstanceStatus) -> Instance {
        let mut registration = Registration::new(name);
        if let Some(group) = group {
            registration = registration.with_metadata("group", group);
        }
        Instance::new(InstanceId::new(id).unwrap(), registration, status)
    }

    fn snapshot() -> Vec<Application> {
        Application::from_instances(vec![
            instance("o1", "orders", Some("shop"), InstanceStatus::Up),
            instance("b1", "billing", None, InstanceStatus::Down),
            instance("o2", "orders", Some("shop"), InstanceStatus::Down),
        ])
    }

    #[tokio::test]
    async fn test_execute_groups_by_application() {
        let use_case = GroupInstancesUseCase::new(StaticApplications(snapshot()), Silent);
        let response = use_case
            .execute(InstanceGroupsRequest::new(GroupingType::Application))
            .await
            .unwrap();

        let model = response.read_model;
        assert_eq!(model.grouping, GroupingType::Application);
        assert_eq!(model.groups.len(), 2);
        assert_eq!(model.groups[0].name, "orders");
        assert_eq!(model.groups[0].status, Some(InstanceStatus::Restricted));
        assert_eq!(model.instance_count(), 3);
    }

    #[tokio::test]
    async fn test_execute_groups_by_group_tag() {
        let use_case = GroupInstancesUseCase::new(StaticApplications(snapshot()), Silent);
        let response = use_case
            .execute(InstanceGroupsRequest::new(GroupingType::Group))
            .await
            .unwrap();

        let names: Vec<&str> = response
            .read_model
            .groups
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["shop", NO_GROUP]);
    }

    #[tokio::test]
    async fn test_execute_empty_snapshot() {
        let use_case = GroupInstancesUseCase::new(StaticApplications(vec![]), Silent);
        let response = use_case.execute(InstanceGroupsRequest::default()).await.unwrap();
        assert!(response.read_model.groups.is_empty());
    }
}
