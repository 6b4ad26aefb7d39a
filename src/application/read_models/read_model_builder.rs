//! Builder for constructing read models from domain objects

use super::bean_graph_read_model::{BeanGraphReadModel, GraphElementView, GraphSummary};
use super::instance_groups_read_model::{InstanceGroupView, InstanceGroupsReadModel, InstanceView};
use super::ViewMetadata;
use crate::bean_graph::domain::{BeanGraph, GraphElement};
use crate::instance_registry::domain::{GroupingType, Instance, InstanceGroup};

/// Builder for constructing read models from domain objects
///
/// Copies what the formatters need out of borrowed domain views.
pub struct ReadModelBuilder;

impl ReadModelBuilder {
    /// Builds a BeanGraphReadModel from an extracted graph
    ///
    /// # Arguments
    /// * `graph` - The extracted view, borrowing from the snapshot
    /// * `selection` - Patterns the graph was selected with
    /// * `total_beans` - Size of the snapshot
    /// * `matched_beans` - Number of beans the patterns matched
    /// * `metadata` - Generation metadata
    pub fn build_bean_graph(
        graph: BeanGraph<'_>,
        selection: Vec<String>,
        total_beans: usize,
        matched_beans: usize,
        metadata: ViewMetadata,
    ) -> BeanGraphReadModel {
        let summary = GraphSummary {
            total_beans,
            matched_beans,
            included_beans: graph.node_count(),
            edges: graph.edge_count(),
        };

        let elements = graph
            .into_elements()
            .into_iter()
            .map(|element| match element {
                GraphElement::Edge(edge) => GraphElementView::Edge(edge),
                GraphElement::Node(bean) => GraphElementView::Node(bean.clone()),
            })
            .collect();

        BeanGraphReadModel {
            metadata,
            selection,
            elements,
            summary,
        }
    }

    /// Builds an InstanceGroupsReadModel from grouped instances
    pub fn build_instance_groups(
        groups: Vec<InstanceGroup>,
        grouping: GroupingType,
        metadata: ViewMetadata,
    ) -> InstanceGroupsReadModel {
        InstanceGroupsReadModel {
            metadata,
            grouping,
            groups: groups.into_iter().map(Self::build_group).collect(),
        }
    }

    fn build_group(group: InstanceGroup) -> InstanceGroupView {
        InstanceGroupView {
            name: group.name,
            status: group.status,
            build_version: group.build_version,
            instances: group.instances.iter().map(Self::build_instance).collect(),
        }
    }

    fn build_instance(instance: &Instance) -> InstanceView {
        InstanceView {
            id: instance.id.to_string(),
            name: instance.name().to_string(),
            status: instance.status(),
            group: instance.group().map(str::to_string),
            build_version: instance.build_version.clone(),
            service_url: instance.registration.service_url.clone(),
            status_timestamp: instance.status_timestamp.clone(),
        }
    }
}
