//! Bean graph read model
//!
//! Owns its data so it can outlive the snapshot it was extracted from.

use super::ViewMetadata;
use crate::bean_graph::domain::{Bean, Edge};
use serde::Serialize;

/// Read model for a filtered bean dependency graph
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeanGraphReadModel {
    pub metadata: ViewMetadata,
    /// Patterns the view was selected with; empty means every bean
    pub selection: Vec<String>,
    /// Edges first, then nodes
    pub elements: Vec<GraphElementView>,
    pub summary: GraphSummary,
}

impl BeanGraphReadModel {
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.elements.iter().filter_map(|element| match element {
            GraphElementView::Edge(edge) => Some(edge),
            GraphElementView::Node(_) => None,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Bean> {
        self.elements.iter().filter_map(|element| match element {
            GraphElementView::Node(bean) => Some(bean),
            GraphElementView::Edge(_) => None,
        })
    }
}

/// Owned counterpart of a graph element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphElementView {
    Edge(Edge),
    Node(Bean),
}

/// Counts shown alongside the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    /// Beans in the snapshot
    pub total_beans: usize,
    /// Beans selected by the patterns
    pub matched_beans: usize,
    /// Matched beans plus their direct neighbors
    pub included_beans: usize,
    pub edges: usize,
}
