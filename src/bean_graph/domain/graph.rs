use super::Bean;
use serde::Serialize;

/// Directed dependency between two beans of a graph view.
///
/// `id` is `"<source>-->" + "<target>"` and therefore unique per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    id: String,
    source: String,
    target: String,
}

impl Edge {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            id: format!("{}-->{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// One entry of the flat sequence handed to a graph renderer.
///
/// Serialized untagged: edges carry `id`/`source`/`target`, nodes carry
/// `name`, which is how renderers tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphElement<'a> {
    Edge(Edge),
    Node(&'a Bean),
}

impl GraphElement<'_> {
    pub fn is_edge(&self) -> bool {
        matches!(self, GraphElement::Edge(_))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, GraphElement::Node(_))
    }
}

/// Filtered and expanded view over a bean snapshot.
///
/// Nodes borrow from the snapshot the view was extracted from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeanGraph<'a> {
    edges: Vec<Edge>,
    nodes: Vec<&'a Bean>,
}

impl<'a> BeanGraph<'a> {
    pub fn new(edges: Vec<Edge>, nodes: Vec<&'a Bean>) -> Self {
        Self { edges, nodes }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nodes(&self) -> &[&'a Bean] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|bean| bean.name() == name)
    }

    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.source() == source && edge.target() == target)
    }

    /// Flattens the view into edges followed by nodes.
    pub fn into_elements(self) -> Vec<GraphElement<'a>> {
        self.edges
            .into_iter()
            .map(GraphElement::Edge)
            .chain(self.nodes.into_iter().map(GraphElement::Node))
            .collect()
    }
}
