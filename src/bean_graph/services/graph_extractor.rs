use crate::bean_graph::domain::{Bean, BeanGraph, Edge, GraphElement};
use std::collections::{HashMap, HashSet};

/// GraphExtractor service for building filtered bean dependency views
///
/// Pure business logic: a single pass over an in-memory snapshot with no
/// I/O and no shared state, so it may run concurrently over independent
/// snapshots.
///
/// Bean names are expected to be unique. When a snapshot repeats a name,
/// the first record carrying it is the one resolved and returned.
pub struct GraphExtractor;

impl GraphExtractor {
    /// Extracts the complete graph (every bean is matched)
    pub fn extract_all(beans: &[Bean]) -> BeanGraph<'_> {
        Self::extract(beans, |_| true)
    }

    /// Extracts the beans matching `predicate` plus their direct neighbors
    ///
    /// # Arguments
    /// * `beans` - The snapshot, in the order the renderer should see it
    /// * `predicate` - Selects the beans the view is centred on
    ///
    /// # Returns
    /// A BeanGraph whose nodes are the matched beans followed by every bean
    /// depending on or depended upon by one of them, and whose edges are all
    /// dependencies between two included beans. Dependency names missing
    /// from the snapshot never produce an edge.
    pub fn extract<F>(beans: &[Bean], predicate: F) -> BeanGraph<'_>
    where
        F: Fn(&Bean) -> bool,
    {
        let by_name = Self::index_by_name(beans);
        let dependents = Self::index_dependents(beans);

        let matched: Vec<&Bean> = beans.iter().filter(|bean| predicate(bean)).collect();
        let neighbors = matched
            .iter()
            .flat_map(|bean| Self::neighbors_of(bean, &by_name, &dependents));

        let mut included: HashSet<&str> = HashSet::new();
        let nodes: Vec<&Bean> = matched
            .iter()
            .copied()
            .chain(neighbors)
            .filter(|bean| included.insert(bean.name()))
            .collect();

        let edges = Self::collect_edges(&nodes, &included);

        BeanGraph::new(edges, nodes)
    }

    /// Name index; the first bean with a given name wins
    fn index_by_name(beans: &[Bean]) -> HashMap<&str, &Bean> {
        let mut index = HashMap::with_capacity(beans.len());
        for bean in beans {
            index.entry(bean.name()).or_insert(bean);
        }
        index
    }

    /// Reverse index: dependency name -> beans listing it, in snapshot order
    fn index_dependents(beans: &[Bean]) -> HashMap<&str, Vec<&Bean>> {
        let mut index: HashMap<&str, Vec<&Bean>> = HashMap::new();
        for bean in beans {
            for dep in bean.dependencies() {
                index.entry(dep.as_str()).or_default().push(bean);
            }
        }
        index
    }

    /// Dependents of `bean` first, then its resolvable dependencies
    fn neighbors_of<'a>(
        bean: &Bean,
        by_name: &HashMap<&str, &'a Bean>,
        dependents: &HashMap<&str, Vec<&'a Bean>>,
    ) -> Vec<&'a Bean> {
        let upstream = dependents
            .get(bean.name())
            .map(|beans| beans.as_slice())
            .unwrap_or_default()
            .iter()
            .copied();
        let downstream = bean
            .dependencies()
            .iter()
            .filter_map(|dep| by_name.get(dep.as_str()).copied());

        upstream.chain(downstream).collect()
    }

    /// One edge per (included bean, included dependency) pair
    fn collect_edges(nodes: &[&Bean], included: &HashSet<&str>) -> Vec<Edge> {
        let mut emitted: HashSet<(&str, &str)> = HashSet::new();
        let mut edges = Vec::new();

        for bean in nodes {
            for dep in bean.dependencies() {
                if included.contains(dep.as_str()) && emitted.insert((bean.name(), dep.as_str()))
                {
                    edges.push(Edge::new(bean.name(), dep));
                }
            }
        }

        edges
    }
}

/// Flat form of [`GraphExtractor::extract`]: edges first, then nodes.
///
/// This is the sequence graph renderers consume directly.
pub fn extract_graph<F>(beans: &[Bean], predicate: F) -> Vec<GraphElement<'_>>
where
    F: Fn(&Bean) -> bool,
{
    GraphExtractor::extract(beans, predicate).into_elements()
}
