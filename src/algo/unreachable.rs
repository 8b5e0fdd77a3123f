//! Find the vertices that cannot be reached from a vertex.
//!
//! The result is always a subset of the [vertex set](VertexSet) of the graph.
//! For adjacency maps, that is the key set: a value that only appears in some
//! neighbor list is walked through but never reported.
//!
//! # Examples
//!
//! ```
//! use trek::{algo::unreachable, storage::adjacency_map};
//!
//! let graph = adjacency_map([("a", vec!["b"]), ("b", vec![]), ("c", vec![])]);
//!
//! let result = unreachable(&graph, &"a");
//!
//! assert_eq!(result.len(), 1);
//! assert!(result.contains(&"c"));
//! ```

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{
    core::{GraphBase, Neighbors, VertexSet},
    visit::{Dfs, VisitSet, Visitor},
};

/// Vertices not reachable from the start.
pub struct Unreachable<G: GraphBase> {
    vertices: FxHashSet<G::VertexId>,
}

impl<G: GraphBase> fmt::Debug for Unreachable<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unreachable")
            .field("vertices", &self.vertices)
            .finish()
    }
}

impl<G: GraphBase> Unreachable<G> {
    pub fn iter(&self) -> impl Iterator<Item = &G::VertexId> + '_ {
        self.vertices.iter()
    }

    pub fn contains(&self, id: &G::VertexId) -> bool {
        self.vertices.contains(id)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_set(self) -> FxHashSet<G::VertexId> {
        self.vertices
    }
}

/// Builder for [`Unreachable`].
pub struct UnreachableBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<&'a G::VertexId>,
}

impl<G> Unreachable<G>
where
    G: GraphBase,
{
    /// Starts building the query on the graph.
    ///
    /// Without a [start](UnreachableBuilder::from), nothing is visited and
    /// every vertex is unreachable.
    pub fn on(graph: &G) -> UnreachableBuilder<'_, G> {
        UnreachableBuilder { graph, start: None }
    }
}

impl<'a, G> UnreachableBuilder<'a, G>
where
    G: GraphBase,
{
    /// Vertex to start the traversal from.
    ///
    /// It does not need to be a vertex of the graph. It is visited either
    /// way.
    #[allow(clippy::wrong_self_convention)]
    pub fn from(self, start: &'a G::VertexId) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }

    pub fn run(self) -> Unreachable<G>
    where
        G: Neighbors + VertexSet,
    {
        let graph = self.graph;
        let mut dfs = Dfs::new(graph);

        if let Some(start) = self.start {
            dfs.start(start.clone()).walk(graph).for_each(drop);
        }

        let visited = dfs.into_visited();
        let vertices = graph
            .vertex_ids()
            .filter(|id| !visited.is_visited(id))
            .collect::<FxHashSet<_>>();

        tracing::debug!(
            start = ?self.start,
            visited = visited.visited_count(),
            unreachable = vertices.len(),
            "unreachable vertices collected"
        );

        Unreachable { vertices }
    }
}

/// Returns the vertices of the graph that are not reachable from `start`.
pub fn unreachable<G>(graph: &G, start: &G::VertexId) -> FxHashSet<G::VertexId>
where
    G: Neighbors + VertexSet,
{
    Unreachable::on(graph).from(start).run().into_set()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use proptest::prelude::*;

    use crate::{
        core::id::VertexId,
        domain::{Airport, AirportNetwork},
        infra::{
            proptest::{adjacency_map as adjacency_map_strategy, vertex_graph},
            testing::{create_path, recursive_preorder},
        },
        storage::adjacency_map,
    };

    use super::*;

    fn set<T: std::hash::Hash + Eq>(items: impl IntoIterator<Item = T>) -> FxHashSet<T> {
        items.into_iter().collect()
    }

    #[test]
    fn unreachable_basic() {
        let graph = adjacency_map([('A', vec!['B']), ('B', vec![]), ('C', vec![])]);

        assert_eq!(unreachable(&graph, &'A'), set(['C']));
        assert_eq!(unreachable(&graph, &'C'), set(['A', 'B']));
    }

    #[test]
    fn unreachable_excludes_start_key() {
        let graph = adjacency_map([(1, vec![]), (2, vec![1])]);

        let result = Unreachable::on(&graph).from(&1).run();
        assert!(!result.contains(&1));
        assert!(result.contains(&2));
    }

    #[test]
    fn unreachable_start_not_a_key() {
        let graph = adjacency_map([(1, vec![2]), (2, vec![]), (3, vec![])]);

        assert_eq!(unreachable(&graph, &9), set([1, 2, 3]));
    }

    #[test]
    fn unreachable_walks_through_non_keys() {
        // 5 is not a key and so has no neighbors, 3 is reachable only via 2.
        let graph = adjacency_map([(1, vec![5, 2]), (2, vec![3]), (3, vec![1]), (4, vec![])]);

        let result = unreachable(&graph, &1);
        assert_eq!(result, set([4]));
        assert!(!result.contains(&5));
    }

    #[test]
    fn unreachable_without_start() {
        let graph = adjacency_map([(1, vec![2]), (2, vec![])]);

        assert_eq!(Unreachable::on(&graph).run().into_set(), set([1, 2]));
    }

    #[test]
    fn unreachable_btree_map() {
        let graph = BTreeMap::from([("x", vec!["y", "x"]), ("y", vec![]), ("z", vec!["x"])]);

        assert_eq!(unreachable(&graph, &"x"), set(["z"]));
    }

    #[test]
    fn unreachable_empty_graph() {
        let graph = HashMap::<u32, Vec<u32>>::new();

        assert!(unreachable(&graph, &0).is_empty());
    }

    #[test]
    fn unreachable_vertex_graph() {
        let (graph, v) = create_path(["a", "b", "c"]);

        assert_eq!(unreachable(&graph, &v[1]), set([v[0]]));
    }

    #[test]
    fn unreachable_airports() {
        let mut network = AirportNetwork::new();

        let [prg, vie, muc] =
            ["PRG", "VIE", "MUC"].map(|code| network.add_airport(Airport::new(code, code)));
        network.add_flight(&prg, &vie);
        network.add_flight(&vie, &prg);

        assert_eq!(unreachable(&network, &prg), set([muc]));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_unreachable_is_complement(
            graph in adjacency_map_strategy(0u8..40),
            start in 0u8..40,
        ) {
            let reachable = set(recursive_preorder(&graph, &start));
            let expected = graph
                .keys()
                .filter(|key| !reachable.contains(key))
                .copied()
                .collect::<FxHashSet<_>>();

            let result = unreachable(&graph, &start);

            prop_assert!(result.iter().all(|value| graph.contains_key(value)));
            prop_assert_eq!(result, expected);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_unreachable_vertex_graph(graph in vertex_graph(any::<u8>()), start: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 0);

            let start = VertexId(start % n);
            let result = unreachable(&graph, &start);
            let reachable = recursive_preorder(&graph, &start);

            prop_assert_eq!(result.len() + reachable.len(), graph.vertex_count());
            prop_assert!(reachable.iter().all(|id| !result.contains(id)));
        }
    }
}
