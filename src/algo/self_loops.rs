//! Find reachable vertices that list themselves as their own neighbor.
//!
//! Only a direct self-loop counts. A vertex that lies on a longer cycle
//! leading back to it is not reported for that reason.
//!
//! # Examples
//!
//! ```
//! use trek::{algo::self_loopers, storage::VertexGraph};
//!
//! let mut graph = VertexGraph::new();
//!
//! let [a, b, c] = [1, 2, 3].map(|value| graph.add_vertex(value));
//! graph.extend_with_neighbors([(a, b), (b, a), (b, c), (c, c)]);
//!
//! assert_eq!(self_loopers(&graph, Some(&a)), [&3]);
//! ```

use std::{
    fmt,
    io::{self, Write},
};

use crate::{
    core::{id::VertexId, GraphBase, Neighbors, VertexSet, Vertices},
    visit::{Dfs, VisitSet, Visitor},
};

use super::present_start;

/// Reachable vertices with a self-loop, in depth-first pre-order.
pub struct SelfLoops<G: GraphBase> {
    vertices: Vec<G::VertexId>,
}

impl<G: GraphBase> fmt::Debug for SelfLoops<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelfLoops")
            .field("vertices", &self.vertices)
            .finish()
    }
}

impl<G: GraphBase> SelfLoops<G> {
    pub fn iter(&self) -> impl Iterator<Item = &G::VertexId> + '_ {
        self.vertices.iter()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vec(self) -> Vec<G::VertexId> {
        self.vertices
    }

    /// Writes the values of the vertices, one per line.
    pub fn write_to<W>(&self, graph: &G, writer: &mut W) -> io::Result<()>
    where
        G: Vertices,
        G::Vertex: fmt::Display,
        W: Write,
    {
        for value in self.vertices.iter().filter_map(|id| graph.vertex(id)) {
            writeln!(writer, "{value}")?;
        }

        Ok(())
    }
}

/// Builder for [`SelfLoops`].
pub struct SelfLoopsBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<&'a G::VertexId>,
}

impl<G> SelfLoops<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> SelfLoopsBuilder<'_, G> {
        SelfLoopsBuilder { graph, start: None }
    }
}

impl<'a, G> SelfLoopsBuilder<'a, G>
where
    G: GraphBase,
{
    /// Vertex to start the traversal from.
    #[allow(clippy::wrong_self_convention)]
    pub fn from(self, start: &'a G::VertexId) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }

    pub fn run(self) -> SelfLoops<G>
    where
        G: Neighbors<VertexId = VertexId> + VertexSet,
    {
        let graph = self.graph;

        let Some(start) = present_start(graph, self.start) else {
            return SelfLoops {
                vertices: Vec::new(),
            };
        };

        let mut dfs = Dfs::new_bit_set(graph);
        let vertices = dfs
            .start(start.clone())
            .walk(graph)
            .filter(|vertex| graph.has_self_loop(vertex))
            .collect::<Vec<_>>();

        tracing::debug!(
            ?start,
            visited = dfs.visited().visited_count(),
            found = vertices.len(),
            "self-loops collected"
        );

        SelfLoops { vertices }
    }
}

/// Returns the values of vertices reachable from `start` that have a
/// self-loop, in depth-first pre-order.
pub fn self_loopers<'g, G>(graph: &'g G, start: Option<&G::VertexId>) -> Vec<&'g G::Vertex>
where
    G: Neighbors<VertexId = VertexId> + Vertices,
{
    let Some(start) = start else {
        return Vec::new();
    };

    SelfLoops::on(graph)
        .from(start)
        .run()
        .iter()
        .filter_map(|id| graph.vertex(id))
        .collect()
}

/// Prints the values of vertices reachable from `start` that have a
/// self-loop to the standard output, one per line.
pub fn print_self_loopers<G>(graph: &G, start: Option<&G::VertexId>) -> io::Result<()>
where
    G: Neighbors<VertexId = VertexId> + Vertices,
    G::Vertex: fmt::Display,
{
    let Some(start) = start else {
        return Ok(());
    };

    SelfLoops::on(graph)
        .from(start)
        .run()
        .write_to(graph, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::id::VertexId,
        infra::{
            proptest::vertex_graph,
            testing::{create_cycle, create_path, recursive_preorder},
        },
        storage::VertexGraph,
    };

    use super::*;

    #[test]
    fn self_loops_basic() {
        let mut graph = VertexGraph::new();

        let [a, b, c, d] = ["a", "b", "c", "d"].map(|v| graph.add_vertex(v));
        graph.extend_with_neighbors([(a, b), (a, a), (b, c), (b, b), (c, d), (d, d)]);

        assert_eq!(self_loopers(&graph, Some(&a)), vec![&"a", &"b", &"d"]);
        assert_eq!(self_loopers(&graph, Some(&c)), vec![&"d"]);
    }

    #[test]
    fn two_cycle_is_not_self_loop() {
        let (graph, v) = create_cycle(["a", "b"]);

        assert!(SelfLoops::on(&graph).from(&v[0]).run().is_empty());
    }

    #[test]
    fn self_loop_among_other_neighbors() {
        let mut graph = VertexGraph::new();

        let [a, b] = [(), ()].map(|_| graph.add_vertex(()));
        graph.extend_with_neighbors([(a, b), (a, b), (a, a)]);

        let loops = SelfLoops::on(&graph).from(&a).run();
        assert_eq!(loops.into_vec(), vec![a]);
    }

    #[test]
    fn self_loops_absent_start() {
        let (graph, _) = create_path([1, 2]);

        assert!(self_loopers(&graph, None).is_empty());
        assert!(self_loopers(&graph, Some(&VertexId(2))).is_empty());
        assert!(SelfLoops::on(&graph).run().is_empty());
    }

    #[test]
    fn self_loops_non_string_values() {
        let mut graph = VertexGraph::new();

        let a = graph.add_vertex(3.5f64);
        graph.add_neighbor(&a, &a);

        let mut out = Vec::new();
        SelfLoops::on(&graph)
            .from(&a)
            .run()
            .write_to(&graph, &mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "3.5\n");
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_self_loops_exact(graph in vertex_graph(any::<u8>()), start: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 0);

            let start = VertexId(start % n);
            let expected = recursive_preorder(&graph, &start)
                .into_iter()
                .filter(|id| graph.neighbor_ids(id).contains(id))
                .collect::<Vec<_>>();

            prop_assert_eq!(SelfLoops::on(&graph).from(&start).run().into_vec(), expected);
        }
    }
}
