//! Collect words shorter than a threshold that are reachable from a vertex.
//!
//! # Examples
//!
//! ```
//! use trek::{algo::ShortWords, storage::VertexGraph};
//!
//! let mut graph = VertexGraph::new();
//!
//! let [cat, elephant, ox] = ["cat", "elephant", "ox"].map(|word| graph.add_vertex(word));
//! graph.extend_with_neighbors([(cat, elephant), (elephant, ox)]);
//!
//! let short = ShortWords::on(&graph).from(&cat).shorter_than(4).run();
//!
//! assert_eq!(short.values(&graph).collect::<Vec<_>>(), [&"cat", &"ox"]);
//! ```

use std::{
    fmt,
    io::{self, Write},
};

use crate::{
    core::{id::VertexId, GraphBase, Neighbors, Vertices},
    visit::{Dfs, VisitSet, Visitor},
};

use super::{present_start, word_len};

/// Words shorter than a threshold, in depth-first pre-order.
///
/// See [module](self) documentation for more details and example.
pub struct ShortWords<G: GraphBase> {
    vertices: Vec<G::VertexId>,
}

impl<G: GraphBase> fmt::Debug for ShortWords<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortWords")
            .field("vertices", &self.vertices)
            .finish()
    }
}

impl<G: GraphBase> ShortWords<G> {
    /// Vertices holding the short words, in the order they were visited.
    pub fn iter(&self) -> impl Iterator<Item = &G::VertexId> + '_ {
        self.vertices.iter()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn values<'s, 'g>(&'s self, graph: &'g G) -> impl Iterator<Item = &'g G::Vertex> + 's
    where
        G: Vertices,
        'g: 's,
    {
        self.vertices.iter().filter_map(|id| graph.vertex(id))
    }

    /// Writes the words, one per line.
    pub fn write_to<W>(&self, graph: &G, writer: &mut W) -> io::Result<()>
    where
        G: Vertices,
        G::Vertex: fmt::Display,
        W: Write,
    {
        for value in self.values(graph) {
            writeln!(writer, "{value}")?;
        }

        Ok(())
    }
}

/// Builder for [`ShortWords`].
pub struct ShortWordsBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<&'a G::VertexId>,
    threshold: i64,
}

impl<G> ShortWords<G>
where
    G: GraphBase,
{
    /// Starts building the query on the graph.
    ///
    /// Without a [start](ShortWordsBuilder::from), the query is empty.
    pub fn on(graph: &G) -> ShortWordsBuilder<'_, G> {
        ShortWordsBuilder {
            graph,
            start: None,
            threshold: 0,
        }
    }
}

impl<'a, G> ShortWordsBuilder<'a, G>
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

    fn from_option(self, start: Option<&'a G::VertexId>) -> Self {
        Self { start, ..self }
    }

    /// Exclusive upper bound on the word length in UTF-16 code units.
    ///
    /// A character outside the Basic Multilingual Plane counts as two. A
    /// threshold of zero or less matches nothing.
    pub fn shorter_than(self, threshold: i64) -> Self {
        Self { threshold, ..self }
    }

    /// Runs the query.
    pub fn run(self) -> ShortWords<G>
    where
        G: Neighbors<VertexId = VertexId> + Vertices,
        G::Vertex: AsRef<str>,
    {
        let Self {
            graph,
            start,
            threshold,
        } = self;

        let mut vertices = Vec::new();

        if let Some(start) = present_start(graph, start) {
            let mut dfs = Dfs::new_bit_set(graph);

            for vertex in dfs.start(start.clone()).walk(graph) {
                let is_short = graph
                    .vertex(&vertex)
                    .is_some_and(|word| is_shorter(word.as_ref(), threshold));

                if is_short {
                    vertices.push(vertex);
                }
            }

            tracing::debug!(
                ?start,
                threshold,
                visited = dfs.visited().visited_count(),
                found = vertices.len(),
                "short words collected"
            );
        }

        ShortWords { vertices }
    }
}

fn is_shorter(word: &str, threshold: i64) -> bool {
    i64::try_from(word_len(word)).map_or(false, |len| len < threshold)
}

/// Returns the words shorter than `threshold` UTF-16 code units reachable from
/// `start`, including `start` itself, in depth-first pre-order.
pub fn short_words<'g, G>(
    graph: &'g G,
    start: Option<&G::VertexId>,
    threshold: i64,
) -> Vec<&'g G::Vertex>
where
    G: Neighbors<VertexId = VertexId> + Vertices,
    G::Vertex: AsRef<str>,
{
    ShortWords::on(graph)
        .from_option(start)
        .shorter_than(threshold)
        .run()
        .values(graph)
        .collect()
}

/// Prints the words shorter than `threshold` UTF-16 code units reachable
/// from `start` to the standard output, one per line.
pub fn print_short_words<G>(
    graph: &G,
    start: Option<&G::VertexId>,
    threshold: i64,
) -> io::Result<()>
where
    G: Neighbors<VertexId = VertexId> + Vertices,
    G::Vertex: AsRef<str> + fmt::Display,
{
    ShortWords::on(graph)
        .from_option(start)
        .shorter_than(threshold)
        .run()
        .write_to(graph, &mut io::stdout().lock())
}
