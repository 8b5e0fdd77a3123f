//! Find the longest word reachable from a vertex.
//!
//! The start vertex itself takes part. Among words of the same maximal
//! length, the one visited first in depth-first pre-order wins.
//!
//! # Examples
//!
//! ```
//! use trek::{algo::longest_word, storage::VertexGraph};
//!
//! let mut graph = VertexGraph::new();
//!
//! let [cat, dog, elephant] = ["cat", "dog", "elephant"].map(|word| graph.add_vertex(word));
//! graph.extend_with_neighbors([(cat, dog), (dog, elephant), (cat, elephant)]);
//!
//! assert_eq!(longest_word(&graph, Some(&cat)), "elephant");
//! assert_eq!(longest_word(&graph, None), "");
//! ```

use std::fmt;

use crate::{
    core::{id::VertexId, GraphBase, Neighbors, Vertices},
    visit::{Dfs, VisitSet, Visitor},
};

use super::{present_start, word_len};

/// The vertex holding the longest reachable word.
pub struct LongestWord<G: GraphBase> {
    vertex: Option<G::VertexId>,
    len: usize,
}

impl<G: GraphBase> fmt::Debug for LongestWord<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LongestWord")
            .field("vertex", &self.vertex)
            .field("len", &self.len)
            .finish()
    }
}

impl<G: GraphBase> LongestWord<G> {
    /// The vertex with the longest word, `None` if the start was absent.
    pub fn vertex(&self) -> Option<&G::VertexId> {
        self.vertex.as_ref()
    }

    /// Length of the longest word in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.len
    }

    /// Returns the longest word, or an empty string if the start was absent.
    pub fn word<'g>(&self, graph: &'g G) -> &'g str
    where
        G: Vertices,
        G::Vertex: AsRef<str>,
    {
        self.vertex
            .as_ref()
            .and_then(|id| graph.vertex(id))
            .map_or("", |word| word.as_ref())
    }
}

/// Builder for [`LongestWord`].
pub struct LongestWordBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<&'a G::VertexId>,
}

impl<G> LongestWord<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> LongestWordBuilder<'_, G> {
        LongestWordBuilder { graph, start: None }
    }
}

impl<'a, G> LongestWordBuilder<'a, G>
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

    pub fn run(self) -> LongestWord<G>
    where
        G: Neighbors<VertexId = VertexId> + Vertices,
        G::Vertex: AsRef<str>,
    {
        let Some(start) = present_start(self.graph, self.start) else {
            return LongestWord {
                vertex: None,
                len: 0,
            };
        };

        let graph = self.graph;
        let mut dfs = Dfs::new_bit_set(graph);

        // Sequential fold over the pre-order. Only a strictly longer word
        // replaces the current best.
        let mut best: Option<(G::VertexId, usize)> = None;

        for vertex in dfs.start(start.clone()).walk(graph) {
            let Some(word) = graph.vertex(&vertex) else {
                continue;
            };

            let len = word_len(word.as_ref());

            if best.as_ref().map_or(true, |(_, best_len)| len > *best_len) {
                best = Some((vertex, len));
            }
        }

        tracing::debug!(
            ?start,
            visited = dfs.visited().visited_count(),
            longest = ?best,
            "longest word found"
        );

        match best {
            Some((vertex, len)) => LongestWord {
                vertex: Some(vertex),
                len,
            },
            None => LongestWord {
                vertex: None,
                len: 0,
            },
        }
    }
}

/// Returns the longest word reachable from `start`, including `start`
/// itself, or an empty string if `start` is absent.
pub fn longest_word<'g, G>(graph: &'g G, start: Option<&G::VertexId>) -> &'g str
where
    G: Neighbors<VertexId = VertexId> + Vertices,
    G::Vertex: AsRef<str>,
{
    let builder = LongestWord::on(graph);
    let builder = match start {
        Some(start) => builder.from(start),
        None => builder,
    };

    builder.run().word(graph)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::{id::VertexId, VertexSet},
        infra::{
            proptest::vertex_graph,
            testing::{create_cycle, create_word_graph, recursive_preorder},
        },
    };

    use super::*;

    #[test]
    fn longest_word_basic() {
        let (graph, v) = create_word_graph(&["cat", "dog", "elephant"], &[(0, 1), (1, 2), (0, 2)]);

        assert_eq!(longest_word(&graph, Some(&v[0])), "elephant");
        assert_eq!(longest_word(&graph, Some(&v[1])), "elephant");
    }

    #[test]
    fn longest_word_absent_start() {
        let (graph, _) = create_word_graph(&["cat"], &[]);

        assert_eq!(longest_word(&graph, None), "");
        assert_eq!(longest_word(&graph, Some(&VertexId(4))), "");

        let longest = LongestWord::on(&graph).run();
        assert_eq!(longest.vertex(), None);
        assert_eq!(longest.len_utf16(), 0);
    }

    #[test]
    fn longest_word_includes_start() {
        let (graph, v) = create_word_graph(&["hippopotamus", "ox", "cow"], &[(0, 1), (1, 2)]);

        let longest = LongestWord::on(&graph).from(&v[0]).run();
        assert_eq!(longest.vertex(), Some(&v[0]));
        assert_eq!(longest.len_utf16(), 12);
        assert_eq!(longest.word(&graph), "hippopotamus");
    }

    #[test]
    fn longest_word_tie_first_in_preorder() {
        // Pre-order from "a": a, bbb (via first neighbor), ddd, ccc.
        let (graph, v) = create_word_graph(&["a", "bbb", "ccc", "ddd"], &[(0, 1), (0, 2), (1, 3)]);

        let longest = LongestWord::on(&graph).from(&v[0]).run();
        assert_eq!(longest.vertex(), Some(&v[1]));

        // The start is kept over a later word of the same length.
        let longest = LongestWord::on(&graph).from(&v[1]).run();
        assert_eq!(longest.vertex(), Some(&v[1]));
    }

    #[test]
    fn longest_word_tie_order_is_subtree_first() {
        // The "bb" subtree is visited fully before "abcd", the second
        // neighbor of the start, so "wxyz" deep in the first subtree wins.
        let (graph, v) = create_word_graph(&["s", "bb", "abcd", "wxyz"], &[(0, 1), (0, 2), (1, 3)]);

        assert_eq!(longest_word(&graph, Some(&v[0])), "wxyz");
    }

    #[test]
    fn longest_word_counts_utf16_units() {
        // Two characters, but four UTF-16 code units.
        let (graph, v) = create_word_graph(&["abc", "𝕏𝕏"], &[(0, 1)]);

        let longest = LongestWord::on(&graph).from(&v[0]).run();
        assert_eq!(longest.word(&graph), "𝕏𝕏");
        assert_eq!(longest.len_utf16(), 4);
    }

    #[test]
    fn longest_word_on_cycle() {
        let (graph, v) = create_cycle(["one", "three", "seven", "eleven"]);

        assert_eq!(longest_word(&graph, Some(&v[2])), "eleven");
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_longest_word_first_maximum(graph in vertex_graph("[a-z]{0,6}"), start: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 0);

            let start = VertexId(start % n);
            let order = recursive_preorder(&graph, &start);
            let max_len = order.iter().map(|id| graph[*id].len()).max().unwrap();
            let expected = order.iter().find(|id| graph[**id].len() == max_len).unwrap();

            let longest = LongestWord::on(&graph).from(&start).run();
            prop_assert_eq!(longest.vertex(), Some(expected));
            prop_assert_eq!(longest.len_utf16(), max_len);
        }
    }
}
