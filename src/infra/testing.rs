//! Helpers for building graphs and reference implementations used in tests.

use rustc_hash::FxHashSet;

use crate::{
    core::{id::VertexId, Neighbors},
    storage::VertexGraph,
};

/// Creates a path `v0 -> v1 -> ... -> vn` over the given values.
pub fn create_path<V, I>(values: I) -> (VertexGraph<V>, Vec<VertexId>)
where
    I: IntoIterator<Item = V>,
{
    let mut graph = VertexGraph::new();
    let vertices = graph.extend_with_vertices(values);

    for pair in vertices.windows(2) {
        graph.add_neighbor(&pair[0], &pair[1]);
    }

    (graph, vertices)
}

/// Creates a cycle `v0 -> v1 -> ... -> vn -> v0` over the given values.
pub fn create_cycle<V, I>(values: I) -> (VertexGraph<V>, Vec<VertexId>)
where
    I: IntoIterator<Item = V>,
{
    let (mut graph, vertices) = create_path(values);

    if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
        graph.add_neighbor(last, first);
    }

    (graph, vertices)
}

/// Creates a word graph from the words and `(from, to)` pairs of indices into
/// the words.
///
/// # Panics
///
/// Panics if an index is out of bounds.
pub fn create_word_graph(
    words: &[&str],
    neighbors: &[(usize, usize)],
) -> (VertexGraph<String>, Vec<VertexId>) {
    let mut graph = VertexGraph::with_capacity(words.len());
    let vertices = graph.extend_with_vertices(words.iter().map(|word| word.to_string()));

    for &(from, to) in neighbors {
        graph.add_neighbor(&vertices[from], &vertices[to]);
    }

    (graph, vertices)
}

/// Straightforward recursive pre-order traversal.
///
/// Serves as the reference the iterative traversal is checked against. Not
/// suitable for deep graphs.
pub fn recursive_preorder<G>(graph: &G, start: &G::VertexId) -> Vec<G::VertexId>
where
    G: Neighbors,
{
    fn recurse<G: Neighbors>(
        graph: &G,
        vertex: &G::VertexId,
        visited: &mut FxHashSet<G::VertexId>,
        order: &mut Vec<G::VertexId>,
    ) {
        if !visited.insert(vertex.clone()) {
            return;
        }

        order.push(vertex.clone());

        for neighbor in graph.neighbors(vertex) {
            recurse(graph, &neighbor, visited, order);
        }
    }

    let mut visited = FxHashSet::default();
    let mut order = Vec::new();
    recurse(graph, start, &mut visited, &mut order);
    order
}
