//! [Proptest](https://docs.rs/proptest) strategies for generating graphs.

use std::{collections::HashMap, fmt, hash::Hash};

use proptest::{collection, prelude::*};

use crate::{core::id::VertexId, storage::VertexGraph};

/// Parameters of the generated graphs.
#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_vertices: usize,
    max_neighbors: usize,
}

impl StrategyParams {
    /// Sets the upper bound on the number of vertices.
    pub fn max_vertices(self, max_vertices: usize) -> Self {
        Self {
            max_vertices,
            ..self
        }
    }

    /// Sets the upper bound on the number of neighbors of a single vertex.
    pub fn max_neighbors(self, max_neighbors: usize) -> Self {
        Self {
            max_neighbors,
            ..self
        }
    }
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_vertices: 32,
            max_neighbors: 4,
        }
    }
}

/// Generates a [`VertexGraph`] including self-loops, cycles and duplicate
/// neighbors.
pub fn vertex_graph<V>(vertex: V) -> impl Strategy<Value = VertexGraph<V::Value>>
where
    V: Strategy,
    V::Value: Clone + fmt::Debug,
{
    vertex_graph_with_params(vertex, StrategyParams::default())
}

pub fn vertex_graph_with_params<V>(
    vertex: V,
    params: StrategyParams,
) -> impl Strategy<Value = VertexGraph<V::Value>>
where
    V: Strategy,
    V::Value: Clone + fmt::Debug,
{
    let max_neighbors = params.max_neighbors;

    collection::vec(vertex, 0..=params.max_vertices).prop_flat_map(move |values| {
        let n = values.len();
        let neighbors = collection::vec(
            collection::vec(0..n.max(1), 0..=max_neighbors),
            n,
        );

        (Just(values), neighbors).prop_map(|(values, neighbors)| {
            let mut graph = VertexGraph::with_capacity(values.len());
            let vertices = graph.extend_with_vertices(values);

            for (from, list) in vertices.iter().zip(neighbors) {
                for to in list {
                    graph.add_neighbor(from, &VertexId::from(to));
                }
            }

            graph
        })
    })
}

/// Generates an adjacency map whose neighbor lists may refer to values that
/// are not keys.
pub fn adjacency_map<V>(vertex: V) -> impl Strategy<Value = HashMap<V::Value, Vec<V::Value>>>
where
    V: Strategy + Clone,
    V::Value: Eq + Hash + Clone + fmt::Debug,
{
    let params = StrategyParams::default();

    collection::hash_map(
        vertex.clone(),
        collection::vec(vertex, 0..=params.max_neighbors),
        0..=params.max_vertices,
    )
}
