//! Graph representations.

pub mod adj_map;
pub mod vertex_graph;

#[doc(inline)]
pub use self::{
    adj_map::adjacency_map,
    vertex_graph::{Vertex, VertexGraph, VertexIds},
};
