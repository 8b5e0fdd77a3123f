//! Depth-first traversal queries over directed graphs.
//!
//! The graphs are word graphs ([`VertexGraph`](storage::VertexGraph) holding
//! strings), flight networks ([`AirportNetwork`](domain::AirportNetwork)) and
//! plain adjacency maps (`HashMap<V, Vec<V>>`). All queries are built on a
//! single iterative pre-order [depth-first search](visit::Dfs), so they
//! terminate on cycles and are not limited by the size of the program stack.
//!
//! # Examples
//!
//! ```
//! use trek::{algo::LongestWord, storage::VertexGraph};
//!
//! let mut graph = VertexGraph::new();
//!
//! let cat = graph.add_vertex("cat");
//! let dog = graph.add_vertex("dog");
//! let elephant = graph.add_vertex("elephant");
//!
//! graph.extend_with_neighbors([(cat, dog), (dog, elephant), (cat, elephant)]);
//!
//! let longest = LongestWord::on(&graph).from(&cat).run();
//! assert_eq!(longest.word(&graph), "elephant");
//! ```

pub mod algo;
pub mod core;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{GraphBase, Neighbors, VertexSet, Vertices},
        visit::Visitor,
    };
}

pub mod derive {
    pub use trek_derive::*;
}

#[cfg(test)]
mod tests {
    use trek_derive::*;

    use crate::{
        core::{GraphBase, Neighbors, VertexSet, Vertices},
        storage::VertexGraph,
    };

    // Test hygiene of the custom derive macros.
    #[derive(Clone, GraphBase, Neighbors, VertexSet, Vertices)]
    #[trek_crate]
    struct TestWrapper<V> {
        #[graph]
        graph: VertexGraph<V>,
    }

    fn require_graph_base(_: impl GraphBase) {}
    fn require_neighbors(_: impl Neighbors) {}
    fn require_vertex_set(_: impl VertexSet) {}
    fn require_vertices(_: impl Vertices) {}

    #[test]
    fn trait_impl() {
        let mut g = TestWrapper {
            graph: VertexGraph::<u8>::new(),
        };

        require_graph_base(g.clone());
        require_graph_base(&g);
        require_graph_base(&mut g);

        require_neighbors(g.clone());
        require_neighbors(&g);
        require_neighbors(&mut g);

        require_vertex_set(g.clone());
        require_vertex_set(&g);
        require_vertex_set(&mut g);

        require_vertices(g.clone());
        require_vertices(&g);
        require_vertices(&mut g);
    }
}
