//! Depth-first graph traversal.
//!
//! [`Dfs`] keeps its own stack instead of recursing. A traversal can be
//! paused and resumed at any vertex, and a long chain of vertices does not
//! exhaust the program stack.
//!
//! The visiting order is fixed: pre-order, with neighbors explored in the
//! order the graph stores them. It is the order of the recursive
//! formulation, and [`LongestWord`](crate::algo::LongestWord) breaks ties
//! by it.

pub mod dfs;
mod visit_set;

#[doc(inline)]
pub use self::{
    dfs::{Dfs, DfsRooted},
    visit_set::{ArenaVisitSet, VisitSet},
};

/// A traversal that yields one element of a graph at a time.
///
/// The visitor does not borrow the graph. The graph is passed to every
/// [`visit_next`](Visitor::visit_next) call instead, so the traversal state
/// can be kept and resumed independently.
pub trait Visitor<G> {
    type Item;

    /// Advances the traversal, `None` once it is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use trek::{
    ///     storage::VertexGraph,
    ///     visit::{Dfs, Visitor},
    /// };
    ///
    /// let mut graph = VertexGraph::new();
    ///
    /// let [a, b, c, d] = ["a", "b", "c", "d"].map(|word| graph.add_vertex(word));
    /// graph.extend_with_neighbors([(a, b), (a, d), (b, c), (c, a)]);
    ///
    /// let mut dfs = Dfs::new(&graph);
    /// let mut visitor = dfs.start(a);
    ///
    /// let mut order = Vec::new();
    /// while let Some(vertex) = visitor.visit_next(&graph) {
    ///     order.push(graph[vertex]);
    /// }
    ///
    /// assert_eq!(order, ["a", "b", "c", "d"]);
    /// ```
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Turns the visitor into an [`Iterator`] over the graph.
    ///
    /// Call it on `&mut visitor` to keep using the visitor once the iterator
    /// is dropped.
    fn walk(self, graph: &G) -> Walk<'_, Self, G>
    where
        Self: Sized,
    {
        Walk {
            visitor: self,
            graph,
        }
    }
}

impl<G, V> Visitor<G> for &mut V
where
    V: Visitor<G> + ?Sized,
{
    type Item = V::Item;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        (**self).visit_next(graph)
    }
}

/// Iterator returned from [`Visitor::walk`].
pub struct Walk<'g, V, G> {
    visitor: V,
    graph: &'g G,
}

impl<V, G> Iterator for Walk<'_, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}
