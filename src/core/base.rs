use super::id::IdType;

/// The base of every graph: the type that identifies its vertices.
pub trait GraphBase {
    type VertexId: IdType;

    /// Returns the number of vertices if it can be determined cheaply.
    ///
    /// Used to preallocate the visited set of a traversal.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }
}

macro_rules! deref_graph_base {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase,
        {
            type VertexId = G::VertexId;

            fn vertex_count_hint(&self) -> Option<usize> {
                (**self).vertex_count_hint()
            }
        }
    }
}

deref_graph_base!(&);
deref_graph_base!(&mut);
