//! Test whether there is a path from one vertex to another.
//!
//! # Examples
//!
//! ```
//! use trek::{
//!     algo::can_reach,
//!     domain::{Airport, AirportNetwork},
//! };
//!
//! let mut network = AirportNetwork::new();
//!
//! let prg = network.add_airport(Airport::new("PRG", "Prague"));
//! let vie = network.add_airport(Airport::new("VIE", "Vienna"));
//! let muc = network.add_airport(Airport::new("MUC", "Munich"));
//!
//! network.add_flight(&prg, &vie);
//! network.add_flight(&vie, &muc);
//!
//! assert!(can_reach(&network, Some(&prg), Some(&muc)));
//! assert!(!can_reach(&network, Some(&muc), Some(&prg)));
//! assert!(!can_reach(&network, None, Some(&prg)));
//! ```

use crate::{
    core::{GraphBase, Neighbors, VertexSet},
    visit::{Dfs, VisitSet, Visitor},
};

use super::present_start;

/// Result of the reachability test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    reachable: bool,
}

impl Reach {
    pub fn is(&self) -> bool {
        self.reachable
    }
}

/// Builder for [`Reach`].
pub struct ReachBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    between: Option<(Option<&'a G::VertexId>, Option<&'a G::VertexId>)>,
}

impl Reach {
    pub fn on<G>(graph: &G) -> ReachBuilder<'_, G>
    where
        G: GraphBase,
    {
        ReachBuilder {
            graph,
            between: None,
        }
    }
}

impl<'a, G> ReachBuilder<'a, G>
where
    G: GraphBase,
{
    /// The endpoints of the path to look for.
    pub fn between(self, start: &'a G::VertexId, destination: &'a G::VertexId) -> Self {
        self.between_options(Some(start), Some(destination))
    }

    fn between_options(
        self,
        start: Option<&'a G::VertexId>,
        destination: Option<&'a G::VertexId>,
    ) -> Self {
        Self {
            between: Some((start, destination)),
            ..self
        }
    }

    /// Runs the test.
    ///
    /// The start must be a vertex of the graph. The destination does not
    /// need to be one as long as some reachable vertex lists it as a
    /// neighbor.
    pub fn run(self) -> Reach
    where
        G: Neighbors + VertexSet,
    {
        let graph = self.graph;

        let (start, destination) = match self.between {
            Some((start, Some(destination))) => match present_start(graph, start) {
                Some(start) => (start, destination),
                None => return Reach { reachable: false },
            },
            _ => return Reach { reachable: false },
        };

        if start == destination {
            return Reach { reachable: true };
        }

        let mut dfs = Dfs::new(graph);
        let reachable = dfs
            .start(start.clone())
            .walk(graph)
            .any(|vertex| &vertex == destination);

        tracing::debug!(
            ?start,
            ?destination,
            reachable,
            visited = dfs.visited().visited_count(),
            "reachability tested"
        );

        Reach { reachable }
    }
}

/// Returns `true` if there is a path of zero or more edges from `start` to
/// `destination`, `false` if there is none or either of them is absent.
pub fn can_reach<G>(
    graph: &G,
    start: Option<&G::VertexId>,
    destination: Option<&G::VertexId>,
) -> bool
where
    G: Neighbors + VertexSet,
{
    Reach::on(graph).between_options(start, destination).run().is()
}
