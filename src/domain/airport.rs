use std::fmt;

use crate::{
    core::{error::AddNeighborError, id::VertexId, Neighbors, VertexSet, Vertices},
    storage::VertexGraph,
};

use trek_derive::{GraphBase, Neighbors, VertexSet, Vertices};

/// Identity of an airport within an [`AirportNetwork`].
pub type AirportId = VertexId;

/// An airport identified by its code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Airport {
    code: String,
    name: String,
}

impl Airport {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Directed network of airports connected by flights.
///
/// Each airport keeps its outbound flights in the order they were added.
/// Airports are distinct by identity: adding two airports with the same code
/// yields two different [`AirportId`]s.
#[derive(Debug, Clone, Default, GraphBase, Neighbors, VertexSet, Vertices)]
#[trek_crate]
pub struct AirportNetwork {
    #[graph]
    routes: VertexGraph<Airport>,
}

impl AirportNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_airport(&mut self, airport: Airport) -> AirportId {
        self.routes.add_vertex(airport)
    }

    pub fn try_add_flight(
        &mut self,
        from: &AirportId,
        to: &AirportId,
    ) -> Result<(), AddNeighborError> {
        self.routes.try_add_neighbor(from, to)
    }

    /// # Panics
    ///
    /// Panics if either of the airports is not in the network.
    #[track_caller]
    pub fn add_flight(&mut self, from: &AirportId, to: &AirportId) {
        self.routes.add_neighbor(from, to);
    }

    pub fn airport(&self, id: &AirportId) -> Option<&Airport> {
        self.vertex(id)
    }

    /// Destinations of the flights departing from the airport.
    pub fn outbound_flights(&self, id: &AirportId) -> impl Iterator<Item = AirportId> + '_ {
        self.neighbors(id)
    }

    /// Returns the first airport added with the given code.
    pub fn find_airport(&self, code: &str) -> Option<AirportId> {
        self.routes
            .vertex_ids()
            .find(|id| self.routes[*id].code() == code)
    }

    pub fn airport_count(&self) -> usize {
        self.routes.vertex_count()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::{error::AddNeighborErrorKind, GraphBase};

    use super::*;

    #[test]
    fn outbound_flights_in_insertion_order() {
        let mut network = AirportNetwork::new();

        let prg = network.add_airport(Airport::new("PRG", "Prague"));
        let vie = network.add_airport(Airport::new("VIE", "Vienna"));
        let muc = network.add_airport(Airport::new("MUC", "Munich"));

        network.add_flight(&prg, &vie);
        network.add_flight(&prg, &muc);

        assert_eq!(
            network.outbound_flights(&prg).collect::<Vec<_>>(),
            vec![vie, muc]
        );
        assert_eq!(network.outbound_flights(&vie).count(), 0);
        assert_eq!(network.airport_count(), 3);
    }

    #[test]
    fn derived_traits_delegate() {
        let mut network = AirportNetwork::new();

        let prg = network.add_airport(Airport::new("PRG", "Prague"));
        network.add_flight(&prg, &prg);

        assert_eq!(network.vertex_count_hint(), Some(1));
        assert!(network.contains_vertex(&prg));
        assert!(network.has_self_loop(&prg));
        assert_eq!(network.airport(&prg).map(Airport::name), Some("Prague"));
    }

    #[test]
    fn same_code_distinct_airports() {
        let mut network = AirportNetwork::new();

        let a = network.add_airport(Airport::new("XXX", "First"));
        let b = network.add_airport(Airport::new("XXX", "Second"));

        assert_ne!(a, b);
        assert_eq!(network.find_airport("XXX"), Some(a));
        assert_eq!(network.find_airport("YYY"), None);
    }

    #[test]
    fn flight_to_unknown_airport() {
        let mut network = AirportNetwork::new();
        let prg = network.add_airport(Airport::new("PRG", "Prague"));

        assert_matches!(
            network.try_add_flight(&prg, &AirportId::new(9)),
            Err(AddNeighborError {
                kind: AddNeighborErrorKind::DestinationAbsent,
                ..
            })
        );
    }

    #[test]
    fn display_is_code() {
        assert_eq!(Airport::new("BRQ", "Brno").to_string(), "BRQ");
    }
}
