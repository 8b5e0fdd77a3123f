//! Domain-specific graphs built on top of the generic storages.

pub mod airport;

#[doc(inline)]
pub use airport::{Airport, AirportId, AirportNetwork};
