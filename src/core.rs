//! Core traits shared by all graph representations.
//!
//! The traversal algorithms are written against these traits only, so the
//! same algorithm runs on an arena storage, a flight network wrapper or a
//! plain adjacency map.

pub mod error;
pub mod id;

mod base;
mod neighbors;
mod vertices;

pub use base::*;
pub use neighbors::*;
pub use vertices::*;
