//! Subgraph isomorphism and minimal graph extension.
//!
//! Given a pattern graph *G* and a host graph *H*, decides whether *G* is
//! isomorphic to a subgraph of *H* and, when it is not, computes the vertices and
//! edges that have to be added to *H* so that it becomes one.

pub mod distance;
pub mod error;
pub mod extension;
pub mod generator;
pub mod graph;
pub mod isomorphism;
pub mod report;
pub mod types;

pub use extension::{exact_minimal_extension, greedy_extension, Extension};
pub use graph::Graph;
pub use isomorphism::is_subgraph_isomorphic;
