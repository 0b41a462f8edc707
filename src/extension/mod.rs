//! Minimal extensions of a host graph.
//!
//! An [`Extension`](struct.Extension.html) lists the vertices and edges that have to be
//! added to a host graph *H* so that a pattern graph *G* becomes a subgraph of it.
//! Two strategies compute one: [`exact_minimal_extension`](fn.exact_minimal_extension.html)
//! is exhaustive and returns a minimum-cost extension, and
//! [`greedy_extension`](fn.greedy_extension.html) derives one from a single greedy
//! vertex mapping.

pub use exact::{exact_minimal_extension, ExactSearch};
pub use greedy::{greedy_extension, GreedySearch, GreedyWeights, VertexOrder};

use crate::{
    error::Result,
    graph::Graph,
    types::{Edge, VId},
};
use derive_more::Display;

mod exact;
mod greedy;

/// The image of a pattern vertex in the host graph.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Image {
    /// A vertex already in the host graph.
    #[display(fmt = "H[{}]", _0)]
    Existing(VId),
    /// The `i`-th vertex that has to be added to the host graph.
    #[display(fmt = "new vertex {}", _0)]
    Virtual(usize),
}

impl Image {
    /// The vertex id in the extended host graph.
    pub fn resolve(self, num_host_vertices: usize) -> VId {
        match self {
            Image::Existing(v) => v,
            Image::Virtual(i) => num_host_vertices + i,
        }
    }
}

/// Vertices and edges to add to a host graph.
///
/// New vertices are numbered contiguously after the host's vertices. No new edge
/// duplicates an edge of the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    new_vertices: Vec<VId>,
    new_edges: Vec<Edge>,
    mapping: Option<Vec<Image>>,
}

impl Extension {
    /// An extension adding `num_new_vertices` vertices after `num_host_vertices`
    /// and the given edges.
    pub fn new(num_host_vertices: usize, num_new_vertices: usize, new_edges: Vec<Edge>) -> Self {
        Self {
            new_vertices: (num_host_vertices..num_host_vertices + num_new_vertices).collect(),
            new_edges,
            mapping: None,
        }
    }

    pub(crate) fn with_mapping(mut self, mapping: Vec<Image>) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn new_vertices(&self) -> &[VId] {
        &self.new_vertices
    }

    pub fn new_edges(&self) -> &[Edge] {
        &self.new_edges
    }

    /// The pattern-to-host mapping the extension was derived from, if the strategy
    /// produces one.
    pub fn mapping(&self) -> Option<&[Image]> {
        self.mapping.as_deref()
    }

    /// `|new vertices| + |new edges|`.
    pub fn cost(&self) -> usize {
        self.new_vertices.len() + self.new_edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost() == 0
    }

    /// Materializes the extended host graph.
    pub fn apply(&self, host: &Graph) -> Result<Graph> {
        let mut extended = host.extended(self.new_vertices.len())?;
        extended.add_edges(self.new_edges.iter().copied());
        Ok(extended)
    }
}
