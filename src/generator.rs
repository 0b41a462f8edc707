//! Graph generators.

use crate::{
    error::{Error, Result},
    graph::Graph,
};
use rand::Rng;
use std::str::FromStr;

/// The families of graphs the generator knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    Path,
    Cycle,
    Complete,
    /// Random connected graph with the given number of edges.
    Random { edges: usize },
}

impl GraphKind {
    /// Parses a kind name; `edges` is required for `random` only.
    pub fn new(name: &str, edges: Option<usize>) -> Result<Self> {
        match (name, edges) {
            ("random", Some(edges)) => Ok(GraphKind::Random { edges }),
            ("random", None) => Err(Error::InvalidArgument(String::from(
                "random graphs need an edge count",
            ))),
            (name, _) => name.parse(),
        }
    }

    pub fn generate<R: Rng>(self, n: usize, rng: &mut R) -> Result<Graph> {
        match self {
            GraphKind::Path => path(n),
            GraphKind::Cycle => cycle(n),
            GraphKind::Complete => complete(n),
            GraphKind::Random { edges } => random_connected(n, edges, rng),
        }
    }
}

impl FromStr for GraphKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "path" => Ok(GraphKind::Path),
            "cycle" => Ok(GraphKind::Cycle),
            "complete" => Ok(GraphKind::Complete),
            _ => Err(Error::InvalidArgument(format!("unknown graph type {}", s))),
        }
    }
}

pub fn path(n: usize) -> Result<Graph> {
    Graph::from_edges(n, (1..n).map(|i| (i - 1, i)))
}

/// A cycle on `n` vertices; below 3 vertices this is a path.
pub fn cycle(n: usize) -> Result<Graph> {
    let closing = if n >= 3 { Some((n - 1, 0)) } else { None };
    Graph::from_edges(n, (1..n).map(|i| (i - 1, i)).chain(closing))
}

pub fn complete(n: usize) -> Result<Graph> {
    Graph::from_edges(n, (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))))
}

/// A uniformly grown random spanning tree plus random extra edges, `k` edges in total.
///
/// Requires `n - 1 <= k <= n(n - 1) / 2`.
pub fn random_connected<R: Rng>(n: usize, k: usize, rng: &mut R) -> Result<Graph> {
    let max_edges = n * n.saturating_sub(1) / 2;
    if k < n.saturating_sub(1) || k > max_edges {
        return Err(Error::InvalidArgument(format!(
            "a connected graph on {} vertices has between {} and {} edges, not {}",
            n,
            n.saturating_sub(1),
            max_edges,
            k
        )));
    }
    let mut graph = Graph::with_vertices(n);
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        graph.add_edges(std::iter::once((parent, i)));
    }
    while graph.num_edges() < k {
        let (u, v) = (rng.gen_range(0..n), rng.gen_range(0..n));
        graph.add_edges(std::iter::once((u, v)));
    }
    Ok(graph)
}
