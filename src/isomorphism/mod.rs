//! Subgraph isomorphism.
//!
//! A pattern graph *G* embeds into a host graph *H* if there is an injective mapping
//! from the vertices of *G* to the vertices of *H* such that every edge of *G* maps to
//! an edge of *H*. The embedding is not induced: *H* may have extra edges between
//! mapped vertices.
//!
//! The search is a depth-first backtracking over partial mappings. Candidates are
//! restricted to the frontier of the region mapped so far, and every candidate is
//! pruned by degree, adjacency consistency and a one-step neighborhood look-ahead.

use crate::{graph::Graph, types::VId};
use log::debug;
use state::Matcher;

mod state;

/// A complete mapping; entry `i` is the host vertex of pattern vertex `i`.
pub type Embedding = Vec<VId>;

/// Returns `true` if `pattern` is isomorphic to a subgraph of `host`.
pub fn is_subgraph_isomorphic(pattern: &Graph, host: &Graph) -> bool {
    find_embedding(pattern, host).is_some()
}

/// Finds an embedding of `pattern` into `host`.
pub fn find_embedding(pattern: &Graph, host: &Graph) -> Option<Embedding> {
    if host.num_vertices() < pattern.num_vertices() {
        return None;
    }
    let mut matcher = Matcher::new(pattern, host);
    let embedding = matcher.run();
    debug!(
        "subgraph isomorphism {:?} -> {:?}: {} after {} states",
        pattern,
        host,
        if embedding.is_some() { "found" } else { "none" },
        matcher.num_states()
    );
    embedding
}

/// Checks that `mapping` is an embedding of `pattern` into `host`.
pub fn verify_embedding(pattern: &Graph, host: &Graph, mapping: &[VId]) -> bool {
    if mapping.len() != pattern.num_vertices() {
        return false;
    }
    let mut used = vec![false; host.num_vertices()];
    for &h in mapping {
        if h >= host.num_vertices() || std::mem::replace(&mut used[h], true) {
            return false;
        }
    }
    pattern
        .edges()
        .all(|(u, v)| host.has_edge(mapping[u], mapping[v]))
}
