//! Various types shared by the graph store and the searches.

/// The vertex id type.
pub type VId = usize;

/// An undirected edge, usually stored with the smaller endpoint first.
pub type Edge = (VId, VId);

/// Orders the endpoints of an undirected edge.
#[inline]
pub fn normalize(u: VId, v: VId) -> Edge {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
