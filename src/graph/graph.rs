use crate::{
    error::{Error, Result},
    types::{normalize, Edge, VId},
};
use log::trace;

/// An undirected simple graph.
///
/// Vertices are the contiguous ids `0..num_vertices()`. Every edge is stored twice:
/// once in the adjacency lists and once in a dense row-major matrix, so that
/// [`has_edge`](struct.Graph.html#method.has_edge) is a single lookup.
///
/// The graph never changes after construction, except through
/// [`add_edges`](struct.Graph.html#method.add_edges), which materializes candidate
/// host graphs during the extension search.
#[derive(Clone)]
pub struct Graph {
    num_vertices: usize,
    num_edges: usize,
    adj: Vec<Vec<VId>>,
    matrix: Vec<bool>,
}

impl Graph {
    /// Create a graph with `num_vertices` isolated vertices.
    pub fn with_vertices(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            num_edges: 0,
            adj: vec![vec![]; num_vertices],
            matrix: vec![false; num_vertices * num_vertices],
        }
    }

    /// Create a graph from a row-major `n * n` adjacency matrix of 0/1 values.
    ///
    /// Fails with [`Error::MalformedGraph`](../error/enum.Error.html) if the number of
    /// values does not match `n`, a value is neither 0 nor 1, the diagonal is not zero,
    /// or the matrix is not symmetric.
    pub fn from_matrix(n: usize, values: &[u8]) -> Result<Self> {
        if values.len() != n * n {
            return Err(malformed(format!(
                "expected {} matrix entries for {} vertices, found {}",
                n * n,
                n,
                values.len()
            )));
        }
        if let Some(pos) = values.iter().position(|&x| x > 1) {
            return Err(malformed(format!(
                "entry ({}, {}) is {}, expected 0 or 1",
                pos / n,
                pos % n,
                values[pos]
            )));
        }
        for i in 0..n {
            if values[i * n + i] != 0 {
                return Err(malformed(format!("self-loop at vertex {}", i)));
            }
            for j in i + 1..n {
                if values[i * n + j] != values[j * n + i] {
                    return Err(malformed(format!(
                        "matrix is not symmetric at ({}, {}): {} vs {}",
                        i,
                        j,
                        values[i * n + j],
                        values[j * n + i]
                    )));
                }
            }
        }
        let mut adj = vec![vec![]; n];
        let mut num_edges = 0;
        for i in 0..n {
            for j in 0..n {
                if values[i * n + j] == 1 {
                    adj[i].push(j);
                    if i < j {
                        num_edges += 1;
                    }
                }
            }
        }
        let graph = Self {
            num_vertices: n,
            num_edges,
            adj,
            matrix: values.iter().map(|&x| x == 1).collect(),
        };
        graph.check()?;
        Ok(graph)
    }

    /// Create a graph from an edge list.
    ///
    /// Out-of-range endpoints, self-loops and duplicate edges are rejected.
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::with_vertices(num_vertices);
        for (u, v) in edges {
            if u >= num_vertices || v >= num_vertices {
                return Err(malformed(format!(
                    "edge ({}, {}) is out of range for {} vertices",
                    u, v, num_vertices
                )));
            }
            if u == v {
                return Err(malformed(format!("self-loop at vertex {}", u)));
            }
            if graph.has_edge(u, v) {
                return Err(malformed(format!("duplicate edge ({}, {})", u, v)));
            }
            graph.insert_edge(u, v);
        }
        graph.check()?;
        Ok(graph)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn degree(&self, v: VId) -> usize {
        self.adj[v].len()
    }

    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns `false` for out-of-range vertices.
    #[inline]
    pub fn has_edge(&self, u: VId, v: VId) -> bool {
        u < self.num_vertices && v < self.num_vertices && self.matrix[u * self.num_vertices + v]
    }

    pub fn neighbors(&self, v: VId) -> &[VId] {
        &self.adj[v]
    }

    pub fn vertices(&self) -> std::ops::Range<VId> {
        0..self.num_vertices
    }

    /// Every edge once, as `(u, v)` with `u < v`, in ascending order.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            graph: self,
            u: 0,
            v: 0,
        }
    }

    /// The adjacency matrix as rows of 0/1 values.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.matrix
            .chunks(self.num_vertices.max(1))
            .take(self.num_vertices)
            .map(|row| row.iter().map(|&x| x as u8).collect())
            .collect()
    }

    /// Clone this graph and append `k` isolated vertices.
    ///
    /// The matrix is resized and zero-padded. Fails with
    /// [`Error::AllocationFailure`](../error/enum.Error.html) instead of aborting
    /// when the enlarged matrix cannot be allocated.
    pub fn extended(&self, k: usize) -> Result<Self> {
        let too_large = || Error::AllocationFailure { bytes: usize::MAX };
        let n = self.num_vertices.checked_add(k).ok_or_else(too_large)?;
        let size = n.checked_mul(n).ok_or_else(too_large)?;
        let mut matrix = Vec::new();
        matrix
            .try_reserve_exact(size)
            .map_err(|_| Error::AllocationFailure {
                bytes: size * std::mem::size_of::<bool>(),
            })?;
        for row in self.matrix.chunks(self.num_vertices.max(1)).take(self.num_vertices) {
            matrix.extend_from_slice(row);
            matrix.resize(matrix.len() + k, false);
        }
        matrix.resize(size, false);
        let mut adj = Vec::new();
        adj.try_reserve_exact(n)
            .map_err(|_| Error::AllocationFailure {
                bytes: n * std::mem::size_of::<Vec<VId>>(),
            })?;
        adj.extend(self.adj.iter().cloned());
        adj.resize(n, vec![]);
        Ok(Self {
            num_vertices: n,
            num_edges: self.num_edges,
            adj,
            matrix,
        })
    }

    /// Add edges in place and return how many were actually added.
    ///
    /// Pairs that are already connected, out of range or self-loops are skipped.
    pub fn add_edges<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut added = 0;
        for (u, v) in pairs {
            if u == v || u >= self.num_vertices || v >= self.num_vertices || self.has_edge(u, v) {
                trace!("skipping edge ({}, {})", u, v);
                continue;
            }
            self.insert_edge(u, v);
            added += 1;
        }
        added
    }
}

// private methods
impl Graph {
    fn insert_edge(&mut self, u: VId, v: VId) {
        let n = self.num_vertices;
        self.matrix[u * n + v] = true;
        self.matrix[v * n + u] = true;
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.num_edges += 1;
    }

    fn check(&self) -> Result<()> {
        let total: usize = self.adj.iter().map(Vec::len).sum();
        if total != 2 * self.num_edges {
            return Err(malformed(format!(
                "edge count {} does not match adjacency size {}",
                self.num_edges, total
            )));
        }
        Ok(())
    }
}

fn malformed(message: String) -> Error {
    Error::MalformedGraph(message)
}

/// An iterator over the edges of a graph.
pub struct Edges<'a> {
    graph: &'a Graph,
    u: VId,
    v: VId,
}

impl<'a> Iterator for Edges<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.graph.num_vertices;
        while self.u < n {
            self.v += 1;
            if self.v >= n {
                self.u += 1;
                self.v = self.u;
                continue;
            }
            if self.graph.matrix[self.u * n + self.v] {
                return Some(normalize(self.u, self.v));
            }
        }
        None
    }
}

/// Graphs are equal when they have the same vertices and edges, whatever the order
/// of their adjacency lists.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.num_vertices == other.num_vertices
            && self.num_edges == other.num_edges
            && self.matrix == other.matrix
    }
}

impl Eq for Graph {}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph {{ num_vertices: {}, num_edges: {} }}",
            self.num_vertices, self.num_edges
        )
    }
}

/// Writes the adjacency-matrix text format.
impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.num_vertices)?;
        for u in self.vertices() {
            for v in self.vertices() {
                if v > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.has_edge(u, v) as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
