//! Approximate graph edit distance.
//!
//! Both graphs are padded with isolated vertices to the same size, every pattern
//! vertex is assigned to a host vertex by solving the assignment problem on degree
//! differences, and the distance is the number of vertex pairs whose adjacency differs
//! under that assignment plus the number of padding vertices matched to real ones.
//! This is an upper bound on the edit distance, used for reporting only.

use crate::{graph::Graph, types::VId};
use derive_more::Display;
use log::debug;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display(fmt = "{}", estimate)]
pub struct Distance {
    /// `assignment[i]` is the (padded) host vertex of (padded) pattern vertex `i`.
    assignment: Vec<VId>,
    edge_mismatches: usize,
    vertex_mismatches: usize,
    estimate: usize,
}

impl Distance {
    pub fn assignment(&self) -> &[VId] {
        &self.assignment
    }

    pub fn edge_mismatches(&self) -> usize {
        self.edge_mismatches
    }

    pub fn vertex_mismatches(&self) -> usize {
        self.vertex_mismatches
    }

    pub fn estimate(&self) -> usize {
        self.estimate
    }
}

pub fn estimate_distance(pattern: &Graph, host: &Graph) -> Distance {
    let n = pattern.num_vertices().max(host.num_vertices());
    let degree = |g: &Graph, v: VId| if v < g.num_vertices() { g.degree(v) } else { 0 };
    let is_padding = |g: &Graph, v: VId| v >= g.num_vertices();
    let cost: Vec<Vec<i64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let diff = degree(pattern, i) as i64 - degree(host, j) as i64;
                    diff.abs() + (is_padding(pattern, i) != is_padding(host, j)) as i64
                })
                .collect()
        })
        .collect();
    let assignment = hungarian(&cost);
    let mut edge_mismatches = 0;
    for i in 0..n {
        for k in i + 1..n {
            if pattern.has_edge(i, k) != host.has_edge(assignment[i], assignment[k]) {
                edge_mismatches += 1;
            }
        }
    }
    let vertex_mismatches = (0..n)
        .filter(|&i| is_padding(pattern, i) != is_padding(host, assignment[i]))
        .count();
    debug!(
        "distance: {} edge and {} vertex mismatches",
        edge_mismatches, vertex_mismatches
    );
    Distance {
        assignment,
        edge_mismatches,
        vertex_mismatches,
        estimate: edge_mismatches + vertex_mismatches,
    }
}

/// Minimum-cost perfect assignment of rows to columns of a square matrix.
///
/// Kuhn-Munkres with row and column potentials, O(n^3). Returns the column of each row.
fn hungarian(cost: &[Vec<i64>]) -> Vec<usize> {
    let n = cost.len();
    // 1-based; index 0 is the virtual column
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; n + 1];
    let mut row_of = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];
    for i in 1..=n {
        row_of[0] = i;
        let mut j0 = 0;
        let mut min_v = vec![i64::MAX; n + 1];
        let mut visited = vec![false; n + 1];
        loop {
            visited[j0] = true;
            let i0 = row_of[j0];
            let mut delta = i64::MAX;
            let mut j1 = 0;
            for j in 1..=n {
                if visited[j] {
                    continue;
                }
                let reduced = cost[i0 - 1][j - 1] - u[i0] - v[j];
                if reduced < min_v[j] {
                    min_v[j] = reduced;
                    way[j] = j0;
                }
                if min_v[j] < delta {
                    delta = min_v[j];
                    j1 = j;
                }
            }
            for j in 0..=n {
                if visited[j] {
                    u[row_of[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_v[j] -= delta;
                }
            }
            j0 = j1;
            if row_of[j0] == 0 {
                break;
            }
        }
        loop {
            let j1 = way[j0];
            row_of[j0] = row_of[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }
    let mut assignment = vec![0; n];
    for j in 1..=n {
        assignment[row_of[j] - 1] = j - 1;
    }
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hungarian() {
        let cost = vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]];
        let assignment = hungarian(&cost);
        let total: i64 = assignment.iter().enumerate().map(|(i, &j)| cost[i][j]).sum();
        assert_eq!(total, 5);
        assert_eq!(assignment, vec![1, 0, 2]);
        assert_eq!(hungarian(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_identical() {
        let g = Graph::from_edges(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
        let d = estimate_distance(&g, &g);
        assert_eq!(d.estimate(), 0);
        assert_eq!(d.to_string(), "0");
    }

    #[test]
    fn test_missing_edge() {
        let triangle = Graph::from_edges(3, vec![(0, 1), (1, 2), (0, 2)]).unwrap();
        let path = Graph::from_edges(3, vec![(0, 1), (1, 2)]).unwrap();
        let d = estimate_distance(&triangle, &path);
        assert_eq!(d.edge_mismatches(), 1);
        assert_eq!(d.vertex_mismatches(), 0);
        assert_eq!(estimate_distance(&path, &triangle).estimate(), 1);
    }

    #[test]
    fn test_padding() {
        let edge = Graph::from_edges(2, vec![(0, 1)]).unwrap();
        let path = Graph::from_edges(3, vec![(0, 1), (1, 2)]).unwrap();
        let d = estimate_distance(&edge, &path);
        let mut columns = d.assignment().to_vec();
        columns.sort();
        assert_eq!(columns, vec![0, 1, 2]);
        assert_eq!(d.vertex_mismatches(), 1);
        assert!(d.edge_mismatches() >= 1);
        assert_eq!(d.estimate(), d.edge_mismatches() + 1);
    }
}
