use super::Extension;
use crate::{
    error::Result,
    graph::Graph,
    isomorphism::is_subgraph_isomorphic,
    types::Edge,
};
use itertools::Itertools;
use log::{debug, info, trace};

/// Exhaustive search for a minimum-cost extension.
///
/// Budgets `k = |new vertices| + |new edges|` are tried in increasing order. For each
/// split of `k` into `kv` new vertices and `ke` new edges, every set of `ke` vertex
/// pairs that are not yet host edges is added to a copy of the host with `kv` extra
/// vertices, and the copy is tested with the subgraph isomorphism oracle. The first
/// success is a minimum-cost extension. Only usable on small graphs.
pub struct ExactSearch<'a> {
    pattern: &'a Graph,
    host: &'a Graph,
    max_budget: Option<usize>,
}

impl<'a> ExactSearch<'a> {
    pub fn new(pattern: &'a Graph, host: &'a Graph) -> Self {
        Self {
            pattern,
            host,
            max_budget: None,
        }
    }

    /// Stops after budget `max_budget`; the search then returns `Ok(None)` rather
    /// than an extension that is not minimal.
    pub fn max_budget(mut self, max_budget: usize) -> Self {
        self.max_budget = Some(max_budget);
        self
    }

    /// The largest budget the search tries.
    ///
    /// Adding all pattern vertices and edges as new always works, so the search
    /// never needs more than `|V(G)| + |E(G)|`.
    pub fn ceiling(&self) -> usize {
        let (pattern, host) = (self.pattern, self.host);
        let ceiling = (pattern.num_vertices() + pattern.num_edges())
            .max(host.num_vertices() + host.num_edges());
        self.max_budget.map_or(ceiling, |max| max.min(ceiling))
    }

    pub fn run(&self) -> Result<Option<Extension>> {
        let min_new_vertices = self
            .pattern
            .num_vertices()
            .saturating_sub(self.host.num_vertices());
        for budget in 0..=self.ceiling() {
            debug!("trying budget {}", budget);
            for kv in min_new_vertices..=budget {
                if let Some(extension) = self.try_split(kv, budget - kv)? {
                    info!(
                        "minimal extension: {} vertices, {} edges",
                        kv,
                        budget - kv
                    );
                    return Ok(Some(extension));
                }
            }
        }
        Ok(None)
    }
}

// private methods
impl<'a> ExactSearch<'a> {
    fn try_split(&self, kv: usize, ke: usize) -> Result<Option<Extension>> {
        if ke > self.pattern.num_edges() {
            return Ok(None);
        }
        let pairs = self.candidate_pairs(kv);
        trace!("kv = {}, ke = {}, {} candidate pairs", kv, ke, pairs.len());
        if ke == 0 {
            return self.try_edges(kv, vec![]);
        }
        for edges in pairs.into_iter().combinations(ke) {
            if let Some(extension) = self.try_edges(kv, edges)? {
                return Ok(Some(extension));
            }
        }
        Ok(None)
    }

    /// Every pair over the host's vertices plus `kv` new ones that is not a host edge.
    fn candidate_pairs(&self, kv: usize) -> Vec<Edge> {
        let host = self.host;
        (0..host.num_vertices() + kv)
            .tuple_combinations()
            .filter(|&(u, v)| !host.has_edge(u, v))
            .collect()
    }

    fn try_edges(&self, kv: usize, edges: Vec<Edge>) -> Result<Option<Extension>> {
        let mut candidate = self.host.extended(kv)?;
        candidate.add_edges(edges.iter().copied());
        Ok(if is_subgraph_isomorphic(self.pattern, &candidate) {
            Some(Extension::new(self.host.num_vertices(), kv, edges))
        } else {
            None
        })
    }
}

/// Computes a minimum-cost extension of `host` that contains `pattern`.
///
/// Returns `Ok(None)` only if no extension exists within the budget ceiling, which
/// cannot happen. Allocation failures abort the search with an error.
pub fn exact_minimal_extension(pattern: &Graph, host: &Graph) -> Result<Option<Extension>> {
    ExactSearch::new(pattern, host).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Graph {
        Graph::from_edges(n, (1..n).map(|i| (i - 1, i))).unwrap()
    }

    fn triangle() -> Graph {
        Graph::from_edges(3, vec![(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn test_path_into_single_vertex() {
        let extension = exact_minimal_extension(&path(3), &Graph::with_vertices(1))
            .unwrap()
            .unwrap();
        assert_eq!(extension.new_vertices(), &[1, 2]);
        assert_eq!(extension.new_edges().len(), 2);
        assert_eq!(extension.cost(), 4);
    }

    #[test]
    fn test_triangle_into_path() {
        let extension = exact_minimal_extension(&triangle(), &path(3)).unwrap().unwrap();
        assert_eq!(extension.new_vertices(), &[] as &[usize]);
        assert_eq!(extension.new_edges(), &[(0, 2)]);
        assert_eq!(extension.cost(), 1);
    }

    #[test]
    fn test_already_embedded() {
        let extension = exact_minimal_extension(&path(2), &triangle()).unwrap().unwrap();
        assert!(extension.is_empty());
    }

    #[test]
    fn test_into_empty_host() {
        let extension = exact_minimal_extension(&triangle(), &Graph::with_vertices(0))
            .unwrap()
            .unwrap();
        assert_eq!(extension.cost(), 6);
    }

    #[test]
    fn test_max_budget() {
        let (pattern, host) = (path(3), Graph::with_vertices(1));
        let search = ExactSearch::new(&pattern, &host).max_budget(3);
        assert_eq!(search.ceiling(), 3);
        assert_eq!(search.run().unwrap(), None);
        let search = ExactSearch::new(&pattern, &host).max_budget(4);
        assert_eq!(search.run().unwrap().map(|e| e.cost()), Some(4));
    }

    #[test]
    fn test_candidate_pairs() {
        let host = path(3);
        let search = ExactSearch::new(&host, &host);
        assert_eq!(search.candidate_pairs(0), vec![(0, 2)]);
        assert_eq!(
            search.candidate_pairs(1),
            vec![(0, 2), (0, 3), (1, 3), (2, 3)]
        );
    }
}
