use super::{Extension, Image};
use crate::{
    graph::Graph,
    types::{normalize, Edge, VId},
};
use itertools::Itertools;
use log::{debug, trace};
use std::collections::VecDeque;

/// Score weights of the greedy mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GreedyWeights {
    /// Per mapped pattern neighbor whose image is adjacent to the candidate.
    pub mapped_edge: i64,
    /// Per unmapped pattern neighbor that can still be given a free host neighbor.
    pub open_neighbor: i64,
    /// Bonus when the candidate's degree is large enough.
    pub degree_bonus: i64,
    /// Penalty per missing degree otherwise.
    pub degree_deficit: i64,
    /// Bonus when the candidate has enough free neighbors for all unmapped ones.
    pub capacity_bonus: i64,
}

impl Default for GreedyWeights {
    fn default() -> Self {
        Self {
            mapped_edge: 100,
            open_neighbor: 20,
            degree_bonus: 10,
            degree_deficit: 5,
            capacity_bonus: 15,
        }
    }
}

/// The order in which pattern vertices are mapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexOrder {
    DescendingDegree,
    /// Breadth-first from the vertex of maximum degree.
    BreadthFirstFromHub,
    BreadthFirstFrom(VId),
}

impl VertexOrder {
    /// The orderings tried by [`GreedySearch`](struct.GreedySearch.html), best-effort
    /// first.
    pub fn candidates(pattern: &Graph) -> Vec<VertexOrder> {
        let mut orders = vec![VertexOrder::DescendingDegree, VertexOrder::BreadthFirstFromHub];
        orders.extend(
            (0..pattern.num_vertices().min(3)).map(VertexOrder::BreadthFirstFrom),
        );
        orders
    }

    pub fn arrange(self, pattern: &Graph) -> Vec<VId> {
        let by_degree = by_descending_degree(pattern);
        match self {
            VertexOrder::DescendingDegree => by_degree,
            VertexOrder::BreadthFirstFromHub => match by_degree.first() {
                Some(&hub) => breadth_first(pattern, hub, &by_degree),
                None => vec![],
            },
            VertexOrder::BreadthFirstFrom(seed) if seed < pattern.num_vertices() => {
                breadth_first(pattern, seed, &by_degree)
            }
            VertexOrder::BreadthFirstFrom(_) => by_degree,
        }
    }
}

/// Vertices by descending degree, ties by ascending id.
fn by_descending_degree(pattern: &Graph) -> Vec<VId> {
    pattern
        .vertices()
        .sorted_by(|&u, &v| pattern.degree(v).cmp(&pattern.degree(u)).then(u.cmp(&v)))
        .collect()
}

/// Breadth-first order from `seed`, visiting neighbors by descending degree.
///
/// When a component is exhausted the search restarts at the first unvisited vertex
/// of `by_degree`.
fn breadth_first(pattern: &Graph, seed: VId, by_degree: &[VId]) -> Vec<VId> {
    let mut order = Vec::with_capacity(pattern.num_vertices());
    let mut visited = vec![false; pattern.num_vertices()];
    for root in std::iter::once(seed).chain(by_degree.iter().copied()) {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut queue = VecDeque::from(vec![root]);
        while let Some(u) = queue.pop_front() {
            order.push(u);
            for v in pattern
                .neighbors(u)
                .iter()
                .copied()
                .filter(|&v| !visited[v])
                .sorted_by(|&a, &b| pattern.degree(b).cmp(&pattern.degree(a)).then(a.cmp(&b)))
            {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    order
}

/// One greedy mapping and the extension it implies.
struct Candidate {
    mapping: Vec<Image>,
    num_virtual: usize,
    missing_edges: Vec<Edge>,
}

impl Candidate {
    fn cost(&self) -> usize {
        self.num_virtual + self.missing_edges.len()
    }
}

/// Greedy extension heuristic.
///
/// Each ordering of the pattern vertices is mapped greedily: every pattern vertex goes
/// to the free host vertex with the highest score, or to a new vertex once the host is
/// used up. Pattern edges whose images are not adjacent become new edges. The cheapest
/// ordering wins. The result is not necessarily minimal.
pub struct GreedySearch<'a> {
    pattern: &'a Graph,
    host: &'a Graph,
    weights: GreedyWeights,
    orders: Vec<VertexOrder>,
}

impl<'a> GreedySearch<'a> {
    pub fn new(pattern: &'a Graph, host: &'a Graph) -> Self {
        Self {
            pattern,
            host,
            weights: GreedyWeights::default(),
            orders: VertexOrder::candidates(pattern),
        }
    }

    pub fn weights(mut self, weights: GreedyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn orders(mut self, orders: Vec<VertexOrder>) -> Self {
        self.orders = orders;
        self
    }

    pub fn run(&self) -> Extension {
        let mut tried: Vec<Vec<VId>> = vec![];
        let mut best: Option<Candidate> = None;
        for &order in &self.orders {
            let arranged = order.arrange(self.pattern);
            if tried.contains(&arranged) {
                continue;
            }
            let candidate = self.map_in_order(&arranged);
            debug!("{:?}: cost {}", order, candidate.cost());
            if best.as_ref().map_or(true, |b| candidate.cost() < b.cost()) {
                best = Some(candidate);
            }
            tried.push(arranged);
        }
        let best = best.unwrap_or_else(|| self.map_in_order(&by_descending_degree(self.pattern)));
        Extension::new(self.host.num_vertices(), best.num_virtual, best.missing_edges)
            .with_mapping(best.mapping)
    }
}

// private methods
impl<'a> GreedySearch<'a> {
    fn map_in_order(&self, order: &[VId]) -> Candidate {
        let (pattern, host) = (self.pattern, self.host);
        let mut mapping: Vec<Option<Image>> = vec![None; pattern.num_vertices()];
        let mut used = vec![false; host.num_vertices()];
        let mut num_virtual = 0;
        // vertices missing from `order` are mapped last, by id
        for u in order.iter().copied().chain(pattern.vertices()) {
            if mapping[u].is_some() {
                continue;
            }
            let mut best: Option<(VId, i64)> = None;
            for h in host.vertices().filter(|&h| !used[h]) {
                let score = self.score(u, h, &mapping, &used);
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((h, score));
                }
            }
            mapping[u] = Some(match best {
                Some((h, score)) => {
                    trace!("G[{}] -> H[{}] (score {})", u, h, score);
                    used[h] = true;
                    Image::Existing(h)
                }
                None => {
                    num_virtual += 1;
                    Image::Virtual(num_virtual - 1)
                }
            });
        }
        let mapping: Vec<Image> = mapping.into_iter().flatten().collect();
        let missing_edges = pattern
            .edges()
            .filter(|&(u, v)| match (mapping[u], mapping[v]) {
                (Image::Existing(a), Image::Existing(b)) => !host.has_edge(a, b),
                _ => true,
            })
            .map(|(u, v)| {
                let n = host.num_vertices();
                normalize(mapping[u].resolve(n), mapping[v].resolve(n))
            })
            .collect();
        Candidate {
            mapping,
            num_virtual,
            missing_edges,
        }
    }

    fn score(&self, u: VId, h: VId, mapping: &[Option<Image>], used: &[bool]) -> i64 {
        let (pattern, host, w) = (self.pattern, self.host, &self.weights);
        let mut kept_edges = 0;
        let mut unmapped = 0;
        for &v in pattern.neighbors(u) {
            match mapping[v] {
                Some(Image::Existing(image)) if host.has_edge(h, image) => kept_edges += 1,
                Some(_) => {}
                None => unmapped += 1,
            }
        }
        let free = host.neighbors(h).iter().filter(|&&x| !used[x]).count() as i64;
        let (deg_u, deg_h) = (pattern.degree(u) as i64, host.degree(h) as i64);
        let mut score = w.mapped_edge * kept_edges + w.open_neighbor * unmapped.min(free);
        score += if deg_h >= deg_u {
            w.degree_bonus
        } else {
            -w.degree_deficit * (deg_u - deg_h)
        };
        if free >= unmapped {
            score += w.capacity_bonus;
        }
        score
    }
}

/// Computes an extension of `host` that contains `pattern` with the greedy heuristic.
pub fn greedy_extension(pattern: &Graph, host: &Graph) -> Extension {
    GreedySearch::new(pattern, host).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Graph {
        Graph::from_edges(n, (1..n).map(|i| (i - 1, i))).unwrap()
    }

    fn star(leaves: usize) -> Graph {
        Graph::from_edges(leaves + 1, (1..=leaves).map(|i| (0, i))).unwrap()
    }

    #[test]
    fn test_orders() {
        // 0 - 1 - 2 - 3 with an extra leaf 4 on 2
        let g = Graph::from_edges(5, vec![(0, 1), (1, 2), (2, 3), (2, 4)]).unwrap();
        assert_eq!(VertexOrder::DescendingDegree.arrange(&g), vec![2, 1, 0, 3, 4]);
        assert_eq!(VertexOrder::BreadthFirstFromHub.arrange(&g), vec![2, 1, 3, 4, 0]);
        assert_eq!(VertexOrder::BreadthFirstFrom(0).arrange(&g), vec![0, 1, 2, 3, 4]);
        assert_eq!(VertexOrder::BreadthFirstFrom(9).arrange(&g).len(), 5);
        assert_eq!(VertexOrder::candidates(&g).len(), 5);
        assert_eq!(VertexOrder::candidates(&path(1)).len(), 3);
    }

    #[test]
    fn test_disconnected_order() {
        let g = Graph::from_edges(5, vec![(0, 1), (3, 4), (2, 4)]).unwrap();
        assert_eq!(VertexOrder::BreadthFirstFrom(0).arrange(&g), vec![0, 1, 4, 2, 3]);
    }

    #[test]
    fn test_embedded() {
        let extension = greedy_extension(&path(3), &path(5));
        assert!(extension.is_empty());
        let mapping = extension.mapping().unwrap();
        assert_eq!(mapping.len(), 3);
        assert!(mapping.iter().all(|image| matches!(image, Image::Existing(_))));
    }

    #[test]
    fn test_triangle_into_path() {
        let triangle = Graph::from_edges(3, vec![(0, 1), (1, 2), (0, 2)]).unwrap();
        let extension = greedy_extension(&triangle, &path(3));
        assert_eq!(extension.new_vertices(), &[] as &[VId]);
        assert_eq!(extension.new_edges(), &[(0, 2)]);
    }

    #[test]
    fn test_virtual_vertices() {
        let extension = greedy_extension(&path(3), &Graph::with_vertices(1));
        assert_eq!(extension.new_vertices(), &[1, 2]);
        assert_eq!(extension.new_edges().len(), 2);
        assert_eq!(extension.cost(), 4);
        let mapping = extension.mapping().unwrap();
        assert_eq!(
            mapping.iter().filter(|image| matches!(image, Image::Virtual(_))).count(),
            2
        );
    }

    #[test]
    fn test_star_prefers_hub() {
        let extension = greedy_extension(&star(3), &star(4));
        assert!(extension.is_empty());
        assert_eq!(extension.mapping().unwrap()[0], Image::Existing(0));
    }

    #[test]
    fn test_score() {
        let g = path(3);
        let h = star(3);
        let search = GreedySearch::new(&g, &h);
        let mapping = vec![None; 3];
        let used = vec![false; 4];
        // center of the path on the center of the star:
        // 2 open neighbors (+40), degree 3 >= 2 (+10), 3 free >= 2 (+15)
        assert_eq!(search.score(1, 0, &mapping, &used), 65);
        // on a leaf: 1 open neighbor (+20), deficit 1 (-5), 1 free < 2
        assert_eq!(search.score(1, 1, &mapping, &used), 15);
        let mapping = vec![Some(Image::Existing(0)), None, None];
        let used = vec![true, false, false, false];
        assert_eq!(search.score(1, 1, &mapping, &used), 100 - 5);
    }

    #[test]
    fn test_partial_order() {
        let g = path(3);
        let h = Graph::with_vertices(1);
        let candidate = GreedySearch::new(&g, &h).map_in_order(&[2, 2]);
        assert_eq!(
            candidate.mapping,
            vec![Image::Virtual(0), Image::Virtual(1), Image::Existing(0)]
        );
        assert_eq!(candidate.num_virtual, 2);
        assert_eq!(candidate.missing_edges, vec![(1, 2), (0, 2)]);
    }

    #[test]
    fn test_custom_orders() {
        let g = path(3);
        let h = path(3);
        let extension = GreedySearch::new(&g, &h)
            .orders(vec![VertexOrder::BreadthFirstFrom(0)])
            .run();
        assert!(extension.is_empty());
        let extension = GreedySearch::new(&g, &h).orders(vec![]).run();
        assert_eq!(extension.mapping().unwrap().len(), 3);
    }
}
