use gmext::{
    extension::{exact_minimal_extension, greedy_extension, ExactSearch},
    generator::{complete, cycle, path, random_connected},
    graph::Graph,
    isomorphism::{find_embedding, is_subgraph_isomorphic, verify_embedding},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn triangle() -> Graph {
    complete(3).unwrap()
}

/// Small random pairs the exact search finishes on quickly.
fn random_pairs(seed: u64, count: usize) -> Vec<(Graph, Graph)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(3..5);
            let pattern = random_connected(n, rng.gen_range(n - 1..n + 1), &mut rng).unwrap();
            let m = rng.gen_range(2..5);
            let host = random_connected(
                m,
                rng.gen_range(m - 1..m + 1).min(m * (m - 1) / 2),
                &mut rng,
            )
            .unwrap();
            (pattern, host)
        })
        .collect()
}

#[test]
fn test_path_into_single_vertex() {
    let (g, h) = (path(3).unwrap(), Graph::with_vertices(1));
    assert_eq!(is_subgraph_isomorphic(&g, &h), false);
    let extension = exact_minimal_extension(&g, &h).unwrap().unwrap();
    assert_eq!(extension.new_vertices().len(), 2);
    assert_eq!(extension.new_edges().len(), 2);
    assert_eq!(extension.cost(), 4);
    assert_eq!(
        is_subgraph_isomorphic(&g, &extension.apply(&h).unwrap()),
        true
    );
}

#[test]
fn test_triangle_into_path() {
    let (g, h) = (triangle(), path(3).unwrap());
    assert_eq!(is_subgraph_isomorphic(&g, &h), false);
    let extension = exact_minimal_extension(&g, &h).unwrap().unwrap();
    assert_eq!(extension.new_vertices().len(), 0);
    assert_eq!(extension.new_edges(), &[(0, 2)]);
    assert_eq!(extension.cost(), 1);
}

#[test]
fn test_edge_into_triangle() {
    let (g, h) = (path(2).unwrap(), triangle());
    assert_eq!(is_subgraph_isomorphic(&g, &h), true);
    let embedding = find_embedding(&g, &h).unwrap();
    assert_eq!(verify_embedding(&g, &h, &embedding), true);
}

#[test]
fn test_identical() {
    for g in vec![
        Graph::with_vertices(0),
        path(5).unwrap(),
        cycle(6).unwrap(),
        complete(5).unwrap(),
    ] {
        assert_eq!(is_subgraph_isomorphic(&g, &g.clone()), true);
        assert!(greedy_extension(&g, &g.clone()).is_empty());
    }
}

#[test]
fn test_larger_pattern() {
    let g = path(4).unwrap();
    let h = complete(3).unwrap();
    assert_eq!(is_subgraph_isomorphic(&g, &h), false);
    assert_eq!(exact_minimal_extension(&g, &h).unwrap().unwrap().cost(), 2);
}

#[test]
fn test_extensions_embed() {
    for (g, h) in random_pairs(42, 12) {
        let greedy = greedy_extension(&g, &h);
        assert_eq!(is_subgraph_isomorphic(&g, &greedy.apply(&h).unwrap()), true);
        let exact = exact_minimal_extension(&g, &h).unwrap().unwrap();
        assert_eq!(is_subgraph_isomorphic(&g, &exact.apply(&h).unwrap()), true);
        assert!(exact.cost() <= greedy.cost());
        assert_eq!(exact.is_empty(), is_subgraph_isomorphic(&g, &h));
    }
}

#[test]
fn test_no_duplicate_edges() {
    for (g, h) in random_pairs(7, 8) {
        for extension in vec![
            greedy_extension(&g, &h),
            exact_minimal_extension(&g, &h).unwrap().unwrap(),
        ] {
            assert!(extension
                .new_edges()
                .iter()
                .all(|&(u, v)| u != v && !h.has_edge(u, v)));
            let extended = extension.apply(&h).unwrap();
            assert_eq!(
                extended.num_edges(),
                h.num_edges() + extension.new_edges().len()
            );
        }
    }
}

#[test]
fn test_oracle_stable_under_added_edges() {
    let mut rng = StdRng::seed_from_u64(3);
    let g = cycle(4).unwrap();
    let mut h = Graph::from_edges(6, vec![(0, 1), (1, 2), (2, 3), (3, 0), (4, 5)]).unwrap();
    assert_eq!(is_subgraph_isomorphic(&g, &h), true);
    for _ in 0..10 {
        h.add_edges(std::iter::once((rng.gen_range(0..6), rng.gen_range(0..6))));
        assert_eq!(is_subgraph_isomorphic(&g, &h), true);
    }
}

#[test]
fn test_budget_cap() {
    let (g, h) = (complete(4).unwrap(), path(4).unwrap());
    let minimal = exact_minimal_extension(&g, &h).unwrap().unwrap();
    assert_eq!(minimal.cost(), 3);
    let capped = ExactSearch::new(&g, &h).max_budget(2).run().unwrap();
    assert_eq!(capped, None);
}

#[test]
fn test_exact_cost_monotonic() {
    let mut rng = StdRng::seed_from_u64(11);
    for (g, h) in random_pairs(11, 6) {
        let cost = exact_minimal_extension(&g, &h).unwrap().unwrap().cost();
        let mut denser = h.extended(1).unwrap();
        let n = denser.num_vertices();
        denser.add_edges(std::iter::once((rng.gen_range(0..n), rng.gen_range(0..n))));
        let denser_cost = exact_minimal_extension(&g, &denser).unwrap().unwrap().cost();
        assert!(denser_cost <= cost);
    }
}
