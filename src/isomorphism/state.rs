use crate::{graph::Graph, types::VId};

/// Frontier changes made by one assignment, replayed backwards on backtrack.
struct Delta {
    pattern_left: bool,
    host_left: bool,
    pattern_added: Vec<VId>,
    host_added: Vec<VId>,
}

/// The state of a depth-first subgraph isomorphism search.
///
/// `map` is the partial injective mapping from pattern vertices to host vertices.
/// The pattern frontier holds unmapped pattern vertices adjacent to mapped ones, and
/// the host frontier holds unused host vertices adjacent to used ones.
pub(super) struct Matcher<'a> {
    pattern: &'a Graph,
    host: &'a Graph,
    map: Vec<Option<VId>>,
    used: Vec<bool>,
    pattern_frontier: Vec<bool>,
    host_frontier: Vec<bool>,
    num_mapped: usize,
    num_states: usize,
}

impl<'a> Matcher<'a> {
    pub fn new(pattern: &'a Graph, host: &'a Graph) -> Self {
        Self {
            pattern,
            host,
            map: vec![None; pattern.num_vertices()],
            used: vec![false; host.num_vertices()],
            pattern_frontier: vec![false; pattern.num_vertices()],
            host_frontier: vec![false; host.num_vertices()],
            num_mapped: 0,
            num_states: 0,
        }
    }

    /// Number of assignments tried so far.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Runs the search and returns the complete mapping if one exists.
    pub fn run(&mut self) -> Option<Vec<VId>> {
        if self.search() {
            self.map.iter().copied().collect()
        } else {
            None
        }
    }

    fn search(&mut self) -> bool {
        if self.num_mapped == self.pattern.num_vertices() {
            return true;
        }
        let (n, connected) = match self.choose_vertex() {
            Some(choice) => choice,
            None => return false,
        };
        for m in self.host.vertices() {
            if self.used[m] || (connected && !self.host_frontier[m]) {
                continue;
            }
            if !self.is_feasible(n, m) {
                continue;
            }
            let delta = self.assign(n, m);
            if self.search() {
                return true;
            }
            self.unassign(n, m, delta);
        }
        false
    }

    /// Picks the next pattern vertex, preferring the frontier.
    ///
    /// The flag tells whether the vertex is adjacent to the mapped region, in which
    /// case its image must be adjacent to the mapped host region as well.
    fn choose_vertex(&self) -> Option<(VId, bool)> {
        let unmapped = |&u: &VId| self.map[u].is_none();
        self.pattern
            .vertices()
            .filter(unmapped)
            .find(|&u| self.pattern_frontier[u])
            .map(|u| (u, true))
            .or_else(|| self.pattern.vertices().find(unmapped).map(|u| (u, false)))
    }

    fn is_feasible(&self, n: VId, m: VId) -> bool {
        let (pattern, host) = (self.pattern, self.host);
        if pattern.degree(n) > host.degree(m) {
            return false;
        }
        let consistent = pattern.neighbors(n).iter().all(|&g| match self.map[g] {
            Some(h) => host.has_edge(m, h),
            None => true,
        });
        if !consistent {
            return false;
        }
        pattern
            .neighbors(n)
            .iter()
            .filter(|&&g| self.map[g].is_none())
            .all(|&g| {
                host.neighbors(m)
                    .iter()
                    .any(|&h| !self.used[h] && host.degree(h) >= pattern.degree(g))
            })
    }

    fn assign(&mut self, n: VId, m: VId) -> Delta {
        self.num_states += 1;
        self.map[n] = Some(m);
        self.used[m] = true;
        self.num_mapped += 1;
        let pattern_left = std::mem::replace(&mut self.pattern_frontier[n], false);
        let host_left = std::mem::replace(&mut self.host_frontier[m], false);
        let mut pattern_added = vec![];
        for &g in self.pattern.neighbors(n) {
            if self.map[g].is_none() && !self.pattern_frontier[g] {
                self.pattern_frontier[g] = true;
                pattern_added.push(g);
            }
        }
        let mut host_added = vec![];
        for &h in self.host.neighbors(m) {
            if !self.used[h] && !self.host_frontier[h] {
                self.host_frontier[h] = true;
                host_added.push(h);
            }
        }
        Delta {
            pattern_left,
            host_left,
            pattern_added,
            host_added,
        }
    }

    fn unassign(&mut self, n: VId, m: VId, delta: Delta) {
        for g in delta.pattern_added {
            self.pattern_frontier[g] = false;
        }
        for h in delta.host_added {
            self.host_frontier[h] = false;
        }
        self.pattern_frontier[n] = delta.pattern_left;
        self.host_frontier[m] = delta.host_left;
        self.map[n] = None;
        self.used[m] = false;
        self.num_mapped -= 1;
    }
}
