//! Human-readable reports.

use crate::{
    distance::Distance,
    extension::Extension,
    isomorphism::Embedding,
};
use itertools::Itertools;

/// The verdict of the subgraph isomorphism oracle.
pub struct MatchReport {
    embedding: Option<Embedding>,
    show_embedding: bool,
}

impl MatchReport {
    pub fn new(embedding: Option<Embedding>) -> Self {
        Self {
            embedding,
            show_embedding: false,
        }
    }

    pub fn show_embedding(mut self, show: bool) -> Self {
        self.show_embedding = show;
        self
    }

    pub fn is_match(&self) -> bool {
        self.embedding.is_some()
    }
}

impl std::fmt::Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.embedding {
            Some(embedding) => {
                writeln!(f, "G IS isomorphic to a subgraph of H.")?;
                if self.show_embedding {
                    for (u, v) in embedding.iter().enumerate() {
                        writeln!(f, "  G[{}] -> H[{}]", u, v)?;
                    }
                }
                Ok(())
            }
            None => writeln!(f, "G is NOT isomorphic to any subgraph of H."),
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(mapping) = self.mapping() {
            writeln!(f, "Mapping:")?;
            for (u, image) in mapping.iter().enumerate() {
                writeln!(f, "  G[{}] -> {}", u, image)?;
            }
        }
        writeln!(f, "New vertices: [{}]", self.new_vertices().iter().join(", "))?;
        writeln!(
            f,
            "New edges: [{}]",
            self.new_edges()
                .iter()
                .map(|(u, v)| format!("({}, {})", u, v))
                .join(", ")
        )?;
        writeln!(f, "  Added vertices: {}", self.new_vertices().len())?;
        writeln!(f, "  Added edges:    {}", self.new_edges().len())?;
        writeln!(f, "  Total cost:     {}", self.cost())
    }
}

/// A one-line summary of a distance estimate.
pub struct DistanceReport<'a>(pub &'a Distance);

impl<'a> std::fmt::Display for DistanceReport<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = self.0;
        writeln!(
            f,
            "Estimated distance: {} ({} edge mismatches, {} vertex mismatches)",
            d, d.edge_mismatches(), d.vertex_mismatches()
        )?;
        writeln!(
            f,
            "Assignment: [{}]",
            d.assignment()
                .iter()
                .enumerate()
                .map(|(u, v)| format!("{}->{}", u, v))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        distance::estimate_distance,
        extension::{greedy_extension, Extension},
        graph::Graph,
    };

    #[test]
    fn test_match_report() {
        let report = MatchReport::new(Some(vec![2, 0]));
        assert!(report.is_match());
        assert_eq!(report.to_string(), "G IS isomorphic to a subgraph of H.\n");
        assert_eq!(
            report.show_embedding(true).to_string(),
            "G IS isomorphic to a subgraph of H.\n  G[0] -> H[2]\n  G[1] -> H[0]\n"
        );
        assert_eq!(
            MatchReport::new(None).to_string(),
            "G is NOT isomorphic to any subgraph of H.\n"
        );
    }

    #[test]
    fn test_extension_report() {
        let text = Extension::new(1, 1, vec![(0, 1)]).to_string();
        assert_eq!(
            text,
            "New vertices: [1]\nNew edges: [(0, 1)]\n  Added vertices: 1\n  Added edges:    1\n  Total cost:     2\n"
        );
        let pattern = Graph::from_edges(2, vec![(0, 1)]).unwrap();
        let text = greedy_extension(&pattern, &Graph::with_vertices(1)).to_string();
        assert!(text.starts_with("Mapping:\n  G[0] -> H[0]\n  G[1] -> new vertex 0\n"));
        assert!(text.ends_with("Total cost:     2\n"));
    }

    #[test]
    fn test_distance_report() {
        let g = Graph::from_edges(2, vec![(0, 1)]).unwrap();
        let text = DistanceReport(&estimate_distance(&g, &g)).to_string();
        assert!(text.starts_with("Estimated distance: 0 "));
    }
}
