//! The undirected simple graph and its text format.

pub use graph::{Edges, Graph};
pub use parser::{load_graph, load_pair, parse_graph, parse_graphs, parse_pair};
pub use writer::{save_graph, save_graphs, write_graph};

pub(crate) use parser::Rule;

mod graph;
mod parser;
mod writer;
