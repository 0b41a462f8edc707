use super::Graph;
use crate::error::{Error, Result};
use log::debug;
use pest::Parser;
use pest_derive::Parser;
use std::path::Path;

#[derive(Parser)]
#[grammar = "graph/grammar.pest"]
struct MatrixParser;

/// Parses exactly one graph in the adjacency-matrix text format.
pub fn parse_graph(input: &str) -> Result<Graph> {
    let mut graphs = parse_graphs(input)?;
    match graphs.len() {
        1 => Ok(graphs.remove(0)),
        n => Err(Error::Parse(format!("expected 1 graph, found {}", n))),
    }
}

/// Parses exactly two graphs, the pattern followed by the host.
pub fn parse_pair(input: &str) -> Result<(Graph, Graph)> {
    let graphs = parse_graphs(input)?;
    let count = graphs.len();
    let mut graphs = graphs.into_iter();
    match (graphs.next(), graphs.next(), graphs.next()) {
        (Some(g), Some(h), None) => Ok((g, h)),
        _ => Err(Error::Parse(format!("expected 2 graphs, found {}", count))),
    }
}

/// Parses a sequence of graphs.
///
/// Each graph is its vertex count `n` followed by `n * n` values read row by row.
/// Line breaks carry no meaning and `#` starts a comment.
pub fn parse_graphs(input: &str) -> Result<Vec<Graph>> {
    let values = parse_values(input)?;
    let mut graphs = vec![];
    let mut rest = values.as_slice();
    while let Some((&n, tail)) = rest.split_first() {
        let len = n
            .checked_mul(n)
            .ok_or_else(|| Error::MalformedGraph(format!("vertex count {} is too large", n)))?;
        if tail.len() < len {
            return Err(Error::MalformedGraph(format!(
                "graph {} declares {} vertices but only {} of {} matrix entries follow",
                graphs.len(),
                n,
                tail.len(),
                len
            )));
        }
        let (entries, tail) = tail.split_at(len);
        let matrix = entries
            .iter()
            .enumerate()
            .map(|(pos, &x)| match x {
                0 | 1 => Ok(x as u8),
                _ => Err(Error::MalformedGraph(format!(
                    "entry ({}, {}) is {}, expected 0 or 1",
                    pos / n,
                    pos % n,
                    x
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        graphs.push(Graph::from_matrix(n, &matrix)?);
        rest = tail;
    }
    debug!("parsed {} graphs", graphs.len());
    Ok(graphs)
}

pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    parse_graph(&std::fs::read_to_string(path)?)
}

pub fn load_pair<P: AsRef<Path>>(path: P) -> Result<(Graph, Graph)> {
    parse_pair(&std::fs::read_to_string(path)?)
}

fn parse_values(input: &str) -> Result<Vec<usize>> {
    let mut values = vec![];
    for pair in MatrixParser::parse(Rule::values, input)? {
        for int in pair.into_inner() {
            match int.as_rule() {
                Rule::int => values.push(int.as_str().parse().map_err(|_| {
                    Error::Parse(format!("integer {} is out of range", int.as_str()))
                })?),
                Rule::EOI => {}
                _ => unreachable!(),
            }
        }
    }
    Ok(values)
}
