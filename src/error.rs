//! Error management.

use crate::graph::Rule;
use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    /// The input does not describe an undirected simple graph.
    #[display(fmt = "malformed graph: {}", _0)]
    MalformedGraph(String),
    /// A candidate host graph could not be allocated.
    #[display(fmt = "failed to allocate {} bytes", bytes)]
    AllocationFailure { bytes: usize },
    #[display(fmt = "parse error: {}", _0)]
    Parse(String),
    #[display(fmt = "io error: {}", _0)]
    Io(String),
    #[display(fmt = "invalid argument: {}", _0)]
    InvalidArgument(String),
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(e: pest::error::Error<Rule>) -> Self {
        Error::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
