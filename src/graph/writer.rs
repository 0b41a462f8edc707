use super::Graph;
use crate::error::Result;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes a graph in the adjacency-matrix text format.
pub fn write_graph<W: Write>(buf: &mut W, graph: &Graph) -> std::io::Result<()> {
    write!(buf, "{}", graph)
}

pub fn save_graph<P: AsRef<Path>>(path: P, graph: &Graph) -> Result<()> {
    save_graphs(path, &[graph])
}

/// Writes several graphs into one file, e.g. a pattern followed by its host.
pub fn save_graphs<P: AsRef<Path>>(path: P, graphs: &[&Graph]) -> Result<()> {
    let mut buf = BufWriter::new(File::create(path)?);
    for graph in graphs {
        write_graph(&mut buf, graph)?;
    }
    buf.flush()?;
    Ok(())
}
