//! # EdgeList
//!
//! Reader and writer for the line-based `<src> -- <dst>[, <payload>]`
//! format. Parsing is eager and fail-fast: the first malformed line aborts
//! with a typed error and no graph is constructed.

use std::io::{BufRead, BufReader, Write};

use super::*;
use crate::repr::LinkedIncidenceList;

/// A [`GraphReader`] for the edge-list format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader;

impl EdgeListReader {
    /// Creates a new reader
    pub fn new() -> Self {
        Self
    }
}

impl<V, E> GraphReader<LinkedIncidenceList<V, E>> for EdgeListReader
where
    V: Default + Clone,
    E: PayloadText,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<LinkedIncidenceList<V, E>> {
        let mut edges = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            edges.push(parse_edge_line::<E>(&line)?);
        }
        LinkedIncidenceList::from_edges(0, edges)
    }
}

/// Shorthand for reading with default [`EdgeListReader`] settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(std::fs::File::open(path)?))
    }
}

impl<V, E> EdgeListRead for LinkedIncidenceList<V, E>
where
    V: Default + Clone,
    E: PayloadText,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::new().try_read_graph(reader)
    }
}

/// A [`GraphWriter`] emitting one `<src> -- <dst>[, <payload>]` line per
/// edge, in edge-index order, endpoints 1-based
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Creates a new writer
    pub fn new() -> Self {
        Self
    }
}

impl<V, E> GraphWriter<LinkedIncidenceList<V, E>> for EdgeListWriter
where
    E: PayloadText,
{
    fn try_write_graph<W: Write>(
        &self,
        graph: &LinkedIncidenceList<V, E>,
        mut writer: W,
    ) -> Result<()> {
        for k in 0..graph.number_of_edges() {
            let Edge(u, v) = graph.edge_endpoints(k);
            if E::PRESENT {
                writeln!(
                    writer,
                    "{} -- {}, {}",
                    u + 1,
                    v + 1,
                    graph.edge_data(k).format_token()
                )?;
            } else {
                writeln!(writer, "{} -- {}", u + 1, v + 1)?;
            }
        }
        Ok(())
    }
}

/// Parses one non-blank edge line into a 1-based `(src, dst, payload)` triple.
fn parse_edge_line<E: PayloadText>(line: &str) -> Result<(Node, Node, E)> {
    let (src_token, rest) = split_token(line);
    let src = parse_index(src_token)?;

    let (separator, rest) = split_token(rest);
    if separator != "--" {
        return Err(GraphError::InvalidEdgeSyntax {
            found: separator.to_string(),
        });
    }

    let (dst, payload) = match rest.split_once(',') {
        Some((dst_str, payload_str)) => {
            let dst = parse_index(dst_str.trim())?;
            (dst, E::parse_token(payload_str.trim())?)
        }
        None => {
            let dst = parse_index(rest.trim())?;
            let payload = E::absent().ok_or_else(|| {
                GraphError::invalid_payload("missing payload token after the endpoints")
            })?;
            (dst, payload)
        }
    };

    Ok((src, dst, payload))
}

/// Splits off the first whitespace-delimited token
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}

/// Parses a 1-based vertex index; anything unparsable (including negative
/// numbers and empty tokens) is an invalid vertex reference
fn parse_index(token: &str) -> Result<Node> {
    token.parse().map_err(|_| {
        GraphError::invalid_vertex(format!("cannot parse `{token}` as a vertex index"))
    })
}
