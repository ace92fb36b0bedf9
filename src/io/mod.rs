/*!
# IO

Reading and writing graphs in the textual edge-list format, plus a
diagnostic dump of the raw storage arrays.

## Edge-list format

One edge per line, vertices 1-based:

```text
<src> -- <dst>
<src> -- <dst>, <payload>
```

The separator is the literal two-character token `--`. Whether a line carries
the trailing `, <payload>` part is decided by the edge payload type via the
[`PayloadText`] capability trait: `()` reads and writes bare endpoint pairs,
payload-carrying types require the token on every line. Blank lines are
skipped; end of input terminates parsing without error.

## Traits

[`GraphReader`] and [`GraphWriter`] are implemented by readers and writers
for a specific format; both come with convenience wrappers for files.
*/

pub mod dump;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use dump::*;
pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation of a
    /// graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from the file at `path`.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the graph to the given writer according to the settings in `self`.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the graph to a newly created file at `path`.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Textual payload capability of a vertex/edge payload type.
///
/// Types without a textual form (currently only `()`) set `PRESENT = false`:
/// edge lines then carry no payload token and dump cells render as `-`.
pub trait PayloadText: Sized {
    /// Whether values of this type appear as tokens in the text formats
    const PRESENT: bool;

    /// Parses one payload token (already stripped of surrounding whitespace).
    fn parse_token(token: &str) -> Result<Self>;

    /// Formats the value as a single token.
    fn format_token(&self) -> String;

    /// The value standing in when a line carries no payload token.
    /// `None` for payload-carrying types, which makes a bare line an error.
    fn absent() -> Option<Self> {
        None
    }
}

impl PayloadText for () {
    const PRESENT: bool = false;

    fn parse_token(token: &str) -> Result<Self> {
        Err(GraphError::invalid_payload(format!(
            "unexpected payload token `{token}` for a payload-free edge type"
        )))
    }

    fn format_token(&self) -> String {
        String::new()
    }

    fn absent() -> Option<Self> {
        Some(())
    }
}

macro_rules! impl_payload_text {
    ($($t:ty),*) => {$(
        impl PayloadText for $t {
            const PRESENT: bool = true;

            fn parse_token(token: &str) -> Result<Self> {
                token.parse().map_err(|_| {
                    GraphError::invalid_payload(format!(
                        "cannot parse `{token}` as {}",
                        stringify!($t)
                    ))
                })
            }

            fn format_token(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_payload_text!(
    u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, String
);
