//! # Storage Dump
//!
//! Renders the raw arrays of a [`LinkedIncidenceList`] as a tab-separated
//! table, one row per array, optionally ANSI-colored. Intended for eyeballing
//! the splice layout while debugging; **not** a stable serialization format.

use std::io::Write;

use super::*;
use crate::repr::LinkedIncidenceList;

const BLUE: &str = "\x1b[34m";
const LIGHT_CYAN: &str = "\x1b[96m";
const RESET: &str = "\x1b[0m";

/// Width of one table cell
const CELL: usize = 4;

/// A [`GraphWriter`] rendering the raw storage table.
///
/// Rows: `index` (the position namespace), `v_data`/`e_data` (payloads, `-`
/// when the type carries none), `edges` (half-edge anchors, `-` over the
/// vertex-slot columns), and the raw `next`/`prev` arrays.
#[derive(Debug, Clone, Default)]
pub struct DumpWriter {
    colored: bool,
}

impl DumpWriter {
    /// Creates a new uncolored dump writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables ANSI coloring (blue captions, light-cyan values)
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn caption(&self, text: &str) -> String {
        if self.colored {
            format!("{BLUE}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn value(&self, text: impl std::fmt::Display) -> String {
        let cell = format!("{text:>CELL$}");
        if self.colored {
            format!("{LIGHT_CYAN}{cell}{RESET}")
        } else {
            cell
        }
    }

    fn row<W, I, T>(&self, writer: &mut W, caption: &str, cells: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = T>,
        T: std::fmt::Display,
    {
        write!(writer, "{}\t", self.caption(caption))?;
        for cell in cells {
            write!(writer, "{}\t", self.value(cell))?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

/// Dump cell of a payload: its token, or `-` for payload-free types
fn payload_cell<T: PayloadText>(value: &T) -> String {
    if T::PRESENT {
        value.format_token()
    } else {
        "-".to_string()
    }
}

impl<V, E> GraphWriter<LinkedIncidenceList<V, E>> for DumpWriter
where
    V: PayloadText,
    E: PayloadText,
{
    fn try_write_graph<W: Write>(
        &self,
        graph: &LinkedIncidenceList<V, E>,
        mut writer: W,
    ) -> Result<()> {
        let slots = graph.storage_nodes() as usize;

        writeln!(writer, "{}", self.caption("graph"))?;
        self.row(&mut writer, "index:", 0..graph.number_of_positions())?;
        self.row(
            &mut writer,
            "v_data:",
            graph.vertex_payloads().iter().map(payload_cell),
        )?;
        self.row(
            &mut writer,
            "e_data:",
            graph.edge_payloads().iter().map(payload_cell),
        )?;
        // anchor row is half-edge-only; slot columns are blanked out
        self.row(
            &mut writer,
            "edges:",
            std::iter::repeat("-".to_string())
                .take(slots)
                .chain(graph.half_edge_ends().iter().map(|u| u.to_string())),
        )?;
        self.row(&mut writer, "next:", graph.next_array().iter())?;
        self.row(&mut writer, "prev:", graph.prev_array().iter())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{IncidenceGraph, WeightedIncidenceGraph};

    fn dump<V: PayloadText, E: PayloadText>(
        g: &LinkedIncidenceList<V, E>,
        colored: bool,
    ) -> String {
        let mut out = Vec::new();
        DumpWriter::new()
            .colored(colored)
            .try_write_graph(g, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_dump_lists_every_row() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap();
        let text = dump(&g, false);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "graph");
        for (i, caption) in ["index:", "v_data:", "e_data:", "edges:", "next:", "prev:"]
            .iter()
            .enumerate()
        {
            assert!(
                lines[i + 1].starts_with(caption),
                "row {i} should start with {caption}"
            );
        }

        // 4 slots + 8 half-edges
        assert_eq!(lines[1].split('\t').filter(|c| !c.is_empty()).count(), 13);
        assert!(lines[5].contains("   4"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn payload_free_cells_render_as_dashes() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2)]).unwrap();
        let text = dump(&g, false);
        let v_data_row = text.lines().nth(2).unwrap();
        assert_eq!(v_data_row.matches('-').count(), 2);
    }

    #[test]
    fn weighted_dump_shows_edge_payloads() {
        let g = WeightedIncidenceGraph::<i64>::from_edges(0, [(1, 2, 42)]).unwrap();
        let text = dump(&g, false);
        assert!(text.lines().nth(3).unwrap().contains("42"));
    }

    #[test]
    fn colored_dump_wraps_captions_and_values() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2)]).unwrap();
        let text = dump(&g, true);
        assert!(text.starts_with("\x1b[34mgraph\x1b[0m"));
        assert!(text.contains("\x1b[96m"));
    }
}
