use crate::prelude::*;

/// One half-edge encountered while walking a vertex's incidence list.
///
/// Besides the two endpoints, the entry exposes the half-edge's raw position
/// and its edge index so callers can resume iteration ([`incidence_at`]) or
/// look up payloads ([`edge_data`]).
///
/// [`incidence_at`]: LinkedIncidenceList::incidence_at
/// [`edge_data`]: LinkedIncidenceList::edge_data
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IncidenceEntry {
    /// Position of this half-edge in the namespace
    pub pos: Pos,
    /// Index of the undirected edge the half-edge belongs to
    pub edge: NumEdges,
    /// Vertex whose list the half-edge is threaded into
    pub anchor: Node,
    /// The other endpoint; equals `anchor` for a self-loop
    pub neighbor: Node,
}

/// Forward walk along one circular incidence list.
///
/// Starts one `next` step past the position it was created at and stops upon
/// reaching any vertex slot, so a walk started at a vertex covers exactly
/// that vertex's incident half-edges.
pub struct IncidenceIter<'a, V, E> {
    graph: &'a LinkedIncidenceList<V, E>,
    pos: Pos,
}

impl<'a, V, E> IncidenceIter<'a, V, E> {
    pub(super) fn new(graph: &'a LinkedIncidenceList<V, E>, start: Pos) -> Self {
        Self {
            graph,
            pos: graph.next_of(start),
        }
    }
}

impl<V, E> Iterator for IncidenceIter<'_, V, E> {
    type Item = IncidenceEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = entry_at(self.graph, self.pos)?;
        self.pos = self.graph.next_of(self.pos);
        Some(entry)
    }
}

/// Backward walk along one circular incidence list, mirroring
/// [`IncidenceIter`] via the `prev` array.
pub struct IncidenceRevIter<'a, V, E> {
    graph: &'a LinkedIncidenceList<V, E>,
    pos: Pos,
}

impl<'a, V, E> IncidenceRevIter<'a, V, E> {
    pub(super) fn new(graph: &'a LinkedIncidenceList<V, E>, start: Pos) -> Self {
        Self {
            graph,
            pos: graph.prev_of(start),
        }
    }
}

impl<V, E> Iterator for IncidenceRevIter<'_, V, E> {
    type Item = IncidenceEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = entry_at(self.graph, self.pos)?;
        self.pos = self.graph.prev_of(self.pos);
        Some(entry)
    }
}

/// Decodes the half-edge at `pos`, or `None` if `pos` is a vertex slot.
fn entry_at<V, E>(graph: &LinkedIncidenceList<V, E>, pos: Pos) -> Option<IncidenceEntry> {
    let slots = graph.storage_nodes() as Pos;
    if pos < slots {
        return None;
    }
    let half = pos - slots;
    Some(IncidenceEntry {
        pos,
        edge: half / 2,
        anchor: graph.half_edge_anchor(half),
        // the sibling half-edge stores the other endpoint
        neighbor: graph.half_edge_anchor(half ^ 1),
    })
}
