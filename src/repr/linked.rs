/*!
# Linked Incidence-List Store

[`LinkedIncidenceList`] keeps the whole graph in five flat arrays:

```text
next, prev : Pos   -> Pos    circular incidence lists (slots + half-edges)
ends       : Half  -> Node   anchor vertex of each half-edge
v_data     : Node  -> V      vertex payloads (padded length)
e_data     : Edge  -> E      edge payloads, one per undirected edge
```

Construction is a single splicing pass: edges are grouped by their source
endpoint in ascending order (insertion order preserved within a group), each
half-edge is appended behind a per-vertex cursor, and a final pass closes
every list back into its vertex slot. A closed list of an isolated vertex is
the slot pointing at itself.
*/

use std::collections::BTreeMap;

use crate::prelude::*;

/// Number of half-edges in a store
pub type NumHalfEdges = u32;

/// Flat undirected graph storage with intrusive per-vertex incidence lists.
///
/// `V` is the per-vertex payload, `E` the per-edge payload. Both default to
/// `()` for plain topology.
///
/// Edge endpoints are **1-based** on the construction and IO surface and
/// **0-based** everywhere else. When the vertex count is odd, one invisible
/// padding slot is appended internally so the slot region has even length;
/// the padding never appears in any public vertex range or iterator.
///
/// ```
/// use ligraphs::prelude::*;
///
/// let g = IncidenceGraph::from_pairs(0, [(1, 2), (1, 3)]).unwrap();
/// assert_eq!(g.number_of_nodes(), 3);
/// assert_eq!(g.neighbors_of(0).collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Clone)]
pub struct LinkedIncidenceList<V = (), E = ()> {
    num_nodes: NumNodes,
    num_slots: NumNodes,
    num_edges: NumEdges,
    next: Vec<Pos>,
    prev: Vec<Pos>,
    ends: Vec<Node>,
    v_data: Vec<V>,
    e_data: Vec<E>,
}

/// Plain topology without payloads
pub type IncidenceGraph = LinkedIncidenceList<(), ()>;

/// Topology with a payload on every edge
pub type WeightedIncidenceGraph<E> = LinkedIncidenceList<(), E>;

impl<V, E> Default for LinkedIncidenceList<V, E> {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            num_slots: 0,
            num_edges: 0,
            next: Vec::new(),
            prev: Vec::new(),
            ends: Vec::new(),
            v_data: Vec::new(),
            e_data: Vec::new(),
        }
    }
}

impl<V: Default + Clone, E> LinkedIncidenceList<V, E> {
    /// Builds a store from 1-based weighted edges.
    ///
    /// `num_nodes` may be `0`, in which case the vertex count is inferred as
    /// the largest endpoint mentioned. Passing an explicit count allows
    /// trailing isolated vertices. Endpoints of `0` or above the explicit
    /// count are rejected with [`GraphError::InvalidVertexIndex`]; on any
    /// error the store is left untouched.
    ///
    /// Parallel edges and self-loops are kept as given. A self-loop threads
    /// both of its half-edges into the same vertex's list.
    pub fn from_edges<I>(num_nodes: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Node, Node, E)>,
    {
        let mut max_seen: Node = 0;
        let mut grouped: BTreeMap<Node, Vec<(Node, E)>> = BTreeMap::new();
        let mut num_edges: NumEdges = 0;

        for (src, dst, data) in edges {
            let (u, v) = (
                externally_indexed(src, num_nodes)?,
                externally_indexed(dst, num_nodes)?,
            );
            max_seen = max_seen.max(u + 1).max(v + 1);
            grouped.entry(u).or_default().push((v, data));
            num_edges += 1;
        }

        let num_nodes = num_nodes.max(max_seen);
        Ok(Self::splice(num_nodes, num_edges, grouped))
    }

    /// Splices grouped edges into the flat arrays. Groups are consumed in
    /// ascending source order, edges within a group in insertion order, so
    /// half-edges `2k`/`2k + 1` of the `k`-th spliced edge land at positions
    /// `S + 2k`/`S + 2k + 1`.
    fn splice(num_nodes: NumNodes, num_edges: NumEdges, grouped: BTreeMap<Node, Vec<(Node, E)>>) -> Self {
        let num_slots = num_nodes + (num_nodes & 1);
        let slots = num_slots as usize;
        let total = slots + 2 * num_edges as usize;

        let mut next = vec![0 as Pos; total];
        let mut prev = vec![0 as Pos; total];
        let mut ends = vec![0 as Node; 2 * num_edges as usize];
        let mut e_data = Vec::with_capacity(num_edges as usize);

        // last spliced position of every vertex's list, initially the slot itself
        let mut cursor: Vec<Pos> = (0..num_slots).collect();

        let mut h = 0usize;
        for (u, group) in grouped {
            for (v, data) in group {
                ends[h] = u;
                ends[h + 1] = v;
                e_data.push(data);

                let pu = (slots + h) as Pos;
                next[cursor[u as usize] as usize] = pu;
                prev[pu as usize] = cursor[u as usize];
                cursor[u as usize] = pu;

                let pv = pu + 1;
                next[cursor[v as usize] as usize] = pv;
                prev[pv as usize] = cursor[v as usize];
                cursor[v as usize] = pv;

                h += 2;
            }
        }

        // close every list back into its vertex slot
        for s in 0..slots {
            next[cursor[s] as usize] = s as Pos;
            prev[s] = cursor[s];
        }

        Self {
            num_nodes,
            num_slots,
            num_edges,
            next,
            prev,
            ends,
            v_data: vec![V::default(); slots],
            e_data,
        }
    }
}

impl<V: Default + Clone> LinkedIncidenceList<V, ()> {
    /// Builds a store from 1-based unweighted edge pairs.
    pub fn from_pairs<I>(num_nodes: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        Self::from_edges(num_nodes, edges.into_iter().map(|(u, v)| (u, v, ())))
    }
}

/// Maps a 1-based external endpoint to its 0-based internal index.
fn externally_indexed(x: Node, num_nodes: NumNodes) -> Result<Node> {
    if x == 0 {
        return Err(GraphError::invalid_vertex(
            "vertex index 0 (indices are 1-based)",
        ));
    }
    if num_nodes > 0 && x > num_nodes {
        return Err(GraphError::invalid_vertex(format!(
            "vertex index {x} exceeds the declared vertex count {num_nodes}"
        )));
    }
    Ok(x - 1)
}

impl<V, E> LinkedIncidenceList<V, E> {
    /// `true` once the store holds at least one vertex
    pub fn is_built(&self) -> bool {
        self.num_nodes > 0
    }

    /// Number of vertex slots including the padding slot, if any
    pub fn storage_nodes(&self) -> NumNodes {
        self.num_slots
    }

    /// Total length of the position namespace: slots plus half-edges
    pub fn number_of_positions(&self) -> usize {
        self.next.len()
    }

    /// Successor of `pos` on its circular incidence list
    pub fn next_of(&self, pos: Pos) -> Pos {
        self.next[pos as usize]
    }

    /// Predecessor of `pos` on its circular incidence list
    pub fn prev_of(&self, pos: Pos) -> Pos {
        self.prev[pos as usize]
    }

    /// Anchor vertex of half-edge `h` (0-based half-edge index)
    pub fn half_edge_anchor(&self, h: NumHalfEdges) -> Node {
        self.ends[h as usize]
    }

    /// Raw `next` array over the whole position namespace
    pub fn next_array(&self) -> &[Pos] {
        &self.next
    }

    /// Raw `prev` array over the whole position namespace
    pub fn prev_array(&self) -> &[Pos] {
        &self.prev
    }

    /// Raw half-edge anchor array; entry `h` belongs to position `S + h`
    pub fn half_edge_ends(&self) -> &[Node] {
        &self.ends
    }

    /// Raw vertex payloads, padded to the slot count
    pub fn vertex_payloads(&self) -> &[V] {
        &self.v_data
    }

    /// Raw edge payloads, one per undirected edge
    pub fn edge_payloads(&self) -> &[E] {
        &self.e_data
    }

    /// Endpoints of edge `k`, anchor first
    pub fn edge_endpoints(&self, k: NumEdges) -> Edge {
        let h = 2 * k as usize;
        Edge(self.ends[h], self.ends[h + 1])
    }

    /// Payload of edge `k`
    pub fn edge_data(&self, k: NumEdges) -> &E {
        &self.e_data[k as usize]
    }

    /// Payload of vertex `u`, or `StateError` before construction /
    /// `InvalidVertexIndex` out of range
    pub fn vertex_data(&self, u: Node) -> Result<&V> {
        self.check_vertex(u, "vertex payload read")?;
        Ok(&self.v_data[u as usize])
    }

    /// Replaces the payload of vertex `u`
    pub fn set_vertex_data(&mut self, u: Node, data: V) -> Result<()> {
        self.check_vertex(u, "vertex payload write")?;
        self.v_data[u as usize] = data;
        Ok(())
    }

    /// Forward cursor over the incidence list of vertex `u`.
    ///
    /// Yields the half-edges in splice order, i.e. edges sorted by their
    /// source endpoint, insertion order within a source.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn incidence(&self, u: Node) -> IncidenceIter<'_, V, E> {
        assert!(u < self.num_nodes);
        IncidenceIter::new(self, u as Pos)
    }

    /// Forward cursor resumed *after* an arbitrary position, typically a
    /// half-edge handed out by an earlier cursor.
    pub fn incidence_at(&self, pos: Pos) -> IncidenceIter<'_, V, E> {
        IncidenceIter::new(self, pos)
    }

    /// Backward cursor over the incidence list of vertex `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn incidence_rev(&self, u: Node) -> IncidenceRevIter<'_, V, E> {
        assert!(u < self.num_nodes);
        IncidenceRevIter::new(self, u as Pos)
    }

    fn check_vertex(&self, u: Node, operation: &'static str) -> Result<()> {
        if !self.is_built() {
            return Err(GraphError::StateError { operation });
        }
        if u >= self.num_nodes {
            return Err(GraphError::invalid_vertex(format!(
                "vertex {u} out of range (graph has {} vertices)",
                self.num_nodes
            )));
        }
        Ok(())
    }
}

impl<V, E> GraphNodeOrder for LinkedIncidenceList<V, E> {
    fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }
}

impl<V, E> GraphEdgeOrder for LinkedIncidenceList<V, E> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<V, E> AdjacencyList for LinkedIncidenceList<V, E> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.incidence(u).map(|entry| entry.neighbor)
    }
}

impl<V, E> std::fmt::Debug for LinkedIncidenceList<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LinkedIncidenceList(n = {}, m = {})",
            self.num_nodes, self.num_edges
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_pcg::Pcg64Mcg;

    fn diamond() -> IncidenceGraph {
        // 0 - 1, 0 - 2, 1 - 3, 2 - 3 (internally)
        IncidenceGraph::from_pairs(0, [(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap()
    }

    #[test]
    fn splice_layout_is_deterministic() {
        let g = diamond();
        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.storage_nodes(), 4);
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.half_edge_ends(), &[0, 1, 0, 2, 1, 3, 2, 3]);
        assert_eq!(g.next_array(), &[4, 5, 7, 9, 6, 8, 0, 10, 1, 11, 2, 3]);
        assert_eq!(g.prev_array(), &[6, 8, 10, 11, 0, 1, 4, 2, 5, 3, 7, 9]);
    }

    #[test]
    fn next_and_prev_are_inverse() {
        let g = diamond();
        for p in 0..g.number_of_positions() as Pos {
            assert_eq!(g.prev_of(g.next_of(p)), p);
            assert_eq!(g.next_of(g.prev_of(p)), p);
        }
    }

    #[test]
    fn neighbor_lists_follow_splice_order() {
        let g = diamond();
        let neighbors = |u| g.neighbors_of(u).collect::<Vec<_>>();
        assert_eq!(neighbors(0), vec![1, 2]);
        assert_eq!(neighbors(1), vec![0, 3]);
        assert_eq!(neighbors(2), vec![0, 3]);
        assert_eq!(neighbors(3), vec![1, 2]);
    }

    #[test]
    fn odd_vertex_count_pads_one_slot() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2), (1, 3)]).unwrap();
        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.storage_nodes(), 4);
        assert_eq!(g.number_of_positions(), 8);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![0, 1, 2]);
        // the padding slot's list is closed onto itself
        assert_eq!(g.next_of(3), 3);
        assert_eq!(g.prev_of(3), 3);
    }

    #[test]
    fn explicit_count_allows_isolated_vertices() {
        let g = IncidenceGraph::from_pairs(6, [(1, 2)]).unwrap();
        assert_eq!(g.number_of_nodes(), 6);
        assert_eq!(g.degree_of(5), 0);
        assert!(g.neighbors_of(5).next().is_none());
        assert!(!g.is_singleton());

        let edgeless = IncidenceGraph::from_pairs(3, []).unwrap();
        assert!(edgeless.is_singleton());
        assert!(!edgeless.is_empty());
    }

    #[test]
    fn self_loop_contributes_both_half_edges() {
        let g = IncidenceGraph::from_pairs(0, [(1, 1)]).unwrap();
        assert_eq!(g.number_of_nodes(), 1);
        assert_eq!(g.degree_of(0), 2);
        assert_eq!(g.neighbors_of(0).collect::<Vec<_>>(), vec![0, 0]);
        assert!(g.has_self_loop(0));
        assert_eq!(g.edge_endpoints(0), Edge(0, 0));
    }

    #[test]
    fn parallel_edges_are_kept() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2), (2, 1), (1, 2)]).unwrap();
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.degree_of(0), 3);
        assert_eq!(g.degree_of(1), 3);
    }

    #[test]
    fn zero_endpoint_is_rejected() {
        let err = IncidenceGraph::from_pairs(0, [(0, 2)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertexIndex { .. }));
        let err = IncidenceGraph::from_pairs(3, [(1, 4)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertexIndex { .. }));
    }

    #[test]
    fn payload_access_requires_built_store() {
        let empty = LinkedIncidenceList::<u64, ()>::default();
        assert!(matches!(
            empty.vertex_data(0),
            Err(GraphError::StateError { .. })
        ));

        let mut g = LinkedIncidenceList::<u64, ()>::from_pairs(2, [(1, 2)]).unwrap();
        assert_eq!(*g.vertex_data(1).unwrap(), 0);
        g.set_vertex_data(1, 42).unwrap();
        assert_eq!(*g.vertex_data(1).unwrap(), 42);
        assert!(matches!(
            g.vertex_data(2),
            Err(GraphError::InvalidVertexIndex { .. })
        ));
    }

    #[test]
    fn edge_payloads_follow_edge_indices() {
        let g = WeightedIncidenceGraph::<i32>::from_edges(0, [(1, 2, 10), (2, 3, 20)]).unwrap();
        assert_eq!(*g.edge_data(0), 10);
        assert_eq!(*g.edge_data(1), 20);
        assert_eq!(g.edge_payloads(), &[10, 20]);
    }

    #[test]
    fn randomized_stores_preserve_the_edge_multiset() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x1d3a);
        for _ in 0..20 {
            let n: Node = rng.gen_range(2..40);
            let m = rng.gen_range(1..80);
            // loop-free: a self-loop shows up once per half-edge in
            // normalized edge listings and would skew the multiset
            let mut edges: Vec<(Node, Node)> = (0..m)
                .map(|_| {
                    let u = rng.gen_range(1..=n);
                    let w = rng.gen_range(1..n);
                    (u, if w >= u { w + 1 } else { w })
                })
                .collect();

            let g = IncidenceGraph::from_pairs(n, edges.iter().copied()).unwrap();
            assert_eq!(g.number_of_edges(), m);

            let mut expected: Vec<Edge> = edges
                .drain(..)
                .map(|(u, v)| Edge(u - 1, v - 1).normalized())
                .collect();
            expected.sort_unstable();
            let found: Vec<Edge> = g.ordered_edges(true).collect();
            assert_eq!(expected, found);

            for p in 0..g.number_of_positions() as Pos {
                assert_eq!(g.prev_of(g.next_of(p)), p);
            }
        }
    }
}
