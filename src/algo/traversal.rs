/*!
Graph traversal iterators and the high-level [`Traversal`] trait.

BFS and DFS share one engine: a generic [`TraversalSearch`] over an explicit
frontier whose container type determines the order (`VecDeque` = queue = BFS,
`Vec` = stack = DFS). Vertices are marked visited when they enter the
frontier, and yielded in pop order.

The visitor-style entry points on [`Traversal`] wrap the iterators with input
validation. Note that `traverse_dfs` does **not** visit in pop order: it
first collects the complete pop order and then calls the visitor on the
*reversed* sequence, so for a path the start vertex is visited last.
*/

use std::collections::VecDeque;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` stores the "to be visited" nodes during a traversal.
/// The implementation determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting the BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a
/// bitset of discovered nodes. Nodes are marked on push, so each node enters
/// the frontier at most once and is yielded exactly once, in pop order.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes reachable from a
/// given starting node in stack pop order.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// # Panics
    /// Panics if `start` is out of range.
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        let mut visited = graph.vertex_bitset_unset();
        visited.set(start as usize, true);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Checks if a given node `u` has already been discovered.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Tries to restart the search at a yet unvisited node and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|&u| !self.visited[u as usize]) {
            None => false,
            Some(u) => {
                self.visited.set(u as usize, true);
                self.sequencer.push(u);
                true
            }
        }
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.visited.set(v as usize, true);
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.count_ones()),
        )
    }
}

/// Provides convenient traversal methods directly on graph types.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Panics
    /// Panics if `start` is out of range.
    ///
    /// # Examples
    /// ```
    /// use ligraphs::{prelude::*, algo::*};
    ///
    /// let g = IncidenceGraph::from_pairs(0, [(1, 2)]).unwrap();
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that yields nodes reachable from `start` in
    /// **depth-first stack pop order**.
    ///
    /// # Panics
    /// Panics if `start` is out of range.
    fn dfs(&self, start: Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Runs a BFS from `start` and calls `visit` for every reached node in
    /// discovery (pop) order. Unreached nodes are skipped.
    ///
    /// Fails with `StateError` on an empty graph and `InvalidVertexIndex`
    /// if `start` is out of range.
    fn traverse_bfs<F>(&self, start: Node, mut visit: F) -> Result<()>
    where
        F: FnMut(Node),
    {
        self.check_traversal_start(start)?;
        self.bfs(start).for_each(&mut visit);
        Ok(())
    }

    /// Runs a DFS from `start` and calls `visit` for every reached node in
    /// the **reverse** of the stack pop order, so the start node is always
    /// visited last. Unreached nodes are skipped.
    ///
    /// Fails with `StateError` on an empty graph and `InvalidVertexIndex`
    /// if `start` is out of range.
    fn traverse_dfs<F>(&self, start: Node, mut visit: F) -> Result<()>
    where
        F: FnMut(Node),
    {
        self.check_traversal_start(start)?;
        let mut order: Vec<Node> = self.dfs(start).collect();
        order.reverse();
        order.into_iter().for_each(&mut visit);
        Ok(())
    }

    #[doc(hidden)]
    fn check_traversal_start(&self, start: Node) -> Result<()> {
        if self.is_empty() {
            return Err(GraphError::StateError {
                operation: "traversal",
            });
        }
        if start >= self.number_of_nodes() {
            return Err(GraphError::invalid_vertex(format!(
                "traversal start {start} out of range (graph has {} vertices)",
                self.number_of_nodes()
            )));
        }
        Ok(())
    }
}

impl<G: AdjacencyList + Sized> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::IncidenceGraph;

    fn diamond() -> IncidenceGraph {
        IncidenceGraph::from_pairs(0, [(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap()
    }

    #[test]
    fn bfs_order_follows_incidence_lists() {
        let g = diamond();
        assert_eq!(g.bfs(1).collect::<Vec<_>>(), vec![1, 0, 3, 2]);
        assert_eq!(g.bfs(0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn dfs_pop_order_and_visitor_order_are_reversed() {
        let g = diamond();
        assert_eq!(g.dfs(0).collect::<Vec<_>>(), vec![0, 2, 3, 1]);

        let mut visited = Vec::new();
        g.traverse_dfs(0, |u| visited.push(u)).unwrap();
        assert_eq!(visited, vec![1, 3, 2, 0]);
    }

    #[test]
    fn traverse_bfs_visits_in_discovery_order() {
        let g = diamond();
        let mut visited = Vec::new();
        g.traverse_bfs(1, |u| visited.push(u)).unwrap();
        assert_eq!(visited, vec![1, 0, 3, 2]);
    }

    #[test]
    fn traversal_stays_within_the_component() {
        // two components: {0, 1} and {2, 3}
        let g = IncidenceGraph::from_pairs(0, [(1, 2), (3, 4)]).unwrap();
        assert_eq!(g.bfs(0).collect::<Vec<_>>(), vec![0, 1]);

        let mut visited = Vec::new();
        g.traverse_dfs(2, |u| visited.push(u)).unwrap();
        assert_eq!(visited, vec![3, 2]);
    }

    #[test]
    fn restart_reaches_the_remaining_components() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2), (3, 4), (5, 6)]).unwrap();
        let mut search = g.bfs(0);
        let mut order: Vec<Node> = search.by_ref().collect();
        assert!(search.did_visit_node(1));
        assert!(!search.did_visit_node(2));

        while search.try_restart_at_unvisited() {
            order.extend(search.by_ref());
        }
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        assert!(g.vertices().all(|u| search.did_visit_node(u)));
    }

    #[test]
    fn self_loop_does_not_retrigger_its_vertex() {
        let g = IncidenceGraph::from_pairs(0, [(1, 1), (1, 2)]).unwrap();
        assert_eq!(g.bfs(0).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn invalid_starts_are_rejected() {
        let g = diamond();
        assert!(matches!(
            g.traverse_bfs(4, |_| {}),
            Err(GraphError::InvalidVertexIndex { .. })
        ));

        let empty = IncidenceGraph::default();
        assert!(matches!(
            empty.traverse_dfs(0, |_| {}),
            Err(GraphError::StateError { .. })
        ));
    }
}
