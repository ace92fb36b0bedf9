/*!
# Bipartite Testing

Tests whether a graph is two-colorable and, if it is not, produces a concrete
**odd cycle** as a witness.

The check runs a BFS over every connected component, coloring each newly
discovered vertex opposite to its parent and recording the BFS parent. The
first edge found with equally colored endpoints terminates the search; the
cycle witness is reconstructed from the two conflicting vertices' parent
chains. Reported cycle vertices are 1-based, like all external vertex
indices in this crate.
*/

use std::collections::VecDeque;

use super::*;

/// One side of a bipartition.
///
/// `Blue` is the color assigned to every BFS root, `Red` the opposite side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    /// Returns the opposite color
    pub fn flipped(self) -> Self {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }

    /// Single-letter label, `b` or `r`
    pub fn label(self) -> char {
        match self {
            Color::Blue => 'b',
            Color::Red => 'r',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of [`BipartiteCheck::check_bipartite`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bipartiteness {
    /// The graph is two-colorable; the vector holds one color per
    /// (0-based) vertex.
    Bipartite(Vec<Color>),
    /// The graph is not two-colorable; the vector is the vertex sequence of
    /// an odd cycle in 1-based indexing. Consecutive entries (with
    /// wraparound) are adjacent; a self-loop at `v` is reported as
    /// `[v, v, v]`.
    OddCycle(Vec<Node>),
}

impl Bipartiteness {
    /// `true` iff the graph admits a two-coloring
    pub fn is_bipartite(&self) -> bool {
        matches!(self, Bipartiteness::Bipartite(_))
    }

    /// The coloring, if the graph is bipartite
    pub fn coloring(&self) -> Option<&[Color]> {
        match self {
            Bipartiteness::Bipartite(colors) => Some(colors),
            Bipartiteness::OddCycle(_) => None,
        }
    }

    /// The witness cycle (1-based), if the graph is not bipartite
    pub fn odd_cycle(&self) -> Option<&[Node]> {
        match self {
            Bipartiteness::Bipartite(_) => None,
            Bipartiteness::OddCycle(cycle) => Some(cycle),
        }
    }
}

/// Bipartiteness testing for any adjacency-queryable graph.
pub trait BipartiteCheck: AdjacencyList + Sized {
    /// Two-colors the graph or returns an odd-cycle witness.
    ///
    /// Components are processed in ascending order of their smallest vertex;
    /// every component root is colored [`Color::Blue`]. The search stops at
    /// the first monochromatic edge.
    ///
    /// # Examples
    /// ```
    /// use ligraphs::{prelude::*, algo::*};
    ///
    /// let g = IncidenceGraph::from_pairs(0, [(1, 2), (2, 3)]).unwrap();
    /// let result = g.check_bipartite();
    /// assert!(result.is_bipartite());
    /// assert_eq!(
    ///     result.coloring().unwrap(),
    ///     [Color::Blue, Color::Red, Color::Blue]
    /// );
    /// ```
    fn check_bipartite(&self) -> Bipartiteness {
        let mut colors = vec![Color::Blue; self.len()];
        let mut colored = self.vertex_bitset_unset();
        let mut parents = vec![INVALID_NODE; self.len()];
        let mut queue: VecDeque<Node> = VecDeque::new();

        for root in self.vertices() {
            if colored[root as usize] {
                continue;
            }
            colored.set(root as usize, true);
            queue.push_back(root);

            while let Some(u) = queue.pop_front() {
                for v in self.neighbors_of(u) {
                    if !colored[v as usize] {
                        colored.set(v as usize, true);
                        colors[v as usize] = colors[u as usize].flipped();
                        parents[v as usize] = u;
                        queue.push_back(v);
                    } else if colors[v as usize] == colors[u as usize] {
                        return Bipartiteness::OddCycle(odd_cycle_from_parents(
                            self, &parents, u, v,
                        ));
                    }
                }
            }
        }

        Bipartiteness::Bipartite(colors)
    }

    /// `true` iff the graph admits a two-coloring
    fn is_bipartite(&self) -> bool {
        self.check_bipartite().is_bipartite()
    }

    /// Tests whether the given per-vertex coloring separates all edges.
    fn is_valid_coloring(&self, coloring: &[Color]) -> bool {
        coloring.len() == self.len()
            && self
                .edges(false)
                .all(|Edge(u, v)| coloring[u as usize] != coloring[v as usize])
    }
}

impl<G: AdjacencyList + Sized> BipartiteCheck for G {}

/// Reconstructs an odd cycle from the BFS parent array and the conflicting
/// edge `(u, v)`, returning 1-based vertex indices.
///
/// `u`'s parent chain is marked up to its root; `v`'s chain is then collected
/// until it hits a marked vertex, the lowest common ancestor. Reversing the
/// collected segment and appending `u`'s chain up to (excluding) the ancestor
/// closes the cycle: tree path down to `v`, conflict edge to `u`, tree path
/// back up.
fn odd_cycle_from_parents<G: GraphNodeOrder>(
    graph: &G,
    parents: &[Node],
    u: Node,
    v: Node,
) -> Vec<Node> {
    if u == v {
        // self-loop, a length-1 odd cycle
        return vec![u + 1; 3];
    }

    let mut on_chain = graph.vertex_bitset_unset();
    let mut x = u;
    loop {
        on_chain.set(x as usize, true);
        if parents[x as usize] == INVALID_NODE {
            break;
        }
        x = parents[x as usize];
    }

    let mut cycle = Vec::new();
    let mut ancestor = INVALID_NODE;
    let mut y = v;
    loop {
        cycle.push(y + 1);
        if on_chain[y as usize] {
            ancestor = y;
            break;
        }
        y = parents[y as usize];
    }
    cycle.reverse();

    let mut x = u;
    while x != ancestor {
        cycle.push(x + 1);
        x = parents[x as usize];
    }

    cycle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::IncidenceGraph;
    use rand::prelude::*;
    use rand_pcg::Pcg64Mcg;

    /// Checks the witness contract: odd length >= 3 and wraparound adjacency
    fn assert_valid_odd_cycle(g: &IncidenceGraph, cycle: &[Node]) {
        assert!(cycle.len() >= 3);
        assert_eq!(cycle.len() % 2, 1);
        for i in 0..cycle.len() {
            let a = cycle[i] - 1;
            let b = cycle[(i + 1) % cycle.len()] - 1;
            assert!(g.has_edge(a, b), "({a},{b}) missing from witness cycle");
        }
    }

    #[test]
    fn even_cycle_is_bipartite() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap();
        let result = g.check_bipartite();
        let coloring = result.coloring().unwrap();
        assert_eq!(
            coloring,
            [Color::Blue, Color::Red, Color::Red, Color::Blue]
        );
        assert!(g.is_valid_coloring(coloring));
    }

    #[test]
    fn triangle_yields_its_three_vertices() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2), (1, 3), (2, 3)]).unwrap();
        let result = g.check_bipartite();
        assert!(!result.is_bipartite());

        let cycle = result.odd_cycle().unwrap();
        assert_eq!(cycle.len(), 3);
        let mut sorted = cycle.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_valid_odd_cycle(&g, cycle);
    }

    #[test]
    fn self_loop_is_a_degenerate_odd_cycle() {
        let g = IncidenceGraph::from_pairs(0, [(1, 1)]).unwrap();
        let result = g.check_bipartite();
        assert_eq!(result.odd_cycle().unwrap(), [1, 1, 1]);
    }

    #[test]
    fn empty_and_edgeless_graphs_are_bipartite() {
        let empty = IncidenceGraph::default();
        assert_eq!(empty.check_bipartite(), Bipartiteness::Bipartite(vec![]));

        let isolated = IncidenceGraph::from_pairs(3, []).unwrap();
        assert!(isolated.is_bipartite());
    }

    #[test]
    fn odd_cycle_found_across_components() {
        // first component bipartite, second one a pentagon
        let g = IncidenceGraph::from_pairs(
            0,
            [(1, 2), (3, 4), (4, 5), (5, 6), (6, 7), (7, 3)],
        )
        .unwrap();
        let result = g.check_bipartite();
        let cycle = result.odd_cycle().unwrap();
        assert_valid_odd_cycle(&g, cycle);
        assert!(cycle.iter().all(|&x| (3..=7).contains(&x)));
    }

    #[test]
    fn coloring_validation_rejects_monochromatic_edges() {
        let g = IncidenceGraph::from_pairs(0, [(1, 2)]).unwrap();
        assert!(g.is_valid_coloring(&[Color::Blue, Color::Red]));
        assert!(!g.is_valid_coloring(&[Color::Blue, Color::Blue]));
        assert!(!g.is_valid_coloring(&[Color::Blue]));
    }

    #[test]
    fn randomized_checks_are_sound() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xb1fa);
        for _ in 0..30 {
            let n: Node = rng.gen_range(2..30);
            let m = rng.gen_range(1..60);
            let edges: Vec<(Node, Node)> = (0..m)
                .map(|_| (rng.gen_range(1..=n), rng.gen_range(1..=n)))
                .collect();
            let g = IncidenceGraph::from_pairs(n, edges).unwrap();

            match g.check_bipartite() {
                Bipartiteness::Bipartite(coloring) => assert!(g.is_valid_coloring(&coloring)),
                Bipartiteness::OddCycle(cycle) => assert_valid_odd_cycle(&g, &cycle),
            }
        }
    }

    #[test]
    fn odd_paths_and_even_cycles_stay_bipartite() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x517e);
        for _ in 0..10 {
            let n: Node = rng.gen_range(3..50);
            // path 1 - 2 - ... - n
            let path: Vec<_> = (1..n).map(|i| (i, i + 1)).collect();
            assert!(IncidenceGraph::from_pairs(n, path.clone()).unwrap().is_bipartite());

            // closing the cycle keeps it bipartite iff n is even
            let mut cycle = path;
            cycle.push((n, 1));
            let g = IncidenceGraph::from_pairs(n, cycle).unwrap();
            assert_eq!(g.is_bipartite(), n % 2 == 0);
        }
    }
}
