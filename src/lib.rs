/*!
`ligraphs` is an **undirected**-graph library built around a single flat
storage scheme, the **l**inked **i**ncidence list: every vertex's incident
half-edges are threaded into a circular list through two parallel index
arrays, giving O(1) neighbor stepping and a construction that touches each
edge exactly once.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number
of nodes in the graph. Externally — in the edge-list text format and in
reported odd cycles — vertices are numbered from `1`; internally they are
dense and `0`-based. For **edges**, we use a simple tuple-struct
`Edge(Node, Node)`; both vertices and edges may carry an optional payload
type (defaulting to `()`).

See the [`repr`] module for the storage layout and its invariants.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, the basic graph
  operation traits, and the incidence-list store,
- [`algo`] includes the traversal iterators (`graph.bfs(start)`,
  `graph.dfs(start)`, visitor-style `traverse_bfs`/`traverse_dfs`) and the
  bipartiteness check with odd-cycle witnesses,
- [`io`] includes the `<src> -- <dst>[, <payload>]` edge-list reader/writer
  and a diagnostic dump of the raw arrays,
- [`ops`] includes the operation traits implemented by the store, useful as
  bounds for algorithms generic over graph storage.

In most use-cases, `use ligraphs::{prelude::*, algo::*};` suffices for your
needs.

```
use ligraphs::{prelude::*, algo::*, io::*};

let g: IncidenceGraph =
    IncidenceGraph::try_read_edge_list("1 -- 2\n1 -- 3\n2 -- 3\n".as_bytes()).unwrap();

match g.check_bipartite() {
    Bipartiteness::Bipartite(colors) => println!("2-colorable: {colors:?}"),
    Bipartiteness::OddCycle(cycle) => assert_eq!(cycle.len(), 3),
}
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;

/// `ligraphs::prelude` includes definitions for nodes, edges and errors, all
/// basic graph operation traits as well as the incidence-list store.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
