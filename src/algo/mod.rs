/*!
# Graph Algorithms

Algorithms built on top of the [`AdjacencyList`](crate::ops::AdjacencyList)
trait, independent of the concrete storage. Everything is re-exported at the
top level of this module:
```rust
use ligraphs::algo::*;
```
Where possible, algorithms are provided as lazy **iterators**.
*/

mod bipartite;
mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use traversal::*;
