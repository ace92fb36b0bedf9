/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
This saves space compared to `usize`/`u64` and lets algorithms manipulate node
values directly without abstracting over them.

Externally (in the edge-list text format and in reported odd cycles), vertices
are numbered starting at `1`; everywhere inside the crate they are dense and
`0`-based.
*/

use bitvec::vec::BitVec;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid (used e.g. as parent-pointer sentinel)
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet with one entry per node
pub type NodeBitSet = BitVec;
