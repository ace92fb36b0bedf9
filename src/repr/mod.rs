/*!
# Linked Incidence-List Representation

This module provides the flat, array-backed graph storage this crate is built
around. All vertices and half-edges live in a single **position namespace**:

- positions `0..S` are *vertex slots* (`S` = vertex count rounded up to even),
- positions `S..S + 2m` are *half-edges*, two per undirected edge.

Two parallel arrays `next`/`prev` thread every vertex's incident half-edges
into a circular list that is rooted at the vertex's own slot, giving O(1)
neighbor stepping and O(1) insertion without any per-vertex containers.

The half-edges of edge `k` sit at adjacent half-edge indices `2k` and
`2k + 1`; they are *siblings* of each other, found by flipping the lowest bit.
A half-edge stores the vertex whose list contains it, so its sibling stores
the other endpoint. Both halves share the payload stored at index `k`.

The store is immutable after construction except for vertex-payload updates;
iterators borrow it without owning.
*/

mod cursor;
mod linked;

pub use cursor::*;
pub use linked::*;

/// A position in the unified vertex-slot/half-edge index namespace
pub type Pos = u32;
