/*!
`dsgraphs` provides two self-contained graph data structures:

- [`MatrixDigraph`](crate::repr::MatrixDigraph): a **d**ense, weighted,
  directed graph over a square adjacency matrix. Vertices are integers
  `0..n`, can only ever be added, and edges carry positive weights.
- [`LabeledGraph`](crate::repr::LabeledGraph): a **s**parse, unweighted,
  undirected graph over an adjacency list. Vertices are string labels;
  both vertices and edges can be removed.

# Representation

Integer vertices are represented as [`Node`](crate::node::Node) (`u32`),
which suffices for graphs of up to `2^32 - 1` vertices and saves space
compared to `usize`. Weighted edges use the tuple-struct
[`WeightedEdge`](crate::edge::WeightedEdge). The sparse graph names its
vertices by `String` and reports edges as label pairs.

# Error Handling

Both structures favor *silent rejection* over panics or `Result`s:
mutation requests that violate an invariant (self-loops, out-of-bounds or
unknown vertices, duplicate edges) are no-ops, and queries on malformed
input degrade to trivial results (`false`, an empty sequence). See the
individual methods for the exact contract.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes and edges as well as both graph representations,
- [`repr`] includes the two graph structures with their mutation and query operations,
- [`algo`] includes the algorithms implemented on them: traversal (`graph.dfs(start, end)`,
  `graph.bfs(start, end)`), cycle detection, connected components, and Dijkstra shortest paths.

In most use-cases, `use dsgraphs::prelude::*;` suffices for your needs.

# Concurrency

All operations are synchronous and run to completion. Traversals and
analyses take `&self` and never mutate the graph; mutation requires
`&mut self` and is therefore serialized by the borrow checker.
*/

pub mod algo;
pub mod edge;
pub mod node;
pub mod repr;

/// `dsgraphs::prelude` includes definitions for nodes and edges as well as both graph representations.
pub mod prelude {
    pub use super::{edge::*, node::*, repr::*};
}

pub use prelude::*;
