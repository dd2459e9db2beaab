/*!
Graph algorithms for both representations.

- [`traversal`] — depth-first and breadth-first search with an optional
  early-stop target.
- [`cycle`] — cycle detection (three-color DFS for the directed matrix
  graph, parent-tracking walks for the undirected labeled graph).
- [`shortest_path`] — single-source shortest paths on the directed matrix
  graph via the classic O(V²) label-setting algorithm.
- [`connectivity`] — connected-component counting on the labeled graph.

All algorithms are exposed as inherent methods on the graph types and take
`&self`; none of them mutates the graph.
*/

pub mod connectivity;
pub mod cycle;
pub mod shortest_path;
pub mod traversal;
