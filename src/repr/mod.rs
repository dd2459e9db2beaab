/*!
# Graph Representations

This module defines the two concrete graph representations of the crate.

- [`MatrixDigraph`] — a dense, weighted, **directed** graph backed by a
  square adjacency matrix. Best for weight-bearing graphs whose vertex set
  only ever grows.
- [`LabeledGraph`] — a sparse, unweighted, **undirected** graph backed by
  an adjacency list keyed by string labels. Supports vertex deletion.

Both make the same conceptual operations available (mutate, query,
traverse, analyze) but differ in storage layout. They share no state.
*/

mod labeled;
mod matrix;

pub use labeled::*;
pub use matrix::*;
