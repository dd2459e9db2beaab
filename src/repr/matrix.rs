use std::fmt::{self, Display};
use std::ops::Range;

use itertools::Itertools;

use crate::edge::{NumEdges, WeightedEdge};
use crate::node::{Node, NumNodes, Weight};

/// A dense, weighted, directed graph backed by a square adjacency matrix.
///
/// - `matrix[u][v]` holds the weight of the edge `u -> v`, with `0`
///   encoding the absence of an edge.
/// - Loops and duplicate edges are not representable; the vertex set only
///   ever grows.
/// - Invalid mutation requests (loops, out-of-bounds endpoints) are
///   silently ignored rather than rejected with an error.
#[derive(Clone, Default)]
pub struct MatrixDigraph {
    matrix: Vec<Vec<Weight>>,
    num_edges: NumEdges,
}

impl MatrixDigraph {
    /// Creates an empty graph with no vertices
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from an iterator over weighted edges.
    ///
    /// The vertex count is inferred as `max(endpoint) + 1` over all edges;
    /// an empty iterator yields the empty graph. Edges are inserted through
    /// [`MatrixDigraph::add_edge`] and thus share its rejection rules.
    pub fn from_edges(edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let edges = edges.into_iter().map(Into::into).collect_vec();

        let mut graph = Self::new();
        if let Some(max_node) = edges.iter().map(|e| e.source().max(e.target())).max() {
            for _ in 0..=max_node {
                graph.add_vertex();
            }
        }
        for WeightedEdge(u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Returns the number of vertices of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.matrix.len() as NumNodes
    }

    /// Return the number of vertices as usize
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Returns the number of edges of the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Appends a new isolated vertex and returns the new vertex count.
    ///
    /// Every existing row grows by one zero column before the new all-zero
    /// row is appended, keeping the matrix square.
    pub fn add_vertex(&mut self) -> NumNodes {
        for row in &mut self.matrix {
            row.push(0);
        }
        let width = self.matrix.len() + 1;
        self.matrix.push(vec![0; width]);
        self.number_of_nodes()
    }

    /// Sets the weight of the edge `src -> dst`, overwriting any previous
    /// weight (last write wins, so this acts as both insert and update).
    ///
    /// No-op if `src == dst` or either endpoint is out of bounds. A weight
    /// of `0` erases the edge, as `0` encodes absence in the matrix.
    pub fn add_edge(&mut self, src: Node, dst: Node, weight: Weight) {
        if src == dst || !self.has_vertex(src) || !self.has_vertex(dst) {
            return;
        }

        let entry = &mut self.matrix[src as usize][dst as usize];
        match (*entry, weight) {
            (0, w) if w != 0 => self.num_edges += 1,
            (e, 0) if e != 0 => self.num_edges -= 1,
            _ => {}
        }
        *entry = weight;
    }

    /// Removes the edge `src -> dst`.
    ///
    /// No-op if `src == dst` or either endpoint is out of bounds; removing
    /// an absent edge is a safe no-op as well.
    pub fn remove_edge(&mut self, src: Node, dst: Node) {
        if src == dst || !self.has_vertex(src) || !self.has_vertex(dst) {
            return;
        }

        let entry = &mut self.matrix[src as usize][dst as usize];
        if *entry != 0 {
            self.num_edges -= 1;
            *entry = 0;
        }
    }

    /// Returns an iterator over V, i.e. `0..n` in increasing order
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over all edges in row-major order, i.e. ordered
    /// by source and then by target. Zero entries are skipped.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.matrix.iter().enumerate().flat_map(|(u, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(v, &w)| (w != 0).then_some(WeightedEdge(u as Node, v as Node, w)))
        })
    }

    /// Returns *true* if `u` is a vertex of the graph
    pub fn has_vertex(&self, u: Node) -> bool {
        (u as usize) < self.matrix.len()
    }

    /// Returns *true* if the edge `(u,v)` exists in the graph.
    /// Out-of-bounds endpoints answer *false*.
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns the weight of the edge `(u,v)`, or `None` if the edge does
    /// not exist or either endpoint is out of bounds.
    pub fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        let &w = self.matrix.get(u as usize)?.get(v as usize)?;
        (w != 0).then_some(w)
    }

    /// Returns an iterator over the targets of `u`'s outgoing edges in
    /// strictly increasing index order. An out-of-bounds `u` yields an
    /// empty iterator.
    pub fn out_neighbors_of(&self, u: Node) -> impl DoubleEndedIterator<Item = Node> + '_ {
        let row = match self.matrix.get(u as usize) {
            Some(row) => row.as_slice(),
            None => &[],
        };
        row.iter()
            .enumerate()
            .filter_map(|(v, &w)| (w != 0).then_some(v as Node))
    }

    /// Returns an iterator over `(target, weight)` pairs of `u`'s outgoing
    /// edges in strictly increasing target order. An out-of-bounds `u`
    /// yields an empty iterator.
    pub fn out_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        let row = match self.matrix.get(u as usize) {
            Some(row) => row.as_slice(),
            None => &[],
        };
        row.iter()
            .enumerate()
            .filter_map(|(v, &w)| (w != 0).then_some((v as Node, w)))
    }

    /// Returns the number of outgoing edges of `u`, or `0` if `u` is out
    /// of bounds
    pub fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_neighbors_of(u).count() as NumNodes
    }

    /// Returns *true* if the given vertex sequence is a valid path.
    ///
    /// - The empty path is invalid.
    /// - A single vertex is a valid path iff it is in bounds.
    /// - Otherwise every consecutive pair must be connected by an edge;
    ///   out-of-bounds entries make the path invalid.
    pub fn is_valid_path(&self, path: &[Node]) -> bool {
        match path {
            [] => false,
            [u] => self.has_vertex(*u),
            _ => path.windows(2).all(|uv| self.has_edge(uv[0], uv[1])),
        }
    }
}

/// Renders the adjacency matrix as an aligned grid. Debug output only,
/// not a durable format.
impl Display for MatrixDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "EMPTY GRAPH");
        }

        let n = self.len();
        writeln!(f, "GRAPH ({n} vertices):")?;
        writeln!(f, "   |{}", self.vertices().map(|v| format!("{v:2}")).join(" "))?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for (u, row) in self.matrix.iter().enumerate() {
            writeln!(f, "{u:2} |{}", row.iter().map(|w| format!("{w:2}")).join(" "))?;
        }
        Ok(())
    }
}
