use std::fmt::{self, Display};

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::edge::NumEdges;
use crate::node::NumNodes;

/// A sparse, unweighted, undirected graph backed by an adjacency list.
///
/// Vertices are named by arbitrary string labels and come into existence
/// on first reference, either explicitly via
/// [`add_vertex`](LabeledGraph::add_vertex) or implicitly via
/// [`add_edge`](LabeledGraph::add_edge). Vertices and edges can both be
/// removed again.
///
/// Neighbor lists are kept sorted at all times, so lexicographic traversal
/// order falls out of the representation and traversals never mutate the
/// graph. The adjacency is symmetric, loop-free, and duplicate-free;
/// mutation requests that would violate this are silently ignored.
#[derive(Clone, Default)]
pub struct LabeledGraph {
    /// Vertex labels in first-reference order
    labels: Vec<String>,
    /// Sorted neighbor list per vertex
    adj: FxHashMap<String, Vec<String>>,
    num_edges: NumEdges,
}

impl LabeledGraph {
    /// Creates an empty graph with no vertices
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from an iterator over edges given as label pairs.
    ///
    /// Vertices are created on first reference. Edges are inserted through
    /// [`LabeledGraph::add_edge`] and thus share its rejection rules.
    pub fn from_edges<U, V>(edges: impl IntoIterator<Item = (U, V)>) -> Self
    where
        U: AsRef<str>,
        V: AsRef<str>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }

    /// Returns the number of vertices of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Return the number of vertices as usize
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of edges of the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Adds a new isolated vertex. No-op if the label is already present.
    pub fn add_vertex(&mut self, v: &str) {
        if !self.adj.contains_key(v) {
            self.labels.push(v.to_string());
            self.adj.insert(v.to_string(), Vec::new());
        }
    }

    /// Adds the undirected edge `{u, v}`, creating either endpoint if it
    /// does not exist yet.
    ///
    /// No-op if `u == v` or the edge is already present.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        if u == v {
            return;
        }

        self.add_vertex(u);
        self.add_vertex(v);

        let nbs = self.adj.get_mut(u).unwrap();
        let Err(pos) = nbs.binary_search_by(|nb| nb.as_str().cmp(v)) else {
            return;
        };
        nbs.insert(pos, v.to_string());

        let nbs = self.adj.get_mut(v).unwrap();
        let pos = nbs
            .binary_search_by(|nb| nb.as_str().cmp(u))
            .expect_err("asymmetric adjacency");
        nbs.insert(pos, u.to_string());

        self.num_edges += 1;
    }

    /// Removes the undirected edge `{u, v}`.
    ///
    /// No-op if either vertex is absent; removing an absent edge is a safe
    /// no-op as well.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if !self.adj.contains_key(u) || !self.adj.contains_key(v) {
            return;
        }

        let nbs = self.adj.get_mut(u).unwrap();
        let Ok(pos) = nbs.binary_search_by(|nb| nb.as_str().cmp(v)) else {
            return;
        };
        nbs.remove(pos);

        let nbs = self.adj.get_mut(v).unwrap();
        let pos = nbs
            .binary_search_by(|nb| nb.as_str().cmp(u))
            .expect("asymmetric adjacency");
        nbs.remove(pos);

        self.num_edges -= 1;
    }

    /// Removes a vertex together with all its incident edges. No-op if the
    /// vertex is absent. The relative order of the remaining vertices is
    /// preserved.
    pub fn remove_vertex(&mut self, v: &str) {
        let Some(nbs) = self.adj.remove(v) else {
            return;
        };

        self.num_edges -= nbs.len() as NumEdges;
        for nb in nbs {
            let list = self.adj.get_mut(&nb).expect("asymmetric adjacency");
            let pos = list
                .binary_search_by(|x| x.as_str().cmp(v))
                .expect("asymmetric adjacency");
            list.remove(pos);
        }

        self.labels.retain(|label| label != v);
    }

    /// Returns an iterator over all vertex labels in first-reference order
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Returns the stored label equal to `v`, if present. Useful to tie
    /// borrowed traversal state to the graph rather than the query string.
    pub fn get_vertex(&self, v: &str) -> Option<&str> {
        self.adj.get_key_value(v).map(|(label, _)| label.as_str())
    }

    /// Returns *true* if `v` is a vertex of the graph
    pub fn has_vertex(&self, v: &str) -> bool {
        self.adj.contains_key(v)
    }

    /// Returns *true* if the edge `{u, v}` exists in the graph.
    /// Unknown labels answer *false*.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.neighbors_of(u).contains(&v)
    }

    /// Returns an iterator over the neighbors of `v` in lexicographic
    /// order. An unknown label yields an empty iterator.
    pub fn neighbors_of(&self, v: &str) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.adj.get(v).into_iter().flatten().map(String::as_str)
    }

    /// Returns the number of neighbors of `v`, or `0` for unknown labels
    pub fn degree_of(&self, v: &str) -> NumNodes {
        self.adj.get(v).map_or(0, |nbs| nbs.len() as NumNodes)
    }

    /// Returns an iterator over all edges, each reported exactly once as a
    /// pair whose endpoints appear in first-reference order.
    ///
    /// Adjacency is confirmed in one direction only; symmetry guarantees
    /// the other.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.labels.iter().enumerate().flat_map(move |(i, u)| {
            self.labels[i + 1..]
                .iter()
                .filter(move |v| self.has_edge(u, v.as_str()))
                .map(move |v| (u.as_str(), v.as_str()))
        })
    }

    /// Returns *true* if the given label sequence is a valid path.
    ///
    /// - On the empty graph every path is invalid.
    /// - The empty path is invalid.
    /// - A single vertex is a valid path iff it exists.
    /// - Otherwise every vertex must exist and every consecutive pair must
    ///   be adjacent.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        match path {
            [] => false,
            [v] => self.has_vertex(v.as_ref()),
            _ => path
                .windows(2)
                .all(|uv| self.has_edge(uv[0].as_ref(), uv[1].as_ref())),
        }
    }
}

/// Renders the adjacency as a brace-delimited listing in vertex insertion
/// order. Debug output only, not a durable format.
impl Display for LabeledGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .vertices()
            .map(|v| format!("{v}: [{}]", self.neighbors_of(v).join(", ")))
            .join(", ");
        write!(f, "GRAPH: {{{body}}}")
    }
}
