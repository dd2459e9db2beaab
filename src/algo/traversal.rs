/*!
Depth-first and breadth-first traversal for both graph representations.

Both searches share the same contract:
- they return the visited vertices in visit order,
- an out-of-bounds / unknown `start` yields an empty result,
- an out-of-bounds / unknown `end` is treated as absent,
- the search stops as soon as `end` has been visited.

Neighbor visiting order is strictly increasing vertex index for
[`MatrixDigraph`] and lexicographic for [`LabeledGraph`]. The depth-first
search uses an explicit stack instead of recursion but reproduces the
preorder of the recursive formulation exactly: vertices are checked against
the visited set when popped, and neighbors are pushed in reverse order so
the smallest one is expanded first. The breadth-first search marks vertices
visited at enqueue time.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::node::{Node, NodeBitSet};
use crate::repr::{LabeledGraph, MatrixDigraph};

impl MatrixDigraph {
    /// Performs a preorder depth-first search from `start`, visiting
    /// neighbors in increasing index order, and returns the vertices in
    /// visit order. Stops early once `end` has been visited.
    pub fn dfs(&self, start: Node, end: Option<Node>) -> Vec<Node> {
        if !self.has_vertex(start) {
            return Vec::new();
        }
        let end = end.filter(|&v| self.has_vertex(v));

        let mut visited = NodeBitSet::new(self.number_of_nodes());
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(u) = stack.pop() {
            if visited.set_bit(u) {
                continue; // stale stack entry
            }
            order.push(u);
            if end == Some(u) {
                break;
            }

            for v in self.out_neighbors_of(u).rev() {
                if !visited.get_bit(v) {
                    stack.push(v);
                }
            }
        }

        order
    }

    /// Performs a breadth-first search from `start` with the same neighbor
    /// ordering and early-stop contract as [`MatrixDigraph::dfs`].
    /// Vertices are marked visited when enqueued, so `end == start` yields
    /// `[start]` immediately.
    pub fn bfs(&self, start: Node, end: Option<Node>) -> Vec<Node> {
        if !self.has_vertex(start) {
            return Vec::new();
        }
        let end = end.filter(|&v| self.has_vertex(v));

        let mut visited = NodeBitSet::new(self.number_of_nodes());
        visited.set_bit(start);
        let mut order = vec![start];
        if end == Some(start) {
            return order;
        }

        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for v in self.out_neighbors_of(u) {
                if !visited.set_bit(v) {
                    order.push(v);
                    if end == Some(v) {
                        return order;
                    }
                    queue.push_back(v);
                }
            }
        }

        order
    }
}

impl LabeledGraph {
    /// Performs a preorder depth-first search from `start`, visiting
    /// neighbors in lexicographic order, and returns the labels in visit
    /// order. Stops early once `end` has been visited.
    pub fn dfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let Some(start) = self.get_vertex(start) else {
            return Vec::new();
        };
        let end = end.and_then(|v| self.get_vertex(v));

        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(u) = stack.pop() {
            if !visited.insert(u) {
                continue; // stale stack entry
            }
            order.push(u.to_string());
            if end == Some(u) {
                break;
            }

            for v in self.neighbors_of(u).rev() {
                if !visited.contains(v) {
                    stack.push(v);
                }
            }
        }

        order
    }

    /// Performs a breadth-first search from `start` with the same neighbor
    /// ordering and early-stop contract as [`LabeledGraph::dfs`]. Labels
    /// are marked visited when enqueued, so `end == start` yields
    /// `[start]` immediately.
    pub fn bfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let Some(start) = self.get_vertex(start) else {
            return Vec::new();
        };
        let end = end.and_then(|v| self.get_vertex(v));

        let mut visited: FxHashSet<&str> = FxHashSet::default();
        visited.insert(start);
        let mut order = vec![start.to_string()];
        if end == Some(start) {
            return order;
        }

        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for v in self.neighbors_of(u) {
                if visited.insert(v) {
                    order.push(v.to_string());
                    if end == Some(v) {
                        return order;
                    }
                    queue.push_back(v);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn directed() -> MatrixDigraph {
        MatrixDigraph::from_edges([
            (0, 1, 10),
            (4, 0, 12),
            (1, 4, 15),
            (4, 3, 3),
            (3, 1, 5),
            (2, 1, 23),
            (3, 2, 7),
        ])
    }

    fn undirected() -> LabeledGraph {
        LabeledGraph::from_edges([
            ("A", "E"),
            ("A", "C"),
            ("B", "E"),
            ("C", "E"),
            ("C", "D"),
            ("C", "B"),
            ("B", "D"),
            ("E", "D"),
            ("B", "H"),
            ("Q", "G"),
            ("F", "G"),
        ])
    }

    #[test]
    fn dfs_order_directed() {
        let graph = directed();
        assert_eq!(graph.dfs(0, None), vec![0, 1, 4, 3, 2]);
        assert_eq!(graph.dfs(1, None), vec![1, 4, 0, 3, 2]);
        assert_eq!(graph.dfs(2, None), vec![2, 1, 4, 0, 3]);
        assert_eq!(graph.dfs(3, None), vec![3, 1, 4, 0, 2]);
        assert_eq!(graph.dfs(4, None), vec![4, 0, 1, 3, 2]);
    }

    #[test]
    fn bfs_order_directed() {
        let graph = directed();
        assert_eq!(graph.bfs(0, None), vec![0, 1, 4, 3, 2]);
        assert_eq!(graph.bfs(3, None), vec![3, 1, 2, 4, 0]);
        assert_eq!(graph.bfs(4, None), vec![4, 0, 3, 1, 2]);
    }

    #[test]
    fn early_stop_directed() {
        let graph = directed();
        assert_eq!(graph.dfs(0, Some(3)), vec![0, 1, 4, 3]);
        assert_eq!(graph.bfs(0, Some(3)), vec![0, 1, 4, 3]);
        assert_eq!(graph.dfs(0, Some(0)), vec![0]);
        assert_eq!(graph.bfs(3, Some(3)), vec![3]);

        // an out-of-bounds end is treated as absent
        assert_eq!(graph.dfs(0, Some(99)), vec![0, 1, 4, 3, 2]);
        assert_eq!(graph.bfs(0, Some(99)), vec![0, 1, 4, 3, 2]);
    }

    #[test]
    fn invalid_start_directed() {
        let graph = directed();
        assert!(graph.dfs(5, None).is_empty());
        assert!(graph.bfs(5, None).is_empty());
        assert!(MatrixDigraph::new().dfs(0, None).is_empty());
        assert!(MatrixDigraph::new().bfs(0, None).is_empty());
    }

    #[test]
    fn traversal_ignores_unreachable_part() {
        // 0 -> 1, plus an isolated island 2 -> 3
        let graph = MatrixDigraph::from_edges([(0, 1, 1), (2, 3, 1)]);
        assert_eq!(graph.dfs(0, None), vec![0, 1]);
        assert_eq!(graph.bfs(2, None), vec![2, 3]);
    }

    #[test]
    fn dfs_order_undirected() {
        let graph = undirected();
        assert_eq!(graph.dfs("A", None), ["A", "C", "B", "D", "E", "H"]);
        assert_eq!(graph.dfs("B", None), ["B", "C", "A", "E", "D", "H"]);
        assert_eq!(graph.dfs("G", None), ["G", "F", "Q"]);
    }

    #[test]
    fn bfs_order_undirected() {
        let graph = undirected();
        assert_eq!(graph.bfs("A", None), ["A", "C", "E", "B", "D", "H"]);
        assert_eq!(graph.bfs("Q", None), ["Q", "G", "F"]);
    }

    #[test]
    fn early_stop_undirected() {
        let graph = undirected();
        assert_eq!(graph.dfs("A", Some("E")), ["A", "C", "B", "D", "E"]);
        assert_eq!(graph.bfs("A", Some("D")), ["A", "C", "E", "B", "D"]);
        assert_eq!(graph.bfs("C", Some("C")), ["C"]);
        assert_eq!(graph.dfs("C", Some("C")), ["C"]);

        // an unknown end is treated as absent
        assert_eq!(graph.dfs("G", Some("Z")), ["G", "F", "Q"]);
    }

    #[test]
    fn invalid_start_undirected() {
        let graph = undirected();
        assert!(graph.dfs("Z", None).is_empty());
        assert!(graph.bfs("Z", None).is_empty());
        assert!(LabeledGraph::new().dfs("A", None).is_empty());
    }

    #[test]
    fn traversal_does_not_mutate() {
        let graph = undirected();
        let before = graph.edges().map(|(u, v)| (u.to_string(), v.to_string())).collect_vec();
        let vertices = graph.vertices().map(str::to_string).collect_vec();

        graph.dfs("A", None);
        graph.bfs("A", None);

        assert_eq!(
            graph.edges().map(|(u, v)| (u.to_string(), v.to_string())).collect_vec(),
            before
        );
        assert_eq!(graph.vertices().map(str::to_string).collect_vec(), vertices);
    }
}
