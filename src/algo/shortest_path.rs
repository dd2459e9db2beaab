/*!
Single-source shortest paths on [`MatrixDigraph`] via the classic O(V²)
label-setting algorithm (Dijkstra without a priority queue).

Each round scans for the unsettled vertex with the smallest finite
tentative distance, relaxes its outgoing edges, and settles it — once
settled, a distance is final, which is exactly what non-negative weights
guarantee. On a dense matrix representation the linear scan costs the same
as reading the vertex's row, so a heap would buy nothing.
*/

use crate::node::{Distance, Node, NodeBitSet, UNREACHABLE};
use crate::repr::MatrixDigraph;

impl MatrixDigraph {
    /// Computes the shortest distance from `src` to every vertex.
    ///
    /// Returns one entry per vertex: `0` for `src` itself and
    /// [`UNREACHABLE`] for vertices no path reaches. An out-of-bounds
    /// `src` (which includes any `src` on the empty graph) yields an empty
    /// vector.
    pub fn dijkstra(&self, src: Node) -> Vec<Distance> {
        if !self.has_vertex(src) {
            return Vec::new();
        }

        let mut dist = vec![UNREACHABLE; self.len()];
        let mut settled = NodeBitSet::new(self.number_of_nodes());
        dist[src as usize] = 0;

        // lowest index wins ties, mirroring the scan order
        while let Some(u) = self
            .vertices()
            .filter(|&u| !settled.get_bit(u) && dist[u as usize] != UNREACHABLE)
            .min_by_key(|&u| dist[u as usize])
        {
            for (v, w) in self.out_edges_of(u) {
                let through_u = dist[u as usize] + w as Distance;
                if through_u < dist[v as usize] {
                    dist[v as usize] = through_u;
                }
            }
            settled.set_bit(u);
        }

        dist
    }

    /// Computes the shortest distance from `src` to `dst`, or `None` if
    /// `dst` is unreachable or either endpoint is out of bounds.
    pub fn distance(&self, src: Node, dst: Node) -> Option<Distance> {
        let dist = *self.dijkstra(src).get(dst as usize)?;
        (dist != UNREACHABLE).then_some(dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_graph() -> MatrixDigraph {
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

    #[test]
    fn distances_from_every_source() {
        let graph = example_graph();
        let inf = UNREACHABLE;

        assert_eq!(graph.dijkstra(0), vec![0, 10, 35, 28, 25]);
        assert_eq!(graph.dijkstra(1), vec![27, 0, 25, 18, 15]);
        assert_eq!(graph.dijkstra(2), vec![50, 23, 0, 41, 38]);
        assert_eq!(graph.dijkstra(3), vec![32, 5, 7, 0, 20]);
        assert_eq!(graph.dijkstra(4), vec![12, 8, 10, 3, 0]);
        assert_eq!(graph.distance(0, 3), Some(28));

        // cutting 4 -> 3 leaves 2 and 3 unreachable from 0
        let mut graph = graph;
        graph.remove_edge(4, 3);
        assert_eq!(graph.dijkstra(0), vec![0, 10, inf, inf, 25]);
        assert_eq!(graph.distance(0, 3), None);
    }

    #[test]
    fn source_distance_is_zero() {
        let graph = example_graph();
        for src in graph.vertices() {
            assert_eq!(graph.dijkstra(src)[src as usize], 0);
        }
    }

    #[test]
    fn prefers_cheap_detour() {
        // direct 0 -> 2 costs 10, the detour through 1 only 3
        let graph = MatrixDigraph::from_edges([(0, 2, 10), (0, 1, 1), (1, 2, 2)]);
        assert_eq!(graph.dijkstra(0), vec![0, 1, 3]);
    }

    #[test]
    fn isolated_vertices_unreachable() {
        let mut graph = MatrixDigraph::from_edges([(0, 1, 4)]);
        graph.add_vertex();
        assert_eq!(graph.dijkstra(0), vec![0, 4, UNREACHABLE]);
        assert_eq!(graph.dijkstra(2), vec![UNREACHABLE, UNREACHABLE, 0]);
    }

    #[test]
    fn out_of_bounds_source() {
        assert!(MatrixDigraph::new().dijkstra(0).is_empty());
        assert!(example_graph().dijkstra(5).is_empty());
    }
}
