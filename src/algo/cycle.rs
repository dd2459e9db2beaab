/*!
Cycle detection for both graph representations.

The directed matrix graph uses the classic three-color scheme (unvisited /
on-stack / finished): a depth-first walk reports a cycle on the first edge
into a vertex that is still on the active path. The undirected labeled
graph instead walks from every root while tracking, per pushed edge, the
immediate originating parent; reaching an already seen vertex through any
neighbor other than that parent is a cycle. Both walks use explicit stacks
instead of recursion.
*/

use fxhash::FxHashSet;

use crate::node::{Node, NodeBitSet};
use crate::repr::{LabeledGraph, MatrixDigraph};

impl MatrixDigraph {
    /// Returns *true* if the graph contains a directed cycle.
    ///
    /// Every unvisited vertex serves as a fresh root, so disconnected
    /// components are covered. Detection stops at the first back-edge.
    pub fn has_cycle(&self) -> bool {
        if self.is_empty() {
            return false;
        }

        let mut visited = NodeBitSet::new(self.number_of_nodes());
        let mut on_stack = NodeBitSet::new(self.number_of_nodes());

        for root in self.vertices() {
            if visited.get_bit(root) {
                continue;
            }
            visited.set_bit(root);
            on_stack.set_bit(root);

            // frame: (vertex, index of the next matrix column to probe)
            let mut stack: Vec<(Node, Node)> = vec![(root, 0)];
            while let Some(&(u, cursor)) = stack.last() {
                let next = (cursor..self.number_of_nodes()).find(|&v| self.has_edge(u, v));
                match next {
                    Some(v) => {
                        stack.last_mut().unwrap().1 = v + 1;
                        if on_stack.get_bit(v) {
                            return true;
                        }
                        if !visited.set_bit(v) {
                            on_stack.set_bit(v);
                            stack.push((v, 0));
                        }
                    }
                    None => {
                        stack.pop();
                        on_stack.clear_bit(u);
                    }
                }
            }
        }

        false
    }
}

impl LabeledGraph {
    /// Returns *true* if the graph contains a cycle.
    ///
    /// Walks the component of every vertex, remembering for each pushed
    /// edge the vertex it came from. Seeing an already visited vertex via
    /// any neighbor other than that immediate parent closes a cycle; the
    /// parent check prevents the trivial back-edge of an undirected edge
    /// from counting.
    pub fn has_cycle(&self) -> bool {
        self.vertices().any(|root| self.root_on_cycle(root))
    }

    fn root_on_cycle(&self, root: &str) -> bool {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        seen.insert(root);

        let mut stack: Vec<(Option<&str>, &str)> = vec![(None, root)];
        while let Some((parent, u)) = stack.pop() {
            for v in self.neighbors_of(u) {
                if Some(v) == parent {
                    continue; // don't walk straight back
                }
                if !seen.insert(v) {
                    return true;
                }
                stack.push((Some(u), v));
            }
        }

        false
    }
}
