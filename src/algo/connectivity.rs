/*!
Connected components of the undirected [`LabeledGraph`].

A component sweep runs a depth-first search from every vertex that no
earlier search reached, taking the roots in insertion order; the number of
sweeps is the number of components.
*/

use fxhash::FxHashSet;

use crate::repr::LabeledGraph;

impl LabeledGraph {
    /// Returns the number of connected components. Every isolated vertex
    /// counts as its own component; the empty graph has none.
    pub fn count_connected_components(&self) -> usize {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut count = 0;

        for root in self.vertices() {
            if !visited.insert(root) {
                continue;
            }
            count += 1;

            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for v in self.neighbors_of(u) {
                    if visited.insert(v) {
                        stack.push(v);
                    }
                }
            }
        }

        count
    }

    /// Returns *true* if all vertices belong to one component. The empty
    /// graph is considered connected.
    pub fn is_connected(&self) -> bool {
        self.count_connected_components() <= 1
    }
}
