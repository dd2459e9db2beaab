use std::fmt::{Debug, Display};

use crate::node::{Node, Weight};

/// A weighted directed edge defined by its two endpoints and a weight.
/// The edge is oriented from the first endpoint to the second.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Returns the source endpoint
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the target endpoint
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

impl From<WeightedEdge> for (Node, Node, Weight) {
    fn from(value: WeightedEdge) -> Self {
        (value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_reverse() {
        let e = WeightedEdge(3, 7, 21);
        assert_eq!(e.source(), 3);
        assert_eq!(e.target(), 7);
        assert_eq!(e.weight(), 21);
        assert!(!e.is_loop());
        assert_eq!(e.reverse(), WeightedEdge(7, 3, 21));
        assert!(WeightedEdge(5, 5, 1).is_loop());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", WeightedEdge(0, 1, 10)), "(0,1,10)");
        assert_eq!(format!("{:?}", WeightedEdge(4, 0, 12)), "(4,0,12)");
    }
}
