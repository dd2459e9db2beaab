/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly
manipulate node values without abstracting over them.

Edge weights and path distances get their own aliases: weights are stored in the
adjacency matrix itself where `0` encodes the absence of an edge, so a present
edge always has a positive [`Weight`]. Distances accumulate weights along paths
and therefore use the wider [`Distance`] with [`UNREACHABLE`] standing in for
"positive infinity".
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Weight of a directed edge. A matrix entry of `0` means "no edge", so
/// every present edge has a positive weight. Negative weights are
/// unrepresentable by construction.
pub type Weight = u32;

/// Sum of weights along a path. Wider than [`Weight`] so that relaxing
/// edges cannot overflow for any graph with fewer than `2^32` vertices.
pub type Distance = u64;

/// Distance assigned to vertices that no path reaches
pub const UNREACHABLE: Distance = Distance::MAX;
