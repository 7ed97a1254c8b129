/*!
# Node Representation

We choose `Node = u32` as flow networks practically never exceed `2^32` nodes.
This saves space in the per-node arrays of the flow engine (excess, height, flags)
and allows directly using node values as indices without abstracting over them.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
