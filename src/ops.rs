/*!
# Graph Operations

Traits describing the graph abstraction the flow algorithms are written against.
Any representation providing
- a stable number of nodes with dense indices `0..n`,
- dense edge ids `0..m` with fixed endpoints,
- per-node iteration over outgoing and incoming edge ids

can be handed to [`PreflowPush`](crate::algo::PreflowPush).
*/

use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all nodes.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be
    /// used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the range `0..m` of all edge ids
    fn edge_ids(&self) -> Range<EdgeId> {
        0..self.number_of_edges()
    }
}

/// Access to the endpoints of edges by their id.
pub trait EdgeEndpoints: GraphEdgeOrder {
    /// Returns the endpoints of edge `e`.
    /// ** Panics if `e >= m` **
    fn endpoints(&self, e: EdgeId) -> Edge;

    /// Returns the node edge `e` starts at.
    /// ** Panics if `e >= m` **
    #[inline]
    fn origin_of(&self, e: EdgeId) -> Node {
        self.endpoints(e).origin()
    }

    /// Returns the node edge `e` points to.
    /// ** Panics if `e >= m` **
    #[inline]
    fn destination_of(&self, e: EdgeId) -> Node {
        self.endpoints(e).destination()
    }

    /// Returns the endpoint of `e` opposite to `u`.
    /// ** Panics if `e >= m` **
    #[inline]
    fn other_end(&self, e: EdgeId, u: Node) -> Node {
        self.endpoints(e).other_end(u)
    }

    /// Returns an iterator over all `(EdgeId, Edge)` pairs in id order.
    fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edge_ids().map(|e| (e, self.endpoints(e)))
    }
}

/// Per-node access to incident edge ids in both directions.
pub trait IncidenceList: GraphNodeOrder + EdgeEndpoints {
    /// Returns an iterator over the ids of all edges `(u, _)`.
    /// ** Panics if `u >= n` **
    fn out_edge_ids_of(&self, u: Node) -> impl Iterator<Item = EdgeId> + '_;

    /// Returns an iterator over the ids of all edges `(_, u)`.
    /// ** Panics if `u >= n` **
    fn in_edge_ids_of(&self, u: Node) -> impl Iterator<Item = EdgeId> + '_;

    /// Returns the number of edges leaving `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumEdges;

    /// Returns the number of edges entering `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumEdges;

    /// Returns an iterator over the destinations of all edges leaving `u` (with multiplicity)
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_edge_ids_of(u).map(|e| self.destination_of(e))
    }

    /// Returns an iterator over the origins of all edges entering `u` (with multiplicity)
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_edge_ids_of(u).map(|e| self.origin_of(e))
    }
}

/// A trait for creating a graph from scratch from a number of nodes and a list of edges.
/// The i-th edge of the input receives id `i`.
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    /// ** Panics if any endpoint is `>= n` **
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        E: Into<Edge>,
        I: IntoIterator<Item = E>;

    /// Create a graph from a number of nodes and an iterator over Edges and reports
    /// out-of-range endpoints as an error instead of panicking
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self, FlowError>
    where
        E: Into<Edge>,
        I: IntoIterator<Item = E>;
}
