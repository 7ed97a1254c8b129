use std::fmt::{Debug, Display};

use crate::Node;

/// The endpoints of a directed edge: `Edge(origin, destination)`.
///
/// An `Edge` is a *value*, not an identity: a multigraph may contain several edges with equal
/// endpoints. Edges are identified by their [`EdgeId`] instead.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Dense identifier of an edge in `0..m`, assigned when the graph is built.
pub type EdgeId = NumEdges;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the node the edge starts at
    #[inline]
    pub fn origin(&self) -> Node {
        self.0
    }

    /// Returns the node the edge points to
    #[inline]
    pub fn destination(&self) -> Node {
        self.1
    }

    /// Returns true if both endpoints are equal
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    #[inline]
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns the endpoint opposite to `u`.
    ///
    /// For a self-loop this is `u` itself.
    /// ** Panics (in debug builds) if `u` is not an endpoint **
    #[inline]
    pub fn other_end(&self, u: Node) -> Node {
        debug_assert!(u == self.0 || u == self.1, "{u} is not an endpoint of {self}");
        if u == self.0 { self.1 } else { self.0 }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_end() {
        let e = Edge(3, 7);
        assert_eq!(e.other_end(3), 7);
        assert_eq!(e.other_end(7), 3);
        assert_eq!(Edge(2, 2).other_end(2), 2);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge(1, 2)), "(1,2)");
        assert_eq!(format!("{:?}", Edge(1, 2).reverse()), "(2,1)");
    }
}
