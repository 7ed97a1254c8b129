/*!
# Errors

Malformed input that can be detected before running any algorithm is rejected with a
[`FlowError`]. Lookups of unknown edges during or after a computation are *not* errors:
missing capacities and flows are reported as `0`.
*/

use thiserror::Error;

use crate::{algo::Capacity, prelude::*};

/// Input errors of flow computations and graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The graph has no nodes, hence there is neither a source nor a sink.
    #[error("flow network has no nodes")]
    EmptyGraph,

    /// A node (source, sink or edge endpoint) is not in `0..n`.
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    /// Source and sink coincide.
    #[error("source and sink are both node {0}")]
    SourceIsSink(Node),

    /// A capacity was assigned to an edge id that does not exist in the graph.
    #[error("capacity assigned to unknown edge {edge} (graph has {m} edges)")]
    UnknownEdge { edge: EdgeId, m: NumEdges },

    /// A capacity is negative.
    #[error("edge {edge} has negative capacity {capacity}")]
    NegativeCapacity { edge: EdgeId, capacity: Capacity },
}

/// Shorthand for returning `Err(FlowError)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $error : expr) => {
        if !($cond) {
            return Err($error);
        }
    };
}

pub(crate) use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            FlowError::NodeOutOfRange { node: 7, n: 3 }.to_string(),
            "node 7 is out of range for a graph with 3 nodes"
        );
        assert_eq!(
            FlowError::SourceIsSink(2).to_string(),
            "source and sink are both node 2"
        );
        assert_eq!(
            FlowError::NegativeCapacity {
                edge: 4,
                capacity: -1
            }
            .to_string(),
            "edge 4 has negative capacity -1"
        );
    }
}
