use super::*;
use crate::{
    error::raise_error_unless, testing::test_graph_ops, utils::sliced_buffer::SlicedBuffer,
};
use itertools::Itertools;

/// Directed **CSR multigraph** addressing edges by dense [`EdgeId`]s.
///
/// - `endpoints[e]` stores the endpoints of edge `e`.
/// - `out_edges[u]` lists the ids of edges leaving `u` in increasing id order.
/// - `in_edges[u]` lists the ids of edges entering `u` in increasing id order.
///
/// Edge ids follow the order in which edges were passed to
/// [`from_edges`](GraphFromScratch::from_edges).
///
/// # Examples
/// ```
/// use preflow::prelude::*;
///
/// let g = IncidenceCsr::from_edges(3, [(0, 1), (0, 1), (1, 2)]);
/// assert_eq!(g.number_of_edges(), 3);
/// assert_eq!(g.out_edge_ids_of(0).collect::<Vec<_>>(), vec![0, 1]);
/// assert_eq!(g.in_edge_ids_of(2).collect::<Vec<_>>(), vec![2]);
/// assert_eq!(g.other_end(2, 2), 1);
/// ```
#[derive(Debug, Clone)]
pub struct IncidenceCsr {
    endpoints: Vec<Edge>,
    out_edges: SlicedBuffer<EdgeId, NumEdges>,
    in_edges: SlicedBuffer<EdgeId, NumEdges>,
}

impl IncidenceCsr {
    /// Builds both incidence buffers from already validated endpoints
    fn from_endpoints(n: NumNodes, endpoints: Vec<Edge>) -> Self {
        assert!(endpoints.len() < NumEdges::MAX as usize);

        let ids = || {
            endpoints
                .iter()
                .enumerate()
                .map(|(e, edge)| (e as EdgeId, *edge))
        };

        let out_edges =
            SlicedBuffer::from_grouped(n as usize, ids().map(|(e, Edge(u, _))| (u, e)));
        let in_edges = SlicedBuffer::from_grouped(n as usize, ids().map(|(e, Edge(_, v))| (v, e)));

        Self {
            endpoints,
            out_edges,
            in_edges,
        }
    }
}

impl GraphNodeOrder for IncidenceCsr {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_edges.len() as NumNodes
    }
}

impl GraphEdgeOrder for IncidenceCsr {
    fn number_of_edges(&self) -> NumEdges {
        self.endpoints.len() as NumEdges
    }
}

impl EdgeEndpoints for IncidenceCsr {
    #[inline]
    fn endpoints(&self, e: EdgeId) -> Edge {
        self.endpoints[e as usize]
    }
}

impl IncidenceList for IncidenceCsr {
    fn out_edge_ids_of(&self, u: Node) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_edges[u].iter().copied()
    }

    fn in_edge_ids_of(&self, u: Node) -> impl Iterator<Item = EdgeId> + '_ {
        self.in_edges[u].iter().copied()
    }

    #[inline]
    fn out_degree_of(&self, u: Node) -> NumEdges {
        self.out_edges.size_of(u)
    }

    #[inline]
    fn in_degree_of(&self, u: Node) -> NumEdges {
        self.in_edges.size_of(u)
    }
}

impl GraphFromScratch for IncidenceCsr {
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        E: Into<Edge>,
        I: IntoIterator<Item = E>,
    {
        let endpoints = edges.into_iter().map(|e| e.into()).collect_vec();
        for &Edge(u, v) in &endpoints {
            assert!(u < n && v < n, "edge ({u},{v}) exceeds {n} nodes");
        }

        Self::from_endpoints(n, endpoints)
    }

    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self, FlowError>
    where
        E: Into<Edge>,
        I: IntoIterator<Item = E>,
    {
        let endpoints = edges.into_iter().map(|e| e.into()).collect_vec();
        for &Edge(u, v) in &endpoints {
            let node = u.max(v);
            raise_error_unless!(node < n, FlowError::NodeOutOfRange { node, n });
        }

        Ok(Self::from_endpoints(n, endpoints))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_edges_and_loops() {
        let g = IncidenceCsr::from_edges(3, [(0, 1), (1, 1), (0, 1), (2, 0)]);

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 4);

        assert_eq!(g.out_edge_ids_of(0).collect_vec(), vec![0, 2]);
        assert_eq!(g.in_edge_ids_of(1).collect_vec(), vec![0, 1, 2]);
        assert_eq!(g.out_edge_ids_of(1).collect_vec(), vec![1]);
        assert_eq!(g.in_neighbors_of(0).collect_vec(), vec![2]);
        assert_eq!(g.out_neighbors_of(0).collect_vec(), vec![1, 1]);

        assert!(g.endpoints(1).is_loop());
        assert_eq!(g.other_end(3, 0), 2);
    }

    #[test]
    fn isolated_nodes() {
        let g = IncidenceCsr::from_edges(5, [(4, 0)]);
        for u in 1..4 {
            assert_eq!(g.out_degree_of(u), 0);
            assert_eq!(g.in_degree_of(u), 0);
        }
        assert_eq!(g.vertices().collect_vec(), (0..5).collect_vec());
    }

    #[test]
    fn try_from_edges_rejects_out_of_range() {
        let res = IncidenceCsr::try_from_edges(3, [(0, 1), (1, 3)]);
        assert_eq!(res.unwrap_err(), FlowError::NodeOutOfRange { node: 3, n: 3 });

        assert!(IncidenceCsr::try_from_edges(3, [(0, 1), (1, 2)]).is_ok());
    }

    #[test]
    #[should_panic]
    fn from_edges_panics_on_out_of_range() {
        IncidenceCsr::from_edges(2, [(0, 2)]);
    }
}

test_graph_ops!(test_incidence_csr, IncidenceCsr, (GraphNodeOrder, IncidenceList));
