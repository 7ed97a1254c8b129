/*!
# Minimum Cuts

After a maximum flow has been found, the nodes reachable from the source in the residual network
form the *source side* of a minimum `(s, t)`-cut; all other nodes form the *sink side*. Every edge
from the source side to the sink side is saturated, every edge in the opposite direction carries
no flow, and the capacity of the cut equals the value of the flow.
*/

use super::*;
use crate::testing::test_max_flow_properties;
use std::collections::VecDeque;

impl<G> PreflowPush<'_, G>
where
    G: IncidenceList,
{
    /// BFS from the source over edges with positive residual capacity.
    /// Nodes are marked when they are discovered.
    fn residual_reachable(&self) -> Vec<bool> {
        let graph = self.graph;
        let mut visited = vec![false; graph.len()];
        let mut queue = VecDeque::with_capacity(graph.len());

        visited[self.s as usize] = true;
        queue.push_back(self.s);

        while let Some(u) = queue.pop_front() {
            for e in graph.out_edge_ids_of(u).chain(graph.in_edge_ids_of(u)) {
                let v = graph.other_end(e, u);
                if !visited[v as usize] && self.residual_from(u, e) > 0 {
                    visited[v as usize] = true;
                    queue.push_back(v);
                }
            }
        }

        visited
    }

    /// Returns the nodes reachable from the source in the residual network in ascending order.
    ///
    /// Runs [`Self::run_max_flow`] first if no maximum flow was computed yet. The result is
    /// recomputed on every call; the complementary sink side is stored for
    /// [`Self::sink_side_cut`].
    pub fn source_side_cut(&mut self) -> Vec<Node> {
        self.run_max_flow();

        let reachable = self.residual_reachable();
        let (source_side, sink_side): (Vec<Node>, Vec<Node>) = self
            .graph
            .vertices()
            .partition(|&u| reachable[u as usize]);

        self.sink_side = Some(sink_side);
        source_side
    }

    /// Returns the nodes *not* reachable from the source in the residual network in ascending
    /// order. The sink is always contained.
    ///
    /// Uses the result of the most recent [`Self::source_side_cut`] and computes it if needed.
    pub fn sink_side_cut(&mut self) -> &[Node] {
        if self.sink_side.is_none() {
            self.source_side_cut();
        }

        self.sink_side.as_deref().unwrap_or_default()
    }

    /// Returns the ids of all edges leading from the source side to the sink side of the
    /// minimum cut in ascending order. Self-loops are never part of the cut.
    pub fn cut_edges(&mut self) -> Vec<EdgeId> {
        self.run_max_flow();

        let reachable = self.residual_reachable();
        self.graph
            .edges()
            .filter(|(_, Edge(u, v))| reachable[*u as usize] && !reachable[*v as usize])
            .map(|(e, _)| e)
            .collect()
    }

    /// Returns the total capacity of [`Self::cut_edges`], which equals the maximum flow value.
    pub fn cut_capacity(&mut self) -> Capacity {
        self.cut_edges()
            .into_iter()
            .map(|e| self.capacity_of(e))
            .sum()
    }
}

/// One-shot maximum flow computations directly on a graph.
pub trait MaxFlow: IncidenceList + Sized {
    /// Computes the value of a maximum flow from `s` to `t`.
    ///
    /// # Examples
    /// ```
    /// use preflow::{prelude::*, algo::*};
    ///
    /// let g = IncidenceCsr::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
    /// let capacities: Vec<Capacity> = vec![4, 1, 2];
    /// assert_eq!(g.max_flow(0, 2, &capacities), Ok(3));
    /// assert!(g.max_flow(0, 0, &capacities).is_err());
    /// ```
    fn max_flow<C>(&self, s: Node, t: Node, capacities: C) -> Result<Flow, FlowError>
    where
        C: CapacityMap;

    /// Computes a minimum `(s, t)`-cut.
    ///
    /// Returns the ids of the cut edges and the source side of the cut, both in ascending order.
    fn min_st_cut<C>(
        &self,
        s: Node,
        t: Node,
        capacities: C,
    ) -> Result<(Vec<EdgeId>, Vec<Node>), FlowError>
    where
        C: CapacityMap;
}

impl<G> MaxFlow for G
where
    G: IncidenceList,
{
    fn max_flow<C>(&self, s: Node, t: Node, capacities: C) -> Result<Flow, FlowError>
    where
        C: CapacityMap,
    {
        Ok(PreflowPush::new(self, s, t, capacities)?.run_max_flow())
    }

    fn min_st_cut<C>(
        &self,
        s: Node,
        t: Node,
        capacities: C,
    ) -> Result<(Vec<EdgeId>, Vec<Node>), FlowError>
    where
        C: CapacityMap,
    {
        let mut flow = PreflowPush::new(self, s, t, capacities)?;
        Ok((flow.cut_edges(), flow.source_side_cut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_side_without_source_side() {
        let g = IncidenceCsr::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 2)]);
        let caps: Vec<Capacity> = vec![5, 1, 9, 2];
        let mut flow = PreflowPush::new(&g, 0, 3, &caps).unwrap();

        // computes the flow and the cut on demand
        assert_eq!(flow.sink_side_cut(), &[2, 3]);
        assert_eq!(flow.max_flow_value(), Some(3));
        assert_eq!(flow.source_side_cut(), vec![0, 1]);
        assert_eq!(flow.cut_edges(), vec![1, 3]);
        assert_eq!(flow.cut_capacity(), 3);
    }

    #[test]
    fn source_side_is_residual_reachability() {
        let g = IncidenceCsr::from_edges(4, [(0, 2), (2, 1), (1, 3), (2, 3)]);
        let caps: Vec<Capacity> = vec![1, 1, 5, 5];
        let mut flow = PreflowPush::new(&g, 0, 3, &caps).unwrap();

        assert_eq!(flow.run_max_flow(), 1);
        assert_eq!(flow.source_side_cut(), vec![0]);
        assert_eq!(flow.cut_edges(), vec![0]);

        let g = IncidenceCsr::from_edges(4, [(0, 1), (2, 1), (1, 3), (0, 2)]);
        let caps: Vec<Capacity> = vec![3, 2, 1, 2];
        let mut flow = PreflowPush::new(&g, 0, 3, &caps).unwrap();

        assert_eq!(flow.run_max_flow(), 1);
        assert_eq!(flow.source_side_cut(), vec![0, 1, 2]);
        assert_eq!(flow.cut_edges(), vec![2]);
    }

    #[test]
    fn loops_are_never_cut() {
        let g = IncidenceCsr::from_edges(2, [(0, 0), (0, 1), (1, 1)]);
        let (edges, source_side) = g.min_st_cut(0, 1, vec![3 as Capacity, 2, 4]).unwrap();
        assert_eq!(edges, vec![1]);
        assert_eq!(source_side, vec![0]);
    }

    #[test]
    fn max_flow_trait() {
        let g = IncidenceCsr::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3), (1, 2)]);

        let mut caps = SparseCapacities::default();
        caps.insert(0, 10);
        caps.insert(1, 1);
        caps.insert(2, 4);
        caps.insert(3, 10);
        caps.insert(4, 3);

        assert_eq!(g.max_flow(0, 3, &caps), Ok(8));
        assert_eq!(g.max_flow(3, 0, &caps), Ok(0));
        assert_eq!(
            g.max_flow(0, 4, &caps),
            Err(FlowError::NodeOutOfRange { node: 4, n: 4 })
        );

        let (edges, source_side) = g.min_st_cut(0, 3, &caps).unwrap();
        assert_eq!(edges, vec![1, 2, 4]);
        assert_eq!(source_side, vec![0, 1]);
    }
}

test_max_flow_properties!(test_dense_capacities, |caps: &Vec<Capacity>| caps.clone());

test_max_flow_properties!(test_sparse_capacities, |caps: &Vec<Capacity>| {
    caps.iter()
        .enumerate()
        .filter(|(_, c)| **c > 0)
        .map(|(e, &c)| (e as EdgeId, c))
        .collect::<crate::utils::SparseCapacities>()
});
