/*!
# Preflow-Push Maximum Flow

Implementation of the push-relabel method of Goldberg and Tarjan on directed multigraphs.
Every edge carries its own flow value; the residual capacity of an edge `e = (u, v)` is
`capacity(e) - flow(e)` in direction `u -> v` and `flow(e)` in direction `v -> u`, so no
reverse edges have to be materialized.

The engine proceeds in three phases:
1. *Initialization*: heights are set to the BFS distance to the sink (the source gets `n`), all
   edges leaving the source are saturated and their heads become active.
2. *Discharge loop*: an active node pushes its excess along admissible residual edges and is
   relabeled if excess remains. The loop stops once no node except source and sink holds excess.
3. *Cut extraction*: see [`PreflowPush::source_side_cut`].

Overflow of the `i64` excess counters is not checked: the sum of capacities leaving the source
has to fit into a [`Flow`].
*/

use super::*;
use crate::error::raise_error_unless;
use log::{debug, trace, warn};
use std::collections::VecDeque;

/// The order in which active nodes are selected for discharging.
///
/// The computed flow value does not depend on the order, only the running time (and possibly
/// which of several maximum flows is found) does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveOrder {
    /// Active nodes are processed in the order they became active (queue semantics)
    #[default]
    Fifo,
    /// The most recently activated node is processed first (stack semantics)
    Lifo,
}

/// Counters collected during a run of [`PreflowPush`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowStats {
    /// Number of non-zero pushes
    pub pushes: u64,
    /// Number of successful relabel operations
    pub relabels: u64,
    /// Number of nodes taken from the active list
    pub discharges: u64,
}

/// Preflow-push engine for a single `(s, t)`-pair.
///
/// Capacities are copied into a dense array on construction, the graph is borrowed for the
/// lifetime of the engine.
///
/// # Examples
/// ```
/// use preflow::{prelude::*, algo::*};
///
/// let g = IncidenceCsr::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
/// let capacities: Vec<Capacity> = vec![3, 2, 2, 3];
///
/// let mut flow = PreflowPush::new(&g, 0, 3, &capacities).unwrap();
/// assert_eq!(flow.run_max_flow(), 4);
/// assert_eq!(flow.flow_of(2), 2);
/// assert_eq!(flow.source_side_cut(), vec![0, 1]);
/// assert_eq!(flow.sink_side_cut(), &[2, 3]);
/// ```
pub struct PreflowPush<'a, G> {
    pub(super) graph: &'a G,
    pub(super) s: Node,
    pub(super) t: Node,

    pub(super) capacity: Vec<Capacity>,
    pub(super) flow: Vec<Flow>,
    excess: Vec<Flow>,
    height: Vec<u32>,

    queued: Vec<bool>,
    active: VecDeque<Node>,
    order: ActiveOrder,

    stats: FlowStats,
    value: Option<Flow>,
    pub(super) sink_side: Option<Vec<Node>>,
}

impl<'a, G> PreflowPush<'a, G>
where
    G: IncidenceList,
{
    /// Creates a new engine computing a maximum flow from `s` to `t`.
    ///
    /// Returns an error if the graph is empty, `s` or `t` are not nodes of the graph, `s == t`,
    /// or `capacities` contains an entry for an edge id `>= m` or a negative capacity.
    /// Edges without an entry in `capacities` have capacity `0`.
    pub fn new<C>(graph: &'a G, s: Node, t: Node, capacities: C) -> Result<Self, FlowError>
    where
        C: CapacityMap,
    {
        let n = graph.number_of_nodes();
        let m = graph.number_of_edges();

        raise_error_unless!(n > 0, FlowError::EmptyGraph);
        raise_error_unless!(s < n, FlowError::NodeOutOfRange { node: s, n });
        raise_error_unless!(t < n, FlowError::NodeOutOfRange { node: t, n });
        raise_error_unless!(s != t, FlowError::SourceIsSink(s));

        let mut capacity = vec![0; m as usize];
        for (edge, c) in capacities.entries() {
            raise_error_unless!(edge < m, FlowError::UnknownEdge { edge, m });
            raise_error_unless!(c >= 0, FlowError::NegativeCapacity { edge, capacity: c });
            capacity[edge as usize] = c;
        }

        Ok(Self {
            graph,
            s,
            t,
            capacity,
            flow: vec![0; m as usize],
            excess: vec![0; n as usize],
            height: vec![0; n as usize],
            queued: vec![false; n as usize],
            active: VecDeque::new(),
            order: ActiveOrder::default(),
            stats: FlowStats::default(),
            value: None,
            sink_side: None,
        })
    }

    /// Sets the order in which active nodes are discharged.
    /// Takes effect on the next run, i.e. after [`Self::reset`] if a run already happened.
    pub fn set_active_order(&mut self, order: ActiveOrder) {
        self.order = order;
    }

    /// Chainable version of [`Self::set_active_order`].
    pub fn active_order(mut self, order: ActiveOrder) -> Self {
        self.set_active_order(order);
        self
    }

    /// Returns the source node
    pub fn source(&self) -> Node {
        self.s
    }

    /// Returns the sink node
    pub fn sink(&self) -> Node {
        self.t
    }

    /// Computes a maximum flow and returns its value.
    ///
    /// Once converged, further calls return the stored value without recomputation.
    /// Use [`Self::reset`] to start over.
    pub fn run_max_flow(&mut self) -> Flow {
        if let Some(value) = self.value {
            return value;
        }

        self.initialize();
        while let Some(u) = self.next_active() {
            self.queued[u as usize] = false;
            self.stats.discharges += 1;

            self.discharge(u);
            if self.excess[u as usize] > 0 {
                self.relabel(u);
            }
        }

        let value = self.excess[self.t as usize];
        debug!(
            "max flow {value} from {} to {}: {} pushes, {} relabels, {} discharges",
            self.s, self.t, self.stats.pushes, self.stats.relabels, self.stats.discharges
        );

        self.value = Some(value);
        value
    }

    /// Restores the state right after construction: all flows, excesses and heights are `0`,
    /// statistics and cached results are cleared.
    pub fn reset(&mut self) {
        self.flow.fill(0);
        self.excess.fill(0);
        self.height.fill(0);
        self.queued.fill(false);
        self.active.clear();
        self.stats = FlowStats::default();
        self.value = None;
        self.sink_side = None;
    }

    /// Returns the value of the maximum flow if it was already computed
    pub fn max_flow_value(&self) -> Option<Flow> {
        self.value
    }

    /// Returns the flow along edge `e`; `0` if `e` is not an edge of the graph.
    pub fn flow_of(&self, e: EdgeId) -> Flow {
        self.flow.get(e as usize).copied().unwrap_or(0)
    }

    /// Returns the capacity of edge `e`; `0` if `e` is not an edge of the graph or has no
    /// capacity assigned.
    pub fn capacity_of(&self, e: EdgeId) -> Capacity {
        self.capacity.get(e as usize).copied().unwrap_or(0)
    }

    /// Returns the excess (inflow minus outflow) at node `u`.
    /// After a run this is `0` for all nodes except source and sink.
    /// ** Panics if `u >= n` **
    pub fn excess_of(&self, u: Node) -> Flow {
        self.excess[u as usize]
    }

    /// Returns the current height label of node `u`.
    /// ** Panics if `u >= n` **
    pub fn height_of(&self, u: Node) -> u32 {
        self.height[u as usize]
    }

    /// Returns the operation counters of the most recent run
    pub fn stats(&self) -> FlowStats {
        self.stats
    }

    /// Residual capacity of `e` when traversed away from `u`.
    /// For a self-loop this is always `0`.
    #[inline]
    pub(super) fn residual_from(&self, u: Node, e: EdgeId) -> Capacity {
        let Edge(origin, destination) = self.graph.endpoints(e);
        if origin == destination {
            0
        } else if origin == u {
            self.capacity[e as usize] - self.flow[e as usize]
        } else {
            self.flow[e as usize]
        }
    }

    fn initialize(&mut self) {
        let graph = self.graph;
        let n = graph.number_of_nodes();

        self.height = sink_distances(graph, self.t, n);
        self.height[self.s as usize] = n;

        let mut source_capacity: Capacity = 0;
        for e in graph.out_edge_ids_of(self.s) {
            let v = graph.destination_of(e);
            let c = self.capacity[e as usize];
            if v == self.s || c == 0 {
                continue;
            }

            self.flow[e as usize] = c;
            self.excess[self.s as usize] -= c;
            self.excess[v as usize] += c;
            self.enqueue(v);
            source_capacity += c;
        }

        debug!(
            "init preflow: n={n}, m={}, s={}, t={}, source out-capacity {source_capacity}, {} active",
            graph.number_of_edges(),
            self.s,
            self.t,
            self.active.len()
        );
    }

    fn next_active(&mut self) -> Option<Node> {
        match self.order {
            ActiveOrder::Fifo => self.active.pop_front(),
            ActiveOrder::Lifo => self.active.pop_back(),
        }
    }

    fn enqueue(&mut self, v: Node) {
        if v != self.s && v != self.t && !self.queued[v as usize] {
            self.queued[v as usize] = true;
            self.active.push_back(v);
        }
    }

    /// Pushes excess of `u` along admissible edges, first outgoing then incoming ones.
    /// Stops as soon as `u` has no excess left.
    fn discharge(&mut self, u: Node) {
        let graph = self.graph;
        let admissible_height = self.height[u as usize];

        for e in graph.out_edge_ids_of(u).chain(graph.in_edge_ids_of(u)) {
            if self.excess[u as usize] == 0 {
                break;
            }

            let v = graph.other_end(e, u);
            if self.height[v as usize] + 1 == admissible_height && self.residual_from(u, e) > 0 {
                self.push(u, v, e);
            }
        }
    }

    /// Moves as much excess as possible from `u` to `v` along `e`.
    fn push(&mut self, u: Node, v: Node, e: EdgeId) {
        let delta = self.excess[u as usize].min(self.residual_from(u, e));
        debug_assert!(delta > 0);

        if self.graph.origin_of(e) == u {
            self.flow[e as usize] += delta;
        } else {
            self.flow[e as usize] -= delta;
        }

        self.excess[u as usize] -= delta;
        self.excess[v as usize] += delta;
        self.stats.pushes += 1;

        self.enqueue(v);
    }

    /// Lifts `u` to one above its lowest residual neighbor and reactivates it.
    fn relabel(&mut self, u: Node) {
        let graph = self.graph;

        let lowest = graph
            .out_edge_ids_of(u)
            .chain(graph.in_edge_ids_of(u))
            .filter(|&e| self.residual_from(u, e) > 0)
            .map(|e| self.height[graph.other_end(e, u) as usize])
            .min();

        let Some(lowest) = lowest else {
            warn!(
                "node {u} holds excess {} but has no residual edge; dropping it",
                self.excess[u as usize]
            );
            return;
        };

        let old = self.height[u as usize];
        self.height[u as usize] = lowest + 1;
        trace!("relabel {u}: {old} -> {}", lowest + 1);

        self.stats.relabels += 1;
        self.enqueue(u);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{init_logger, random_network};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn caps(c: &[Capacity]) -> Vec<Capacity> {
        c.to_vec()
    }

    fn run(n: NumNodes, edges: &[(Node, Node)], caps: &[Capacity], s: Node, t: Node) -> Flow {
        let g = IncidenceCsr::from_edges(n, edges);
        PreflowPush::new(&g, s, t, caps).unwrap().run_max_flow()
    }

    #[test]
    fn single_edge() {
        init_logger();
        let g = IncidenceCsr::from_edges(2, [(0, 1)]);
        let mut flow = PreflowPush::new(&g, 0, 1, caps(&[5])).unwrap();
        assert_eq!((flow.source(), flow.sink()), (0, 1));

        assert_eq!(flow.run_max_flow(), 5);
        assert_eq!(flow.flow_of(0), 5);
        assert_eq!(flow.excess_of(0), -5);
        assert_eq!(flow.excess_of(1), 5);
        assert_eq!(flow.source_side_cut(), vec![0]);
        assert_eq!(flow.sink_side_cut(), &[1]);
    }

    #[test]
    fn two_paths() {
        init_logger();
        let g = IncidenceCsr::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut flow = PreflowPush::new(&g, 0, 3, caps(&[3, 2, 2, 3])).unwrap();

        assert_eq!(flow.run_max_flow(), 4);
        assert_eq!(flow.flow_of(0), 2);
        assert_eq!(flow.flow_of(1), 2);
        assert_eq!(flow.flow_of(2), 2);
        assert_eq!(flow.flow_of(3), 2);
        assert_eq!(flow.excess_of(1), 0);
        assert_eq!(flow.excess_of(2), 0);
    }

    #[test]
    fn unreachable_sink() {
        init_logger();
        let g = IncidenceCsr::from_edges(4, [(0, 1), (1, 2), (3, 0)]);
        let mut flow = PreflowPush::new(&g, 0, 3, caps(&[4, 1, 5])).unwrap();

        assert_eq!(flow.run_max_flow(), 0);
        assert!(g.edge_ids().all(|e| flow.flow_of(e) == 0));
        assert_eq!(flow.source_side_cut(), vec![0, 1, 2]);
        assert_eq!(flow.sink_side_cut(), &[3]);

        let g = IncidenceCsr::from_edges(3, [(1, 2), (2, 0)]);
        let mut flow = PreflowPush::new(&g, 0, 2, caps(&[1, 1])).unwrap();
        assert_eq!(flow.run_max_flow(), 0);
        assert_eq!(flow.source_side_cut(), vec![0]);
        assert_eq!(flow.sink_side_cut(), &[1, 2]);
        assert_eq!(flow.stats(), FlowStats::default());
    }

    #[test]
    fn parallel_edges() {
        init_logger();
        let edges = [(0, 2), (0, 2), (0, 1), (1, 2), (1, 2)];
        let g = IncidenceCsr::from_edges(3, edges);
        let mut flow = PreflowPush::new(&g, 0, 2, caps(&[3, 4, 5, 1, 2])).unwrap();

        assert_eq!(flow.run_max_flow(), 10);
        assert_eq!(
            g.edge_ids().map(|e| flow.flow_of(e)).collect_vec(),
            vec![3, 4, 3, 1, 2]
        );
        assert_eq!(flow.cut_capacity(), 10);

        // the bottleneck is a pair of parallel edges
        assert_eq!(run(3, &[(0, 1), (1, 2), (1, 2)], &[9, 2, 2], 0, 2), 4);
    }

    #[test]
    fn self_loops_carry_no_flow() {
        init_logger();
        let g = IncidenceCsr::from_edges(3, [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]);
        let mut flow = PreflowPush::new(&g, 0, 2, caps(&[5, 2, 7, 3, 1])).unwrap();

        assert_eq!(flow.run_max_flow(), 2);
        assert_eq!(flow.flow_of(0), 0);
        assert_eq!(flow.flow_of(2), 0);
        assert_eq!(flow.flow_of(4), 0);
    }

    #[test]
    fn flow_is_rerouted() {
        init_logger();
        // greedy s->a->b->t blocks the optimum of 2 unless flow along (a,b) is cancelled
        let edges = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)];
        assert_eq!(run(4, &edges, &[1, 1, 1, 1, 1], 0, 3), 2);

        // flow has to travel against edges that point into the source
        let edges = [(0, 1), (1, 0), (1, 2), (2, 1), (2, 3)];
        assert_eq!(run(4, &edges, &[7, 7, 1, 1, 9], 0, 3), 1);
    }

    #[test]
    fn zero_capacity_source_edge_stays_inactive() {
        init_logger();
        let g = IncidenceCsr::from_edges(3, [(0, 1), (1, 2)]);
        let mut flow = PreflowPush::new(&g, 0, 2, caps(&[0, 5])).unwrap();

        assert_eq!(flow.run_max_flow(), 0);
        assert_eq!(flow.stats().discharges, 0);
        assert_eq!(flow.excess_of(1), 0);
    }

    #[test]
    fn missing_capacities_are_zero() {
        init_logger();
        let g = IncidenceCsr::from_edges(3, [(0, 1), (1, 2), (0, 2)]);

        let mut sparse = SparseCapacities::default();
        sparse.insert(0, 4);
        sparse.insert(1, 3);
        let mut flow = PreflowPush::new(&g, 0, 2, &sparse).unwrap();
        assert_eq!(flow.run_max_flow(), 3);
        assert_eq!(flow.capacity_of(2), 0);
        assert_eq!(flow.flow_of(2), 0);

        // shorter dense vector: edge 2 has no entry
        let mut flow = PreflowPush::new(&g, 0, 2, caps(&[4, 3])).unwrap();
        assert_eq!(flow.run_max_flow(), 3);

        // unknown edge ids
        assert_eq!(flow.flow_of(3), 0);
        assert_eq!(flow.capacity_of(NumEdges::MAX), 0);
    }

    #[test]
    fn rejects_malformed_input() {
        let empty = IncidenceCsr::from_edges(0, std::iter::empty::<Edge>());
        assert_eq!(
            PreflowPush::new(&empty, 0, 0, caps(&[])).err(),
            Some(FlowError::EmptyGraph)
        );

        let g = IncidenceCsr::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(
            PreflowPush::new(&g, 3, 2, caps(&[1, 1])).err(),
            Some(FlowError::NodeOutOfRange { node: 3, n: 3 })
        );
        assert_eq!(
            PreflowPush::new(&g, 0, 5, caps(&[1, 1])).err(),
            Some(FlowError::NodeOutOfRange { node: 5, n: 3 })
        );
        assert_eq!(
            PreflowPush::new(&g, 1, 1, caps(&[1, 1])).err(),
            Some(FlowError::SourceIsSink(1))
        );
        assert_eq!(
            PreflowPush::new(&g, 0, 2, caps(&[1, 1, 1])).err(),
            Some(FlowError::UnknownEdge { edge: 2, m: 2 })
        );
        assert_eq!(
            PreflowPush::new(&g, 0, 2, caps(&[1, -3])).err(),
            Some(FlowError::NegativeCapacity {
                edge: 1,
                capacity: -3
            })
        );

        let mut sparse = SparseCapacities::default();
        sparse.insert(7, 1);
        assert_eq!(
            PreflowPush::new(&g, 0, 2, &sparse).err(),
            Some(FlowError::UnknownEdge { edge: 7, m: 2 })
        );
    }

    #[test]
    fn independent_of_active_order() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(0x0dde);

        for n in [2 as NumNodes, 5, 10, 30] {
            for _ in 0..30 {
                let m = rng.random_range(0..=4 * n);
                let (graph, caps) = random_network(rng, n, m, 20);
                let s = rng.random_range(0..n);
                let t = (s + rng.random_range(1..n)) % n;

                let fifo = PreflowPush::new(&graph, s, t, &caps)
                    .unwrap()
                    .active_order(ActiveOrder::Fifo)
                    .run_max_flow();

                let mut lifo = PreflowPush::new(&graph, s, t, &caps)
                    .unwrap()
                    .active_order(ActiveOrder::Lifo);
                assert_eq!(lifo.run_max_flow(), fifo);
                assert_eq!(lifo.cut_capacity(), fifo);
            }
        }
    }

    #[test]
    fn run_is_idempotent() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(17);
        let (graph, caps) = random_network(rng, 20, 80, 10);

        let mut flow = PreflowPush::new(&graph, 0, 19, &caps).unwrap();
        assert_eq!(flow.max_flow_value(), None);

        let value = flow.run_max_flow();
        let stats = flow.stats();
        let flows = graph.edge_ids().map(|e| flow.flow_of(e)).collect_vec();

        assert_eq!(flow.run_max_flow(), value);
        assert_eq!(flow.max_flow_value(), Some(value));
        assert_eq!(flow.stats(), stats);
        assert_eq!(graph.edge_ids().map(|e| flow.flow_of(e)).collect_vec(), flows);
    }

    #[test]
    fn reset_and_rerun() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(23);
        let (graph, caps) = random_network(rng, 15, 60, 10);

        let mut flow = PreflowPush::new(&graph, 3, 7, &caps).unwrap();
        assert_eq!(flow.source(), 3);
        assert_eq!(flow.sink(), 7);
        let value = flow.run_max_flow();
        let source_side = flow.source_side_cut();

        flow.reset();
        assert_eq!(flow.max_flow_value(), None);
        assert_eq!(flow.stats(), FlowStats::default());
        assert!(graph.edge_ids().all(|e| flow.flow_of(e) == 0));
        assert!(graph.vertices().all(|u| flow.excess_of(u) == 0));

        flow.set_active_order(ActiveOrder::Lifo);
        assert_eq!(flow.run_max_flow(), value);
        assert_eq!(flow.cut_capacity(), value);

        // the source side of a minimum cut found by residual reachability is unique
        assert_eq!(flow.source_side_cut(), source_side);
    }

    #[test]
    fn heights_stay_valid() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(99);

        for _ in 0..50 {
            let (graph, caps) = random_network(rng, 12, 40, 8);
            let mut flow = PreflowPush::new(&graph, 0, 11, &caps).unwrap();
            flow.run_max_flow();

            let n = graph.number_of_nodes();
            assert_eq!(flow.height_of(0), n);
            for (e, Edge(u, v)) in graph.edges() {
                if u == v {
                    continue;
                }
                if flow.residual_from(u, e) > 0 {
                    assert!(flow.height_of(u) <= flow.height_of(v) + 1);
                }
                if flow.residual_from(v, e) > 0 {
                    assert!(flow.height_of(v) <= flow.height_of(u) + 1);
                }
            }
            assert!(graph.vertices().all(|u| flow.height_of(u) < 2 * n));
        }
    }
}
