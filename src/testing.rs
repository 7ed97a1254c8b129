//! Crate-internal helpers for tests: random flow networks, a brute-force minimum cut and
//! macros generating test suites for graph representations and capacity maps.

#[cfg(test)]
use itertools::Itertools;
#[cfg(test)]
use rand::Rng;

#[cfg(test)]
use crate::{algo::Capacity, prelude::*};

#[cfg(test)]
/// Creates a random multigraph on `n` nodes with `m` edges (parallel edges and self-loops
/// included) together with capacities drawn uniformly from `0..=max_capacity`.
pub fn random_network<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: NumEdges,
    max_capacity: Capacity,
) -> (IncidenceCsr, Vec<Capacity>) {
    let edges = (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec();
    let capacities = (0..m)
        .map(|_| rng.random_range(0..=max_capacity))
        .collect_vec();

    (IncidenceCsr::from_edges(n, edges), capacities)
}

#[cfg(test)]
/// Computes the capacity of the minimum `(s, t)`-cut by enumerating all `2^(n-2)` bipartitions.
/// Only feasible for small `n`.
pub fn brute_force_min_cut<G>(graph: &G, capacities: &[Capacity], s: Node, t: Node) -> Capacity
where
    G: EdgeEndpoints + GraphNodeOrder,
{
    let free = graph.vertices().filter(|&u| u != s && u != t).collect_vec();
    assert!(free.len() < 20);

    let mut best = Capacity::MAX;
    for mask in 0u32..(1 << free.len()) {
        let mut source_side = vec![false; graph.len()];
        source_side[s as usize] = true;
        for (i, &u) in free.iter().enumerate() {
            source_side[u as usize] = (mask >> i) & 1 == 1;
        }

        let cut = graph
            .edges()
            .filter(|(_, Edge(u, v))| source_side[*u as usize] && !source_side[*v as usize])
            .map(|(e, _)| capacities.get(e as usize).copied().unwrap_or(0))
            .sum::<Capacity>();
        best = best.min(cut);
    }

    best
}

#[cfg(test)]
/// Installs `env_logger` for the current test binary; repeated calls are no-ops.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every graph representation should agree with the edge list it was built from
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges for nodes `0..n`, possibly with duplicates
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v)
                }).collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNodeOrder) => {
        #[test]
        fn graph_node_order() {
            for n in 0..50 {
                let graph = <$graph>::from_edges(n, std::iter::empty::<Edge>());

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: IncidenceList) => {
        #[test]
        fn test_incidence_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.edges().map(|(_, e)| e).collect_vec(), edges);

                        for u in 0..n {
                            let out_ids = edges
                                .iter()
                                .positions(|e| e.0 == u)
                                .map(|e| e as EdgeId)
                                .collect_vec();
                            let in_ids = edges
                                .iter()
                                .positions(|e| e.1 == u)
                                .map(|e| e as EdgeId)
                                .collect_vec();

                            assert_eq!(graph.out_edge_ids_of(u).collect_vec(), out_ids);
                            assert_eq!(graph.in_edge_ids_of(u).collect_vec(), in_ids);
                            assert_eq!(graph.out_degree_of(u), out_ids.len() as NumEdges);
                            assert_eq!(graph.in_degree_of(u), in_ids.len() as NumEdges);

                            for e in out_ids {
                                assert_eq!(graph.origin_of(e), u);
                            }
                            for e in in_ids {
                                assert_eq!(graph.destination_of(e), u);
                                assert_eq!(graph.other_end(e, u), graph.origin_of(e));
                            }
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Generates randomized property tests of the flow engine for a given capacity map type.
/// `$to_map` converts the dense `Vec<Capacity>` of a random network into that type.
macro_rules! test_max_flow_properties {
    ($env:ident, $to_map:expr) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, testing::*, utils::CapacityMap};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn random_networks_satisfy_flow_properties() {
                init_logger();
                let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

                for n in [2 as NumNodes, 3, 5, 8, 11] {
                    for m in [n, 2 * n, 4 * n] {
                        for _ in 0..20 {
                            let (graph, dense) = random_network(rng, n, m, 9);
                            let capacities = ($to_map)(&dense);

                            let s = rng.random_range(0..n);
                            let t = loop {
                                let t = rng.random_range(0..n);
                                if t != s {
                                    break t;
                                }
                            };

                            let mut engine =
                                PreflowPush::new(&graph, s, t, &capacities).unwrap();
                            let value = engine.run_max_flow();

                            // capacity bound
                            for e in graph.edge_ids() {
                                let flow = engine.flow_of(e);
                                assert!(0 <= flow && flow <= engine.capacity_of(e));
                                assert_eq!(engine.capacity_of(e), capacities.capacity_or_zero(e));
                            }

                            // conservation
                            for u in graph.vertices().filter(|&u| u != s && u != t) {
                                let inflow: Flow =
                                    graph.in_edge_ids_of(u).map(|e| engine.flow_of(e)).sum();
                                let outflow: Flow =
                                    graph.out_edge_ids_of(u).map(|e| engine.flow_of(e)).sum();
                                assert_eq!(inflow, outflow);
                                assert_eq!(engine.excess_of(u), 0);
                            }
                            assert_eq!(engine.excess_of(t), value);

                            // partition
                            let source_side = engine.source_side_cut();
                            let sink_side = engine.sink_side_cut().to_vec();
                            assert!(source_side.contains(&s));
                            assert!(sink_side.contains(&t));
                            assert_eq!(
                                source_side.iter().chain(&sink_side).copied().sorted().collect_vec(),
                                graph.vertices().collect_vec()
                            );

                            // saturation at the cut and max-flow/min-cut equality
                            let mut on_source_side = vec![false; graph.len()];
                            source_side.iter().for_each(|&u| on_source_side[u as usize] = true);
                            for (e, Edge(u, v)) in graph.edges() {
                                let (su, sv) = (on_source_side[u as usize], on_source_side[v as usize]);
                                if su && !sv {
                                    assert_eq!(engine.flow_of(e), engine.capacity_of(e));
                                } else if !su && sv {
                                    assert_eq!(engine.flow_of(e), 0);
                                }
                            }
                            assert_eq!(engine.cut_capacity(), value);
                            assert_eq!(value, brute_force_min_cut(&graph, &dense, s, t));
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_max_flow_properties;
