/*!
`preflow` computes **maximum flows** and **minimum cuts** in directed networks with integer
capacities using the preflow-push (push-relabel) method with FIFO selection of active nodes.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As flow networks practically never exceed `2^32` nodes, this suffices and saves space in the
per-node arrays of the algorithm.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` for their endpoints and a dense
[`EdgeId`] in `0..m` for their identity: networks may contain parallel edges and self-loops, and
every edge carries its own capacity and flow.

The algorithm only relies on the traits in [`ops`]. The [`repr`] module provides
[`IncidenceCsr`](crate::repr::IncidenceCsr), an immutable multigraph implementing all of them.

# Design

The algorithm is provided as a configurable struct [`PreflowPush`](crate::algo::PreflowPush)
that one can alter using either the *Builder* or *Setter* pattern before running it. For one-shot
computations, [`MaxFlow`](crate::algo::MaxFlow) is implemented on every suitable graph.

Capacities are supplied through [`CapacityMap`](crate::utils::CapacityMap), implemented for dense
vectors/slices indexed by edge id and for hash maps. Missing entries have capacity `0`.

Malformed inputs are reported as [`FlowError`]. Progress is reported through the `log` facade.

# Usage

```
use preflow::{prelude::*, algo::*};

let g = IncidenceCsr::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3), (1, 2)]);
let capacities: Vec<Capacity> = vec![3, 2, 1, 3, 2];

let mut flow = PreflowPush::new(&g, 0, 3, &capacities)?;
assert_eq!(flow.run_max_flow(), 4);
assert_eq!(flow.cut_edges(), vec![2, 3]);
# Ok::<(), FlowError>(())
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::FlowError;
pub use node::*;

/// `preflow::prelude` includes definitions for nodes and edges, all graph operation traits, the
/// graph representation and the error type.
pub mod prelude {
    pub use super::{edge::*, error::FlowError, node::*, ops::*, repr::*};
}
