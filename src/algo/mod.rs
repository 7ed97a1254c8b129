/*!
# Flow Algorithms

This module provides the **preflow-push** (push-relabel) maximum flow algorithm and the
minimum cut derived from its final residual network. Everything is re-exported at the top level
of this module, so you can simply do:
```rust
use preflow::algo::*;
```

- [`PreflowPush`] is the configurable engine: construct it for a graph, a source, a sink and a
  [`CapacityMap`], run it, then query flows, excesses, heights and the cut.
- [`MaxFlow`] exposes one-shot computations directly as methods on every graph implementing
  [`IncidenceList`].
- [`sink_distances`] computes the reverse-BFS distances used as initial heights.
*/

mod min_cut;
mod preflow_push;
mod traversal;

use crate::{prelude::*, utils::*};

pub use min_cut::*;
pub use preflow_push::*;
pub use traversal::*;

/// Capacities are non-negative integers; `i64` leaves room for summing them at a vertex.
pub type Capacity = i64;

/// Flow along an edge and excess at a vertex share the capacity type.
pub type Flow = i64;
