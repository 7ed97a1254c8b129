/*!
# Graph Representations

The flow algorithms only depend on the traits in [`ops`](crate::ops). This module provides a
single concrete representation satisfying all of them:

- [`IncidenceCsr`]: an immutable directed **multigraph** storing, per node, the ids of its
  outgoing and incoming edges in two CSR buffers.

Parallel edges and self-loops are kept as distinct edges, which is required to attach
independent capacities to them.
*/

use crate::{ops::*, *};

mod incidence;

pub use incidence::*;
