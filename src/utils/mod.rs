/*!
# Utilities

Provides the helper structures used by the graph representation and the flow engine:
- [`SlicedBuffer`](self::sliced_buffer::SlicedBuffer): the internal CSR storage of [`IncidenceCsr`](crate::repr::IncidenceCsr),
- [`CapacityMap`]: abstraction over `edge -> capacity` lookups with "missing means zero" semantics.
*/

pub mod capacity;
pub mod sliced_buffer;

pub use capacity::{CapacityMap, SparseCapacities};
