/*!
# Capacity Maps

Abstraction over the `edge -> capacity` lookup of a flow network, allowing callers to pick
whichever container they already have:
- Dense capacities indexed by [`EdgeId`] -> `[Capacity]` / `Vec<Capacity>`
- Sparse capacities -> `HashMap<EdgeId, Capacity>`, e.g. [`SparseCapacities`]

Entries that are not present are interpreted as capacity `0`.
*/

use std::{collections::HashMap, hash::BuildHasher};

use fxhash::FxHashMap;

use crate::{algo::Capacity, edge::EdgeId};

/// Sparse capacities for networks where most edges have capacity `0`
pub type SparseCapacities = FxHashMap<EdgeId, Capacity>;

/// Read-only `edge -> capacity` map.
pub trait CapacityMap {
    /// Returns the capacity stored for edge `e`, or `None` if there is no entry.
    fn get_capacity(&self, e: EdgeId) -> Option<Capacity>;

    /// Returns the capacity of edge `e`, defaulting to `0` for missing entries.
    #[inline]
    fn capacity_or_zero(&self, e: EdgeId) -> Capacity {
        self.get_capacity(e).unwrap_or(0)
    }

    /// Returns an iterator over all stored `(edge, capacity)` entries.
    /// Used to validate a map against a graph before running an algorithm.
    fn entries(&self) -> impl Iterator<Item = (EdgeId, Capacity)> + '_;
}

impl CapacityMap for [Capacity] {
    #[inline]
    fn get_capacity(&self, e: EdgeId) -> Option<Capacity> {
        self.get(e as usize).copied()
    }

    fn entries(&self) -> impl Iterator<Item = (EdgeId, Capacity)> + '_ {
        self.iter().enumerate().map(|(e, &c)| (e as EdgeId, c))
    }
}

impl CapacityMap for Vec<Capacity> {
    #[inline]
    fn get_capacity(&self, e: EdgeId) -> Option<Capacity> {
        self.as_slice().get_capacity(e)
    }

    fn entries(&self) -> impl Iterator<Item = (EdgeId, Capacity)> + '_ {
        self.as_slice().entries()
    }
}

impl<S> CapacityMap for HashMap<EdgeId, Capacity, S>
where
    S: BuildHasher,
{
    #[inline]
    fn get_capacity(&self, e: EdgeId) -> Option<Capacity> {
        self.get(&e).copied()
    }

    fn entries(&self) -> impl Iterator<Item = (EdgeId, Capacity)> + '_ {
        self.iter().map(|(&e, &c)| (e, c))
    }
}

impl<C> CapacityMap for &C
where
    C: CapacityMap + ?Sized,
{
    #[inline]
    fn get_capacity(&self, e: EdgeId) -> Option<Capacity> {
        (**self).get_capacity(e)
    }

    fn entries(&self) -> impl Iterator<Item = (EdgeId, Capacity)> + '_ {
        (**self).entries()
    }
}
