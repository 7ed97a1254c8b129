/*!
# CSR-based Sliced Buffers

This module provides a **Compressed Sparse Row (CSR)**-like data structure for storing
variable-length slices efficiently.

- A contiguous `buffer: Vec<T>` stores all elements.
- A non-decreasing `offsets: Vec<I>` stores slice boundaries, where slice `i` is `buffer[offsets[i]..offsets[i+1]]`.

### Invariants
All constructions verify the following invariants:

1. `offsets.len() >= 1`
2. `offsets` is non-decreasing
3. the last entry of `offsets` equals `buffer.len()`

These invariants allow **unchecked access** when indexing slices.
*/

use std::ops::Index;

use num::PrimInt;

use crate::node::Node;

/// CSR-like structure storing slices of elements.
///
/// - `buffer`: all elements contiguously
/// - `offsets`: start indices of each slice
#[derive(Debug, Clone)]
pub struct SlicedBuffer<T, I>
where
    I: PrimInt,
{
    buffer: Vec<T>,
    offsets: Vec<I>,
}

impl<T, I> SlicedBuffer<T, I>
where
    I: PrimInt,
{
    /// Constructs a new `SlicedBuffer`.
    ///
    /// # Panics
    /// Panics if:
    /// - `offsets` is empty
    /// - `offsets` is not sorted
    /// - the last offset does not match the `buffer` length
    ///
    /// # Examples
    /// ```
    /// use preflow::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u32, 2, 4, 7]);
    /// assert_eq!(sb.len(), 3);
    /// assert_eq!(&sb[1], &[4, 5]);
    /// ```
    pub fn new(buffer: Vec<T>, offsets: Vec<I>) -> Self {
        assert!(!offsets.is_empty());
        assert!(offsets.is_sorted());
        assert_eq!(offsets.last().and_then(|x| x.to_usize()), Some(buffer.len()));

        Self { buffer, offsets }
    }

    /// Returns the number of slices.
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the length of slice `u`.
    ///
    /// # Examples
    /// ```
    /// use preflow::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u32, 2, 4, 7]);
    /// assert_eq!(sb.size_of(2), 3u32);
    /// ```
    #[inline(always)]
    pub fn size_of(&self, u: Node) -> I {
        self.offsets[u as usize + 1] - self.offsets[u as usize]
    }
}

impl<T, I> SlicedBuffer<T, I>
where
    T: Copy + Default,
    I: PrimInt,
{
    /// Builds a buffer with `num_slices` slices from `(slice, value)` pairs via counting sort.
    /// Values keep their relative input order within each slice.
    ///
    /// # Panics
    /// Panics if a slice index is `>= num_slices` or the number of entries does not fit into `I`.
    ///
    /// # Examples
    /// ```
    /// use preflow::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb: SlicedBuffer<u32, u32> = SlicedBuffer::from_grouped(3, [(2, 10), (0, 11), (2, 12)]);
    /// assert_eq!(&sb[0], &[11]);
    /// assert!(sb[1].is_empty());
    /// assert_eq!(&sb[2], &[10, 12]);
    /// ```
    pub fn from_grouped<It>(num_slices: usize, entries: It) -> Self
    where
        It: IntoIterator<Item = (Node, T)>,
        It::IntoIter: Clone,
    {
        let entries = entries.into_iter();

        let mut counts = vec![0usize; num_slices + 1];
        for (u, _) in entries.clone() {
            counts[u as usize + 1] += 1;
        }
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }

        let total = counts[num_slices];
        let mut buffer = vec![T::default(); total];
        let mut cursor = counts[..num_slices].to_vec();
        for (u, value) in entries {
            buffer[cursor[u as usize]] = value;
            cursor[u as usize] += 1;
        }

        let offsets = counts
            .into_iter()
            .map(|x| num::cast::<usize, I>(x).expect("offset exceeds index type"))
            .collect();

        Self::new(buffer, offsets)
    }
}

impl<T, I> Index<Node> for SlicedBuffer<T, I>
where
    I: PrimInt,
{
    type Output = [T];

    #[inline(always)]
    fn index(&self, idx: Node) -> &Self::Output {
        let end = self.offsets[idx as usize + 1].to_usize().unwrap();
        let start = self.offsets[idx as usize].to_usize().unwrap();

        // using unchecked here is safe, since we established in the
        // constructor that all entries within `self.offsets` are
        //  (i) non-decreasing (i.e. produce a valid range) and
        //  (ii) are within bounds of `self.buffer`
        unsafe { self.buffer.get_unchecked(start..end) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_offsets() {
        let sb: SlicedBuffer<u32, u8> = SlicedBuffer::new(vec![7, 8, 9], vec![0, 0, 2, 3]);
        assert!(sb[0].is_empty());
        assert_eq!(&sb[1], &[7, 8]);
        assert_eq!(&sb[2], &[9]);
        assert_eq!(sb.size_of(1), 2);
    }

    #[test]
    #[should_panic]
    fn negative_offset_is_rejected_on_access() {
        let sb: SlicedBuffer<u32, i32> = SlicedBuffer::new(Vec::new(), vec![-1, 0]);
        let _ = &sb[0];
    }
}
