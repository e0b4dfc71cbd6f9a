//! Strided rectangular regions of index space.

use std::fmt::{self, Display};

use super::{Index, Jumps, Shape};

/// A rectangular, possibly strided, region of rank-`R` index space.
///
/// The pattern generates every index `m` with `start <= m < end` on every
/// axis and `(m - start) % jumps == 0`. It is used both to iterate over the
/// indices of an array and to describe sub-regions for
/// [`select()`](super::select) and [`replace()`](super::replace).
///
/// ```
/// use ndview::{access_pattern, Index};
/// let p = access_pattern([10]).with_start([4]).with_jumps([2]);
/// assert_eq!(p.size(), 3);
/// assert!(p.generates([6]));
/// assert!(!p.generates([5]));
/// assert_eq!(p.iter().collect::<Vec<_>>(), [Index::new([4]), Index::new([6]), Index::new([8])]);
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct AccessPattern<const R: usize> {
    pub start: Index<R>,
    pub end: Index<R>,
    pub jumps: Jumps<R>,
}

/// Construct an [`AccessPattern`] over `[0, end)` with unit jumps.
pub fn access_pattern<const R: usize>(end: impl Into<Index<R>>) -> AccessPattern<R> {
    AccessPattern::new(end)
}

impl<const R: usize> AccessPattern<R> {
    /// The pattern over `[0, end)` with unit jumps.
    pub fn new(end: impl Into<Index<R>>) -> Self {
        Self { start: Index::zero(), end: end.into(), jumps: Jumps::default() }
    }

    /// The pattern that visits every index of `shape`.
    pub fn over(shape: Shape<R>) -> Self {
        Self::new(*shape.as_array())
    }

    pub fn with_start(self, start: impl Into<Index<R>>) -> Self {
        Self { start: start.into(), ..self }
    }

    pub fn with_end(self, end: impl Into<Index<R>>) -> Self {
        Self { end: end.into(), ..self }
    }

    pub fn with_jumps(self, jumps: impl Into<Jumps<R>>) -> Self {
        Self { jumps: jumps.into(), ..self }
    }

    /// The extent of the pattern along each axis, computed as
    /// `end / jumps - start / jumps` (integer division). An axis with
    /// `start >= end` or a zero jump has extent 0.
    pub fn shape(&self) -> Shape<R> {
        Shape::new(std::array::from_fn(|axis| {
            let (start, end, jump) = (self.start[axis], self.end[axis], self.jumps[axis]);
            if jump == 0 || start >= end { 0 } else { end / jump - start / jump }
        }))
    }

    /// The number of indices in [`Self::shape()`].
    pub fn size(&self) -> usize { self.shape().volume() }

    pub fn is_empty(&self) -> bool { self.size() == 0 }

    /// Tests whether `index` is a valid index into [`Self::shape()`].
    pub fn contains(&self, index: impl Into<Index<R>>) -> bool {
        self.shape().contains(index)
    }

    /// Steps `index` to the next generated index, with the last axis varying
    /// fastest. When an axis reaches `end` it is reset to `start` and the
    /// previous axis is stepped. Returns `false`, leaving `index` equal to
    /// `end`, once every axis has overflowed.
    ///
    /// The jumps must be non-zero.
    pub fn advance(&self, index: &mut Index<R>) -> bool {
        if R == 0 {
            *index = self.end;
            return false;
        }
        let mut axis = R - 1;
        index[axis] += self.jumps[axis];
        while index[axis] >= self.end[axis] {
            if axis == 0 {
                *index = self.end;
                return false;
            }
            index[axis] = self.start[axis];
            axis -= 1;
            index[axis] += self.jumps[axis];
        }
        true
    }

    /// Maps an index of [`Self::shape()`] to the index it denotes:
    /// `start + jumps * index`.
    #[inline(always)]
    pub fn map_index(&self, index: impl Into<Index<R>>) -> Index<R> {
        let index = index.into();
        Index::new(std::array::from_fn(|axis| self.start[axis] + self.jumps[axis] * index[axis]))
    }

    /// The inverse of [`Self::map_index()`]: `(index - start) / jumps`.
    /// Only meaningful if `self.generates(index)`.
    #[inline(always)]
    pub fn inverse_map_index(&self, index: impl Into<Index<R>>) -> Index<R> {
        let index = index.into();
        Index::new(std::array::from_fn(|axis| (index[axis] - self.start[axis]) / self.jumps[axis]))
    }

    /// Tests whether `index` is one of the indices this pattern visits.
    pub fn generates(&self, index: impl Into<Index<R>>) -> bool {
        let index = index.into();
        (0..R).all(|axis| {
            let (start, end, jump) = (self.start[axis], self.end[axis], self.jumps[axis]);
            let m = index[axis];
            jump != 0 && start <= m && m < end && (m - start) % jump == 0
        })
    }

    /// Tests whether every index this pattern maps to lies inside an array of
    /// shape `parent`. An empty pattern is within `parent` if its start does
    /// not exceed `parent` on any axis.
    pub fn within(&self, parent: Shape<R>) -> bool {
        if self.jumps.contains(&0) { return false; }
        let shape = self.shape();
        if shape.volume() == 0 { return self.start.all_le(&parent); }
        let last = self.map_index(shape.map(|extent| extent - 1));
        self.start.all_lt(&parent) && last.all_lt(&parent)
    }

    /// Iterate over the indices of this pattern, in row-major order.
    pub fn iter(&self) -> Indexes<R> {
        Indexes {
            pattern: *self,
            current: if self.is_empty() { None } else { Some(self.start) },
        }
    }
}

impl<const R: usize> Display for AccessPattern<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

impl<const R: usize> IntoIterator for AccessPattern<R> {
    type Item = Index<R>;
    type IntoIter = Indexes<R>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, const R: usize> IntoIterator for &'a AccessPattern<R> {
    type Item = Index<R>;
    type IntoIter = Indexes<R>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// ----------------------------------------------------------------------------

/// An [`Iterator`] over the indices of an [`AccessPattern`].
#[derive(Debug, Clone)]
pub struct Indexes<const R: usize> {
    pattern: AccessPattern<R>,
    current: Option<Index<R>>,
}

impl<const R: usize> Iterator for Indexes<R> {
    type Item = Index<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let mut next = current;
        self.current = if self.pattern.advance(&mut next) { Some(next) } else { None };
        Some(current)
    }
}

impl<const R: usize> std::iter::FusedIterator for Indexes<R> {}

// ----------------------------------------------------------------------------

/// Compile-time check that rank `R` has an axis 0.
struct HasAxis<const R: usize>;

impl<const R: usize> HasAxis<R> {
    const CHECK: () = assert!(R > 0, "rank must be at least 1");
}

/// Splits `shape` into `N` contiguous slabs along axis 0. Slab `n` covers
/// `[n * extent / N, (n + 1) * extent / N)` on that axis and the whole of
/// every other axis.
///
/// `R` must be at least 1. Rank 0 is rejected at compile time:
///
/// ```compile_fail
/// use ndview::{partition_shape, Shape};
/// let _ = partition_shape::<2, 0>(Shape::<0>::new([]));
/// ```
///
/// ```
/// use ndview::{partition_shape, Shape};
/// let [a, b, c] = partition_shape::<3, 2>(Shape::new([10, 4]));
/// assert_eq!((a.size(), b.size(), c.size()), (12, 12, 16));
/// ```
pub fn partition_shape<const N: usize, const R: usize>(shape: Shape<R>) -> [AccessPattern<R>; N] {
    #[allow(clippy::let_unit_value)]
    let () = HasAxis::<R>::CHECK;
    let whole = AccessPattern::over(shape);
    let extent = shape[0];
    tracing::trace!(%shape, parts = N, "partitioning shape along axis 0");
    std::array::from_fn(|n| {
        whole
            .with_start(whole.start.with(0, n * extent / N))
            .with_end(whole.end.with(0, (n + 1) * extent / N))
    })
}

// ----------------------------------------------------------------------------
