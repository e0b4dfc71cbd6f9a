//! Fixed-length tuples of homogeneous scalars.
//!
//! [`FixedTuple<T, N>`] is a stack-allocated `[T; N]` with the handful of
//! whole-tuple operations that shapes, indices and strides are built from:
//! element-wise transforms, reductions, per-axis comparisons, and insertion
//! or removal of elements at given positions.
//!
//! Insertion and removal change the length of the tuple, and therefore its
//! type. The output length is a const parameter that is usually inferred
//! from context; a length that does not add up is rejected when the call is
//! monomorphised, not at run time.

use std::fmt::{Debug};

use super::{Error};

/// Compile-time check that `N + K == M`.
struct Arity<const N: usize, const K: usize, const M: usize>;

impl<const N: usize, const K: usize, const M: usize> Arity<N, K, M> {
    const SUM: () = assert!(N + K == M, "tuple lengths do not add up");
}

// ----------------------------------------------------------------------------

/// An immutable-length ordered sequence of `N` scalars of type `T`.
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub struct FixedTuple<T, const N: usize>([T; N]);

impl<T: Copy + Default, const N: usize> FixedTuple<T, N> {
    /// Constructs a `FixedTuple` from its elements.
    pub const fn new(items: [T; N]) -> Self { Self(items) }

    /// Constructs a `FixedTuple` whose elements are all `value`.
    pub fn uniform(value: T) -> Self { Self([value; N]) }

    /// Constructs a `FixedTuple` from a slice, which must have length `N`.
    ///
    /// ```
    /// use ndview::FixedTuple;
    /// assert!(FixedTuple::<usize, 3>::from_slice(&[1, 2, 3]).is_ok());
    /// assert!(FixedTuple::<usize, 3>::from_slice(&[1, 2]).is_err());
    /// ```
    pub fn from_slice(items: &[T]) -> Result<Self, Error> {
        let array: [T; N] = items.try_into().map_err(|_| Error::WrongLength {
            expected: N,
            found: items.len(),
        })?;
        Ok(Self(array))
    }

    #[inline(always)]
    pub const fn len(&self) -> usize { N }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { N == 0 }

    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] { &self.0 }

    #[inline(always)]
    pub fn into_array(self) -> [T; N] { self.0 }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    pub fn to_vec(&self) -> Vec<T> { self.0.to_vec() }

    /// Apply `f` to every element.
    pub fn map<U: Copy + Default>(self, f: impl FnMut(T) -> U) -> FixedTuple<U, N> {
        FixedTuple(self.0.map(f))
    }

    /// Combine corresponding elements of `self` and `other` using `f`.
    pub fn zip_with<U: Copy + Default, V: Copy + Default>(
        self,
        other: FixedTuple<U, N>,
        mut f: impl FnMut(T, U) -> V,
    ) -> FixedTuple<V, N> {
        FixedTuple(std::array::from_fn(|n| f(self.0[n], other.0[n])))
    }

    pub fn fold<A>(self, init: A, f: impl FnMut(A, T) -> A) -> A {
        self.0.into_iter().fold(init, f)
    }

    pub fn sum(self) -> T where T: std::iter::Sum<T> { self.0.into_iter().sum() }

    pub fn product(self) -> T where T: std::iter::Product<T> { self.0.into_iter().product() }

    pub fn all(&self, f: impl FnMut(&T) -> bool) -> bool { self.0.iter().all(f) }

    pub fn any(&self, f: impl FnMut(&T) -> bool) -> bool { self.0.iter().any(f) }

    pub fn contains(&self, value: &T) -> bool where T: PartialEq { self.0.contains(value) }

    /// Returns a tuple of length `M = N + 1` with `value` inserted at
    /// position `at`.
    ///
    /// ```
    /// use ndview::FixedTuple;
    /// let t = FixedTuple::new([1, 2, 3]);
    /// assert_eq!(t.insert::<4>(1, 9), FixedTuple::new([1, 9, 2, 3]));
    /// ```
    pub fn insert<const M: usize>(&self, at: usize, value: T) -> FixedTuple<T, M> {
        self.insert_elements(FixedTuple([at]), FixedTuple([value]))
    }

    /// Returns a tuple of length `M = N - 1` without the element at `at`.
    pub fn remove<const M: usize>(&self, at: usize) -> FixedTuple<T, M> {
        self.remove_elements(FixedTuple([at]))
    }

    /// Returns a tuple of length `M = N + K` in which the positions listed in
    /// `positions` hold `values` and the other positions hold the elements
    /// of `self`, in order. Values are consumed in order of increasing
    /// position.
    pub fn insert_elements<const K: usize, const M: usize>(
        &self,
        positions: FixedTuple<usize, K>,
        values: FixedTuple<T, K>,
    ) -> FixedTuple<T, M> {
        #[allow(clippy::let_unit_value)]
        let () = Arity::<N, K, M>::SUM;
        let mut result = [T::default(); M];
        let mut source = self.0.into_iter();
        let mut inserted = values.0.into_iter();
        for (n, slot) in result.iter_mut().enumerate() {
            let next = if positions.contains(&n) { inserted.next() } else { source.next() };
            if let Some(value) = next { *slot = value; }
        }
        FixedTuple(result)
    }

    /// Returns a tuple of length `M = N - K` without the elements at
    /// `positions`.
    pub fn remove_elements<const K: usize, const M: usize>(
        &self,
        positions: FixedTuple<usize, K>,
    ) -> FixedTuple<T, M> {
        #[allow(clippy::let_unit_value)]
        let () = Arity::<M, K, N>::SUM;
        let mut result = [T::default(); M];
        let kept = (0..N).filter(|n| !positions.contains(n)).map(|n| self.0[n]);
        for (slot, value) in result.iter_mut().zip(kept) { *slot = value; }
        FixedTuple(result)
    }
}

impl<T: Copy + Default + PartialOrd, const N: usize> FixedTuple<T, N> {
    /// `true` if every element of `self` is `<` the corresponding one of
    /// `other`. This is not a total order: `a.all_lt(&b)` and `b.all_le(&a)`
    /// can both be false.
    pub fn all_lt(&self, other: &Self) -> bool { self.0.iter().zip(&other.0).all(|(a, b)| a < b) }
    pub fn all_le(&self, other: &Self) -> bool { self.0.iter().zip(&other.0).all(|(a, b)| a <= b) }
    pub fn all_gt(&self, other: &Self) -> bool { self.0.iter().zip(&other.0).all(|(a, b)| a > b) }
    pub fn all_ge(&self, other: &Self) -> bool { self.0.iter().zip(&other.0).all(|(a, b)| a >= b) }
}

impl<T: Copy + Default, const N: usize> Default for FixedTuple<T, N> {
    fn default() -> Self { Self::uniform(T::default()) }
}

impl<T: Debug, const N: usize> Debug for FixedTuple<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedTuple<T, N> {
    fn from(items: [T; N]) -> Self { Self(items) }
}

impl<T, const N: usize> std::ops::Index<usize> for FixedTuple<T, N> {
    type Output = T;
    #[inline(always)]
    fn index(&self, n: usize) -> &T { &self.0[n] }
}

impl<T, const N: usize> std::ops::IndexMut<usize> for FixedTuple<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, n: usize) -> &mut T { &mut self.0[n] }
}

impl<T, const N: usize> IntoIterator for FixedTuple<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedTuple<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

// ----------------------------------------------------------------------------
