//! Rank-`R` coordinate types.
//!
//! [`Shape`], [`Index`], [`Jumps`] and [`Strides`] all wrap a
//! [`FixedTuple<usize, R>`] and dereference to it, so every tuple operation
//! is available on them. They are distinct types so that an index cannot be
//! passed where a shape is expected.

use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};

use super::{FixedTuple, AccessPattern};

macro_rules! impl_coordinates {
    ($name:ident, $open:literal, $close:literal) => {
        impl<const R: usize> $name<R> {
            pub const fn new(items: [usize; R]) -> Self { Self(FixedTuple::new(items)) }

            pub fn uniform(value: usize) -> Self { Self(FixedTuple::uniform(value)) }

            /// Returns a copy of `self` of rank `S = R + 1`, with `value`
            /// inserted before `axis`.
            pub fn insert<const S: usize>(&self, axis: usize, value: usize) -> $name<S> {
                $name(self.0.insert(axis, value))
            }

            /// Returns a copy of `self` of rank `S = R - 1`, without `axis`.
            pub fn remove<const S: usize>(&self, axis: usize) -> $name<S> {
                $name(self.0.remove(axis))
            }

            pub fn insert_elements<const K: usize, const S: usize>(
                &self,
                axes: FixedTuple<usize, K>,
                values: FixedTuple<usize, K>,
            ) -> $name<S> {
                $name(self.0.insert_elements(axes, values))
            }

            pub fn remove_elements<const K: usize, const S: usize>(
                &self,
                axes: FixedTuple<usize, K>,
            ) -> $name<S> {
                $name(self.0.remove_elements(axes))
            }

            /// Returns a copy of `self` with `axis` set to `value`.
            #[inline(always)]
            pub fn with(mut self, axis: usize, value: usize) -> Self {
                self.0[axis] = value;
                self
            }
        }

        impl<const R: usize> Deref for $name<R> {
            type Target = FixedTuple<usize, R>;
            #[inline(always)]
            fn deref(&self) -> &Self::Target { &self.0 }
        }

        impl<const R: usize> DerefMut for $name<R> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
        }

        impl<const R: usize> From<[usize; R]> for $name<R> {
            fn from(items: [usize; R]) -> Self { Self::new(items) }
        }

        impl From<usize> for $name<1> {
            fn from(item: usize) -> Self { Self::new([item]) }
        }

        impl<const R: usize> From<FixedTuple<usize, R>> for $name<R> {
            fn from(items: FixedTuple<usize, R>) -> Self { Self(items) }
        }

        impl<const R: usize> Display for $name<R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} ", $open)?;
                for x in self.iter() { write!(f, "{} ", x)?; }
                write!(f, "{}", $close)
            }
        }
    };
}

// ----------------------------------------------------------------------------

/// The extent of an array along each of its `R` axes.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq)]
pub struct Shape<const R: usize>(FixedTuple<usize, R>);

impl_coordinates!(Shape, "<", ">");

impl<const R: usize> Shape<R> {
    /// The number of elements in an array of this shape.
    ///
    /// ```
    /// use ndview::Shape;
    /// assert_eq!(Shape::new([3, 4, 5]).volume(), 60);
    /// assert_eq!(Shape::new([]).volume(), 1);
    /// ```
    pub fn volume(&self) -> usize { self.0.product() }

    /// Tests whether `index` lies inside an array of this shape.
    pub fn contains(&self, index: impl Into<Index<R>>) -> bool {
        index.into().all_lt(self)
    }

    /// The row-major strides of a dense buffer of this shape.
    pub fn strides(&self) -> Strides<R> { Strides::row_major(*self) }

    /// Every index of this shape, in row-major order.
    pub fn indexes(&self) -> AccessPattern<R> { AccessPattern::over(*self) }
}

// ----------------------------------------------------------------------------

/// A position within an array.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq)]
pub struct Index<const R: usize>(FixedTuple<usize, R>);

impl_coordinates!(Index, "[", "]");

impl<const R: usize> Index<R> {
    /// The index whose coordinates are all zero.
    pub fn zero() -> Self { Self::uniform(0) }
}

// ----------------------------------------------------------------------------

/// The step taken along each axis by an [`AccessPattern`].
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Jumps<const R: usize>(FixedTuple<usize, R>);

impl_coordinates!(Jumps, "(", ")");

impl<const R: usize> Default for Jumps<R> {
    fn default() -> Self { Self::uniform(1) }
}

// ----------------------------------------------------------------------------

/// Multipliers mapping an [`Index`] to an offset into a dense buffer.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq)]
pub struct Strides<const R: usize>(FixedTuple<usize, R>);

impl_coordinates!(Strides, "(", ")");

impl<const R: usize> Strides<R> {
    /// The strides of a dense row-major buffer of shape `shape`: the last
    /// axis has stride 1 and each other axis has the stride of the next axis
    /// times that axis's extent.
    ///
    /// ```
    /// use ndview::{Shape, Strides};
    /// let strides = Strides::row_major(Shape::new([20, 10, 5]));
    /// assert_eq!(strides, Strides::new([50, 5, 1]));
    /// assert_eq!(strides.compute_offset([1, 1, 1].into()), 56);
    /// ```
    pub fn row_major(shape: Shape<R>) -> Self {
        let mut strides = [0; R];
        let mut stride = 1;
        for axis in (0..R).rev() {
            strides[axis] = stride;
            stride *= shape[axis];
        }
        Self::new(strides)
    }

    /// The buffer offset of `index`.
    #[inline(always)]
    pub fn compute_offset(&self, index: Index<R>) -> usize {
        self.iter().zip(index.iter()).map(|(&s, &i)| s * i).sum()
    }
}

// ----------------------------------------------------------------------------
