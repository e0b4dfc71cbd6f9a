//! The lazy [`Provider`]s that operators wrap around their input.
//!
//! None of these store elements. Each one holds the [`Provider`] (or
//! providers) it draws from, plus the parameters of the operator that built
//! it, and recomputes every element on each access.
//!
//! The providers that only rearrange indices implement [`MemoryProvider`]
//! whenever the provider they draw from does, so a chain of such operators
//! over a [`Unique`](super::Unique) or [`Shared`](super::Shared) array can
//! still hand out references.

use super::{Provider, MemoryProvider, Shape, Index, AccessPattern, Array, Error};
use super::ops::{Binary, Spread};
use super::reduce::{Reduction};

/// Computes `f(source.at(index))`. See [`map()`](super::map).
#[derive(Debug, Copy, Clone)]
pub struct Map<P, F>(pub(crate) P, pub(crate) F);

impl<P: Provider<R>, U: Clone, F: Fn(P::T) -> U, const R: usize> Provider<R> for Map<P, F> {
    type T = U;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.0.shape() }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> U { (self.1)(self.0.at(index)) }
}

// ----------------------------------------------------------------------------

/// Spreads each tuple element of `source` into the arguments of `f`. See
/// [`apply()`](super::apply).
#[derive(Debug, Copy, Clone)]
pub struct Apply<P, F>(pub(crate) P, pub(crate) F);

impl<P: Provider<R>, F: Spread<P::T>, const R: usize> Provider<R> for Apply<P, F> where
    F::Output: Clone,
{
    type T = F::Output;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.0.shape() }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> Self::T { self.1.spread(self.0.at(index)) }
}

// ----------------------------------------------------------------------------

/// Combines corresponding elements of two same-shaped providers using a
/// [`Binary`] operator. See [`Array::binary()`].
#[derive(Debug, Copy, Clone)]
pub struct ZipWith<P, Q, B>(pub(crate) P, pub(crate) Q, pub(crate) B);

impl<P: Provider<R>, Q: Provider<R>, B: Binary<P::T, Q::T>, const R: usize> Provider<R> for ZipWith<P, Q, B> where
    B::Output: Clone,
{
    type T = B::Output;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.0.shape() }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> Self::T { self.2.call(self.0.at(index), self.1.at(index)) }
}

// ----------------------------------------------------------------------------

/// Pairs up corresponding elements of a tuple of same-shaped providers. See
/// [`zip_arrays()`](super::zip_arrays).
#[derive(Debug, Copy, Clone)]
pub struct Zip<Ps>(pub(crate) Ps);

macro_rules! impl_zip {
    ($($p:ident: $n:tt),*) => {
        impl<$($p: Provider<R>,)* const R: usize> Provider<R> for Zip<($($p,)*)> {
            type T = ($($p::T,)*);

            #[inline(always)]
            fn shape(&self) -> Shape<R> { (self.0).0.shape() }

            #[inline(always)]
            fn at(&self, index: Index<R>) -> Self::T { ($((self.0).$n.at(index),)*) }
        }
    };
}

impl_zip!(P0: 0, P1: 1);
impl_zip!(P0: 0, P1: 1, P2: 2);

// ----------------------------------------------------------------------------

/// The outer product of a tuple of rank-1 providers. See
/// [`cartesian_product()`](super::cartesian_product).
#[derive(Debug, Copy, Clone)]
pub struct Cartesian<Ps>(pub(crate) Ps);

macro_rules! impl_cartesian {
    ($rank:literal; $($p:ident: $n:tt),*) => {
        impl<$($p: Provider<1>),*> Provider<$rank> for Cartesian<($($p,)*)> {
            type T = ($($p::T,)*);

            fn shape(&self) -> Shape<$rank> { Shape::new([$((self.0).$n.size()),*]) }

            #[inline(always)]
            fn at(&self, index: Index<$rank>) -> Self::T {
                ($((self.0).$n.at(Index::new([index[$n]])),)*)
            }
        }
    };
}

impl_cartesian!(2; P0: 0, P1: 1);
impl_cartesian!(3; P0: 0, P1: 1, P2: 2);

// ----------------------------------------------------------------------------

/// A strided sub-region of `source`. See [`select()`](super::select).
#[derive(Debug, Copy, Clone)]
pub struct Select<P, const R: usize> {
    pub(crate) source: P,
    pub(crate) region: AccessPattern<R>,
}

impl<P: Provider<R>, const R: usize> Provider<R> for Select<P, R> {
    type T = P::T;

    fn shape(&self) -> Shape<R> { self.region.shape() }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> P::T { self.source.at(self.region.map_index(index)) }
}

impl<P: MemoryProvider<R>, const R: usize> MemoryProvider<R> for Select<P, R> {
    #[inline(always)]
    fn at_ref(&self, index: Index<R>) -> &P::T { self.source.at_ref(self.region.map_index(index)) }
}

// ----------------------------------------------------------------------------

/// `source` with the indices generated by `region` read from `replacement`
/// instead. See [`replace()`](super::replace).
#[derive(Debug, Copy, Clone)]
pub struct Replace<P, Q, const R: usize> {
    pub(crate) source: P,
    pub(crate) region: AccessPattern<R>,
    pub(crate) replacement: Q,
}

impl<P, Q, const R: usize> Replace<P, Q, R> {
    /// The index into `replacement` for `index`, if `region` covers it.
    /// A trailing index past the region's shape is left to `source`.
    #[inline(always)]
    fn replacement_index(&self, index: Index<R>) -> Option<Index<R>> {
        if !self.region.generates(index) { return None; }
        let inner = self.region.inverse_map_index(index);
        self.region.contains(inner).then_some(inner)
    }
}

impl<P: Provider<R>, Q: Provider<R, T = P::T>, const R: usize> Provider<R> for Replace<P, Q, R> {
    type T = P::T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.source.shape() }

    fn at(&self, index: Index<R>) -> P::T {
        match self.replacement_index(index) {
            Some(inner) => self.replacement.at(inner),
            None => self.source.at(index),
        }
    }
}

impl<P: MemoryProvider<R>, Q: MemoryProvider<R, T = P::T>, const R: usize> MemoryProvider<R> for Replace<P, Q, R> {
    fn at_ref(&self, index: Index<R>) -> &P::T {
        match self.replacement_index(index) {
            Some(inner) => self.replacement.at_ref(inner),
            None => self.source.at_ref(index),
        }
    }
}

// ----------------------------------------------------------------------------

/// `source` trimmed along one axis. See [`select_axis()`](super::select_axis).
#[derive(Debug, Copy, Clone)]
pub struct AxisSelect<P, const R: usize> {
    pub(crate) source: P,
    pub(crate) axis: usize,
    pub(crate) start: usize,
    pub(crate) shape: Shape<R>,
}

impl<P, const R: usize> AxisSelect<P, R> {
    #[inline(always)]
    fn source_index(&self, index: Index<R>) -> Index<R> {
        index.with(self.axis, index[self.axis] + self.start)
    }
}

impl<P: Provider<R>, const R: usize> Provider<R> for AxisSelect<P, R> {
    type T = P::T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.shape }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> P::T { self.source.at(self.source_index(index)) }
}

impl<P: MemoryProvider<R>, const R: usize> MemoryProvider<R> for AxisSelect<P, R> {
    #[inline(always)]
    fn at_ref(&self, index: Index<R>) -> &P::T { self.source.at_ref(self.source_index(index)) }
}

// ----------------------------------------------------------------------------

/// Element `i` is `source` element `i - delta` along one axis. See
/// [`shift_by()`](super::shift_by).
#[derive(Debug, Copy, Clone)]
pub struct Shift<P, const R: usize> {
    pub(crate) source: P,
    pub(crate) axis: usize,
    pub(crate) delta: isize,
    pub(crate) shape: Shape<R>,
}

impl<P, const R: usize> Shift<P, R> {
    #[inline(always)]
    fn source_index(&self, index: Index<R>) -> Index<R> {
        index.with(self.axis, index[self.axis].wrapping_add_signed(self.delta.wrapping_neg()))
    }
}

impl<P: Provider<R>, const R: usize> Provider<R> for Shift<P, R> {
    type T = P::T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.shape }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> P::T { self.source.at(self.source_index(index)) }
}

impl<P: MemoryProvider<R>, const R: usize> MemoryProvider<R> for Shift<P, R> {
    #[inline(always)]
    fn at_ref(&self, index: Index<R>) -> &P::T { self.source.at_ref(self.source_index(index)) }
}

// ----------------------------------------------------------------------------

/// The rank-`S` slice of a rank-`R` `source` at a fixed coordinate along one
/// axis. See [`freeze_axis()`](super::freeze_axis).
#[derive(Debug, Copy, Clone)]
pub struct Freeze<P, const R: usize, const S: usize> {
    pub(crate) source: P,
    pub(crate) axis: usize,
    pub(crate) index: usize,
}

impl<P, const R: usize, const S: usize> Freeze<P, R, S> {
    #[inline(always)]
    fn source_index(&self, index: Index<S>) -> Index<R> { index.insert(self.axis, self.index) }
}

impl<P: Provider<R>, const R: usize, const S: usize> Provider<S> for Freeze<P, R, S> {
    type T = P::T;

    fn shape(&self) -> Shape<S> { self.source.shape().remove(self.axis) }

    #[inline(always)]
    fn at(&self, index: Index<S>) -> P::T { self.source.at(self.source_index(index)) }
}

impl<P: MemoryProvider<R>, const R: usize, const S: usize> MemoryProvider<S> for Freeze<P, R, S> {
    #[inline(always)]
    fn at_ref(&self, index: Index<S>) -> &P::T { self.source.at_ref(self.source_index(index)) }
}

// ----------------------------------------------------------------------------

/// The rank-`S` result of reducing a rank-`R` `source` along one axis. See
/// [`collect()`](super::collect).
#[derive(Debug, Copy, Clone)]
pub struct Collect<P, O, const R: usize, const S: usize> {
    pub(crate) source: P,
    pub(crate) reduction: O,
    pub(crate) axis: usize,
}

impl<P: Provider<R>, O: Reduction<P::T>, const R: usize, const S: usize> Provider<S> for Collect<P, O, R, S> where
    O::Output: Clone,
{
    type T = O::Output;

    fn shape(&self) -> Shape<S> { self.source.shape().remove(self.axis) }

    fn at(&self, index: Index<S>) -> O::Output {
        let base: Index<R> = index.insert(self.axis, 0);
        let extent = self.source.shape()[self.axis];
        self.reduction.reduce((0..extent).map(|k| self.source.at(base.with(self.axis, k))))
    }
}

// ----------------------------------------------------------------------------

/// `first` followed by `second` along one axis. See
/// [`concat()`](super::concat).
#[derive(Debug, Copy, Clone)]
pub struct Concat<P, Q, const R: usize> {
    pub(crate) first: P,
    pub(crate) second: Q,
    pub(crate) axis: usize,
    pub(crate) split: usize,
}

impl<P: Provider<R>, Q: Provider<R, T = P::T>, const R: usize> Provider<R> for Concat<P, Q, R> {
    type T = P::T;

    fn shape(&self) -> Shape<R> {
        let shape = self.first.shape();
        shape.with(self.axis, self.split + self.second.shape()[self.axis])
    }

    fn at(&self, index: Index<R>) -> P::T {
        let coordinate = index[self.axis];
        if coordinate < self.split {
            self.first.at(index)
        } else {
            self.second.at(index.with(self.axis, coordinate - self.split))
        }
    }
}

impl<P: MemoryProvider<R>, Q: MemoryProvider<R, T = P::T>, const R: usize> MemoryProvider<R> for Concat<P, Q, R> {
    fn at_ref(&self, index: Index<R>) -> &P::T {
        let coordinate = index[self.axis];
        if coordinate < self.split {
            self.first.at_ref(index)
        } else {
            self.second.at_ref(index.with(self.axis, coordinate - self.split))
        }
    }
}

// ----------------------------------------------------------------------------

/// `source` with every access checked against its shape. See
/// [`bounds_check()`](super::bounds_check).
#[derive(Debug, Copy, Clone)]
pub struct BoundsChecked<P>(pub(crate) P);

impl<P> BoundsChecked<P> {
    /// Returns the element at `index`, or an error if `index` lies outside
    /// the shape.
    pub fn try_at<const R: usize>(&self, index: Index<R>) -> Result<P::T, Error> where P: Provider<R> {
        self.check(index)?;
        Ok(self.0.at(index))
    }

    fn check<const R: usize>(&self, index: Index<R>) -> Result<(), Error> where P: Provider<R> {
        let shape = self.0.shape();
        if shape.contains(index) { return Ok(()); }
        Err(Error::IndexOutOfBounds { index: index.to_vec(), shape: shape.to_vec() })
    }
}

impl<P: Provider<R>, const R: usize> Provider<R> for BoundsChecked<P> {
    type T = P::T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.0.shape() }

    /// # Panics
    ///
    /// Panics if `index` lies outside the shape.
    fn at(&self, index: Index<R>) -> P::T {
        if let Err(error) = self.check(index) { panic!("{}", error); }
        self.0.at(index)
    }
}

impl<P: MemoryProvider<R>, const R: usize> MemoryProvider<R> for BoundsChecked<P> {
    fn at_ref(&self, index: Index<R>) -> &P::T {
        if let Err(error) = self.check(index) { panic!("{}", error); }
        self.0.at_ref(index)
    }
}

// ----------------------------------------------------------------------------

/// Reads `source` at each of the indices held in `indexes`. See
/// [`read_indexes()`](super::read_indexes).
#[derive(Debug, Copy, Clone)]
pub struct Gather<P, Q, const R: usize> {
    pub(crate) source: P,
    pub(crate) indexes: Q,
}

impl<P: Provider<R>, Q: Provider<S, T = Index<R>>, const R: usize, const S: usize> Provider<S> for Gather<P, Q, R> {
    type T = P::T;

    #[inline(always)]
    fn shape(&self) -> Shape<S> { self.indexes.shape() }

    #[inline(always)]
    fn at(&self, index: Index<S>) -> P::T { self.source.at(self.indexes.at(index)) }
}

// ----------------------------------------------------------------------------

/// Splits a rank-1 `source` into `groups` contiguous sub-arrays. See
/// [`divvy()`](super::divvy).
#[derive(Debug, Copy, Clone)]
pub struct Divvy<P> {
    pub(crate) source: P,
    pub(crate) groups: usize,
}

impl<P: Provider<1> + Clone> Provider<1> for Divvy<P> {
    type T = Array<Select<P, 1>, 1>;

    fn shape(&self) -> Shape<1> { Shape::new([self.groups]) }

    fn at(&self, index: Index<1>) -> Self::T {
        let (extent, group) = (self.source.shape()[0], index[0]);
        let region = AccessPattern::new([(group + 1) * extent / self.groups])
            .with_start([group * extent / self.groups]);
        Array::new(Select { source: self.source.clone(), region })
    }
}

// ----------------------------------------------------------------------------
