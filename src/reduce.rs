//! Reductions of a sequence of elements to a single value.
//!
//! A [`Reduction`] is both an [`Operator`](super::Operator), which reduces a
//! whole array, and an argument to [`collect()`](super::collect), which
//! reduces along one axis.
//!
//! ```
//! use ndview::{make_array, collect, Sum, Index};
//! let a = make_array(|i: Index<2>| i[1], [3, 4]);
//! assert_eq!(a | Sum, 18);
//! let rows = (a | collect(Sum).along_axis(1)).unwrap();
//! assert_eq!(rows.values().collect::<Vec<_>>(), [6, 6, 6]);
//! ```

use super::{Array, Provider, Operator};

/// Combines an [`Iterator`] of `T`s into a single value.
pub trait Reduction<T> {
    type Output;

    fn reduce(&self, values: impl Iterator<Item = T>) -> Self::Output;
}

// ----------------------------------------------------------------------------

/// Implemented by types that [`Sum`] can add up. `bool` counts as 0 or 1.
pub trait Summand {
    /// The type of the running total.
    type Total: Default;

    fn add_to(self, total: Self::Total) -> Self::Total;
}

macro_rules! impl_summand {
    ($($t:ty),*) => { $(
        impl Summand for $t {
            type Total = $t;
            #[inline(always)]
            fn add_to(self, total: $t) -> $t { total + self }
        }
    )* };
}

impl_summand!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Summand for bool {
    type Total = usize;
    #[inline(always)]
    fn add_to(self, total: usize) -> usize { total + usize::from(self) }
}

/// The total of the elements. See [`Summand`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sum;

impl<T: Summand> Reduction<T> for Sum {
    type Output = T::Total;

    fn reduce(&self, values: impl Iterator<Item = T>) -> T::Total {
        values.fold(T::Total::default(), |total, value| value.add_to(total))
    }
}

// ----------------------------------------------------------------------------

/// `true` if every element is `true`, including when there are none.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct All;

impl<T: Into<bool>> Reduction<T> for All {
    type Output = bool;

    fn reduce(&self, mut values: impl Iterator<Item = T>) -> bool { values.all(|value| value.into()) }
}

/// `true` if any element is `true`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Any;

impl<T: Into<bool>> Reduction<T> for Any {
    type Output = bool;

    fn reduce(&self, mut values: impl Iterator<Item = T>) -> bool { values.any(|value| value.into()) }
}

// ----------------------------------------------------------------------------

/// The least element, or `None` if there are none. Of several equal least
/// elements, the first is returned.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Min;

impl<T: PartialOrd> Reduction<T> for Min {
    type Output = Option<T>;

    fn reduce(&self, values: impl Iterator<Item = T>) -> Option<T> {
        values.fold(None, |best, value| match best {
            Some(best) if best <= value => Some(best),
            _ => Some(value),
        })
    }
}

/// The greatest element, or `None` if there are none. Of several equal
/// greatest elements, the first is returned.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl<T: PartialOrd> Reduction<T> for Max {
    type Output = Option<T>;

    fn reduce(&self, values: impl Iterator<Item = T>) -> Option<T> {
        values.fold(None, |best, value| match best {
            Some(best) if best >= value => Some(best),
            _ => Some(value),
        })
    }
}

// ----------------------------------------------------------------------------

/// Accumulates the elements into `init` using `f`. See [`fold()`].
#[derive(Debug, Copy, Clone)]
pub struct Fold<A, F> {
    init: A,
    f: F,
}

/// A [`Reduction`] that starts from `init` and combines it with each element
/// in turn using `f`.
pub fn fold<A: Clone, F>(init: A, f: F) -> Fold<A, F> { Fold { init, f } }

impl<T, A: Clone, F: Fn(A, T) -> A> Reduction<T> for Fold<A, F> {
    type Output = A;

    fn reduce(&self, values: impl Iterator<Item = T>) -> A { values.fold(self.init.clone(), &self.f) }
}

// ----------------------------------------------------------------------------

/// Returns [`Sum`]. `array | sum()` adds up the elements.
pub fn sum() -> Sum { Sum }

/// Returns [`All`].
pub fn all() -> All { All }

/// Returns [`Any`].
pub fn any() -> Any { Any }

/// Returns [`Min`].
pub fn min() -> Min { Min }

/// Returns [`Max`].
pub fn max() -> Max { Max }

// ----------------------------------------------------------------------------

macro_rules! impl_operator_for_reduction {
    ($($name:ident),*) => { $(
        impl<P: Provider<R>, const R: usize> Operator<P, R> for $name where $name: Reduction<P::T> {
            type Output = <$name as Reduction<P::T>>::Output;
            fn apply(self, array: Array<P, R>) -> Self::Output { self.reduce(array.values()) }
        }
    )* };
}

impl_operator_for_reduction!(Sum, All, Any, Min, Max);

impl<P: Provider<R>, A: Clone, F: Fn(A, P::T) -> A, const R: usize> Operator<P, R> for Fold<A, F> {
    type Output = A;
    fn apply(self, array: Array<P, R>) -> A { self.reduce(array.values()) }
}

// ----------------------------------------------------------------------------
