//! Functions that construct [`Array`]s.

use std::sync::{Arc};

use super::{
    Array, Provider, Basic, Uniform, Unique, Shared, Buffer, Shape, Index, Error,
};
use super::ops::{Operand};

/// An array whose element at `index` is `mapping(index)`, computed on
/// demand.
///
/// ```
/// use ndview::{make_array, Index};
/// let a = make_array(|i: Index<2>| i[0] * i[1], [3, 3]);
/// assert_eq!(a.at([2, 2]), 4);
/// ```
pub fn make_array<F: Fn(Index<R>) -> T, T: Clone, const R: usize>(
    mapping: F,
    shape: impl Into<Shape<R>>,
) -> Array<Basic<F, R>, R> {
    Array::new(Basic::new(mapping, shape))
}

/// Wraps `provider` in an [`Array`].
pub fn from_provider<P: Provider<R>, const R: usize>(provider: P) -> Array<P, R> { Array::new(provider) }

/// A rank-1 [`Shared`] array holding `items` in order.
///
/// ```
/// use ndview::array_from;
/// let a = array_from(vec!['a', 'b', 'c']);
/// assert_eq!(a.shape().into_array(), [3]);
/// assert_eq!(a[[1]], 'b');
/// ```
pub fn array_from<T: Clone>(items: impl IntoIterator<Item = T>) -> Array<Shared<T, 1>, 1> {
    let buffer: Buffer<T> = items.into_iter().collect();
    Array::new(Unique::from(buffer).into_shared())
}

/// A mutable array of shape `shape` whose elements are initially `value`.
pub fn unique_array<T: Clone, const R: usize>(shape: impl Into<Shape<R>>, value: T) -> Array<Unique<T, R>, R> {
    Array::new(Unique::filled(shape, value))
}

/// An immutable array of shape `shape` whose elements are all `value`,
/// stored in memory.
pub fn shared_array<T: Clone, const R: usize>(shape: impl Into<Shape<R>>, value: T) -> Array<Shared<T, R>, R> {
    Array::new(Shared::filled(shape, value))
}

/// Wraps `buffer`, which holds the elements in row-major order, in a
/// [`Shared`] array of shape `shape`. Fails if the lengths disagree.
pub fn shared_array_from<T: Clone, const R: usize>(
    shape: impl Into<Shape<R>>,
    buffer: impl Into<Arc<Buffer<T>>>,
) -> Result<Array<Shared<T, R>, R>, Error> {
    Shared::new(shape, buffer.into()).map(Array::new)
}

/// An array whose element at each index is that index.
pub fn index_array<const R: usize>(shape: impl Into<Shape<R>>) -> Array<Basic<fn(Index<R>) -> Index<R>, R>, R> {
    make_array(std::convert::identity as fn(Index<R>) -> Index<R>, shape)
}

// ----------------------------------------------------------------------------

/// An array of shape `shape` whose elements are all `value`. Only one copy
/// of `value` is stored.
pub fn uniform<T: Clone, const R: usize>(value: T, shape: impl Into<Shape<R>>) -> Array<Uniform<T, R>, R> {
    Array::new(Uniform::new(value, shape))
}

/// A [`uniform()`] array of zeros.
pub fn zeros<T: From<u8> + Clone, const R: usize>(shape: impl Into<Shape<R>>) -> Array<Uniform<T, R>, R> {
    uniform(T::from(0), shape)
}

/// A [`uniform()`] array of ones.
pub fn ones<T: From<u8> + Clone, const R: usize>(shape: impl Into<Shape<R>>) -> Array<Uniform<T, R>, R> {
    uniform(T::from(1), shape)
}

/// Promotes `operand` to an array of shape `shape`. A
/// [`Scalar`](super::Scalar) becomes a uniform array; an `Array` is returned
/// unchanged, provided it has the right shape.
///
/// ```
/// use ndview::{promote, index_array};
/// assert_eq!(promote(2.5, [2, 2]).unwrap().at([1, 1]), 2.5);
/// assert!(promote(index_array([3]), [4]).is_err());
/// ```
pub fn promote<O: Operand<R>, const R: usize>(
    operand: O,
    shape: impl Into<Shape<R>>,
) -> Result<Array<O::Provider, R>, Error> {
    operand.into_operand(shape.into(), "promote").map(Array::new)
}

// ----------------------------------------------------------------------------

/// The rank-1 array `[0, 1, ..., count - 1]`.
pub fn arange(count: usize) -> Array<Basic<fn(Index<1>) -> usize, 1>, 1> {
    fn coordinate(index: Index<1>) -> usize { index[0] }
    make_array(coordinate as fn(Index<1>) -> usize, [count])
}

/// The rank-1 array `[start, start + step, ...]` of the values before `end`.
///
/// Fails if `step` is zero or points away from `end`.
///
/// ```
/// use ndview::arange_by;
/// let a = arange_by(10, 0, -3).unwrap();
/// assert_eq!(a.values().collect::<Vec<_>>(), [10, 7, 4, 1]);
/// assert!(arange_by(0, 10, -1).is_err());
/// ```
pub fn arange_by(
    start: i64,
    end: i64,
    step: i64,
) -> Result<Array<Basic<impl Fn(Index<1>) -> i64 + Copy, 1>, 1>, Error> {
    let invalid = || Error::InvalidRange { start: start.to_string(), end: end.to_string(), step: step.to_string() };
    if step == 0 { return Err(invalid()); }
    let (wide_start, wide_step) = (i128::from(start), i128::from(step));
    let count = (i128::from(end) - wide_start + wide_step - wide_step.signum()) / wide_step;
    let count = usize::try_from(count).map_err(|_| invalid())?;
    // Every element lies in `[start, end)`, so the narrowing cannot truncate.
    Ok(make_array(move |index: Index<1>| (wide_start + wide_step * index[0] as i128) as i64, [count]))
}

/// `count` equally spaced values from `x0` to `x1` inclusive. If `count` is
/// 1 the only value is `x0`.
///
/// ```
/// use ndview::linspace;
/// let a = linspace(0.0, 1.0, 5);
/// assert_eq!(a.values().collect::<Vec<_>>(), [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(x0: f64, x1: f64, count: usize) -> Array<Basic<impl Fn(Index<1>) -> f64 + Copy, 1>, 1> {
    let intervals = count.saturating_sub(1).max(1) as f64;
    make_array(move |index: Index<1>| x0 + (x1 - x0) * index[0] as f64 / intervals, [count])
}

// ----------------------------------------------------------------------------

/// The indices at which `array` is `true`, in row-major order.
///
/// ```
/// use ndview::{indexes_where, arange, Index};
/// let small = arange(10).lt(5usize).unwrap();
/// let found = indexes_where(small);
/// assert_eq!(found.size(), 5);
/// assert_eq!(found.at([4]), Index::new([4]));
/// ```
pub fn indexes_where<P: Provider<R>, const R: usize>(array: Array<P, R>) -> Array<Shared<Index<R>, 1>, 1> where
    P::T: Into<bool>,
{
    let count = array.values().filter(|value| value.clone().into()).count();
    tracing::debug!(count, shape = %array.shape(), "collecting indexes where the array is true");
    let mut buffer = Buffer::new(count, Index::zero());
    let found = array.indexes().into_iter().filter(|&index| array.at(index).into());
    for (slot, index) in buffer.iter_mut().zip(found) {
        *slot = index;
    }
    Array::new(Unique::from(buffer).into_shared())
}

// ----------------------------------------------------------------------------
