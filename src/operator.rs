//! Operators: transformations applied to an [`Array`] with `|`.
//!
//! Each operator is built by a factory function such as [`select_from()`]
//! or [`shift_by()`], optionally refined with builder methods, and then
//! applied to an array with `array | operator`. Most operators are lazy: they
//! return a new `Array` wrapping one of the providers in [`view`](super::view)
//! and compute nothing until its elements are read. Only [`to_unique()`],
//! [`to_shared()`] and the reductions visit every element.
//!
//! Operators whose parameters might not fit the array (an axis beyond the
//! rank, a region outside the shape) return a `Result`.
//!
//! ```
//! use ndview::{index_array, select_axis, shift_by, Index};
//! let a = index_array([10, 10]);
//! let b = (a | select_axis(0).from(2).to(2).from_the_end()).unwrap();
//! assert_eq!(b.shape().into_array(), [6, 10]);
//! assert_eq!(b.at([0, 0]), Index::new([2, 0]));
//! let c = (a | shift_by(-2).along_axis(1)).unwrap();
//! assert_eq!(c.at([0, 0]), Index::new([0, 2]));
//! ```

use super::{
    Array, Provider, Shape, Index, Jumps, AccessPattern, Error,
    Unique, Shared, Uniform, evaluate_as_unique, evaluate_as_shared,
};
use super::ops::{Spread};
use super::reduce::{Reduction};
use super::view::{
    Map, Apply, Select, Replace, AxisSelect, Shift, Freeze, Collect, Concat,
    BoundsChecked, Gather, Divvy,
};

/// A transformation of a rank-`R` [`Array`] with provider `P`.
///
/// `array | operator` is shorthand for `operator.apply(array)`. The output
/// need not be an `Array`: reductions such as [`Sum`](super::Sum) produce a
/// single value.
///
/// ```
/// use ndview::{Array, Operator, Provider, make_array, Index};
/// /// Counts the elements.
/// struct Count;
/// impl<P: Provider<R>, const R: usize> Operator<P, R> for Count {
///     type Output = usize;
///     fn apply(self, array: Array<P, R>) -> usize { array.size() }
/// }
/// assert_eq!(make_array(|_: Index<2>| (), [3, 4]) | Count, 12);
/// ```
pub trait Operator<P, const R: usize> {
    type Output;

    fn apply(self, array: Array<P, R>) -> Self::Output;
}

// ----------------------------------------------------------------------------

/// See [`map()`].
#[derive(Debug, Copy, Clone)]
pub struct Mapper<F>(F);

/// Returns an operator that applies `f` to every element.
pub fn map<F>(f: F) -> Mapper<F> { Mapper(f) }

impl<P: Provider<R>, U: Clone, F: Fn(P::T) -> U, const R: usize> Operator<P, R> for Mapper<F> {
    type Output = Array<Map<P, F>, R>;
    fn apply(self, array: Array<P, R>) -> Self::Output { Array::new(Map(array.into_provider(), self.0)) }
}

/// See [`apply()`].
#[derive(Debug, Copy, Clone)]
pub struct Applier<F>(F);

/// Returns an operator that calls `f` with the components of each tuple
/// element as separate arguments.
///
/// ```
/// use ndview::{apply, zip_arrays, index_array, uniform, Index};
/// let a = index_array([3]) | ndview::map(|i: Index<1>| i[0]);
/// let b = uniform(10usize, [3]);
/// let c = zip_arrays((a, b)).unwrap() | apply(|x: usize, y: usize| x * y);
/// assert_eq!(c.values().collect::<Vec<_>>(), [0, 10, 20]);
/// ```
pub fn apply<F>(f: F) -> Applier<F> { Applier(f) }

impl<P: Provider<R>, F: Spread<P::T>, const R: usize> Operator<P, R> for Applier<F> where
    F::Output: Clone,
{
    type Output = Array<Apply<P, F>, R>;
    fn apply(self, array: Array<P, R>) -> Self::Output { Array::new(Apply(array.into_provider(), self.0)) }
}

// ----------------------------------------------------------------------------

/// See [`select()`] and [`select_from()`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Selector<const R: usize> {
    region: AccessPattern<R>,
}

/// Returns an operator that selects the strided sub-region `region`, which
/// must lie within the array.
pub fn select<const R: usize>(region: AccessPattern<R>) -> Selector<R> { Selector { region } }

/// Returns an operator that selects the region starting at `start`. Use
/// [`Selector::to()`] to set the end.
pub fn select_from<const R: usize>(start: impl Into<Index<R>>) -> Selector<R> {
    let start = start.into();
    Selector { region: AccessPattern::new(start).with_start(start) }
}

impl<const R: usize> Selector<R> {
    /// Sets the exclusive end of the region.
    pub fn to(self, end: impl Into<Index<R>>) -> Self { Self { region: self.region.with_end(end) } }

    /// Sets the step along each axis.
    pub fn jumping(self, jumps: impl Into<Jumps<R>>) -> Self { Self { region: self.region.with_jumps(jumps) } }

    pub fn region(&self) -> AccessPattern<R> { self.region }
}

impl<P: Provider<R>, const R: usize> Operator<P, R> for Selector<R> {
    type Output = Result<Array<Select<P, R>, R>, Error>;

    fn apply(self, array: Array<P, R>) -> Self::Output {
        check_within(self.region, array.shape())?;
        Ok(Array::new(Select { source: array.into_provider(), region: self.region }))
    }
}

fn check_within<const R: usize>(region: AccessPattern<R>, shape: Shape<R>) -> Result<(), Error> {
    if region.within(shape) { return Ok(()); }
    Err(Error::OutOfBoundsSelection { region: region.to_string(), shape: shape.to_vec() })
}

// ----------------------------------------------------------------------------

/// See [`replace_from()`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReplaceRegion<const R: usize> {
    region: AccessPattern<R>,
}

/// Returns a builder for a [`Replacer`] whose region starts at `start`.
///
/// ```
/// use ndview::{zeros, ones, replace_from, Sum};
/// let a = zeros::<u32, 2>([4, 4]);
/// let b = (a | replace_from([0, 0]).to([4, 4]).jumping([2, 2]).with(ones([2, 2]))).unwrap();
/// assert_eq!(b | Sum, 4);
/// ```
pub fn replace_from<const R: usize>(start: impl Into<Index<R>>) -> ReplaceRegion<R> {
    let start = start.into();
    ReplaceRegion { region: AccessPattern::new(start).with_start(start) }
}

impl<const R: usize> ReplaceRegion<R> {
    pub fn to(self, end: impl Into<Index<R>>) -> Self { Self { region: self.region.with_end(end) } }

    pub fn jumping(self, jumps: impl Into<Jumps<R>>) -> Self { Self { region: self.region.with_jumps(jumps) } }

    /// Supplies the elements to write into the region.
    pub fn with<Q>(self, replacement: Array<Q, R>) -> Replacer<Q, R> {
        Replacer { region: self.region, replacement }
    }
}

/// See [`replace()`].
#[derive(Debug, Copy, Clone)]
pub struct Replacer<Q, const R: usize> {
    region: AccessPattern<R>,
    replacement: Array<Q, R>,
}

/// Returns an operator that reads the indices generated by `region` from
/// `replacement` and every other index from the array. `region` must lie
/// within the array and have the same shape as `replacement`.
pub fn replace<Q, const R: usize>(region: AccessPattern<R>, replacement: Array<Q, R>) -> Replacer<Q, R> {
    Replacer { region, replacement }
}

impl<P: Provider<R>, Q: Provider<R, T = P::T>, const R: usize> Operator<P, R> for Replacer<Q, R> {
    type Output = Result<Array<Replace<P, Q, R>, R>, Error>;

    fn apply(self, array: Array<P, R>) -> Self::Output {
        check_within(self.region, array.shape())?;
        let (region_shape, replacement_shape) = (self.region.shape(), self.replacement.shape());
        if region_shape != replacement_shape {
            return Err(Error::ShapeMismatch {
                operation: "replace",
                left: region_shape.to_vec(),
                right: replacement_shape.to_vec(),
            });
        }
        Ok(Array::new(Replace {
            source: array.into_provider(),
            region: self.region,
            replacement: self.replacement.into_provider(),
        }))
    }
}

// ----------------------------------------------------------------------------

/// See [`select_axis()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AxisSelector {
    axis: usize,
    start: usize,
    end: usize,
    from_the_end: bool,
}

/// Returns an operator that trims `axis` to a contiguous range. By default
/// the range is the whole axis; refine it with [`AxisSelector::from()`],
/// [`AxisSelector::to()`] and [`AxisSelector::from_the_end()`].
pub fn select_axis(axis: usize) -> AxisSelector {
    AxisSelector { axis, start: 0, end: 0, from_the_end: true }
}

impl AxisSelector {
    /// The first coordinate to keep.
    pub fn from(self, start: usize) -> Self { Self { start, ..self } }

    /// The coordinate to stop before.
    pub fn to(self, end: usize) -> Self { Self { end, from_the_end: false, ..self } }

    /// Counts the [`AxisSelector::to()`] coordinate backwards from the end
    /// of the axis, so `to(2).from_the_end()` drops the last two elements.
    pub fn from_the_end(self) -> Self { Self { from_the_end: true, ..self } }
}

impl<P: Provider<R>, const R: usize> Operator<P, R> for AxisSelector {
    type Output = Result<Array<AxisSelect<P, R>, R>, Error>;

    fn apply(self, array: Array<P, R>) -> Self::Output {
        let AxisSelector { axis, start, end, from_the_end } = self;
        Error::axis("select_axis", axis, R)?;
        let shape = array.shape();
        let extent = shape[axis];
        let stop = if from_the_end { extent.checked_sub(end) } else { Some(end) };
        match stop {
            Some(stop) if start <= stop && stop <= extent => Ok(Array::new(AxisSelect {
                source: array.into_provider(),
                axis,
                start,
                shape: shape.with(axis, stop - start),
            })),
            _ => Err(Error::OutOfBoundsSelection {
                region: format!(
                    "axis {} from {} to {}{}",
                    axis, start, end, if from_the_end { " from the end" } else { "" },
                ),
                shape: shape.to_vec(),
            }),
        }
    }
}

// ----------------------------------------------------------------------------

/// See [`shift_by()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AxisShifter {
    axis: usize,
    delta: isize,
}

/// Returns an operator whose element `i` along the chosen axis (axis 0 by
/// default) is the array's element `i - delta`. The axis shrinks by
/// `|delta|`, which must be less than its extent.
///
/// With a negative `delta` every element of the result has a source. With a
/// positive `delta` the first `delta` coordinates along the axis precede the
/// array, and reading them is an out-of-bounds access.
pub fn shift_by(delta: isize) -> AxisShifter { AxisShifter { axis: 0, delta } }

impl AxisShifter {
    pub fn along_axis(self, axis: usize) -> Self { Self { axis, ..self } }
}

impl<P: Provider<R>, const R: usize> Operator<P, R> for AxisShifter {
    type Output = Result<Array<Shift<P, R>, R>, Error>;

    fn apply(self, array: Array<P, R>) -> Self::Output {
        let AxisShifter { axis, delta } = self;
        Error::axis("shift", axis, R)?;
        let shape = array.shape();
        let extent = shape[axis];
        if delta.unsigned_abs() >= extent {
            return Err(Error::ShiftOutOfRange { delta, axis, extent });
        }
        Ok(Array::new(Shift {
            source: array.into_provider(),
            axis,
            delta,
            shape: shape.with(axis, extent - delta.unsigned_abs()),
        }))
    }
}

// ----------------------------------------------------------------------------

/// See [`freeze_axis()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AxisFreezer {
    axis: usize,
    index: usize,
}

/// Returns an operator that removes `axis`, keeping the slice at coordinate
/// 0 or at the coordinate given to [`AxisFreezer::at_index()`].
pub fn freeze_axis(axis: usize) -> AxisFreezer { AxisFreezer { axis, index: 0 } }

impl AxisFreezer {
    pub fn at_index(self, index: usize) -> Self { Self { index, ..self } }

    fn freeze<P: Provider<R>, const R: usize, const S: usize>(
        self,
        array: Array<P, R>,
    ) -> Result<Array<Freeze<P, R, S>, S>, Error> {
        let AxisFreezer { axis, index } = self;
        Error::axis("freeze_axis", axis, R)?;
        let shape = array.shape();
        if index >= shape[axis] {
            return Err(Error::OutOfBoundsSelection {
                region: format!("axis {} at {}", axis, index),
                shape: shape.to_vec(),
            });
        }
        Ok(Array::new(Freeze { source: array.into_provider(), axis, index }))
    }
}

/// See [`collect()`].
#[derive(Debug, Copy, Clone)]
pub struct AxisReducer<O> {
    reduction: O,
    axis: usize,
}

/// Returns an operator that removes an axis (axis 0 unless
/// [`AxisReducer::along_axis()`] says otherwise) by applying `reduction` to
/// each line of elements along it.
pub fn collect<O>(reduction: O) -> AxisReducer<O> { AxisReducer { reduction, axis: 0 } }

impl<O> AxisReducer<O> {
    pub fn along_axis(self, axis: usize) -> Self { Self { axis, ..self } }

    fn reduce<P: Provider<R>, const R: usize, const S: usize>(
        self,
        array: Array<P, R>,
    ) -> Result<Array<Collect<P, O, R, S>, S>, Error> {
        Error::axis("collect", self.axis, R)?;
        Ok(Array::new(Collect { source: array.into_provider(), reduction: self.reduction, axis: self.axis }))
    }
}

macro_rules! impl_rank_dropping_operators {
    ($($rank:literal => $lower:literal),*) => { $(
        impl<P: Provider<$rank>> Operator<P, $rank> for AxisFreezer {
            type Output = Result<Array<Freeze<P, $rank, $lower>, $lower>, Error>;
            fn apply(self, array: Array<P, $rank>) -> Self::Output { self.freeze(array) }
        }

        impl<P: Provider<$rank>, O: Reduction<P::T>> Operator<P, $rank> for AxisReducer<O> where
            O::Output: Clone,
        {
            type Output = Result<Array<Collect<P, O, $rank, $lower>, $lower>, Error>;
            fn apply(self, array: Array<P, $rank>) -> Self::Output { self.reduce(array) }
        }
    )* };
}

impl_rank_dropping_operators!(1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

// ----------------------------------------------------------------------------

/// See [`concat()`].
#[derive(Debug, Copy, Clone)]
pub struct Concatenator<Q, const R: usize> {
    other: Array<Q, R>,
    axis: usize,
}

/// Returns an operator that appends `other` to the array along an axis (axis
/// 0 unless [`Concatenator::on_axis()`] says otherwise). The shapes must
/// agree on every other axis.
pub fn concat<Q, const R: usize>(other: Array<Q, R>) -> Concatenator<Q, R> {
    Concatenator { other, axis: 0 }
}

impl<Q, const R: usize> Concatenator<Q, R> {
    pub fn on_axis(self, axis: usize) -> Self { Self { axis, ..self } }
}

impl<P: Provider<R>, Q: Provider<R, T = P::T>, const R: usize> Operator<P, R> for Concatenator<Q, R> {
    type Output = Result<Array<Concat<P, Q, R>, R>, Error>;

    fn apply(self, array: Array<P, R>) -> Self::Output {
        let axis = self.axis;
        Error::axis("concat", axis, R)?;
        let (first, second) = (array.shape(), self.other.shape());
        if first.with(axis, 0) != second.with(axis, 0) {
            return Err(Error::ShapeMismatch { operation: "concat", left: first.to_vec(), right: second.to_vec() });
        }
        Ok(Array::new(Concat {
            first: array.into_provider(),
            second: self.other.into_provider(),
            axis,
            split: first[axis],
        }))
    }
}

// ----------------------------------------------------------------------------

/// See [`to_unique()`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ToUnique;

/// Returns an operator that computes every element into a new, mutable,
/// [`Unique`] array.
pub fn to_unique() -> ToUnique { ToUnique }

impl<P: Provider<R>, const R: usize> Operator<P, R> for ToUnique {
    type Output = Array<Unique<P::T, R>, R>;
    fn apply(self, array: Array<P, R>) -> Self::Output { Array::new(evaluate_as_unique(array.provider())) }
}

/// See [`to_shared()`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ToShared;

/// Returns an operator that computes every element into a new, immutable,
/// [`Shared`] array.
pub fn to_shared() -> ToShared { ToShared }

impl<P: Provider<R>, const R: usize> Operator<P, R> for ToShared {
    type Output = Array<Shared<P::T, R>, R>;
    fn apply(self, array: Array<P, R>) -> Self::Output { Array::new(evaluate_as_shared(array.provider())) }
}

/// See [`bounds_check()`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BoundsCheck;

/// Returns an operator that checks every access against the shape.
/// Without it, out-of-bounds accesses are not detected.
pub fn bounds_check() -> BoundsCheck { BoundsCheck }

impl<P: Provider<R>, const R: usize> Operator<P, R> for BoundsCheck {
    type Output = Array<BoundsChecked<P>, R>;
    fn apply(self, array: Array<P, R>) -> Self::Output { Array::new(BoundsChecked(array.into_provider())) }
}

// ----------------------------------------------------------------------------

/// See [`reshape()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reshaper<const S: usize> {
    shape: Shape<S>,
}

/// Returns an operator that reinterprets a [`Unique`], [`Shared`] or
/// [`Uniform`] array as one of shape `shape`, which must have the same
/// volume. A reshaped `Shared` array shares its buffer with the original.
pub fn reshape<const S: usize>(shape: impl Into<Shape<S>>) -> Reshaper<S> { Reshaper { shape: shape.into() } }

impl<T: Clone, const R: usize, const S: usize> Operator<Unique<T, R>, R> for Reshaper<S> {
    type Output = Result<Array<Unique<T, S>, S>, Error>;
    fn apply(self, array: Array<Unique<T, R>, R>) -> Self::Output {
        array.into_provider().reshape(self.shape).map(Array::new)
    }
}

impl<T: Clone, const R: usize, const S: usize> Operator<Shared<T, R>, R> for Reshaper<S> {
    type Output = Result<Array<Shared<T, S>, S>, Error>;
    fn apply(self, array: Array<Shared<T, R>, R>) -> Self::Output {
        array.provider().reshape(self.shape).map(Array::new)
    }
}

impl<T: Clone, const R: usize, const S: usize> Operator<Uniform<T, R>, R> for Reshaper<S> {
    type Output = Result<Array<Uniform<T, S>, S>, Error>;
    fn apply(self, array: Array<Uniform<T, R>, R>) -> Self::Output {
        let (volume, size) = (self.shape.volume(), array.size());
        if volume != size {
            return Err(Error::VolumeMismatch { shape: self.shape.to_vec(), volume, size });
        }
        Ok(Array::new(array.into_provider().reshape(self.shape)))
    }
}

// ----------------------------------------------------------------------------

/// See [`read_index()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexReader<const R: usize> {
    index: Index<R>,
}

/// Returns an operator that reads the single element at `index`.
pub fn read_index<const R: usize>(index: impl Into<Index<R>>) -> IndexReader<R> {
    IndexReader { index: index.into() }
}

impl<P: Provider<R>, const R: usize> Operator<P, R> for IndexReader<R> {
    type Output = P::T;
    fn apply(self, array: Array<P, R>) -> P::T { array.at(self.index) }
}

/// See [`read_indexes()`].
#[derive(Debug, Copy, Clone)]
pub struct IndexesReader<Q, const S: usize> {
    indexes: Array<Q, S>,
}

/// Returns an operator that reads the array at each of `indexes`. The result
/// has the shape of `indexes`.
pub fn read_indexes<Q, const S: usize>(indexes: Array<Q, S>) -> IndexesReader<Q, S> { IndexesReader { indexes } }

impl<P: Provider<R>, Q: Provider<S, T = Index<R>>, const R: usize, const S: usize> Operator<P, R> for IndexesReader<Q, S> {
    type Output = Array<Gather<P, Q, R>, S>;
    fn apply(self, array: Array<P, R>) -> Self::Output {
        Array::new(Gather { source: array.into_provider(), indexes: self.indexes.into_provider() })
    }
}

// ----------------------------------------------------------------------------

/// See [`divvy()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Divvier {
    groups: usize,
}

/// Returns an operator that splits a rank-1 array into `groups` contiguous
/// sub-arrays of nearly equal size. Group `g` covers `[g * n / groups, (g +
/// 1) * n / groups)`.
pub fn divvy(groups: usize) -> Divvier { Divvier { groups } }

impl<P: Provider<1> + Clone> Operator<P, 1> for Divvier {
    type Output = Array<Divvy<P>, 1>;
    fn apply(self, array: Array<P, 1>) -> Self::Output {
        Array::new(Divvy { source: array.into_provider(), groups: self.groups })
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{index_array, ones, zeros, Sum, All};

    #[test]
    fn select() {
        let a = index_array([10, 10]);
        let b = (a | select_from([2, 4]).to([8, 10]).jumping([3, 2])).unwrap();
        assert_eq!(b.shape(), Shape::new([2, 3]));
        assert_eq!(b.at([1, 2]), Index::new([5, 8]));
        assert!(matches!(
            a | select_from([0, 0]).to([11, 10]),
            Err(Error::OutOfBoundsSelection { .. }),
        ));
        assert_eq!((a | super::select(AccessPattern::new([0, 0]))).unwrap().size(), 0);
    }

    #[test]
    fn replace() {
        let a = zeros::<i32, 2>([10, 10]);
        let b = (a | replace_from([0, 0]).to([10, 5]).with(ones([10, 5]))).unwrap();
        assert_eq!(b.at([9, 4]), 1);
        assert_eq!(b.at([9, 5]), 0);
        assert_eq!((b | Sum), 50);
        let wrong = a | replace_from([0, 0]).to([10, 5]).with(ones([5, 10]));
        assert!(matches!(wrong, Err(Error::ShapeMismatch { operation: "replace", .. })));
    }

    #[test]
    fn select_axis() {
        let a = index_array([10, 10]);
        let b = (a | super::select_axis(1).from(3)).unwrap();
        assert_eq!(b.shape(), Shape::new([10, 7]));
        assert_eq!(b.at([0, 0]), Index::new([0, 3]));
        let c = (a | super::select_axis(0).from(2).to(5)).unwrap();
        assert_eq!(c.shape(), Shape::new([3, 10]));
        assert!(matches!(a | super::select_axis(2), Err(Error::AxisOutOfRange { .. })));
        assert!(matches!(a | super::select_axis(0).from(6).to(5), Err(Error::OutOfBoundsSelection { .. })));
        assert!(matches!(a | super::select_axis(0).to(11).from_the_end(), Err(Error::OutOfBoundsSelection { .. })));
    }

    #[test]
    fn shift() {
        let a = index_array([10, 10]);
        assert_eq!((a | shift_by(2).along_axis(1)).unwrap().shape(), Shape::new([10, 8]));
        assert_eq!((a | shift_by(2).along_axis(0)).unwrap().at([2, 0]), Index::new([0, 0]));
        assert_eq!(
            (a | shift_by(-10)).err(),
            Some(Error::ShiftOutOfRange { delta: -10, axis: 0, extent: 10 }),
        );
    }

    #[test]
    fn freeze() {
        let a = index_array([4, 5, 6]);
        let b = (a | freeze_axis(1).at_index(3)).unwrap();
        assert_eq!(b.shape(), Shape::new([4, 6]));
        assert_eq!(b.at([2, 5]), Index::new([2, 3, 5]));
        assert!(matches!(a | freeze_axis(1).at_index(5), Err(Error::OutOfBoundsSelection { .. })));
        assert!(matches!(a | freeze_axis(3), Err(Error::AxisOutOfRange { .. })));
    }

    #[test]
    fn collect() {
        let a = ones::<usize, 3>([10, 20, 30]);
        for (axis, extent) in [(0, 10), (1, 20), (2, 30)] {
            let b = (a | super::collect(Sum).along_axis(axis)).unwrap();
            assert_eq!(b.at([0, 0]), extent);
        }
        let flags = ones::<u8, 2>([2, 3]) | map(|x: u8| x == 1);
        assert_eq!((flags | super::collect(All).along_axis(1)).unwrap().at([1]), true);
    }

    #[test]
    fn concat() {
        let a = ones::<i32, 3>([10, 10, 20]);
        let b = zeros::<i32, 3>([10, 10, 30]);
        let c = (a | super::concat(b).on_axis(2)).unwrap();
        assert_eq!(c.shape(), Shape::new([10, 10, 50]));
        assert_eq!(c.at([0, 0, 19]), 1);
        assert_eq!(c.at([0, 0, 20]), 0);
        assert!(matches!(a | super::concat(b).on_axis(1), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn reshape() {
        let a = index_array([10, 10]) | map(|i: Index<2>| i[0] * 10 + i[1]) | to_unique();
        let b = (a | super::reshape([5, 5, 4])).unwrap();
        assert_eq!(b.at([1, 0, 0]), 20);
        let c = b | to_shared();
        assert!((c.clone() | super::reshape([10, 10, 10])).is_err());
        let d = (c.clone() | super::reshape([100])).unwrap();
        assert!(d.is_aliased_with(&c));
        let u = (ones::<u8, 2>([2, 6]) | super::reshape([3, 4])).unwrap();
        assert_eq!(u.shape(), Shape::new([3, 4]));
    }

    #[test]
    fn read() {
        let a = index_array([3, 3]) | map(|i: Index<2>| i[0] * 3 + i[1]);
        assert_eq!(a | read_index([2, 1]), 7);
        let picks = crate::array_from([Index::new([0, 0]), Index::new([2, 2])]);
        let b = a | read_indexes(picks);
        assert_eq!(b.values().collect::<Vec<_>>(), [0, 8]);
    }

    #[test]
    fn divvy() {
        let a = index_array([7]) | map(|i: Index<1>| i[0]);
        let groups = a | super::divvy(2);
        assert_eq!(groups.size(), 2);
        assert_eq!(groups.at([0]).values().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(groups.at([1]).values().collect::<Vec<_>>(), [3, 4, 5, 6]);
    }
}
