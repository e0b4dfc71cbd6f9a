//! Functions that combine several [`Array`]s into one, or split one into
//! several.

use super::{Array, Provider, Error};
use super::view::{Map, Zip, ZipWith, Cartesian};

/// Combines corresponding elements of `a` and `b` using `f`. Fails if the
/// shapes differ.
pub fn binary_op<P: Provider<R>, Q: Provider<R>, U: Clone, F: Fn(P::T, Q::T) -> U, const R: usize>(
    a: Array<P, R>,
    b: Array<Q, R>,
    f: F,
) -> Result<Array<ZipWith<P, Q, F>, R>, Error> {
    a.zip_with(b, f)
}

// ----------------------------------------------------------------------------

/// Implemented by tuples of same-rank [`Array`]s. See [`zip_arrays()`].
pub trait ZipArrays<const R: usize> {
    type Output;

    fn zip_arrays(self) -> Result<Self::Output, Error>;
}

fn check_same_shape<P: Provider<R>, Q: Provider<R>, const R: usize>(
    first: &Array<P, R>,
    other: &Array<Q, R>,
) -> Result<(), Error> {
    let (left, right) = (first.shape(), other.shape());
    if left == right { return Ok(()); }
    Err(Error::ShapeMismatch { operation: "zip", left: left.to_vec(), right: right.to_vec() })
}

impl<P0: Provider<R>, P1: Provider<R>, const R: usize> ZipArrays<R> for (Array<P0, R>, Array<P1, R>) {
    type Output = Array<Zip<(P0, P1)>, R>;

    fn zip_arrays(self) -> Result<Self::Output, Error> {
        check_same_shape(&self.0, &self.1)?;
        Ok(Array::new(Zip((self.0.into_provider(), self.1.into_provider()))))
    }
}

impl<P0: Provider<R>, P1: Provider<R>, P2: Provider<R>, const R: usize> ZipArrays<R> for (Array<P0, R>, Array<P1, R>, Array<P2, R>) {
    type Output = Array<Zip<(P0, P1, P2)>, R>;

    fn zip_arrays(self) -> Result<Self::Output, Error> {
        check_same_shape(&self.0, &self.1)?;
        check_same_shape(&self.0, &self.2)?;
        Ok(Array::new(Zip((self.0.into_provider(), self.1.into_provider(), self.2.into_provider()))))
    }
}

/// Combines a tuple of two or three same-shaped arrays into an array of
/// tuples.
///
/// ```
/// use ndview::{zip_arrays, index_array, uniform, Index};
/// let z = zip_arrays((index_array([2, 2]), uniform('x', [2, 2]))).unwrap();
/// assert_eq!(z.at([1, 0]), (Index::new([1, 0]), 'x'));
/// assert!(zip_arrays((index_array([2, 2]), uniform('x', [2, 3]))).is_err());
/// ```
pub fn zip_arrays<Z: ZipArrays<R>, const R: usize>(arrays: Z) -> Result<Z::Output, Error> { arrays.zip_arrays() }

// ----------------------------------------------------------------------------

/// Implemented by the tuple element types of arrays that [`unzip_array()`]
/// can split.
pub trait Unzip<P, const R: usize> {
    type Output;

    fn unzip(array: Array<P, R>) -> Self::Output;
}

impl<P: Provider<R, T = (A, B)> + Clone, A: Clone, B: Clone, const R: usize> Unzip<P, R> for (A, B) {
    type Output = (Array<Map<P, fn((A, B)) -> A>, R>, Array<Map<P, fn((A, B)) -> B>, R>);

    fn unzip(array: Array<P, R>) -> Self::Output {
        let p = array.into_provider();
        (
            Array::new(Map(p.clone(), (|(a, _)| a) as fn((A, B)) -> A)),
            Array::new(Map(p, (|(_, b)| b) as fn((A, B)) -> B)),
        )
    }
}

impl<P: Provider<R, T = (A, B, C)> + Clone, A: Clone, B: Clone, C: Clone, const R: usize> Unzip<P, R> for (A, B, C) {
    type Output = (
        Array<Map<P, fn((A, B, C)) -> A>, R>,
        Array<Map<P, fn((A, B, C)) -> B>, R>,
        Array<Map<P, fn((A, B, C)) -> C>, R>,
    );

    fn unzip(array: Array<P, R>) -> Self::Output {
        let p = array.into_provider();
        (
            Array::new(Map(p.clone(), (|(a, _, _)| a) as fn((A, B, C)) -> A)),
            Array::new(Map(p.clone(), (|(_, b, _)| b) as fn((A, B, C)) -> B)),
            Array::new(Map(p, (|(_, _, c)| c) as fn((A, B, C)) -> C)),
        )
    }
}

/// Splits an array of pairs or triples into a tuple of arrays.
///
/// ```
/// use ndview::{unzip_array, make_array, Index};
/// let pairs = make_array(|i: Index<1>| (i[0], i[0] * i[0]), [4]);
/// let (x, y) = unzip_array(pairs);
/// assert_eq!(x.at([3]), 3);
/// assert_eq!(y.at([3]), 9);
/// ```
pub fn unzip_array<P: Provider<R>, const R: usize>(array: Array<P, R>) -> <P::T as Unzip<P, R>>::Output where
    P::T: Unzip<P, R>,
{
    <P::T as Unzip<P, R>>::unzip(array)
}

// ----------------------------------------------------------------------------

/// Implemented by tuples of rank-1 [`Array`]s. See [`cartesian_product()`].
pub trait CartesianProduct {
    type Output;

    fn cartesian_product(self) -> Self::Output;
}

impl<P0: Provider<1>, P1: Provider<1>> CartesianProduct for (Array<P0, 1>, Array<P1, 1>) {
    type Output = Array<Cartesian<(P0, P1)>, 2>;

    fn cartesian_product(self) -> Self::Output {
        Array::new(Cartesian((self.0.into_provider(), self.1.into_provider())))
    }
}

impl<P0: Provider<1>, P1: Provider<1>, P2: Provider<1>> CartesianProduct for (Array<P0, 1>, Array<P1, 1>, Array<P2, 1>) {
    type Output = Array<Cartesian<(P0, P1, P2)>, 3>;

    fn cartesian_product(self) -> Self::Output {
        Array::new(Cartesian((self.0.into_provider(), self.1.into_provider(), self.2.into_provider())))
    }
}

/// The array of all tuples with one element from each of the rank-1
/// `arrays`. Its rank is the number of arrays and its extent along axis `k`
/// is the size of array `k`.
pub fn cartesian_product<C: CartesianProduct>(arrays: C) -> C::Output { arrays.cartesian_product() }

/// The coordinate arrays of the grid spanned by the rank-1 `arrays`:
/// [`unzip_array()`] applied to the [`cartesian_product()`].
///
/// ```
/// use ndview::{meshgrid, linspace, arange};
/// let (x, y) = meshgrid((arange(3), linspace(0.0, 1.0, 5)));
/// assert_eq!(x.shape().into_array(), [3, 5]);
/// assert_eq!(x.at([2, 4]), 2);
/// assert_eq!(y.at([2, 4]), 1.0);
/// ```
pub fn meshgrid<C, Q: Provider<S>, const S: usize>(arrays: C) -> <Q::T as Unzip<Q, S>>::Output where
    C: CartesianProduct<Output = Array<Q, S>>,
    Q::T: Unzip<Q, S>,
{
    unzip_array(arrays.cartesian_product())
}

// ----------------------------------------------------------------------------
