use super::{
    Provider, MemoryProvider, Shape, Index, AccessPattern, Error,
    Unique, Shared, Operator, evaluate_as_unique, evaluate_as_shared,
};
use super::ops::{self, Binary, Operand};
use super::view::{Map, ZipWith};

/// A rank-`R` array whose elements come from a [`Provider`] `P`.
///
/// `Array` adds the user-facing API to a provider: operators applied with
/// `|`, elementwise arithmetic, iteration and indexing. Copying or cloning an
/// `Array` copies or clones its provider; for lazy providers this is cheap.
///
/// ```
/// use ndview::{make_array, select_from, to_unique, Index};
/// let a = make_array(|i: Index<2>| i[0] * 10 + i[1], [4, 5]);
/// assert_eq!(a.at([3, 2]), 32);
/// let mut b = (a | select_from([1, 1]).to([3, 4])).unwrap() | to_unique();
/// assert_eq!(b.data(), [11, 12, 13, 21, 22, 23]);
/// b[[0, 0]] = 0;
/// assert_eq!(b[[0, 0]], 0);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Array<P, const R: usize>(P);

impl<P, const R: usize> Array<P, R> {
    pub const fn new(provider: P) -> Self { Self(provider) }

    pub fn provider(&self) -> &P { &self.0 }

    pub fn into_provider(self) -> P { self.0 }

    /// The number of axes.
    pub const fn rank(&self) -> usize { R }

    /// An `Array` that borrows `self`'s provider instead of owning it.
    pub fn view(&self) -> Array<&P, R> { Array(&self.0) }

    /// Applies `operator`. Equivalent to `self | operator`.
    pub fn pipe<O: Operator<P, R>>(self, operator: O) -> O::Output { operator.apply(self) }
}

impl<P: Provider<R>, const R: usize> Array<P, R> {
    pub fn shape(&self) -> Shape<R> { self.0.shape() }

    /// The number of elements.
    pub fn size(&self) -> usize { self.0.size() }

    /// Returns the element at `index`.
    ///
    /// `index` must lie inside [`Self::shape()`]; unless the array has been
    /// [`bounds_check()`](super::bounds_check)ed, out-of-bounds accesses are
    /// not detected.
    #[inline(always)]
    pub fn at(&self, index: impl Into<Index<R>>) -> P::T { self.0.at(index.into()) }

    /// The valid indices, as an [`AccessPattern`].
    pub fn indexes(&self) -> AccessPattern<R> { AccessPattern::over(self.shape()) }

    /// Iterate over the elements in row-major order.
    pub fn values(&self) -> impl Iterator<Item = P::T> + '_ {
        self.indexes().into_iter().map(move |index| self.0.at(index))
    }

    /// Erases the type of the provider.
    pub fn boxed<'a>(self) -> Array<Box<dyn Provider<R, T = P::T> + 'a>, R> where P: 'a {
        Array(Box::new(self.0))
    }

    /// Applies `f` to every element. See also [`map()`](super::map).
    pub fn map<U: Clone, F: Fn(P::T) -> U>(self, f: F) -> Array<Map<P, F>, R> { Array(Map(self.0, f)) }

    /// Combines corresponding elements of `self` and `other` using `f`.
    /// Fails if the shapes differ.
    pub fn zip_with<Q: Provider<R>, U: Clone, F: Fn(P::T, Q::T) -> U>(
        self,
        other: Array<Q, R>,
        f: F,
    ) -> Result<Array<ZipWith<P, Q, F>, R>, Error> {
        self.binary(other, f)
    }

    /// Combines `self` elementwise with `other` using `op`. `other` is either
    /// an `Array` of the same shape or a [`Scalar`](super::Scalar).
    ///
    /// ```
    /// use ndview::{make_array, ops, Index};
    /// let a = make_array(|i: Index<1>| i[0] as u32, [4]);
    /// let b = a.binary(2u32, ops::Shl).unwrap();
    /// assert_eq!(b.values().collect::<Vec<_>>(), [0, 4, 8, 12]);
    /// assert!(a.binary(make_array(|_: Index<1>| 0u32, [5]), ops::Add).is_err());
    /// ```
    pub fn binary<O: Operand<R>, B: Binary<P::T, <O::Provider as Provider<R>>::T>>(
        self,
        other: O,
        op: B,
    ) -> Result<Array<ZipWith<P, O::Provider, B>, R>, Error> where
        B::Output: Clone,
    {
        let other = other.into_operand(self.shape(), "binary operation")?;
        Ok(Array(ZipWith(self.0, other, op)))
    }

    /// Computes every element into a new mutable array.
    pub fn to_unique(&self) -> Array<Unique<P::T, R>, R> { Array(evaluate_as_unique(&self.0)) }

    /// Computes every element into a new immutable array.
    pub fn to_shared(&self) -> Array<Shared<P::T, R>, R> { Array(evaluate_as_shared(&self.0)) }
}

macro_rules! impl_binary_methods {
    ($($method:ident: $op:ident),*) => {
        impl<P: Provider<R>, const R: usize> Array<P, R> { $(
            #[doc = concat!("Elementwise [`ops::", stringify!($op), "`]. See [`Self::binary()`].")]
            pub fn $method<O: Operand<R>>(
                self,
                other: O,
            ) -> Result<Array<ZipWith<P, O::Provider, ops::$op>, R>, Error> where
                ops::$op: Binary<P::T, <O::Provider as Provider<R>>::T, Output = bool>,
            {
                self.binary(other, ops::$op)
            }
        )* }
    };
}

impl_binary_methods!(
    lt: Lt, le: Le, gt: Gt, ge: Ge, equal: Equal, not_equal: NotEqual, and: And, or: Or
);

// ----------------------------------------------------------------------------

impl<T: Clone, const R: usize> Array<Unique<T, R>, R> {
    /// Returns a mutable reference to the element at `index`.
    pub fn at_mut(&mut self, index: impl Into<Index<R>>) -> &mut T { self.0.at_mut(index.into()) }

    /// The elements in row-major order.
    pub fn data(&self) -> &[T] { self.0.data() }

    pub fn data_mut(&mut self) -> &mut [T] { self.0.data_mut() }

    /// Converts to an immutable array without copying the elements.
    pub fn into_shared(self) -> Array<Shared<T, R>, R> { Array(self.0.into_shared()) }
}

impl<T: Clone, const R: usize> Array<Shared<T, R>, R> {
    /// The elements in row-major order.
    pub fn data(&self) -> &[T] { self.0.data() }

    /// Tests whether `self` and `other` read from the same memory.
    pub fn is_aliased_with<const S: usize>(&self, other: &Array<Shared<T, S>, S>) -> bool {
        self.0.is_aliased_with(&other.0)
    }
}

impl<P: MemoryProvider<R>, I: Into<Index<R>>, const R: usize> std::ops::Index<I> for Array<P, R> {
    type Output = P::T;

    #[inline(always)]
    fn index(&self, index: I) -> &P::T { self.0.at_ref(index.into()) }
}

impl<T: Clone, I: Into<Index<R>>, const R: usize> std::ops::IndexMut<I> for Array<Unique<T, R>, R> {
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut T { self.0.at_mut(index.into()) }
}

/// `array | operator` applies `operator` to `array`.
impl<P, O: Operator<P, R>, const R: usize> std::ops::BitOr<O> for Array<P, R> {
    type Output = O::Output;

    fn bitor(self, operator: O) -> O::Output { operator.apply(self) }
}

// ----------------------------------------------------------------------------
