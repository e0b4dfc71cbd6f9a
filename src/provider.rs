//! Element sources for [`Array`](super::Array).
//!
//! A [`Provider`] knows its [`Shape`] and can produce the element at any
//! [`Index`] inside it. Some providers compute elements on demand
//! ([`Basic`], [`Uniform`], and the lazy operator providers in
//! [`view`](super::view)); others read them from memory ([`Unique`],
//! [`Shared`]).
//!
//! If `P` implements `Provider<R>`, then so do `&P`, `Box<P>`, `Arc<P>` and
//! all other types that [`Deref`] to `P`. In particular `Box<dyn
//! Provider<R, T = X>>` is a `Provider`, which erases the type of a chain of
//! operators.

use std::ops::{Deref};
use std::sync::{Arc};

use super::{Error, Shape, Index, Strides, Buffer, AccessPattern};

/// Implemented by types that behave like a rank-`R` array of `Self::T`s.
///
/// ```
/// use ndview::{Provider, Shape, Index};
/// /// Yields the sum of the coordinates.
/// struct Diagonals(usize);
/// impl Provider<2> for Diagonals {
///     type T = usize;
///     fn shape(&self) -> Shape<2> { Shape::new([self.0, self.0]) }
///     fn at(&self, index: Index<2>) -> usize { index[0] + index[1] }
/// }
/// assert_eq!(Diagonals(3).size(), 9);
/// assert_eq!(Diagonals(3).at(Index::new([1, 2])), 3);
/// ```
pub trait Provider<const R: usize> {
    /// The element type.
    type T: Clone;

    /// The shape of the array.
    fn shape(&self) -> Shape<R>;

    /// The number of elements.
    fn size(&self) -> usize { self.shape().volume() }

    /// Compute the element at `index`, which must lie inside
    /// [`Self::shape()`]. The result of an out-of-bounds access is
    /// unspecified: it may panic, or it may return a meaningless value.
    fn at(&self, index: Index<R>) -> Self::T;
}

impl<D: Deref, const R: usize> Provider<R> for D where D::Target: Provider<R> {
    type T = <D::Target as Provider<R>>::T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { (**self).shape() }

    #[inline(always)]
    fn size(&self) -> usize { (**self).size() }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> Self::T { (**self).at(index) }
}

// ----------------------------------------------------------------------------

/// Implemented by [`Provider`]s whose elements live in memory.
///
/// [`Provider::at()`] must return a clone of `*self.at_ref(index)`.
pub trait MemoryProvider<const R: usize>: Provider<R> {
    /// Returns a reference to the element at `index`.
    fn at_ref(&self, index: Index<R>) -> &Self::T;
}

impl<D: Deref, const R: usize> MemoryProvider<R> for D where D::Target: MemoryProvider<R> {
    #[inline(always)]
    fn at_ref(&self, index: Index<R>) -> &Self::T { (**self).at_ref(index) }
}

// ----------------------------------------------------------------------------

/// A [`Provider`] that computes each element from its index.
#[derive(Debug, Copy, Clone)]
pub struct Basic<F, const R: usize> {
    mapping: F,
    shape: Shape<R>,
}

impl<F, const R: usize> Basic<F, R> {
    pub fn new(mapping: F, shape: impl Into<Shape<R>>) -> Self {
        Self { mapping, shape: shape.into() }
    }
}

impl<F: Fn(Index<R>) -> T, T: Clone, const R: usize> Provider<R> for Basic<F, R> {
    type T = T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.shape }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> T { (self.mapping)(index) }
}

// ----------------------------------------------------------------------------

/// A [`Provider`] whose elements are all the same.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Uniform<T, const R: usize> {
    value: T,
    shape: Shape<R>,
}

impl<T, const R: usize> Uniform<T, R> {
    pub fn new(value: T, shape: impl Into<Shape<R>>) -> Self {
        Self { value, shape: shape.into() }
    }

    pub fn value(&self) -> &T { &self.value }

    /// Replaces the shape. Any shape is acceptable.
    pub fn reshape<const S: usize>(self, shape: impl Into<Shape<S>>) -> Uniform<T, S> {
        Uniform { value: self.value, shape: shape.into() }
    }
}

impl<T: Clone, const R: usize> Provider<R> for Uniform<T, R> {
    type T = T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.shape }

    #[inline(always)]
    fn at(&self, _: Index<R>) -> T { self.value.clone() }
}

impl<T: Clone, const R: usize> MemoryProvider<R> for Uniform<T, R> {
    #[inline(always)]
    fn at_ref(&self, _: Index<R>) -> &T { &self.value }
}

// ----------------------------------------------------------------------------

/// A dense row-major [`Provider`] that exclusively owns its [`Buffer`].
///
/// `Unique` can be mutated in place, and cannot be cloned; use
/// [`Unique::to_shared()`] or [`Unique::into_shared()`] to obtain a
/// cheaply clonable [`Shared`].
#[derive(Debug, PartialEq)]
pub struct Unique<T, const R: usize> {
    shape: Shape<R>,
    strides: Strides<R>,
    buffer: Buffer<T>,
}

impl<T, const R: usize> Unique<T, R> {
    /// Wraps `buffer`, whose length must be the volume of `shape`.
    pub fn new(shape: impl Into<Shape<R>>, buffer: Buffer<T>) -> Result<Self, Error> {
        let shape = shape.into();
        check_volume(shape, buffer.len())?;
        Ok(Self { shape, strides: shape.strides(), buffer })
    }

    /// A `Unique` of shape `shape` whose elements are all `value`.
    pub fn filled(shape: impl Into<Shape<R>>, value: T) -> Self where T: Clone {
        let shape = shape.into();
        Self { shape, strides: shape.strides(), buffer: Buffer::new(shape.volume(), value) }
    }

    pub fn strides(&self) -> Strides<R> { self.strides }

    /// Returns a mutable reference to the element at `index`.
    #[inline(always)]
    pub fn at_mut(&mut self, index: Index<R>) -> &mut T {
        &mut self.buffer[self.strides.compute_offset(index)]
    }

    /// The elements in row-major order.
    pub fn data(&self) -> &[T] { &self.buffer }

    pub fn data_mut(&mut self) -> &mut [T] { &mut self.buffer }

    pub fn into_buffer(self) -> Buffer<T> { self.buffer }

    /// Copies the elements into a new [`Shared`].
    pub fn to_shared(&self) -> Shared<T, R> where T: Clone {
        let buffer: Buffer<T> = self.buffer.iter().cloned().collect();
        Shared { shape: self.shape, strides: self.strides, buffer: Arc::new(buffer) }
    }

    /// Moves the elements into a [`Shared`] without copying them.
    pub fn into_shared(self) -> Shared<T, R> {
        Shared { shape: self.shape, strides: self.strides, buffer: Arc::new(self.buffer) }
    }

    /// Reinterprets the elements as an array of shape `shape`, which must
    /// have the same volume.
    pub fn reshape<const S: usize>(self, shape: impl Into<Shape<S>>) -> Result<Unique<T, S>, Error> {
        Unique::new(shape, self.buffer)
    }
}

impl<T> From<Buffer<T>> for Unique<T, 1> {
    fn from(buffer: Buffer<T>) -> Self {
        let shape = Shape::new([buffer.len()]);
        Self { shape, strides: shape.strides(), buffer }
    }
}

impl<T: Clone, const R: usize> Provider<R> for Unique<T, R> {
    type T = T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.shape }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> T { self.at_ref(index).clone() }
}

impl<T: Clone, const R: usize> MemoryProvider<R> for Unique<T, R> {
    #[inline(always)]
    fn at_ref(&self, index: Index<R>) -> &T { &self.buffer[self.strides.compute_offset(index)] }
}

// ----------------------------------------------------------------------------

/// A dense row-major [`Provider`] whose [`Buffer`] may be shared with other
/// `Shared`s. Cloning and reshaping do not copy the elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Shared<T, const R: usize> {
    shape: Shape<R>,
    strides: Strides<R>,
    buffer: Arc<Buffer<T>>,
}

impl<T, const R: usize> Shared<T, R> {
    /// Wraps `buffer`, whose length must be the volume of `shape`.
    pub fn new(shape: impl Into<Shape<R>>, buffer: Arc<Buffer<T>>) -> Result<Self, Error> {
        let shape = shape.into();
        check_volume(shape, buffer.len())?;
        Ok(Self { shape, strides: shape.strides(), buffer })
    }

    /// A `Shared` of shape `shape` whose elements are all `value`.
    pub fn filled(shape: impl Into<Shape<R>>, value: T) -> Self where T: Clone {
        Unique::filled(shape, value).into_shared()
    }

    pub fn strides(&self) -> Strides<R> { self.strides }

    /// The elements in row-major order.
    pub fn data(&self) -> &[T] { &self.buffer }

    /// Copies the elements into a new [`Unique`].
    pub fn to_unique(&self) -> Unique<T, R> where T: Clone {
        let buffer: Buffer<T> = self.buffer.iter().cloned().collect();
        Unique { shape: self.shape, strides: self.strides, buffer }
    }

    /// Views the same elements as an array of shape `shape`, which must have
    /// the same volume. The result aliases `self`.
    pub fn reshape<const S: usize>(&self, shape: impl Into<Shape<S>>) -> Result<Shared<T, S>, Error> {
        Shared::new(shape, Arc::clone(&self.buffer))
    }

    /// Tests whether `self` and `other` read from the same [`Buffer`].
    pub fn is_aliased_with<const S: usize>(&self, other: &Shared<T, S>) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }
}

impl<T: Clone, const R: usize> Provider<R> for Shared<T, R> {
    type T = T;

    #[inline(always)]
    fn shape(&self) -> Shape<R> { self.shape }

    #[inline(always)]
    fn at(&self, index: Index<R>) -> T { self.at_ref(index).clone() }
}

impl<T: Clone, const R: usize> MemoryProvider<R> for Shared<T, R> {
    #[inline(always)]
    fn at_ref(&self, index: Index<R>) -> &T { &self.buffer[self.strides.compute_offset(index)] }
}

// ----------------------------------------------------------------------------

fn check_volume<const R: usize>(shape: Shape<R>, size: usize) -> Result<(), Error> {
    if shape.volume() == size { return Ok(()); }
    Err(Error::VolumeMismatch { shape: shape.to_vec(), volume: shape.volume(), size })
}

/// Computes every element of `provider`, in row-major order, into a new
/// [`Unique`].
pub fn evaluate_as_unique<P: Provider<R>, const R: usize>(provider: &P) -> Unique<P::T, R> {
    let shape = provider.shape();
    tracing::trace!(%shape, volume = shape.volume(), "evaluating into a new buffer");
    let buffer: Buffer<P::T> = AccessPattern::over(shape).iter().map(|index| provider.at(index)).collect();
    Unique { shape, strides: shape.strides(), buffer }
}

/// Computes every element of `provider`, in row-major order, into a new
/// [`Shared`].
pub fn evaluate_as_shared<P: Provider<R>, const R: usize>(provider: &P) -> Shared<P::T, R> {
    evaluate_as_unique(provider).into_shared()
}

// ----------------------------------------------------------------------------
