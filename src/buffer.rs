use std::ops::{Deref, DerefMut};

/// Owned, fixed-length, contiguous storage for array elements.
///
/// A `Buffer` cannot be cloned; it is moved into exactly one
/// [`Unique`](super::Unique), or shared behind an [`Arc`](std::sync::Arc)
/// by [`Shared`](super::Shared).
#[derive(Debug, Default, Hash, PartialEq, Eq)]
pub struct Buffer<T>(Box<[T]>);

impl<T> Buffer<T> {
    /// A `Buffer` of `len` copies of `value`.
    pub fn new(len: usize, value: T) -> Self where T: Clone {
        Self(vec![value; len].into_boxed_slice())
    }

    pub fn from_vec(items: Vec<T>) -> Self { Self(items.into_boxed_slice()) }

    pub fn into_vec(self) -> Vec<T> { self.0.into_vec() }

    #[inline(always)]
    pub fn len(&self) -> usize { self.0.len() }

    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// The element at `offset`, or `None` if `offset` is out of range.
    #[inline(always)]
    pub fn get(&self, offset: usize) -> Option<&T> { self.0.get(offset) }

    #[inline(always)]
    pub fn get_mut(&mut self, offset: usize) -> Option<&mut T> { self.0.get_mut(offset) }

    pub fn as_slice(&self) -> &[T] { &self.0 }

    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T> Deref for Buffer<T> {
    type Target = [T];
    fn deref(&self) -> &[T] { &self.0 }
}

impl<T> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(items: Vec<T>) -> Self { Self::from_vec(items) }
}

impl<T> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct() {
        let b = Buffer::new(4, 1.5);
        assert_eq!(b.len(), 4);
        assert_eq!(b.as_slice(), [1.5; 4]);
        let b: Buffer<_> = (0..3).collect();
        assert_eq!(b.as_slice(), [0, 1, 2]);
        assert!(Buffer::<u8>::default().is_empty());
    }

    #[test]
    fn access() {
        let mut b = Buffer::from_vec(vec![1, 2, 3]);
        assert_eq!(b.get(2), Some(&3));
        assert_eq!(b.get(3), None);
        *b.get_mut(0).unwrap() = 9;
        b[1] = 8;
        assert_eq!(b.into_vec(), [9, 8, 3]);
    }
}
