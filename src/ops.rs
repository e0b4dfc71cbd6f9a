//! Generic programming over elementwise operators.
//!
//! For each binary operator in [`std::ops`] this module contains a unit type
//! of the same name that implements [`Binary`]. For example, [`Add`]
//! corresponds to [`std::ops::Add`]. There are also [`Binary`] types for the
//! comparisons and for logical conjunction and disjunction, which have no
//! overloadable operator. All closures of two arguments implement `Binary`
//! too. Any of these can be passed to [`Array::binary()`].
//!
//! [`Array`] overloads `+ - * / % & ^ << >>` to mean elementwise arithmetic.
//! The right-hand side is an [`Operand`]: either another `Array` of the same
//! shape, or a [`Scalar`], which is promoted to a [`Uniform`] array of the
//! left-hand side's shape. Since the shapes are only known at run time the
//! result is a `Result`. `|` is reserved for applying an
//! [`Operator`](super::Operator); use [`Array::or()`] for the elementwise
//! disjunction.

use super::{Array, Provider, Shape, Uniform, Error};
use super::view::{ZipWith, Map};

/// A function that combines `T` with `U`.
pub trait Binary<T, U> {
    type Output;

    fn call(&self, t: T, u: U) -> Self::Output;
}

impl<T, U, V, F: Fn(T, U) -> V> Binary<T, U> for F {
    type Output = V;
    #[inline(always)]
    fn call(&self, t: T, u: U) -> V { self(t, u) }
}

macro_rules! impl_arithmetic {
    ($($op:ident { $method:ident }),*) => { $(
        #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $op;

        impl<T, U> Binary<T, U> for $op where T: std::ops::$op<U> {
            type Output = T::Output;
            #[inline(always)]
            fn call(&self, t: T, u: U) -> Self::Output { t.$method(u) }
        }
    )* };
}

impl_arithmetic!(
    Add { add }, Sub { sub }, Mul { mul }, Div { div }, Rem { rem },
    BitAnd { bitand }, BitOr { bitor }, BitXor { bitxor }, Shl { shl }, Shr { shr }
);

// ----------------------------------------------------------------------------

macro_rules! impl_comparison {
    ($($op:ident($bound:ident) { $t:ident $cmp:tt $u:ident }),*) => { $(
        #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $op;

        impl<T, U> Binary<T, U> for $op where T: $bound<U> {
            type Output = bool;
            #[inline(always)]
            fn call(&self, $t: T, $u: U) -> bool { $t $cmp $u }
        }
    )* };
}

impl_comparison!(
    Lt(PartialOrd) { t < u }, Le(PartialOrd) { t <= u },
    Gt(PartialOrd) { t > u }, Ge(PartialOrd) { t >= u },
    Equal(PartialEq) { t == u }, NotEqual(PartialEq) { t != u }
);

/// Logical conjunction of two values that convert to `bool`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct And;

impl<T: Into<bool>, U: Into<bool>> Binary<T, U> for And {
    type Output = bool;
    #[inline(always)]
    fn call(&self, t: T, u: U) -> bool { t.into() && u.into() }
}

/// Logical disjunction of two values that convert to `bool`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Or;

impl<T: Into<bool>, U: Into<bool>> Binary<T, U> for Or {
    type Output = bool;
    #[inline(always)]
    fn call(&self, t: T, u: U) -> bool { t.into() || u.into() }
}

// ----------------------------------------------------------------------------

/// A function that takes the elements of a tuple as separate arguments.
///
/// Implemented by closures of two and three arguments, for use with
/// [`apply()`](super::apply).
pub trait Spread<Args> {
    type Output;

    fn spread(&self, args: Args) -> Self::Output;
}

impl<A, B, V, F: Fn(A, B) -> V> Spread<(A, B)> for F {
    type Output = V;
    #[inline(always)]
    fn spread(&self, (a, b): (A, B)) -> V { self(a, b) }
}

impl<A, B, C, V, F: Fn(A, B, C) -> V> Spread<(A, B, C)> for F {
    type Output = V;
    #[inline(always)]
    fn spread(&self, (a, b, c): (A, B, C)) -> V { self(a, b, c) }
}

// ----------------------------------------------------------------------------

/// Marks types that are promoted to a [`Uniform`] array when used as an
/// [`Operand`].
///
/// Implement this for your own numeric types to combine them with arrays.
pub trait Scalar: Copy {}

macro_rules! impl_scalar {
    ($($t:ty),*) => { $(impl Scalar for $t {})* };
}

impl_scalar!(bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// The right-hand side of an elementwise operation on a rank-`R` array.
pub trait Operand<const R: usize> {
    type Provider: Provider<R>;

    /// Returns the [`Provider`] for an operation whose left-hand side has
    /// shape `shape`.
    fn into_operand(self, shape: Shape<R>, operation: &'static str) -> Result<Self::Provider, Error>;
}

impl<T: Scalar, const R: usize> Operand<R> for T {
    type Provider = Uniform<T, R>;

    fn into_operand(self, shape: Shape<R>, _: &'static str) -> Result<Self::Provider, Error> {
        Ok(Uniform::new(self, shape))
    }
}

impl<P: Provider<R>, const R: usize> Operand<R> for Array<P, R> {
    type Provider = P;

    fn into_operand(self, shape: Shape<R>, operation: &'static str) -> Result<P, Error> {
        if self.shape() != shape {
            return Err(Error::ShapeMismatch {
                operation,
                left: shape.to_vec(),
                right: self.shape().to_vec(),
            });
        }
        Ok(self.into_provider())
    }
}

// ----------------------------------------------------------------------------

macro_rules! impl_op_for_array {
    ($($op:ident { $method:ident }),*) => { $(
        impl<P: Provider<R>, O: Operand<R>, const R: usize> std::ops::$op<O> for Array<P, R> where
            $op: Binary<P::T, <O::Provider as Provider<R>>::T>,
            <$op as Binary<P::T, <O::Provider as Provider<R>>::T>>::Output: Clone,
        {
            type Output = Result<Array<ZipWith<P, O::Provider, $op>, R>, Error>;
            fn $method(self, other: O) -> Self::Output { self.binary(other, $op) }
        }
    )* };
}

impl_op_for_array!(
    Add { add }, Sub { sub }, Mul { mul }, Div { div }, Rem { rem },
    BitAnd { bitand }, BitXor { bitxor }, Shl { shl }, Shr { shr }
);

/// The type of an elementwise unary operator.
pub type Unary<T, U> = fn(T) -> U;

impl<P: Provider<R>, const R: usize> std::ops::Neg for Array<P, R> where
    P::T: std::ops::Neg,
    <P::T as std::ops::Neg>::Output: Clone,
{
    type Output = Array<Map<P, Unary<P::T, <P::T as std::ops::Neg>::Output>>, R>;
    fn neg(self) -> Self::Output { self.map(<P::T as std::ops::Neg>::neg as Unary<_, _>) }
}

impl<P: Provider<R>, const R: usize> std::ops::Not for Array<P, R> where
    P::T: std::ops::Not,
    <P::T as std::ops::Not>::Output: Clone,
{
    type Output = Array<Map<P, Unary<P::T, <P::T as std::ops::Not>::Output>>, R>;
    fn not(self) -> Self::Output { self.map(<P::T as std::ops::Not>::not as Unary<_, _>) }
}

// ----------------------------------------------------------------------------
