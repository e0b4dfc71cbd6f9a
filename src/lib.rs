//! Lazy, composable N-dimensional arrays.
//!
//! [`Array<P, R>`] represents an array of rank `R` whose elements come from a
//! [`Provider`] `P`. The rank is part of the type, and the [`Shape`] (the
//! extent along each axis) is known at run time. A `Provider` may compute its
//! elements on demand, like [`Basic`] (a function of the [`Index`]) or
//! [`Uniform`] (one value everywhere), or read them from memory, like
//! [`Unique`] (exclusively owned and mutable) and [`Shared`] (reference
//! counted and immutable). References and boxes of providers are providers
//! too.
//!
//! Arrays are transformed by [`Operator`]s, applied with `|`. Nearly all
//! operators are lazy: `a | select_from([1, 1]).to([3, 3])` does not copy
//! anything, but returns an array whose provider remembers `a`'s provider and
//! the region, and maps each index it is asked for. Chains of operators
//! therefore cost nothing until elements are read, and no more than the
//! elements read. Use [`to_unique()`] or [`to_shared()`] to materialize the
//! result of a chain into memory.
//!
//! Operators whose parameters might not fit the array, and elementwise
//! arithmetic between arrays of different shapes, return `Result<_,`
//! [`Error`]`>`. The check happens when the operator is applied, so reading
//! elements of the resulting array never fails. Reading outside the shape is
//! not detected, unless the array has been wrapped with [`bounds_check()`].
//!
//! ```
//! use ndview::{index_array, map, select_axis, collect, to_shared, Sum, Index};
//! let a = index_array([4, 6]) | map(|i: Index<2>| i[0] * 6 + i[1]);
//! let b = (a | select_axis(1).from(1).to(1).from_the_end()).unwrap();
//! assert_eq!(b.shape().into_array(), [4, 4]);
//! let rows = (b | collect(Sum).along_axis(1)).unwrap() | to_shared();
//! assert_eq!(rows.data(), [10, 34, 58, 82]);
//! let c = ((a * 2usize).unwrap() + a).unwrap();
//! assert_eq!(c.at([3, 5]), 69);
//! ```

mod error;
pub use error::{Error};

pub mod tuple;
pub use tuple::{FixedTuple};

mod index;
pub use index::{Shape, Index, Jumps, Strides};

mod pattern;
pub use pattern::{AccessPattern, Indexes, access_pattern, partition_shape};

mod buffer;
pub use buffer::{Buffer};

mod provider;
pub use provider::{
    Provider, MemoryProvider, Basic, Uniform, Unique, Shared,
    evaluate_as_unique, evaluate_as_shared,
};

pub mod ops;
pub use ops::{Binary, Scalar, Operand};

pub mod view;

mod array;
pub use array::{Array};

mod operator;
pub use operator::{
    Operator,
    Mapper, map, Applier, apply,
    Selector, select, select_from, ReplaceRegion, Replacer, replace, replace_from,
    AxisSelector, select_axis, AxisShifter, shift_by, AxisFreezer, freeze_axis,
    AxisReducer, collect, Concatenator, concat,
    ToUnique, to_unique, ToShared, to_shared, BoundsCheck, bounds_check,
    Reshaper, reshape, IndexReader, read_index, IndexesReader, read_indexes,
    Divvier, divvy,
};

mod reduce;
pub use reduce::{Reduction, Summand, Sum, All, Any, Min, Max, Fold, fold, sum, all, any, min, max};

mod new;
pub use new::{
    make_array, from_provider, array_from, unique_array, shared_array, shared_array_from,
    index_array, uniform, zeros, ones, promote, arange, arange_by, linspace, indexes_where,
};

mod combine;
pub use combine::{
    binary_op, ZipArrays, zip_arrays, Unzip, unzip_array, CartesianProduct, cartesian_product, meshgrid,
};
