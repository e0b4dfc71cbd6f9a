//! Property tests for shapes, access patterns and operators
//!
//! Checks the algebraic laws the library relies on using proptest.

use ndview::{
    AccessPattern, Index, Shape, Strides, make_array, map, replace, select, to_shared, to_unique,
};
use proptest::prelude::*;

fn arb_shape() -> impl Strategy<Value = [usize; 3]> {
    [1usize..8, 1usize..8, 1usize..8]
}

/// A shape together with a pattern whose generated indices lie within it.
/// Each end is a whole number of jumps past the start.
fn arb_pattern_within() -> impl Strategy<Value = ([usize; 3], AccessPattern<3>)> {
    arb_shape().prop_flat_map(|shape| {
        let starts = [0..shape[0], 0..shape[1], 0..shape[2]];
        let jumps = [1usize..4, 1usize..4, 1usize..4];
        (Just(shape), starts, jumps).prop_flat_map(|(shape, start, jumps)| {
            let counts: [_; 3] = std::array::from_fn(|k| 0..=(shape[k] - 1 - start[k]) / jumps[k] + 1);
            (Just(shape), Just(start), counts, Just(jumps))
        })
    })
    .prop_map(|(shape, start, count, jumps)| {
        let end: [usize; 3] = std::array::from_fn(|k| start[k] + jumps[k] * count[k]);
        (shape, AccessPattern::new(end).with_start(start).with_jumps(jumps))
    })
}

fn linear(shape: [usize; 3]) -> impl Fn(Index<3>) -> usize + Copy {
    move |i: Index<3>| (i[0] * shape[1] + i[1]) * shape[2] + i[2]
}

// ============================================================================
// Shapes and strides
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// An index is contained iff every coordinate is below its extent
    #[test]
    fn shape_contains(shape in arb_shape(), index in [0usize..10, 0usize..10, 0usize..10]) {
        let inside = (0..3).all(|axis| index[axis] < shape[axis]);
        prop_assert_eq!(Shape::new(shape).contains(index), inside);
    }

    /// Strides are row-major: the last is 1 and each is the next times its extent
    #[test]
    fn strides_are_row_major(shape in arb_shape()) {
        let strides = Strides::row_major(Shape::new(shape));
        prop_assert_eq!(strides[2], 1);
        prop_assert_eq!(strides[1], strides[2] * shape[2]);
        prop_assert_eq!(strides[0], strides[1] * shape[1]);
    }

    /// Offsets of the indices of a shape enumerate 0..volume in order
    #[test]
    fn offsets_enumerate_buffer(shape in arb_shape()) {
        let shape = Shape::new(shape);
        let strides = shape.strides();
        let offsets: Vec<_> = shape.indexes().iter().map(|i| strides.compute_offset(i)).collect();
        prop_assert_eq!(offsets, (0..shape.volume()).collect::<Vec<_>>());
    }
}

// ============================================================================
// Access patterns
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every mapped index is generated, and inverse mapping recovers it
    #[test]
    fn map_index_inverts((_, pattern) in arb_pattern_within()) {
        for index in pattern.shape().indexes() {
            let mapped = pattern.map_index(index);
            prop_assert!(pattern.generates(mapped));
            prop_assert_eq!(pattern.inverse_map_index(mapped), index);
        }
    }

    /// Iteration visits exactly the generated indices, in row-major order
    #[test]
    fn iteration_matches_map_index((_, pattern) in arb_pattern_within()) {
        let visited: Vec<_> = pattern.iter().collect();
        let mapped: Vec<_> = pattern.shape().indexes().iter().map(|i| pattern.map_index(i)).collect();
        prop_assert_eq!(visited.len(), pattern.size());
        prop_assert_eq!(visited, mapped);
    }

    /// A pattern built inside a shape is within it
    #[test]
    fn patterns_within((shape, pattern) in arb_pattern_within()) {
        prop_assert!(pattern.within(Shape::new(shape)));
    }
}

// ============================================================================
// Operators
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Materializing preserves the shape and every element
    #[test]
    fn materialize_preserves(shape in arb_shape()) {
        let a = make_array(linear(shape), shape);
        let b = a | to_unique() | to_shared();
        prop_assert_eq!(b.shape(), a.shape());
        for index in a.indexes() {
            prop_assert_eq!(b.at(index), a.at(index));
        }
    }

    /// Mapping through the identity changes nothing
    #[test]
    fn identity_map(shape in arb_shape()) {
        let a = make_array(linear(shape), shape);
        let b = a | map(|x: usize| x);
        prop_assert!(a.values().eq(b.values()));
    }

    /// Selecting a replaced region reads back the replacement; elsewhere the source is unchanged
    #[test]
    fn replace_then_select((shape, pattern) in arb_pattern_within()) {
        let source = make_array(linear(shape), shape);
        let patch = make_array(|i: Index<3>| 1000 + i[0] + i[1] + i[2], pattern.shape());
        let replaced = (source | replace(pattern, patch)).unwrap();
        let selected = (replaced | select(pattern)).unwrap();
        prop_assert_eq!(selected.shape(), patch.shape());
        prop_assert!(selected.values().eq(patch.values()));
        for index in source.indexes() {
            if !pattern.generates(index) {
                prop_assert_eq!(replaced.at(index), source.at(index));
            }
        }
    }
}
