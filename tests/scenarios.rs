//! End-to-end behaviour of arrays and operators.

use ndview::{
    Shape, Index, Strides, FixedTuple, Buffer, Error, Unique, Uniform,
    access_pattern, index_array, make_array, ones, zeros, uniform, unique_array, shared_array,
    arange, indexes_where, zip_arrays, cartesian_product, binary_op, from_provider,
    map, select, select_axis, replace, replace_from, shift_by, freeze_axis, collect, concat,
    bounds_check, reshape, read_index, read_indexes, divvy, to_shared, to_unique,
    sum, all, any,
};

// ----------------------------------------------------------------------------

#[test]
fn shapes() {
    let shape = Shape::new([10, 10, 10]);
    assert_ne!(shape, Shape::new([10, 10, 11]));
    assert_eq!(shape.len(), 3);
    assert_eq!(shape.volume(), 1000);
    assert!(shape.contains([0, 0, 0]));
    assert!(shape.contains([9, 9, 9]));
    assert!(!shape.contains([10, 9, 9]));
}

#[test]
fn insert_and_remove_elements() {
    let shape = Shape::new([0, 1, 2]);
    let remove = |axes: [usize; 2]| -> Shape<1> { shape.remove_elements(FixedTuple::new(axes)) };
    assert_eq!(remove([0, 1]), Shape::new([2]));
    assert_eq!(remove([1, 2]), Shape::new([0]));
    assert_eq!(remove([0, 2]), Shape::new([1]));
    let insert = |axes: [usize; 2]| -> Shape<5> { shape.insert_elements(FixedTuple::new(axes), FixedTuple::new([8, 9])) };
    assert_eq!(insert([0, 1]), Shape::new([8, 9, 0, 1, 2]));
    assert_eq!(insert([1, 2]), Shape::new([0, 8, 9, 1, 2]));
    assert_eq!(insert([2, 3]), Shape::new([0, 1, 8, 9, 2]));
    assert_eq!(insert([3, 4]), Shape::new([0, 1, 2, 8, 9]));
}

#[test]
fn strides() {
    let strides = Strides::row_major(Shape::new([20, 10, 5]));
    assert_eq!(strides, Strides::new([50, 5, 1]));
    assert_eq!(strides.compute_offset(Index::new([1, 1, 1])), 56);
}

#[test]
fn access_patterns() {
    assert_eq!(access_pattern([10, 10, 10]).size(), 1000);
    assert_eq!(access_pattern([10, 10, 10]).with_jumps([2, 2, 2]).size(), 125);

    let pattern = access_pattern([5, 5]);
    assert_eq!(pattern.iter().count(), pattern.size());
    let ragged = access_pattern([5, 5]).with_jumps([2, 2]);
    assert_eq!(ragged.size(), 4);
    assert_eq!(ragged.iter().count(), 9);
    assert!(pattern.contains([0, 0]));
    assert!(!pattern.contains([0, 5]));
    assert!(!pattern.contains([5, 0]));

    let pattern = access_pattern([10]).with_start([4]).with_jumps([2]);
    assert!(pattern.contains([0]));
    assert!(pattern.contains([2]));
    assert!(!pattern.contains([3]));
    assert!(pattern.generates([4]));
    assert!(pattern.generates([6]));
    assert!(pattern.generates([8]));
    assert!(!pattern.generates([0]));
    assert!(!pattern.generates([5]));
    assert_eq!(pattern.inverse_map_index(pattern.map_index([6])), Index::new([6]));
}

#[test]
fn buffers() {
    let empty: Buffer<f64> = Buffer::default();
    assert!(empty.is_empty());
    let constant = Buffer::new(100, 1.5);
    assert_eq!((constant.len(), constant[0], constant[99]), (100, 1.5, 1.5));
    let counted: Buffer<i32> = (0..4).collect();
    assert_eq!(counted.as_slice(), [0, 1, 2, 3]);
    assert_eq!(counted, Buffer::from_vec(vec![0, 1, 2, 3]));
    assert_ne!(counted, Buffer::from_vec(vec![0, 1, 2]));
    assert_eq!(counted.get(4), None);
}

// ----------------------------------------------------------------------------

#[test]
fn simple_arrays() {
    assert_eq!(index_array([10]).at([5]), Index::new([5]));
    assert_eq!(ones::<i32, 2>([10, 10]).at([5, 5]), 1);
    assert_eq!(zeros::<f64, 2>([10, 10]).at([5, 5]), 0.0);

    let p = Uniform::new(1.0, [10, 20, 40]);
    let q = p.reshape([5, 2, 10, 2, 20, 2]);
    assert_eq!(from_provider(p).at([9, 19, 39]), 1.0);
    assert_eq!(from_provider(q).at([4, 1, 9, 1, 19, 1]), 1.0);
}

#[test]
fn unique_and_shared() {
    let mut provider = Unique::filled([2, 3, 4], 0);
    *provider.at_mut(Index::new([1, 0, 0])) = 1;
    *provider.at_mut(Index::new([0, 2, 0])) = 2;
    *provider.at_mut(Index::new([0, 0, 3])) = 3;
    *provider.at_mut(Index::new([1, 2, 3])) = 123;

    let copied = from_provider(provider.to_shared());
    assert_eq!(copied.at([0, 2, 0]), 2);
    assert_ne!(copied.data().as_ptr(), provider.data().as_ptr());

    let address = provider.data().as_ptr();
    let a = from_provider(provider.into_shared());
    assert_eq!(a.data().as_ptr(), address);
    assert_eq!(a.at([1, 2, 3]), 123);

    let alias = a.clone();
    let mut b = a.provider().to_unique();
    *b.at_mut(Index::new([1, 2, 3])) = 0;
    assert_eq!(a.at([1, 2, 3]), 123);
    assert!(alias.is_aliased_with(&a));
    assert_ne!(b.data().as_ptr(), a.data().as_ptr());
}

#[test]
fn zip() {
    let a = shared_array([10, 10], 0.0);
    let b = shared_array([10, 10], 0);
    let ab = zip_arrays((a, b)).unwrap();
    assert_eq!(ab.at([0, 0]), (0.0, 0));
}

#[test]
fn bounds_checking() {
    let unchecked = index_array([10, 10]);
    let checked = index_array([10, 10]) | bounds_check();
    assert_eq!(unchecked.at([10, 10]), Index::new([10, 10]));
    assert!(checked.provider().try_at(Index::new([0, 0])).is_ok());
    assert!(matches!(
        checked.provider().try_at(Index::new([10, 10])),
        Err(Error::IndexOutOfBounds { .. }),
    ));
}

#[test]
#[should_panic]
fn bounds_checked_read_panics() {
    let checked = index_array([10, 10]) | bounds_check();
    checked.at([10, 10]);
}

#[test]
fn reshapes() {
    let a = unique_array([10, 10], 0.0);
    assert!((a.to_unique() | reshape([5, 20])).is_ok());
    assert!((a.to_unique() | reshape([5, 5, 4])).is_ok());
    assert!((a.to_unique() | reshape([2, 51])).is_err());

    let s = a | to_shared();
    let r = (s.clone() | reshape([5, 5, 4])).unwrap();
    assert_eq!(r.data().as_ptr(), s.data().as_ptr());
    assert!((s | reshape([10, 10, 10])).is_err());
}

// ----------------------------------------------------------------------------

#[test]
fn replace_checks_shapes() {
    let a1 = index_array([10]);
    let a2 = index_array([5]);
    assert!((a1 | replace(access_pattern([10]).with_start([5]), a2)).is_ok());
    assert!(matches!(
        a1 | replace(access_pattern([10]).with_start([6]), a2),
        Err(Error::ShapeMismatch { operation: "replace", .. }),
    ));
    assert!((zeros::<i32, 2>([10, 10]) | replace_from([0, 0]).to([10, 5]).with(ones([10, 6]))).is_err());
}

#[test]
fn replace_regions() {
    let a1 = uniform(1.0, [10]);
    let all = (a1 | replace(access_pattern([10]), uniform(2.0, [10]))).unwrap();
    assert!(all.values().all(|x| x == 2.0));

    let first = (a1 | replace(access_pattern([5]), uniform(2.0, [5]))).unwrap();
    for index in first.indexes() {
        assert_eq!(first.at(index), if index[0] < 5 { 2.0 } else { 1.0 });
    }

    let a1 = index_array([10]);
    let second = (a1 | replace(access_pattern([10]).with_start([5]), index_array([5]))).unwrap();
    for index in second.indexes() {
        assert_eq!(second.at(index)[0], if index[0] < 5 { index[0] } else { index[0] - 5 });
    }

    let alternate = (a1 | replace(access_pattern([10]).with_jumps([2]), index_array([5]))).unwrap();
    for index in alternate.indexes() {
        assert_eq!(alternate.at(index)[0], if index[0] % 2 == 0 { index[0] / 2 } else { index[0] });
    }
}

#[test]
fn replace_with_ragged_region() {
    let source = make_array(|i: Index<1>| i[0], [5]);
    let patch = make_array(|i: Index<1>| 100 + i[0], [2]) | to_unique();
    let replaced = (source | replace(access_pattern([5]).with_jumps([2]), patch)).unwrap();
    assert_eq!(replaced.values().collect::<Vec<_>>(), [100, 1, 101, 3, 4]);
}

#[test]
fn mapping() {
    let a = index_array([10]) | map(|i: Index<1>| i[0] as f64 * 2.0);
    for index in a.indexes() {
        assert_eq!(a.at(index), index[0] as f64 * 2.0);
    }
    let b = shared_array([10], 0.0) | map(|_: f64| 2.0);
    assert!(b.values().all(|x| x == 2.0));
}

#[test]
fn selection() {
    let a1 = index_array([10]);
    let a2 = (a1 | select(access_pattern([5]))).unwrap();
    let a3 = (a1 | select(access_pattern([10]).with_start([5]))).unwrap();
    assert_eq!(a2.shape(), Shape::new([5]));
    assert_eq!(a3.shape(), Shape::new([5]));
    assert_eq!(a2.at([0]), Index::new([0]));
    assert_eq!(a3.at([0]), Index::new([5]));
    assert!((a1 | select(access_pattern([10]))).is_ok());
    assert!(matches!(a1 | select(access_pattern([11])), Err(Error::OutOfBoundsSelection { .. })));

    let mut m = unique_array([10, 10], 0.0);
    let view = (m.to_shared() | select(access_pattern([5, 5]))).unwrap();
    m[[0, 0]] = 1.0;
    assert_eq!(m[[0, 0]], 1.0);
    assert_eq!(view[[0, 0]], 0.0);
    assert_eq!(view.shape(), Shape::new([5, 5]));
}

#[test]
fn axis_selection() {
    let a = index_array([10, 10]);
    assert_eq!((a | select_axis(0).from(2).to(8)).unwrap().shape(), Shape::new([6, 10]));
    assert_eq!((a | select_axis(1).from(2).to(8)).unwrap().shape(), Shape::new([10, 6]));
    let b = (a | select_axis(0).from(2).to(2).from_the_end()).unwrap();
    assert_eq!(b.shape(), Shape::new([6, 10]));
    assert_eq!(b | read_index([0, 0]), Index::new([2, 0]));
    let c = (a | select_axis(1).from(2).to(2).from_the_end()).unwrap();
    assert_eq!(c.shape(), Shape::new([10, 6]));
    assert_eq!(c | read_index([0, 0]), Index::new([0, 2]));
}

#[test]
fn freezing() {
    let a = index_array([10, 10]);
    let row = (a | freeze_axis(0).at_index(5)).unwrap();
    assert_eq!(row.shape(), Shape::new([10]));
    assert_eq!(row.at([0]), Index::new([5, 0]));
    assert_eq!(row.at([5]), Index::new([5, 5]));
    let column = (a | freeze_axis(1).at_index(5)).unwrap();
    assert_eq!(column.at([0]), Index::new([0, 5]));
    assert_eq!(column.at([5]), Index::new([5, 5]));
}

#[test]
fn binary_operations() {
    let a = ones::<f64, 2>([10, 10]);
    let b = ones::<f64, 2>([10, 10]);
    let wide = ones::<f64, 2>([10, 11]);
    let c = binary_op(a, b, |x: f64, y: f64| x + y).unwrap();
    assert_eq!(c.at([0, 0]), 2.0);
    assert!(binary_op(a, wide, |x: f64, y: f64| x + y).is_err());
    assert!((a + wide).is_err());

    assert_eq!((a + b).unwrap().at([0, 0]), 2.0);
    assert_eq!((c + 2.0).unwrap().at([0, 0]), 4.0);
    assert_eq!((c - 2.0).unwrap().at([0, 0]), 0.0);
    assert_eq!((c * 2.0).unwrap().at([0, 0]), 4.0);
    assert_eq!((c / 2.0).unwrap().at([0, 0]), 1.0);
}

#[test]
fn reductions() {
    assert_eq!(ones::<i32, 3>([10, 20, 40]) | read_index([2, 3, 4]), 1);
    assert_eq!(index_array([3]) | map(|i: Index<1>| i[0]) | sum(), 3);
    assert_eq!(ones::<i32, 2>([10, 10]) | sum(), 100);

    let same = ones::<i32, 2>([10, 10]).equal(ones::<i32, 2>([10, 10])).unwrap();
    assert_eq!(same | sum(), 100);
    assert!(same | all());
    assert!(ones::<f64, 2>([10, 10]).not_equal(zeros::<f64, 2>([10, 10])).unwrap() | all());
    assert!(!(ones::<f64, 2>([10, 10]).equal(zeros::<f64, 2>([10, 10])).unwrap() | any()));
}

#[test]
fn where_and_read_indexes() {
    let a = index_array([10]) | map(|i: Index<1>| i[0]);
    let small = a.lt(5usize).unwrap();
    let found = indexes_where(small);
    assert_eq!(found.size(), 5);
    assert_eq!(found.data(), (0..5).map(|k| Index::new([k])).collect::<Vec<_>>());
    let picked = a | read_indexes(found);
    assert!(picked.lt(5usize).unwrap() | all());
}

#[test]
fn collect_each_axis() {
    let a = ones::<usize, 3>([10, 20, 30]);
    assert_eq!((a | collect(sum()).along_axis(0)).unwrap() | read_index([0, 0]), 10);
    assert_eq!((a | collect(sum()).along_axis(1)).unwrap() | read_index([0, 0]), 20);
    assert_eq!((a | collect(sum()).along_axis(2)).unwrap() | read_index([0, 0]), 30);
}

#[test]
fn concatenation() {
    let joined = (ones::<i32, 3>([10, 10, 20]) | concat(zeros([10, 10, 30])).on_axis(2)).unwrap();
    assert_eq!(joined | read_index([0, 0, 19]), 1);
    assert_eq!(joined | read_index([0, 0, 20]), 0);
    assert!((ones::<i32, 3>([10, 10, 20]) | concat(zeros([10, 11, 30])).on_axis(2)).is_err());
}

#[test]
fn cartesian() {
    let a = cartesian_product((ones::<i32, 1>([10]), zeros::<i32, 1>([20])));
    assert_eq!(a.shape(), Shape::new([10, 20]));
    assert_eq!(a.at([0, 0]), (1, 0));
}

#[test]
fn shifting() {
    let a = index_array([10, 10]);
    assert_eq!((a | shift_by(2).along_axis(0)).unwrap().shape(), Shape::new([8, 10]));
    assert_eq!((a | shift_by(2).along_axis(1)).unwrap().shape(), Shape::new([10, 8]));
    assert_eq!((a | shift_by(-2).along_axis(0)).unwrap().shape(), Shape::new([8, 10]));
    assert_eq!((a | shift_by(-2).along_axis(1)).unwrap().shape(), Shape::new([10, 8]));
    assert_eq!((a | shift_by(-2).along_axis(0)).unwrap() | read_index([0, 0]), Index::new([2, 0]));
    assert_eq!((a | shift_by(-2).along_axis(1)).unwrap() | read_index([0, 0]), Index::new([0, 2]));
    assert_eq!((a | shift_by(2).along_axis(0)).unwrap() | read_index([2, 0]), Index::new([0, 0]));
    assert_eq!((a | shift_by(2).along_axis(1)).unwrap() | read_index([0, 2]), Index::new([0, 0]));
    assert!(matches!(a | shift_by(1).along_axis(2), Err(Error::AxisOutOfRange { .. })));
}

#[test]
fn divvied_ranges() {
    assert_eq!((arange(10) | divvy(10)).size(), 10);
    assert_eq!((arange(100) | divvy(4)).size(), 4);
    let groups = arange(100) | divvy(3);
    assert_eq!(groups.size(), 3);
    let mut n = 0;
    for group in groups.values() {
        for item in group.values() {
            assert_eq!(item, n);
            n += 1;
        }
    }
    assert_eq!(n, 100);
}

#[test]
fn materialize() {
    let a = make_array(|i: Index<2>| i[0] * 3 + i[1], [2, 3]);
    let u = a | to_unique();
    assert_eq!(u.data(), [0, 1, 2, 3, 4, 5]);
    let s = u.into_shared();
    assert_eq!(s.shape(), a.shape());
}
