use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_all_slots_empty() {
    let v = Vector::new(4).expect("capacity 4 is valid");
    assert_eq!(v.capacity(), 4);
    for i in 0..4 {
        assert!(v.is_empty_slot(i));
        assert_eq!(v.get(i), Err(MatrizError::EmptySlot { index: i }));
    }
}

#[test]
fn test_new_zero_capacity_fails() {
    assert_eq!(
        Vector::new(0),
        Err(MatrizError::InvalidCapacity { capacity: 0 })
    );
}

#[test]
fn test_with_value_and_zeros() {
    let v = Vector::with_value(3, 7.5).expect("capacity 3 is valid");
    for i in 0..3 {
        assert_eq!(v.get(i).expect("slot is filled"), 7.5);
    }
    let z = Vector::zeros(3).expect("capacity 3 is valid");
    for i in 0..3 {
        assert_eq!(z.get(i).expect("slot is filled"), 0.0);
    }
}

#[test]
fn test_random_within_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let v = Vector::random(32, -1.0, 1.0, &mut rng).expect("capacity 32 is valid");
    for i in 0..32 {
        let value = v.get(i).expect("slot is filled");
        assert!((-1.0..=1.0).contains(&value));
    }
}

#[test]
fn test_random_deterministic_with_same_seed() {
    let mut rng1 = StdRng::seed_from_u64(7);
    let mut rng2 = StdRng::seed_from_u64(7);
    let a = Vector::random(8, 0.0, 10.0, &mut rng1).expect("capacity 8 is valid");
    let b = Vector::random(8, 0.0, 10.0, &mut rng2).expect("capacity 8 is valid");
    assert_eq!(a, b);
}

#[test]
fn test_set_get_roundtrip() {
    let mut v = Vector::new(2).expect("capacity 2 is valid");
    assert_eq!(v.set(0, 4.0).expect("index 0 is in bounds"), 4.0);
    assert_eq!(v.set(1, 3.0).expect("index 1 is in bounds"), 3.0);
    assert_eq!(v.get(0).expect("slot is filled"), 4.0);
    assert_eq!(v.get(1).expect("slot is filled"), 3.0);
}

#[test]
fn test_set_replaces_previous_element() {
    let mut v = Vector::new(1).expect("capacity 1 is valid");
    v.set(0, 1.0).expect("index 0 is in bounds");
    v.set(0, 2.0).expect("index 0 is in bounds");
    assert_eq!(v.get(0).expect("slot is filled"), 2.0);
}

#[test]
fn test_set_out_of_bounds() {
    let mut v = Vector::new(2).expect("capacity 2 is valid");
    assert_eq!(
        v.set(2, 1.0),
        Err(MatrizError::IndexOutOfBounds {
            index: 2,
            capacity: 2
        })
    );
}

#[test]
fn test_get_out_of_bounds_vs_empty_slot() {
    let v = Vector::new(2).expect("capacity 2 is valid");
    assert_eq!(
        v.get(5),
        Err(MatrizError::IndexOutOfBounds {
            index: 5,
            capacity: 2
        })
    );
    assert_eq!(v.get(1), Err(MatrizError::EmptySlot { index: 1 }));
}

#[test]
fn test_element_key_tracks_slot_position() {
    let mut v = Vector::new(3).expect("capacity 3 is valid");
    v.set(2, 9.0).expect("index 2 is in bounds");
    let element = v.items[2].expect("slot 2 is filled");
    assert_eq!(element.key(), 2);
}

#[test]
fn test_from_slice() {
    let v = Vector::from_slice(&[4.0, 3.0]).expect("slice is non-empty");
    assert_eq!(v.len(), 2);
    assert_eq!(v.get(0).expect("slot is filled"), 4.0);
    assert_eq!(v.get(1).expect("slot is filled"), 3.0);
}

#[test]
fn test_from_slice_empty_fails() {
    assert!(Vector::from_slice(&[]).is_err());
}

#[test]
fn test_fill() {
    let mut v = Vector::new(3).expect("capacity 3 is valid");
    v.fill(2.5);
    for i in 0..3 {
        assert_eq!(v.get(i).expect("slot is filled"), 2.5);
    }
}

#[test]
fn test_concatenate() {
    let a = Vector::from_slice(&[4.0, 3.0]).expect("slice is non-empty");
    let b = Vector::from_slice(&[1.0, 2.0]).expect("slice is non-empty");
    let c = a.concatenate(&b).expect("both vectors fully populated");
    assert_eq!(c.len(), 4);
    for (i, expected) in [4.0, 3.0, 1.0, 2.0].iter().enumerate() {
        assert_eq!(c.get(i).expect("slot is filled"), *expected);
    }
}

#[test]
fn test_concatenate_empty_slot_fails() {
    let a = Vector::from_slice(&[4.0, 3.0]).expect("slice is non-empty");
    let mut b = Vector::new(2).expect("capacity 2 is valid");
    b.set(0, 1.0).expect("index 0 is in bounds");
    // b[1] never set.
    assert_eq!(
        a.concatenate(&b),
        Err(MatrizError::EmptySlot { index: 1 })
    );
}

#[test]
fn test_clone_is_independent_deep_copy() {
    let mut a = Vector::new(3).expect("capacity 3 is valid");
    a.set(0, 1.0).expect("index 0 is in bounds");
    // a[1] stays empty, a[2] filled.
    a.set(2, 3.0).expect("index 2 is in bounds");

    let mut b = a.clone();
    assert_eq!(a, b);
    assert!(b.is_empty_slot(1));

    b.set(0, 99.0).expect("index 0 is in bounds");
    assert_eq!(a.get(0).expect("slot is filled"), 1.0);
}

#[test]
fn test_copy_from_equal_capacity() {
    let src = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("slice is non-empty");
    let mut dest = Vector::zeros(3).expect("capacity 3 is valid");
    dest.copy_from(&src).expect("capacities match");
    for i in 0..3 {
        assert_eq!(dest.get(i).expect("slot is filled"), src.get(i).expect("slot is filled"));
    }
}

#[test]
fn test_copy_from_larger_dest_leaves_tail_untouched() {
    let src = Vector::from_slice(&[1.0, 2.0]).expect("slice is non-empty");
    let mut dest = Vector::with_value(4, 9.0).expect("capacity 4 is valid");
    dest.copy_from(&src).expect("dest is larger than src");
    assert_eq!(dest.get(0).expect("slot is filled"), 1.0);
    assert_eq!(dest.get(1).expect("slot is filled"), 2.0);
    assert_eq!(dest.get(2).expect("slot untouched"), 9.0);
    assert_eq!(dest.get(3).expect("slot untouched"), 9.0);
}

#[test]
fn test_copy_from_smaller_dest_fails() {
    let src = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("slice is non-empty");
    let mut dest = Vector::new(2).expect("capacity 2 is valid");
    assert!(dest.copy_from(&src).is_err());
}

#[test]
fn test_copy_from_propagates_empty_slots() {
    let mut src = Vector::new(2).expect("capacity 2 is valid");
    src.set(0, 5.0).expect("index 0 is in bounds");
    let mut dest = Vector::with_value(2, 1.0).expect("capacity 2 is valid");
    dest.copy_from(&src).expect("capacities match");
    assert_eq!(dest.get(0).expect("slot is filled"), 5.0);
    assert!(dest.is_empty_slot(1));
}

#[test]
fn test_walk_transforms_in_index_order() {
    let mut v = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("slice is non-empty");
    v.walk(|x| x * 2.0).expect("all slots filled");
    for (i, expected) in [2.0, 4.0, 6.0].iter().enumerate() {
        assert_eq!(v.get(i).expect("slot is filled"), *expected);
    }
}

#[test]
fn test_walk_stops_at_first_empty_slot_leaving_prefix_transformed() {
    let mut v = Vector::new(3).expect("capacity 3 is valid");
    v.set(0, 1.0).expect("index 0 is in bounds");
    // v[1] empty on purpose.
    v.set(2, 3.0).expect("index 2 is in bounds");

    assert_eq!(
        v.walk(|x| x * 2.0),
        Err(MatrizError::EmptySlot { index: 1 })
    );
    // Slot 0 was transformed before the failure; slot 2 was not reached.
    assert_eq!(v.get(0).expect("slot is filled"), 2.0);
    assert_eq!(v.get(2).expect("slot is filled"), 3.0);
}
