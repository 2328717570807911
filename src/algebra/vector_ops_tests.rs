use crate::error::MatrizError;
use crate::primitives::Vector;

fn pair() -> (Vector, Vector) {
    let a = Vector::from_slice(&[4.0, 3.0]).expect("slice is non-empty");
    let b = Vector::from_slice(&[1.0, 2.0]).expect("slice is non-empty");
    (a, b)
}

#[test]
fn test_add() {
    let (a, b) = pair();
    let sum = a.add(&b).expect("lengths match, all slots filled");
    assert_eq!(sum.get(0).expect("slot is filled"), 5.0);
    assert_eq!(sum.get(1).expect("slot is filled"), 5.0);
}

#[test]
fn test_sub() {
    let (a, b) = pair();
    let diff = a.sub(&b).expect("lengths match, all slots filled");
    assert_eq!(diff.get(0).expect("slot is filled"), 3.0);
    assert_eq!(diff.get(1).expect("slot is filled"), 1.0);
}

#[test]
fn test_dot() {
    let (a, b) = pair();
    // 4*1 + 3*2 = 10
    assert_eq!(a.dot(&b).expect("lengths match"), 10.0);
}

#[test]
fn test_hadamard() {
    let (a, b) = pair();
    let prod = a.hadamard(&b).expect("lengths match");
    assert_eq!(prod.get(0).expect("slot is filled"), 4.0);
    assert_eq!(prod.get(1).expect("slot is filled"), 6.0);
}

#[test]
fn test_mul_scalar() {
    let (a, _) = pair();
    let scaled = a.mul_scalar(4.5).expect("all slots filled");
    assert_eq!(scaled.get(0).expect("slot is filled"), 18.0);
    assert_eq!(scaled.get(1).expect("slot is filled"), 13.5);
}

#[test]
fn test_sub_from_scalar() {
    let (a, _) = pair();
    let result = a.sub_from_scalar(10.0).expect("all slots filled");
    assert_eq!(result.get(0).expect("slot is filled"), 6.0);
    assert_eq!(result.get(1).expect("slot is filled"), 7.0);
}

#[test]
fn test_length_mismatch_fails_everywhere() {
    let a = Vector::from_slice(&[1.0, 2.0]).expect("slice is non-empty");
    let b = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("slice is non-empty");
    assert!(a.add(&b).is_err());
    assert!(a.sub(&b).is_err());
    assert!(a.dot(&b).is_err());
    assert!(a.hadamard(&b).is_err());
}

#[test]
fn test_empty_slot_fails_fresh_variants() {
    let a = Vector::from_slice(&[1.0, 2.0]).expect("slice is non-empty");
    let mut b = Vector::new(2).expect("capacity 2 is valid");
    b.set(0, 1.0).expect("index 0 is in bounds");
    // b[1] empty.
    assert_eq!(a.add(&b), Err(MatrizError::EmptySlot { index: 1 }));
    assert_eq!(a.dot(&b), Err(MatrizError::EmptySlot { index: 1 }));
    assert_eq!(b.mul_scalar(2.0), Err(MatrizError::EmptySlot { index: 1 }));
    assert_eq!(
        b.sub_from_scalar(2.0),
        Err(MatrizError::EmptySlot { index: 1 })
    );
}

#[test]
fn test_add_into() {
    let (a, b) = pair();
    let mut dest = Vector::zeros(2).expect("capacity 2 is valid");
    a.add_into(&b, &mut dest).expect("lengths match");
    assert_eq!(dest.get(0).expect("slot is filled"), 5.0);
    assert_eq!(dest.get(1).expect("slot is filled"), 5.0);
}

#[test]
fn test_sub_into() {
    let (a, b) = pair();
    let mut dest = Vector::zeros(2).expect("capacity 2 is valid");
    a.sub_into(&b, &mut dest).expect("lengths match");
    assert_eq!(dest.get(0).expect("slot is filled"), 3.0);
    assert_eq!(dest.get(1).expect("slot is filled"), 1.0);
}

#[test]
fn test_mul_scalar_into() {
    let (a, _) = pair();
    let mut dest = Vector::zeros(2).expect("capacity 2 is valid");
    a.mul_scalar_into(4.5, &mut dest).expect("lengths match");
    assert_eq!(dest.get(0).expect("slot is filled"), 18.0);
    assert_eq!(dest.get(1).expect("slot is filled"), 13.5);
}

#[test]
fn test_into_variants_reject_wrong_dest_length() {
    let (a, b) = pair();
    let mut dest = Vector::zeros(3).expect("capacity 3 is valid");
    assert!(a.add_into(&b, &mut dest).is_err());
    assert!(a.sub_into(&b, &mut dest).is_err());
    assert!(a.mul_scalar_into(2.0, &mut dest).is_err());
}

#[test]
fn test_add_into_partial_update_on_failure() {
    let a = Vector::from_slice(&[1.0, 2.0]).expect("slice is non-empty");
    let mut b = Vector::new(2).expect("capacity 2 is valid");
    b.set(0, 10.0).expect("index 0 is in bounds");
    // b[1] empty: the loop fails at i=1 after writing dest[0].
    let mut dest = Vector::zeros(2).expect("capacity 2 is valid");
    assert_eq!(
        a.add_into(&b, &mut dest),
        Err(MatrizError::EmptySlot { index: 1 })
    );
    assert_eq!(dest.get(0).expect("slot was written before failure"), 11.0);
    assert_eq!(dest.get(1).expect("slot untouched"), 0.0);
}

#[test]
fn test_dot_accumulates_left_to_right() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]).expect("slice is non-empty");
    let b = Vector::from_slice(&[5.0, 6.0, 7.0, 8.0]).expect("slice is non-empty");
    let expected = 1.0 * 5.0 + 2.0 * 6.0 + 3.0 * 7.0 + 4.0 * 8.0;
    assert_eq!(a.dot(&b).expect("lengths match"), expected);
}
