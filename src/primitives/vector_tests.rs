pub(crate) use super::*;

#[test]
fn test_from_slice() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
    assert!((v[0] - 1.0).abs() < 1e-6);
    assert!((v[2] - 3.0).abs() < 1e-6);
}

#[test]
fn test_from_vec() {
    let v = Vector::from_vec(vec![4.0_f32, 5.0]);
    assert_eq!(v.len(), 2);
    assert!((v[1] - 5.0).abs() < 1e-6);
}

#[test]
fn test_zeros() {
    let v = Vector::zeros(4);
    assert_eq!(v.len(), 4);
    assert!(v.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_dot() {
    let u = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0_f32, 5.0, 6.0]);
    assert!((u.dot(&v) - 32.0).abs() < 1e-6);
}

#[test]
fn test_dot_commutative() {
    let u = Vector::from_slice(&[1.0_f32, -2.0, 0.5]);
    let v = Vector::from_slice(&[3.0_f32, 1.0, -4.0]);
    assert!((u.dot(&v) - v.dot(&u)).abs() < 1e-6);
}

#[test]
#[should_panic(expected = "same length")]
fn test_dot_length_mismatch_panics() {
    let u = Vector::from_slice(&[1.0_f32, 2.0]);
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    let _ = u.dot(&v);
}

#[test]
fn test_norm() {
    let v = Vector::from_slice(&[-3.0_f32, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-5);
}

#[test]
fn test_sum_and_mean() {
    let v = Vector::from_slice(&[2.0_f32, 4.0, 6.0, 8.0, 10.0]);
    assert!((v.sum() - 30.0).abs() < 1e-6);
    assert!((v.mean() - 6.0).abs() < 1e-6);
}

#[test]
fn test_mean_empty() {
    let v = Vector::<f32>::from_slice(&[]);
    assert!(v.is_empty());
    assert!((v.mean() - 0.0).abs() < 1e-6);
}

#[test]
fn test_iter() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    let collected: Vec<f32> = v.iter().copied().collect();
    assert_eq!(collected, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0_f32, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0_f32, 0.0, -1.0, 2.0]);
    assert!(u.dot(&v).abs() <= u.norm() * v.norm() + 1e-5);
}
