use calculator::{add, divide, error::RuntimeError, multiply, sqrt, subtract};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[test]
fn add_is_commutative() {
    let pairs = [(1.0, 2.0), (-3.5, 0.25), (1e6, -1e-3), (0.0, -0.0)];
    for (a, b) in pairs {
        assert_eq!(add(&[a, b]), add(&[b, a]), "add({a}, {b})");
    }
}

#[test]
fn add_is_associative() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let [a, b, c] = [0; 3].map(|_| f64::from(rng.random_range(-1_000_000..=1_000_000_i32)));
        assert_eq!(add(&[add(&[a, b]), c]),
                   add(&[a, add(&[b, c])]),
                   "add({a}, {b}, {c})");
    }
}

#[test]
fn subtract_cases() {
    let cases: [(&[f64], f64); 5] = [(&[], 0.0),
                                     (&[100.0], 100.0),
                                     (&[1.0, 1.0, 1.0], -1.0),
                                     (&[5.0, 1.0, 1.0], 3.0),
                                     (&[-1.0, -1.0, -1.0, -1.0], 2.0)];
    for (inputs, want) in cases {
        assert_eq!(subtract(inputs), want, "subtract({inputs:?})");
    }
}

#[test]
fn multiply_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let count = rng.random_range(1..10);
        let inputs: Vec<f64> = (0..count).map(|_| f64::from(rng.random_range(1..=10_u8)))
                                         .collect();
        let want = inputs.iter().product::<f64>();
        assert_eq!(multiply(&inputs), want, "multiply({inputs:?})");
    }
}

#[test]
fn multiply_of_nothing_is_zero_not_one() {
    // An empty fold would normally give the identity 1.0.
    assert_eq!(multiply(&[]), 0.0);
    assert_ne!(multiply(&[]), [0.0_f64; 0].iter().product::<f64>());
}

#[test]
fn divide_cases() {
    let cases: [(&[f64], f64); 7] = [(&[], 0.0),
                                     (&[2.0], 2.0),
                                     (&[4.0, 2.0], 2.0),
                                     (&[-4.0, -2.0], 2.0),
                                     (&[-4.0, 2.0, 1.0], -2.0),
                                     (&[0.0, 1.0], 0.0),
                                     (&[2.0, 4.0], 0.5)];
    for (inputs, want) in cases {
        assert_eq!(divide(inputs), Ok(want), "divide({inputs:?})");
    }
}

#[test]
fn divide_by_any_zero_divisor_fails() {
    assert_eq!(divide(&[4.0, 0.0, 1.0]), Err(RuntimeError::DivisionByZero { index: 1 }));
    assert_eq!(divide(&[4.0, 1.0, 0.0]), Err(RuntimeError::DivisionByZero { index: 2 }));
    assert!(divide(&[0.0, 0.0]).is_err());
}

#[test]
fn sqrt_cases() {
    assert_eq!(sqrt(4.0), Ok(2.0));
    assert_eq!(sqrt(0.25), Ok(0.5));
    for x in [-4.0, -0.25, f64::NEG_INFINITY] {
        assert!(matches!(sqrt(x), Err(RuntimeError::InvalidArgument { .. })), "sqrt({x})");
    }
}
