mod common;

use common::digits::load_pi_digits;
use pi_randomness::{
    simulation::{
        simulate_banach_matchbox, simulate_birthdays, simulate_consecutive_runs,
        simulate_coupon_collector, simulate_sum,
    },
    transition,
    utils::logging,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_bundled_digits_load() {
    logging::init_logging();
    let digits = load_pi_digits();
    assert_eq!(digits.len(), 10_001);
    assert_eq!(&digits.as_slice()[..10], &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3]);
}

/// Tests every digit of pi precedes another, so the whole matrix is row-stochastic
#[test]
fn test_transition_matrix_of_pi() {
    let digits = load_pi_digits();
    let matrix = transition::estimate(&digits);
    for from in 0..10 {
        assert!(matrix.is_observed(from), "digit {} should precede another digit", from);
        assert!((matrix.row_sum(from) - 1.0).abs() < 1e-9);
        for to in 0..10 {
            let p = matrix.get(from, to);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}

#[test]
fn test_sum_of_pi_digits() {
    let digits = load_pi_digits();
    let mut rng = StdRng::seed_from_u64(42);
    let result = simulate_sum(&digits, &mut rng, 1000, 10).unwrap();
    assert!(result.mean > 4300.0 && result.mean < 4700.0, "mean was {}", result.mean);
    assert!(result.variance > 0.0);
}

#[test]
fn test_coupon_collector_on_pi() {
    let digits = load_pi_digits();
    let mut rng = StdRng::seed_from_u64(43);
    let result = simulate_coupon_collector(&digits, &mut rng, 200).unwrap();
    assert!(result.mean > 22.0 && result.mean < 38.0, "mean was {}", result.mean);
    assert!(result.variance > 0.0);
}

#[test]
fn test_birthdays_on_pi() {
    let digits = load_pi_digits();
    let mut rng = StdRng::seed_from_u64(44);
    let result = simulate_birthdays(&digits, &mut rng, 3, 5).unwrap();
    assert!(result.mean > 1400.0 && result.mean < 2000.0, "mean was {}", result.mean);
    assert!(result.variance >= 0.0);
}

#[test]
fn test_banach_matchbox_on_pi() {
    let digits = load_pi_digits();
    let mut rng = StdRng::seed_from_u64(45);
    let result = simulate_banach_matchbox(&digits, &mut rng, 30, 1000).unwrap();
    assert!(result.mean > 4.0 && result.mean < 9.0, "mean was {}", result.mean);
    assert!(result.variance > 0.0);
}

/// Runs of pi are deterministic, so the result is fixed
#[test]
fn test_consecutive_runs_on_pi() {
    let digits = load_pi_digits();
    let result = simulate_consecutive_runs(&digits).unwrap();
    assert!((result.mean - 1.1043622308117063).abs() < 1e-9, "mean was {}", result.mean);
    assert!((result.variance - 0.1159997451002692).abs() < 1e-9, "variance was {}", result.variance);
}
