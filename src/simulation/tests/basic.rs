use crate::{
    digits::DigitSequence,
    simulation::{simulate_banach_matchbox, simulate_consecutive_runs, simulate_sum, SimulationError},
    statistics::StatisticsError,
    types::{ResultPair, SimulationKind},
    utils::logging,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Helper function to build a sequence from literal digits
fn sequence(digits: &[u8]) -> DigitSequence {
    DigitSequence::from_digits(digits.to_vec()).expect("Failed to build digit sequence")
}

/// Tests the sum over a single-valued source:
/// - One draw, one trial gives the digit itself with zero variance
/// - More draws scale the sum, variance stays zero
#[test]
fn test_sum_single_valued_source() {
    logging::init_logging();
    let mut rng = StdRng::seed_from_u64(1);

    let zero = simulate_sum(&sequence(&[0]), &mut rng, 1, 1).unwrap();
    assert_eq!(zero, ResultPair::new(0.0, 0.0));

    let seven = simulate_sum(&sequence(&[7]), &mut rng, 1, 1).unwrap();
    assert_eq!(seven, ResultPair::new(7.0, 0.0));

    let repeated = simulate_sum(&sequence(&[7, 7, 7]), &mut rng, 4, 25).unwrap();
    assert_eq!(repeated, ResultPair::new(28.0, 0.0));
}

#[test]
fn test_sum_stays_within_bounds() {
    let digits = sequence(&[0, 9]);
    let mut rng = StdRng::seed_from_u64(2);
    let result = simulate_sum(&digits, &mut rng, 10, 200).unwrap();
    assert!(result.mean > 0.0 && result.mean < 90.0);
    assert!(result.variance > 0.0);
}

#[test]
fn test_sum_without_trials_is_empty() {
    let mut rng = StdRng::seed_from_u64(3);
    let err = simulate_sum(&sequence(&[1]), &mut rng, 5, 0).unwrap_err();
    assert!(matches!(err, SimulationError::Statistics(StatisticsError::EmptySample)));
}

#[test]
fn test_sum_on_empty_sequence() {
    let mut rng = StdRng::seed_from_u64(4);
    let err = simulate_sum(&DigitSequence::default(), &mut rng, 5, 5).unwrap_err();
    assert!(matches!(err, SimulationError::EmptySequence(SimulationKind::Sum)));
}

/// Tests Banach's matchbox when every digit is 5 or more:
/// - The second box empties on the first draw
/// - The first box still holds its single match
#[test]
fn test_matchbox_all_high_digits() {
    let digits = sequence(&[5, 7, 9]);
    let mut rng = StdRng::seed_from_u64(5);
    let result = simulate_banach_matchbox(&digits, &mut rng, 1, 1).unwrap();
    assert_eq!(result, ResultPair::new(1.0, 0.0));

    let result = simulate_banach_matchbox(&digits, &mut rng, 30, 50).unwrap();
    assert_eq!(result, ResultPair::new(30.0, 0.0));
}

#[test]
fn test_matchbox_all_low_digits() {
    let digits = sequence(&[0, 4]);
    let mut rng = StdRng::seed_from_u64(6);
    let result = simulate_banach_matchbox(&digits, &mut rng, 3, 10).unwrap();
    assert_eq!(result, ResultPair::new(3.0, 0.0));
}

#[test]
fn test_matchbox_remainder_is_bounded() {
    let digits = sequence(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let mut rng = StdRng::seed_from_u64(7);
    let result = simulate_banach_matchbox(&digits, &mut rng, 20, 500).unwrap();
    assert!(result.mean >= 1.0 && result.mean <= 20.0);
    assert!(result.variance >= 0.0);
}

#[test]
fn test_matchbox_with_empty_boxes() {
    let mut rng = StdRng::seed_from_u64(8);
    let result = simulate_banach_matchbox(&sequence(&[3]), &mut rng, 0, 4).unwrap();
    assert_eq!(result, ResultPair::new(0.0, 0.0));
}

/// Tests run lengths drop the run still open at the end
#[test]
fn test_consecutive_runs() {
    let result = simulate_consecutive_runs(&sequence(&[1, 1, 1, 2, 2, 3])).unwrap();
    assert_eq!(result, ResultPair::new(2.5, 0.25));
}

#[test]
fn test_consecutive_runs_without_breaks() {
    for digits in [sequence(&[4, 4, 4, 4]), sequence(&[4]), DigitSequence::default()] {
        let err = simulate_consecutive_runs(&digits).unwrap_err();
        assert!(matches!(err, SimulationError::Statistics(StatisticsError::EmptySample)));
    }
}

#[test]
fn test_consecutive_runs_all_distinct() {
    let result = simulate_consecutive_runs(&sequence(&[1, 2, 3, 4])).unwrap();
    assert_eq!(result, ResultPair::new(1.0, 0.0));
}
