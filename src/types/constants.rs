/// Number of distinct decimal digits
pub const DIGIT_RADIX: usize = 10;

/// Digits at or above this value take a match from the second box
pub const MATCHBOX_SPLIT_DIGIT: u8 = 5;

/// How many times the birthday scan may sweep the sequence, measured in
/// groups. A trial reads group starts `j < len * group_len * BIRTHDAY_SCAN_PASSES`.
pub const BIRTHDAY_SCAN_PASSES: usize = 1;

// Default run parameters
pub const DEFAULT_SUM_DRAWS: usize = 1000;
pub const DEFAULT_SUM_TRIALS: usize = 10;
pub const DEFAULT_COUPON_TRIALS: usize = 100;
pub const DEFAULT_BIRTHDAY_GROUP_LEN: usize = 3;
pub const DEFAULT_BIRTHDAY_TRIALS: usize = 100;
pub const DEFAULT_MATCHBOX_MATCHES: u32 = 30;
pub const DEFAULT_MATCHBOX_TRIALS: usize = 1000;

/// Digit file bundled with the simulator
pub const DEFAULT_DIGITS_PATH: &str = "simulator/data/pi_digits.txt";
