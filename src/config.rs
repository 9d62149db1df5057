/// Number of digits in a secret code and in every guess.
pub const CODE_LENGTH: usize = 4;
/// Highest digit allowed in a code. Digits run from 0 to this value.
pub const MAX_DIGIT: u8 = 8;
/// Digits a random secret is drawn from, in pool order.
pub const DIGIT_POOL: [u8; MAX_DIGIT as usize + 1] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

pub const DEFAULT_ATTEMPTS: u8 = 10;
pub const MIN_ATTEMPTS: u8 = 1;
pub const MAX_ATTEMPTS: u8 = 20;
