use mastermind::{is_valid_code, CodeError, Feedback, SecretCode};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_valid_codes() {
    assert!(is_valid_code("0123"));
    assert!(is_valid_code("8765"));
    assert!(is_valid_code("5081"));
}

#[test]
fn test_invalid_codes() {
    assert!(!is_valid_code(""));
    assert!(!is_valid_code("012"));
    assert!(!is_valid_code("01234"));
    assert!(!is_valid_code("0011"));
    assert!(!is_valid_code("0129"));
    assert!(!is_valid_code("01a3"));
    assert!(!is_valid_code(" 0123"));
    assert!(!is_valid_code("-123"));
}

#[test]
fn test_parse_reports_first_broken_rule() {
    assert_eq!(SecretCode::parse("12"), Err(CodeError::WrongLength(2)));
    assert_eq!(SecretCode::parse("1239"), Err(CodeError::DigitOutOfRange('9')));
    assert_eq!(SecretCode::parse("1213"), Err(CodeError::RepeatedDigit('1')));
    // Length counts characters, not bytes.
    assert_eq!(SecretCode::parse("12é"), Err(CodeError::WrongLength(3)));
}

#[test]
fn test_from_str_and_display() {
    let code: SecretCode = "4031".parse().unwrap();
    assert_eq!(code.digits(), [4, 0, 3, 1]);
    assert_eq!(code.to_string(), "4031");
}

#[test]
fn test_score_two_swapped() {
    let secret = SecretCode::parse("1234").unwrap();
    let guess = SecretCode::parse("1243").unwrap();
    assert_eq!(
        secret.score(&guess),
        Feedback {
            well_placed: 2,
            misplaced: 2
        }
    );
}

#[test]
fn test_score_disjoint_and_partial() {
    let secret = SecretCode::parse("0123").unwrap();
    let none = SecretCode::parse("4567").unwrap();
    assert_eq!(secret.score(&none), Feedback::default());

    let rotated = SecretCode::parse("3012").unwrap();
    let feedback = secret.score(&rotated);
    assert_eq!(feedback.well_placed, 0);
    assert_eq!(feedback.misplaced, 4);

    let mixed = SecretCode::parse("0813").unwrap();
    let feedback = secret.score(&mixed);
    assert_eq!(feedback.well_placed, 2);
    assert_eq!(feedback.misplaced, 1);
    assert!(!feedback.is_solved());
}

#[test]
fn test_random_code_digits_are_distinct_and_in_pool() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        let digits = SecretCode::random(&mut rng).digits();
        for (i, d) in digits.iter().enumerate() {
            assert!(*d <= 8);
            assert!(!digits[i + 1..].contains(d));
        }
    }
}

#[test]
fn test_random_codes_cover_every_digit() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut seen = [false; 9];
    for _ in 0..100 {
        for d in SecretCode::random(&mut rng).digits() {
            seen[d as usize] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
}
