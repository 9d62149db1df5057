use mastermind::{
    Configuration, Feedback, GameEngine, GameError, GameStatus, SecretCode, Turn,
};
use rand::{rngs::SmallRng, SeedableRng};

fn code(s: &str) -> SecretCode {
    SecretCode::parse(s).unwrap()
}

#[test]
fn test_correct_guess_wins_without_using_attempt() {
    let mut engine = GameEngine::new(code("1234"), 3);
    assert_eq!(engine.submit(&code("1234")), Ok(Turn::Won));
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.attempts_used(), 0);
}

#[test]
fn test_wrong_guess_gives_feedback_and_uses_attempt() {
    let mut engine = GameEngine::new(code("1234"), 3);
    assert_eq!(
        engine.submit(&code("1243")),
        Ok(Turn::Feedback(Feedback {
            well_placed: 2,
            misplaced: 2
        }))
    );
    assert_eq!(engine.attempts_used(), 1);
    assert_eq!(engine.attempts_remaining(), 2);
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_single_attempt_loses_without_feedback() {
    let mut engine = GameEngine::new(code("1234"), 1);
    assert_eq!(engine.submit(&code("5678")), Ok(Turn::Lost));
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn test_last_attempt_can_still_win() {
    let mut engine = GameEngine::new(code("0123"), 2);
    assert!(matches!(engine.submit(&code("4567")), Ok(Turn::Feedback(_))));
    assert_eq!(engine.submit(&code("0123")), Ok(Turn::Won));
}

#[test]
fn test_submit_after_game_over_is_error() {
    let mut engine = GameEngine::new(code("0123"), 1);
    engine.submit(&code("0123")).unwrap();
    assert_eq!(engine.submit(&code("0123")), Err(GameError::GameOver));

    let mut engine = GameEngine::new(code("0123"), 1);
    engine.submit(&code("3210")).unwrap();
    assert_eq!(engine.submit(&code("0123")), Err(GameError::GameOver));
}

#[test]
fn test_zero_limit_is_raised_to_minimum() {
    let engine = GameEngine::new(code("0123"), 0);
    assert_eq!(engine.attempt_limit(), 1);
}

#[test]
fn test_from_configuration_keeps_chosen_code() {
    let config = Configuration {
        secret_code: Some(code("8012")),
        attempt_limit: 7,
    };
    let mut rng = SmallRng::seed_from_u64(1);
    let engine = GameEngine::from_configuration(&config, &mut rng);
    assert_eq!(*engine.secret(), code("8012"));
    assert_eq!(engine.attempt_limit(), 7);
}

#[test]
fn test_from_configuration_draws_random_code_from_rng() {
    let config = Configuration::default();
    let a = GameEngine::from_configuration(&config, &mut SmallRng::seed_from_u64(99));
    let b = GameEngine::from_configuration(&config, &mut SmallRng::seed_from_u64(99));
    assert_eq!(a.secret(), b.secret());
    assert_eq!(a.attempt_limit(), 10);
}
