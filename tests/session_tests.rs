use bulls_cows::{
    AdvisorMode, Code, EngineError, Feedback, GameConfig, GameSession, GameState, GuessError,
    NUM_CODES,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FULL_ENTROPY: f64 = 12.299208018387;

fn code(digits: [u8; 4]) -> Code {
    Code::new(digits).unwrap()
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn assert_fresh(session: &GameSession) {
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.remaining_count(), NUM_CODES);
    assert_eq!(session.entropy_history().len(), 1);
    assert!((session.entropy_history()[0] - FULL_ENTROPY).abs() < 1e-9);
    assert_eq!(session.state(), GameState::InProgress);
    assert!(session.history().is_empty());
    assert!(session.revealed_secret().is_none());
}

#[test]
fn test_new_session() {
    let session = GameSession::new(GameConfig::default(), &mut rng());
    assert_fresh(&session);
    assert_eq!(session.reduction_history(), &[0.0]);
}

#[test]
fn test_single_guess_outcome() {
    let mut session = GameSession::with_secret(GameConfig::default(), code([1, 3, 2, 5]));
    let outcome = session.submit_guess(&[1, 2, 3, 4], &mut rng()).unwrap();

    assert_eq!(outcome.feedback, Feedback { bulls: 1, cows: 2 });
    assert!(!outcome.won);
    assert_eq!(session.attempts(), 1);
    assert_eq!(outcome.remaining, session.remaining_count());
    assert!(outcome.remaining < NUM_CODES);
    assert!((outcome.entropy - (outcome.remaining as f64).log2()).abs() < 1e-12);

    let reduction = outcome.entropy_reduction.unwrap();
    assert!((reduction - (FULL_ENTROPY - outcome.entropy)).abs() < 1e-9);
    assert!(reduction > 0.0);

    assert_eq!(outcome.suggestions.len(), GameConfig::DEFAULT_SUGGESTIONS);
    assert!(outcome
        .suggestions
        .iter()
        .all(|c| session.candidates().contains(c)));
    assert!(session.candidates().contains(&code([1, 3, 2, 5])));
}

#[test]
fn test_win() {
    let secret = code([9, 0, 4, 7]);
    let mut session = GameSession::with_secret(GameConfig::default(), secret);
    let mut rng = rng();

    session.submit_input("1234", &mut rng).unwrap();
    session.submit_input("5678", &mut rng).unwrap();
    let outcome = session.submit_input("9047", &mut rng).unwrap();

    assert!(outcome.won);
    assert_eq!(outcome.feedback, Feedback::WIN);
    assert!(outcome.suggestions.is_empty());
    assert_eq!(outcome.remaining, 1);
    assert_eq!(outcome.entropy, 0.0);
    assert_eq!(session.attempts(), 3);
    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.revealed_secret(), Some(secret));
    assert!(session.suggestions(&mut rng).is_empty());
}

#[test]
fn test_guess_after_win_is_rejected() {
    let mut session = GameSession::with_secret(GameConfig::default(), code([1, 2, 3, 4]));
    let mut rng = rng();
    session.submit_input("1234", &mut rng).unwrap();

    let err = session.submit_input("5678", &mut rng).unwrap_err();
    assert_eq!(err, EngineError::AlreadyWon { attempts: 1 });
    assert_eq!(session.attempts(), 1);
    assert_eq!(session.entropy_history().len(), 2);
}

#[test]
fn test_invalid_guesses_leave_session_unchanged() {
    let mut session = GameSession::with_secret(GameConfig::default(), code([4, 1, 7, 0]));
    let mut rng = rng();
    session.submit_input("0123", &mut rng).unwrap();

    let attempts = session.attempts();
    let candidates = session.candidates().clone();
    let entropy_history = session.entropy_history().to_vec();
    let reduction_history = session.reduction_history().to_vec();
    let history = session.history().to_vec();

    let cases: Vec<(&str, GuessError)> = vec![
        ("123", GuessError::WrongLength { found: 3 }),
        ("12345", GuessError::WrongLength { found: 5 }),
        (
            "12x4",
            GuessError::NonDigitCharacter {
                position: 2,
                symbol: "x".to_string(),
            },
        ),
        ("1224", GuessError::DuplicateDigit { digit: 2 }),
    ];

    for (input, expected) in cases {
        let err = session.submit_input(input, &mut rng).unwrap_err();
        assert_eq!(err, EngineError::InvalidGuess(expected), "input {:?}", input);
    }

    let err = session.submit_guess(&[1, 2, 3, 12], &mut rng).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidGuess(GuessError::NonDigitCharacter { position: 3, .. })
    ));

    assert_eq!(session.attempts(), attempts);
    assert_eq!(session.candidates(), &candidates);
    assert_eq!(session.entropy_history(), entropy_history.as_slice());
    assert_eq!(session.reduction_history(), reduction_history.as_slice());
    assert_eq!(session.history(), history.as_slice());
}

#[test]
fn test_histories_track_attempts() {
    let secret = code([6, 2, 9, 1]);
    let mut session = GameSession::with_secret(GameConfig::default(), secret);
    let mut rng = rng();

    let guesses = ["0123", "4567", "8901", "2345"];
    let mut previous = session.remaining_count();
    for (i, guess) in guesses.iter().enumerate() {
        let outcome = session.submit_input(guess, &mut rng).unwrap();
        assert_eq!(session.attempts() as usize, i + 1);
        assert_eq!(session.entropy_history().len(), i + 2);
        assert_eq!(session.reduction_history().len(), i + 2);
        assert!(session.remaining_count() <= previous);
        assert!(session.candidates().contains(&secret));
        previous = session.remaining_count();

        let h = session.entropy_history();
        let expected = h[h.len() - 2] - h[h.len() - 1];
        assert_eq!(outcome.entropy_reduction, Some(expected));
        assert_eq!(*session.reduction_history().last().unwrap(), expected);
    }

    let records = session.history();
    assert_eq!(records.len(), guesses.len());
    assert_eq!(records[0].guess, code([0, 1, 2, 3]));
    assert_eq!(
        records[0].feedback,
        Feedback::calculate(&code([0, 1, 2, 3]), &secret)
    );
    assert_eq!(records[3].remaining, session.remaining_count());
}

#[test]
fn test_reduction_tracking_disabled() {
    let config = GameConfig::default().with_reduction_tracking(false);
    let mut session = GameSession::with_secret(config, code([3, 8, 5, 0]));
    let outcome = session.submit_input("0123", &mut rng()).unwrap();

    assert!(outcome.entropy_reduction.is_none());
    assert!(session.reduction_history().is_empty());
    assert_eq!(session.entropy_history().len(), 2);
}

#[test]
fn test_suggestion_count_is_configurable() {
    for k in [1, 3, 10] {
        let config = GameConfig::default().with_suggestion_count(k);
        let mut session = GameSession::with_secret(config, code([7, 5, 3, 1]));
        let outcome = session.submit_input("0246", &mut rng()).unwrap();
        assert_eq!(outcome.suggestions.len(), k.min(outcome.remaining));
    }
}

#[test]
fn test_suggestions_shrink_with_candidates() {
    let secret = code([1, 2, 3, 4]);
    let config = GameConfig::default().with_suggestion_count(10);
    let mut session = GameSession::with_secret(config, secret);
    let outcome = session.submit_input("1243", &mut rng()).unwrap();

    // one swap away from 1243
    assert_eq!(outcome.feedback, Feedback { bulls: 2, cows: 2 });
    assert_eq!(outcome.remaining, 6);
    assert_eq!(outcome.suggestions.len(), outcome.remaining);
}

#[test]
fn test_opening_suggestions() {
    let session = GameSession::new(GameConfig::default().with_suggestion_count(3), &mut rng());
    let suggestions = session.suggestions(&mut rng());
    assert_eq!(suggestions.len(), 3);
}

#[test]
fn test_max_entropy_advisor_in_session() {
    let config = GameConfig::default()
        .with_advisor(AdvisorMode::MaxEntropy)
        .with_suggestion_count(3);
    let mut session = GameSession::with_secret(config, code([9, 8, 7, 6]));
    let outcome = session.submit_input("0123", &mut rng()).unwrap();

    assert_eq!(outcome.suggestions.len(), 3);
    assert!(outcome
        .suggestions
        .iter()
        .all(|c| session.candidates().contains(c)));
}

#[test]
fn test_reset_replaces_session() {
    let mut rng = rng();
    let mut session = GameSession::new(GameConfig::default().with_suggestion_count(3), &mut rng);
    session.submit_input("0123", &mut rng).unwrap();
    session.submit_input("4567", &mut rng).unwrap();

    session.reset(&mut rng);
    assert_fresh(&session);
    assert_eq!(session.reduction_history(), &[0.0]);
    assert_eq!(session.config().suggestion_count, 3);
}

#[test]
fn test_reset_after_win_unlocks_input() {
    let mut rng = rng();
    let mut session = GameSession::with_secret(GameConfig::default(), code([1, 2, 3, 4]));
    session.submit_input("1234", &mut rng).unwrap();
    assert!(session.is_won());

    session.reset(&mut rng);
    assert_fresh(&session);
    assert!(session.submit_input("0123", &mut rng).is_ok());
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let play = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = GameSession::new(GameConfig::default(), &mut rng);
        let mut seen = Vec::new();
        let mut next = session.suggestions(&mut rng)[0];
        while !session.is_won() {
            let outcome = session.submit_code(next, &mut rng).unwrap();
            seen.push((next, outcome.feedback));
            if let Some(&s) = outcome.suggestions.first() {
                next = s;
            }
        }
        (seen, session.revealed_secret())
    };

    let (first, secret) = play(5);
    let (second, secret_again) = play(5);
    assert_eq!(first, second);
    assert_eq!(secret, secret_again);
    assert_eq!(Some(first.last().unwrap().0), secret);
}
