//! Core domain: tests for the transition table and high-score storage.

use std::fs;

use super::{GameCommand, GameState, HighScore, HighScoreError, HighScoreStore};

#[test]
fn test_happy_path_transitions() {
    let state = GameState::Loading;
    let state = state.apply(GameCommand::AssetsReady).expect("loading -> menu");
    assert_eq!(state, GameState::Menu);

    let state = state.apply(GameCommand::Start).expect("menu -> playing");
    assert_eq!(state, GameState::Playing);

    let paused = state.apply(GameCommand::Pause).expect("playing -> paused");
    assert_eq!(paused, GameState::Paused);
    assert_eq!(paused.apply(GameCommand::Resume), Some(GameState::Playing));

    let over = state.apply(GameCommand::GameOver).expect("playing -> game over");
    assert_eq!(over, GameState::GameOver);
    assert_eq!(over.apply(GameCommand::Restart), Some(GameState::Playing));
}

#[test]
fn test_every_run_state_can_return_to_menu() {
    for state in [GameState::Playing, GameState::Paused, GameState::GameOver] {
        assert_eq!(state.apply(GameCommand::ReturnToMenu), Some(GameState::Menu));
    }
    assert_eq!(GameState::Loading.apply(GameCommand::ReturnToMenu), None);
    assert_eq!(GameState::Menu.apply(GameCommand::ReturnToMenu), None);
}

#[test]
fn test_invalid_commands_are_ignored() {
    assert_eq!(GameState::Loading.apply(GameCommand::Start), None);
    assert_eq!(GameState::Menu.apply(GameCommand::Pause), None);
    assert_eq!(GameState::Playing.apply(GameCommand::Resume), None);
    assert_eq!(GameState::Playing.apply(GameCommand::Restart), None);
    assert_eq!(GameState::Paused.apply(GameCommand::GameOver), None);
    assert_eq!(GameState::GameOver.apply(GameCommand::Pause), None);
    assert_eq!(GameState::Menu.apply(GameCommand::AssetsReady), None);
}

#[test]
fn test_restart_from_pause() {
    assert_eq!(
        GameState::Paused.apply(GameCommand::Restart),
        Some(GameState::Playing)
    );
    assert!(GameCommand::Restart.ends_run());
    assert!(GameCommand::ReturnToMenu.ends_run());
    assert!(!GameCommand::Resume.ends_run());
    assert!(!GameCommand::GameOver.ends_run());
}

#[test]
fn test_high_score_only_rises() {
    let mut high_score = HighScore::default();
    assert!(high_score.submit(10));
    assert!(!high_score.submit(10));
    assert!(!high_score.submit(3));
    assert!(high_score.submit(11));
    assert_eq!(high_score.best, 11);
}

#[test]
fn test_missing_store_reads_zero() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = HighScoreStore::new(dir.path().join("high_score.json"));

    assert_eq!(store.load().expect("missing file is not an error"), 0);
}

#[test]
fn test_store_round_trip_creates_parent_dirs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("save").join("nested").join("high_score.json");
    let store = HighScoreStore::new(&path);

    store.save(42).expect("save succeeds");
    assert_eq!(store.load().expect("load succeeds"), 42);

    let raw = fs::read_to_string(&path).expect("file exists");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(json["high_score"], 42);

    store.save(7).expect("overwrite succeeds");
    assert_eq!(store.load().expect("load succeeds"), 7);
}

#[test]
fn test_corrupt_store_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("high_score.json");
    fs::write(&path, "not json").expect("write");

    let err = HighScoreStore::new(&path)
        .load()
        .expect_err("garbage must not parse");
    assert!(matches!(err, HighScoreError::Parse { .. }));
    assert!(err.to_string().contains("parse error"));
}
