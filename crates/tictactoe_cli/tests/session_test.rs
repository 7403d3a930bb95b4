//! Tests for the host session: turn handling, restart and opponent play.

use tictactoe_cli::{COMPUTER, GameMode, GameSession, SessionError, Settings};
use tictactoe_engine::{Difficulty, MoveError, Outcome, Player, Square};

fn settings(mode: GameMode, difficulty: Difficulty) -> Settings {
    Settings::default().with_overrides(Some(mode), Some(difficulty), Some(7), Some(0))
}

#[test]
fn optimal_opponent_answers_center_with_corner() {
    let mut session = GameSession::new(&settings(GameMode::Pve, Difficulty::Optimal));

    session.play_human(4).unwrap();
    assert!(session.is_computer_turn());

    let reply = session.play_opponent().unwrap();
    assert_eq!(reply, 0);
    assert_eq!(session.state().board().get(0), Some(Square::Occupied(COMPUTER)));
    assert_eq!(session.state().current_mover(), Player::X);
}

#[test]
fn human_cannot_move_for_computer() {
    let mut session = GameSession::new(&settings(GameMode::Pve, Difficulty::Random));
    session.play_human(0).unwrap();
    let before = *session.state();

    assert_eq!(session.play_human(1), Err(SessionError::NotHumanTurn));
    assert_eq!(*session.state(), before);
}

#[test]
fn refused_move_leaves_state_unchanged() {
    let mut session = GameSession::new(&settings(GameMode::Pvp, Difficulty::Random));
    session.play_human(4).unwrap();
    let before = *session.state();

    assert_eq!(
        session.play_human(4),
        Err(SessionError::Move(MoveError::CellOccupied(4)))
    );
    assert_eq!(
        session.play_human(9),
        Err(SessionError::Move(MoveError::OutOfRange(9)))
    );
    assert_eq!(*session.state(), before);
}

#[test]
fn pvp_alternates_and_reports_status() {
    let mut session = GameSession::new(&settings(GameMode::Pvp, Difficulty::Optimal));
    assert!(!session.is_computer_turn());
    assert_eq!(session.status_message(), "Player X to move");

    for index in [0, 3, 1, 4] {
        session.play_human(index).unwrap();
        assert!(!session.is_computer_turn());
    }
    assert_eq!(session.status_message(), "Player X to move");

    session.play_human(2).unwrap();
    assert_eq!(*session.state().phase(), Outcome::Win(Player::X));
    assert_eq!(session.status_message(), "Player X wins!");
    assert_eq!(
        session.play_human(5),
        Err(SessionError::Move(MoveError::GameOver))
    );
}

#[test]
fn draw_is_reported() {
    let mut session = GameSession::new(&settings(GameMode::Pvp, Difficulty::Random));
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.play_human(index).unwrap();
    }
    assert_eq!(*session.state().phase(), Outcome::Draw);
    assert_eq!(session.status_message(), "Draw!");
    assert!(!session.is_computer_turn());
}

#[test]
fn restart_keeps_mode_and_difficulty() {
    let mut session = GameSession::new(&settings(GameMode::Pve, Difficulty::Optimal));
    session.play_human(0).unwrap();
    session.play_opponent().unwrap();

    session.restart();
    assert_eq!(session.mode(), GameMode::Pve);
    assert_eq!(session.difficulty(), Difficulty::Optimal);
    assert_eq!(session.state().board().count(Player::X), 0);
    assert_eq!(session.state().board().count(Player::O), 0);
    assert_eq!(session.state().current_mover(), Player::X);
}

#[test]
fn seeded_random_opponent_is_reproducible() {
    let play = || {
        let mut session = GameSession::new(&settings(GameMode::Pve, Difficulty::Random));
        let mut replies = Vec::new();
        while session.state().is_in_progress() {
            if session.is_computer_turn() {
                replies.push(session.play_opponent().unwrap());
            } else {
                let next = *tictactoe_engine::legal_moves(session.state())
                    .first()
                    .unwrap();
                session.play_human(next).unwrap();
            }
        }
        replies
    };

    let first = play();
    assert!(!first.is_empty());
    assert_eq!(first, play());
}

#[test]
fn optimal_opponent_never_loses_to_scripted_human() {
    let mut session = GameSession::new(&settings(GameMode::Pve, Difficulty::Optimal));
    while session.state().is_in_progress() {
        if session.is_computer_turn() {
            session.play_opponent().unwrap();
        } else {
            let next = *tictactoe_engine::legal_moves(session.state())
                .last()
                .unwrap();
            session.play_human(next).unwrap();
        }
    }
    assert_ne!(*session.state().phase(), Outcome::Win(Player::X));
}
