//! Tests for opponent move selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{
    Difficulty, GameState, Outcome, Player, StrategyError, apply_move, choose_opponent_move,
    find_best_move, legal_moves, new_game,
};

fn state(cells: &str, to_move: Player) -> GameState {
    GameState::from_parts(cells.parse().unwrap(), to_move).unwrap()
}

#[test]
fn test_optimal_takes_win_instead_of_blocking() {
    // O O _ / X X _ / _ _ _ with O to move: 2 wins, 5 only blocks.
    let state = state("OO.XX....", Player::O);
    assert_eq!(find_best_move(&state), Ok(2));

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        choose_opponent_move(&state, Difficulty::Optimal, &mut rng),
        Ok(2)
    );
}

#[test]
fn test_optimal_ignores_rng() {
    let state = apply_move(&new_game(), 4, Player::X).unwrap();
    let picks: Vec<_> = (0..4)
        .map(|seed| {
            choose_opponent_move(&state, Difficulty::Optimal, &mut StdRng::seed_from_u64(seed))
        })
        .collect();
    assert!(picks.iter().all(|p| *p == picks[0]));
    // Against a center opening only corners hold the draw; 0 is the first.
    assert_eq!(picks[0], Ok(0));
}

#[test]
fn test_random_is_reproducible_with_seed() {
    let state = apply_move(&new_game(), 4, Player::X).unwrap();
    let legal = legal_moves(&state);
    for seed in 0..16 {
        let a = choose_opponent_move(&state, Difficulty::Random, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let b = choose_opponent_move(&state, Difficulty::Random, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(a, b);
        assert!(legal.contains(&a));
    }
}

#[test]
fn test_no_legal_moves_for_either_difficulty() {
    let mut rng = StdRng::seed_from_u64(3);
    for cells in ["XOXOXOOXO", "XXXOO...."] {
        let state = state(cells, Player::O);
        for difficulty in [Difficulty::Random, Difficulty::Optimal] {
            assert_eq!(
                choose_opponent_move(&state, difficulty, &mut rng),
                Err(StrategyError::NoLegalMoves)
            );
        }
    }
}

/// Plays every possible reply for `opponent` while `optimal` follows the
/// minimax choice, counting the finished games reached.
fn explore(state: &GameState, optimal: Player, games: &mut usize) {
    match state.phase() {
        Outcome::Win(winner) => {
            assert_eq!(*winner, optimal, "optimal side lost: {}", state.board());
            *games += 1;
        }
        Outcome::Draw => *games += 1,
        Outcome::InProgress if state.current_mover() == optimal => {
            let index = find_best_move(state).unwrap();
            let next = apply_move(state, index, optimal).unwrap();
            explore(&next, optimal, games);
        }
        Outcome::InProgress => {
            for index in legal_moves(state) {
                let next = apply_move(state, index, state.current_mover()).unwrap();
                explore(&next, optimal, games);
            }
        }
    }
}

#[test]
fn test_optimal_never_loses_as_second_player() {
    let mut games = 0;
    explore(&new_game(), Player::O, &mut games);
    assert!(games > 0);
}

#[test]
fn test_optimal_never_loses_as_first_player() {
    let mut games = 0;
    explore(&new_game(), Player::X, &mut games);
    assert!(games > 0);
}

#[test]
fn test_optimal_never_loses_from_midgame() {
    // Picking up games someone else started. With X on opposite corners
    // only an edge reply holds for O.
    for (cells, to_move) in [
        ("X...O....", Player::X),
        ("X...O...X", Player::O),
        (".X.......", Player::O),
    ] {
        let start = state(cells, to_move);
        let mut games = 0;
        explore(&start, to_move, &mut games);
        assert!(games > 0);
    }
}

#[test]
fn test_optimal_against_itself_draws() {
    let mut state = new_game();
    while state.is_in_progress() {
        let index = find_best_move(&state).unwrap();
        state = apply_move(&state, index, state.current_mover()).unwrap();
    }
    assert_eq!(state.phase(), &Outcome::Draw);
}
