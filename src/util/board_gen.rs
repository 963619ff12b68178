//! Utilities to generate a `Board` in a random state.
use rand::Rng;

use crate::board::{Board, BoardDone};

/// Play the given moves, starting from `start`.
pub fn board_with_moves<B: Board>(start: B, moves: &[B::Move]) -> B {
    let mut curr = start;
    for &mv in moves {
        assert!(!curr.is_done(), "Board already done, playing {} on {}", mv, curr);
        assert_eq!(
            curr.is_available_move(mv),
            Ok(true),
            "Move not available, playing {} on {}",
            mv,
            curr
        );
        // SAFETY: unwrap is safe because the move was just checked to be available
        curr.play(mv).unwrap();
    }
    curr
}

/// Generate a `Board` by playing `n` random moves on `start`.
pub fn random_board_with_moves<B: Board>(start: &B, n: u32, rng: &mut impl Rng) -> B {
    // this implementation could be made faster with backtracking instead of starting from
    // scratch, but that only starts to matter for very high n
    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            match board.play_random_available_move(rng) {
                Ok(()) => {}
                Err(BoardDone) => continue 'new_try,
            }
        }
        return board;
    }
}
