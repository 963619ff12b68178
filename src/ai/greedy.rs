//! The one-ply greedy bot used as the built-in opponent.
use std::fmt::{Debug, Formatter};

use internal_iterator::InternalIterator;
use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, BoardDone, BoardMoves, Player};
use crate::game::{FlipBoard, Tile, TileSet};

const CAPTURE_WEIGHT: i64 = 1000;
const ATARI_BONUS: i64 = 50;
const PRESSURE_BONUS: i64 = 20;
const CENTER_BONUS: i64 = 15;
const NEAR_CENTER_BONUS: i64 = 5;

/// Bot that simulates the full turn effect of every candidate move and picks the one with
/// the highest heuristic score, breaking ties uniformly at random. No lookahead beyond the
/// immediate turn's capture resolution.
///
/// See [move_score] for the heuristic itself.
pub struct GreedyBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for GreedyBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GreedyBot")
    }
}

impl<R: Rng> GreedyBot<R> {
    pub fn new(rng: R) -> Self {
        GreedyBot { rng }
    }
}

impl<R: Rng> Bot<FlipBoard> for GreedyBot<R> {
    fn select_move(&mut self, board: &FlipBoard) -> Result<Tile, BoardDone> {
        let player = board.next_player();
        let rng = &mut self.rng;

        // track the running maximum, choosing uniformly among tied candidates
        // through reservoir sampling
        let mut best_score = i64::MIN;
        let mut best_count = 0u32;
        let mut best = None;

        board.available_moves()?.for_each(|mv: Tile| {
            let score = move_score(board, mv, player);
            if score > best_score {
                best_score = score;
                best_count = 1;
                best = Some(mv);
            } else if score == best_score {
                best_count += 1;
                if rng.gen_range(0..best_count) == 0 {
                    best = Some(mv);
                }
            }
        });

        // SAFETY: unwrap is safe because available_moves is nonempty for a non-done board
        Ok(best.unwrap())
    }
}

/// Score placing a stone of `player` on `mv` by simulating the full turn it would cause.
///
/// Captures dominate: the change in the stone count difference is weighted by 1000.
/// On top of that, a small bonus for the center tile and its direct surroundings, and a
/// pressure bonus for every adjacent enemy stone whose group ends up with strictly fewer
/// liberties than before, with an extra atari bonus when its liberties drop to exactly one.
///
/// Panics if `mv` is not available.
pub fn move_score(board: &FlipBoard, mv: Tile, player: Player) -> i64 {
    let size = board.size();
    let other = player.other();

    let before = board.score();
    let child = board.clone_and_play(mv).expect("candidate move must be available");
    let after = child.score();

    let diff_before = before.player(player) as i64 - before.player(other) as i64;
    let diff_after = after.player(player) as i64 - after.player(other) as i64;
    let mut score = (diff_after - diff_before) * CAPTURE_WEIGHT;

    // central moves are worth a little extra
    let center = size / 2;
    let dx = (mv.x() as i32 - center as i32).abs();
    let dy = (mv.y() as i32 - center as i32).abs();
    if dx == 0 && dy == 0 {
        score += CENTER_BONUS;
    } else if dx <= 1 && dy <= 1 {
        score += NEAR_CENTER_BONUS;
    }

    // pressure on enemy groups next to the candidate, evaluated per neighboring stone
    let grid_before = board.grid();
    let grid_after = child.grid();
    for adj in mv.to_flat(size).all_adjacent(size) {
        if grid_before.stone_at_flat(adj) != Some(other) {
            continue;
        }
        // the neighbor must survive the simulated turn as an enemy stone
        if grid_after.stone_at_flat(adj) != Some(other) {
            continue;
        }

        let mut visited = TileSet::new(grid_before.area());
        let liberties_before = grid_before.find_group(adj, other, &mut visited).liberties.len();
        let mut visited = TileSet::new(grid_after.area());
        let liberties_after = grid_after.find_group(adj, other, &mut visited).liberties.len();

        if liberties_after < liberties_before {
            score += PRESSURE_BONUS;
            if liberties_after == 1 && liberties_before > 1 {
                score += ATARI_BONUS;
            }
        }
    }

    score
}
