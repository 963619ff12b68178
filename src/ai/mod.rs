use std::fmt::Debug;

use crate::board::{Board, BoardDone};

pub mod greedy;
pub mod simple;

pub trait Bot<B: Board>: Debug {
    /// Pick a move to play.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &B) -> Result<B::Move, BoardDone>;
}
