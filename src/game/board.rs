use std::ops::ControlFlow;

use internal_iterator::InternalIterator;
use rand::Rng;

use crate::board::{
    AllMovesIterator, AvailableMovesIterator, Board, BoardDone, BoardMoves, Outcome, PlayError, Player,
};
use crate::game::grid::{Grid, Group, Score};
use crate::game::tile::Tile;
use crate::game::MAX_SIZE;

/// The board size used by the shipped game.
pub const DEFAULT_SIZE: u8 = 5;

/// The turn sequencer for the flip-capture game.
///
/// A move places a stone of the next player on an empty tile, after which captures are
/// resolved in two passes (see [Grid::process_captures]). The game ends when the board
/// is full, the player with the strict majority of stones wins. Boards can also be
/// finished early through [FlipBoard::end_early].
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct FlipBoard {
    grid: Grid,
    handicap: u16,
    next_player: Player,
    state: State,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum State {
    InProgress,
    Done(Outcome),
}

/// Configuration for the single-player campaign: the board size and how many handicap
/// stones [FlipBoard::HANDICAP_PLAYER] receives at each level.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LevelSettings {
    size: u8,
    handicap_per_level: Vec<u16>,
}

impl FlipBoard {
    /// The player whose stones are pre-placed as a handicap. In the shipped game this is
    /// the AI color, [Player::B] (Black); [Player::A] (White) is the human.
    pub const HANDICAP_PLAYER: Player = Player::B;

    /// An empty board without handicap, [Self::HANDICAP_PLAYER] moves first.
    pub fn new(size: u8) -> FlipBoard {
        FlipBoard::from_grid(Grid::new(size), 0, Self::HANDICAP_PLAYER)
    }

    /// A board with `handicap` stones of [Self::HANDICAP_PLAYER] pre-placed on distinct
    /// uniformly random tiles. If any handicap stones were placed the other player moves first.
    pub fn new_with_handicap(size: u8, handicap: u16, rng: &mut impl Rng) -> FlipBoard {
        let grid = Grid::new_with_random_stones(size, Self::HANDICAP_PLAYER, handicap, rng);
        let next_player = match handicap {
            0 => Self::HANDICAP_PLAYER,
            _ => Self::HANDICAP_PLAYER.other(),
        };
        FlipBoard::from_grid(grid, handicap, next_player)
    }

    /// The starting board for the given 1-based campaign level.
    pub fn new_level(settings: &LevelSettings, level: u32, rng: &mut impl Rng) -> FlipBoard {
        FlipBoard::new_with_handicap(settings.size(), settings.handicap(level), rng)
    }

    pub(super) fn from_grid(grid: Grid, handicap: u16, next_player: Player) -> FlipBoard {
        let state = match grid.is_full() {
            true => State::Done(grid.score().to_outcome()),
            false => State::InProgress,
        };
        FlipBoard {
            grid,
            handicap,
            next_player,
            state,
        }
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn area(&self) -> u16 {
        self.grid.area()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn handicap(&self) -> u16 {
        self.handicap
    }

    pub fn stone_at(&self, tile: Tile) -> Option<Player> {
        self.grid.stone_at(tile)
    }

    /// The group containing the stone on `tile`, or `None` for an empty tile.
    pub fn group_at(&self, tile: Tile) -> Option<Group> {
        self.grid.group_at(tile)
    }

    /// The current stone counts, recomputed from the grid.
    pub fn score(&self) -> Score {
        self.grid.score()
    }

    /// Finish the game immediately, deciding the winner from the current stone counts.
    /// Does nothing if the game is already done.
    pub fn end_early(&mut self) {
        if let State::InProgress = self.state {
            self.state = State::Done(self.grid.score().to_outcome());
        }
    }

    /// Start the current configuration over: clear the board, re-place the same number of
    /// handicap stones on fresh random tiles and hand the first move to the appropriate player.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = FlipBoard::new_with_handicap(self.size(), self.handicap, rng);
    }
}

impl Board for FlipBoard {
    type Move = Tile;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Tile) -> Result<bool, BoardDone> {
        self.check_done()?;
        assert!(
            mv.exists(self.size()),
            "Tile ({}, {}) out of bounds for size {}",
            mv.x(),
            mv.y(),
            self.size()
        );
        Ok(self.grid.stone_at(mv).is_none())
    }

    fn play(&mut self, mv: Tile) -> Result<(), PlayError> {
        self.check_can_play(mv)?;

        let curr = self.next_player;

        // place the stone, then run both capture passes
        let placed = self.grid.with_stone(mv, curr);
        let (resolved, _) = placed.process_captures(curr);
        self.grid = resolved;

        self.state = match self.grid.is_full() {
            true => State::Done(self.grid.score().to_outcome()),
            false => State::InProgress,
        };
        self.next_player = curr.other();

        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.state {
            State::InProgress => None,
            State::Done(outcome) => Some(outcome),
        }
    }

    fn can_lose_after_move() -> bool {
        true
    }
}

impl<'a> BoardMoves<'a, FlipBoard> for FlipBoard {
    type AllMovesIterator = AllMovesIterator<FlipBoard>;
    type AvailableMovesIterator = AvailableMovesIterator<'a, FlipBoard>;

    fn all_possible_moves() -> Self::AllMovesIterator {
        AllMovesIterator::default()
    }

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        AvailableMovesIterator::new(self)
    }
}

impl InternalIterator for AllMovesIterator<FlipBoard> {
    type Item = Tile;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        for tile in Tile::all(MAX_SIZE) {
            f(tile)?;
        }
        ControlFlow::Continue(())
    }
}

impl InternalIterator for AvailableMovesIterator<'_, FlipBoard> {
    type Item = Tile;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let board = self.board();
        for tile in Tile::all(board.size()) {
            if board.stone_at(tile).is_none() {
                f(tile)?;
            }
        }
        ControlFlow::Continue(())
    }
}

impl LevelSettings {
    pub fn new(size: u8, handicap_per_level: Vec<u16>) -> LevelSettings {
        let area = size as u16 * size as u16;
        assert!(
            (1..=MAX_SIZE).contains(&size),
            "Board size {} outside supported range 1..={}",
            size,
            MAX_SIZE
        );
        assert!(
            handicap_per_level.iter().all(|&handicap| handicap <= area),
            "Handicap exceeds board area {}",
            area
        );
        LevelSettings { size, handicap_per_level }
    }

    /// The configuration of the shipped game: a 5x5 board and 5 levels with one extra
    /// handicap stone per level.
    pub fn standard() -> LevelSettings {
        LevelSettings::new(DEFAULT_SIZE, vec![1, 2, 3, 4, 5])
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn max_level(&self) -> u32 {
        self.handicap_per_level.len() as u32
    }

    /// The handicap stone count for the given 1-based level.
    pub fn handicap(&self, level: u32) -> u16 {
        assert!(
            (1..=self.max_level()).contains(&level),
            "Level {} outside range 1..={}",
            level,
            self.max_level()
        );
        self.handicap_per_level[(level - 1) as usize]
    }
}
