use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use itertools::Itertools;
use rand::Rng;

use crate::board::{Outcome, Player};
use crate::game::tile::{FlatTile, Tile};
use crate::game::MAX_SIZE;

/// A square grid of cells, each empty or holding a stone.
///
/// This is the value all capture analysis works on. Every operation is pure:
/// mutating operations return a new grid and leave `self` untouched, so AI simulation
/// can never leak into the real game state. The turn logic lives in
/// [FlipBoard](crate::game::FlipBoard).
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    size: u8,
    cells: Vec<Option<Player>>,
}

/// A set of tiles on a board of fixed area, stored as a flat bitmap over [FlatTile] indices.
#[derive(Clone, Eq, PartialEq)]
pub struct TileSet {
    slots: Vec<bool>,
    len: u16,
}

/// A maximal 4-connected component of same-colored stones together with its liberties,
/// the distinct empty tiles orthogonally adjacent to any of its stones.
///
/// Derived on demand from a [Grid] and never cached across mutations, captures invalidate it.
#[derive(Debug, Clone)]
pub struct Group {
    pub color: Player,
    pub stones: Vec<FlatTile>,
    pub liberties: TileSet,
}

/// The number of stones of each player on a grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Score {
    pub a: u32,
    pub b: u32,
}

impl Grid {
    pub fn new(size: u8) -> Grid {
        assert!(
            (1..=MAX_SIZE).contains(&size),
            "Board size {} outside supported range 1..={}",
            size,
            MAX_SIZE
        );
        let area = size as usize * size as usize;
        Grid {
            size,
            cells: vec![None; area],
        }
    }

    /// Create a grid with `count` stones of `player` placed on distinct uniformly random tiles.
    pub fn new_with_random_stones(size: u8, player: Player, count: u16, rng: &mut impl Rng) -> Grid {
        let mut grid = Grid::new(size);
        assert!(count <= grid.area(), "Cannot place {} stones on area {}", count, grid.area());

        for index in rand::seq::index::sample(rng, grid.area() as usize, count as usize) {
            grid.cells[index] = Some(player);
        }
        grid
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn area(&self) -> u16 {
        self.size as u16 * self.size as u16
    }

    pub fn stone_at(&self, tile: Tile) -> Option<Player> {
        self.stone_at_flat(tile.to_flat(self.size))
    }

    pub fn stone_at_flat(&self, tile: FlatTile) -> Option<Player> {
        self.cells[tile.index() as usize]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn empty_tiles(&self) -> impl Iterator<Item = FlatTile> + '_ {
        self.cells.iter().positions(|cell| cell.is_none()).map(|i| FlatTile::new(i as u16))
    }

    pub fn score(&self) -> Score {
        let mut score = Score { a: 0, b: 0 };
        for cell in &self.cells {
            match cell {
                Some(Player::A) => score.a += 1,
                Some(Player::B) => score.b += 1,
                None => {}
            }
        }
        score
    }

    pub(super) fn set_stone(&mut self, tile: FlatTile, stone: Option<Player>) {
        self.cells[tile.index() as usize] = stone;
    }

    /// Return a copy of this grid with a stone of `player` placed on `tile`.
    /// Panics if the tile is already occupied.
    pub fn with_stone(&self, tile: Tile, player: Player) -> Grid {
        let flat = tile.to_flat(self.size);
        assert!(
            self.stone_at_flat(flat).is_none(),
            "Tile ({}, {}) is already occupied",
            tile.x(),
            tile.y()
        );

        let mut next = self.clone();
        next.cells[flat.index() as usize] = Some(player);
        next
    }

    /// Find the maximal group of `color` stones connected to `start` with a breadth-first
    /// flood fill, collecting its liberties along the way.
    ///
    /// Every discovered stone (including `start`) is marked in `visited`, so a caller
    /// sweeping the whole grid with a shared set derives each group exactly once.
    /// If `start` does not hold a `color` stone the group is empty and `visited` is untouched.
    pub fn find_group(&self, start: FlatTile, color: Player, visited: &mut TileSet) -> Group {
        let mut stones = vec![];
        let mut liberties = TileSet::new(self.area());

        if self.stone_at_flat(start) != Some(color) {
            return Group { color, stones, liberties };
        }

        stones.push(start);
        visited.insert(start);

        let mut head = 0;
        while head < stones.len() {
            let curr = stones[head];
            head += 1;

            for adj in curr.all_adjacent(self.size) {
                match self.stone_at_flat(adj) {
                    None => {
                        liberties.insert(adj);
                    }
                    Some(player) if player == color => {
                        if visited.insert(adj) {
                            stones.push(adj);
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        Group { color, stones, liberties }
    }

    /// The group containing the stone on `tile`, or `None` for an empty tile.
    pub fn group_at(&self, tile: Tile) -> Option<Group> {
        self.stone_at(tile).map(|color| {
            let mut visited = TileSet::new(self.area());
            self.find_group(tile.to_flat(self.size), color, &mut visited)
        })
    }

    /// Find every `target` group without liberties and flip it to `capture_to` where the
    /// capture rule allows: a dead group is flipped iff the number of distinct adjacent
    /// `capture_to` stones is at least the size of the group. Groups failing the rule stay
    /// on the board even with zero liberties.
    ///
    /// The sweep runs in row-major order and flips in place as it goes. Distinct `target`
    /// groups never touch, so earlier flips cannot change what happens to later groups
    /// within the same sweep.
    ///
    /// Returns the resulting grid and the number of flipped stones.
    pub fn resolve_captures(&self, target: Player, capture_to: Player) -> (Grid, u32) {
        let mut next = self.clone();
        let mut visited = TileSet::new(self.area());
        let mut flipped = 0;

        for start in FlatTile::all(self.size) {
            if next.stone_at_flat(start) != Some(target) || visited.contains(start) {
                continue;
            }

            let group = next.find_group(start, target, &mut visited);
            if !group.liberties.is_empty() {
                continue;
            }

            // the capturing set: distinct capture_to stones touching the group
            let mut capturing = TileSet::new(self.area());
            for &stone in &group.stones {
                for adj in stone.all_adjacent(self.size) {
                    if next.stone_at_flat(adj) == Some(capture_to) {
                        capturing.insert(adj);
                    }
                }
            }

            if capturing.len() as usize >= group.stones.len() {
                for &stone in &group.stones {
                    next.cells[stone.index() as usize] = Some(capture_to);
                    flipped += 1;
                }
            }
        }

        (next, flipped)
    }

    /// Apply both capture passes for a completed placement by `acting`: first the opponent's
    /// groups are resolved (flipping to `acting`), then `acting`'s own groups on the resulting
    /// grid (self-capture). Exactly these two passes run, captures are never chased further.
    ///
    /// Returns the resulting grid and the number of opponent stones flipped in the first pass.
    pub fn process_captures(&self, acting: Player) -> (Grid, u32) {
        let other = acting.other();

        let (after_capture, flipped) = self.resolve_captures(other, acting);
        let (after_self_capture, _) = after_capture.resolve_captures(acting, other);

        (after_self_capture, flipped)
    }
}

impl TileSet {
    pub fn new(area: u16) -> TileSet {
        TileSet {
            slots: vec![false; area as usize],
            len: 0,
        }
    }

    /// Insert `tile`, returning whether it was newly inserted.
    pub fn insert(&mut self, tile: FlatTile) -> bool {
        let slot = &mut self.slots[tile.index() as usize];
        match *slot {
            true => false,
            false => {
                *slot = true;
                self.len += 1;
                true
            }
        }
    }

    pub fn contains(&self, tile: FlatTile) -> bool {
        self.slots[tile.index() as usize]
    }

    pub fn len(&self) -> u16 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = FlatTile> + '_ {
        self.slots
            .iter()
            .positions(|&slot| slot)
            .map(|i| FlatTile::new(i as u16))
    }
}

impl Debug for TileSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter().map(FlatTile::index)).finish()
    }
}

impl Score {
    pub fn player(self, player: Player) -> u32 {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    pub fn total(self) -> u32 {
        self.a + self.b
    }

    /// The player with the strict majority of stones wins, equal counts are a draw.
    pub fn to_outcome(self) -> Outcome {
        match self.a.cmp(&self.b) {
            Ordering::Greater => Outcome::WonBy(Player::A),
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::WonBy(Player::B),
        }
    }
}
