use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::board::{Board, Player};
use crate::game::board::State;
use crate::game::grid::Grid;
use crate::game::tile::Tile;
use crate::game::{FlipBoard, MAX_SIZE};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidTile;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidFen;

// By convention 'I' is skipped because it can be confused with "1".
const TILE_X_NAMES: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

pub fn player_symbol(player: Player) -> char {
    match player {
        Player::A => 'w',
        Player::B => 'b',
    }
}

fn cell_symbol(cell: Option<Player>) -> char {
    match cell {
        None => '.',
        Some(player) => player_symbol(player),
    }
}

fn cell_from_symbol(c: char) -> Result<Option<Player>, InvalidFen> {
    match c {
        '.' => Ok(None),
        'w' => Ok(Some(Player::A)),
        'b' => Ok(Some(Player::B)),
        _ => Err(InvalidFen),
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", TILE_X_NAMES[self.x() as usize] as char, self.y() as u32 + 1)
    }
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile(({}, {}), {})", self.x(), self.y(), self)
    }
}

impl FromStr for Tile {
    type Err = InvalidTile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(InvalidTile)?;

        let x = TILE_X_NAMES
            .iter()
            .position(|&cand| cand == first.to_ascii_uppercase() as u8)
            .ok_or(InvalidTile)?;

        let y_1 = chars.as_str().parse::<u32>().map_err(|_| InvalidTile)?;
        if y_1 == 0 || y_1 > MAX_SIZE as u32 {
            return Err(InvalidTile);
        }

        Ok(Tile::new(x as u8, (y_1 - 1) as u8))
    }
}

impl Grid {
    /// The compact text form of this grid: rows from top (highest y) to bottom,
    /// separated by '/', with 'w', 'b' and '.' cells.
    pub fn to_fen(&self) -> String {
        (0..self.size())
            .rev()
            .map(|y| {
                (0..self.size())
                    .map(|x| cell_symbol(self.stone_at(Tile::new(x, y))))
                    .collect::<String>()
            })
            .join("/")
    }

    pub fn from_fen(fen: &str) -> Result<Grid, InvalidFen> {
        let rows = fen.split('/').collect_vec();
        let size = rows.len();
        if size < 1 || size > MAX_SIZE as usize {
            return Err(InvalidFen);
        }

        let mut grid = Grid::new(size as u8);
        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(InvalidFen);
            }
            let y = (size - 1 - i) as u8;
            for (x, c) in row.chars().enumerate() {
                let tile = Tile::new(x as u8, y);
                grid.set_stone(tile.to_flat(size as u8), cell_from_symbol(c)?);
            }
        }
        Ok(grid)
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grid({:?})", self.to_fen())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.size()).rev() {
            for x in 0..self.size() {
                write!(f, "{}", cell_symbol(self.stone_at(Tile::new(x, y))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FlipBoard {
    /// The compact text form of this board: the grid fen followed by the next player.
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.grid().to_fen(), player_symbol(self.next_player()))
    }

    /// Parse a board from its text form. The handicap is taken to be zero and the state is
    /// derived from the grid: a full grid parses as a finished board.
    pub fn from_fen(fen: &str) -> Result<FlipBoard, InvalidFen> {
        let (grid, next) = fen.split_once(' ').ok_or(InvalidFen)?;
        let grid = Grid::from_fen(grid)?;
        let next_player = cell_from_symbol(next.chars().exactly_one().map_err(|_| InvalidFen)?)?.ok_or(InvalidFen)?;
        Ok(FlipBoard::from_grid(grid, 0, next_player))
    }
}

impl Debug for FlipBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let score = self.score();
        write!(
            f,
            "FlipBoard(next={}, state={}, stones_w={}, stones_b={}, handicap={}, fen={:?})",
            player_symbol(self.next_player()),
            self.state(),
            score.a,
            score.b,
            self.handicap(),
            self.to_fen(),
        )
    }
}

impl Display for FlipBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let width_y = size.to_string().len();

        writeln!(f, "{:?}", self)?;
        for y in (0..size).rev() {
            write!(f, "{:width$} ", y + 1, width = width_y)?;
            for x in 0..size {
                write!(f, "{}", cell_symbol(self.stone_at(Tile::new(x, y))))?;
            }
            writeln!(f)?;
        }

        write!(f, "{:width$}", "", width = width_y + 1)?;
        for x in 0..size {
            write!(f, "{}", TILE_X_NAMES[x as usize] as char)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            State::InProgress => write!(f, "in progress"),
            State::Done(outcome) => write!(f, "done ({:?})", outcome),
        }
    }
}
