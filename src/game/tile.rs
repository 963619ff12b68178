use crate::game::MAX_SIZE;

/// A board coordinate, `x` going right and `y` going up.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tile {
    x: u8,
    y: u8,
}

/// A board coordinate packed into a single row-major index, the representation
/// used by [Grid](crate::game::Grid) internals and [TileSet](crate::game::TileSet).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FlatTile {
    index: u16,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

impl Tile {
    pub fn new(x: u8, y: u8) -> Self {
        assert!(
            x < MAX_SIZE && y < MAX_SIZE,
            "Coordinates ({}, {}) too large, max={}",
            x,
            y,
            MAX_SIZE,
        );
        Tile { x, y }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    pub fn exists(self, size: u8) -> bool {
        self.x < size && self.y < size
    }

    pub fn to_flat(self, size: u8) -> FlatTile {
        assert!(self.exists(size), "Tile ({}, {}) out of bounds for size {}", self.x, self.y, size);
        FlatTile::new(size as u16 * self.y as u16 + self.x as u16)
    }

    pub fn all(size: u8) -> impl Iterator<Item = Tile> {
        (0..size).flat_map(move |y| (0..size).map(move |x| Tile::new(x, y)))
    }

    /// The up to 4 orthogonally adjacent tiles that are in bounds, boundary tiles yield fewer.
    pub fn all_adjacent(self, size: u8) -> impl Iterator<Item = Tile> + Clone {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.adjacent_in(dir, size))
    }

    pub fn adjacent_in(self, dir: Direction, size: u8) -> Option<Tile> {
        let (x, y) = match dir {
            Direction::Up => (self.x, self.y.checked_add(1)?),
            Direction::Down => (self.x, self.y.checked_sub(1)?),
            Direction::Left => (self.x.checked_sub(1)?, self.y),
            Direction::Right => (self.x.checked_add(1)?, self.y),
        };
        if x < size && y < size {
            Some(Tile::new(x, y))
        } else {
            None
        }
    }
}

impl FlatTile {
    pub fn new(index: u16) -> Self {
        FlatTile { index }
    }

    pub fn index(self) -> u16 {
        self.index
    }

    pub fn to_tile(self, size: u8) -> Tile {
        Tile::new((self.index % size as u16) as u8, (self.index / size as u16) as u8)
    }

    pub fn all(size: u8) -> impl Iterator<Item = FlatTile> {
        let area = size as u16 * size as u16;
        (0..area).map(FlatTile::new)
    }

    /// The up to 4 orthogonally adjacent tiles that are in bounds.
    pub fn all_adjacent(self, size: u8) -> impl Iterator<Item = FlatTile> + Clone {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.adjacent_in(dir, size))
    }

    pub fn adjacent_in(self, dir: Direction, size: u8) -> Option<FlatTile> {
        let index = match dir {
            Direction::Up => self.index.checked_add(size as u16)?,
            Direction::Down => self.index.checked_sub(size as u16)?,
            Direction::Left => {
                if self.index % size as u16 == 0 {
                    return None;
                }
                self.index.checked_sub(1)?
            }
            Direction::Right => {
                let after = self.index.checked_add(1)?;
                if after % size as u16 == 0 {
                    return None;
                }
                after
            }
        };

        if index < size as u16 * size as u16 {
            Some(FlatTile { index })
        } else {
            None
        }
    }
}
