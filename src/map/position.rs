#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed expansion order; keeps every search deterministic.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn move_in_direction(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        let (height, width) = bounds;
        match direction {
            Direction::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Direction::Down if self.row < height - 1 => Some(Self::new(self.row + 1, self.col)),
            Direction::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Direction::Right if self.col < width - 1 => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }

    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<Self> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.move_in_direction(dir, bounds))
            .collect()
    }
}
