use super::{Cell, GridError, Position};

/// Rectangular, row-major city map. Immutable once parsed; searches only
/// ever read it.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parses a map from text, one row per line. Rejects empty input,
    /// ragged rows and unknown marker characters.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (row, line) in text.lines().enumerate() {
            if row == 0 {
                width = line.chars().count();
            } else if line.chars().count() != width {
                return Err(GridError::RaggedRow {
                    row,
                    len: line.chars().count(),
                    expected: width,
                });
            }

            for (col, marker) in line.chars().enumerate() {
                let cell = Cell::from_char(marker)
                    .ok_or(GridError::UnknownMarker { marker, row, col })?;
                cells.push(cell);
            }

            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.cells[pos.to_index(self.width)])
        } else {
            None
        }
    }

    pub fn is_traversable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| cell.is_walkable())
    }

    /// Cost of stepping onto `pos`. Only meaningful for traversable
    /// cells; callers check `is_traversable` first.
    pub fn entry_cost(&self, pos: Position) -> usize {
        self.get(pos).map_or(usize::MAX, |cell| cell.entry_cost())
    }

    /// First cell bearing `marker`, in row-major scan order. With
    /// duplicate markers the earliest one wins, deterministically.
    pub fn locate(&self, marker: Cell) -> Result<Position, GridError> {
        self.cells
            .iter()
            .position(|&cell| cell == marker)
            .map(|idx| Position::from_index(idx, self.width))
            .ok_or(GridError::MissingMarker(marker))
    }

    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors(self.bounds())
            .into_iter()
            .filter(|&p| self.is_traversable(p))
            .collect()
    }
}
