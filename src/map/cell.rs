use std::fmt;

const ROAD_COST: usize = 1;
const TRAFFIC_COST: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Road,
    Traffic,
    Wall,
    Start,
    Goal,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Road),
            'T' => Some(Self::Traffic),
            '#' => Some(Self::Wall),
            'R' => Some(Self::Start),
            'C' => Some(Self::Goal),
            _ => None,
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Cost of stepping onto this cell. Walls are never entered, so they
    /// carry no cost here; callers filter them out via `is_walkable`.
    pub fn entry_cost(self) -> usize {
        match self {
            Self::Traffic => TRAFFIC_COST,
            _ => ROAD_COST,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Road => "road",
            Self::Traffic => "traffic",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::Goal => "goal",
        };
        write!(f, "{}", name)
    }
}
